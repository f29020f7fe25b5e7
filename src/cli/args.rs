//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};

/// A simple CLI tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "mycli")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Greet someone
    Greet {
        /// Name of the person to greet
        name: String,
    },

    /// Start interactive mode
    Interact,

    /// Display system information
    Sysinfo,

    /// Create a new folder
    Mkdir {
        /// Folder to create, relative to the current directory
        #[arg(value_name = "folderName")]
        folder_name: String,
    },

    /// Create a new file
    Touch {
        /// File to create, relative to the current directory
        #[arg(value_name = "fileName")]
        file_name: String,
    },

    /// Append text to a file, creating it if missing
    Write {
        /// File to append to, relative to the current directory
        #[arg(value_name = "fileName")]
        file_name: String,

        /// Words to write, joined with single spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Read and display content from a file
    Read {
        /// File to read, relative to the current directory
        #[arg(value_name = "fileName")]
        file_name: String,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
