//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{
        greeting, prompt,
        system::SystemReport,
        workspace::{CreateOutcome, ReadOutcome, Workspace},
    },
    error::CliError,
};
use anyhow::Context;
use tracing::{debug, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Greet { name } => execute_greet_command(name),
        Command::Interact => execute_interact_command(),
        Command::Sysinfo => execute_sysinfo_command(),
        Command::Mkdir { folder_name } => execute_mkdir_command(config, folder_name),
        Command::Touch { file_name } => execute_touch_command(config, file_name),
        Command::Write { file_name, text } => execute_write_command(config, file_name, text),
        Command::Read { file_name } => execute_read_command(config, file_name),
    }
}

fn execute_greet_command(name: &str) -> anyhow::Result<()> {
    println!("{}", greeting::greeting(name));
    Ok(())
}

fn execute_interact_command() -> anyhow::Result<()> {
    let answer = prompt::ask("What is your name?").context("Failed to read your name")?;
    println!("{}", greeting::welcome(&answer));
    Ok(())
}

fn execute_sysinfo_command() -> anyhow::Result<()> {
    let report = SystemReport::collect();
    print!("{report}");
    Ok(())
}

#[instrument(skip(config))]
fn execute_mkdir_command(config: &Config, folder_name: &str) -> anyhow::Result<()> {
    let workspace = Workspace::new(config);
    let outcome = workspace
        .create_folder(folder_name)
        .context("Failed to create folder")?;

    match outcome {
        CreateOutcome::Created(path) => println!("✅ Folder created: {}", path.display()),
        CreateOutcome::AlreadyExists(path) => {
            println!("⚠️ Folder already exists: {}", path.display())
        }
    }
    Ok(())
}

#[instrument(skip(config))]
fn execute_touch_command(config: &Config, file_name: &str) -> anyhow::Result<()> {
    let workspace = Workspace::new(config);
    let outcome = workspace
        .create_file(file_name)
        .context("Failed to create file")?;

    match outcome {
        CreateOutcome::Created(path) => println!("✅ File created: {}", path.display()),
        CreateOutcome::AlreadyExists(path) => {
            println!("⚠️ File already exists: {}", path.display())
        }
    }
    Ok(())
}

/// Append failures are reported to the user and do not fail the process.
#[instrument(skip(config, text))]
fn execute_write_command(config: &Config, file_name: &str, text: &[String]) -> anyhow::Result<()> {
    let workspace = Workspace::new(config);
    match workspace.append_text(file_name, text) {
        Ok(path) => println!("➕ Appended text to file: {}", path.display()),
        Err(e) => {
            debug!("Append to {} failed: {:?}", file_name, e);
            eprintln!("❌ Failed to append: {}", reason(&e));
        }
    }
    Ok(())
}

/// Read failures are reported to the user and do not fail the process.
#[instrument(skip(config))]
fn execute_read_command(config: &Config, file_name: &str) -> anyhow::Result<()> {
    let workspace = Workspace::new(config);
    match workspace.read_text(file_name) {
        Ok(ReadOutcome::Found { contents, .. }) => {
            println!("📄 Contents of {file_name}:\n");
            println!("{contents}");
        }
        Ok(ReadOutcome::Missing(path)) => println!("❌ File not found: {}", path.display()),
        Err(e) => {
            debug!("Read of {} failed: {:?}", file_name, e);
            eprintln!("❌ Error reading file: {}", reason(&e));
        }
    }
    Ok(())
}

/// User facing reason for a failed file operation
fn reason(err: &CliError) -> String {
    match err {
        CliError::FileSystem { path, source, .. } => {
            debug!("Underlying I/O error kind: {:?}", source.kind());
            format!("{source} ({})", path.display())
        }
        _ => err.to_string(),
    }
}
