//! Configuration management for the CLI
//!
//! Centralizes the per-invocation settings and path resolution.

use crate::{cli::Args, error::CliError};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Directory that relative file and folder names are resolved against
    pub work_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            work_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let work_dir = std::env::current_dir()
            .map_err(|e| CliError::config("Unable to determine current directory", e))?;

        let config = Self {
            debug: args.debug,
            work_dir,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CliError> {
        if !self.work_dir.is_dir() {
            return Err(CliError::validation(format!(
                "Working directory not found: {}",
                self.work_dir.display()
            )));
        }

        Ok(())
    }

    /// Resolve a user supplied path against the working directory.
    ///
    /// Absolute paths are kept as given. The result is normalized lexically:
    /// `.` segments disappear and `..` removes the previous segment, stopping
    /// at the root. Symlinks are not followed.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        normalize(&self.work_dir.join(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
