//! Folder and file operations relative to the working directory
//!
//! Each operation resolves the user supplied name first, then performs a
//! single file system step. Pre-existing targets are reported, not treated
//! as failures.

use crate::{
    config::Config,
    error::{CliError, Result},
    utils::fs::FileSystemUtils,
};
use std::{io, path::PathBuf};
use tracing::{debug, info, instrument};

/// Outcome of a create operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Nothing existed at the path and it was created
    Created(PathBuf),
    /// Something already existed at the path and was left alone
    AlreadyExists(PathBuf),
}

/// Outcome of a read operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Found { path: PathBuf, contents: String },
    Missing(PathBuf),
}

/// File operations scoped to the configured working directory
#[derive(Debug)]
pub struct Workspace<'a> {
    config: &'a Config,
    fs_utils: FileSystemUtils,
}

impl<'a> Workspace<'a> {
    /// Create a workspace over the configured working directory
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Create a folder unless the path is already taken
    #[instrument(skip(self))]
    pub fn create_folder(&self, name: &str) -> Result<CreateOutcome> {
        let path = self.config.resolve(name);
        if self.fs_utils.exists(&path) {
            debug!("Path already present: {}", path.display());
            return Ok(CreateOutcome::AlreadyExists(path));
        }

        match self.fs_utils.create_dir(&path) {
            Ok(()) => {
                info!("Created folder {}", path.display());
                Ok(CreateOutcome::Created(path))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::AlreadyExists(path))
            }
            Err(e) => Err(CliError::file_system("create folder", path, e)),
        }
    }

    /// Create an empty file unless the path is already taken
    #[instrument(skip(self))]
    pub fn create_file(&self, name: &str) -> Result<CreateOutcome> {
        let path = self.config.resolve(name);
        if self.fs_utils.exists(&path) {
            debug!("Path already present: {}", path.display());
            return Ok(CreateOutcome::AlreadyExists(path));
        }

        match self.fs_utils.create_empty_file(&path) {
            Ok(()) => {
                info!("Created file {}", path.display());
                Ok(CreateOutcome::Created(path))
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Ok(CreateOutcome::AlreadyExists(path))
            }
            Err(e) => Err(CliError::file_system("create file", path, e)),
        }
    }

    /// Join `words` with single spaces and append them as one line
    #[instrument(skip(self, words))]
    pub fn append_text<S: AsRef<str>>(&self, name: &str, words: &[S]) -> Result<PathBuf> {
        let path = self.config.resolve(name);
        let line = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        self.fs_utils
            .append_line(&path, &line)
            .map_err(|e| CliError::file_system("append", &path, e))?;
        Ok(path)
    }

    /// Read a whole file as text, replacing invalid UTF-8
    #[instrument(skip(self))]
    pub fn read_text(&self, name: &str) -> Result<ReadOutcome> {
        let path = self.config.resolve(name);
        if !self.fs_utils.exists(&path) {
            return Ok(ReadOutcome::Missing(path));
        }

        let contents = self
            .fs_utils
            .read_file_to_string(&path)
            .map_err(|e| CliError::file_system("read", &path, e))?;
        Ok(ReadOutcome::Found { path, contents })
    }
}
