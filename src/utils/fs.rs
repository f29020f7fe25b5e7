//! File system utility functions
//!
//! Provides the primitive file operations behind the folder and file commands.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, instrument};

/// Utility struct for file system operations
#[derive(Debug)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    pub fn new() -> Self {
        Self
    }

    /// Check whether anything (file, directory or link target) exists at a path
    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        path.as_ref().exists()
    }

    /// Create a single directory. The parent must already exist.
    #[instrument(skip(self))]
    pub fn create_dir<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir(path)
    }

    /// Create an empty file, failing with `AlreadyExists` if the path is taken
    #[instrument(skip(self))]
    pub fn create_empty_file<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Creating empty file: {}", path.display());
        OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(())
    }

    /// Append a line to a file, creating the file if needed.
    ///
    /// A trailing newline is always written after `line`.
    #[instrument(skip(self, line))]
    pub fn append_line<P: AsRef<Path> + std::fmt::Debug>(&self, path: P, line: &str) -> io::Result<()> {
        let path = path.as_ref();
        debug!("Appending {} bytes to: {}", line.len() + 1, path.display());

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())?;
        file.flush()
    }

    /// Read file contents as text.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing.
    #[instrument(skip(self))]
    pub fn read_file_to_string<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<String> {
        let path = path.as_ref();
        debug!("Reading file: {}", path.display());
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Default for FileSystemUtils {
    fn default() -> Self {
        Self::new()
    }
}
