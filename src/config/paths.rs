//! Path resolution for tasklang configuration files.
//!
//! All tasklang files live in `~/.tasklang/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::TaskError;

/// Paths to tasklang configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tasklang/`
    pub root: PathBuf,
    /// Config file: `~/.tasklang/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskError> {
        let home = std::env::var("HOME")
            .map_err(|_| TaskError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tasklang")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }

    /// Create the root directory if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}
