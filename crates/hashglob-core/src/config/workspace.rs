//! Workspace detection for the default trusted root

use std::path::{Path, PathBuf};

/// Environment variable naming the workspace directory
pub const WORKSPACE_ENV: &str = "GITHUB_WORKSPACE";

/// The directory trusted when no explicit roots are configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    /// Create a workspace from a known path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Pick the workspace from explicit inputs
    ///
    /// The current workspace wins when non-empty, then the environment
    /// value, then the process working directory.
    ///
    /// # Errors
    /// Returns an error if the working directory is needed and unavailable.
    pub fn resolve(current: &str, env_value: Option<&str>) -> std::io::Result<Self> {
        if !current.is_empty() {
            return Ok(Self::new(current));
        }
        match env_value.filter(|value| !value.is_empty()) {
            Some(value) => Ok(Self::new(value)),
            None => std::env::current_dir().map(Self::new),
        }
    }

    /// Pick the workspace, reading [`WORKSPACE_ENV`] from the environment
    ///
    /// # Errors
    /// Returns an error if the working directory is needed and unavailable.
    pub fn detect(current: &str) -> std::io::Result<Self> {
        let env_value = std::env::var(WORKSPACE_ENV).ok();
        Self::resolve(current, env_value.as_deref())
    }

    /// Get the workspace directory
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
