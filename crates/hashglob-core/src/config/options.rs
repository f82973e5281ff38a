//! Hash options and exclude patterns

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::Workspace;

/// Errors that can occur while loading options
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read options file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid options: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A basename filter, decided once when the option is loaded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ExcludePattern {
    /// Matches a basename exactly
    Exact(String),
    /// Matches any basename ending with the suffix (`*.log` keeps `.log`)
    Suffix(String),
}

impl ExcludePattern {
    /// Parse a raw exclude pattern
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('*') {
            Some(suffix) if suffix.starts_with('.') => Self::Suffix(suffix.to_string()),
            _ => Self::Exact(raw.to_string()),
        }
    }

    /// Check whether a basename is excluded by this pattern
    #[must_use]
    pub fn matches(&self, basename: &str) -> bool {
        match self {
            Self::Exact(name) => basename == name,
            Self::Suffix(suffix) => basename.ends_with(suffix.as_str()),
        }
    }
}

impl From<String> for ExcludePattern {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for ExcludePattern {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for ExcludePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(name) => write!(f, "{name}"),
            Self::Suffix(suffix) => write!(f, "*{suffix}"),
        }
    }
}

/// Options for a hashing run
///
/// Field names follow the camelCase spelling used by options files,
/// e.g. `{"roots": ["/repo"], "exclude": ["*.log"]}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HashOptions {
    /// Whether the matcher descends into symlinked directories
    pub follow_symbolic_links: bool,
    /// Trusted roots; `None` means the workspace alone
    pub roots: Option<Vec<PathBuf>>,
    /// Hash files that resolve outside every root instead of failing
    #[serde(alias = "allowOutsideWorkspace")]
    pub allow_files_outside_workspace: bool,
    /// Basename filters applied before any filesystem access
    pub exclude: Vec<ExcludePattern>,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            follow_symbolic_links: true,
            roots: None,
            allow_files_outside_workspace: false,
            exclude: Vec::new(),
        }
    }
}

impl HashOptions {
    /// Parse options from a JSON document
    ///
    /// # Errors
    /// Returns an error if the document is not valid options JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Set the trusted roots
    #[must_use]
    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = Some(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Add exclude patterns
    #[must_use]
    pub fn with_exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude
            .extend(patterns.into_iter().map(|p| ExcludePattern::parse(p.as_ref())));
        self
    }

    /// Allow or deny files outside the trusted roots
    #[must_use]
    pub fn allow_outside_workspace(mut self, allow: bool) -> Self {
        self.allow_files_outside_workspace = allow;
        self
    }

    /// Set whether the matcher follows symbolic links
    #[must_use]
    pub fn follow_symbolic_links(mut self, follow: bool) -> Self {
        self.follow_symbolic_links = follow;
        self
    }

    /// Roots to trust for this run, falling back to the workspace
    #[must_use]
    pub fn effective_roots(&self, workspace: &Workspace) -> Vec<PathBuf> {
        match &self.roots {
            Some(roots) => roots.clone(),
            None => vec![workspace.path().to_path_buf()],
        }
    }

    /// Check whether a basename is excluded by any pattern
    #[must_use]
    pub fn is_excluded(&self, basename: &str) -> bool {
        self.exclude.iter().any(|pattern| pattern.matches(basename))
    }
}
