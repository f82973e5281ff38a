//! Trusted root resolution and containment

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A trusted root that could not be canonicalized
#[derive(Debug, Error)]
#[error("Could not resolve root {}: {source}", .root.display())]
pub struct RootResolutionError {
    pub root: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A trusted root in canonical (symlink-free, absolute) form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoot {
    path: PathBuf,
}

impl ResolvedRoot {
    /// Canonicalize a configured root
    ///
    /// # Errors
    /// Returns an error if the root does not exist or cannot be resolved.
    pub fn resolve(root: &Path) -> Result<Self, RootResolutionError> {
        std::fs::canonicalize(root)
            .map(|path| Self { path })
            .map_err(|source| RootResolutionError {
                root: root.to_path_buf(),
                source,
            })
    }

    /// Check whether an already resolved path lies inside this root
    ///
    /// Comparison is per component, so `/a` contains `/a` and `/a/b`
    /// but never `/ab`.
    #[must_use]
    pub fn contains(&self, resolved: &Path) -> bool {
        resolved.starts_with(&self.path)
    }

    /// Get the canonical root path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve every configured root, in order
///
/// # Errors
/// Returns the first root that cannot be resolved.
pub fn resolve_roots(roots: &[PathBuf]) -> Result<Vec<ResolvedRoot>, RootResolutionError> {
    roots.iter().map(|root| ResolvedRoot::resolve(root)).collect()
}
