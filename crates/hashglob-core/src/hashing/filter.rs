//! Candidate classification

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ResolvedRoot;
use crate::config::HashOptions;

/// What the filter decided about one candidate path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Basename matched an exclude pattern
    Excluded,
    /// The path could not be resolved
    Unresolved,
    /// Resolved outside every root and outside files are not allowed
    Outside,
    /// Resolved to a directory
    Directory { outside: bool },
    /// To be hashed, through its resolved path
    Eligible { resolved: PathBuf, outside: bool },
}

impl Verdict {
    /// Whether the candidate resolved outside every trusted root
    #[must_use]
    pub fn is_outside(&self) -> bool {
        match self {
            Self::Outside => true,
            Self::Directory { outside } | Self::Eligible { outside, .. } => *outside,
            Self::Excluded | Self::Unresolved => false,
        }
    }

    /// Short label used in listings
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excluded => "excluded",
            Self::Unresolved => "unresolved",
            Self::Outside => "outside",
            Self::Directory { .. } => "directory",
            Self::Eligible { outside: true, .. } => "eligible (outside)",
            Self::Eligible { outside: false, .. } => "eligible",
        }
    }
}

/// Classifies candidates against the exclude patterns and trusted roots
#[derive(Debug)]
pub struct CandidateFilter<'a> {
    roots: &'a [ResolvedRoot],
    options: &'a HashOptions,
}

impl<'a> CandidateFilter<'a> {
    /// Create a filter over already resolved roots
    #[must_use]
    pub fn new(roots: &'a [ResolvedRoot], options: &'a HashOptions) -> Self {
        Self { roots, options }
    }

    /// Classify one candidate
    ///
    /// Checks run in order: exclusion on the basename, resolution,
    /// containment of the resolved path, then the directory check.
    #[must_use]
    pub fn classify(&self, candidate: &Path) -> Verdict {
        if self.is_excluded(candidate) {
            debug!("Exclude '{}' (pattern match).", candidate.display());
            return Verdict::Excluded;
        }

        let resolved = match std::fs::canonicalize(candidate) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(
                    "Could not read \"{}\". Please check symlinks and file access. Details: {}",
                    candidate.display(),
                    e
                );
                return Verdict::Unresolved;
            }
        };

        let outside = !self.contains(&resolved);
        if outside {
            if !self.options.allow_files_outside_workspace {
                debug!(
                    "Ignore '{}' since it is not under allowed workspace root(s).",
                    candidate.display()
                );
                return Verdict::Outside;
            }
            debug!(
                "Including '{}' from outside the workspace root(s) since outside files are allowed.",
                candidate.display()
            );
        }

        match std::fs::metadata(&resolved) {
            Ok(meta) if meta.is_dir() => {
                debug!("Skip directory '{}'.", candidate.display());
                Verdict::Directory { outside }
            }
            Ok(_) => Verdict::Eligible { resolved, outside },
            Err(e) => {
                warn!("Could not stat \"{}\": {}", resolved.display(), e);
                Verdict::Unresolved
            }
        }
    }

    fn is_excluded(&self, candidate: &Path) -> bool {
        candidate
            .file_name()
            .is_some_and(|name| self.options.is_excluded(&name.to_string_lossy()))
    }

    fn contains(&self, resolved: &Path) -> bool {
        self.roots.iter().any(|root| root.contains(resolved))
    }
}
