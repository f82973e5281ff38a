//! Globber: Lazily walks search roots and yields matching paths

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use super::{GlobError, GlobPattern};

/// Matcher over a list of glob patterns
#[derive(Debug, Clone)]
pub struct Globber {
    patterns: Vec<GlobPattern>,
    follow_symbolic_links: bool,
}

impl Globber {
    /// Parse newline-separated patterns, anchoring relative ones at the
    /// current directory
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid or the current directory
    /// is unavailable.
    pub fn new(patterns: &str) -> Result<Self, GlobError> {
        let base = std::env::current_dir().map_err(GlobError::CurrentDir)?;
        Self::with_base(patterns, &base)
    }

    /// Parse newline-separated patterns, anchoring relative ones at `base`
    ///
    /// # Errors
    /// Returns an error if a pattern is invalid.
    pub fn with_base(patterns: &str, base: &Path) -> Result<Self, GlobError> {
        let mut parsed = Vec::new();
        for line in patterns.lines() {
            if let Some(pattern) = GlobPattern::parse(line, base)? {
                parsed.push(pattern);
            }
        }
        Ok(Self {
            patterns: parsed,
            follow_symbolic_links: true,
        })
    }

    /// Set whether symlinked directories are descended
    #[must_use]
    pub fn follow_symbolic_links(mut self, follow: bool) -> Self {
        self.follow_symbolic_links = follow;
        self
    }

    /// Get the parsed patterns
    #[must_use]
    pub fn patterns(&self) -> &[GlobPattern] {
        &self.patterns
    }

    /// Directories to walk, in pattern order, with nested ones dropped
    #[must_use]
    pub fn search_roots(&self) -> Vec<PathBuf> {
        let mut roots: Vec<PathBuf> = Vec::new();
        for pattern in self.patterns.iter().filter(|p| !p.is_negated()) {
            let root = pattern.search_root();
            if roots.iter().any(|kept| root.starts_with(kept)) {
                continue;
            }
            roots.retain(|kept| !kept.starts_with(root));
            roots.push(root.to_path_buf());
        }
        roots
    }

    /// Check a path against all patterns; the last matching pattern wins
    #[must_use]
    pub fn is_match(&self, path: &Path) -> bool {
        self.patterns.iter().fold(false, |matched, pattern| {
            if pattern.is_negated() {
                matched && !pattern.matches(path)
            } else {
                matched || pattern.matches(path)
            }
        })
    }

    /// Lazily yield every matching path, depth-first and sorted by name
    /// within each directory
    pub fn glob(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.search_roots()
            .into_iter()
            .flat_map(move |root| self.walk(root))
            .filter(move |path| self.is_match(path))
    }

    fn walk(&self, root: PathBuf) -> Box<dyn Iterator<Item = PathBuf>> {
        let meta = match std::fs::symlink_metadata(&root) {
            Ok(meta) => meta,
            Err(_) => {
                debug!("Search path '{}' does not exist", root.display());
                return Box::new(std::iter::empty());
            }
        };
        if meta.file_type().is_symlink() && !self.follow_symbolic_links {
            return Box::new(std::iter::once(root));
        }

        let walker = WalkBuilder::new(&root)
            .standard_filters(false)
            .hidden(false)
            .follow_links(self.follow_symbolic_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();
        Box::new(walker.filter_map(|entry| match entry {
            Ok(entry) => Some(entry.into_path()),
            Err(e) => {
                warn!("Skipping entry during glob: {}", e);
                None
            }
        }))
    }
}
