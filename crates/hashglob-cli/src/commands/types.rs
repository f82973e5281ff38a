//! Command types shared between main and library

use std::path::PathBuf;

use clap::Args;
use hashglob_core::config::{ConfigError, WORKSPACE_ENV};
use hashglob_core::{HashOptions, Workspace};

/// Pattern and option arguments shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct HashArgs {
    /// Glob patterns (an argument may hold several newline-separated patterns)
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Workspace used as the trusted root when no --root is given
    /// (the only place `GITHUB_WORKSPACE` is read)
    #[arg(long, env = WORKSPACE_ENV)]
    pub workspace: Option<String>,

    /// Trusted root directory (repeatable)
    #[arg(long = "root")]
    pub roots: Vec<PathBuf>,

    /// Basename or `*.ext` pattern to skip (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Hash files resolving outside the trusted roots instead of failing
    #[arg(long)]
    pub allow_outside_workspace: bool,

    /// Do not descend into symlinked directories while matching
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// JSON options file; command-line flags are applied on top
    #[arg(long)]
    pub options: Option<PathBuf>,
}

impl HashArgs {
    /// All patterns joined into one newline-separated list
    #[must_use]
    pub fn patterns(&self) -> String {
        self.patterns.join("\n")
    }

    /// The workspace argument, empty when unset
    #[must_use]
    pub fn workspace(&self) -> &str {
        self.workspace.as_deref().unwrap_or_default()
    }

    /// Build hash options from the options file and flags
    ///
    /// # Errors
    /// Returns an error if the options file cannot be loaded.
    pub fn to_options(&self) -> Result<HashOptions, ConfigError> {
        let mut options = match &self.options {
            Some(path) => HashOptions::load(path)?,
            None => HashOptions::default(),
        };
        if !self.roots.is_empty() {
            options = options.with_roots(self.roots.iter().cloned());
        }
        options = options.with_exclude(&self.exclude);
        if self.allow_outside_workspace {
            options = options.allow_outside_workspace(true);
        }
        if self.no_follow_symlinks {
            options = options.follow_symbolic_links(false);
        }
        Ok(options)
    }

    /// Trusted roots: `--root`/options-file roots, else the workspace
    /// argument, else the working directory
    ///
    /// # Errors
    /// Returns an error if the working directory is needed and unavailable.
    pub fn trusted_roots(&self, options: &HashOptions) -> std::io::Result<Vec<PathBuf>> {
        if let Some(roots) = &options.roots {
            return Ok(roots.clone());
        }
        let workspace = Workspace::resolve(self.workspace(), None)?;
        Ok(options.effective_roots(&workspace))
    }
}
