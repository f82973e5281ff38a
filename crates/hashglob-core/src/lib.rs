//! hashglob-core: Workspace-bounded file fingerprinting
//!
//! Computes one SHA-256 digest over the files matched by glob patterns,
//! suitable as a cache key. Every matched path is resolved through its
//! symlinks and must land inside a trusted root; files outside the roots
//! fail the run unless explicitly allowed.
//!
//! The digest is a digest of digests: each file is hashed on its own and
//! the raw per-file digests are fed, in match order, into the overall one.
//!
//! ```no_run
//! use hashglob_core::{hash_files, HashOptions};
//!
//! let options = HashOptions::default().with_exclude(["*.log"]);
//! let _key = hash_files("**/Cargo.lock", "/path/to/repo", &options)?;
//! # Ok::<(), hashglob_core::HashFilesError>(())
//! ```

pub mod config;
pub mod hashing;
pub mod scanner;

use tracing::{debug, warn};

// Re-export commonly used types
pub use config::{ExcludePattern, HashOptions, Workspace};
pub use hashing::{hash_candidates, HashFilesError};
pub use scanner::Globber;

/// Hash every file matched by newline-separated `patterns`
///
/// Without explicit roots, the trusted root is `current_workspace`, or
/// when that is empty the `GITHUB_WORKSPACE` environment value, or the
/// process working directory. Returns `Ok(None)` when nothing was hashed.
///
/// # Errors
/// Returns an error if a pattern is invalid, if files outside the roots
/// are matched without `allow_files_outside_workspace`, or if a matched
/// file cannot be read.
pub fn hash_files(
    patterns: &str,
    current_workspace: &str,
    options: &HashOptions,
) -> Result<Option<String>, HashFilesError> {
    let globber = Globber::new(patterns)?.follow_symbolic_links(options.follow_symbolic_links);

    let roots = match &options.roots {
        Some(roots) => roots.clone(),
        None => match Workspace::detect(current_workspace) {
            Ok(workspace) => options.effective_roots(&workspace),
            Err(e) => {
                warn!("Could not check workspace location: {}", e);
                return Ok(None);
            }
        },
    };
    debug!(
        "roots: {:?}, allowOutside: {}, exclude: {:?}",
        roots, options.allow_files_outside_workspace, options.exclude
    );

    hash_candidates(globber.glob(), &roots, options)
}
