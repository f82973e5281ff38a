//! A single hashing run over a candidate sequence

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{resolve_roots, CandidateFilter, DigestAccumulator, HashFilesError, ResolvedRoot, Verdict};
use crate::config::HashOptions;

/// Mutable state of one run: the filter, the running digest and
/// every candidate found outside the trusted roots
#[derive(Debug)]
pub struct HashRun<'a> {
    filter: CandidateFilter<'a>,
    allow_outside: bool,
    digest: DigestAccumulator,
    outside: Vec<PathBuf>,
}

impl<'a> HashRun<'a> {
    /// Start a run over resolved roots
    #[must_use]
    pub fn new(roots: &'a [ResolvedRoot], options: &'a HashOptions) -> Self {
        Self {
            filter: CandidateFilter::new(roots, options),
            allow_outside: options.allow_files_outside_workspace,
            digest: DigestAccumulator::new(),
            outside: Vec::new(),
        }
    }

    /// Classify one candidate and hash it if eligible
    ///
    /// # Errors
    /// Returns an error if an eligible file cannot be read.
    pub fn process(&mut self, candidate: &Path) -> Result<(), HashFilesError> {
        debug!("Processing file: {}", candidate.display());

        let verdict = self.filter.classify(candidate);
        if verdict.is_outside() {
            self.outside.push(candidate.to_path_buf());
        }

        if let Verdict::Eligible { resolved, .. } = verdict {
            self.digest
                .fold_file(&resolved)
                .map_err(|source| HashFilesError::Read {
                    path: candidate.to_path_buf(),
                    source,
                })?;
            debug!(
                "File hashed: {} (count: {})",
                candidate.display(),
                self.digest.files()
            );
        }
        Ok(())
    }

    /// Number of files hashed so far
    #[must_use]
    pub fn files(&self) -> usize {
        self.digest.files()
    }

    /// Candidates found outside every trusted root so far
    #[must_use]
    pub fn outside(&self) -> &[PathBuf] {
        &self.outside
    }

    /// Decide the outcome of the run
    ///
    /// # Errors
    /// Returns [`HashFilesError::OutsideWorkspace`] with every offending
    /// path when files outside the roots were found and not allowed.
    pub fn finish(self) -> Result<Option<String>, HashFilesError> {
        if !self.allow_outside && !self.outside.is_empty() {
            return Err(HashFilesError::OutsideWorkspace {
                files: self.outside,
            });
        }

        let files = self.digest.files();
        match self.digest.finalize_hex() {
            Some(hex) => {
                info!("Found {} files to hash.", files);
                Ok(Some(hex))
            }
            None => {
                info!("No matches found for glob");
                Ok(None)
            }
        }
    }
}

/// Hash a sequence of candidate paths against the given trusted roots
///
/// Returns `Ok(None)` when no file is eligible, including when any
/// root cannot be resolved.
///
/// # Errors
/// Returns an error if out-of-root files are found without the opt-in,
/// or if an eligible file cannot be read.
pub fn hash_candidates<I>(
    candidates: I,
    roots: &[PathBuf],
    options: &HashOptions,
) -> Result<Option<String>, HashFilesError>
where
    I: IntoIterator<Item = PathBuf>,
{
    let resolved = match resolve_roots(roots) {
        Ok(resolved) => resolved,
        Err(e) => {
            warn!("Could not check workspace location: {}", e);
            return Ok(None);
        }
    };
    debug!(
        "Resolved roots: {:?}",
        resolved.iter().map(ResolvedRoot::path).collect::<Vec<_>>()
    );

    let mut run = HashRun::new(&resolved, options);
    for candidate in candidates {
        run.process(&candidate)?;
    }

    if !run.outside().is_empty() {
        debug!("Files outside root(s): {:?}", run.outside());
    }
    run.finish()
}
