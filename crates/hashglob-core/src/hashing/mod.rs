//! Hashing module: Workspace-bounded digest of matched files
//!
//! Resolves the trusted roots, classifies each candidate path,
//! folds eligible file digests into one overall digest and decides
//! the outcome of the run.

mod digest;
mod error;
mod filter;
mod roots;
mod run;

pub use digest::{file_digest, DigestAccumulator};
pub use error::HashFilesError;
pub use filter::{CandidateFilter, Verdict};
pub use roots::{resolve_roots, ResolvedRoot, RootResolutionError};
pub use run::{hash_candidates, HashRun};

#[cfg(test)]
mod tests;
