//! Digest-of-digests accumulation

use std::fs::File;
use std::path::Path;

use sha2::digest::Output;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a single file, streaming its content
///
/// # Errors
/// Returns an error if the file cannot be opened or read.
pub fn file_digest(path: &Path) -> std::io::Result<Output<Sha256>> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize())
}

/// Running digest over per-file digests, in the order files are folded
#[derive(Debug, Clone, Default)]
pub struct DigestAccumulator {
    overall: Sha256,
    files: usize,
}

impl DigestAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash one file and fold its raw digest bytes into the running digest
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn fold_file(&mut self, path: &Path) -> std::io::Result<()> {
        let digest = file_digest(path)?;
        self.fold_digest(&digest);
        Ok(())
    }

    /// Fold an already computed file digest
    pub fn fold_digest(&mut self, digest: &[u8]) {
        self.overall.update(digest);
        self.files += 1;
    }

    /// Number of files folded so far
    #[must_use]
    pub fn files(&self) -> usize {
        self.files
    }

    /// Finalize to lowercase hex, or `None` if nothing was folded
    #[must_use]
    pub fn finalize_hex(self) -> Option<String> {
        (self.files > 0).then(|| format!("{:x}", self.overall.finalize()))
    }
}
