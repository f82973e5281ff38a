//! Hash command: Print the digest of the matched files

use anyhow::Result;
use hashglob_core::{hash_candidates, Globber};
use tracing::{info, warn};

use super::HashArgs;

/// Run the hash command
///
/// Prints the hex digest, or an empty line when nothing matched or a
/// trusted root cannot be resolved.
///
/// # Errors
/// Returns an error if the options are invalid, files outside the
/// trusted roots were matched, or a file cannot be read.
pub fn run(args: &HashArgs) -> Result<()> {
    let options = args.to_options()?;
    let globber =
        Globber::new(&args.patterns())?.follow_symbolic_links(options.follow_symbolic_links);

    let digest = match args.trusted_roots(&options) {
        Ok(roots) => hash_candidates(globber.glob(), &roots, &options)?,
        Err(e) => {
            warn!("Could not check workspace location: {}", e);
            None
        }
    };

    match digest {
        Some(digest) => {
            info!("✓ Hashed files matching {} pattern(s)", args.patterns.len());
            println!("{digest}");
        }
        None => {
            info!("No files to hash");
            println!();
        }
    }
    Ok(())
}
