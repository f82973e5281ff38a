//! List command: Show how each matched path would be treated

use std::path::PathBuf;

use anyhow::{Context, Result};
use hashglob_core::hashing::{resolve_roots, CandidateFilter, Verdict};
use hashglob_core::Globber;
use tracing::info;

use super::HashArgs;

/// Classify every matched path without hashing anything
///
/// Unlike the hash command, which reports an empty result, an
/// unresolvable trusted root is an error here: a listing against a
/// missing root would only show every path as outside.
///
/// # Errors
/// Returns an error if the options or patterns are invalid, or if a
/// trusted root cannot be resolved.
pub fn classify(args: &HashArgs) -> Result<Vec<(PathBuf, Verdict)>> {
    let options = args.to_options()?;
    let roots = args
        .trusted_roots(&options)
        .context("Could not determine the workspace")?;
    let resolved = resolve_roots(&roots)?;

    let globber =
        Globber::new(&args.patterns())?.follow_symbolic_links(options.follow_symbolic_links);
    let filter = CandidateFilter::new(&resolved, &options);

    Ok(globber
        .glob()
        .map(|candidate| {
            let verdict = filter.classify(&candidate);
            (candidate, verdict)
        })
        .collect())
}

/// Run the list command
///
/// # Errors
/// Returns an error if classification fails.
pub fn run(args: &HashArgs) -> Result<()> {
    let verdicts = classify(args)?;

    for (path, verdict) in &verdicts {
        println!("{}\t{}", verdict.label(), path.display());
    }

    let eligible = verdicts
        .iter()
        .filter(|(_, verdict)| matches!(verdict, Verdict::Eligible { .. }))
        .count();
    info!("{} of {} matched paths would be hashed", eligible, verdicts.len());
    Ok(())
}
