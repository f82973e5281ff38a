//! Scanner module: Glob pattern matching and file discovery
//!
//! Turns newline-separated glob patterns into a lazy, depth-first
//! sequence of matching paths, optionally following symbolic links.

mod pattern;
mod walker;

pub use pattern::{GlobError, GlobPattern};
pub use walker::Globber;

#[cfg(test)]
mod tests;
