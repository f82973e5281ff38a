//! Config module: Hashing options and workspace defaults
//!
//! Holds the caller-facing configuration for a hashing run. The options
//! are parsed once (exclude patterns included) and the default root is
//! decided here, so the hashing run never reads the environment itself.

mod options;
mod workspace;

pub use options::{ConfigError, ExcludePattern, HashOptions};
pub use workspace::{Workspace, WORKSPACE_ENV};
