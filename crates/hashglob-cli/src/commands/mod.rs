//! CLI commands

pub mod hash;
pub mod list;
pub mod types;

pub use types::HashArgs;
