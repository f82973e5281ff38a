//! hashglob-cli library
//!
//! This module exposes the internal functionality of hashglob-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub use commands::types::HashArgs;
