//! Command-line interface module.
//!
//! Provides argument parsing, option resolution and command handling.

pub mod args;
pub mod commands;
mod options;

pub use args::Args;
pub use options::{resolve, UsageError};
