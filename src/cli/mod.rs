//! Command-line interface module
//!
//! This module provides the CLI for isodur:
//!
//! - `isodur parse` - Parse a duration and print its normalized fields
//! - `isodur check` - Validate one or more durations

mod commands;

pub use commands::{run, Cli, CliError, Commands};
