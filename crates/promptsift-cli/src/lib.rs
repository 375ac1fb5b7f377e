//! promptsift CLI library.
//!
//! This library provides the core functionality for the promptsift command-line
//! interface, including argument parsing, configuration loading, command
//! execution, and status formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, EXAMPLE, USAGE};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
