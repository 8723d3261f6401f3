//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Open the document store and serve the HTTP API
//! - check-config: Print the resolved configuration

mod args;
mod commands;
mod errors;
mod io;
mod logging;

pub use args::{Cli, Command};
pub use commands::{check_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::{write_json, write_json_to};
