//! JSON output for CLI commands
//!
//! One pretty-printed JSON document per command, on stdout.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as JSON to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    write_json_to(value, &mut io::stdout().lock())
}

/// Write a value as JSON to `writer`
pub fn write_json_to<T: Serialize, W: Write>(value: &T, writer: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
