//! estate-api entry point
//!
//! Parses arguments and hands off to the CLI module; all boot logic lives
//! there.

use anyhow::Context;
use estate_api::cli;

fn main() -> anyhow::Result<()> {
    cli::run().context("estate-api exited with an error")
}
