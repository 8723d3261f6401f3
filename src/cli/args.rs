//! CLI argument definitions using clap
//!
//! Commands:
//! - estate-api serve [--config <path>] [--port <port>]
//! - estate-api check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// estate-api - REST backend for a real-estate listing site
#[derive(Parser, Debug)]
#[command(name = "estate-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config file and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the resolved configuration and exit
    CheckConfig {
        /// Optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_with_port() {
        let cli = Cli::try_parse_from(["estate-api", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_config_with_file() {
        let cli = Cli::try_parse_from(["estate-api", "check-config", "--config", "estate.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::CheckConfig { config: Some(path) } if path == PathBuf::from("estate.json")
        ));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["estate-api"]).is_err());
    }
}
