//! CLI command implementations
//!
//! `serve` boots in a fixed order: resolve configuration, open the store
//! handle once, then hand it to the HTTP server for the life of the process.

use std::path::Path;

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::MongoStore;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_json;
use super::logging;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    logging::init();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(resolve_config(config.as_deref(), port)?),
        Command::CheckConfig { config } => check_config(&resolve_config(config.as_deref(), None)?),
    }
}

/// Resolve configuration: defaults, then file, then environment, then flags.
pub fn resolve_config(config_path: Option<&Path>, port: Option<u16>) -> CliResult<ServerConfig> {
    let config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    let mut config = config.apply_env()?;
    if let Some(port) = port {
        config.port = port;
    }
    Ok(config)
}

/// Print the resolved configuration with secrets redacted
pub fn check_config(config: &ServerConfig) -> CliResult<()> {
    write_json(&config.redacted())
}

/// Open the store and run the HTTP server until it fails.
///
/// Without a database URL the server still starts; every store-backed
/// request then answers 503.
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = open_store(&config).await?;
        HttpServer::new(config, store)
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

async fn open_store(config: &ServerConfig) -> CliResult<MongoStore> {
    match config.database_url.as_deref() {
        Some(url) => Ok(MongoStore::connect(url, &config.database_name).await?),
        None => {
            tracing::warn!("STORE_UNAVAILABLE: DATABASE_URL not set, store-backed requests will fail");
            Ok(MongoStore::disconnected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flag_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"port": 7000, "host": "127.0.0.1"}}"#).unwrap();

        let config = resolve_config(Some(file.path()), Some(9100)).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = resolve_config(Some(Path::new("/nonexistent/estate.json")), None).unwrap_err();
        assert_eq!(err.code(), "ESTATE_CLI_CONFIG_ERROR");
    }

    #[tokio::test]
    async fn test_store_without_url_is_disconnected() {
        let config = ServerConfig {
            database_url: None,
            ..Default::default()
        };
        let store = open_store(&config).await.unwrap();
        assert!(store.database_name().is_none());
    }
}
