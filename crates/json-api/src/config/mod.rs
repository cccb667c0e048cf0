//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, logging::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;

pub(crate) use logging::LogFormat;

/// Autos JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "autos-json", about = "Autos JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network and HTTP settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging and request tracing settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["autos-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.server.cors_allow_origin, "*");
        assert!(config.server.static_dir.is_none());
        assert!(!config.database.run_migrations);
        assert_eq!(config.logging.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "autos-json",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--static-dir",
            "public",
            "--database-url",
            "postgres://db:5432/autos",
            "--run-migrations",
            "--log-format",
            "json",
            "--slow-request-threshold-ms",
            "250",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert_eq!(
            config.server.static_dir.as_deref(),
            Some(std::path::Path::new("public"))
        );
        assert_eq!(config.database.database_url, "postgres://db:5432/autos");
        assert!(config.database.run_migrations);
        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(config.logging.slow_request_threshold_ms, 250);

        Ok(())
    }
}
