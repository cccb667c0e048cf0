//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    layer::SubscriberExt,
    registry,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, logging::LoggingConfig};

const QUIET_DEPENDENCIES: &str = "h2=warn,hyper=warn,sqlx=warn";

/// Installs the global subscriber: an env filter over a compact or JSON formatter.
pub(crate) fn init_subscriber(config: &LoggingConfig) -> Result<(), TryInitError> {
    let format: Box<dyn Layer<Registry> + Send + Sync> = match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true)
            .boxed(),
    };

    registry()
        .with(format)
        .with(build_env_filter(&config.log_level))
        .try_init()
}

fn build_env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("{log_level},{QUIET_DEPENDENCIES}"))
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{QUIET_DEPENDENCIES}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiets_noisy_dependencies() {
        let filter = build_env_filter("debug").to_string();

        assert!(filter.contains("debug"), "requested level should be kept");
        assert!(filter.contains("sqlx=warn"), "sqlx should be capped at warn");
    }

    #[test]
    fn invalid_levels_fall_back_to_info() {
        let filter = build_env_filter("not a level=??").to_string();

        assert!(filter.contains("info"), "expected info fallback, got {filter}");
        assert!(!filter.contains("not a level"), "invalid directive leaked: {filter}");
    }
}
