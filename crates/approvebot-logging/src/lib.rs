//! Log configuration.

use std::str::FromStr;

use approvebot_config::Config;
use thiserror::Error;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_error::ErrorLayer;
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

const DEFAULT_ENV_CONFIG: &str = "info";
const DEBUG_ENV_CONFIG: &str = "info,approvebot=debug,approvebot_core=debug,approvebot_ghapi_github=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(
        "Could not set tracing global default subscriber,\n  caused by: {}",
        source
    )]
    TracingSetGlobalDefaultError {
        source: tracing::dispatcher::SetGlobalDefaultError,
    },
    #[error("Could not initialize tracing log tracer,\n  caused by: {}", source)]
    TracingLogTracerError {
        source: tracing_log::log::SetLoggerError,
    },
    #[error(
        "Wrong env filter configuration: {}\n  caused by: {}",
        configuration,
        source
    )]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

/// Pick the filter directives, `RUST_LOG` always wins.
fn filter_directives(rust_log: Option<String>, debug: bool) -> String {
    rust_log.unwrap_or_else(|| {
        if debug {
            DEBUG_ENV_CONFIG.to_string()
        } else {
            DEFAULT_ENV_CONFIG.to_string()
        }
    })
}

/// Configure logging.
///
/// Logs go to stderr so stdout only carries the per-pull-request outcomes.
pub fn configure_logging(config: &Config) -> Result<(), LoggingError> {
    LogTracer::init().map_err(|e| LoggingError::TracingLogTracerError { source: e })?;

    let log_config = filter_directives(std::env::var("RUST_LOG").ok(), config.debug);
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();

    let filter_layer = EnvFilter::from_str(&log_config).map_err(|e| {
        LoggingError::EnvFilterConfigurationError {
            source: e,
            configuration: log_config,
        }
    })?;
    let hierarchical_layer = {
        if config.logging.use_bunyan {
            None
        } else {
            Some(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
        }
    };
    let error_layer = ErrorLayer::default();
    let json_storage_layer = {
        if config.logging.use_bunyan {
            Some(JsonStorageLayer)
        } else {
            None
        }
    };
    let bunyan_layer = {
        if config.logging.use_bunyan {
            Some(BunyanFormattingLayer::new(app_name, std::io::stderr))
        } else {
            None
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(error_layer)
        .with(hierarchical_layer)
        .with(filter_layer)
        .with(json_storage_layer)
        .with(bunyan_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_filter_directives() {
        assert_eq!(filter_directives(None, false), DEFAULT_ENV_CONFIG);
        assert_eq!(filter_directives(None, true), DEBUG_ENV_CONFIG);
        assert_eq!(filter_directives(Some("warn".into()), true), "warn");
    }

    #[test]
    fn test_directives_are_valid() {
        EnvFilter::from_str(DEFAULT_ENV_CONFIG).unwrap();
        EnvFilter::from_str(DEBUG_ENV_CONFIG).unwrap();
    }
}
