//! Log setup for the provider process.
//!
//! Terraform owns stdout for the plugin handshake, so every layer writes to
//! stderr, where Terraform picks provider output up under `TF_LOG`.

use std::io;

pub use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

/// Environment variable holding an `EnvFilter` directive for this provider.
pub const LOG_FILTER_ENV: &str = "TF_LOG_PROVIDER_UNKEY";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human-readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Level used when no filter directive is given
    pub level: Level,
    /// Explicit filter directive, overriding [`LOG_FILTER_ENV`]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            level: Level::WARN,
            filter: None,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter: explicit directive, then [`LOG_FILTER_ENV`], then
    /// the configured level for the provider's own crates.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let directive = match &self.filter {
            Some(filter) => filter.clone(),
            None => std::env::var(LOG_FILTER_ENV).unwrap_or_else(|_| {
                let level = self.level.as_str().to_lowercase();
                format!("terraform_provider_unkey={level},unkey_client={level},unkey_tfsdk={level}")
            }),
        };

        EnvFilter::try_new(&directive)
            .map_err(|e| Error::configuration(format!("invalid log filter '{directive}': {e}")))
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`Error::Configuration`] when the filter directive is invalid or
/// a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter()?);

    let installed = match config.format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_ansi(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
    };
    installed.map_err(|e| Error::configuration(format!("failed to install logger: {e}")))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        format = ?config.format,
        "Logging initialized for terraform-provider-unkey"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert!("pretty".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_explicit_filter_wins() {
        let config = LoggingConfig {
            filter: Some("unkey_client=trace".into()),
            ..LoggingConfig::default()
        };
        let filter = config.env_filter().unwrap();
        assert_eq!(filter.to_string(), "unkey_client=trace");
    }

    #[test]
    fn test_env_filter_fallback() {
        temp_env::with_var(LOG_FILTER_ENV, Some("terraform_provider_unkey=debug"), || {
            let filter = LoggingConfig::default().env_filter().unwrap();
            assert_eq!(filter.to_string(), "terraform_provider_unkey=debug");
        });

        temp_env::with_var_unset(LOG_FILTER_ENV, || {
            let filter = LoggingConfig::default().env_filter().unwrap();
            assert!(filter.to_string().contains("unkey_client=warn"));
        });
    }

    #[test]
    fn test_invalid_filter_is_configuration_error() {
        let config = LoggingConfig {
            filter: Some("unkey_client=loud".into()),
            ..LoggingConfig::default()
        };
        assert!(matches!(
            config.env_filter(),
            Err(Error::Configuration { .. })
        ));
    }
}
