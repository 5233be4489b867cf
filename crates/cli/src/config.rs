//! CLI configuration

use cardloyalty_client::{ClientConfig, DEFAULT_BASE_URL};
use clap::Args;

/// Loyalty service connection settings.
#[derive(Debug, Args)]
pub(crate) struct ConnectionConfig {
    /// API access token
    #[arg(long, env = "CARDLOYALTY_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// API root URL
    #[arg(
        long,
        env = "CARDLOYALTY_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,
}

impl ConnectionConfig {
    /// Build the client configuration, failing when no token was given.
    pub(crate) fn client_config(&self) -> Result<ClientConfig, String> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or("missing token: pass --token or set CARDLOYALTY_TOKEN")?;

        Ok(ClientConfig::new(token).with_base_url(&self.base_url))
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,

    /// Tables for lists, JSON otherwise.
    Table,
}
