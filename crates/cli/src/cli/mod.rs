use std::sync::Arc;

use cardloyalty_client::{CardLoyaltyClient, LoyaltyService};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{ConnectionConfig, LoggingConfig, OutputFormat};

mod client;
mod clients;
mod orders;
mod ping;
mod sms;
mod tags;
mod templates;

#[derive(Debug, Parser)]
#[command(name = "cardloyalty", about = "CardLoyalty CLI", long_about = None)]
pub(crate) struct Cli {
    /// Loyalty service connection settings.
    #[command(flatten)]
    pub connection: ConnectionConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Output format (json, table)
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the access token
    Ping,

    /// Look up a client card
    Client(client::ClientArgs),

    /// List clients
    Clients(clients::ClientsArgs),

    /// Manage tags
    Tags(tags::TagsCommand),

    /// List card templates
    Templates,

    /// Inspect transactions
    Orders(orders::OrdersCommand),

    /// Send a client their card link by SMS
    Sms(sms::SmsArgs),
}

/// What every command runs against.
pub(crate) struct Context {
    service: LoyaltyService,
    output: OutputFormat,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let config = self.connection.client_config()?;

        debug!(base_url = %config.base_url, "connecting to loyalty service");

        let client = CardLoyaltyClient::new(config);

        let context = Context {
            service: LoyaltyService::new(Arc::new(client)),
            output: self.output,
        };

        match self.command {
            Commands::Ping => ping::run(&context).await,
            Commands::Client(args) => client::run(&context, args).await,
            Commands::Clients(args) => clients::run(&context, args).await,
            Commands::Tags(command) => tags::run(&context, command).await,
            Commands::Templates => templates::run(&context).await,
            Commands::Orders(command) => orders::run(&context, command).await,
            Commands::Sms(args) => sms::run(&context, args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_flag_is_global() {
        let cli = Cli::try_parse_from(["cardloyalty", "templates", "--output", "table"]);

        assert!(cli.is_ok_and(|cli| cli.output == OutputFormat::Table));
    }

    #[tokio::test]
    async fn unreachable_service_error_hides_token() -> testresult::TestResult {
        let cli = Cli::try_parse_from([
            "cardloyalty",
            "ping",
            "--token",
            "SUPERSECRET",
            "--base-url",
            "http://127.0.0.1:1/api/v2",
        ])?;

        let Err(error) = cli.run().await else {
            return Err("expected the ping to fail".into());
        };

        assert!(error.starts_with("failed to check token"), "unexpected error: {error}");
        assert!(!error.contains("SUPERSECRET"), "token leaked: {error}");

        Ok(())
    }
}
