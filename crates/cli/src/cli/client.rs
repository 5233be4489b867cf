use cardloyalty_client::ClientLookup;
use clap::Args;

use crate::output::print_value;

use super::Context;

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub(crate) struct ClientArgs {
    /// Internal client id
    #[arg(long)]
    client_id: Option<i64>,

    /// Printed card number
    #[arg(long)]
    card_number: Option<String>,

    /// Card token or barcode
    #[arg(long)]
    card_barcode: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,
}

impl ClientArgs {
    fn lookup(self) -> Option<ClientLookup> {
        self.client_id
            .map(ClientLookup::ClientId)
            .or_else(|| self.card_number.map(ClientLookup::CardNumber))
            .or_else(|| self.card_barcode.map(ClientLookup::CardBarcode))
            .or_else(|| self.phone.map(ClientLookup::Phone))
    }
}

pub(crate) async fn run(context: &Context, args: ClientArgs) -> Result<(), String> {
    let lookup = args.lookup().ok_or("one of the client lookup options is required")?;

    let info = context
        .service
        .client(lookup.clone())
        .await
        .map_err(|error| format!("failed to look up client {lookup}: {error}"))?;

    print_value(&info)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::cli::Cli;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: ClientArgs,
    }

    #[test]
    fn phone_lookup() {
        let harness = Harness::try_parse_from(["client", "--phone", "79777121350"]);

        assert_eq!(
            harness.ok().and_then(|harness| harness.args.lookup()),
            Some(ClientLookup::Phone("79777121350".to_string()))
        );
    }

    #[test]
    fn lookups_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "cardloyalty",
            "client",
            "--client-id",
            "1",
            "--phone",
            "7",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn a_lookup_is_required() {
        let result = Cli::try_parse_from(["cardloyalty", "client"]);

        assert!(result.is_err());
    }
}
