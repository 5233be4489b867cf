use cardloyalty_client::models::{ClientRecord, ClientStatus};
use clap::Args;

use crate::output::{TableRow, id_cell, print_list};

use super::Context;

#[derive(Debug, Args)]
pub(crate) struct ClientsArgs {
    /// Page size
    #[arg(long, default_value_t = 100)]
    limit: u32,

    /// Page offset, ignored with --new
    #[arg(long, default_value_t = 0)]
    offset: u32,

    /// Only clients created since the last poll
    #[arg(long)]
    new: bool,
}

impl TableRow for ClientRecord {
    const HEADER: &'static [&'static str] =
        &["ID", "Name", "Phone", "Card Number", "Card Barcode", "Status"];

    fn cells(&self) -> Vec<String> {
        let name = [&self.last_name, &self.first_name, &self.patronymic]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        let status = match self.status {
            ClientStatus::Created => "created".to_string(),
            ClientStatus::Active => "active".to_string(),
            ClientStatus::Deleted => "deleted".to_string(),
            ClientStatus::Other(code) => code.to_string(),
        };

        vec![
            id_cell(self.client_id),
            name,
            self.phone.clone(),
            self.card_number.clone(),
            self.card_barcode.clone(),
            status,
        ]
    }
}

pub(crate) async fn run(
    context: &Context,
    ClientsArgs { limit, offset, new }: ClientsArgs,
) -> Result<(), String> {
    let clients = if new {
        context.service.new_clients(limit).await
    } else {
        context.service.all_clients(limit, offset).await
    }
    .map_err(|error| format!("failed to list clients: {error}"))?;

    print_list(&clients, context.output)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: ClientsArgs,
    }

    #[test]
    fn paging_defaults() {
        let harness = Harness::try_parse_from(["clients"]);

        assert!(harness.is_ok_and(|Harness { args }| {
            args.limit == 100 && args.offset == 0 && !args.new
        }));
    }

    #[test]
    fn row_joins_name_parts() {
        let client = ClientRecord {
            client_id: Some(1234),
            first_name: "Anton".to_string(),
            last_name: "Chekhov".to_string(),
            status: ClientStatus::Active,
            ..ClientRecord::default()
        };

        let cells = client.cells();

        assert_eq!(cells.first().map(String::as_str), Some("1234"));
        assert_eq!(cells.get(1).map(String::as_str), Some("Chekhov Anton"));
        assert_eq!(cells.last().map(String::as_str), Some("active"));
    }
}
