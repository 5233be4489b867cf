use cardloyalty_client::models::NewOrder;
use clap::{Args, Subcommand};

use crate::output::{TableRow, id_cell, print_list};

use super::Context;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Transactions recorded since the last poll
    New {
        /// Batch size
        #[arg(long, default_value_t = 100)]
        limit: u32,
    },
}

impl TableRow for NewOrder {
    const HEADER: &'static [&'static str] = &[
        "Client",
        "GUID",
        "Number",
        "Date",
        "Sum",
        "Sum Discount",
        "Bonus +",
        "Bonus -",
        "Bonus After",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            id_cell(self.client_id),
            self.guid.clone(),
            self.number.clone(),
            self.date.clone(),
            self.sum.to_string(),
            self.sum_discount.to_string(),
            self.bonus_add.to_string(),
            self.bonus_write_off.to_string(),
            self.bonus_after.to_string(),
        ]
    }
}

pub(crate) async fn run(context: &Context, command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::New { limit } => {
            let orders = context
                .service
                .new_orders(limit)
                .await
                .map_err(|error| format!("failed to fetch new orders: {error}"))?;

            print_list(&orders, context.output)
        }
    }
}
