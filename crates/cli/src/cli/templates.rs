use cardloyalty_client::models::Template;

use crate::output::{TableRow, id_cell, print_list};

use super::Context;

impl TableRow for Template {
    const HEADER: &'static [&'static str] = &["ID", "Name"];

    fn cells(&self) -> Vec<String> {
        vec![id_cell(self.id), self.name.clone()]
    }
}

pub(crate) async fn run(context: &Context) -> Result<(), String> {
    let templates = context
        .service
        .templates()
        .await
        .map_err(|error| format!("failed to list templates: {error}"))?;

    print_list(&templates, context.output)
}
