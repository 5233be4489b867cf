use cardloyalty_client::models::Tag;
use clap::{Args, Subcommand};

use crate::output::{TableRow, id_cell, print_list, print_value};

use super::Context;

#[derive(Debug, Args)]
pub(crate) struct TagsCommand {
    #[command(subcommand)]
    command: TagsSubcommand,
}

#[derive(Debug, Subcommand)]
enum TagsSubcommand {
    /// List all tags
    List,

    /// Create a tag, or find the existing one with the same name
    Create {
        /// Tag name
        name: String,
    },

    /// Show the name of a tag
    Get {
        /// Tag id
        id: i64,
    },
}

impl TableRow for Tag {
    const HEADER: &'static [&'static str] = &["ID", "Name"];

    fn cells(&self) -> Vec<String> {
        vec![id_cell(self.tag_id), self.tag_name.clone()]
    }
}

pub(crate) async fn run(context: &Context, command: TagsCommand) -> Result<(), String> {
    match command.command {
        TagsSubcommand::List => {
            let tags = context
                .service
                .all_tags()
                .await
                .map_err(|error| format!("failed to list tags: {error}"))?;

            print_list(&tags, context.output)
        }
        TagsSubcommand::Create { name } => {
            let tag = context
                .service
                .add_tag(name)
                .await
                .map_err(|error| format!("failed to create tag: {error}"))?;

            print_value(&tag)
        }
        TagsSubcommand::Get { id } => {
            let name = context
                .service
                .tag_name(id)
                .await
                .map_err(|error| format!("failed to look up tag {id}: {error}"))?
                .ok_or_else(|| format!("tag {id} not found"))?;

            print_value(&name)
        }
    }
}
