//! Command output

use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::config::OutputFormat;

/// Rows of a list command rendered as a table.
pub(crate) trait TableRow {
    /// Column titles.
    const HEADER: &'static [&'static str];

    /// Cell values, in header order.
    fn cells(&self) -> Vec<String>;
}

/// Render rows as a rounded table.
pub(crate) fn render_table<R: TableRow>(rows: &[R]) -> String {
    let mut builder = Builder::default();

    builder.push_record(R::HEADER.iter().copied());

    for row in rows {
        builder.push_record(row.cells());
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    table.to_string()
}

/// Render a value as pretty JSON.
pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|error| format!("failed to render output: {error}"))
}

/// Print a single value.
pub(crate) fn print_value<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let rendered = render_json(value)?;

    #[expect(clippy::print_stdout, reason = "command output goes to stdout")]
    {
        println!("{rendered}");
    }

    Ok(())
}

/// Print a list in the requested format.
pub(crate) fn print_list<R>(rows: &[R], format: OutputFormat) -> Result<(), String>
where
    R: TableRow + Serialize,
{
    let rendered = match format {
        OutputFormat::Json => render_json(rows)?,
        OutputFormat::Table => render_table(rows),
    };

    #[expect(clippy::print_stdout, reason = "command output goes to stdout")]
    {
        println!("{rendered}");
    }

    Ok(())
}

/// Text of an optional id cell.
pub(crate) fn id_cell(id: Option<i64>) -> String {
    id.map_or_else(String::new, |id| id.to_string())
}
