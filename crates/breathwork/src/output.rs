//! Output formatting: table, JSON, YAML.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable items in the chosen format.
///
/// `to_row` maps each item to its `Tabled` row for table output; structured
/// formats serialize the original data.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Like [`render_list`], but each item expands to several table rows.
pub fn render_nested<T, R>(
    format: OutputFormat,
    data: &[T],
    to_rows: impl Fn(&T) -> Vec<R>,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().flat_map(to_rows).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Render a single item. Table output is a two-column field/value view
/// built from `detail_fn`.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> Vec<(&'static str, String)>,
) -> Result<String, CliError>
where
    T: Serialize,
{
    match format {
        OutputFormat::Table => Ok(render_detail(&detail_fn(data))),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_detail(fields: &[(&'static str, String)]) -> String {
    let rows: Vec<DetailRow> = fields
        .iter()
        .map(|(field, value)| DetailRow {
            field: *field,
            value: value.clone(),
        })
        .collect();
    render_table(&rows)
}

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let out = if compact {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    Ok(out)
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    Ok(serde_yaml::to_string(data)?)
}

/// Shorten long text for table cells.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Item {
        name: &'static str,
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "Name")]
        name: &'static str,
    }

    #[test]
    fn list_renders_each_format() {
        let data = [Item { name: "hero" }];
        let to_row = |i: &Item| ItemRow { name: i.name };

        let table = render_list(OutputFormat::Table, &data, to_row)
            .unwrap_or_else(|e| panic!("table: {e}"));
        assert!(table.contains("Name") && table.contains("hero"));

        let compact = render_list(OutputFormat::JsonCompact, &data, to_row)
            .unwrap_or_else(|e| panic!("json: {e}"));
        assert_eq!(compact, json!([{ "name": "hero" }]).to_string());

        let yaml = render_list(OutputFormat::Yaml, &data, to_row)
            .unwrap_or_else(|e| panic!("yaml: {e}"));
        assert!(yaml.contains("name: hero"));
    }

    #[test]
    fn single_table_is_field_value_view() {
        let out = render_single(OutputFormat::Table, &Item { name: "about" }, |i| {
            vec![("Name", i.name.to_string())]
        })
        .unwrap_or_else(|e| panic!("table: {e}"));
        assert!(out.contains("Field") && out.contains("Value") && out.contains("about"));
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("breathe in slowly", 8), "breathe…");
    }
}
