//! Output formatting for dashboard listings
//!
//! Supports JSON (default), compact JSON, table, and CSV output modes.

use std::io::Write;

use anyhow::Result;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use serde::Serialize;
use serde_json::Value;

/// Columns pinned to the front of table and CSV output when present
const LEADING_COLUMNS: &[&str] = &["id", "name"];

/// Output format for dashboard listings
#[derive(Debug, Clone, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array (default)
    #[default]
    Json,
    /// Compact JSON (one line per record)
    JsonCompact,
    /// Columnar table
    Table,
    /// Comma-separated values
    Csv,
}

/// Serialize records and write them to the given writer in the requested
/// format.
pub fn write_records<T: Serialize>(
    writer: &mut dyn Write,
    records: &[T],
    format: &OutputFormat,
) -> Result<()> {
    let values: Vec<Value> = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    match format {
        OutputFormat::Json => write_json(writer, &values),
        OutputFormat::JsonCompact => write_json_compact(writer, &values),
        OutputFormat::Table => write_table(writer, &values),
        OutputFormat::Csv => write_csv(writer, &values),
    }
}

fn write_json(writer: &mut dyn Write, values: &[Value]) -> Result<()> {
    let json = serde_json::to_string_pretty(values)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_json_compact(writer: &mut dyn Write, values: &[Value]) -> Result<()> {
    for value in values {
        let json = serde_json::to_string(value)?;
        writeln!(writer, "{json}")?;
    }
    Ok(())
}

fn write_table(writer: &mut dyn Write, values: &[Value]) -> Result<()> {
    if values.is_empty() {
        writeln!(writer, "(no results)")?;
        return Ok(());
    }

    let columns = collect_columns(values);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(columns.iter().collect::<Vec<_>>());

    for value in values {
        let row: Vec<String> = columns
            .iter()
            .map(|col| format_cell(value.get(col.as_str())))
            .collect();
        table.add_row(row);
    }

    writeln!(writer, "{table}")?;
    Ok(())
}

fn write_csv(writer: &mut dyn Write, values: &[Value]) -> Result<()> {
    if values.is_empty() {
        return Ok(());
    }

    let columns = collect_columns(values);

    writeln!(
        writer,
        "{}",
        columns
            .iter()
            .map(|c| csv_escape(c))
            .collect::<Vec<_>>()
            .join(",")
    )?;

    for value in values {
        let row: Vec<String> = columns
            .iter()
            .map(|col| csv_escape(&format_cell(value.get(col.as_str()))))
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    Ok(())
}

/// Collect column names across all records, pinning id/name to the front and
/// otherwise preserving first-seen order.
fn collect_columns(values: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();

    for value in values {
        if let Value::Object(map) = value {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    columns.sort_by_key(|c| {
        LEADING_COLUMNS
            .iter()
            .position(|lead| lead == c)
            .unwrap_or(LEADING_COLUMNS.len())
    });
    columns
}

/// Format a JSON value for display in a table cell or CSV.
fn format_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(array @ Value::Array(items)) => {
            if items.len() <= 3 {
                serde_json::to_string(array).unwrap_or_default()
            } else {
                format!("[{} items]", items.len())
            }
        }
        Some(object @ Value::Object(fields)) => {
            if fields.len() <= 3 {
                serde_json::to_string(object).unwrap_or_default()
            } else {
                format!("{{{} fields}}", fields.len())
            }
        }
    }
}

/// Escape a value for CSV output.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Record {
        id: String,
        name: String,
    }

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                id: "sales-eu".into(),
                name: "Sales EU".into(),
            },
            Record {
                id: "ops".into(),
                name: "Operations, daily".into(),
            },
        ]
    }

    #[test]
    fn test_format_cell_types() {
        assert_eq!(format_cell(Some(&json!("hello"))), "hello");
        assert_eq!(format_cell(Some(&json!(42))), "42");
        assert_eq!(format_cell(Some(&json!(true))), "true");
        assert_eq!(format_cell(Some(&Value::Null)), "");
        assert_eq!(format_cell(None), "");
    }

    #[test]
    fn test_format_cell_collections() {
        let small = json!(["a", "b"]);
        assert!(format_cell(Some(&small)).starts_with('['));

        let large = json!([1, 2, 3, 4, 5]);
        assert_eq!(format_cell(Some(&large)), "[5 items]");

        let wide = json!({"a": 1, "b": 2, "c": 3, "d": 4});
        assert_eq!(format_cell(Some(&wide)), "{4 fields}");
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("hello"), "hello");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_collect_columns_pins_id_and_name_first() {
        let values = vec![
            json!({"arn": "arn:1", "name": "A", "id": "a"}),
            json!({"last_published": null, "id": "b", "name": "B"}),
        ];
        let columns = collect_columns(&values);
        assert_eq!(columns[0], "id");
        assert_eq!(columns[1], "name");
        assert!(columns.contains(&"arn".to_string()));
        assert!(columns.contains(&"last_published".to_string()));
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records(), &OutputFormat::Json).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"id\": \"sales-eu\""));
    }

    #[test]
    fn test_write_json_compact_one_line_per_record() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records(), &OutputFormat::JsonCompact).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.trim().lines().count(), 2);
    }

    #[test]
    fn test_write_csv_escapes_commas() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records(), &OutputFormat::Csv).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();
        assert_eq!(lines[0], "id,name");
        assert_eq!(lines[2], "ops,\"Operations, daily\"");
    }

    #[test]
    fn test_write_table_empty() {
        let records: Vec<Record> = vec![];
        let mut buf = Vec::new();
        write_records(&mut buf, &records, &OutputFormat::Table).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("no results"));
    }

    #[test]
    fn test_write_table_with_data() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records(), &OutputFormat::Table).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("id"));
        assert!(output.contains("Sales EU"));
    }
}
