//! Table output formatting

use colored::Colorize;
use serde_json::Value;
use tabled::{
    Table, Tabled,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

const EMPTY: &str = "No results found.";

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY.to_string();
    }

    let mut table = Table::new(data);
    style(&mut table);
    table.to_string()
}

/// Format an arbitrary JSON value as a table.
///
/// Arrays of objects become one row per element with the union of their keys
/// as columns; a single object becomes a FIELD/VALUE table.
pub fn format_value_table(value: &Value) -> String {
    match value {
        Value::Array(items) if items.is_empty() => EMPTY.to_string(),
        Value::Array(items) => {
            let columns = collect_columns(items);
            if columns.is_empty() {
                // Array of scalars
                let mut builder = Builder::default();
                builder.push_record(vec!["VALUE".to_string()]);
                for item in items {
                    builder.push_record(vec![cell(item)]);
                }
                return build(builder);
            }

            let mut builder = Builder::default();
            builder.push_record(columns.iter().map(|c| c.to_uppercase()));
            for item in items {
                builder.push_record(
                    columns
                        .iter()
                        .map(|c| item.get(c).map(cell).unwrap_or_else(|| "-".to_string())),
                );
            }
            build(builder)
        }
        Value::Object(map) if map.is_empty() => EMPTY.to_string(),
        Value::Object(map) => {
            let mut builder = Builder::default();
            builder.push_record(vec!["FIELD".to_string(), "VALUE".to_string()]);
            for (key, val) in map {
                builder.push_record(vec![key.clone(), cell(val)]);
            }
            build(builder)
        }
        other => cell(other),
    }
}

/// Human-oriented rendering: tables for lists, `key: value` lines for objects
pub fn format_value_pretty(value: &Value) -> String {
    match value {
        Value::Object(map) if !map.is_empty() => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            map.iter()
                .map(|(key, val)| {
                    format!("{:width$}  {}", key.bold(), cell(val), width = width)
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        other => format_value_table(other),
    }
}

fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}

fn build(builder: Builder) -> String {
    let mut table = builder.build();
    style(&mut table);
    table.to_string()
}

fn style(table: &mut Table) {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
}
