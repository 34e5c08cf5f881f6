//! Printing API responses
//!
//! Handlers get raw JSON from the client. Where a typed display model exists
//! the response is converted to rows; otherwise it is printed generically.
//! JSON output always carries the server's response unchanged.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{Formattable, json};

/// Print a list response through display type `D`.
///
/// Falls back to generic rendering when the response doesn't match `T`.
pub fn print_records<T, D>(value: Value, format: OutputFormat) -> Result<()>
where
    T: DeserializeOwned,
    D: From<T> + Tabled + Serialize,
{
    if format == OutputFormat::Json {
        println!("{}", json::format_json(&value)?);
        return Ok(());
    }

    let records = match &value {
        Value::Array(_) => serde_json::from_value::<Vec<T>>(value.clone()).ok(),
        Value::Object(_) => serde_json::from_value::<T>(value.clone())
            .ok()
            .map(|record| vec![record]),
        _ => None,
    };

    match records {
        Some(records) => {
            let rows: Vec<D> = records.into_iter().map(D::from).collect();
            rows.print(format)
        }
        None => {
            log::debug!("Response did not match the display model, printing as-is");
            value.print(format)
        }
    }
}

/// Print any response
pub fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    value.print(format)
}

/// Ask before deleting unless `--yes` was passed.
///
/// Returns `false` when the user declines.
pub fn confirm_delete(what: &str, id: i64, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Delete {} {}?", what, id))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".dimmed());
    }
    Ok(confirmed)
}
