//! Dashboard command
//!
//! Fetches the four dashboard panels concurrently; each one is cached on its
//! own key, so repeat runs within the TTL stay local.

use colored::Colorize;
use serde_json::{Value, json};

use crate::cli::handlers::{Spinner, print_value};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::GrowthPeriod;
use crate::client::models::DashboardStats;
use crate::error::Result;
use crate::models::dashboard_rows;
use crate::output::formatters::{format_currency, format_number};
use crate::output::{Formattable, json as json_output};

pub async fn run(opts: &GlobalOptions, period: Option<GrowthPeriod>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let dashboard = ctx.client.dashboard();
    let period = period.unwrap_or(GrowthPeriod::Current);

    let spinner = Spinner::start("Loading dashboard...", ctx.format);
    let fetched = futures::try_join!(
        dashboard.stats(),
        dashboard.growth_dynamics(period),
        dashboard.top_products(),
        dashboard.top_customers(),
    );
    spinner.finish();
    let (stats, growth, top_products, top_customers) = fetched?;

    if ctx.format == OutputFormat::Json {
        let out = json!({
            "stats": stats,
            "growth": growth,
            "top_products": top_products,
            "top_customers": top_customers,
        });
        println!("{}", json_output::format_json(&out)?);
        return Ok(());
    }

    let parsed: DashboardStats = serde_json::from_value(stats.clone()).unwrap_or_default();
    if let Some(err) = &parsed.error {
        println!("{} Server reported: {}", "⚠".yellow(), err);
    }
    dashboard_rows(&parsed).print(ctx.format)?;

    println!("\n{}", "Sales by month".bold());
    print_growth(&growth, ctx.format)?;

    println!("\n{}", "Top products".bold());
    print_value(&ranked(&top_products), ctx.format)?;

    println!("\n{}", "Top customers".bold());
    print_value(&ranked(&top_customers), ctx.format)?;

    Ok(())
}

fn print_growth(growth: &Value, format: OutputFormat) -> Result<()> {
    let rows: Vec<Value> = growth
        .as_array()
        .map(|points| {
            points
                .iter()
                .map(|p| {
                    json!({
                        "month": p.get("month").cloned().unwrap_or(Value::Null),
                        "sales": p.get("sales").and_then(Value::as_f64).map(format_currency),
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    print_value(&Value::Array(rows), format)
}

/// Top-N rows with formatted totals
fn ranked(items: &Value) -> Value {
    let Some(items) = items.as_array() else {
        return items.clone();
    };

    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                json!({
                    "#": i + 1,
                    "name": item.get("name").cloned().unwrap_or(Value::Null),
                    "quantity": item.get("total_quantity").and_then(Value::as_f64).map(format_number),
                    "amount": item.get("total_amount").and_then(Value::as_f64).map(format_currency),
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_formats_totals() {
        let items = json!([
            {"id": 4, "name": "Pista", "total_quantity": 1200, "total_amount": 3500000.0},
            {"id": 2, "name": "Bodom", "total_quantity": 800, "total_amount": 2100000.0}
        ]);

        let rows = ranked(&items);

        assert_eq!(rows[0]["#"], 1);
        assert_eq!(rows[0]["quantity"], "1 200");
        assert_eq!(rows[1]["amount"], "2 100 000 so'm");
    }

    #[test]
    fn test_ranked_passes_through_non_arrays() {
        let value = json!({"error": "x"});
        assert_eq!(ranked(&value), value);
    }
}
