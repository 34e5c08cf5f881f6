//! Sale commands

use serde_json::Value;

use crate::cli::args::read_json_arg;
use crate::cli::catalog::report_write;
use crate::cli::handlers::{confirm_delete, print_records};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, SaleCommands};
use crate::client::models::{OnlineSale, Sale, SalesStatistics};
use crate::error::{ApiError, Result};
use crate::models::{OnlineSaleDisplay, SaleDisplay, sales_statistics_rows};
use crate::output::{Formattable, json};

pub async fn run(opts: &GlobalOptions, cmd: SaleCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.sales();

    match cmd {
        SaleCommands::List { start, end } => {
            let sales = api.list(start.as_deref(), end.as_deref()).await?;
            print_records::<Sale, SaleDisplay>(sales, ctx.format)
        }
        SaleCommands::Get { id } => print_records::<Sale, SaleDisplay>(api.get(id).await?, ctx.format),
        SaleCommands::Create { data } => {
            let result = api.create(read_json_arg(&data.data)?).await?;
            report_write(&result, "sale", ctx.format)
        }
        SaleCommands::Update { id, data } => {
            let result = api.update(id, read_json_arg(&data.data)?).await?;
            report_write(&result, "sale", ctx.format)
        }
        SaleCommands::Delete { id, confirm } => {
            if !confirm_delete("sale", id, confirm.yes)? {
                return Ok(());
            }
            let result = api.delete(id).await?;
            report_write(&result, "sale", ctx.format)
        }
        SaleCommands::Stats { period } => {
            let value = api.statistics(period.map(|p| p.as_str())).await?;
            print_statistics(value, ctx.format)
        }
        SaleCommands::Online => {
            print_records::<OnlineSale, OnlineSaleDisplay>(api.online().await?, ctx.format)
        }
        SaleCommands::OnlineAdd { data } => {
            let result = api.create_online(read_json_arg(&data.data)?).await?;
            report_write(&result, "online sale", ctx.format)
        }
        SaleCommands::Import { file } => {
            let contents = std::fs::read_to_string(&file)?;
            let sales = import_records(serde_json::from_str(&contents)?)?;
            log::debug!("Importing {} sales from {}", sales.len(), file);
            let result = api.bulk_import(sales).await?;
            report_write(&result, "sales", ctx.format)
        }
    }
}

fn print_statistics(value: Value, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", json::format_json(&value)?);
        return Ok(());
    }
    match serde_json::from_value::<SalesStatistics>(value.clone()) {
        Ok(stats) => sales_statistics_rows(&stats).print(format),
        Err(_) => value.print(format),
    }
}

/// Accept a bare array or an object wrapping it under `sales`
fn import_records(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("sales") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(invalid_import()),
        },
        _ => Err(invalid_import()),
    }
}

fn invalid_import() -> crate::error::Error {
    ApiError::InvalidRequest(
        "import file must contain a JSON array or an object with a \"sales\" array".to_string(),
    )
    .into()
}
