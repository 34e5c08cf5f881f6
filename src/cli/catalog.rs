//! Product, customer, region and shop commands

use colored::Colorize;
use serde_json::Value;

use crate::cli::args::read_json_arg;
use crate::cli::handlers::{confirm_delete, print_records, print_value};
use crate::cli::{
    CommandContext, CrudCommands, CustomerCommands, GlobalOptions, OutputFormat, ProductCommands,
    RegionCommands, ShopCommands,
};
use crate::client::models::{Customer, Product};
use crate::client::api::{CUSTOMERS, PRODUCTS, REGIONS, Resource, ResourceApi, SHOPS};
use crate::error::Result;
use crate::models::{CustomerDisplay, ProductDisplay};

pub async fn product(opts: &GlobalOptions, cmd: ProductCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.products();

    match cmd {
        ProductCommands::Crud(CrudCommands::List) => {
            print_records::<Product, ProductDisplay>(api.list().await?, ctx.format)
        }
        ProductCommands::Crud(CrudCommands::Get { id }) => {
            print_records::<Product, ProductDisplay>(api.get(id).await?, ctx.format)
        }
        ProductCommands::Crud(crud) => run_crud(&ctx, &PRODUCTS, "product", crud).await,
        ProductCommands::TopProfitable => print_value(&api.top_profitable().await?, ctx.format),
        ProductCommands::TopSelling => print_value(&api.top_selling().await?, ctx.format),
    }
}

pub async fn customer(opts: &GlobalOptions, cmd: CustomerCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.customers();

    match cmd {
        CustomerCommands::Crud(CrudCommands::List) => {
            print_records::<Customer, CustomerDisplay>(api.list().await?, ctx.format)
        }
        CustomerCommands::Crud(CrudCommands::Get { id }) => {
            print_records::<Customer, CustomerDisplay>(api.get(id).await?, ctx.format)
        }
        CustomerCommands::Crud(crud) => run_crud(&ctx, &CUSTOMERS, "customer", crud).await,
        CustomerCommands::Map => print_value(&api.map_data().await?, ctx.format),
    }
}

pub async fn region(opts: &GlobalOptions, cmd: RegionCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.regions();

    match cmd {
        RegionCommands::Crud(crud) => run_crud(&ctx, &REGIONS, "region", crud).await,
        RegionCommands::Map => print_value(&api.map_data().await?, ctx.format),
        RegionCommands::Occupied => print_value(&api.occupied().await?, ctx.format),
    }
}

pub async fn shop(opts: &GlobalOptions, cmd: ShopCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.require_login()?;
    let api = ctx.client.shops();

    match cmd {
        ShopCommands::Crud(crud) => run_crud(&ctx, &SHOPS, "shop", crud).await,
        ShopCommands::Map => print_value(&api.map_data().await?, ctx.format),
        ShopCommands::TopShops => print_value(&api.top_shops().await?, ctx.format),
        ShopCommands::TopRegions => print_value(&api.top_regions().await?, ctx.format),
    }
}

/// Generic handling for collections without a typed display
async fn run_crud(
    ctx: &CommandContext,
    resource: &'static Resource,
    noun: &str,
    cmd: CrudCommands,
) -> Result<()> {
    let api = ResourceApi::new(&ctx.client, resource);

    let result = match cmd {
        CrudCommands::List => return print_value(&api.list().await?, ctx.format),
        CrudCommands::Get { id } => return print_value(&api.get(id).await?, ctx.format),
        CrudCommands::Create { data } => api.create(read_json_arg(&data.data)?).await?,
        CrudCommands::Update { id, data } => api.update(id, read_json_arg(&data.data)?).await?,
        CrudCommands::Delete { id, confirm } => {
            if !confirm_delete(noun, id, confirm.yes)? {
                return Ok(());
            }
            api.delete(id).await?
        }
    };

    report_write(&result, noun, ctx.format)
}

/// Print the server's reply to a write: its `message` when there is one
pub(crate) fn report_write(result: &Value, noun: &str, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_value(result, format);
    }

    match result.get("message").and_then(Value::as_str) {
        Some(message) => println!("{} {}", "✓".green(), message),
        None => {
            let id = result
                .get("id")
                .map(|id| format!(" #{}", id))
                .unwrap_or_default();
            println!("{} Saved {}{}", "✓".green(), noun, id);
        }
    }
    Ok(())
}
