//! Display model implementations for table and JSON output

mod catalog;
mod sale;
mod stats;

pub use catalog::{CustomerDisplay, ProductDisplay};
pub use sale::{OnlineSaleDisplay, SaleDisplay};
pub use stats::{StatRow, dashboard_rows, sales_statistics_rows};

/// `-` for missing text
fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => "-".to_string(),
    }
}
