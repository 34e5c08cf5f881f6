//! Display models for CLI output
//!
//! Converts typed API records into table rows with formatted money and dates.

pub mod display;

pub use display::{
    CustomerDisplay, OnlineSaleDisplay, ProductDisplay, SaleDisplay, StatRow, dashboard_rows,
    sales_statistics_rows,
};
