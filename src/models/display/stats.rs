//! Metric/value rows for statistics screens

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{DashboardStats, SalesStatistics};
use crate::output::formatters::{format_currency, format_date, format_number, format_percent};

/// One labelled figure
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct StatRow {
    #[tabled(rename = "METRIC")]
    pub metric: String,

    #[tabled(rename = "VALUE")]
    pub value: String,
}

impl StatRow {
    pub fn new(metric: &str, value: String) -> Self {
        Self {
            metric: metric.to_string(),
            value,
        }
    }
}

pub fn dashboard_rows(stats: &DashboardStats) -> Vec<StatRow> {
    vec![
        StatRow::new("Daily sales", format_currency(stats.daily_sales)),
        StatRow::new("Monthly sales", format_currency(stats.monthly_sales)),
        StatRow::new("Yearly sales", format_currency(stats.yearly_sales)),
        StatRow::new("Total revenue", format_currency(stats.total_revenue)),
        StatRow::new("Monthly profit", format_currency(stats.monthly_profit)),
        StatRow::new("Total profit", format_currency(stats.total_profit)),
        StatRow::new(
            "Sold this month",
            format_number(stats.total_quantity_sold as f64),
        ),
        StatRow::new(
            "Sold all time",
            format_number(stats.total_quantity_sold_all_time as f64),
        ),
        StatRow::new("Growth vs last month", format_percent(stats.growth_percent)),
        StatRow::new("Customers", stats.customers_count.to_string()),
        StatRow::new("Active products", stats.products_count.to_string()),
    ]
}

pub fn sales_statistics_rows(stats: &SalesStatistics) -> Vec<StatRow> {
    vec![
        StatRow::new("Period", stats.period.clone()),
        StatRow::new("From", format_date(stats.start_date.as_deref())),
        StatRow::new("To", format_date(stats.end_date.as_deref())),
        StatRow::new("Total sales", format_currency(stats.total_sales)),
        StatRow::new("Quantity", format_number(stats.total_quantity as f64)),
        StatRow::new("Growth", format_percent(stats.growth_percent)),
    ]
}
