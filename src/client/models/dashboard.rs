//! Statistics models

use serde::{Deserialize, Serialize};

/// Summary returned by `/dashboard/stats`
///
/// The server still answers 200 with zeroed figures and an `error` field
/// when its database is unreachable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub daily_sales: f64,
    pub monthly_sales: f64,
    pub yearly_sales: f64,
    pub total_revenue: f64,
    pub monthly_profit: f64,
    pub total_profit: f64,
    pub total_quantity_sold: i64,
    pub total_quantity_sold_all_time: i64,
    pub growth_percent: f64,
    pub customers_count: i64,
    pub products_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals for one period from `/sales/statistics`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesStatistics {
    pub period: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub total_sales: f64,
    pub total_quantity: i64,
    pub growth_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_partial() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"daily_sales": 1200.5, "customers_count": 4}"#).unwrap();

        assert_eq!(stats.daily_sales, 1200.5);
        assert_eq!(stats.customers_count, 4);
        assert_eq!(stats.total_profit, 0.0);
        assert!(stats.error.is_none());
    }

    #[test]
    fn test_sales_statistics() {
        let json = r#"{"period": "month", "start_date": "2026-02-01", "end_date": "2026-02-14",
            "total_sales": 950000.0, "total_quantity": 40, "growth_percent": -12.5}"#;

        let stats: SalesStatistics = serde_json::from_str(json).unwrap();

        assert_eq!(stats.period, "month");
        assert_eq!(stats.total_quantity, 40);
        assert_eq!(stats.growth_percent, -12.5);
    }
}
