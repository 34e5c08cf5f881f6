//! Sale rows

use serde::Serialize;
use tabled::Tabled;

use super::or_dash;
use crate::client::models::{OnlineSale, Sale};
use crate::output::formatters::{format_date, format_optional_currency};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SaleDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "CUSTOMER")]
    pub customer: String,

    #[tabled(rename = "PRODUCT")]
    pub product: String,

    #[tabled(rename = "QTY")]
    pub quantity: i64,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,

    #[tabled(rename = "PROFIT")]
    pub profit: String,
}

impl From<Sale> for SaleDisplay {
    fn from(s: Sale) -> Self {
        Self {
            id: s.id,
            date: format_date(s.sale_date.as_deref()),
            customer: or_dash(s.customer_name.as_deref()),
            product: or_dash(s.product_name.as_deref()),
            quantity: s.quantity,
            amount: format_optional_currency(s.amount),
            profit: format_optional_currency(s.profit),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OnlineSaleDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "PLATFORM")]
    pub platform: String,

    #[tabled(rename = "PRODUCT")]
    pub product: String,

    #[tabled(rename = "QTY")]
    pub quantity: i64,

    #[tabled(rename = "AMOUNT")]
    pub amount: String,
}

impl From<OnlineSale> for OnlineSaleDisplay {
    fn from(s: OnlineSale) -> Self {
        Self {
            id: s.id,
            date: format_date(s.sale_date.as_deref()),
            platform: s.platform,
            product: or_dash(s.product_name.as_deref()),
            quantity: s.quantity,
            amount: format_optional_currency(s.amount),
        }
    }
}
