//! Sale models

use serde::{Deserialize, Serialize};

/// Sale recorded in the shop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default)]
    pub quantity: i64,

    /// Total amount fixed at the time of sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,

    /// `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<String>,
}

/// Sale made through a marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnlineSale {
    pub id: i64,

    /// e.g. `uzum_market`, `yandex_market`
    pub platform: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(default)]
    pub quantity: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_date: Option<String>,
}
