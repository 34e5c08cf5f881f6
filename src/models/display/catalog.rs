//! Product and customer rows

use serde::Serialize;
use tabled::Tabled;

use super::or_dash;
use crate::client::models::{Customer, Product};
use crate::output::formatters::{format_number, format_optional_currency};

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProductDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PACKAGE")]
    pub package: String,

    #[tabled(rename = "PURCHASE")]
    pub purchase_price: String,

    #[tabled(rename = "PRICE")]
    pub sale_price: String,

    #[tabled(rename = "MARGIN")]
    pub margin: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<Product> for ProductDisplay {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            package: or_dash(p.package_type.as_deref()),
            purchase_price: format_optional_currency(p.purchase_price),
            sale_price: format_optional_currency(p.sale_price),
            margin: p
                .margin_percent
                .map(|m| format!("{}%", format_number(m)))
                .unwrap_or_else(|| "-".to_string()),
            status: or_dash(p.status.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CustomerDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ADDRESS")]
    pub address: String,

    /// Whether the customer has map coordinates
    #[tabled(rename = "MAP")]
    pub located: String,
}

impl From<Customer> for CustomerDisplay {
    fn from(c: Customer) -> Self {
        let name = match c.additional_name.as_deref() {
            Some(extra) if !extra.is_empty() => format!("{} ({})", c.name, extra),
            _ => c.name,
        };
        let located = c.latitude.is_some() && c.longitude.is_some();

        Self {
            id: c.id,
            name,
            phone: or_dash(c.phone.as_deref()),
            address: or_dash(c.address.as_deref()),
            located: if located { "\u{2713}".to_string() } else { String::new() },
        }
    }
}
