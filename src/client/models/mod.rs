//! Typed views of API responses
//!
//! The API layer returns raw JSON; these types are used where the CLI needs
//! named fields. Unknown fields are ignored and numeric fields are optional
//! because the server omits them for empty records.

mod auth;
mod catalog;
mod dashboard;
mod sale;

pub use auth::{LoginResponse, User};
pub use catalog::{Customer, Product};
pub use dashboard::{DashboardStats, SalesStatistics};
pub use sale::{OnlineSale, Sale};
