//! NGMS API client
//!
//! [`RequestClient`] wraps every call with bearer-token auth, cache-aside reads
//! and tag-based invalidation after writes. Endpoint wrappers in [`api`] only
//! describe paths and cache metadata.

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod navigator;
pub mod request;
pub mod transport;

pub use api::GrowthPeriod;
pub use navigator::{DEFAULT_LOGIN_PATH, Navigator, SessionNavigator};
pub use request::{CacheOptions, RequestClient, RequestOptions};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
