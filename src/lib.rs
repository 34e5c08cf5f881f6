//! NGMS client library
//!
//! Token-aware REST client for the NGMS business dashboard with a session
//! scoped response cache, plus the command-line front end built on it.

pub mod auth;
pub mod cache;
pub mod cli;
pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod storage;

pub use error::{Error, Result};
