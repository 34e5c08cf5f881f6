//! Credential handling: token storage and token inspection

pub mod jwt;
pub mod token;

pub use jwt::token_expiry;
pub use token::TokenStore;
