//! Read-only inspection of JWT access tokens
//!
//! The client never validates tokens; this only peeks at the `exp` claim so
//! `ngms status` can say when the session runs out.

use base64::{Engine as _, engine::general_purpose};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
struct JwtPayload {
    exp: Option<i64>,
}

/// Decode base64url (URL-safe base64, padding optional)
fn base64_decode_url(input: &str) -> Option<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(input.trim_end_matches('='))
        .ok()
}

/// Expiry time of a JWT, if the token is a JWT and carries an `exp` claim
pub fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = base64_decode_url(parts[1])?;
    let payload: JwtPayload = serde_json::from_slice(&payload_bytes).ok()?;
    DateTime::from_timestamp(payload.exp?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_expiry_from_exp_claim() {
        let token = make_token(r#"{"sub":"1","exp":1767225600}"#);
        let expiry = token_expiry(&token).unwrap();
        assert_eq!(expiry.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_no_exp_claim() {
        let token = make_token(r#"{"sub":"1"}"#);
        assert!(token_expiry(&token).is_none());
    }

    #[test]
    fn test_not_a_jwt() {
        assert!(token_expiry("opaque-token").is_none());
        assert!(token_expiry("a.b").is_none());
        assert!(token_expiry("a.!!!.c").is_none());
    }
}
