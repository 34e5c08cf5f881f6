//! Value parsers for command arguments

use chrono::NaiveDate;
use serde_json::Value;

use crate::client::GrowthPeriod;
use crate::error::{ApiError, Result};

/// Accept `YYYY-MM-DD` dates only
pub fn parse_date(s: &str) -> std::result::Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("expected a date like 2026-02-01, got '{}'", s))
}

/// `all` or a four-digit year
pub fn parse_growth_period(s: &str) -> std::result::Result<GrowthPeriod, String> {
    if s.eq_ignore_ascii_case("all") {
        return Ok(GrowthPeriod::All);
    }
    match s.parse::<i32>() {
        Ok(year) if (1970..=9999).contains(&year) => Ok(GrowthPeriod::Year(year)),
        _ => Err(format!("expected 'all' or a year, got '{}'", s)),
    }
}

/// Read a JSON argument given inline or as `@path/to/file.json`
pub fn read_json_arg(arg: &str) -> Result<Value> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => arg.to_string(),
    };

    serde_json::from_str(&text)
        .map_err(|e| ApiError::InvalidRequest(format!("--data is not valid JSON: {}", e)).into())
}
