//! Locale formatting for numbers, money and dates
//!
//! Output follows the Uzbek conventions the dashboard uses: space-grouped
//! thousands, a comma before decimals, amounts in so'm and month names in
//! Uzbek (`2-Fevral, 2026`).

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

/// Currency suffix appended by [`format_currency`]
pub const CURRENCY: &str = "so'm";

const MONTHS: [&str; 12] = [
    "Yanvar", "Fevral", "Mart", "Aprel", "May", "Iyun", "Iyul", "Avgust", "Sentabr", "Oktabr",
    "Noyabr", "Dekabr",
];

/// Group thousands with spaces; up to two decimals, trailing zeros dropped.
///
/// `1234567.5` → `1 234 567,5`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{}{}", sign, grouped),
        f if f % 10 == 0 => format!("{}{},{}", sign, grouped, f / 10),
        f => format!("{}{},{:02}", sign, grouped, f),
    }
}

/// `1234567` → `1 234 567 so'm`
pub fn format_currency(value: f64) -> String {
    format!("{} {}", format_number(value), CURRENCY)
}

/// Same as [`format_currency`] but `-` when the amount is unknown
pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| "-".to_string())
}

/// Signed percentage with one decimal, e.g. `+12,5%`
pub fn format_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, format_number((value * 10.0).round() / 10.0))
}

/// Format an ISO date or datetime as `day-Month, year`.
///
/// Returns `-` when the value is missing or cannot be parsed.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    parse_date(raw)
        .map(|date| {
            format!(
                "{}-{}, {}",
                date.day(),
                MONTHS[date.month0() as usize],
                date.year()
            )
        })
        .unwrap_or_else(|| "-".to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = raw.parse::<DateTime<Utc>>() {
        return Some(dt.date_naive());
    }
    // Naive datetimes (`2026-02-02T10:00:00`) and plain dates share the prefix
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Format epoch milliseconds as `YYYY-MM-DD HH:MM:SS` UTC, `-` if out of range
pub fn format_millis(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => "-".to_string(),
    }
}

/// Format byte counts as `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1 000");
        assert_eq!(format_number(1234567.0), "1 234 567");
    }

    #[test]
    fn test_format_number_decimals() {
        assert_eq!(format_number(1234.5), "1 234,5");
        assert_eq!(format_number(12.05), "12,05");
        assert_eq!(format_number(12.001), "12");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1500.0), "-1 500");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234567.0), "1 234 567 so'm");
        assert_eq!(format_optional_currency(None), "-");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(12.54), "+12,5%");
        assert_eq!(format_percent(-3.0), "-3%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2026-02-02")), "2-Fevral, 2026");
        assert_eq!(format_date(Some("2025-12-31T23:10:00")), "31-Dekabr, 2025");
        assert_eq!(format_date(Some("2024-01-15T08:00:00Z")), "15-Yanvar, 2024");
    }

    #[test]
    fn test_format_date_missing_or_invalid() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("yesterday")), "-");
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_millis(1_704_067_200_000), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.0 MB");
    }
}
