//! Date utilities for the DD/MM/YYYY literal format used on scanned records.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

pub const DATE_FMT: &str = "%d/%m/%Y";

fn date_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap())
}

/// Strict parse of a DD/MM/YYYY literal.
/// The shape check rejects non-zero-padded variants ("1/3/2024") that
/// chrono would otherwise accept.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !date_shape().is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Lenient day-of-month reader used by bulk team assignment: the first of
/// exactly three `/`-separated components, when it parses as an integer.
/// Anything else marks the date as unparseable (caller skips the record).
pub fn day_of_month(s: &str) -> Option<u32> {
    let parts: Vec<&str> = s.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    parts[0].parse::<u32>().ok()
}

/// Last day of a month, used to close open-ended range bounds.
pub fn month_last_day(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}
