//! Time utilities: strict HH:MM:SS parsing for the shift boundary rule.

use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;

pub const TIME_FMT: &str = "%H:%M:%S";

fn time_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").unwrap())
}

/// Strict parse of an HH:MM:SS literal. Zero-padded fields only, so that
/// lexical ordering of accepted strings matches chronological ordering.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !time_shape().is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, TIME_FMT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FMT).to_string()
}
