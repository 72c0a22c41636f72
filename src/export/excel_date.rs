// src/export/excel_date.rs

use crate::utils::{date, time};
use chrono::{NaiveDate, Timelike};

/// Interpret a cell string as a DD/MM/YYYY date or an HH:MM:SS time,
/// returning the Excel serial plus the matching number format. Strings
/// that fit neither shape are written as plain text by the caller.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Some(d) = date::parse_date(s) {
        return Some(("dd/mm/yyyy", naive_date_to_excel_serial(d)));
    }

    if let Some(t) = time::parse_time(s) {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm:ss", seconds / 86400.0));
    }

    None
}

fn naive_date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
