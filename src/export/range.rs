// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// Parse a shift-date range expression.
///
/// Supported shapes (single period or `start:end` with matching shapes):
/// - `DD/MM/YYYY`
/// - `MM/YYYY`
/// - `YYYY`
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(range_error("start and end must use the same format"));
        }

        let (s, _) = parse_period(start)?;
        let (_, e) = parse_period(end)?;

        if e < s {
            return Err(range_error("end of range precedes its start"));
        }

        Ok((s, e))
    } else {
        parse_period(r.trim())
    }
}

/// Expand a single period expression into inclusive date bounds.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let year: i32 = p.parse().map_err(|_| range_error("invalid year"))?;
            let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| range_error("invalid year"))?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| range_error("invalid year"))?;
            Ok((first, last))
        }
        // MM/YYYY
        7 => {
            let (month_raw, year_raw) = p
                .split_once('/')
                .ok_or_else(|| range_error("invalid month period"))?;
            let month: u32 = month_raw.parse().map_err(|_| range_error("invalid month"))?;
            let year: i32 = year_raw.parse().map_err(|_| range_error("invalid year"))?;

            let last_day =
                date::month_last_day(year, month).ok_or_else(|| range_error("invalid month"))?;

            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .ok_or_else(|| range_error("invalid month period"))?;
            let last = NaiveDate::from_ymd_opt(year, month, last_day)
                .ok_or_else(|| range_error("invalid month period"))?;
            Ok((first, last))
        }
        // DD/MM/YYYY
        10 => {
            let d = date::parse_date(p).ok_or_else(|| range_error("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(range_error(
            "unsupported range format (use DD/MM/YYYY, MM/YYYY or YYYY)",
        )),
    }
}

fn range_error(msg: &str) -> AppError {
    AppError::Export(format!("invalid range: {msg}"))
}
