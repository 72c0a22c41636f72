// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::VisitExport;
use crate::export::range::parse_range;
use crate::export::xlsx::export_xlsx;
use crate::models::Visit;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use std::io;

/// High-level export orchestration over the classified collection.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the collection.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path (`~` is expanded)
    /// - `range`: `None`, `"all"`, or a shift-date expression:
    ///   - `DD/MM/YYYY`
    ///   - `MM/YYYY`
    ///   - `YYYY`
    ///   - `start:end` pairs of the same shape
    pub fn export(
        visits: &[Visit],
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if path.as_os_str().is_empty() {
            return Err(AppError::from(io::Error::other("empty output file path")));
        }

        if !ensure_writable(&path, force)? {
            return Ok(());
        }

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = select_rows(visits, date_bounds);

        if rows.is_empty() {
            warning("No visits found for the selected range. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(())
    }
}

/// Flatten the collection, filtered on shift date when bounds are given.
/// A range filter excludes visits whose shift date does not parse; an
/// unfiltered export keeps every row.
fn select_rows(visits: &[Visit], bounds: Option<(NaiveDate, NaiveDate)>) -> Vec<VisitExport> {
    visits
        .iter()
        .filter(|v| match bounds {
            None => true,
            Some((start, end)) => v
                .parsed_shift_date()
                .is_some_and(|d| d >= start && d <= end),
        })
        .map(VisitExport::from)
        .collect()
}
