//! Extraction boundary and file-backed visit sources.
//!
//! The OCR/document step that turns an image or PDF into raw records is
//! an external collaborator; it lives behind [`VisitExtractor`]. The CLI
//! consumes already-extracted records shipped as CSV, and keeps the
//! working collection as a JSON file it loads and saves around each
//! command.

use crate::errors::{AppError, AppResult};
use crate::models::{RawVisit, Visit};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Contract for the document extraction step.
///
/// Implementations must fail with [`AppError::Extraction`] when no visit
/// rows can be located in the document, so the caller never installs an
/// empty collection by mistake.
pub trait VisitExtractor {
    fn extract(&mut self, document: &[u8]) -> AppResult<Vec<RawVisit>>;
}

/// Extractor for documents whose visits were already tabulated as CSV
/// with `date,time,location` headers.
pub struct CsvSource;

impl VisitExtractor for CsvSource {
    fn extract(&mut self, document: &[u8]) -> AppResult<Vec<RawVisit>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(document);

        let mut out = Vec::new();
        for record in reader.deserialize::<RawVisit>() {
            out.push(record?);
        }

        if out.is_empty() {
            return Err(AppError::Extraction(
                "no visit rows found in document".to_string(),
            ));
        }

        Ok(out)
    }
}

/// Read raw visits from a CSV file on disk.
pub fn read_raw_csv(path: &Path) -> AppResult<Vec<RawVisit>> {
    let bytes = fs::read(path)?;

    CsvSource.extract(&bytes).map_err(|e| match e {
        AppError::Extraction(_) => {
            AppError::Extraction(format!("no visit rows found in {}", path.display()))
        }
        other => other,
    })
}

/// Load the working collection. A missing file is an empty collection.
pub fn load_visits(path: &Path) -> AppResult<Vec<Visit>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| AppError::Other(format!("corrupt collection file {}: {e}", path.display())))
}

/// Save the working collection, pretty-printed. Callers only invoke this
/// after an operation has fully succeeded, so a failed run never leaves
/// partial state behind.
pub fn save_visits(path: &Path, visits: &[Visit]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(visits)
        .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
