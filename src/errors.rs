//! Unified application error type.
//! All modules (core, ingest, cli, export, utils) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Ingest-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format (expected DD/MM/YYYY): {0}")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM:SS): {0}")]
    InvalidTime(String),

    #[error("Invalid shift type: {0}")]
    InvalidShiftType(String),

    #[error("Invalid visit id: {0}")]
    InvalidId(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No visit found with id {0}")]
    VisitNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
