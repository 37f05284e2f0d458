//! Import and export of project records.
//!
//! # Responsibility
//! - Read the dashboard JSON data file and the flat CSV sheet.
//! - Write both formats back out from a project list.
//!
//! # Invariants
//! - Import is lenient per field (see `model::record`) but rejects input that
//!   is not structurally JSON/CSV at all.
//! - Export never reorders projects or papers.

pub mod csv_io;
pub mod json_io;

pub use csv_io::{export_csv, import_csv, CSV_HEADERS};
pub use json_io::{export_json, import_json};

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Import/export failures.
#[derive(Debug)]
pub enum InterchangeError {
    Json(serde_json::Error),
    Csv(::csv::Error),
    /// JSON parsed but has neither a `projects` array nor a top-level array.
    UnexpectedShape(&'static str),
    /// CSV header lacks a required column.
    MissingColumn(&'static str),
    Io(std::io::Error),
}

impl Display for InterchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::Csv(err) => write!(f, "invalid CSV: {err}"),
            Self::UnexpectedShape(details) => write!(f, "unexpected data shape: {details}"),
            Self::MissingColumn(column) => write!(f, "CSV header is missing column `{column}`"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InterchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::UnexpectedShape(_) | Self::MissingColumn(_) => None,
        }
    }
}

impl From<serde_json::Error> for InterchangeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<::csv::Error> for InterchangeError {
    fn from(value: ::csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for InterchangeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
