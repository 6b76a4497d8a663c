//! Output format abstraction.

use hostelplan_types::{CampusInputs, CampusResults};
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Plain-text summary.
    #[default]
    Text,
    /// JSON document.
    Json,
    /// CSV rows.
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns the format name as accepted by [`FromStr`](std::str::FromStr).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Text, Self::Json, Self::Csv]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for report formatters.
pub trait ReportFormatter: Send + Sync {
    /// Writes the inputs and derived results to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_report<W: Write>(
        &self,
        inputs: &CampusInputs,
        results: &CampusResults,
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
