//! Error types for hostelplan.

use thiserror::Error;

/// Result type alias for hostelplan operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors that can occur while loading or estimating a plan.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Input parameters violate a constraint.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A campus input parameter that violates its allowed range.
///
/// Each variant names exactly one constraint so the caller can report which
/// entry needs to change.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    /// A real-valued field is NaN or infinite.
    #[error("Invalid input: {field} must be a finite number, got {value}")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Total land area is zero or negative.
    #[error("Invalid input: land_acres must be greater than 0, got {0}")]
    NonPositiveLand(f64),

    /// A quantity that must be non-negative is negative.
    #[error("Invalid input: {field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Library land is larger than the whole plot.
    #[error("Invalid input: library_acres ({library}) must not exceed land_acres ({land})")]
    LibraryExceedsLand {
        /// Library land in acres.
        library: f64,
        /// Total land in acres.
        land: f64,
    },

    /// No students to house (zero or negative count).
    #[error("Invalid input: students must be greater than 0")]
    NoStudents,

    /// Student count larger than a `u32` can hold.
    #[error("Invalid input: students must be at most {max}, got {0}", max = u32::MAX)]
    TooManyStudents(i64),

    /// Floor count outside the supported range.
    #[error("Invalid input: floors must be between 1 and 5, got {0}")]
    FloorsOutOfRange(i64),

    /// Sharing percentage outside 0..=100.
    #[error("Invalid input: three_share_pct must be between 0 and 100, got {0}")]
    ThreeSharePctOutOfRange(i64),

    /// Inputs are finite but so large that a derived figure overflows.
    #[error("Invalid input: values are too large, derived {field} is not finite")]
    ResultOverflow {
        /// Name of the derived figure that overflowed.
        field: &'static str,
    },
}

impl InvalidInput {
    /// Returns the name of the input field the constraint applies to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field, .. }
            | Self::Negative { field, .. }
            | Self::ResultOverflow { field } => *field,
            Self::NonPositiveLand(_) => "land_acres",
            Self::LibraryExceedsLand { .. } => "library_acres",
            Self::NoStudents | Self::TooManyStudents(_) => "students",
            Self::FloorsOutOfRange(_) => "floors",
            Self::ThreeSharePctOutOfRange(_) => "three_share_pct",
        }
    }
}
