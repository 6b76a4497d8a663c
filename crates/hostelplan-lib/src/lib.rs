//! Parametric cost calculator for planning a student hostel campus.
//!
//! This is a facade crate that re-exports functionality from the hostelplan
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use hostelplan_lib::prelude::*;
//!
//! let inputs = CampusInputs {
//!     students: 3000,
//!     floors: 3,
//!     ..CampusInputs::default()
//! };
//! let results = Estimator::estimate(&inputs)?;
//!
//! let mut report = Vec::new();
//! TextFormatter::new().write_report(&inputs, &results, &mut report)?;
//! assert!(String::from_utf8_lossy(&report).contains("Total Rooms: 1400"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hostelplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use hostelplan_types::*;

// Re-export the estimator
pub use hostelplan_estimate::Estimator;

// Re-export formatters
#[cfg(feature = "format")]
pub use hostelplan_format::{
    CsvFormatter, FormatError, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter, units,
};

/// Prelude module for convenient imports.
///
/// ```
/// use hostelplan_lib::prelude::*;
/// ```
pub mod prelude {
    pub use hostelplan_types::{CampusInputs, CampusResults, InvalidInput, PlanError, Result};

    pub use hostelplan_estimate::Estimator;

    #[cfg(feature = "format")]
    pub use hostelplan_format::{
        CsvFormatter, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter,
    };
}
