//! Report formatters for the hostelplan campus planner.
//!
//! This crate provides formatters for writing campus inputs and results
//! to various output formats:
//!
//! - [`TextFormatter`] - Sectioned plain-text summary with crore figures
//! - [`JsonFormatter`] - JSON document with inputs and results
//! - [`CsvFormatter`] - One `section,metric,value` row per figure
//!
//! The [`units`] module holds the currency and number helpers they share.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hostelplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod text;
pub mod units;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, OutputFormat, ReportFormatter};
pub use json::JsonFormatter;
pub use text::TextFormatter;
