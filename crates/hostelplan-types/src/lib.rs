//! Core types for the hostelplan campus cost estimator.
//!
//! This crate provides the fundamental data structures used throughout hostelplan:
//!
//! - [`CampusInputs`] - Land, occupancy and unit-cost parameters for one calculation
//! - [`CampusResults`] - Derived areas, room counts, capital and operating costs
//! - [`InvalidInput`] - A violated input constraint
//! - [`PlanError`] - Top-level error type
//! - [`constants`] - Fixed planning ratios and unit conversions

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hostelplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod constants;
mod error;
mod inputs;
mod results;

pub use error::{InvalidInput, PlanError, Result};
pub use inputs::CampusInputs;
pub use results::CampusResults;
