//! Area, room and cost estimation for the hostelplan campus planner.
//!
//! - [`Estimator`] - Derives [`CampusResults`](hostelplan_types::CampusResults)
//!   from [`CampusInputs`](hostelplan_types::CampusInputs)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hostelplan/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;

pub use estimator::Estimator;
