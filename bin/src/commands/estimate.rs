//! Estimate command implementation.
//!
//! This module resolves the campus inputs, runs the estimator and writes the
//! report in the requested format.

use crate::display::{Format, ReportOptions, emit_report};
use crate::scenario::{InputOverrides, resolve_inputs};
use anyhow::{Context, Result};
use hostelplan_lib::prelude::*;
use std::path::Path;

/// Estimate the campus described by the scenario file and flags.
pub(crate) fn estimate(
    scenario: Option<&Path>,
    overrides: &InputOverrides,
    format: Format,
    pretty: bool,
    output: Option<&Path>,
    extras: bool,
    quiet: bool,
) -> Result<()> {
    let inputs = resolve_inputs(scenario, overrides)?;
    tracing::debug!(?inputs, "resolved campus inputs");

    let results = Estimator::estimate(&inputs).context("Cannot estimate campus")?;

    let options = ReportOptions {
        format,
        pretty,
        extras,
    };
    emit_report(&inputs, &results, options, output)?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), ?format, "report written");
        if !quiet {
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}
