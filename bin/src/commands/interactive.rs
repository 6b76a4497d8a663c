//! Interactive command implementation.
//!
//! Collects the campus parameters through prompts prefilled with the
//! previous (or default) values, then prints the text report.

use crate::display::{Format, ReportOptions, write_report};
use anyhow::{Context, Result};
use hostelplan_lib::prelude::*;
use inquire::{Confirm, CustomType};
use std::str::FromStr;

/// Prompt for campus parameters until they validate, then print the report.
pub(crate) fn interactive(extras: bool) -> Result<()> {
    let mut inputs = CampusInputs::default();

    loop {
        inputs = prompt_inputs(&inputs)?;

        match Estimator::estimate(&inputs) {
            Ok(results) => {
                let options = ReportOptions {
                    format: Format::Text,
                    pretty: false,
                    extras,
                };
                println!();
                return write_report(&inputs, &results, options, std::io::stdout().lock());
            }
            Err(err) => {
                eprintln!("{err}");
                let retry = Confirm::new("Edit the inputs and try again?")
                    .with_default(true)
                    .prompt()?;
                if !retry {
                    return Err(err).context("Cannot estimate campus");
                }
            }
        }
    }
}

fn prompt_inputs(current: &CampusInputs) -> Result<CampusInputs> {
    println!("Campus Configuration");
    let land_acres = prompt("Total Land Area (acres)", current.land_acres)?;
    let students = prompt("Total Students", current.students)?;
    let library_acres = prompt("Library Land Area (acres)", current.library_acres)?;
    let floors = prompt("Number of Floors (1-5, ground included)", current.floors)?;
    let three_share_pct = prompt("3-Sharing Rooms (%)", current.three_share_pct)?;

    println!("Construction Cost");
    let avg_cost_per_sqft = prompt("Avg. Construction Cost (per sqft)", current.avg_cost_per_sqft)?;
    let infra_cost_multiplier_pct = prompt(
        "Infra Cost (% of construction)",
        current.infra_cost_multiplier_pct,
    )?;

    println!("Annual Operating Cost");
    let maintenance_cost_per_student = prompt(
        "Maintenance (per student per year)",
        current.maintenance_cost_per_student,
    )?;
    let food_cost_per_day_per_student = prompt(
        "Food (per student per day)",
        current.food_cost_per_day_per_student,
    )?;

    Ok(CampusInputs {
        land_acres,
        library_acres,
        students,
        floors,
        three_share_pct,
        avg_cost_per_sqft,
        infra_cost_multiplier_pct,
        maintenance_cost_per_student,
        food_cost_per_day_per_student,
    })
}

fn prompt<T>(message: &str, default: T) -> Result<T>
where
    T: Clone + FromStr + ToString,
{
    let value = CustomType::new(message)
        .with_default(default)
        .with_error_message("Please enter a valid number")
        .prompt()?;
    Ok(value)
}
