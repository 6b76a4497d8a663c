//! Input resolution for the CLI.
//!
//! Campus inputs are layered: built-in defaults, then an optional JSON
//! scenario file, then individual command-line flags.

use anyhow::{Context, Result};
use clap::Args;
use hostelplan_lib::prelude::*;
use std::path::Path;

/// Per-field overrides taken from the command line.
#[derive(Args, Debug, Default)]
pub(crate) struct InputOverrides {
    /// Total land area (acres)
    #[arg(long)]
    land_acres: Option<f64>,

    /// Library land area (acres)
    #[arg(long)]
    library_acres: Option<f64>,

    /// Total students
    #[arg(long)]
    students: Option<u32>,

    /// Number of floors, ground included (1-5)
    #[arg(long)]
    floors: Option<u8>,

    /// Students in 3-sharing rooms (%)
    #[arg(long)]
    three_share_pct: Option<u8>,

    /// Average construction cost per sqft
    #[arg(long)]
    cost_per_sqft: Option<f64>,

    /// Infrastructure cost (% of construction)
    #[arg(long)]
    infra_pct: Option<f64>,

    /// Maintenance cost per student per year
    #[arg(long)]
    maintenance: Option<f64>,

    /// Food cost per student per day
    #[arg(long)]
    food_per_day: Option<f64>,
}

impl InputOverrides {
    /// Applies every flag that was given on top of `base`.
    pub(crate) fn apply(&self, base: CampusInputs) -> CampusInputs {
        CampusInputs {
            land_acres: self.land_acres.unwrap_or(base.land_acres),
            library_acres: self.library_acres.unwrap_or(base.library_acres),
            students: self.students.unwrap_or(base.students),
            floors: self.floors.unwrap_or(base.floors),
            three_share_pct: self.three_share_pct.unwrap_or(base.three_share_pct),
            avg_cost_per_sqft: self.cost_per_sqft.unwrap_or(base.avg_cost_per_sqft),
            infra_cost_multiplier_pct: self.infra_pct.unwrap_or(base.infra_cost_multiplier_pct),
            maintenance_cost_per_student: self
                .maintenance
                .unwrap_or(base.maintenance_cost_per_student),
            food_cost_per_day_per_student: self
                .food_per_day
                .unwrap_or(base.food_cost_per_day_per_student),
        }
    }
}

/// Reads a JSON scenario file.
pub(crate) fn load_scenario(path: &Path) -> Result<CampusInputs> {
    CampusInputs::from_json_file(path)
        .with_context(|| format!("Cannot load scenario file: {}", path.display()))
}

/// Resolves the inputs for one run: defaults, then scenario file, then flags.
pub(crate) fn resolve_inputs(
    scenario: Option<&Path>,
    overrides: &InputOverrides,
) -> Result<CampusInputs> {
    let base = match scenario {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading scenario");
            load_scenario(path)?
        }
        None => CampusInputs::default(),
    };
    Ok(overrides.apply(base))
}
