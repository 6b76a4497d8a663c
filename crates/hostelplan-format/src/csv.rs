//! CSV output format.

use hostelplan_types::{CampusInputs, CampusResults};
use std::io::Write;

use crate::{FormatError, ReportFormatter};

/// CSV formatter.
///
/// Writes one `section,metric,value` row per input and derived figure.
/// Values are canonical (rupees, square feet), never scaled to crore.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn rows(inputs: &CampusInputs, results: &CampusResults) -> Vec<(&'static str, &'static str, String)> {
    vec![
        ("inputs", "land_acres", inputs.land_acres.to_string()),
        ("inputs", "library_acres", inputs.library_acres.to_string()),
        ("inputs", "students", inputs.students.to_string()),
        ("inputs", "floors", inputs.floors.to_string()),
        ("inputs", "three_share_pct", inputs.three_share_pct.to_string()),
        ("inputs", "single_room_pct", inputs.single_room_pct().to_string()),
        ("inputs", "avg_cost_per_sqft", inputs.avg_cost_per_sqft.to_string()),
        (
            "inputs",
            "infra_cost_multiplier_pct",
            inputs.infra_cost_multiplier_pct.to_string(),
        ),
        (
            "inputs",
            "maintenance_cost_per_student",
            inputs.maintenance_cost_per_student.to_string(),
        ),
        (
            "inputs",
            "food_cost_per_day_per_student",
            inputs.food_cost_per_day_per_student.to_string(),
        ),
        ("land", "land_sqft", results.land_sqft.to_string()),
        ("land", "library_sqft", results.library_sqft.to_string()),
        (
            "land",
            "residential_land_sqft",
            results.residential_land_sqft.to_string(),
        ),
        ("land", "built_up_footprint", results.built_up_footprint.to_string()),
        ("land", "total_built_up_area", results.total_built_up_area.to_string()),
        (
            "accommodation",
            "three_share_students",
            results.three_share_students.to_string(),
        ),
        (
            "accommodation",
            "single_room_students",
            results.single_room_students.to_string(),
        ),
        (
            "accommodation",
            "three_share_rooms",
            results.three_share_rooms.to_string(),
        ),
        ("accommodation", "single_rooms", results.single_rooms.to_string()),
        ("accommodation", "total_rooms", results.total_rooms.to_string()),
        (
            "accommodation",
            "area_per_student",
            results.area_per_student.to_string(),
        ),
        ("capex", "construction_cost", results.construction_cost.to_string()),
        ("capex", "infra_cost", results.infra_cost.to_string()),
        ("capex", "total_project_cost", results.total_project_cost.to_string()),
        (
            "opex",
            "maintenance_cost_total",
            results.maintenance_cost_total.to_string(),
        ),
        ("opex", "mess_cost_total", results.mess_cost_total.to_string()),
        ("opex", "total_opex", results.total_opex.to_string()),
        (
            "opex",
            "cost_per_student_per_month",
            results.cost_per_student_per_month.to_string(),
        ),
    ]
}

impl ReportFormatter for CsvFormatter {
    fn write_report<W: Write>(
        &self,
        inputs: &CampusInputs,
        results: &CampusResults,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "section{d}metric{d}value")?;
        }

        for (section, metric, value) in rows(inputs, results) {
            writeln!(writer, "{section}{d}{metric}{d}{value}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
