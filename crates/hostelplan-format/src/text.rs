//! Plain-text summary format.

use hostelplan_types::{CampusInputs, CampusResults};
use std::io::Write;

use crate::units::{format_crore, group_thousands};
use crate::{FormatError, ReportFormatter};

/// Follow-up ideas printed at the end of the summary.
const ADDITIONAL_CONSIDERATIONS: &[&str] = &[
    "Add solar panels to reduce energy costs over time",
    "Use STP/WTP to recycle water efficiently",
    "Hire catering contractors vs in-house kitchen tradeoff",
    "Optionally build for half the students now and expand later",
    "Add a financial model for ROI, breakeven, or hostel fees",
];

/// Sectioned plain-text summary.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// Currency symbol placed before money figures.
    currency: String,
    /// Whether to append the additional considerations list.
    include_extras: bool,
}

impl TextFormatter {
    /// Creates a text formatter using the rupee sign and printing extras.
    #[must_use]
    pub fn new() -> Self {
        Self {
            currency: "₹".to_string(),
            include_extras: true,
        }
    }

    /// Sets the currency symbol.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets whether to append the additional considerations list.
    #[must_use]
    pub fn with_extras(mut self, include: bool) -> Self {
        self.include_extras = include;
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn write_report<W: Write>(
        &self,
        inputs: &CampusInputs,
        results: &CampusResults,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let c = &self.currency;

        writeln!(
            writer,
            "Hostel Campus Plan: {} Students on {} Acres",
            group_thousands(f64::from(inputs.students), 0),
            inputs.land_acres
        )?;

        writeln!(writer)?;
        writeln!(writer, "Land & Construction Summary")?;
        writeln!(
            writer,
            "- Total Land Area: {} acres ({} sq ft)",
            inputs.land_acres,
            group_thousands(results.land_sqft.trunc(), 0)
        )?;
        writeln!(writer, "- Library Area: {} acres", inputs.library_acres)?;
        writeln!(
            writer,
            "- Residential & Hostel Area: {} sq ft",
            group_thousands(results.residential_land_sqft, 0)
        )?;
        writeln!(
            writer,
            "- Built-up Footprint: {} sq ft",
            group_thousands(results.built_up_footprint, 0)
        )?;
        writeln!(
            writer,
            "- Total Built-up Area (G+{}): {} sq ft",
            inputs.floors.saturating_sub(1),
            group_thousands(results.total_built_up_area, 0)
        )?;

        writeln!(writer)?;
        writeln!(writer, "Accommodation Plan")?;
        writeln!(writer, "- Total Students: {}", inputs.students)?;
        writeln!(
            writer,
            "- 3-Sharing Rooms: {} rooms ({}% of students)",
            results.three_share_rooms, inputs.three_share_pct
        )?;
        writeln!(
            writer,
            "- Single Rooms: {} rooms ({}% of students)",
            results.single_rooms,
            inputs.single_room_pct()
        )?;
        writeln!(writer, "- Total Rooms: {}", results.total_rooms)?;
        writeln!(
            writer,
            "- Avg Built-up Area per Student: {:.2} sq ft",
            results.area_per_student
        )?;
        let ungrouped = results.ungrouped_three_share_students();
        if ungrouped > 0 {
            writeln!(
                writer,
                "- Note: {ungrouped} 3-sharing student(s) do not fill a whole room and are not counted in the room total"
            )?;
        }

        writeln!(writer)?;
        writeln!(writer, "Construction & Infra Cost")?;
        writeln!(
            writer,
            "- Construction Cost: {c} {}",
            format_crore(results.construction_cost)
        )?;
        writeln!(
            writer,
            "- Infra & External Dev: {c} {}",
            format_crore(results.infra_cost)
        )?;
        writeln!(
            writer,
            "- Total Project Cost: {c} {}",
            format_crore(results.total_project_cost)
        )?;

        writeln!(writer)?;
        writeln!(writer, "Annual Operating Costs")?;
        writeln!(
            writer,
            "- Maintenance: {c} {}/year",
            format_crore(results.maintenance_cost_total)
        )?;
        writeln!(
            writer,
            "- Mess (Food): {c} {}/year",
            format_crore(results.mess_cost_total)
        )?;
        writeln!(
            writer,
            "- Total Opex: {c} {}/year",
            format_crore(results.total_opex)
        )?;
        writeln!(
            writer,
            "- Monthly Cost per Student: {c} {}",
            group_thousands(results.cost_per_student_per_month, 0)
        )?;

        if self.include_extras {
            writeln!(writer)?;
            writeln!(writer, "Additional Considerations")?;
            for item in ADDITIONAL_CONSIDERATIONS {
                writeln!(writer, "- {item}")?;
            }
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostelplan_estimate::Estimator;
    use std::io::Cursor;

    fn render(formatter: &TextFormatter, inputs: &CampusInputs) -> String {
        let results = Estimator::compute(inputs);
        let mut output = Cursor::new(Vec::new());
        formatter
            .write_report(inputs, &results, &mut output)
            .unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_default_campus_summary() {
        let report = render(&TextFormatter::new(), &CampusInputs::default());

        assert!(report.starts_with("Hostel Campus Plan: 6,000 Students on 20 Acres\n"));
        assert!(report.contains("- Total Land Area: 20 acres (871,200 sq ft)\n"));
        assert!(report.contains("- Residential & Hostel Area: 784,080 sq ft\n"));
        assert!(report.contains("- Built-up Footprint: 313,632 sq ft\n"));
        assert!(report.contains("- Total Built-up Area (G+3): 1,254,528 sq ft\n"));
        assert!(report.contains("- 3-Sharing Rooms: 1600 rooms (80% of students)\n"));
        assert!(report.contains("- Single Rooms: 1200 rooms (20% of students)\n"));
        assert!(report.contains("- Total Rooms: 2800\n"));
        assert!(report.contains("- Avg Built-up Area per Student: 210.00 sq ft\n"));
        assert!(report.contains("- Construction Cost: ₹ 225.82 Cr\n"));
        assert!(report.contains("- Infra & External Dev: ₹ 45.16 Cr\n"));
        assert!(report.contains("- Total Project Cost: ₹ 270.98 Cr\n"));
        assert!(report.contains("- Maintenance: ₹ 5.40 Cr/year\n"));
        assert!(report.contains("- Mess (Food): ₹ 24.09 Cr/year\n"));
        assert!(report.contains("- Total Opex: ₹ 29.49 Cr/year\n"));
        assert!(report.contains("- Monthly Cost per Student: ₹ 4,096\n"));
        assert!(report.contains("Additional Considerations\n"));
        assert!(!report.contains("Note:"));
    }

    #[test]
    fn test_without_extras() {
        let formatter = TextFormatter::new().with_extras(false);
        let report = render(&formatter, &CampusInputs::default());

        assert!(!report.contains("Additional Considerations"));
        assert!(report.ends_with("- Monthly Cost per Student: ₹ 4,096\n"));
    }

    #[test]
    fn test_custom_currency() {
        let formatter = TextFormatter::new().with_currency("Rs.");
        let report = render(&formatter, &CampusInputs::default());

        assert!(report.contains("- Total Project Cost: Rs. 270.98 Cr\n"));
        assert!(!report.contains('₹'));
    }

    #[test]
    fn test_partial_room_note() {
        let inputs = CampusInputs {
            students: 6001,
            three_share_pct: 100,
            ..Default::default()
        };
        let report = render(&TextFormatter::new(), &inputs);

        assert!(report.contains("- 3-Sharing Rooms: 2000 rooms (100% of students)\n"));
        assert!(report.contains("- Note: 1 3-sharing student(s) do not fill a whole room"));
    }

    #[test]
    fn test_ground_floor_only() {
        let inputs = CampusInputs {
            floors: 1,
            ..Default::default()
        };
        let report = render(&TextFormatter::new(), &inputs);

        assert!(report.contains("- Total Built-up Area (G+0): 313,632 sq ft\n"));
    }
}
