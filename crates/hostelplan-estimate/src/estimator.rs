//! Campus estimation logic.

use hostelplan_types::constants::{
    AREA_PER_SINGLE_STUDENT_SQFT, AREA_PER_THREE_SHARE_STUDENT_SQFT, DAYS_PER_YEAR,
    FOOTPRINT_COVERAGE_RATIO, MONTHS_PER_YEAR, SQFT_PER_ACRE, THREE_SHARE_ROOM_CAPACITY,
};
use hostelplan_types::{CampusInputs, CampusResults, InvalidInput};

/// Campus area, room and cost estimator.
///
/// Every figure is recomputed from the inputs on each call; the estimator
/// holds no state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator;

impl Estimator {
    /// Validates the inputs and derives the campus figures.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the first violated constraint, or
    /// [`InvalidInput::ResultOverflow`] when finite inputs are large enough
    /// to overflow a derived figure. No partial results are produced.
    pub fn estimate(inputs: &CampusInputs) -> Result<CampusResults, InvalidInput> {
        if let Err(err) = inputs.validate() {
            tracing::debug!(field = err.field(), %err, "rejected campus inputs");
            return Err(err);
        }

        let results = Self::compute(inputs);
        if let Some(field) = results.non_finite_field() {
            tracing::debug!(field, "derived figure overflowed");
            return Err(InvalidInput::ResultOverflow { field });
        }

        tracing::debug!(
            students = inputs.students,
            total_rooms = results.total_rooms,
            total_project_cost = results.total_project_cost,
            total_opex = results.total_opex,
            "estimated campus"
        );
        Ok(results)
    }

    /// Derives the campus figures from inputs that already passed validation.
    ///
    /// Room counts only include full 3-sharing rooms; up to two 3-sharing
    /// students per calculation are left out of
    /// [`three_share_rooms`](CampusResults::three_share_rooms).
    ///
    /// Zero students yields non-finite per-student figures. Use
    /// [`estimate`](Self::estimate) for unchecked inputs.
    #[must_use]
    pub fn compute(inputs: &CampusInputs) -> CampusResults {
        let students = inputs.students;

        // Land
        let land_sqft = inputs.land_acres * SQFT_PER_ACRE;
        let library_sqft = inputs.library_acres * SQFT_PER_ACRE;
        let residential_land_sqft = land_sqft - library_sqft;
        let built_up_footprint = FOOTPRINT_COVERAGE_RATIO * residential_land_sqft;
        let total_built_up_area = built_up_footprint * f64::from(inputs.floors);

        // Rooms
        let three_share_students = Self::three_share_students(students, inputs.three_share_pct);
        let single_room_students = students - three_share_students;
        let three_share_rooms = three_share_students / THREE_SHARE_ROOM_CAPACITY;
        let single_rooms = single_room_students;
        let total_rooms = three_share_rooms + single_rooms;

        let area_needed = u64::from(three_share_students) * AREA_PER_THREE_SHARE_STUDENT_SQFT
            + u64::from(single_room_students) * AREA_PER_SINGLE_STUDENT_SQFT;
        let area_per_student = area_needed as f64 / f64::from(students);

        // Capital cost
        let construction_cost = total_built_up_area * inputs.avg_cost_per_sqft;
        let infra_cost = construction_cost * (inputs.infra_cost_multiplier_pct / 100.0);
        let total_project_cost = construction_cost + infra_cost;

        // Operating cost
        let maintenance_cost_total = inputs.maintenance_cost_per_student * f64::from(students);
        let mess_cost_total =
            inputs.food_cost_per_day_per_student * f64::from(students) * DAYS_PER_YEAR;
        let total_opex = maintenance_cost_total + mess_cost_total;
        let cost_per_student_per_month = total_opex / f64::from(students) / MONTHS_PER_YEAR;

        CampusResults {
            land_sqft,
            library_sqft,
            residential_land_sqft,
            built_up_footprint,
            total_built_up_area,
            three_share_students,
            single_room_students,
            three_share_rooms,
            single_rooms,
            total_rooms,
            area_per_student,
            construction_cost,
            infra_cost,
            total_project_cost,
            maintenance_cost_total,
            mess_cost_total,
            total_opex,
            cost_per_student_per_month,
        }
    }

    /// Students in 3-sharing rooms, truncated toward zero.
    ///
    /// Integer arithmetic keeps the split exact; a percentage above 100 is
    /// capped at the full student count.
    fn three_share_students(students: u32, three_share_pct: u8) -> u32 {
        let share = u64::from(students) * u64::from(three_share_pct) / 100;
        u32::try_from(share).map_or(students, |share| share.min(students))
    }
}
