//! Derived campus figures.

use serde::{Deserialize, Serialize};

use crate::constants::THREE_SHARE_ROOM_CAPACITY;

/// Figures derived from one set of [`CampusInputs`](crate::CampusInputs).
///
/// Areas are in square feet and money is in rupees. Annual figures cover
/// one academic year of 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampusResults {
    /// Total plot area.
    pub land_sqft: f64,
    /// Library land.
    pub library_sqft: f64,
    /// Land left for residential blocks after the library.
    pub residential_land_sqft: f64,
    /// Ground coverage of the residential blocks.
    pub built_up_footprint: f64,
    /// Footprint multiplied by the floor count.
    pub total_built_up_area: f64,

    /// Students placed in 3-sharing rooms.
    pub three_share_students: u32,
    /// Students placed in single rooms.
    pub single_room_students: u32,
    /// Full 3-sharing rooms.
    pub three_share_rooms: u32,
    /// Single rooms, one per student.
    pub single_rooms: u32,
    /// All rooms.
    pub total_rooms: u32,
    /// Average built-up allowance per student.
    pub area_per_student: f64,

    /// Building construction cost.
    pub construction_cost: f64,
    /// Infrastructure and external development cost.
    pub infra_cost: f64,
    /// Construction plus infrastructure.
    pub total_project_cost: f64,

    /// Annual maintenance for all students.
    pub maintenance_cost_total: f64,
    /// Annual food cost for all students.
    pub mess_cost_total: f64,
    /// Annual operating expenditure.
    pub total_opex: f64,
    /// Operating expenditure per student per month.
    pub cost_per_student_per_month: f64,
}

impl CampusResults {
    /// Returns the number of 3-sharing students left over after filling whole rooms.
    ///
    /// These students are not counted in [`three_share_rooms`](Self::three_share_rooms).
    #[must_use]
    pub const fn ungrouped_three_share_students(&self) -> u32 {
        self.three_share_students % THREE_SHARE_ROOM_CAPACITY
    }

    /// Returns the name of the first real-valued figure that is NaN or infinite.
    #[must_use]
    pub fn non_finite_field(&self) -> Option<&'static str> {
        [
            ("land_sqft", self.land_sqft),
            ("library_sqft", self.library_sqft),
            ("residential_land_sqft", self.residential_land_sqft),
            ("built_up_footprint", self.built_up_footprint),
            ("total_built_up_area", self.total_built_up_area),
            ("area_per_student", self.area_per_student),
            ("construction_cost", self.construction_cost),
            ("infra_cost", self.infra_cost),
            ("total_project_cost", self.total_project_cost),
            ("maintenance_cost_total", self.maintenance_cost_total),
            ("mess_cost_total", self.mess_cost_total),
            ("total_opex", self.total_opex),
            ("cost_per_student_per_month", self.cost_per_student_per_month),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
    }
}
