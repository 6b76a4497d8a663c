//! Campus input parameters.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::{InvalidInput, Result};
use crate::constants::{MAX_FLOORS, MIN_FLOORS};

/// Parameters for one campus calculation.
///
/// Missing fields fall back to [`CampusInputs::default`] when deserializing,
/// so a scenario file only needs to list the values it changes. Counts that
/// do not fit their field type are reported as [`InvalidInput`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CampusInputs {
    /// Total plot area in acres.
    pub land_acres: f64,
    /// Land reserved for the library, in acres.
    pub library_acres: f64,
    /// Number of students to house.
    pub students: u32,
    /// Number of floors, ground floor included (1 = G, 5 = G+4).
    pub floors: u8,
    /// Percentage of students placed in 3-sharing rooms.
    pub three_share_pct: u8,
    /// Average construction cost per sqft of built-up area.
    pub avg_cost_per_sqft: f64,
    /// Infrastructure and external development cost, as a percentage of construction.
    pub infra_cost_multiplier_pct: f64,
    /// Annual maintenance cost per student.
    pub maintenance_cost_per_student: f64,
    /// Daily food cost per student.
    pub food_cost_per_day_per_student: f64,
}

impl CampusInputs {
    /// Percentage of students placed in single rooms.
    ///
    /// Saturates at zero for an out-of-range sharing percentage.
    #[must_use]
    pub const fn single_room_pct(&self) -> u8 {
        100u8.saturating_sub(self.three_share_pct)
    }

    /// Checks every input constraint, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the violated constraint.
    pub fn validate(&self) -> std::result::Result<(), InvalidInput> {
        for (field, value) in self.real_fields() {
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { field, value });
            }
        }

        if self.land_acres <= 0.0 {
            return Err(InvalidInput::NonPositiveLand(self.land_acres));
        }
        if self.library_acres < 0.0 {
            return Err(InvalidInput::Negative {
                field: "library_acres",
                value: self.library_acres,
            });
        }
        if self.library_acres > self.land_acres {
            return Err(InvalidInput::LibraryExceedsLand {
                library: self.library_acres,
                land: self.land_acres,
            });
        }
        if self.students == 0 {
            return Err(InvalidInput::NoStudents);
        }
        if !(MIN_FLOORS..=MAX_FLOORS).contains(&self.floors) {
            return Err(InvalidInput::FloorsOutOfRange(i64::from(self.floors)));
        }
        if self.three_share_pct > 100 {
            return Err(InvalidInput::ThreeSharePctOutOfRange(i64::from(
                self.three_share_pct,
            )));
        }

        for (field, value) in self.cost_fields() {
            if value < 0.0 {
                return Err(InvalidInput::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Consumes the inputs, returning them only if they pass [`validate`](Self::validate).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the violated constraint.
    pub fn validated(self) -> std::result::Result<Self, InvalidInput> {
        self.validate()?;
        Ok(self)
    }

    /// Reads inputs from a JSON scenario file.
    ///
    /// Fields missing from the file take their default values. The result
    /// is not validated, so later overrides can still correct it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid scenario.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reads inputs from a JSON scenario string.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Json`](crate::PlanError::Json) for malformed JSON
    /// and [`PlanError::InvalidInput`](crate::PlanError::InvalidInput) for a
    /// count that does not fit its field.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCampusInputs = serde_json::from_str(json)?;
        Ok(raw.into_inputs()?)
    }

    const fn cost_fields(&self) -> [(&'static str, f64); 4] {
        [
            ("avg_cost_per_sqft", self.avg_cost_per_sqft),
            ("infra_cost_multiplier_pct", self.infra_cost_multiplier_pct),
            ("maintenance_cost_per_student", self.maintenance_cost_per_student),
            ("food_cost_per_day_per_student", self.food_cost_per_day_per_student),
        ]
    }

    const fn real_fields(&self) -> [(&'static str, f64); 6] {
        let costs = self.cost_fields();
        [
            ("land_acres", self.land_acres),
            ("library_acres", self.library_acres),
            costs[0],
            costs[1],
            costs[2],
            costs[3],
        ]
    }
}

impl<'de> Deserialize<'de> for CampusInputs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawCampusInputs::deserialize(deserializer)?
            .into_inputs()
            .map_err(serde::de::Error::custom)
    }
}

/// Scenario shape with wide signed counts.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCampusInputs {
    land_acres: f64,
    library_acres: f64,
    students: i64,
    floors: i64,
    three_share_pct: i64,
    avg_cost_per_sqft: f64,
    infra_cost_multiplier_pct: f64,
    maintenance_cost_per_student: f64,
    food_cost_per_day_per_student: f64,
}

impl RawCampusInputs {
    /// Narrows the counts, mapping values outside the field type to the
    /// constraint they break. In-type range checks are left to
    /// [`CampusInputs::validate`].
    fn into_inputs(self) -> std::result::Result<CampusInputs, InvalidInput> {
        let students = u32::try_from(self.students).map_err(|_| {
            if self.students < 0 {
                InvalidInput::NoStudents
            } else {
                InvalidInput::TooManyStudents(self.students)
            }
        })?;
        let floors = u8::try_from(self.floors)
            .map_err(|_| InvalidInput::FloorsOutOfRange(self.floors))?;
        let three_share_pct = u8::try_from(self.three_share_pct)
            .map_err(|_| InvalidInput::ThreeSharePctOutOfRange(self.three_share_pct))?;

        Ok(CampusInputs {
            land_acres: self.land_acres,
            library_acres: self.library_acres,
            students,
            floors,
            three_share_pct,
            avg_cost_per_sqft: self.avg_cost_per_sqft,
            infra_cost_multiplier_pct: self.infra_cost_multiplier_pct,
            maintenance_cost_per_student: self.maintenance_cost_per_student,
            food_cost_per_day_per_student: self.food_cost_per_day_per_student,
        })
    }
}

impl Default for RawCampusInputs {
    fn default() -> Self {
        let defaults = CampusInputs::default();
        Self {
            land_acres: defaults.land_acres,
            library_acres: defaults.library_acres,
            students: i64::from(defaults.students),
            floors: i64::from(defaults.floors),
            three_share_pct: i64::from(defaults.three_share_pct),
            avg_cost_per_sqft: defaults.avg_cost_per_sqft,
            infra_cost_multiplier_pct: defaults.infra_cost_multiplier_pct,
            maintenance_cost_per_student: defaults.maintenance_cost_per_student,
            food_cost_per_day_per_student: defaults.food_cost_per_day_per_student,
        }
    }
}

impl Default for CampusInputs {
    /// A 6,000-student campus on 20 acres.
    fn default() -> Self {
        Self {
            land_acres: 20.0,
            library_acres: 2.0,
            students: 6000,
            floors: 4,
            three_share_pct: 80,
            avg_cost_per_sqft: 1800.0,
            infra_cost_multiplier_pct: 20.0,
            maintenance_cost_per_student: 9000.0,
            food_cost_per_day_per_student: 110.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanError;

    #[test]
    fn test_defaults_are_valid() {
        let inputs = CampusInputs::default();
        assert!(inputs.validate().is_ok());
        assert_eq!(inputs.single_room_pct(), 20);
    }

    #[test]
    fn test_zero_students_rejected() {
        let inputs = CampusInputs {
            students: 0,
            ..Default::default()
        };
        assert_eq!(inputs.validate(), Err(InvalidInput::NoStudents));
    }

    #[test]
    fn test_library_larger_than_land_rejected() {
        let inputs = CampusInputs {
            land_acres: 2.0,
            library_acres: 2.5,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InvalidInput::LibraryExceedsLand {
                library: 2.5,
                land: 2.0
            })
        );
    }

    #[test]
    fn test_library_equal_to_land_accepted() {
        let inputs = CampusInputs {
            land_acres: 2.0,
            library_acres: 2.0,
            ..Default::default()
        };
        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_floor_bounds() {
        for floors in [0, 6, 255] {
            let inputs = CampusInputs {
                floors,
                ..Default::default()
            };
            assert_eq!(
                inputs.validate(),
                Err(InvalidInput::FloorsOutOfRange(i64::from(floors)))
            );
        }
        for floors in MIN_FLOORS..=MAX_FLOORS {
            let inputs = CampusInputs {
                floors,
                ..Default::default()
            };
            assert!(inputs.validate().is_ok());
        }
    }

    #[test]
    fn test_three_share_pct_bounds() {
        let inputs = CampusInputs {
            three_share_pct: 101,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InvalidInput::ThreeSharePctOutOfRange(101))
        );
        assert_eq!(inputs.single_room_pct(), 0);

        let all_shared = CampusInputs {
            three_share_pct: 100,
            ..Default::default()
        };
        assert!(all_shared.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected_before_range_checks() {
        let inputs = CampusInputs {
            land_acres: f64::NAN,
            students: 0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InvalidInput::NotFinite {
                field: "land_acres",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let inputs = CampusInputs {
            maintenance_cost_per_student: -5.0,
            ..Default::default()
        };
        assert_eq!(
            inputs.validate(),
            Err(InvalidInput::Negative {
                field: "maintenance_cost_per_student",
                value: -5.0
            })
        );
    }

    #[test]
    fn test_non_positive_land_rejected() {
        let inputs = CampusInputs {
            land_acres: 0.0,
            library_acres: 0.0,
            ..Default::default()
        };
        assert_eq!(inputs.validate(), Err(InvalidInput::NonPositiveLand(0.0)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let inputs: CampusInputs =
            serde_json::from_str(r#"{"students": 3000, "floors": 3}"#).unwrap();
        assert_eq!(inputs.students, 3000);
        assert_eq!(inputs.floors, 3);
        assert_eq!(inputs.land_acres, 20.0);
        assert_eq!(inputs.three_share_pct, 80);
    }

    #[test]
    fn test_unknown_json_field_rejected() {
        let result: serde_json::Result<CampusInputs> =
            serde_json::from_str(r#"{"studnets": 3000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_students_in_json_is_invalid_input() {
        let err = CampusInputs::from_json_str(r#"{"students": -5}"#).unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidInput(InvalidInput::NoStudents)
        ));

        let err = serde_json::from_str::<CampusInputs>(r#"{"students": -5}"#).unwrap_err();
        assert!(err.to_string().contains("students must be greater than 0"));
    }

    #[test]
    fn test_oversized_counts_in_json_name_their_field() {
        let cases = [
            (
                r#"{"three_share_pct": 300}"#,
                InvalidInput::ThreeSharePctOutOfRange(300),
            ),
            (r#"{"floors": -1}"#, InvalidInput::FloorsOutOfRange(-1)),
            (r#"{"floors": 256}"#, InvalidInput::FloorsOutOfRange(256)),
            (
                r#"{"students": 5000000000}"#,
                InvalidInput::TooManyStudents(5_000_000_000),
            ),
        ];

        for (json, expected) in cases {
            match CampusInputs::from_json_str(json) {
                Err(PlanError::InvalidInput(err)) => assert_eq!(err, expected, "{json}"),
                other => panic!("expected invalid input for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_in_type_range_violations_left_to_validate() {
        let inputs = CampusInputs::from_json_str(r#"{"three_share_pct": 150}"#).unwrap();
        assert_eq!(
            inputs.validate(),
            Err(InvalidInput::ThreeSharePctOutOfRange(150))
        );
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = CampusInputs::from_json_str(r#"{"students": "many"}"#).unwrap_err();
        assert!(matches!(err, PlanError::Json(_)));
    }

    #[test]
    fn test_validated() {
        let inputs = CampusInputs::default();
        assert_eq!(inputs.validated(), Ok(inputs));

        let no_students = CampusInputs {
            students: 0,
            ..Default::default()
        };
        assert_eq!(no_students.validated(), Err(InvalidInput::NoStudents));
    }

    #[test]
    fn test_from_missing_json_file() {
        let err = CampusInputs::from_json_file("/nonexistent/hostelplan/campus.json").unwrap_err();
        assert!(matches!(err, PlanError::Io(_)));
    }
}
