//! Benchmark fixtures for hostelplan.

use hostelplan_lib::CampusInputs;

/// Named campus scenarios covering the sharing-ratio and size extremes.
#[must_use]
pub fn scenarios() -> Vec<(&'static str, CampusInputs)> {
    vec![
        ("default", CampusInputs::default()),
        (
            "all-single",
            CampusInputs {
                three_share_pct: 0,
                ..CampusInputs::default()
            },
        ),
        (
            "all-shared",
            CampusInputs {
                students: 6001,
                three_share_pct: 100,
                ..CampusInputs::default()
            },
        ),
        (
            "large",
            CampusInputs {
                land_acres: 250.0,
                library_acres: 12.5,
                students: 150_000,
                floors: 5,
                ..CampusInputs::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_are_valid() {
        for (name, inputs) in scenarios() {
            assert!(inputs.validate().is_ok(), "{name} should be valid");
        }
    }
}
