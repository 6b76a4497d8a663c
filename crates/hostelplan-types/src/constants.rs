//! Planning constants.

/// Square feet in one acre.
pub const SQFT_PER_ACRE: f64 = 43_560.0;

/// Share of residential land that may be covered by building footprint.
pub const FOOTPRINT_COVERAGE_RATIO: f64 = 0.40;

/// Built-up area allowance for a student in a 3-sharing room, in sqft.
pub const AREA_PER_THREE_SHARE_STUDENT_SQFT: u64 = 200;

/// Built-up area allowance for a student in a single room, in sqft.
pub const AREA_PER_SINGLE_STUDENT_SQFT: u64 = 250;

/// Students per 3-sharing room.
pub const THREE_SHARE_ROOM_CAPACITY: u32 = 3;

/// Days used to annualize per-day costs.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months used to turn annual costs into monthly ones.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Lowest allowed floor count (ground floor only).
pub const MIN_FLOORS: u8 = 1;

/// Highest allowed floor count (G+4).
pub const MAX_FLOORS: u8 = 5;

/// Rupees in one crore.
pub const RUPEES_PER_CRORE: f64 = 10_000_000.0;
