//! Currency and number display helpers.

use hostelplan_types::constants::RUPEES_PER_CRORE;

/// Converts rupees to crore.
#[must_use]
pub fn to_crore(rupees: f64) -> f64 {
    rupees / RUPEES_PER_CRORE
}

/// Formats rupees as crore with two decimals (e.g., "270.98 Cr").
#[must_use]
pub fn format_crore(rupees: f64) -> String {
    format!("{:.2} Cr", to_crore(rupees))
}

/// Formats a number with comma thousands separators (e.g., "1,254,528").
///
/// Non-finite values are formatted as-is.
#[must_use]
pub fn group_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .map_or((formatted.as_str(), None), |(int, frac)| (int, Some(frac)));

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + decimals + 2);
    if value < 0.0 && formatted.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    grouped
}
