//! Defaults command implementation.

use anyhow::Result;
use hostelplan_lib::prelude::*;

/// Print the default scenario as pretty JSON.
pub(crate) fn show_defaults() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&CampusInputs::default())?);
    Ok(())
}
