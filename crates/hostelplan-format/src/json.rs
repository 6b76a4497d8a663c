//! JSON output format.

use hostelplan_types::{CampusInputs, CampusResults};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, ReportFormatter};

/// Document written by [`JsonFormatter`].
#[derive(Debug, Serialize)]
struct Report<'a> {
    inputs: &'a CampusInputs,
    single_room_pct: u8,
    results: &'a CampusResults,
}

/// JSON formatter.
///
/// Writes `{"inputs": {..}, "single_room_pct": n, "results": {..}}` with
/// canonical values in rupees and square feet.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_report<W: Write>(
        &self,
        inputs: &CampusInputs,
        results: &CampusResults,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let report = Report {
            inputs,
            single_room_pct: inputs.single_room_pct(),
            results,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &report)?;
        } else {
            serde_json::to_writer(&mut writer, &report)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
