//! Display utilities and output formatting for the hostelplan CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use hostelplan_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output format for the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Csv,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
            Format::Csv => Self::Csv,
        }
    }
}

/// Report rendering options.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReportOptions {
    pub(crate) format: Format,
    pub(crate) pretty: bool,
    pub(crate) extras: bool,
}

/// Write the report for one calculation to `writer`.
pub(crate) fn write_report<W: Write>(
    inputs: &CampusInputs,
    results: &CampusResults,
    options: ReportOptions,
    mut writer: W,
) -> Result<()> {
    match OutputFormat::from(options.format) {
        OutputFormat::Text => TextFormatter::new()
            .with_extras(options.extras)
            .write_report(inputs, results, &mut writer)?,
        OutputFormat::Json => JsonFormatter::new()
            .with_pretty(options.pretty)
            .write_report(inputs, results, &mut writer)?,
        OutputFormat::Csv => CsvFormatter::new().write_report(inputs, results, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write the report to a file, or to stdout when no path is given.
pub(crate) fn emit_report(
    inputs: &CampusInputs,
    results: &CampusResults,
    options: ReportOptions,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_report(inputs, results, options, BufWriter::new(file))
        }
        None => write_report(inputs, results, options, std::io::stdout().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: Format) -> String {
        let inputs = CampusInputs::default();
        let results = Estimator::compute(&inputs);
        let options = ReportOptions {
            format,
            pretty: false,
            extras: false,
        };
        let mut output = Vec::new();
        write_report(&inputs, &results, options, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_each_format_renders() {
        assert!(render(Format::Text).contains("Total Rooms: 2800"));
        assert!(render(Format::Json).contains("\"total_rooms\":2800"));
        assert!(render(Format::Csv).contains("accommodation,total_rooms,2800"));
    }

    #[test]
    fn test_emit_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        let inputs = CampusInputs::default();
        let results = Estimator::compute(&inputs);
        let options = ReportOptions {
            format: Format::Csv,
            pretty: false,
            extras: true,
        };

        emit_report(&inputs, &results, options, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("section,metric,value\n"));
    }
}
