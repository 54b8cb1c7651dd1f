// Dweve perfratio - Benchmark speedup and saving reports
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Report commands - speedup and saving tables from measurement CSV

use super::{load_config, read_file_bytes, write_output, STDOUT_PATH};
use crate::error::CliError;
use colored::Colorize;
use perfratio_core::{compute_report, MetricKind, ReportConfig};
use perfratio_csv::{read_table_reader, write_report, FromCsvConfig};
use tracing::info;

/// Adjustments applied on top of a preset or a loaded config.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions<'a> {
    /// JSON config file replacing the preset.
    pub config: Option<&'a str>,
    /// Drop the selected column and the override.
    pub no_selection: bool,
    /// Omit the separator and geomean rows.
    pub no_summary: bool,
}

impl ReportOptions<'_> {
    fn resolve(&self, metric: MetricKind, preset: ReportConfig) -> Result<ReportConfig, CliError> {
        let mut config = match self.config {
            Some(path) => load_config(path)?,
            None => preset,
        };
        config.metric = metric;
        if self.no_selection {
            config.selection = None;
        }
        if self.no_summary {
            config.summary = false;
        }
        Ok(config)
    }
}

/// Compute a speedup report from execution times.
///
/// # Examples
///
/// ```no_run
/// use perfratio_cli::commands::{speedup, ReportOptions};
///
/// # fn main() -> Result<(), perfratio_cli::error::CliError> {
/// // Selection-aware report with geomean row
/// speedup("time.csv", "speedup.csv", &ReportOptions::default())?;
///
/// // Raw per-variant speedups
/// let plain = ReportOptions {
///     no_selection: true,
///     no_summary: true,
///     ..Default::default()
/// };
/// speedup("time.csv", "-", &plain)?;
/// # Ok(())
/// # }
/// ```
pub fn speedup(input: &str, output: &str, options: &ReportOptions<'_>) -> Result<(), CliError> {
    let config = options.resolve(MetricKind::Speedup, ReportConfig::speedup())?;
    report(input, output, &config)
}

/// Compute an energy saving report.
pub fn saving(input: &str, output: &str, options: &ReportOptions<'_>) -> Result<(), CliError> {
    let config = options.resolve(MetricKind::Saving, ReportConfig::saving())?;
    report(input, output, &config)
}

/// Read `input`, compute the report described by `config` and write it to
/// `output` (`-` for stdout).
///
/// # Errors
///
/// Returns `Err` if the input cannot be read, the config is invalid, or the
/// output cannot be written. Malformed measurement rows, including lines that
/// are not valid UTF-8, are dropped and are not errors.
pub fn report(input: &str, output: &str, config: &ReportConfig) -> Result<(), CliError> {
    let content = read_file_bytes(input)?;
    let table = read_table_reader(&content[..], &FromCsvConfig::default())?;
    let report = compute_report(&table, config)?;
    let csv = write_report(&report)?;

    write_output(&csv, output)?;
    info!(input, output, workloads = report.rows().len(), "report written");

    if output != STDOUT_PATH {
        eprintln!(
            "{} {} workloads → {}",
            "✓".green().bold(),
            report.rows().len(),
            output
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_speedup_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "time.csv", "name,time\nwA-baseline,10.0\nwA-swpf,5.0\n");
        let output = dir.path().join("speedup.csv");
        let output = output.to_str().unwrap();

        speedup(&input, output, &ReportOptions::default()).unwrap();
        let written = fs::read_to_string(output).unwrap();
        assert!(written.contains("wA,0,2.0,NA,NA\n"));
        assert!(written.ends_with("\ngeomean,-,2.0,NA,NA\n"));
    }

    #[test]
    fn test_plain_options() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "time.csv", "name,time\nwA-baseline,10.0\nwA-swpf,5.0\n");
        let output = dir.path().join("plain.csv");
        let output = output.to_str().unwrap();

        let options = ReportOptions {
            no_selection: true,
            no_summary: true,
            ..Default::default()
        };
        speedup(&input, output, &options).unwrap();
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "workload,swpf speedup,homp speedup,ghost speedup\nwA,2.0,NA,NA\n"
        );
    }

    #[test]
    fn test_saving_forces_metric_over_config() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_input(&dir, "energy.csv", "name,energy\nw-baseline,100\nw-fast,80\n");
        let config = write_input(
            &dir,
            "report.json",
            r#"{ "metric": "speedup", "columns": [{ "variant": "fast", "label": "fast" }] }"#,
        );
        let output = dir.path().join("saving.csv");
        let output = output.to_str().unwrap();

        let options = ReportOptions {
            config: Some(&config),
            ..Default::default()
        };
        saving(&input, output, &options).unwrap();
        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "workload,fast saving\nw,0.20\n\ngeomean,0.20\n"
        );
    }

    #[test]
    fn test_invalid_utf8_row_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("time.csv");
        fs::write(
            &input,
            b"name,time\nwA-baseline,10.0\nwA-swpf,5.0\ncaf\xe9-baseline,1.0\n",
        )
        .unwrap();
        let output = dir.path().join("speedup.csv");
        let output = output.to_str().unwrap();

        speedup(input.to_str().unwrap(), output, &ReportOptions::default()).unwrap();
        let written = fs::read_to_string(output).unwrap();
        assert!(written.contains("wA,0,2.0,NA,NA\n"));
        assert!(!written.contains("caf"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let err = speedup(
            "/nonexistent/time.csv",
            output.to_str().unwrap(),
            &ReportOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
        assert!(!output.exists());
    }
}
