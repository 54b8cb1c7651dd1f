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

//! Serialize a [`Report`] to CSV.
//!
//! Layout: header row, one row per workload, and, when the report carries a
//! summary, an empty separator line followed by the geometric-mean row.

use crate::error::{CsvError, Result};
use perfratio_core::Report;
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

impl ToCsvConfig {
    fn builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .delimiter(self.delimiter)
            .quote_style(self.quote_style)
            .terminator(csv::Terminator::Any(b'\n'));
        builder
    }
}

/// Convert a report to a CSV string.
///
/// # Example
///
/// ```
/// use perfratio_core::{compute_report, MeasurementTable, ReportConfig};
/// use perfratio_csv::write_report;
///
/// let table = MeasurementTable::parse("name,energy\nwB-baseline,100.0\nwB-swpf,80.0\n");
/// let report = compute_report(&table, &ReportConfig::saving()).unwrap();
///
/// assert_eq!(
///     write_report(&report).unwrap(),
///     "workload,selected by heuristic,swpf saving,homp saving,ghost saving\n\
///      wB,0,0.20,NA,NA\n\
///      \n\
///      geomean,,0.20,0.00,0.00\n"
/// );
/// ```
pub fn write_report(report: &Report) -> Result<String> {
    write_report_with_config(report, &ToCsvConfig::default())
}

/// Convert a report to a CSV string with custom configuration.
pub fn write_report_with_config(report: &Report, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_size(report));
    write_report_writer(report, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a report as CSV into any writer.
pub fn write_report_writer<W: Write>(
    report: &Report,
    mut writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    {
        let mut wtr = config.builder().from_writer(&mut writer);
        wtr.write_record(report.header())?;
        for row in report.rows() {
            wtr.write_record(report.row_cells(row))?;
        }
        wtr.flush()?;
    }

    if let Some(cells) = report.summary_cells() {
        writer.write_all(b"\n")?;
        let mut wtr = config.builder().from_writer(&mut writer);
        wtr.write_record(&cells)?;
        wtr.flush()?;
    }

    Ok(())
}

fn estimate_size(report: &Report) -> usize {
    // ~10 bytes per cell is plenty for names and two-digit ratios
    let width = report.header().len().max(1);
    (report.rows().len() + 3) * width * 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfratio_core::{compute_report, MeasurementTable, ReportConfig};

    fn report(config: ReportConfig, input: &str) -> Report {
        compute_report(&MeasurementTable::parse(input), &config).unwrap()
    }

    #[test]
    fn test_to_csv_config_default() {
        let config = ToCsvConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(matches!(config.quote_style, csv::QuoteStyle::Necessary));
    }

    #[test]
    fn test_plain_report() {
        let r = report(
            ReportConfig::plain_speedup(),
            "name,time\nwA-baseline,10.0\nwA-swpf,5.0\nwA-homp,NA\n",
        );
        assert_eq!(
            write_report(&r).unwrap(),
            "workload,swpf speedup,homp speedup,ghost speedup\nwA,2.0,NA,NA\n"
        );
    }

    #[test]
    fn test_speedup_report_with_summary() {
        let r = report(
            ReportConfig::speedup(),
            "name,time\nwA-baseline,10.0\nwA-swpf,5.0\nwA-homp,NA\n",
        );
        assert_eq!(
            write_report(&r).unwrap(),
            "workload,selected by heuristic,swpf speedup,homp speedup,ghost speedup\n\
             wA,0,2.0,NA,NA\n\
             \n\
             geomean,-,2.0,NA,NA\n"
        );
    }

    #[test]
    fn test_empty_report_keeps_separator() {
        let r = report(ReportConfig::saving(), "");
        assert_eq!(
            write_report(&r).unwrap(),
            "workload,selected by heuristic,swpf saving,homp saving,ghost saving\n\
             \n\
             geomean,,0.00,0.00,0.00\n"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let r = report(
            ReportConfig::plain_speedup(),
            "name,time\nw-baseline,4\nw-swpf,2\n",
        );
        let config = ToCsvConfig {
            delimiter: b'\t',
            ..Default::default()
        };
        let out = write_report_with_config(&r, &config).unwrap();
        assert_eq!(out.lines().nth(1), Some("w\t2.0\tNA\tNA"));
    }

    #[test]
    fn test_writer_output_matches_string() {
        let r = report(ReportConfig::speedup(), "name,time\nhj2-baseline,3\nhj2-htpf,1\n");
        let mut buffer = Vec::new();
        write_report_writer(&r, &mut buffer, &ToCsvConfig::default()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), write_report(&r).unwrap());
    }
}
