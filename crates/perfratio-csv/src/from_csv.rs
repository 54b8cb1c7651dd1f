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

//! Read `name,value` measurement CSV into a [`MeasurementTable`].

use crate::error::{CsvError, Result};
use perfratio_core::MeasurementTable;
use std::io::Read;
use tracing::debug;

/// Default maximum number of data rows.
///
/// Measurement tables are small; the limit only guards against feeding the
/// tool a file that is not a measurement table at all.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ```
/// # use perfratio_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let tsv = FromCsvConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows to read (default: 1,000,000).
    ///
    /// Dropped rows count towards the limit.
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse measurement CSV with default configuration.
///
/// The first non-blank line is the header and is discarded. Every other
/// record must have exactly two fields, `workload-variant` and a value;
/// records of any other width, with a key that has no hyphen, or with
/// non-UTF-8 content are skipped. Quote characters have no special meaning.
///
/// # Examples
///
/// ```
/// use perfratio_csv::read_table;
/// use perfratio_core::Measurement;
///
/// let table = read_table("name,time\nbfs-kron-baseline,10.0\nbfs-kron-swpf,NA\n").unwrap();
/// assert_eq!(table.get("bfs-kron", "baseline"), Measurement::Value(10.0));
/// assert!(table.get("bfs-kron", "swpf").is_missing());
/// ```
pub fn read_table(csv: &str) -> Result<MeasurementTable> {
    read_table_with_config(csv, &FromCsvConfig::default())
}

/// Parse measurement CSV from a string with custom configuration.
pub fn read_table_with_config(csv: &str, config: &FromCsvConfig) -> Result<MeasurementTable> {
    read_table_reader(csv.as_bytes(), config)
}

/// Parse measurement CSV from any reader.
///
/// # Errors
///
/// Returns [`CsvError::CsvLib`] when the underlying reader fails and
/// [`CsvError::SecurityLimit`] when more than `config.max_rows` data rows are
/// present.
///
/// # Examples
///
/// ```no_run
/// use perfratio_csv::{read_table_reader, FromCsvConfig};
/// use std::fs::File;
///
/// let file = File::open("time.csv").unwrap();
/// let table = read_table_reader(file, &FromCsvConfig::default()).unwrap();
/// ```
pub fn read_table_reader<R: Read>(reader: R, config: &FromCsvConfig) -> Result<MeasurementTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut table = MeasurementTable::new();
    let mut header_seen = false;
    let mut rows = 0usize;
    let mut dropped = 0usize;

    for result in rdr.byte_records() {
        let record = result?;
        if is_blank(&record) {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }

        if rows >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: rows + 1,
            });
        }
        rows += 1;

        let line = record.position().map_or(0, |p| p.line());
        let fields = match (record.len(), record.get(0), record.get(1)) {
            (2, Some(name), Some(value)) => std::str::from_utf8(name)
                .ok()
                .zip(std::str::from_utf8(value).ok()),
            _ => None,
        };

        let accepted = match fields {
            Some((name, value)) => table.insert_row(name, value),
            None => {
                debug!(line, width = record.len(), "dropping record that is not a name,value pair");
                false
            }
        };
        if !accepted {
            dropped += 1;
        }
    }

    debug!(workloads = table.len(), dropped, "measurement CSV loaded");
    Ok(table)
}

/// A line holding only whitespace.
fn is_blank(record: &csv::ByteRecord) -> bool {
    record.len() == 1 && record[0].iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfratio_core::Measurement;

    #[test]
    fn test_read_basic() {
        let table = read_table("name,time\nw-baseline,10\nw-swpf,5\n").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("w", "baseline"), Measurement::Value(10.0));
        assert_eq!(table.get("w", "swpf"), Measurement::Value(5.0));
    }

    #[test]
    fn test_header_is_discarded() {
        let table = read_table("x-baseline,1\ny-baseline,2\n").unwrap();
        assert!(!table.contains_workload("x"));
        assert!(table.contains_workload("y"));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let table = read_table("name,time\n\nw-baseline,1\n  \n\nw-swpf,2\n").unwrap();
        assert_eq!(table.variants("w").map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_wrong_width_rows_are_dropped() {
        let table = read_table("name,time\nw-baseline,1,2\nw-swpf\nw-homp,3\n").unwrap();
        assert_eq!(table.variants("w").map(|v| v.len()), Some(1));
        assert_eq!(table.get("w", "homp"), Measurement::Value(3.0));
    }

    #[test]
    fn test_unhyphenated_rows_are_dropped() {
        let table = read_table("name,time\nfoo,1.0\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let table = read_table("name,time\n w-baseline , 7.5 \n").unwrap();
        assert_eq!(table.get("w", "baseline"), Measurement::Value(7.5));
    }

    #[test]
    fn test_stray_quote_stays_on_its_line() {
        let csv = "name,time\nwA-baseline,\"10\nwA-swpf,5\nwB-baseline,4\nwB-swpf,2\n";
        let table = read_table(csv).unwrap();
        assert_eq!(table.workloads().collect::<Vec<_>>(), vec!["wA", "wB"]);
        assert!(table.get("wA", "baseline").is_missing());
        assert_eq!(table.get("wA", "swpf"), Measurement::Value(5.0));
        assert_eq!(table.get("wB", "swpf"), Measurement::Value(2.0));
    }

    #[test]
    fn test_whitespace_line_before_header() {
        let table = read_table("   \nbench-name,time\nwA-baseline,10\nwA-swpf,5\n").unwrap();
        assert_eq!(table.workloads().collect::<Vec<_>>(), vec!["wA"]);
    }

    #[test]
    fn test_whitespace_line_before_header_untrimmed() {
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        let table =
            read_table_with_config(" \t \nbench-name,time\nwA-baseline,10\n", &config).unwrap();
        assert!(!table.contains_workload("bench"));
        assert!(table.contains_workload("wA"));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = FromCsvConfig {
            delimiter: b';',
            ..Default::default()
        };
        let table = read_table_with_config("name;time\nw-baseline;3\n", &config).unwrap();
        assert_eq!(table.get("w", "baseline"), Measurement::Value(3.0));
    }

    #[test]
    fn test_invalid_utf8_row_is_dropped() {
        let mut bytes = b"name,time\n".to_vec();
        bytes.extend_from_slice(b"w-\xff\xfe,1\n");
        bytes.extend_from_slice(b"w-baseline,2\n");
        let table = read_table_reader(&bytes[..], &FromCsvConfig::default()).unwrap();
        assert_eq!(table.variants("w").map(|v| v.len()), Some(1));
    }

    #[test]
    fn test_row_limit() {
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let csv = "name,time\na-baseline,1\nb-baseline,2\nc-baseline,3\n";
        let err = read_table_with_config(csv, &config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_row_limit_exact_is_ok() {
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let table = read_table_with_config("name,time\na-baseline,1\nb-baseline,2\n", &config).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_table("").unwrap().is_empty());
        assert!(read_table("name,time\n").unwrap().is_empty());
    }
}
