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

//! CSV input and output for perfratio reports.
//!
//! # Reading measurements
//!
//! ```
//! use perfratio_csv::read_table;
//!
//! let table = read_table("name,time\ncc-web-baseline,4.0\ncc-web-swpf,2.0\n").unwrap();
//! assert_eq!(table.workloads().collect::<Vec<_>>(), vec!["cc-web"]);
//! ```
//!
//! # Writing a report
//!
//! ```
//! use perfratio_core::{compute_report, ReportConfig};
//! use perfratio_csv::{read_table, write_report};
//!
//! let table = read_table("name,time\nwA-baseline,10.0\nwA-swpf,5.0\nwA-homp,NA\n").unwrap();
//! let report = compute_report(&table, &ReportConfig::plain_speedup()).unwrap();
//! let csv = write_report(&report).unwrap();
//! assert!(csv.ends_with("wA,2.0,NA,NA\n"));
//! ```
//!
//! Malformed input rows never fail a read; see [`read_table`] for the rules.

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{
    read_table, read_table_reader, read_table_with_config, FromCsvConfig, DEFAULT_MAX_ROWS,
};
pub use to_csv::{write_report, write_report_with_config, write_report_writer, ToCsvConfig};
