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

//! Speedup and saving reports from flat benchmark measurement tables.
//!
//! Input is a list of `workload-variant,value` rows, one per measurement.
//! The crate turns those rows into a per-workload comparison against a
//! baseline variant and a geometric-mean summary across workloads.
//!
//! # Pipeline
//!
//! 1. **Load**: [`MeasurementTable`] groups rows by workload, in first-seen
//!    order. Malformed rows are dropped, unparseable values become
//!    [`Measurement::Missing`].
//! 2. **Compute**: [`compute_report`] derives a [`DerivedValue`] per
//!    workload and column according to the [`MetricKind`], applying the
//!    optional [`SelectionPolicy`] override.
//! 3. **Aggregate**: an [`Accumulator`] collects the contributing values of
//!    each column and reduces them to a [`SummaryRow`].
//!
//! # Example
//!
//! ```
//! use perfratio_core::{compute_report, MeasurementTable, ReportConfig};
//!
//! let input = "\
//! name,time
//! bfs-kron-baseline,10.0
//! bfs-kron-swpf,5.0
//! bfs-kron-homp,4.0
//! bfs-kron-htpf,2.0
//! ";
//! let table = MeasurementTable::parse(input);
//! let report = compute_report(&table, &ReportConfig::speedup()).unwrap();
//!
//! let row = report.row("bfs-kron").unwrap();
//! assert_eq!(report.row_cells(row), vec!["bfs-kron", "1", "2.0", "2.5", "5.0"]);
//! assert_eq!(
//!     report.summary_cells().unwrap(),
//!     vec!["geomean", "-", "2.0", "2.5", "5.0"]
//! );
//! ```
//!
//! Text serialization lives in `perfratio-csv`.

mod aggregate;
mod config;
mod error;
mod measurement;
mod metric;
mod report;
mod selection;

pub use aggregate::{geometric_mean, Accumulator, SummaryRow};
pub use config::{
    ColumnSpec, ReportConfig, SelectionPolicy, DEFAULT_BASELINE, DEFAULT_SELECTION_HEADER,
    WORKLOAD_HEADER,
};
pub use error::{ConfigError, Result};
pub use measurement::{split_composite, Measurement, MeasurementTable, VariantMap, MISSING_MARKER};
pub use metric::{round2, DerivedValue, MetricKind};
pub use report::{compute_report, Report, ReportRow, SUMMARY_LABEL};
pub use selection::SelectionSet;
