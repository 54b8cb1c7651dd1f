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

//! Metric computation over a measurement table.
//!
//! [`compute_report`] walks the workloads in input order, derives one value
//! per comparison column, applies the selection override and feeds an
//! [`Accumulator`] that produces the optional summary row.

use crate::aggregate::{Accumulator, SummaryRow};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::measurement::MeasurementTable;
use crate::metric::{DerivedValue, MetricKind};
use tracing::{debug, info};

/// Label of the summary row.
pub const SUMMARY_LABEL: &str = "geomean";

/// Derived values for one workload.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub workload: String,
    /// `Some` only when the report carries a selection column.
    pub selected: Option<bool>,
    /// One value per comparison column, in column order.
    pub values: Vec<DerivedValue>,
}

/// A finished report, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    metric: MetricKind,
    header: Vec<String>,
    selection_column: bool,
    rows: Vec<ReportRow>,
    summary: Option<SummaryRow>,
}

impl Report {
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn summary(&self) -> Option<&SummaryRow> {
        self.summary.as_ref()
    }

    /// Find the row of a workload.
    pub fn row(&self, workload: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.workload == workload)
    }

    /// Text cells of a data row.
    pub fn row_cells(&self, row: &ReportRow) -> Vec<String> {
        let mut cells = Vec::with_capacity(self.header.len());
        cells.push(row.workload.clone());
        if let Some(selected) = row.selected {
            cells.push(if selected { "1" } else { "0" }.to_string());
        }
        cells.extend(row.values.iter().map(|v| self.metric.render(*v)));
        cells
    }

    /// Text cells of the summary row, if the report has one.
    pub fn summary_cells(&self) -> Option<Vec<String>> {
        let summary = self.summary.as_ref()?;
        let mut cells = Vec::with_capacity(self.header.len());
        cells.push(SUMMARY_LABEL.to_string());
        if self.selection_column {
            cells.push(self.metric.summary_placeholder().to_string());
        }
        cells.extend(summary.means.iter().map(|v| self.metric.render(*v)));
        Some(cells)
    }
}

/// Compute the per-workload metrics and the geometric-mean summary.
///
/// Missing measurements never fail the computation; they surface as
/// [`DerivedValue::NotAvailable`] cells.
///
/// # Errors
///
/// Returns [`crate::ConfigError`] if `config` does not validate.
///
/// # Examples
///
/// ```
/// use perfratio_core::{compute_report, MeasurementTable, ReportConfig};
///
/// let table = MeasurementTable::parse("name,time\nwA-baseline,10.0\nwA-swpf,5.0\nwA-homp,NA\n");
/// let report = compute_report(&table, &ReportConfig::plain_speedup()).unwrap();
///
/// let row = &report.rows()[0];
/// assert_eq!(report.row_cells(row), vec!["wA", "2.0", "NA", "NA"]);
/// ```
pub fn compute_report(table: &MeasurementTable, config: &ReportConfig) -> Result<Report> {
    config.validate()?;

    let metric = config.metric;
    let override_slots = config
        .selection
        .as_ref()
        .map(|policy| config.override_slots(policy).map(|slots| (policy, slots)))
        .transpose()?;

    let mut accumulator = Accumulator::new(metric, config.columns.len());
    let mut rows = Vec::with_capacity(table.len());

    for workload in table.workloads() {
        let baseline = table.get(workload, &config.baseline);
        let mut values: Vec<DerivedValue> = config
            .columns
            .iter()
            .map(|column| metric.derive(baseline, table.get(workload, &column.variant)))
            .collect();

        let selected = override_slots.map(|(policy, (target, source))| {
            let selected = policy.workloads.contains(workload);
            if !selected {
                values[target] = values[source];
            }
            selected
        });

        debug!(workload, ?selected, ?values, "derived workload metrics");
        accumulator.record(&values);
        rows.push(ReportRow {
            workload: workload.to_string(),
            selected,
            values,
        });
    }

    let summary = config.summary.then(|| accumulator.finish());
    info!(metric = %metric, workloads = rows.len(), "report computed");

    Ok(Report {
        metric,
        header: config.header(),
        selection_column: config.selection.is_some(),
        rows,
        summary,
    })
}
