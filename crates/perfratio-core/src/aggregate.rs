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

//! Geometric-mean summary across workloads.

use crate::metric::{DerivedValue, MetricKind};

/// Geometric mean `(x1 * x2 * ... * xn)^(1/n)`.
///
/// Returns `None` for an empty slice.
///
/// ```
/// use perfratio_core::geometric_mean;
///
/// assert_eq!(geometric_mean(&[2.0, 8.0]), Some(4.0));
/// assert_eq!(geometric_mean(&[]), None);
/// ```
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let product: f64 = values.iter().product();
    Some(product.powf(1.0 / values.len() as f64))
}

/// Trailing summary row: one mean per comparison column.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub means: Vec<DerivedValue>,
}

/// Per-column collector of the values that feed the geometric mean.
///
/// The metric computer records every finished row here; which values are
/// kept is decided by [`MetricKind::contributes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    metric: MetricKind,
    columns: Vec<Vec<f64>>,
}

impl Accumulator {
    pub fn new(metric: MetricKind, width: usize) -> Self {
        Self {
            metric,
            columns: vec![Vec::new(); width],
        }
    }

    /// Record the reported values of one workload, in column order.
    pub fn record(&mut self, values: &[DerivedValue]) {
        for (column, value) in self.columns.iter_mut().zip(values) {
            if let DerivedValue::Available(v) = *value {
                if self.metric.contributes(v) {
                    column.push(v);
                }
            }
        }
    }

    /// Values that will enter the mean of a column.
    pub fn contributions(&self, column: usize) -> &[f64] {
        self.columns.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Reduce every column to its summary value.
    pub fn finish(&self) -> SummaryRow {
        let means = self
            .columns
            .iter()
            .map(|values| match geometric_mean(values) {
                Some(mean) => self.metric.finish_mean(mean),
                None => self.metric.empty_mean(),
            })
            .collect();
        SummaryRow { means }
    }
}
