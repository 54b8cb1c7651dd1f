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

//! Derived ratio metrics and their textual rendering.

use crate::measurement::{Measurement, MISSING_MARKER};
use serde::{Deserialize, Serialize};

/// The result of comparing one variant against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DerivedValue {
    Available(f64),
    /// Baseline or comparison value missing, or a guarded division.
    #[default]
    NotAvailable,
}

impl DerivedValue {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Available(v) => Some(v),
            Self::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// Which ratio a report derives from its measurements.
///
/// Besides the formula, the kind fixes the reporting policy of its column
/// family: which values feed the geometric mean, what an empty column
/// summarizes to, and how numbers are printed.
///
/// | | Speedup | Saving |
/// |---|---|---|
/// | value | `round2(b / v)` | `1 - v / b` |
/// | guard | `v != 0` | `b != 0` |
/// | geomean input | `x != 0` | `x > 0` |
/// | empty geomean | `NA` | `0.00` |
/// | rendering | `2.0`, `1.23` | `0.20`, `-0.05` |
///
/// The empty-column fallback differs between the two kinds and savings
/// `<= 0` never reach the geometric mean. Both are reporting policy carried
/// over from the published figures and are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// `baseline / variant`; above 1 means the variant is faster.
    Speedup,
    /// `1 - variant / baseline`; the fraction of baseline cost avoided.
    Saving,
}

impl MetricKind {
    /// Derive the metric for one workload and one comparison variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfratio_core::{DerivedValue, Measurement, MetricKind};
    ///
    /// let b = Measurement::Value(10.0);
    /// assert_eq!(
    ///     MetricKind::Speedup.derive(b, Measurement::Value(4.0)),
    ///     DerivedValue::Available(2.5)
    /// );
    /// assert_eq!(
    ///     MetricKind::Speedup.derive(b, Measurement::Value(0.0)),
    ///     DerivedValue::NotAvailable
    /// );
    /// assert_eq!(
    ///     MetricKind::Saving.derive(b, Measurement::Missing),
    ///     DerivedValue::NotAvailable
    /// );
    /// ```
    pub fn derive(self, baseline: Measurement, variant: Measurement) -> DerivedValue {
        match (self, baseline.value(), variant.value()) {
            (Self::Speedup, Some(b), Some(v)) if v != 0.0 => DerivedValue::Available(round2(b / v)),
            (Self::Saving, Some(b), Some(v)) if b != 0.0 => DerivedValue::Available(1.0 - v / b),
            _ => DerivedValue::NotAvailable,
        }
    }

    /// Whether a reported value takes part in the column's geometric mean.
    pub fn contributes(self, value: f64) -> bool {
        match self {
            Self::Speedup => value != 0.0,
            Self::Saving => value > 0.0,
        }
    }

    /// Summary value of a column with no contributing workloads.
    pub fn empty_mean(self) -> DerivedValue {
        match self {
            Self::Speedup => DerivedValue::NotAvailable,
            Self::Saving => DerivedValue::Available(0.0),
        }
    }

    /// Post-process a raw geometric mean into the reported summary value.
    pub fn finish_mean(self, mean: f64) -> DerivedValue {
        match self {
            Self::Speedup => DerivedValue::Available(round2(mean)),
            Self::Saving => DerivedValue::Available(mean),
        }
    }

    /// Word appended to column labels in the header (`swpf speedup`).
    pub fn column_suffix(self) -> &'static str {
        match self {
            Self::Speedup => "speedup",
            Self::Saving => "saving",
        }
    }

    /// Text placed in the "selected" column of the summary row.
    pub fn summary_placeholder(self) -> &'static str {
        match self {
            Self::Speedup => "-",
            Self::Saving => "",
        }
    }

    /// Render a derived value as a report cell.
    ///
    /// ```
    /// use perfratio_core::{DerivedValue, MetricKind};
    ///
    /// assert_eq!(MetricKind::Speedup.render(DerivedValue::Available(2.0)), "2.0");
    /// assert_eq!(MetricKind::Speedup.render(DerivedValue::Available(1.234)), "1.23");
    /// assert_eq!(MetricKind::Saving.render(DerivedValue::Available(0.2)), "0.20");
    /// assert_eq!(MetricKind::Saving.render(DerivedValue::NotAvailable), "NA");
    /// ```
    pub fn render(self, value: DerivedValue) -> String {
        match (self, value) {
            (_, DerivedValue::NotAvailable) => MISSING_MARKER.to_string(),
            (Self::Speedup, DerivedValue::Available(v)) => shortest_repr(round2(v)),
            (Self::Saving, DerivedValue::Available(v)) => format!("{:.2}", v),
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_suffix())
    }
}

/// Shortest round-trip text of `value`, with a signed two-digit exponent once
/// `Debug` switches to scientific form (`1e+16`, not `1e16`).
fn shortest_repr(value: f64) -> String {
    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}

/// Round to two decimal digits, ties resolved on the exact binary value.
///
/// Goes through the decimal formatter so that the result is the `f64`
/// closest to the printed two-digit decimal.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
