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

//! Report configuration and the built-in presets.
//!
//! A [`ReportConfig`] is everything the metric computer needs besides the
//! measurements: the baseline variant, the comparison columns in output
//! order, the metric kind, and an optional selection policy. Configs are
//! plain serde types so they can be stored as JSON next to the data.

use crate::error::{ConfigError, Result};
use crate::metric::MetricKind;
use crate::selection::SelectionSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default name of the reference variant.
pub const DEFAULT_BASELINE: &str = "baseline";

/// Default header of the selected-flag column.
pub const DEFAULT_SELECTION_HEADER: &str = "selected by heuristic";

/// Header of the first column.
pub const WORKLOAD_HEADER: &str = "workload";

/// One comparison column of a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Variant name as it appears in the input keys.
    pub variant: String,
    /// Label used in the header; the metric suffix is appended.
    pub label: String,
}

impl ColumnSpec {
    pub fn new(variant: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            label: label.into(),
        }
    }
}

/// Replace one column with another for workloads outside a curated set.
///
/// Workloads in `workloads` report the override variant's own result. For
/// every other workload the override column repeats the value already
/// computed for the fallback variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    pub workloads: SelectionSet,
    pub override_variant: String,
    pub fallback_variant: String,
    #[serde(default = "default_selection_header")]
    pub header: String,
}

impl SelectionPolicy {
    /// The policy used by the published figures: `htpf` falls back to `homp`.
    pub fn heuristic() -> Self {
        Self {
            workloads: SelectionSet::heuristic(),
            override_variant: "htpf".to_string(),
            fallback_variant: "homp".to_string(),
            header: default_selection_header(),
        }
    }
}

/// Full description of one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub metric: MetricKind,
    #[serde(default = "default_baseline")]
    pub baseline: String,
    pub columns: Vec<ColumnSpec>,
    #[serde(default)]
    pub selection: Option<SelectionPolicy>,
    /// Append the blank separator and the geometric-mean row.
    #[serde(default = "default_summary")]
    pub summary: bool,
}

fn default_baseline() -> String {
    DEFAULT_BASELINE.to_string()
}

fn default_selection_header() -> String {
    DEFAULT_SELECTION_HEADER.to_string()
}

fn default_summary() -> bool {
    true
}

fn prefetch_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("swpf", "swpf"),
        ColumnSpec::new("homp", "homp"),
        ColumnSpec::new("htpf", "ghost"),
    ]
}

impl ReportConfig {
    /// Selection-aware execution-time speedup with a geomean row.
    ///
    /// ```
    /// use perfratio_core::{MetricKind, ReportConfig};
    ///
    /// let config = ReportConfig::speedup();
    /// assert_eq!(config.metric, MetricKind::Speedup);
    /// assert_eq!(config.baseline, "baseline");
    /// assert!(config.selection.is_some());
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn speedup() -> Self {
        Self {
            metric: MetricKind::Speedup,
            baseline: default_baseline(),
            columns: prefetch_columns(),
            selection: Some(SelectionPolicy::heuristic()),
            summary: true,
        }
    }

    /// Selection-aware energy saving with a geomean row.
    pub fn saving() -> Self {
        Self {
            metric: MetricKind::Saving,
            ..Self::speedup()
        }
    }

    /// Raw speedup per variant: no selected column, no override, no summary.
    pub fn plain_speedup() -> Self {
        Self {
            selection: None,
            summary: false,
            ..Self::speedup()
        }
    }

    /// Check that the configuration describes a well-formed report.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the baseline is empty, there are no
    /// columns, a column variant is empty, duplicated or equal to the
    /// baseline, or the selection policy refers to variants that are not
    /// columns.
    pub fn validate(&self) -> Result<()> {
        if self.baseline.is_empty() {
            return Err(ConfigError::EmptyBaseline);
        }
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }

        let mut seen = HashSet::new();
        for (index, column) in self.columns.iter().enumerate() {
            if column.variant.is_empty() {
                return Err(ConfigError::EmptyVariant { index });
            }
            if column.variant == self.baseline {
                return Err(ConfigError::BaselineColumn(column.variant.clone()));
            }
            if !seen.insert(column.variant.as_str()) {
                return Err(ConfigError::DuplicateColumn(column.variant.clone()));
            }
        }

        if let Some(policy) = &self.selection {
            self.override_slots(policy)?;
        }
        Ok(())
    }

    /// Column index of a variant.
    pub fn column_index(&self, variant: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.variant == variant)
    }

    /// Resolve `(override, fallback)` column indices of a selection policy.
    pub(crate) fn override_slots(&self, policy: &SelectionPolicy) -> Result<(usize, usize)> {
        let lookup = |role: &'static str, variant: &str| {
            self.column_index(variant)
                .ok_or_else(|| ConfigError::UnknownVariant {
                    role,
                    variant: variant.to_string(),
                })
        };
        let target = lookup("override", &policy.override_variant)?;
        let source = lookup("fallback", &policy.fallback_variant)?;
        if target == source {
            return Err(ConfigError::SelfOverride(policy.override_variant.clone()));
        }
        Ok((target, source))
    }

    /// Header row: workload, optional selected flag, one cell per column.
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 2);
        header.push(WORKLOAD_HEADER.to_string());
        if let Some(policy) = &self.selection {
            header.push(policy.header.clone());
        }
        header.extend(
            self.columns
                .iter()
                .map(|c| format!("{} {}", c.label, self.metric.column_suffix())),
        );
        header
    }
}
