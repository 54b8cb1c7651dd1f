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

//! Measurement table and the row loader that builds it.
//!
//! Input rows carry a composite key of the form `workload-variant` and a
//! single numeric value. Workload names may contain hyphens themselves, so the
//! key is split on the *last* hyphen only.

use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Literal used in input and output for an unavailable value.
pub const MISSING_MARKER: &str = "NA";

/// Field separator for line-oriented input.
const FIELD_SEPARATOR: char = ',';

/// A single measurement (execution time, energy, ...) for one workload/variant pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measurement {
    /// A finite numeric measurement.
    Value(f64),
    /// The value was `NA`, unparseable, or never recorded.
    #[default]
    Missing,
}

impl Measurement {
    /// Parse a raw field.
    ///
    /// `NA` (any case), non-numeric text and non-finite numbers all map to
    /// [`Measurement::Missing`]; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfratio_core::Measurement;
    ///
    /// assert_eq!(Measurement::parse("10.5"), Measurement::Value(10.5));
    /// assert_eq!(Measurement::parse(" 3 "), Measurement::Value(3.0));
    /// assert_eq!(Measurement::parse("na"), Measurement::Missing);
    /// assert_eq!(Measurement::parse("fast"), Measurement::Missing);
    /// ```
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.eq_ignore_ascii_case(MISSING_MARKER) {
            return Self::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Value(value),
            _ => Self::Missing,
        }
    }

    /// The numeric value, if present.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Value)
    }
}

/// Split a composite `workload-variant` key on its rightmost hyphen.
///
/// Returns `None` when the key has no hyphen or when either half would be
/// empty; such rows are treated as malformed and dropped by the loaders.
///
/// # Examples
///
/// ```
/// use perfratio_core::split_composite;
///
/// assert_eq!(split_composite("bfs-kron-swpf"), Some(("bfs-kron", "swpf")));
/// assert_eq!(split_composite("camel-baseline"), Some(("camel", "baseline")));
/// assert_eq!(split_composite("foo"), None);
/// ```
pub fn split_composite(name: &str) -> Option<(&str, &str)> {
    let (workload, variant) = name.rsplit_once('-')?;
    if workload.is_empty() || variant.is_empty() {
        return None;
    }
    Some((workload, variant))
}

/// Variant name to measurement, for a single workload.
pub type VariantMap = BTreeMap<String, Measurement>;

#[derive(Debug, Clone, PartialEq)]
struct WorkloadEntry {
    name: String,
    variants: VariantMap,
}

/// Two-level `workload → variant → measurement` mapping.
///
/// Workloads keep the order in which they were first seen so that reports are
/// deterministic and follow the input. Variant names are unique per workload;
/// a later row for the same pair replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    entries: Vec<WorkloadEntry>,
    index: HashMap<String, usize>,
}

impl MeasurementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement, returning the value it replaced (if any).
    pub fn insert(
        &mut self,
        workload: &str,
        variant: &str,
        measurement: Measurement,
    ) -> Option<Measurement> {
        let slot = match self.index.get(workload) {
            Some(&slot) => slot,
            None => {
                self.entries.push(WorkloadEntry {
                    name: workload.to_string(),
                    variants: VariantMap::new(),
                });
                let slot = self.entries.len() - 1;
                self.index.insert(workload.to_string(), slot);
                slot
            }
        };

        let previous = self.entries[slot]
            .variants
            .insert(variant.to_string(), measurement);
        if previous.is_some() {
            warn!(workload, variant, "duplicate measurement, keeping the later row");
        }
        previous
    }

    /// Record one `name,value` row.
    ///
    /// Returns `false` (and records nothing) when the composite name cannot be
    /// split into a workload and a variant.
    pub fn insert_row(&mut self, name: &str, value: &str) -> bool {
        let name = name.trim();
        match split_composite(name) {
            Some((workload, variant)) => {
                self.insert(workload, variant, Measurement::parse(value));
                true
            }
            None => {
                debug!(name, "dropping row without a workload-variant key");
                false
            }
        }
    }

    /// Build a table from already-split `(name, value)` rows.
    pub fn from_rows<I, N, V>(rows: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (name, value) in rows {
            table.insert_row(name.as_ref(), value.as_ref());
        }
        table
    }

    /// Build a table from raw text lines.
    ///
    /// The first non-blank line is the header and is discarded. Blank lines
    /// are skipped. A line must split into exactly two comma-separated fields;
    /// anything else is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use perfratio_core::{Measurement, MeasurementTable};
    ///
    /// let lines = ["name,time", "wA-baseline,10.0", "", "wA-swpf,5.0", "foo,1.0"];
    /// let table = MeasurementTable::from_lines(lines);
    ///
    /// assert_eq!(table.workloads().collect::<Vec<_>>(), vec!["wA"]);
    /// assert_eq!(table.get("wA", "swpf"), Measurement::Value(5.0));
    /// ```
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::new();
        let mut dropped = 0usize;

        let rows = lines.into_iter().filter(|line| !line.trim().is_empty()).skip(1);
        for line in rows {
            let mut fields = line.trim().split(FIELD_SEPARATOR);
            let accepted = match (fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(value), None) => table.insert_row(name, value),
                _ => {
                    debug!(line, "dropping row that is not a name,value pair");
                    false
                }
            };
            if !accepted {
                dropped += 1;
            }
        }

        debug!(workloads = table.len(), dropped, "measurement table loaded");
        table
    }

    /// Parse a whole text document, see [`MeasurementTable::from_lines`].
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Look up a measurement; absent pairs are [`Measurement::Missing`].
    pub fn get(&self, workload: &str, variant: &str) -> Measurement {
        self.variants(workload)
            .and_then(|variants| variants.get(variant).copied())
            .unwrap_or_default()
    }

    /// All variants recorded for a workload.
    pub fn variants(&self, workload: &str) -> Option<&VariantMap> {
        self.index
            .get(workload)
            .map(|&slot| &self.entries[slot].variants)
    }

    pub fn contains_workload(&self, workload: &str) -> bool {
        self.index.contains_key(workload)
    }

    /// Workload names in first-seen order.
    pub fn workloads(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Number of distinct workloads.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
