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

//! Curated workload sets used by the selection override.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Workloads for which the prefetch heuristic selects the specialized variant.
const HEURISTIC_WORKLOADS: &[&str] = &[
    "bc-kron",
    "bc-twitter",
    "bc-urand",
    "bfs-kron",
    "bfs-twitter",
    "bfs-urand",
    "cc-kron",
    "cc-twitter",
    "cc-urand",
    "cc-web",
    "sssp-kron",
    "sssp-twitter",
    "sssp-urand",
    "sssp-web",
    "tc-urand",
    "camel",
    "kangaroo",
    "hj2",
    "hj8",
];

/// A static set of workload names.
///
/// Membership is classification input supplied with the report, never
/// derived from the measurements themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeSet<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The workload set used by the published speedup and energy figures.
    pub fn heuristic() -> Self {
        HEURISTIC_WORKLOADS.iter().copied().collect()
    }

    pub fn insert(&mut self, workload: impl Into<String>) -> bool {
        self.0.insert(workload.into())
    }

    pub fn contains(&self, workload: &str) -> bool {
        self.0.contains(workload)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
