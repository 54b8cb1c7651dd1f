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

//! Error types for report configuration.

use thiserror::Error;

/// Invalid report configuration.
///
/// Measurement data never produces an error; only a configuration that
/// cannot describe a report does.
///
/// # Examples
///
/// ```
/// use perfratio_core::ConfigError;
///
/// let err = ConfigError::UnknownVariant {
///     role: "override",
///     variant: "htpf".to_string(),
/// };
/// assert_eq!(err.to_string(), "override variant 'htpf' is not a report column");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The baseline variant name is empty.
    #[error("baseline variant name must not be empty")]
    EmptyBaseline,

    /// No comparison columns were configured.
    #[error("report needs at least one comparison column")]
    NoColumns,

    /// A comparison column has an empty variant name.
    #[error("column {index} has an empty variant name")]
    EmptyVariant {
        /// Position of the column (0-based).
        index: usize,
    },

    /// Two columns compare the same variant.
    #[error("variant '{0}' appears in more than one column")]
    DuplicateColumn(String),

    /// A column compares the baseline against itself.
    #[error("variant '{0}' is the baseline and cannot be a comparison column")]
    BaselineColumn(String),

    /// The selection policy names a variant that has no column.
    #[error("{role} variant '{variant}' is not a report column")]
    UnknownVariant {
        /// `override` or `fallback`.
        role: &'static str,
        /// The variant that was not found.
        variant: String,
    },

    /// The override and fallback variants are the same column.
    #[error("override and fallback variant are both '{0}'")]
    SelfOverride(String),
}

/// Result alias for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;
