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

//! Error types for CSV reading and writing.

use thiserror::Error;

/// CSV conversion error types.
///
/// Individual malformed rows are not errors; they are dropped while reading.
/// These variants cover failures of the byte stream itself and the row limit.
///
/// # Examples
///
/// ```
/// use perfratio_csv::CsvError;
///
/// let err = CsvError::SecurityLimit {
///     limit: 10,
///     actual: 11,
/// };
/// assert!(err.to_string().contains("Security limit"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Output could not be converted to UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being decoded.
        context: String,
    },

    /// Row count exceeded security limit.
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count at which reading stopped.
        actual: usize,
    },
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
