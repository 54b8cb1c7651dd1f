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

//! perfratio CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **speedup**: execution-time speedup per workload against the baseline
//!   variant, with the heuristic-selection column and a geomean row
//! - **saving**: energy saving per workload, same layout
//! - **show-config**: print a built-in report configuration as JSON
//!
//! # Examples
//!
//! ```no_run
//! use perfratio_cli::commands::{saving, speedup, ReportOptions};
//!
//! # fn main() -> Result<(), perfratio_cli::error::CliError> {
//! speedup("time.csv", "speedup.csv", &ReportOptions::default())?;
//! saving("energy.csv", "energy_saving.csv", &ReportOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The binary logs through `tracing` to stderr. Set `RUST_LOG=perfratio=debug`
//! to see every dropped input row.
//!
//! # Limits
//!
//! Input files larger than `PERFRATIO_MAX_FILE_SIZE` bytes (default 1 GB)
//! are rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
