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

//! Report commands: derive speedup or saving tables from measurement CSV.

use crate::commands::{self, ReportOptions};
use crate::error::CliError;
use clap::Subcommand;

/// Report commands.
///
/// Both commands read a `name,value` CSV whose names follow the
/// `workload-variant` convention and write one row per workload.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Compute speedups against the baseline variant
    ///
    /// Speedup is baseline time divided by variant time, rounded to two
    /// decimals. By default the report carries the heuristic-selection column
    /// and a trailing geometric-mean row.
    Speedup {
        /// Input CSV with execution times
        #[arg(value_name = "FILE", default_value = "time.csv")]
        input: String,

        /// Output file path (`-` for stdout)
        #[arg(short, long, default_value = "speedup.csv")]
        output: String,

        /// JSON report configuration (see `show-config`)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<String>,

        /// Drop the selection column and the ghost override
        #[arg(long)]
        no_selection: bool,

        /// Omit the blank separator and the geomean row
        #[arg(long)]
        no_summary: bool,
    },

    /// Compute energy savings against the baseline variant
    ///
    /// Saving is `1 - variant / baseline`, printed with two decimals.
    Saving {
        /// Input CSV with energy measurements
        #[arg(value_name = "FILE", default_value = "energy.csv")]
        input: String,

        /// Output file path (`-` for stdout)
        #[arg(short, long, default_value = "energy_saving.csv")]
        output: String,

        /// JSON report configuration (see `show-config`)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<String>,

        /// Drop the selection column and the ghost override
        #[arg(long)]
        no_selection: bool,

        /// Omit the blank separator and the geomean row
        #[arg(long)]
        no_summary: bool,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Speedup {
                input,
                output,
                config,
                no_selection,
                no_summary,
            } => {
                let options = ReportOptions {
                    config: config.as_deref(),
                    no_selection,
                    no_summary,
                };
                commands::speedup(&input, &output, &options)
            }
            ReportCommands::Saving {
                input,
                output,
                config,
                no_selection,
                no_summary,
            } => {
                let options = ReportOptions {
                    config: config.as_deref(),
                    no_selection,
                    no_summary,
                };
                commands::saving(&input, &output, &options)
            }
        }
    }
}
