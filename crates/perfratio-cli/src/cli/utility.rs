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

//! Utility commands.

use crate::commands::{self, Preset};
use crate::error::CliError;
use clap::Subcommand;

/// Utility commands.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Print a built-in report configuration as JSON
    ///
    /// Save the output, edit baseline, columns or the selected workloads,
    /// and pass the file back with `--config`.
    ShowConfig {
        /// Preset to print
        #[arg(value_enum, default_value = "speedup")]
        preset: Preset,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::ShowConfig { preset } => commands::show_config(preset),
        }
    }
}
