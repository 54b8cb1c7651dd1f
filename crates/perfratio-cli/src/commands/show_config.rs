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

//! Show-config command - print a built-in report preset as JSON

use crate::error::CliError;
use clap::ValueEnum;
use perfratio_core::ReportConfig;

/// Built-in report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Selection-aware speedup with geomean row
    Speedup,
    /// Selection-aware energy saving with geomean row
    Saving,
    /// Raw speedup per variant, no selection, no summary
    Plain,
}

/// The [`ReportConfig`] behind a preset.
pub fn preset_config(preset: Preset) -> ReportConfig {
    match preset {
        Preset::Speedup => ReportConfig::speedup(),
        Preset::Saving => ReportConfig::saving(),
        Preset::Plain => ReportConfig::plain_speedup(),
    }
}

/// Print a preset as pretty JSON on stdout.
///
/// The output can be edited and passed back with `--config`.
pub fn show_config(preset: Preset) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(&preset_config(preset))?;
    println!("{}", json);
    Ok(())
}
