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

//! CLI command implementations

mod report;
mod show_config;

pub use report::{report, saving, speedup, ReportOptions};
pub use show_config::{preset_config, show_config, Preset};

use crate::error::CliError;
use perfratio_core::ReportConfig;
use std::fs;
use std::io::{self, Write};

/// Default maximum input file size (1 GB).
/// Can be overridden via PERFRATIO_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Path value that stands for stdout.
pub const STDOUT_PATH: &str = "-";

fn get_max_file_size() -> u64 {
    std::env::var("PERFRATIO_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

fn check_file_size(path: &str) -> Result<(), CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }
    Ok(())
}

/// Read a file from disk with size validation.
///
/// The size is checked against `PERFRATIO_MAX_FILE_SIZE` (bytes) before any
/// content is read.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the file cannot be accessed or is not UTF-8,
/// and [`CliError::FileTooLarge`] if it exceeds the limit.
///
/// # Examples
///
/// ```no_run
/// use perfratio_cli::commands::read_file;
///
/// # fn main() -> Result<(), perfratio_cli::error::CliError> {
/// let content = read_file("report.json")?;
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    check_file_size(path)?;
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a file as raw bytes with the same size validation as [`read_file`].
///
/// Measurement input goes through here so that undecodable lines reach the
/// CSV loader, which drops them one at a time.
pub fn read_file_bytes(path: &str) -> Result<Vec<u8>, CliError> {
    check_file_size(path)?;
    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout when `path` is `-`.
pub fn write_output(content: &str, path: &str) -> Result<(), CliError> {
    if path.is_empty() {
        return Err(CliError::invalid_input("output path is empty"));
    }
    if path == STDOUT_PATH {
        return io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e));
    }
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

/// Load a JSON report configuration.
///
/// The configuration is validated before it is returned.
pub fn load_config(path: &str) -> Result<ReportConfig, CliError> {
    let content = read_file(path)?;
    let config: ReportConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
