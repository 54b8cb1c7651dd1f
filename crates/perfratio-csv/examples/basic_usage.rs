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

//! Basic usage of perfratio-csv: load a measurement table and render reports.

use perfratio_core::{compute_report, ReportConfig};
use perfratio_csv::{read_table, write_report, write_report_with_config, ToCsvConfig};

const TIME_CSV: &str = "\
workload,time
bfs-kron-baseline,10.0
bfs-kron-swpf,5.0
bfs-kron-homp,4.0
bfs-kron-htpf,2.0
tc-kron-baseline,8.0
tc-kron-swpf,NA
tc-kron-homp,4.0
tc-kron-htpf,1.0
";

fn main() {
    println!("=== Speedup Report ===\n");
    speedup_example();

    println!("\n=== Plain Speedup Report ===\n");
    plain_example();

    println!("\n=== Semicolon Output ===\n");
    custom_config_example();
}

fn speedup_example() {
    let table = read_table(TIME_CSV).expect("time table should parse");
    let report = compute_report(&table, &ReportConfig::speedup()).expect("preset is valid");
    print!("{}", write_report(&report).expect("report should serialize"));
}

fn plain_example() {
    let table = read_table(TIME_CSV).expect("time table should parse");
    let report =
        compute_report(&table, &ReportConfig::plain_speedup()).expect("preset is valid");
    print!("{}", write_report(&report).expect("report should serialize"));
}

fn custom_config_example() {
    let table = read_table(TIME_CSV).expect("time table should parse");
    let report = compute_report(&table, &ReportConfig::speedup()).expect("preset is valid");
    let config = ToCsvConfig {
        delimiter: b';',
        ..Default::default()
    };
    print!(
        "{}",
        write_report_with_config(&report, &config).expect("report should serialize")
    );
}
