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

//! End-to-end tests for the load → compute → summarize pipeline.

use perfratio_core::{compute_report, DerivedValue, MeasurementTable, ReportConfig};

fn render(report: &perfratio_core::Report) -> Vec<String> {
    let mut lines = vec![report.header().join(",")];
    lines.extend(report.rows().iter().map(|row| report.row_cells(row).join(",")));
    if let Some(summary) = report.summary_cells() {
        lines.push(String::new());
        lines.push(summary.join(","));
    }
    lines
}

const TIME_CSV: &str = "\
name,time
bfs-kron-baseline,10.0
bfs-kron-swpf,5.0
bfs-kron-homp,4.0
bfs-kron-htpf,2.0
tc-kron-baseline,9.0
tc-kron-swpf,NA
tc-kron-homp,3.0
tc-kron-htpf,1.0
hpcg-baseline,NA
hpcg-swpf,1.0
foo,1.0
";

#[test]
fn test_speedup_report_end_to_end() {
    let table = MeasurementTable::parse(TIME_CSV);
    let report = compute_report(&table, &ReportConfig::speedup()).unwrap();

    assert_eq!(
        render(&report),
        vec![
            "workload,selected by heuristic,swpf speedup,homp speedup,ghost speedup",
            "bfs-kron,1,2.0,2.5,5.0",
            "tc-kron,0,NA,3.0,3.0",
            "hpcg,0,NA,NA,NA",
            "",
            "geomean,-,2.0,2.74,3.87",
        ]
    );
}

#[test]
fn test_plain_report_has_no_summary() {
    let table = MeasurementTable::parse(TIME_CSV);
    let report = compute_report(&table, &ReportConfig::plain_speedup()).unwrap();

    assert_eq!(
        render(&report),
        vec![
            "workload,swpf speedup,homp speedup,ghost speedup",
            "bfs-kron,2.0,2.5,5.0",
            "tc-kron,NA,3.0,9.0",
            "hpcg,NA,NA,NA",
        ]
    );
}

#[test]
fn test_saving_report_end_to_end() {
    let input = "\
name,energy
wB-baseline,100.0
wB-swpf,80.0
wB-homp,120.0
wB-htpf,50.0
camel-baseline,200.0
camel-swpf,150.0
camel-homp,NA
camel-htpf,100.0
";
    let table = MeasurementTable::parse(input);
    let report = compute_report(&table, &ReportConfig::saving()).unwrap();

    assert_eq!(
        render(&report),
        vec![
            "workload,selected by heuristic,swpf saving,homp saving,ghost saving",
            "wB,0,0.20,-0.20,-0.20",
            "camel,1,0.25,NA,0.50",
            "",
            "geomean,,0.22,0.00,0.50",
        ]
    );
}

#[test]
fn test_malformed_file_yields_all_na_summary() {
    let table = MeasurementTable::parse("not,a\nreal,table\n");
    let report = compute_report(&table, &ReportConfig::speedup()).unwrap();
    assert!(report.rows().is_empty());
    assert_eq!(
        render(&report),
        vec![
            "workload,selected by heuristic,swpf speedup,homp speedup,ghost speedup",
            "",
            "geomean,-,NA,NA,NA",
        ]
    );
}

#[test]
fn test_speedup_geomean_uses_rounded_values() {
    // 1/3 rounds to 0.33 before it enters the mean
    let input = "name,time\na-baseline,1\na-swpf,3\nb-baseline,3\nb-swpf,1\n";
    let table = MeasurementTable::parse(input);
    let report = compute_report(&table, &ReportConfig::plain_speedup()).unwrap();
    assert_eq!(report.row("a").unwrap().values[0], DerivedValue::Available(0.33));

    let config = ReportConfig {
        summary: true,
        ..ReportConfig::plain_speedup()
    };
    let report = compute_report(&table, &config).unwrap();
    // sqrt(0.33 * 3.0) = 0.99498...
    assert_eq!(report.summary().unwrap().means[0], DerivedValue::Available(0.99));
}

#[test]
fn test_hyphenated_workload_names_survive() {
    let input = "name,time\nsssp-twitter-baseline,8\nsssp-twitter-swpf,2\n";
    let table = MeasurementTable::parse(input);
    assert_eq!(table.workloads().collect::<Vec<_>>(), vec!["sssp-twitter"]);
}
