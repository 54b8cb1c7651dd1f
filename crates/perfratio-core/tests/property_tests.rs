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

//! Property-based tests for metric derivation and aggregation.

use perfratio_core::{
    compute_report, geometric_mean, round2, Accumulator, DerivedValue, Measurement,
    MeasurementTable, MetricKind, ReportConfig,
};
use proptest::prelude::*;

/// Workload names that never collide with the heuristic selection set.
fn unselected_workload() -> impl Strategy<Value = String> {
    prop::string::string_regex("zz[a-z]{1,8}(-[a-z]{1,6})?").expect("valid regex")
}

fn positive() -> impl Strategy<Value = f64> {
    0.001f64..1.0e6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Speedup is the rounded ratio and inverts back to the variant time.
    #[test]
    fn prop_speedup_is_rounded_ratio(b in 10.0f64..1000.0, v in 1.0f64..10.0) {
        let speedup = MetricKind::Speedup
            .derive(Measurement::Value(b), Measurement::Value(v))
            .value()
            .expect("speedup available");
        prop_assert_eq!(speedup, round2(b / v));
        let recovered = b / speedup;
        prop_assert!((recovered - v).abs() <= 0.01 * v + 0.005);
    }

    /// Missing baseline or comparison yields NA for both metric kinds.
    #[test]
    fn prop_missing_inputs_are_not_available(x in positive()) {
        for kind in [MetricKind::Speedup, MetricKind::Saving] {
            prop_assert_eq!(
                kind.derive(Measurement::Missing, Measurement::Value(x)),
                DerivedValue::NotAvailable
            );
            prop_assert_eq!(
                kind.derive(Measurement::Value(x), Measurement::Missing),
                DerivedValue::NotAvailable
            );
        }
    }

    /// A zero comparison value never produces a speedup.
    #[test]
    fn prop_zero_variant_speedup_is_not_available(b in positive()) {
        prop_assert_eq!(
            MetricKind::Speedup.derive(Measurement::Value(b), Measurement::Value(0.0)),
            DerivedValue::NotAvailable
        );
    }

    /// Saving is `1 - v/b` for any non-zero baseline.
    #[test]
    fn prop_saving_formula(b in positive(), v in 0.0f64..1.0e6) {
        let saving = MetricKind::Saving
            .derive(Measurement::Value(b), Measurement::Value(v))
            .value()
            .expect("saving available");
        prop_assert!((saving - (1.0 - v / b)).abs() < 1e-12);
    }

    /// Geometric mean of identical values is that value.
    #[test]
    fn prop_geomean_of_identical_values(x in 0.01f64..1000.0, n in 1usize..40) {
        let values = vec![x; n];
        let mean = geometric_mean(&values).expect("non-empty");
        prop_assert!((mean - x).abs() <= x * 1e-9);
    }

    /// Geometric mean lies between the smallest and largest value.
    #[test]
    fn prop_geomean_is_bounded(values in prop::collection::vec(0.01f64..100.0, 1..20)) {
        let mean = geometric_mean(&values).expect("non-empty");
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(mean >= min * (1.0 - 1e-9) && mean <= max * (1.0 + 1e-9));
    }

    /// Columns without any contributing value fall back per metric kind.
    #[test]
    fn prop_empty_column_fallback(rows in 0usize..10) {
        let mut speedup = Accumulator::new(MetricKind::Speedup, 1);
        let mut saving = Accumulator::new(MetricKind::Saving, 1);
        for _ in 0..rows {
            speedup.record(&[DerivedValue::NotAvailable]);
            saving.record(&[DerivedValue::Available(-0.5)]);
        }
        prop_assert_eq!(speedup.finish().means, vec![DerivedValue::NotAvailable]);
        prop_assert_eq!(saving.finish().means, vec![DerivedValue::Available(0.0)]);
    }

    /// Outside the selection set the ghost column mirrors the homp column.
    #[test]
    fn prop_override_mirrors_fallback(
        workload in unselected_workload(),
        b in positive(),
        homp in prop::option::of(positive()),
        htpf in positive(),
    ) {
        let mut table = MeasurementTable::new();
        table.insert(&workload, "baseline", Measurement::Value(b));
        table.insert(&workload, "homp", Measurement::from(homp));
        table.insert(&workload, "htpf", Measurement::Value(htpf));

        for config in [ReportConfig::speedup(), ReportConfig::saving()] {
            let report = compute_report(&table, &config).expect("valid preset");
            let row = report.row(&workload).expect("row present");
            prop_assert_eq!(row.selected, Some(false));
            prop_assert_eq!(row.values[2], row.values[1]);
        }
    }

    /// Keys without a hyphen never become workloads.
    #[test]
    fn prop_unhyphenated_rows_are_dropped(name in "[a-z0-9_]{1,12}", value in positive()) {
        let text = format!("name,time\n{},{}\n", name, value);
        prop_assert!(MeasurementTable::parse(&text).is_empty());
    }
}
