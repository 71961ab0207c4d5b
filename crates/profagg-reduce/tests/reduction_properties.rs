// profagg - Profiling CSV aggregation toolkit
//
// Copyright (c) 2025 profagg contributors.
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

//! Algebraic properties of the cross-file fold.

use proptest::prelude::*;
use profagg_core::{ParsedFile, SummaryIndex};
use profagg_csv::parse_str;
use profagg_reduce::{reduce, AggregateRecord, Statistic};
use profagg_test::fixtures::builders::ProfileBuilder;

const COLUMNS: [&str; 4] = ["PAPI_TOT_INS", "PAPI_TOT_CYC", "PAPI_LD_INS", "PAPI_SR_INS"];

/// Identically shaped files: a PAPI block and an IO block.
fn shaped_file(values: &[i64; 4], io_time: f64) -> ParsedFile {
    let papi: Vec<String> = values.iter().map(i64::to_string).collect();
    let papi: Vec<&str> = papi.iter().map(String::as_str).collect();
    let io_time = format!("{:?}", io_time);
    let text = ProfileBuilder::new()
        .block(&COLUMNS, &papi)
        .block(&["io_total_time", "io_calls"], &[io_time.as_str(), "3"])
        .build();
    parse_str(&text, &mut SummaryIndex::new()).unwrap()
}

fn file_strategy() -> impl Strategy<Value = ParsedFile> {
    // quarter steps keep float sums exact in any order
    (
        prop::array::uniform4(-1_000_000i64..1_000_000),
        0u32..4096,
    )
        .prop_map(|(values, quarters)| shaped_file(&values, f64::from(quarters) * 0.25))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fold_order_is_commutative(
        a in file_strategy(),
        b in file_strategy(),
        c in file_strategy(),
    ) {
        let abc = reduce(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        let cab = reduce(vec![c.clone(), a.clone(), b.clone()]).unwrap();
        let bca = reduce(vec![b, c, a]).unwrap();

        prop_assert_eq!(&abc, &cab);
        prop_assert_eq!(&abc, &bca);
    }

    #[test]
    fn copies_are_idempotent_for_extrema(file in file_strategy(), n in 1usize..8) {
        let record = reduce(std::iter::repeat(file.clone()).take(n)).unwrap();

        prop_assert_eq!(record.file_count(), n);
        prop_assert_eq!(record.max(), &file);
        prop_assert_eq!(record.min(), &file);

        for (category, table) in file.iter() {
            for (column, cell) in table.row_entries(0) {
                let expected = cell.as_number().unwrap() * n as f64;
                let total = record.sum().value(category, 0, column).unwrap();
                prop_assert_eq!(total.as_number().unwrap(), expected);
            }
        }
    }

    #[test]
    fn extrema_bracket_every_input(files in prop::collection::vec(file_strategy(), 1..6)) {
        let record: AggregateRecord = reduce(files.clone()).unwrap();

        for file in &files {
            for (category, table) in file.iter() {
                for (column, cell) in table.row_entries(0) {
                    let value = cell.as_number().unwrap();
                    let max = record.table(Statistic::Max).value(category, 0, column).unwrap();
                    let min = record.table(Statistic::Min).value(category, 0, column).unwrap();
                    prop_assert!(max.as_number().unwrap() >= value);
                    prop_assert!(min.as_number().unwrap() <= value);
                }
            }
        }
    }
}
