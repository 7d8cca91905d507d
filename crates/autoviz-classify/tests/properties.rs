//! Property tests over randomly shaped datasets.

use std::collections::BTreeMap;

use proptest::prelude::*;

use autoviz_classify::{METRIC_INELIGIBLE, classify, score_as_dimension, score_as_metric};
use autoviz_model::{CellValue, ChartKind, Row};
use autoviz_profile::profile_rows;

const NAME_POOL: [&str; 8] = [
    "id", "revenue", "region", "notes", "year", "count", "category", "score",
];

fn column_values(row_count: usize) -> impl Strategy<Value = Vec<CellValue>> {
    prop_oneof![
        prop::collection::vec((0.0..1000.0f64).prop_map(CellValue::Number), row_count),
        prop::collection::vec(
            prop::sample::select(vec!["north", "south", "east", "west", "other"])
                .prop_map(|s| CellValue::Text(s.to_string())),
            row_count
        ),
        prop::collection::vec(Just(CellValue::Null), row_count),
    ]
}

fn dataset_strategy() -> impl Strategy<Value = (Vec<String>, Vec<Row>)> {
    (0usize..40).prop_flat_map(|row_count| {
        prop::sample::subsequence(NAME_POOL.to_vec(), 1..=5).prop_flat_map(move |names| {
            let headers: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();
            prop::collection::vec(column_values(row_count), headers.len()).prop_map(
                move |columns| {
                    let rows: Vec<Row> = (0..row_count)
                        .map(|i| {
                            headers
                                .iter()
                                .zip(&columns)
                                .map(|(name, values)| (name.clone(), values[i].clone()))
                                .collect::<BTreeMap<_, _>>()
                        })
                        .collect();
                    (headers.clone(), rows)
                },
            )
        })
    })
}

proptest! {
    #[test]
    fn recommendations_are_ranked_and_well_formed((headers, rows) in dataset_strategy()) {
        let profile = profile_rows(&headers, &rows, None);
        let result = classify(&profile, &rows);

        prop_assert!(result.confidence <= 99);
        for name in &result.column_roles.categorical_columns {
            let column = profile.column(name).expect("categorical column exists");
            prop_assert!(score_as_dimension(column, &profile, &rows) > 0.0);
        }
        for pair in result.recommendations.windows(2) {
            prop_assert!(pair[0].priority >= pair[1].priority);
        }
        for rec in &result.recommendations {
            let x = profile.column(&rec.x_column);
            prop_assert!(x.is_some(), "unknown x column {}", rec.x_column);
            prop_assert!(profile.has_column(&rec.y_column), "unknown y column {}", rec.y_column);

            let x = x.unwrap();
            if matches!(rec.chart, ChartKind::Bar | ChartKind::Pie) {
                prop_assert!(x.unique_count >= 2);
            }
            if rec.chart == ChartKind::Pie {
                prop_assert!(x.unique_count <= 50);
            }
        }
    }

    #[test]
    fn classification_is_deterministic((headers, rows) in dataset_strategy()) {
        let profile = profile_rows(&headers, &rows, None);
        prop_assert_eq!(classify(&profile, &rows), classify(&profile, &rows));
    }

    #[test]
    fn only_numeric_columns_are_metric_eligible((headers, rows) in dataset_strategy()) {
        let profile = profile_rows(&headers, &rows, None);
        for column in &profile.columns {
            let score = score_as_metric(column, &profile, &rows);
            if column.is_numeric() {
                prop_assert!(score > METRIC_INELIGIBLE);
            } else {
                prop_assert_eq!(score, METRIC_INELIGIBLE);
            }
        }
    }
}
