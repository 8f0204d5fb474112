//! Property tests for the ranking methods.

use procurement_analytics::domain::ranking::{
    promethee, rank, topsis, wsm, CriteriaPolarity, CriteriaWeights, DecisionMatrix,
    PreferenceThresholds, RankingMethod, RankingOptions,
};
use proptest::prelude::*;

fn problem() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>)> {
    (2usize..8, 1usize..6).prop_flat_map(|(m, n)| {
        (
            prop::collection::vec(prop::collection::vec(0.0f64..100.0, n), m),
            prop::collection::vec(0.01f64..1.0, n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn method() -> impl Strategy<Value = RankingMethod> {
    prop_oneof![
        Just(RankingMethod::Topsis),
        Just(RankingMethod::Promethee),
        Just(RankingMethod::Wsm),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn topsis_scores_in_unit_interval((rows, w, flags) in problem()) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let weights = CriteriaWeights::new(w).unwrap();
        let scores = topsis(&matrix, &weights, &CriteriaPolarity::from_flags(&flags)).unwrap().scores;
        prop_assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)), "scores {:?}", scores);
    }

    #[test]
    fn promethee_flows_sum_to_zero(
        (rows, w, flags) in problem(),
        q in 0.0f64..10.0,
        spread in 0.0f64..30.0,
    ) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let weights = CriteriaWeights::new(w).unwrap();
        let thresholds = PreferenceThresholds::new(q, q + spread).unwrap();
        let flows = promethee(&matrix, &weights, &CriteriaPolarity::from_flags(&flags), &thresholds)
            .unwrap()
            .scores;
        let total: f64 = flows.iter().sum();
        prop_assert!(total.abs() < 1e-9, "net flows summed to {}", total);
        prop_assert!(flows.iter().all(|f| (-1.0..=1.0).contains(f)));
    }

    #[test]
    fn wsm_scores_in_unit_interval((rows, w, _flags) in problem()) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let weights = CriteriaWeights::new(w).unwrap();
        let scores = wsm(&matrix, &weights).unwrap().scores;
        prop_assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn dominating_alternative_tops_topsis((mut rows, w, flags) in problem()) {
        let n = rows[0].len();
        let champion: Vec<f64> = (0..n)
            .map(|k| {
                let column = rows.iter().map(|r| r[k]);
                if flags[k] {
                    column.fold(f64::NEG_INFINITY, f64::max) + 10.0
                } else {
                    column.fold(f64::INFINITY, f64::min) - 10.0
                }
            })
            .collect();
        rows.push(champion);
        let last = rows.len() - 1;

        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let weights = CriteriaWeights::new(w).unwrap();
        let scores = topsis(&matrix, &weights, &CriteriaPolarity::from_flags(&flags)).unwrap().scores;
        prop_assert_eq!(scores[last], 1.0);
    }

    #[test]
    fn ranks_are_consistent_with_composites((rows, w, flags) in problem(), method in method()) {
        let m = rows.len();
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let weights = CriteriaWeights::new(w).unwrap();
        let result = rank(
            &matrix,
            &weights,
            &CriteriaPolarity::from_flags(&flags),
            &RankingOptions::new(method),
        )
        .unwrap();

        prop_assert!(result.alternatives.iter().any(|a| a.rank == 1));
        for a in &result.alternatives {
            prop_assert!((0.0..=100.0).contains(&a.composite_score));
            prop_assert!(a.rank >= 1 && a.rank as usize <= m);
            for b in &result.alternatives {
                if a.composite_score > b.composite_score {
                    prop_assert!(a.rank < b.rank);
                }
                if a.composite_score == b.composite_score {
                    prop_assert_eq!(a.rank, b.rank);
                }
            }
        }
    }
}
