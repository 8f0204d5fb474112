//! Property tests for the Monte Carlo simulators, concentration and risk helpers.

use procurement_analytics::domain::concentration::compute_hhi;
use procurement_analytics::domain::risk::{assess_risk, RiskTier, RiskWeights, SupplierRiskIndicators};
use procurement_analytics::domain::simulation::{
    simulate_gbm, simulate_shock, DistributionSummary, GbmParams, NormalShock, ShockSource,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_ordered(s: &DistributionSummary) -> Result<(), TestCaseError> {
    prop_assert!(s.min <= s.p5);
    prop_assert!(s.p5 <= s.p25);
    prop_assert!(s.p25 <= s.median);
    prop_assert!(s.median <= s.p75);
    prop_assert!(s.p75 <= s.p95);
    prop_assert!(s.p95 <= s.max);
    prop_assert!(s.cvar_95 >= s.var_95);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn gbm_terminal_values_strictly_positive(
        anchor in 0.01f64..10_000.0,
        vol in 0.0f64..2.0,
        horizon in 0usize..120,
        paths in 1usize..200,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = simulate_gbm(&GbmParams::new(anchor, vol, horizon, paths), &mut rng).unwrap();

        prop_assert_eq!(result.terminal_values.len(), paths);
        prop_assert!(result.terminal_values.iter().all(|v| *v > 0.0 && v.is_finite()));
        assert_ordered(&result.summary)?;
    }

    #[test]
    fn summary_percentiles_are_ordered(
        samples in prop::collection::vec(-1e6f64..1e6, 1..300),
        anchor in -1e3f64..1e3,
    ) {
        let summary = DistributionSummary::from_samples(&samples, anchor).unwrap();
        prop_assert_eq!(summary.count, samples.len());
        prop_assert!(summary.std_dev >= 0.0);
        assert_ordered(&summary)?;
    }

    #[test]
    fn shock_floor_is_respected(
        baseline in 1.0f64..1e7,
        mean in 0.5f64..1.5,
        std_dev in 0.0f64..0.5,
        floor in 0.1f64..1.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let source = ShockSource::Normal {
            label: "shock".to_string(),
            shock: NormalShock::new(mean, std_dev, floor),
        };
        let result = simulate_shock(baseline, &[source], 200, &mut rng).unwrap();
        let lowest = baseline * floor;
        prop_assert!(result.terminal_values.iter().all(|v| *v >= lowest * (1.0 - 1e-12)));
        assert_ordered(&result.summary)?;
    }

    #[test]
    fn hhi_of_equal_shares(k in 1usize..100) {
        let shares = vec![100.0 / k as f64; k];
        let hhi = compute_hhi(&shares).unwrap();
        let expected = 10_000.0 / k as f64;
        prop_assert!((hhi - expected).abs() < 1e-6 * expected, "{} vs {}", hhi, expected);
    }

    #[test]
    fn composite_risk_stays_in_range(
        revenue in 0.0f64..1e9,
        defect in prop::option::of(0.0f64..50.0),
        on_time in prop::option::of(0.0f64..100.0),
        incidents in 0u32..40,
        governance in prop::option::of(0.0f64..100.0),
        sanctioned in any::<bool>(),
        certifications in 0u32..10,
        weights in prop::array::uniform7(0.01f64..1.0),
    ) {
        let indicators = SupplierRiskIndicators {
            annual_revenue_usd: revenue,
            defect_rate_pct: defect,
            on_time_pct: on_time,
            quality_incidents: incidents,
            governance_score: governance,
            sanctioned,
            verified_certifications: certifications,
            ..Default::default()
        };
        let weights = RiskWeights::new(weights).unwrap();
        let assessment = assess_risk("supplier", &indicators, &weights).unwrap();

        prop_assert!((0.0..=100.0).contains(&assessment.composite_risk));
        prop_assert_eq!(assessment.tier, RiskTier::from_score(assessment.composite_risk));
    }
}
