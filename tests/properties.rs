//! Property-based tests for the one-sided z-test and the histogram binning.

use abtest_demo::compute::ab_test_stats;
use abtest_demo::histogram::bins::Histogram;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_equal_means_give_half(mean in 0.0f64..20.0, sd in 0.02f64..2.0) {
        let result = ab_test_stats(mean, sd, mean, sd).unwrap();
        prop_assert_eq!(result.z_score, 0.0);
        prop_assert!((result.p_value - 0.5).abs() < 1e-15);
    }

    #[test]
    fn prop_positive_gap_below_half(
        mean_1 in 0.0f64..20.0,
        gap in 0.001f64..3.0,
        sd_1 in 0.02f64..2.0,
        sd_2 in 0.02f64..2.0,
    ) {
        let result = ab_test_stats(mean_1, sd_1, mean_1 + gap, sd_2).unwrap();
        prop_assert!(result.z_score > 0.0);
        prop_assert!(result.p_value < 0.5);
    }

    #[test]
    fn prop_larger_gap_smaller_p(
        mean_1 in 0.0f64..20.0,
        gap in 0.0f64..1.5,
        extra in 0.01f64..1.5,
        sd_1 in 0.02f64..2.0,
        sd_2 in 0.02f64..2.0,
    ) {
        let near = ab_test_stats(mean_1, sd_1, mean_1 + gap, sd_2).unwrap();
        let far = ab_test_stats(mean_1, sd_1, mean_1 + gap + extra, sd_2).unwrap();
        prop_assert!(far.z_score > near.z_score);
        prop_assert!(far.p_value <= near.p_value + 1e-15);
    }

    #[test]
    fn prop_p_and_confidence_complement(
        mean_1 in 0.0f64..20.0,
        gap in -3.0f64..3.0,
        sd_1 in 0.02f64..2.0,
        sd_2 in 0.02f64..2.0,
    ) {
        let result = ab_test_stats(mean_1, sd_1, mean_1 + gap, sd_2).unwrap();
        prop_assert!((0.0..=1.0).contains(&result.p_value));
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!((result.p_value + result.confidence - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_wider_spread_less_significant(
        mean_1 in 0.0f64..20.0,
        gap in 0.0f64..3.0,
        sd_1 in 0.02f64..2.0,
        sd_2 in 0.02f64..2.0,
        widen in 0.0f64..2.0,
    ) {
        let base = ab_test_stats(mean_1, sd_1, mean_1 + gap, sd_2).unwrap();
        let wider_1 = ab_test_stats(mean_1, sd_1 + widen, mean_1 + gap, sd_2).unwrap();
        let wider_2 = ab_test_stats(mean_1, sd_1, mean_1 + gap, sd_2 + widen).unwrap();
        for wider in [wider_1, wider_2] {
            prop_assert!(wider.z_score <= base.z_score);
            prop_assert!(wider.z_score >= 0.0);
            prop_assert!(wider.p_value >= base.p_value - 1e-15);
            prop_assert!(wider.p_value <= 0.5);
        }
    }

    #[test]
    fn prop_histogram_counts_every_sample(
        samples in prop::collection::vec(-1e6f64..1e6, 1..500),
        n_bins in 1usize..100,
    ) {
        let histogram = Histogram::from_samples(&samples, n_bins).unwrap();
        prop_assert_eq!(histogram.n_bins(), n_bins);
        prop_assert_eq!(histogram.total(), samples.len());
    }
}
