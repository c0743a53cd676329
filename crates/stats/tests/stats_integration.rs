//! Integration tests for the stats crate

use stats::prelude::*;
use stats::{RiskLevel, RiskThresholds, SignalBook, SignalMetrics, SignalWeights};

fn record(pairs: &[(&str, f64)]) -> Record {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn sample_vectors() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 2.0, 3.0],
        vec![-4.5, 0.25, 9.0],
        vec![0.001, 0.0, -0.002],
        vec![1e6, -3e5, 7.0],
    ]
}

// ============================================================================
// Vector Tests
// ============================================================================

#[test]
fn test_normalize_yields_unit_vectors() {
    for v in sample_vectors() {
        let n = normalize(&v);
        assert!((magnitude(&n) - 1.0).abs() < 1e-10, "{:?}", v);
    }
}

#[test]
fn test_self_similarity_is_one() {
    for v in sample_vectors() {
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-10, "{:?}", v);
    }
}

#[test]
fn test_self_angle_is_zero() {
    for v in sample_vectors() {
        assert!(angle_between(&v, &v).abs() < 1e-6, "{:?}", v);
    }
}

#[test]
fn test_similarity_is_symmetric() {
    let vs = sample_vectors();
    for a in &vs {
        for b in &vs {
            assert!((cosine_similarity(a, b) - cosine_similarity(b, a)).abs() < 1e-12);
        }
    }
}

#[test]
fn test_similarity_stays_in_range() {
    let vs = sample_vectors();
    for a in &vs {
        for b in &vs {
            let s = cosine_similarity(a, b);
            assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&s));
        }
    }
}

#[test]
fn test_pairwise_two_points() {
    let a = vec![1.0, 1.0];
    let b = vec![4.0, 5.0];
    let d = pairwise_distances(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(d, vec![euclidean_distance(&a, &b).unwrap()]);
}

#[test]
fn test_pairwise_single_point() {
    assert!(pairwise_distances(&[vec![1.0, 2.0]]).unwrap().is_empty());
}

#[test]
fn test_pairwise_length_is_n_choose_2() {
    for n in 0usize..8 {
        let points: Vec<Vec<f64>> = (0..n).map(|i| vec![i as f64, 1.0]).collect();
        assert_eq!(
            pairwise_distances(&points).unwrap().len(),
            n * n.saturating_sub(1) / 2
        );
    }
}

#[test]
fn test_pairwise_rejects_mixed_dimensions() {
    let points = vec![vec![1.0, 2.0], vec![1.0]];
    assert_eq!(
        pairwise_distances(&points).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_cluster_variance_of_nothing() {
    let err = cluster_variance(&[vec![], vec![]]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Arithmetic);
}

// ============================================================================
// Time Series Tests
// ============================================================================

#[test]
fn test_moving_average_example() {
    assert_eq!(
        moving_average(&[1.0, 2.0, 3.0, 4.0], 2).unwrap(),
        vec![1.5, 2.5, 3.5]
    );
}

#[test]
fn test_moving_average_output_length() {
    let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
    for window in 1..=20 {
        assert_eq!(
            moving_average(&data, window).unwrap().len(),
            data.len() - window + 1
        );
    }
    assert!(moving_average(&data, 21).is_err());
}

#[test]
fn test_exponential_smoothing_alpha_one() {
    assert_eq!(
        exponential_smoothing(&[10.0, 20.0, 30.0], 1.0).unwrap(),
        vec![10.0, 20.0, 30.0]
    );
}

#[test]
fn test_detect_anomalies_flags_outlier_only() {
    assert_eq!(
        detect_anomalies(&[1.0, 1.0, 1.0, 1.0, 100.0], 1.0).unwrap(),
        vec![4]
    );
}

#[test]
fn test_detect_anomalies_short_series() {
    assert_eq!(
        detect_anomalies(&[3.0], 2.0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_smoothers_behind_trait_objects() {
    let smoothers: Vec<Box<dyn SeriesSmoother>> = vec![
        Box::new(MovingAverage::new(2).unwrap()),
        Box::new(ExponentialSmoother::new(0.5).unwrap()),
    ];
    let data = [2.0, 4.0, 6.0, 8.0];

    let outputs: Vec<Vec<f64>> = smoothers.iter().map(|s| s.smooth(&data).unwrap()).collect();
    assert_eq!(outputs[0], vec![3.0, 5.0, 7.0]);
    assert_eq!(outputs[1], vec![2.0, 3.0, 4.5, 6.25]);
}

// ============================================================================
// Feature Tests
// ============================================================================

#[test]
fn test_standardize_constant_field_is_zero() {
    let data = vec![
        record(&[("flat", 4.2), ("slope", 1.0)]),
        record(&[("flat", 4.2), ("slope", 2.0)]),
        record(&[("flat", 4.2), ("slope", 4.0)]),
    ];
    let result = standardize(&data).unwrap();
    assert!(result.iter().all(|r| r["flat"] == 0.0));
}

#[test]
fn test_standardized_columns_have_zero_mean_unit_std() {
    let data: Dataset = (0..10)
        .map(|i| record(&[("x", (i * i) as f64), ("y", 3.0 - i as f64 * 0.5)]))
        .collect();
    let result = standardize(&data).unwrap();

    for key in ["x", "y"] {
        let column: Vec<f64> = result.iter().map(|r| r[key]).collect();
        assert!(mean(&column).unwrap().abs() < 1e-10);
        assert!((sample_std_dev(&column).unwrap() - 1.0).abs() < 1e-10);
    }
}

#[test]
fn test_standardize_empty_dataset() {
    assert_eq!(
        standardize(&[]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_binarize_keeps_keys() {
    let data = vec![record(&[("a", 3.0), ("b", 1.0), ("c", 2.0)])];
    let result = binarize(&data, 2.0);
    let keys: Vec<&str> = result[0].keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
    assert_eq!(result[0]["a"], 1);
    assert_eq!(result[0]["b"], 0);
    assert_eq!(result[0]["c"], 0);
}

// ============================================================================
// Sampling Tests
// ============================================================================

#[test]
fn test_bootstrap_examples() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(bootstrap_sample(&[1.0, 2.0, 3.0], 0, &mut rng)
        .unwrap()
        .is_empty());
    assert_eq!(
        bootstrap_sample(&[5.0], 3, &mut rng).unwrap(),
        vec![5.0, 5.0, 5.0]
    );
}

#[test]
fn test_stratified_values_come_from_their_strata() {
    let data: Vec<f64> = (0..23).map(|i| ((i * 7) % 23) as f64).collect();
    let mut sorted = data.clone();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut rng = StdRng::seed_from_u64(11);
    for strata in 1..=data.len() {
        let sample = stratified_sample(&data, strata, &mut rng).unwrap();
        assert_eq!(sample.len(), strata);

        let size = data.len() / strata;
        for (i, value) in sample.iter().enumerate() {
            let stratum = &sorted[i * size..(i + 1) * size];
            assert!(
                stratum.contains(value),
                "strata={} i={} value={}",
                strata,
                i,
                value
            );
        }
    }
}

#[test]
fn test_stratified_rejects_bad_counts() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(stratified_sample(&[1.0, 2.0], 0, &mut rng).is_err());
    assert!(stratified_sample(&[1.0, 2.0], 3, &mut rng).is_err());
}

#[test]
fn test_sampler_from_config() {
    let config = SamplerConfig::seeded(2024);
    let mut a = Sampler::from_config(config);
    let mut b = Sampler::from_config(config);
    let data = [0.5, 1.5, 2.5, 3.5];
    assert_eq!(a.bootstrap(&data, 8).unwrap(), b.bootstrap(&data, 8).unwrap());
}

// ============================================================================
// Signal Scoring Tests
// ============================================================================

#[test]
fn test_signal_book_report() {
    let mut book = SignalBook::new(RiskThresholds::default(), SignalWeights::default());
    let calm = SignalMetrics::default();
    let hot = SignalMetrics {
        volatility: 1.0,
        liquidity: 1.0,
        tx_rate: 1.0,
        wallet_distribution: 1.0,
        social_sentiment: 0.5,
    };

    book.register("calm", &calm);
    let signal = book.register("hot", &hot);
    assert_eq!(signal.level, RiskLevel::High);

    let report = book.report();
    assert_eq!(report.total, 2);
    assert_eq!(report.high_risk, 1);
    assert!((report.average - 0.475).abs() < 1e-10);
}
