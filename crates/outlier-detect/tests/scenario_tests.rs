//! End-to-end checks of both detectors on hand-built and simulated samples

use outlier_detect::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn normal_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

#[test]
fn test_iqr_single_far_value() {
    let measures = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0];
    let mask = iqr_detector(&measures, DEFAULT_IQR_PROPORTION).unwrap();

    assert_eq!(mask.len(), measures.len());
    assert_eq!(mask.indices(), vec![9]);
}

#[test]
fn test_zscore_tight_range() {
    let mask = zscore_detector(&[1.0, 2.0, 3.0, 4.0, 5.0], DEFAULT_ZSCORE_THRESHOLD).unwrap();
    assert_eq!(mask.into_inner(), vec![false; 5]);
}

#[test]
fn test_zscore_boundary_sample() {
    // mean = 28, std = 36, so the 100 sits at |z| = 2
    let measures = [10.0, 10.0, 10.0, 10.0, 100.0];
    let detector = ZScoreDetector::default();

    let summary = detector.summary(&measures).unwrap();
    assert_eq!(summary.mean, 28.0);
    assert_eq!(summary.std_dev, 36.0);

    let mask = detector.detect(&measures).unwrap();
    assert!(!mask.any(), "|z| = 2 must not pass a 2.5 threshold");

    // Same sample, threshold exactly at the z-score: strict inequality
    let mask = zscore_detector(&measures, 2.0).unwrap();
    assert!(!mask.any());
}

#[test]
fn test_detectors_are_idempotent() {
    let measures = [3.2, 1.0, 7.5, 2.2, 2.9, 40.0, 3.3, 2.8];
    let iqr = IqrDetector::default();
    let zscore = ZScoreDetector::default();

    assert_eq!(iqr.detect(&measures).unwrap(), iqr.detect(&measures).unwrap());
    assert_eq!(zscore.detect(&measures).unwrap(), zscore.detect(&measures).unwrap());
}

#[test]
fn test_input_is_not_mutated() {
    let measures = vec![9.0, 1.0, 5.0, 3.0, 100.0];
    let original = measures.clone();

    iqr_detector(&measures, 1.5).unwrap();
    zscore_detector(&measures, 2.5).unwrap();

    assert_eq!(measures, original);
}

#[test]
fn test_injected_outliers_in_normal_sample() {
    let mut measures = normal_sample(1000, 42);
    measures[100] = 25.0;
    measures[700] = -25.0;

    let iqr = iqr_detector(&measures, 1.5).unwrap();
    let zscore = zscore_detector(&measures, 2.5).unwrap();

    for mask in [&iqr, &zscore] {
        assert!(mask[100]);
        assert!(mask[700]);
    }
}

#[test]
fn test_false_positive_rate_on_clean_sample() {
    let measures = normal_sample(5000, 7);

    // Expected rates for a standard normal: ~0.7% (IQR 1.5) and ~1.2% (|z| > 2.5)
    let iqr_rate = iqr_detector(&measures, 1.5).unwrap().count() as f64 / 5000.0;
    let zscore_rate = zscore_detector(&measures, 2.5).unwrap().count() as f64 / 5000.0;

    assert!(iqr_rate < 0.03, "IQR flagged {:.2}%", iqr_rate * 100.0);
    assert!(zscore_rate < 0.03, "Z-score flagged {:.2}%", zscore_rate * 100.0);
    assert!(zscore_rate > 0.0);
}

#[test]
fn test_wider_multiplier_flags_fewer() {
    let measures = normal_sample(2000, 3);

    let narrow = iqr_detector(&measures, 1.0).unwrap();
    let wide = iqr_detector(&measures, 3.0).unwrap();

    assert!(wide.count() <= narrow.count());
    // Every wide-fence outlier is also a narrow-fence outlier
    assert!(wide.iter().zip(narrow.iter()).all(|(&w, &n)| !w || n));
}

#[test]
fn test_parameters_from_json() {
    let params: IqrParameters = serde_json::from_str(r#"{ "iqr_proportion": 3.0 }"#).unwrap();
    assert_eq!(IqrDetector::with_parameters(params).unwrap().iqr_proportion(), 3.0);

    let params: ZScoreParameters = serde_json::from_str("{}").unwrap();
    assert_eq!(params.threshold, DEFAULT_ZSCORE_THRESHOLD);

    let params: ZScoreParameters = serde_json::from_str(r#"{ "threshold": -1.0 }"#).unwrap();
    let err = ZScoreDetector::with_parameters(params).unwrap_err();
    assert!(err.is_logic_error());
}

#[test]
fn test_mask_serializes_as_plain_list() {
    let mask = iqr_detector(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0], 1.5).unwrap();
    let json = serde_json::to_string(&mask).unwrap();
    assert_eq!(
        json,
        "[false,false,false,false,false,false,false,false,false,true]"
    );
}

#[test]
fn test_errors_are_reported_not_partial() {
    let err = iqr_detector::<f64>(&[], 1.5).unwrap_err();
    assert!(err.is_input_error());
    assert_eq!(err.to_string(), "Insufficient data: expected at least 1 samples, got 0");

    let err = zscore_detector(&[1.0, f64::NAN], 2.5).unwrap_err();
    assert!(err.is_input_error());
}
