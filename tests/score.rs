//! Scorer tests.
//!
//! These are pure-logic tests and need no media fixtures.

use std::collections::HashMap;

use clipscore::{ClipscoreError, ScoreWeights, VideoFeatures};

fn demo_weights() -> ScoreWeights {
    ScoreWeights::new(-0.2, 0.3, 0.4, 0.1)
}

#[test]
fn default_weights_match_demo_model() {
    assert_eq!(ScoreWeights::default(), demo_weights());
}

#[test]
fn strong_clip_saturates_at_100() {
    // raw = -6 + 45 + 20 + 0.02 = 59.02 -> x100 clamps to 100.
    let features = VideoFeatures {
        duration_seconds: 30.0,
        brightness: 150.0,
        motion: 50.0,
        audio_volume: 0.2,
    };
    assert_eq!(demo_weights().score(&features), 100.0);
}

#[test]
fn weak_clip_still_saturates_raw_scale() {
    // raw = -18 + 24 + 4 + 0.005 = 10.005 -> x100 = 1000.5, clamps to 100.
    // The raw sum trivially exceeds the cap; the clamp is doing the work.
    let features = VideoFeatures {
        duration_seconds: 90.0,
        brightness: 80.0,
        motion: 10.0,
        audio_volume: 0.05,
    };
    assert_eq!(demo_weights().score(&features), 100.0);
}

#[test]
fn all_zero_features_score_zero() {
    let features = VideoFeatures {
        duration_seconds: 0.0,
        brightness: 0.0,
        motion: 0.0,
        audio_volume: 0.0,
    };
    assert_eq!(demo_weights().score(&features), 0.0);
}

#[test]
fn negative_raw_clamps_to_zero() {
    let features = VideoFeatures {
        duration_seconds: 500.0,
        brightness: 0.0,
        motion: 0.0,
        audio_volume: 0.0,
    };
    assert_eq!(demo_weights().score(&features), 0.0);
}

#[test]
fn score_is_deterministic() {
    let features = VideoFeatures {
        duration_seconds: 42.5,
        brightness: 123.4,
        motion: 19.9,
        audio_volume: 0.07,
    };
    let first = demo_weights().score(&features);
    let second = demo_weights().score(&features);
    assert_eq!(first.to_bits(), second.to_bits(), "score must be bit-identical");
}

#[test]
fn score_stays_in_range_for_varied_inputs() {
    let weights = demo_weights();
    let samples = [
        (0.0, 0.0, 0.0, 0.0),
        (15.0, 200.0, 80.0, 0.9),
        (3600.0, 10.0, 1.0, 0.001),
        (1.0, 255.0, 255.0, 1.0),
        (120.0, 50.0, 5.0, 0.5),
    ];
    for (duration_seconds, brightness, motion, audio_volume) in samples {
        let features = VideoFeatures {
            duration_seconds,
            brightness,
            motion,
            audio_volume,
        };
        let score = weights.score(&features);
        assert!(
            (0.0..=100.0).contains(&score),
            "score {score} out of range for {features:?}",
        );
    }
}

#[test]
fn from_map_accepts_exact_key_set() {
    let map: HashMap<String, f64> = [
        ("duration".to_string(), -0.2),
        ("brightness".to_string(), 0.3),
        ("motion".to_string(), 0.4),
        ("audio_volume".to_string(), 0.1),
    ]
    .into_iter()
    .collect();

    let weights = ScoreWeights::from_map(&map).expect("exact key set should validate");
    assert_eq!(weights, demo_weights());
}

#[test]
fn from_map_rejects_missing_key() {
    let map: HashMap<String, f64> = [
        ("duration".to_string(), -0.2),
        ("brightness".to_string(), 0.3),
        ("audio_volume".to_string(), 0.1),
    ]
    .into_iter()
    .collect();

    let error = ScoreWeights::from_map(&map).unwrap_err();
    match error {
        ClipscoreError::WeightKeyMismatch { missing, unknown } => {
            assert_eq!(missing, vec!["motion".to_string()]);
            assert!(unknown.is_empty());
        }
        other => panic!("expected WeightKeyMismatch, got {other:?}"),
    }
}

#[test]
fn from_map_rejects_unknown_key() {
    let map: HashMap<String, f64> = [
        ("duration".to_string(), -0.2),
        ("brightness".to_string(), 0.3),
        ("motion".to_string(), 0.4),
        ("audio_volume".to_string(), 0.1),
        ("sparkle".to_string(), 9.0),
    ]
    .into_iter()
    .collect();

    let error = ScoreWeights::from_map(&map).unwrap_err();
    match error {
        ClipscoreError::WeightKeyMismatch { missing, unknown } => {
            assert!(missing.is_empty());
            assert_eq!(unknown, vec!["sparkle".to_string()]);
        }
        other => panic!("expected WeightKeyMismatch, got {other:?}"),
    }
}

#[test]
fn mismatch_error_message_names_keys() {
    let map: HashMap<String, f64> = HashMap::new();
    let message = ScoreWeights::from_map(&map).unwrap_err().to_string();
    assert!(
        message.contains("motion") && message.contains("audio_volume"),
        "error should list missing keys: {message}",
    );
}
