//! Advisor rule table tests.
//!
//! These are pure-logic tests and need no media fixtures.

use clipscore::{Suggestion, VideoFeatures, advise};

fn features(duration_seconds: f64, brightness: f64, motion: f64) -> VideoFeatures {
    VideoFeatures {
        duration_seconds,
        brightness,
        motion,
        audio_volume: 0.1,
    }
}

#[test]
fn good_clip_gets_no_suggestions() {
    assert!(advise(&features(30.0, 150.0, 50.0)).is_empty());
}

#[test]
fn weak_clip_gets_all_three_in_table_order() {
    let suggestions = advise(&features(90.0, 80.0, 10.0));
    assert_eq!(
        suggestions,
        vec![
            Suggestion::ShortenDuration,
            Suggestion::IncreaseBrightness,
            Suggestion::IncreaseMotion,
        ],
    );
}

#[test]
fn zero_features_fire_brightness_and_motion_only() {
    // Zero duration is not "too long".
    let suggestions = advise(&features(0.0, 0.0, 0.0));
    assert_eq!(
        suggestions,
        vec![Suggestion::IncreaseBrightness, Suggestion::IncreaseMotion],
    );
}

#[test]
fn thresholds_are_strict() {
    // Values sitting exactly on a threshold do not trigger the rule.
    assert!(advise(&features(60.0, 100.0, 20.0)).is_empty());
}

#[test]
fn just_past_thresholds_trigger() {
    let suggestions = advise(&features(60.001, 99.999, 19.999));
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn each_rule_fires_independently() {
    assert_eq!(
        advise(&features(61.0, 150.0, 50.0)),
        vec![Suggestion::ShortenDuration],
    );
    assert_eq!(
        advise(&features(30.0, 99.0, 50.0)),
        vec![Suggestion::IncreaseBrightness],
    );
    assert_eq!(
        advise(&features(30.0, 150.0, 19.0)),
        vec![Suggestion::IncreaseMotion],
    );
}

#[test]
fn suggestions_have_nonempty_messages() {
    for suggestion in [
        Suggestion::ShortenDuration,
        Suggestion::IncreaseBrightness,
        Suggestion::IncreaseMotion,
    ] {
        assert!(!suggestion.message().is_empty());
        assert_eq!(suggestion.to_string(), suggestion.message());
    }
}

#[test]
fn advise_is_total_for_extreme_values() {
    // Never panics, whatever finite values come in.
    let extreme = VideoFeatures {
        duration_seconds: f64::MAX,
        brightness: -1.0e12,
        motion: f64::MIN_POSITIVE,
        audio_volume: 0.0,
    };
    let suggestions = advise(&extreme);
    assert_eq!(suggestions.len(), 3);
}
