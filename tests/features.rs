//! Feature extraction integration tests.
//!
//! Tests require fixture files from `tests/fixtures/generate_fixtures.sh`
//! and early-return when they are absent.

use std::path::Path;

use clipscore::{ClipscoreError, MediaClip};

fn sample_clip_path() -> &'static str {
    "tests/fixtures/sample_clip.mp4"
}

#[test]
fn features_from_sample_clip() {
    let path = sample_clip_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut clip = MediaClip::open(path).expect("Failed to open fixture");
    let features = clip.features().expect("Failed to extract features");

    assert!(features.duration_seconds > 0.0);
    assert!(
        (0.0..=255.0).contains(&features.brightness),
        "brightness {} outside 8-bit range",
        features.brightness,
    );
    assert!(features.motion >= 0.0);
    assert!(features.audio_volume >= 0.0);
}

#[test]
fn features_are_repeatable_on_one_clip() {
    let path = sample_clip_path();
    if !Path::new(path).exists() {
        return;
    }

    // Each pass rewinds the demuxer, so extraction composes on one handle.
    let mut clip = MediaClip::open(path).expect("Failed to open fixture");
    let first = clip.features().expect("first extraction");
    let second = clip.features().expect("second extraction");
    assert_eq!(first, second);
}

#[test]
fn single_frame_clip_is_rejected() {
    let path = "tests/fixtures/sample_single_frame.mp4";
    if !Path::new(path).exists() {
        return;
    }

    let mut clip = MediaClip::open(path).expect("Failed to open fixture");
    let error = clip.features().unwrap_err();
    assert!(
        matches!(
            error,
            ClipscoreError::InsufficientFrames { frames_decoded: 1 }
        ),
        "expected InsufficientFrames with one decoded frame, got {error:?}",
    );
}

#[test]
fn clip_without_audio_is_rejected() {
    let path = "tests/fixtures/sample_video_only.mp4";
    if !Path::new(path).exists() {
        return;
    }

    let mut clip = MediaClip::open(path).expect("Failed to open fixture");
    let error = clip.features().unwrap_err();
    assert!(
        matches!(error, ClipscoreError::AudioUnavailable),
        "missing audio must be fatal, got {error:?}",
    );
}

#[test]
fn metadata_is_cached_at_open() {
    let path = sample_clip_path();
    if !Path::new(path).exists() {
        return;
    }

    let clip = MediaClip::open(path).expect("Failed to open fixture");
    let metadata = clip.metadata();

    let video = metadata.video.as_ref().expect("fixture has video");
    assert!(video.width > 0 && video.height > 0);
    assert!(video.frames_per_second > 0.0);
    assert!(video.frame_count > 1);

    let audio = metadata.audio.as_ref().expect("fixture has audio");
    assert!(audio.sample_rate > 0);
    assert!(audio.channels > 0);
}

#[test]
fn poster_matches_stream_dimensions() {
    let path = sample_clip_path();
    if !Path::new(path).exists() {
        return;
    }

    let mut clip = MediaClip::open(path).expect("Failed to open fixture");
    let (width, height) = {
        let video = clip.metadata().video.as_ref().expect("fixture has video");
        (video.width, video.height)
    };
    let poster = clip.poster().expect("Failed to extract poster frame");
    assert_eq!(poster.width(), width);
    assert_eq!(poster.height(), height);
}
