//! Pipeline benchmarks.
//!
//! Requires `tests/fixtures/sample_clip.mp4`; benchmarks are skipped when
//! the fixture is absent.

use std::path::Path;

use criterion::{Criterion, criterion_group, criterion_main};

use clipscore::{MediaClip, ScoreWeights, VideoFeatures, advise};

fn fixture() -> &'static str {
    "tests/fixtures/sample_clip.mp4"
}

fn bench_open(c: &mut Criterion) {
    if !Path::new(fixture()).exists() {
        return;
    }

    c.bench_function("open_clip", |b| {
        b.iter(|| MediaClip::open(fixture()).expect("open"));
    });
}

fn bench_full_analysis(c: &mut Criterion) {
    if !Path::new(fixture()).exists() {
        return;
    }

    c.bench_function("analyze_clip", |b| {
        b.iter(|| clipscore::analyze(fixture()).expect("analyze"));
    });
}

fn bench_score_and_advise(c: &mut Criterion) {
    let features = VideoFeatures {
        duration_seconds: 30.0,
        brightness: 150.0,
        motion: 50.0,
        audio_volume: 0.2,
    };
    let weights = ScoreWeights::default();

    c.bench_function("score_and_advise", |b| {
        b.iter(|| {
            let score = weights.score(&features);
            let suggestions = advise(&features);
            (score, suggestions)
        });
    });
}

criterion_group!(
    benches,
    bench_open,
    bench_full_analysis,
    bench_score_and_advise
);
criterion_main!(benches);
