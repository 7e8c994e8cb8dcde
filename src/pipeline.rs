//! One-call analysis entry points.
//!
//! These free functions compose the whole pipeline — open, extract, score,
//! advise — for callers that do not need to hold a [`MediaClip`] themselves.

use std::path::Path;

use crate::{clip::MediaClip, error::ClipscoreError, report::Report, score::ScoreWeights};

/// Analyze a clip with the default weight set.
///
/// Equivalent to [`analyze_with_weights`] with [`ScoreWeights::default`].
///
/// # Example
///
/// ```no_run
/// let report = clipscore::analyze("upload.mp4")?;
/// println!("score: {:.1}", report.score);
/// for suggestion in &report.suggestions {
///     println!("- {suggestion}");
/// }
/// # Ok::<(), clipscore::ClipscoreError>(())
/// ```
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<Report, ClipscoreError> {
    analyze_with_weights(path, &ScoreWeights::default())
}

/// Analyze a clip with an explicit weight set.
///
/// Opens the file, extracts the four features, scores them, and attaches
/// suggestions. Every failure propagates unchanged; no retries, no partial
/// reports, no state held between calls.
pub fn analyze_with_weights<P: AsRef<Path>>(
    path: P,
    weights: &ScoreWeights,
) -> Result<Report, ClipscoreError> {
    let mut clip = MediaClip::open(path)?;
    clip.analyze(weights)
}
