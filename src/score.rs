//! Linear scoring model.
//!
//! [`ScoreWeights`] holds one signed coefficient per feature and combines a
//! [`VideoFeatures`] into a score clamped to the 0–100 range. The weights are
//! an explicit immutable value injected per call — there is no ambient model
//! — so tests can run arbitrary weight sets reproducibly.

use std::collections::HashMap;

use crate::{error::ClipscoreError, features::VideoFeatures};

/// The known feature keys, in scoring order.
///
/// A dynamic weight map must cover exactly this set; the sum in
/// [`ScoreWeights::score`] runs in this order so results are reproducible
/// despite floating-point non-associativity.
pub const FEATURE_KEYS: [&str; 4] = ["duration", "brightness", "motion", "audio_volume"];

/// One signed coefficient per feature.
///
/// `Default` is the original demo model. Mismatched key sets are
/// unrepresentable on this typed path; dynamic maps go through
/// [`from_map`](ScoreWeights::from_map), which validates the key set at
/// construction time.
///
/// # Example
///
/// ```
/// use clipscore::{ScoreWeights, VideoFeatures};
///
/// let features = VideoFeatures {
///     duration_seconds: 30.0,
///     brightness: 150.0,
///     motion: 50.0,
///     audio_volume: 0.2,
/// };
/// let score = ScoreWeights::default().score(&features);
/// assert!((0.0..=100.0).contains(&score));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Coefficient for `duration_seconds`.
    pub duration: f64,
    /// Coefficient for `brightness`.
    pub brightness: f64,
    /// Coefficient for `motion`.
    pub motion: f64,
    /// Coefficient for `audio_volume`.
    pub audio_volume: f64,
}

impl Default for ScoreWeights {
    /// The original model: long clips penalized, bright and busy clips with
    /// audible audio rewarded.
    fn default() -> Self {
        Self {
            duration: -0.2,
            brightness: 0.3,
            motion: 0.4,
            audio_volume: 0.1,
        }
    }
}

impl ScoreWeights {
    /// Create a weight set from explicit coefficients.
    pub fn new(duration: f64, brightness: f64, motion: f64, audio_volume: f64) -> Self {
        Self {
            duration,
            brightness,
            motion,
            audio_volume,
        }
    }

    /// Build a weight set from a dynamic key → coefficient map.
    ///
    /// The map must contain exactly the keys in [`FEATURE_KEYS`]. A missing
    /// key is a configuration defect, never a silent zero weight.
    ///
    /// # Errors
    ///
    /// Returns [`ClipscoreError::WeightKeyMismatch`] listing the missing and
    /// unknown keys (each sorted) when the key set differs.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use clipscore::ScoreWeights;
    ///
    /// let map: HashMap<String, f64> = [
    ///     ("duration".to_string(), -0.2),
    ///     ("brightness".to_string(), 0.3),
    ///     ("motion".to_string(), 0.4),
    ///     ("audio_volume".to_string(), 0.1),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let weights = ScoreWeights::from_map(&map).unwrap();
    /// assert_eq!(weights, ScoreWeights::default());
    /// ```
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, ClipscoreError> {
        let mut missing: Vec<String> = FEATURE_KEYS
            .iter()
            .filter(|key| !map.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        let mut unknown: Vec<String> = map
            .keys()
            .filter(|key| !FEATURE_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() || !unknown.is_empty() {
            missing.sort();
            unknown.sort();
            return Err(ClipscoreError::WeightKeyMismatch { missing, unknown });
        }

        Ok(Self {
            duration: map["duration"],
            brightness: map["brightness"],
            motion: map["motion"],
            audio_volume: map["audio_volume"],
        })
    }

    /// Combine features into a score clamped to `[0, 100]`.
    ///
    /// Pure function: `raw = Σ feature × weight` in [`FEATURE_KEYS`] order,
    /// then `clamp(raw × 100, 0, 100)`. No rounding is applied here;
    /// presentation-layer rounding is the caller's responsibility.
    pub fn score(&self, features: &VideoFeatures) -> f64 {
        let raw = features.duration_seconds * self.duration
            + features.brightness * self.brightness
            + features.motion * self.motion
            + features.audio_volume * self.audio_volume;

        (raw * 100.0).clamp(0.0, 100.0)
    }
}
