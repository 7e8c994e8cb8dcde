//! Rule-based suggestions.
//!
//! A small fixed rule table mapping feature thresholds to human-readable
//! advice. Evaluation is total and stateless: zero, some, or all rules may
//! fire, each at most once, always in table order.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::features::VideoFeatures;

/// Clips longer than this many seconds draw a "too long" suggestion.
pub const MAX_DURATION_SECONDS: f64 = 60.0;
/// First-frame luminance below this draws a brightness suggestion.
pub const MIN_BRIGHTNESS: f64 = 100.0;
/// Inter-frame motion below this draws a motion suggestion.
pub const MIN_MOTION: f64 = 20.0;

/// A threshold-triggered piece of advice.
///
/// The enum identity is stable for programmatic use; [`message`](Suggestion::message)
/// (and `Display`) provide default English wording a presentation layer may
/// replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    /// The clip exceeds [`MAX_DURATION_SECONDS`].
    ShortenDuration,
    /// The first frame is dimmer than [`MIN_BRIGHTNESS`].
    IncreaseBrightness,
    /// Inter-frame motion is below [`MIN_MOTION`].
    IncreaseMotion,
}

impl Suggestion {
    /// Default English wording for this suggestion.
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::ShortenDuration => "Video is too long; aim for 30 seconds or less",
            Suggestion::IncreaseBrightness => "Increase picture brightness",
            Suggestion::IncreaseMotion => "Add more camera or subject motion",
        }
    }
}

impl Display for Suggestion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message())
    }
}

/// Evaluate the rule table against `features`.
///
/// All comparisons are strict, so a value sitting exactly on a threshold
/// does not trigger its rule. The returned order is the table order above,
/// and no suggestion appears twice.
pub fn advise(features: &VideoFeatures) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if features.duration_seconds > MAX_DURATION_SECONDS {
        suggestions.push(Suggestion::ShortenDuration);
    }
    if features.brightness < MIN_BRIGHTNESS {
        suggestions.push(Suggestion::IncreaseBrightness);
    }
    if features.motion < MIN_MOTION {
        suggestions.push(Suggestion::IncreaseMotion);
    }

    suggestions
}
