//! Analysis report.

use crate::{advice::Suggestion, features::VideoFeatures};

/// The terminal output of one pipeline invocation.
///
/// Bundles the extracted features, the clamped score, and the fired
/// suggestions (in rule-table order). Ownership passes entirely to the
/// caller; nothing is cached or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The four extracted features.
    pub features: VideoFeatures,
    /// Linear-model score, clamped to `[0, 100]`.
    pub score: f64,
    /// Suggestions in rule evaluation order; each appears at most once.
    pub suggestions: Vec<Suggestion>,
}
