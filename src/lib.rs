//! # clipscore
//!
//! Heuristic virality scoring for short video clips, powered by FFmpeg via
//! the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate.
//!
//! `clipscore` derives four scalar features from a clip — duration, first
//! frame brightness, two-frame motion, and mean audio amplitude — combines
//! them with a fixed linear weight set into a score clamped to 0–100, and
//! attaches rule-based suggestions for improving the clip.
//!
//! ## Quick Start
//!
//! ### One-call analysis
//!
//! ```no_run
//! let report = clipscore::analyze("upload.mp4").unwrap();
//! println!("score: {:.1}/100", report.score);
//! for suggestion in &report.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```
//!
//! ### Custom weights
//!
//! ```no_run
//! use clipscore::{MediaClip, ScoreWeights};
//!
//! let weights = ScoreWeights::new(-0.1, 0.2, 0.5, 0.2);
//! let mut clip = MediaClip::open("upload.mp4").unwrap();
//! let report = clip.analyze(&weights).unwrap();
//! ```
//!
//! ### Features only
//!
//! ```no_run
//! use clipscore::MediaClip;
//!
//! let mut clip = MediaClip::open("upload.mp4").unwrap();
//! let features = clip.features().unwrap();
//! println!(
//!     "{:.1}s, brightness {:.0}, motion {:.0}, volume {:.3}",
//!     features.duration_seconds, features.brightness, features.motion,
//!     features.audio_volume,
//! );
//! ```
//!
//! ## Behavior notes
//!
//! - Brightness and motion sample only the first two decoded frames; the
//!   narrow window is the numeric contract of the score, not an accuracy
//!   target.
//! - A clip without a decodable audio track is rejected with
//!   [`ClipscoreError::AudioUnavailable`] rather than scored as silent.
//! - Scoring is pure and clamped: any finite feature values produce a score
//!   in `[0, 100]`.
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod advice;
pub mod clip;
pub mod error;
pub mod features;
pub mod ffmpeg;
pub mod metadata;
pub mod pipeline;
mod poster;
pub mod report;
pub mod score;
mod visual;
mod volume;

pub use advice::{MAX_DURATION_SECONDS, MIN_BRIGHTNESS, MIN_MOTION, Suggestion, advise};
pub use clip::MediaClip;
pub use error::ClipscoreError;
pub use features::VideoFeatures;
pub use ffmpeg::{FfmpegLogLevel, set_ffmpeg_log_level};
pub use metadata::{AudioStreamInfo, ClipMetadata, VideoStreamInfo};
pub use pipeline::{analyze, analyze_with_weights};
pub use report::Report;
pub use score::{FEATURE_KEYS, ScoreWeights};
