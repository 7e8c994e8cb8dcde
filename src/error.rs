//! Error types for the `clipscore` crate.
//!
//! This module defines [`ClipscoreError`], the unified error type returned by
//! all fallible operations in the crate. Variants fall into three groups:
//! media-read failures (the clip could not be opened or decoded far enough),
//! audio availability (the clip has no usable audio track), and configuration
//! (a dynamic weight set does not match the feature set). All of them are
//! unrecoverable at the point of occurrence and propagate to the caller; the
//! crate performs no retries.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `clipscore` operations.
///
/// Every public method that can fail returns `Result<T, ClipscoreError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site. An analysis never produces a
/// partially populated [`Report`](crate::Report): any of these errors aborts
/// the whole pipeline invocation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClipscoreError {
    /// The media file could not be opened.
    #[error("Failed to open media file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::MediaClip::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// The video stream's frame rate is zero or could not be determined,
    /// so no duration can be computed.
    #[error("Could not determine a frame rate for the video stream")]
    UnreadableFrameRate,

    /// The video stream ended before two frames could be decoded.
    ///
    /// Motion analysis needs two consecutive frames; a clip with fewer is
    /// rejected rather than analyzed partially.
    #[error("Video has fewer than two decodable frames ({frames_decoded} decoded)")]
    InsufficientFrames {
        /// Number of frames that were successfully decoded.
        frames_decoded: u64,
    },

    /// A video frame could not be decoded.
    #[error("Failed to decode video frame: {0}")]
    VideoDecode(String),

    /// The file has no decodable audio track.
    ///
    /// Raised when no audio stream exists, or when the stream yields zero
    /// decodable samples. Missing audio is treated as fatal rather than as
    /// silence; see [`crate::MediaClip::features`].
    #[error("No decodable audio track found in file")]
    AudioUnavailable,

    /// Audio data could not be decoded.
    #[error("Failed to decode audio: {0}")]
    AudioDecode(String),

    /// A dynamic weight map does not cover exactly the known feature set.
    ///
    /// Returned by [`ScoreWeights::from_map`](crate::ScoreWeights::from_map).
    /// A missing key is never silently treated as a zero weight.
    #[error("Score weights do not match the feature set (missing: {missing:?}, unknown: {unknown:?})")]
    WeightKeyMismatch {
        /// Feature keys absent from the supplied map.
        missing: Vec<String>,
        /// Map keys that name no known feature.
        unknown: Vec<String>,
    },

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate during poster frame conversion.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}

impl From<FfmpegError> for ClipscoreError {
    fn from(error: FfmpegError) -> Self {
        ClipscoreError::FfmpegError(error.to_string())
    }
}
