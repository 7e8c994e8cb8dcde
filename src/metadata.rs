//! Stream metadata types.
//!
//! [`ClipMetadata`] is cached by [`MediaClip::open`](crate::MediaClip::open)
//! and describes the container plus its best video and audio streams.
//! Accessing it never triggers additional decoding.

use std::time::Duration;

/// Metadata for the best video stream.
#[derive(Debug, Clone)]
pub struct VideoStreamInfo {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Average frames per second. Zero when the container declares no rate.
    pub frames_per_second: f64,
    /// Total frame count. Taken from the stream when declared, otherwise
    /// estimated from the container duration and frame rate.
    pub frame_count: u64,
    /// Codec name (e.g. `h264`), or `unknown`.
    pub codec: String,
    /// Demuxer stream index.
    pub stream_index: usize,
}

/// Metadata for the best audio stream.
#[derive(Debug, Clone)]
pub struct AudioStreamInfo {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count.
    pub channels: u16,
    /// Codec name (e.g. `aac`), or `unknown`.
    pub codec: String,
    /// Demuxer stream index.
    pub stream_index: usize,
}

/// Container-level metadata cached at open time.
#[derive(Debug, Clone)]
pub struct ClipMetadata {
    /// Best video stream, if the file has one.
    pub video: Option<VideoStreamInfo>,
    /// Best audio stream, if the file has one.
    pub audio: Option<AudioStreamInfo>,
    /// Container-reported duration.
    pub duration: Duration,
    /// Container format name (e.g. `mov,mp4,m4a,3gp,3g2,mj2`).
    pub format: String,
}
