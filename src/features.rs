//! Feature extraction.
//!
//! [`VideoFeatures`] is the value type holding the four heuristic scalars
//! the scorer and advisor consume. Extraction runs through
//! [`MediaClip::features`](crate::MediaClip::features).

use crate::{
    clip::MediaClip,
    error::ClipscoreError,
    visual::analyze_visual_impl,
    volume::analyze_volume_impl,
};

/// The four heuristic features derived from one clip.
///
/// Produced by [`MediaClip::features`](crate::MediaClip::features), consumed
/// immediately by the scorer and advisor. Immutable once produced; carries no
/// identity beyond its values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoFeatures {
    /// Clip duration in seconds, computed as frame count / frame rate.
    pub duration_seconds: f64,
    /// Mean 8-bit luminance of the first frame (expected range 0–255).
    pub brightness: f64,
    /// Mean absolute per-channel pixel difference between the first two
    /// frames. Zero for two identical frames.
    pub motion: f64,
    /// Mean absolute decoded sample amplitude across all audio channels.
    pub audio_volume: f64,
}

/// Sequence the extraction passes: duration, visual, audio.
pub(crate) fn extract_features_impl(
    clip: &mut MediaClip,
) -> Result<VideoFeatures, ClipscoreError> {
    let video = clip
        .metadata
        .video
        .as_ref()
        .ok_or(ClipscoreError::NoVideoStream)?;
    let video_stream_index = video.stream_index;

    if video.frames_per_second <= 0.0 {
        return Err(ClipscoreError::UnreadableFrameRate);
    }
    let duration_seconds = video.frame_count as f64 / video.frames_per_second;

    let visual = analyze_visual_impl(clip, video_stream_index)?;

    let audio_stream_index = clip
        .audio_stream_index
        .ok_or(ClipscoreError::AudioUnavailable)?;
    let volume = analyze_volume_impl(clip, audio_stream_index)?;

    Ok(VideoFeatures {
        duration_seconds,
        brightness: visual.brightness,
        motion: visual.motion,
        audio_volume: volume.mean_amplitude,
    })
}
