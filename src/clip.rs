//! Core [`MediaClip`] implementation.
//!
//! `MediaClip` is the main entry point for the crate. It opens a media file,
//! extracts and caches metadata, and exposes the analysis operations:
//! [`features`](MediaClip::features), [`analyze`](MediaClip::analyze), and
//! [`poster`](MediaClip::poster).

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    time::Duration,
};

use ffmpeg_next::{codec::context::Context as CodecContext, format::context::Input, media::Type};
use image::DynamicImage;

use crate::{
    advice::advise,
    error::ClipscoreError,
    features::{VideoFeatures, extract_features_impl},
    metadata::{AudioStreamInfo, ClipMetadata, VideoStreamInfo},
    poster::poster_impl,
    report::Report,
    score::ScoreWeights,
};

/// An opened media clip ready for analysis.
///
/// Created via [`MediaClip::open`], this struct holds the demuxer context and
/// cached metadata. One `MediaClip` analyzes one file; it holds no state
/// between calls beyond the open handle, and dropping it releases the
/// decoder resources on every path.
///
/// # Example
///
/// ```no_run
/// use clipscore::{MediaClip, ScoreWeights};
///
/// let mut clip = MediaClip::open("upload.mp4")?;
/// let report = clip.analyze(&ScoreWeights::default())?;
/// println!("score: {:.1}", report.score);
/// # Ok::<(), clipscore::ClipscoreError>(())
/// ```
pub struct MediaClip {
    /// The opened FFmpeg input (demuxer) context.
    pub(crate) input_context: Input,
    /// Cached metadata extracted at open time.
    pub(crate) metadata: ClipMetadata,
    /// Index of the best video stream, if one exists.
    pub(crate) video_stream_index: Option<usize>,
    /// Index of the best audio stream, if one exists.
    pub(crate) audio_stream_index: Option<usize>,
    /// Path to the opened media file (kept for error messages).
    #[allow(dead_code)]
    pub(crate) file_path: PathBuf,
}

impl Debug for MediaClip {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MediaClip")
            .field("metadata", &self.metadata)
            .field("video_stream_index", &self.video_stream_index)
            .field("audio_stream_index", &self.audio_stream_index)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

impl MediaClip {
    /// Open a media file for analysis.
    ///
    /// Initializes FFmpeg (idempotent), opens the file, locates the best
    /// video and audio streams, and caches their metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ClipscoreError::FileOpen`] if the file cannot be opened or
    /// its stream parameters cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ClipscoreError> {
        let path = path.as_ref();
        let canonical_path = path.to_path_buf();

        log::debug!("Opening media clip: {}", canonical_path.display());

        // Initialise ffmpeg (safe to call multiple times).
        ffmpeg_next::init().map_err(|error| ClipscoreError::FileOpen {
            path: canonical_path.clone(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| ClipscoreError::FileOpen {
                path: canonical_path.clone(),
                reason: error.to_string(),
            })?;

        let video_stream_index = input_context
            .streams()
            .best(Type::Video)
            .map(|stream| stream.index());

        let audio_stream_index = input_context
            .streams()
            .best(Type::Audio)
            .map(|stream| stream.index());

        // Container-level duration.
        let duration_microseconds = input_context.duration();
        let duration = if duration_microseconds > 0 {
            Duration::from_micros(duration_microseconds as u64)
        } else {
            Duration::ZERO
        };

        let format = input_context.format().name().to_string();

        let video = match video_stream_index {
            Some(index) => {
                let stream = input_context
                    .stream(index)
                    .ok_or(ClipscoreError::NoVideoStream)?;

                let decoder_context = CodecContext::from_parameters(stream.parameters())
                    .map_err(|error| ClipscoreError::FileOpen {
                        path: canonical_path.clone(),
                        reason: format!(
                            "Failed to read video codec parameters for stream {index}: {error}"
                        ),
                    })?;
                let video_decoder = decoder_context.decoder().video().map_err(|error| {
                    ClipscoreError::FileOpen {
                        path: canonical_path.clone(),
                        reason: format!(
                            "Failed to create video decoder for stream {index}: {error}"
                        ),
                    }
                })?;

                // Average frame rate, falling back to the raw stream rate.
                let frame_rate = stream.avg_frame_rate();
                let frames_per_second = if frame_rate.denominator() != 0 {
                    frame_rate.numerator() as f64 / frame_rate.denominator() as f64
                } else {
                    let rate = stream.rate();
                    if rate.denominator() != 0 {
                        rate.numerator() as f64 / rate.denominator() as f64
                    } else {
                        0.0
                    }
                };

                // Prefer the stream's declared frame count; many containers
                // omit it, in which case estimate from duration and rate.
                let declared_frames = stream.frames();
                let frame_count = if declared_frames > 0 {
                    declared_frames as u64
                } else if frames_per_second > 0.0 {
                    (duration.as_secs_f64() * frames_per_second) as u64
                } else {
                    0
                };

                let codec = video_decoder
                    .codec()
                    .map(|codec| codec.name().to_string())
                    .unwrap_or_else(|| "unknown".to_string());

                Some(VideoStreamInfo {
                    width: video_decoder.width(),
                    height: video_decoder.height(),
                    frames_per_second,
                    frame_count,
                    codec,
                    stream_index: index,
                })
            }
            None => None,
        };

        let audio = match audio_stream_index {
            Some(index) => {
                let stream = input_context
                    .stream(index)
                    .ok_or(ClipscoreError::AudioUnavailable)?;

                let decoder_context = CodecContext::from_parameters(stream.parameters())
                    .map_err(|error| ClipscoreError::FileOpen {
                        path: canonical_path.clone(),
                        reason: format!(
                            "Failed to read audio codec parameters for stream {index}: {error}"
                        ),
                    })?;
                let audio_decoder = decoder_context.decoder().audio().map_err(|error| {
                    ClipscoreError::FileOpen {
                        path: canonical_path.clone(),
                        reason: format!(
                            "Failed to create audio decoder for stream {index}: {error}"
                        ),
                    }
                })?;

                let codec = audio_decoder
                    .codec()
                    .map(|codec| codec.name().to_string())
                    .unwrap_or_else(|| "unknown".to_string());

                Some(AudioStreamInfo {
                    sample_rate: audio_decoder.rate(),
                    channels: audio_decoder.channels(),
                    codec,
                    stream_index: index,
                })
            }
            None => None,
        };

        let metadata = ClipMetadata {
            video,
            audio,
            duration,
            format,
        };

        log::info!(
            "Opened media clip: {} (format={}, duration={:.2}s, video={}, audio={})",
            canonical_path.display(),
            metadata.format,
            metadata.duration.as_secs_f64(),
            metadata.video.is_some(),
            metadata.audio.is_some(),
        );

        if let Some(video) = &metadata.video {
            log::debug!(
                "Best video stream: index={}, {}x{}, {:.2} fps, codec={}, ~{} frames",
                video.stream_index,
                video.width,
                video.height,
                video.frames_per_second,
                video.codec,
                video.frame_count,
            );
        }

        Ok(Self {
            input_context,
            metadata,
            video_stream_index,
            audio_stream_index,
            file_path: canonical_path,
        })
    }

    /// Get a reference to the cached clip metadata.
    ///
    /// Metadata is extracted once during [`open`](MediaClip::open) and does
    /// not require additional decoding.
    pub fn metadata(&self) -> &ClipMetadata {
        &self.metadata
    }

    /// Extract the four heuristic features from this clip.
    ///
    /// Runs two decode passes: the first two video frames (brightness and
    /// motion) and the full audio track (mean amplitude). The sampling
    /// window is deliberately narrow — first-frame brightness and a single
    /// frame pair for motion — and is part of the numeric contract, not an
    /// accuracy target.
    ///
    /// # Errors
    ///
    /// - [`ClipscoreError::NoVideoStream`] if the file has no video.
    /// - [`ClipscoreError::UnreadableFrameRate`] if no frame rate is known.
    /// - [`ClipscoreError::InsufficientFrames`] if fewer than two frames
    ///   decode.
    /// - [`ClipscoreError::AudioUnavailable`] if the file has no decodable
    ///   audio track. Missing audio is fatal rather than scored as silence.
    pub fn features(&mut self) -> Result<VideoFeatures, ClipscoreError> {
        extract_features_impl(self)
    }

    /// Run the full pipeline: extract features, score them with `weights`,
    /// and attach suggestions.
    ///
    /// Any failure from feature extraction propagates unchanged; a
    /// [`Report`] is never partially populated.
    pub fn analyze(&mut self, weights: &ScoreWeights) -> Result<Report, ClipscoreError> {
        let features = self.features()?;
        let score = weights.score(&features);
        let suggestions = advise(&features);

        log::info!(
            "Analyzed {}: score={:.1}, suggestions={}",
            self.file_path.display(),
            score,
            suggestions.len(),
        );

        Ok(Report {
            features,
            score,
            suggestions,
        })
    }

    /// Decode the first frame of the clip as an RGB image.
    ///
    /// Intended for presentation layers that want a poster or preview of
    /// the analyzed clip.
    ///
    /// # Errors
    ///
    /// Returns [`ClipscoreError::NoVideoStream`] if the file has no video,
    /// or [`ClipscoreError::VideoDecode`] if no frame can be decoded.
    pub fn poster(&mut self) -> Result<DynamicImage, ClipscoreError> {
        poster_impl(self)
    }

    /// Rewind the demuxer to the start of the file so the next decode pass
    /// reads from the first packet.
    pub(crate) fn rewind(&mut self) -> Result<(), ClipscoreError> {
        self.input_context.seek(0, ..0)?;
        Ok(())
    }
}
