//! Brightness and motion analysis.
//!
//! Decodes the first two frames of the video stream in RGB24 and computes
//! two statistics: the mean luminance of the first frame (brightness) and
//! the mean absolute per-channel pixel difference between the two frames
//! (motion). No seeking is involved; the second frame is the one
//! immediately following the first in decode order.

use ffmpeg_next::{
    codec::context::Context as CodecContext,
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};

use crate::{clip::MediaClip, error::ClipscoreError};

/// Rec.601 luma coefficients, matching an 8-bit grayscale conversion.
const LUMA_RED: f64 = 0.299;
const LUMA_GREEN: f64 = 0.587;
const LUMA_BLUE: f64 = 0.114;

/// Statistics from the two-frame visual pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VisualStats {
    /// Mean 8-bit luminance of the first frame (0–255).
    pub(crate) brightness: f64,
    /// Mean absolute per-channel difference between frames one and two.
    pub(crate) motion: f64,
}

/// Copy a decoded RGB24 frame plane into a tightly packed buffer.
///
/// FFmpeg frame planes may carry per-row padding (the stride exceeds
/// `width * 3`); strip it so downstream arithmetic can treat the buffer as
/// `height * width * 3` contiguous bytes.
pub(crate) fn frame_to_packed_rgb(video_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = video_frame.stride(0);
    let expected_stride = (width as usize) * 3;
    let data = video_frame.data(0);

    if stride == expected_stride {
        // No padding — copy the entire plane at once.
        data[..expected_stride * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(expected_stride * (height as usize));
        for row in 0..(height as usize) {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + expected_stride]);
        }
        buffer
    }
}

fn mean_luminance(rgb: &[u8]) -> f64 {
    let pixel_count = rgb.len() / 3;
    if pixel_count == 0 {
        return 0.0;
    }

    let mut sum = 0.0_f64;
    for pixel in rgb.chunks_exact(3) {
        sum += LUMA_RED * pixel[0] as f64
            + LUMA_GREEN * pixel[1] as f64
            + LUMA_BLUE * pixel[2] as f64;
    }
    sum / pixel_count as f64
}

fn mean_absolute_difference(first: &[u8], second: &[u8]) -> f64 {
    if first.is_empty() || first.len() != second.len() {
        return 0.0;
    }

    let mut sum = 0.0_f64;
    for (a, b) in first.iter().zip(second.iter()) {
        sum += (*a as i16 - *b as i16).unsigned_abs() as f64;
    }
    sum / first.len() as f64
}

/// Decode the first two frames and compute brightness and motion.
pub(crate) fn analyze_visual_impl(
    clip: &mut MediaClip,
    video_stream_index: usize,
) -> Result<VisualStats, ClipscoreError> {
    log::debug!("Analyzing brightness/motion (stream={video_stream_index})");

    clip.rewind()?;

    let stream = clip
        .input_context
        .stream(video_stream_index)
        .ok_or(ClipscoreError::NoVideoStream)?;
    let decoder_context = CodecContext::from_parameters(stream.parameters())?;
    let mut decoder = decoder_context
        .decoder()
        .video()
        .map_err(|error| ClipscoreError::VideoDecode(format!("Failed to create decoder: {error}")))?;

    let width = decoder.width();
    let height = decoder.height();

    // Pixel-format converter: source format → packed RGB24, same dimensions.
    let mut scaler = ScalingContext::get(
        decoder.format(),
        width,
        height,
        Pixel::RGB24,
        width,
        height,
        ScalingFlags::BILINEAR,
    )
    .map_err(|error| ClipscoreError::VideoDecode(format!("Failed to create scaler: {error}")))?;

    let mut decoded_frame = VideoFrame::empty();
    let mut first_frame: Option<Vec<u8>> = None;
    let mut frames_decoded: u64 = 0;

    let collect =
        |decoded: &VideoFrame,
         scaler: &mut ScalingContext,
         first_frame: &mut Option<Vec<u8>>,
         frames_decoded: &mut u64|
         -> Result<Option<VisualStats>, ClipscoreError> {
            let mut converted = VideoFrame::empty();
            scaler
                .run(decoded, &mut converted)
                .map_err(|error| ClipscoreError::VideoDecode(format!("Scaler error: {error}")))?;
            let packed = frame_to_packed_rgb(&converted, width, height);
            *frames_decoded += 1;

            match first_frame.take() {
                None => {
                    *first_frame = Some(packed);
                    Ok(None)
                }
                Some(first) => {
                    let brightness = mean_luminance(&first);
                    let motion = mean_absolute_difference(&first, &packed);
                    Ok(Some(VisualStats { brightness, motion }))
                }
            }
        };

    for (stream, packet) in clip.input_context.packets() {
        if stream.index() != video_stream_index {
            continue;
        }

        decoder
            .send_packet(&packet)
            .map_err(|error| ClipscoreError::VideoDecode(format!("Decode error: {error}")))?;

        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            if let Some(stats) = collect(
                &decoded_frame,
                &mut scaler,
                &mut first_frame,
                &mut frames_decoded,
            )? {
                log::debug!(
                    "Visual pass done: brightness={:.2}, motion={:.2}",
                    stats.brightness,
                    stats.motion,
                );
                return Ok(stats);
            }
        }
    }

    // Drain the decoder in case the second frame is still buffered.
    decoder
        .send_eof()
        .map_err(|error| ClipscoreError::VideoDecode(format!("Decode error: {error}")))?;
    while decoder.receive_frame(&mut decoded_frame).is_ok() {
        if let Some(stats) = collect(
            &decoded_frame,
            &mut scaler,
            &mut first_frame,
            &mut frames_decoded,
        )? {
            return Ok(stats);
        }
    }

    Err(ClipscoreError::InsufficientFrames { frames_decoded })
}

#[cfg(test)]
mod tests {
    use super::{mean_absolute_difference, mean_luminance};

    #[test]
    fn luminance_of_white_is_full_scale() {
        let white = vec![255_u8; 3 * 4];
        let value = mean_luminance(&white);
        assert!((value - 255.0).abs() < 1e-6);
    }

    #[test]
    fn luminance_of_black_is_zero() {
        let black = vec![0_u8; 3 * 4];
        assert_eq!(mean_luminance(&black), 0.0);
    }

    #[test]
    fn luminance_weights_green_heaviest() {
        let red = vec![255, 0, 0];
        let green = vec![0, 255, 0];
        let blue = vec![0, 0, 255];
        assert!(mean_luminance(&green) > mean_luminance(&red));
        assert!(mean_luminance(&red) > mean_luminance(&blue));
    }

    #[test]
    fn identical_frames_have_zero_motion() {
        let frame = vec![42_u8; 3 * 16];
        assert_eq!(mean_absolute_difference(&frame, &frame), 0.0);
    }

    #[test]
    fn motion_is_mean_of_channel_deltas() {
        let first = vec![10_u8, 10, 10, 10, 10, 10];
        let second = vec![20_u8, 10, 10, 10, 10, 10];
        // One channel differs by 10 out of six channel samples.
        let motion = mean_absolute_difference(&first, &second);
        assert!((motion - 10.0 / 6.0).abs() < 1e-9);
    }
}
