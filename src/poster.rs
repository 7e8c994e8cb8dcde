//! Poster frame extraction.
//!
//! Decodes the first frame of the clip as an [`image::DynamicImage`] so a
//! presentation layer can show a preview next to the report.

use ffmpeg_next::{
    codec::context::Context as CodecContext,
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{clip::MediaClip, error::ClipscoreError, visual::frame_to_packed_rgb};

/// Decode the first frame and convert it to an RGB image.
pub(crate) fn poster_impl(clip: &mut MediaClip) -> Result<DynamicImage, ClipscoreError> {
    let video_stream_index = clip
        .video_stream_index
        .ok_or(ClipscoreError::NoVideoStream)?;

    log::debug!("Extracting poster frame (stream={video_stream_index})");

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
    let mut rgb_frame = VideoFrame::empty();

    for (stream, packet) in clip.input_context.packets() {
        if stream.index() != video_stream_index {
            continue;
        }

        decoder
            .send_packet(&packet)
            .map_err(|error| ClipscoreError::VideoDecode(format!("Decode error: {error}")))?;

        if decoder.receive_frame(&mut decoded_frame).is_ok() {
            scaler
                .run(&decoded_frame, &mut rgb_frame)
                .map_err(|error| ClipscoreError::VideoDecode(format!("Scaler error: {error}")))?;
            return convert_frame_to_image(&rgb_frame, width, height);
        }
    }

    // Flush in case the first frame is buffered.
    decoder
        .send_eof()
        .map_err(|error| ClipscoreError::VideoDecode(format!("Decode error: {error}")))?;
    if decoder.receive_frame(&mut decoded_frame).is_ok() {
        scaler
            .run(&decoded_frame, &mut rgb_frame)
            .map_err(|error| ClipscoreError::VideoDecode(format!("Scaler error: {error}")))?;
        return convert_frame_to_image(&rgb_frame, width, height);
    }

    Err(ClipscoreError::VideoDecode(
        "Could not decode a poster frame from the video stream".to_string(),
    ))
}

fn convert_frame_to_image(
    rgb_frame: &VideoFrame,
    width: u32,
    height: u32,
) -> Result<DynamicImage, ClipscoreError> {
    let buffer = frame_to_packed_rgb(rgb_frame, width, height);
    let rgb_image = RgbImage::from_raw(width, height, buffer).ok_or_else(|| {
        ClipscoreError::VideoDecode(
            "Failed to construct RGB image from decoded frame data".to_string(),
        )
    })?;
    Ok(DynamicImage::ImageRgb8(rgb_image))
}
