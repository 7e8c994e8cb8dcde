//! Audio volume analysis.
//!
//! Decodes the clip's entire audio track and computes the mean absolute
//! sample amplitude across all channels. Samples are converted to packed
//! f32 for uniform arithmetic, but the channel layout and sample rate are
//! left untouched — the resampler acts purely as a format converter.

use ffmpeg_next::{
    codec::context::Context as CodecContext,
    format::{Sample, sample::Type as SampleType},
    frame::Audio as AudioFrame,
    software::resampling::Context as ResamplingContext,
};

use crate::{clip::MediaClip, error::ClipscoreError};

/// Statistics from the full-track audio pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VolumeStats {
    /// Mean of |sample| over every channel of every decoded frame.
    pub(crate) mean_amplitude: f64,
    /// Total number of channel samples accumulated.
    pub(crate) total_samples: u64,
}

/// Decode the whole audio track and compute the mean absolute amplitude.
///
/// Fails with [`ClipscoreError::AudioUnavailable`] when the track yields no
/// decodable samples at all.
pub(crate) fn analyze_volume_impl(
    clip: &mut MediaClip,
    audio_stream_index: usize,
) -> Result<VolumeStats, ClipscoreError> {
    log::debug!("Analyzing audio volume (stream={audio_stream_index})");

    clip.rewind()?;

    let stream = clip
        .input_context
        .stream(audio_stream_index)
        .ok_or(ClipscoreError::AudioUnavailable)?;

    let decoder_context = CodecContext::from_parameters(stream.parameters())?;
    let mut decoder = decoder_context.decoder().audio().map_err(|error| {
        ClipscoreError::AudioDecode(format!("Failed to create audio decoder: {error}"))
    })?;

    let sample_rate = decoder.rate();
    let channel_layout = decoder.channel_layout();

    // Same layout and rate on both sides: format conversion only.
    let mut resampler = ResamplingContext::get(
        decoder.format(),
        channel_layout,
        sample_rate,
        Sample::F32(SampleType::Packed),
        channel_layout,
        sample_rate,
    )
    .map_err(|error| {
        ClipscoreError::AudioDecode(format!("Failed to create format converter: {error}"))
    })?;

    let mut sum_abs: f64 = 0.0;
    let mut total_samples: u64 = 0;
    let mut decoded_frame = AudioFrame::empty();
    let mut converted_frame = AudioFrame::empty();

    let mut accumulate = |converted: &AudioFrame| {
        let channels = converted.channels().max(1) as usize;
        let value_count = converted.samples() * channels;
        let data = converted.data(0);
        // Packed f32: plane 0 interleaves all channels.
        let float_samples: &[f32] =
            unsafe { std::slice::from_raw_parts(data.as_ptr() as *const f32, value_count) };

        for &sample in float_samples {
            sum_abs += sample.abs() as f64;
        }
        total_samples += value_count as u64;
    };

    for (stream, packet) in clip.input_context.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }

        decoder
            .send_packet(&packet)
            .map_err(|error| ClipscoreError::AudioDecode(format!("Audio decode error: {error}")))?;

        while decoder.receive_frame(&mut decoded_frame).is_ok() {
            resampler
                .run(&decoded_frame, &mut converted_frame)
                .map_err(|error| {
                    ClipscoreError::AudioDecode(format!("Sample conversion error: {error}"))
                })?;
            accumulate(&converted_frame);
        }
    }

    // Drain buffered frames.
    decoder
        .send_eof()
        .map_err(|error| ClipscoreError::AudioDecode(format!("Audio decode error: {error}")))?;
    while decoder.receive_frame(&mut decoded_frame).is_ok() {
        resampler
            .run(&decoded_frame, &mut converted_frame)
            .map_err(|error| {
                ClipscoreError::AudioDecode(format!("Sample conversion error: {error}"))
            })?;
        accumulate(&converted_frame);
    }

    if total_samples == 0 {
        return Err(ClipscoreError::AudioUnavailable);
    }

    let mean_amplitude = sum_abs / total_samples as f64;

    log::debug!(
        "Volume pass done: mean_amplitude={:.4}, samples={}, rate={} Hz",
        mean_amplitude,
        total_samples,
        sample_rate,
    );

    Ok(VolumeStats {
        mean_amplitude,
        total_samples,
    })
}
