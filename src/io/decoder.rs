//! Audio decoding to mono sample buffers
//!
//! Decoding is delegated to Symphonia, so every container/codec pair the
//! enabled features cover (WAV, FLAC, Ogg/Vorbis, AIFF) comes through the
//! same path. Decoded audio is reduced to mono by averaging the channels of
//! each frame.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::ExtractionError;

/// File extensions the decoder accepts (lowercase, without the dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["wav", "flac", "ogg", "aiff"];

/// Decode an audio file to mono PCM samples
///
/// Probes the container format, decodes the first audio track, and averages
/// multi-channel frames down to mono. Sample values are normalized `f32`
/// regardless of the stored sample format.
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// Tuple of (mono samples, sample rate in Hz)
///
/// # Errors
///
/// Returns `ExtractionError::DecodingError` if the file cannot be opened,
/// no installed format reader or codec recognizes it, or decoding fails
/// mid-stream. Isolated corrupt packets are skipped with a warning.
pub fn decode_audio(path: &Path) -> Result<(Vec<f32>, u32), ExtractionError> {
    log::debug!("Decoding audio file: {}", path.display());

    let file = File::open(path).map_err(|e| {
        ExtractionError::DecodingError(format!("cannot open {}: {}", path.display(), e))
    })?;
    let stream = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| {
            ExtractionError::DecodingError(format!(
                "unsupported or corrupt file {}: {}",
                path.display(),
                e
            ))
        })?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            ExtractionError::DecodingError(format!(
                "{}: no supported audio track",
                path.display()
            ))
        })?;
    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| {
            ExtractionError::DecodingError(format!("{}: {}", path.display(), e))
        })?;

    let mut interleaved: Vec<f32> = Vec::new();
    let mut channels = 0usize;
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(_) => break,
        };
        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    channels = spec.channels.count();
                    sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    interleaved.extend_from_slice(buf.samples());
                }
            }
            Err(SymphoniaError::DecodeError(e)) => {
                // Isolated corrupt packets; keep decoding the rest
                log::warn!("{}: skipping corrupt packet: {}", path.display(), e);
            }
            Err(e) => {
                return Err(ExtractionError::DecodingError(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    // Channel-reduce to mono by averaging each frame
    let mono = if channels > 1 {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    } else {
        interleaved
    };

    log::debug!(
        "Decoded {}: {} mono samples at {} Hz ({} channel(s))",
        path.display(),
        mono.len(),
        sample_rate,
        channels
    );

    Ok((mono, sample_rate))
}
