//! # Tonetrace
//!
//! A dominant-frequency extraction engine: turns an audio file into a
//! per-window sequence of frequency estimates suitable for driving a PWM
//! tone generator.
//!
//! ## Features
//!
//! - **Four estimation algorithms**: spectral peak (FFT), autocorrelation
//!   periodicity, zero-crossing rate, and cepstral pitch detection
//! - **Fixed-size windowing**: non-overlapping windows, one estimate each,
//!   trailing partial window dropped
//! - **Batch I/O**: audio decoding, JSON settings, and plain-text output with
//!   one frequency per line
//!
//! ## Quick Start
//!
//! ```
//! use tonetrace::{extract_frequencies, Algorithm, ExtractionConfig};
//!
//! // Mono samples from the decoder
//! let samples = vec![0.0f32; 4096];
//! let config = ExtractionConfig {
//!     samples_per_group: 1024,
//!     algorithm: Algorithm::Fft,
//! };
//!
//! let frequencies = extract_frequencies(&samples, 44100, &config)?;
//! assert_eq!(frequencies.len(), 4); // one estimate per full window
//! # Ok::<(), tonetrace::ExtractionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Audio Input → Decoder → Windowing → Frequency Estimation → Text Output
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod estimators;
pub mod io;
pub mod windowing;

// Re-export main types
pub use config::{Algorithm, ExtractionConfig};
pub use error::ExtractionError;

/// Extract the dominant-frequency sequence from a sample buffer
///
/// Splits `samples` into non-overlapping windows of
/// `config.samples_per_group` samples, applies the configured estimator to
/// each window in order, and returns one frequency estimate (Hz) per full
/// window. A trailing partial window is dropped; a buffer shorter than one
/// window yields an empty sequence. Silent or pitchless windows yield the
/// 0.0 Hz sentinel.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz
/// * `config` - Window size and estimation algorithm
///
/// # Returns
///
/// Frequency estimates in Hz, in window (temporal) order
///
/// # Errors
///
/// Returns `ExtractionError::InvalidConfig` if the configuration fails
/// validation, or `ExtractionError::InvalidInput` if `sample_rate` is zero.
/// Both are raised before any window is processed.
///
/// # Example
///
/// ```
/// use tonetrace::{extract_frequencies, ExtractionConfig};
///
/// let samples: Vec<f32> = (0..44100)
///     .map(|i| (i as f32 * 440.0 * 2.0 * std::f32::consts::PI / 44100.0).sin())
///     .collect();
///
/// let frequencies = extract_frequencies(&samples, 44100, &ExtractionConfig::default())?;
/// assert_eq!(frequencies.len(), 44100 / 1024);
/// # Ok::<(), tonetrace::ExtractionError>(())
/// ```
pub fn extract_frequencies(
    samples: &[f32],
    sample_rate: u32,
    config: &ExtractionConfig,
) -> Result<Vec<f32>, ExtractionError> {
    config.validate()?;

    if sample_rate == 0 {
        return Err(ExtractionError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    log::debug!(
        "Extracting dominant frequencies: {} samples at {} Hz, window={}, algorithm={}",
        samples.len(),
        sample_rate,
        config.samples_per_group,
        config.algorithm
    );

    let mut frequencies = Vec::with_capacity(samples.len() / config.samples_per_group);
    for window in windowing::windows(samples, config.samples_per_group) {
        frequencies.push(estimators::estimate(config.algorithm, window, sample_rate));
    }

    log::debug!("Extracted {} frequency estimates", frequencies.len());

    Ok(frequencies)
}
