//! Dominant-frequency estimation algorithms
//!
//! Four interchangeable per-window estimators:
//! - Spectral peak (FFT magnitude argmax)
//! - Autocorrelation periodicity detection
//! - Zero-crossing rate
//! - Cepstral pitch detection
//!
//! All estimators share one contract: given a window of at least two samples
//! and a sample rate, return a single dominant-frequency estimate in Hz
//! (>= 0.0), with 0.0 as the "no detectable pitch / silence" sentinel. Each
//! call is a pure function over its own window; results are deterministic,
//! and exact ties between candidate bins/lags resolve to the lowest index.

pub mod autocorrelation;
pub mod cepstrum;
pub mod fft;
pub mod zcr;

use crate::config::Algorithm;

/// Estimate the dominant frequency of one window using the given algorithm
///
/// Dispatches to the matching estimator. The algorithm value comes from a
/// validated configuration, so this is a total function: every variant has
/// an implementation.
///
/// # Arguments
///
/// * `algorithm` - Estimation algorithm to apply
/// * `window` - Window of mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Dominant frequency in Hz, or 0.0 for silent/degenerate windows
pub fn estimate(algorithm: Algorithm, window: &[f32], sample_rate: u32) -> f32 {
    match algorithm {
        Algorithm::Fft => fft::spectral_peak_frequency(window, sample_rate),
        Algorithm::Autocorrelation => {
            autocorrelation::periodicity_frequency(window, sample_rate)
        }
        Algorithm::Zcr => zcr::crossing_rate_frequency(window, sample_rate),
        Algorithm::Cepstrum => cepstrum::cepstral_peak_frequency(window, sample_rate),
    }
}
