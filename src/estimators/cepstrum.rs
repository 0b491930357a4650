//! Cepstral pitch detection
//!
//! Computes the real cepstrum of the window (inverse FFT of the
//! log-magnitude spectrum) and reports `sample_rate / best_lag` for the
//! strongest peak in the plausible quefrency range. A periodic signal shows
//! up as a sharp peak at the quefrency of its period, separated from the
//! slow spectral-envelope components that live near zero quefrency.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Floor added to spectral magnitudes before taking the logarithm
const LOG_EPSILON: f32 = 1e-10;

/// Highest pitch considered plausible for tone output
///
/// Quefrency lags below `sample_rate / MAX_PITCH_HZ` are excluded from the
/// peak search: they correspond to implausibly high pitches, and the near-DC
/// cepstrum is dominated by the spectral envelope rather than periodicity.
const MAX_PITCH_HZ: f32 = 2000.0;

/// Estimate the dominant frequency from the cepstral peak
///
/// Searches quefrency lags from `sample_rate / 2000 Hz` (see
/// [`MAX_PITCH_HZ`]) through `N/2`; the real cepstrum of a real signal is
/// symmetric, so larger lags are mirrors. Exact ties resolve to the lowest
/// lag.
///
/// # Arguments
///
/// * `window` - Window of mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Dominant frequency in Hz, or 0.0 for a silent window, a window too short
/// to resolve any plausible pitch, or a cepstrum with no positive peak in
/// the search range
pub fn cepstral_peak_frequency(window: &[f32], sample_rate: u32) -> f32 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }
    if window.iter().all(|&x| x == 0.0) {
        return 0.0;
    }

    let mean = window.iter().sum::<f32>() / n as f32;

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    let ifft = planner.plan_fft_inverse(n);

    let mut buffer: Vec<Complex<f32>> = window
        .iter()
        .map(|&x| Complex::new(x - mean, 0.0))
        .collect();
    fft.process(&mut buffer);

    // Log-magnitude spectrum, then back to the quefrency domain
    for value in &mut buffer {
        *value = Complex::new((value.norm() + LOG_EPSILON).ln(), 0.0);
    }
    ifft.process(&mut buffer);

    // rustfft's inverse transform is unscaled
    let scale = 1.0 / n as f32;

    let min_lag = ((sample_rate as f32 / MAX_PITCH_HZ) as usize).max(1);
    let max_lag = n / 2;
    if min_lag > max_lag {
        return 0.0;
    }

    let mut best_lag = 0usize;
    let mut best_value = 0.0f32;
    for (lag, value) in buffer.iter().enumerate().take(max_lag + 1).skip(min_lag) {
        let cepstrum = value.re * scale;
        if cepstrum > best_value {
            best_value = cepstrum;
            best_lag = lag;
        }
    }

    if best_lag == 0 {
        return 0.0;
    }

    sample_rate as f32 / best_lag as f32
}
