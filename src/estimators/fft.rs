//! Spectral-peak frequency estimation
//!
//! Takes the forward FFT of the window and reports the frequency of the
//! strongest magnitude bin. The DC bin is excluded so a constant offset in
//! the signal cannot masquerade as a dominant frequency.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Estimate the dominant frequency as the strongest FFT magnitude bin
///
/// Computes the magnitude spectrum over the non-negative frequency bins
/// `1..=N/2` (bin 0 is skipped as the DC component) and maps the peak bin to
/// Hz with `bin * sample_rate / N`. Exact magnitude ties resolve to the
/// lowest bin.
///
/// # Arguments
///
/// * `window` - Window of mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Dominant frequency in Hz, or 0.0 when every non-DC magnitude is zero
/// (total silence)
pub fn spectral_peak_frequency(window: &[f32], sample_rate: u32) -> f32 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }

    let mut spectrum: Vec<Complex<f32>> =
        window.iter().map(|&x| Complex::new(x, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut spectrum);

    // Real input: bins above N/2 mirror the non-negative frequencies
    let mut best_bin = 0usize;
    let mut best_magnitude = 0.0f32;
    for (bin, value) in spectrum.iter().enumerate().take(n / 2 + 1).skip(1) {
        let magnitude = value.norm();
        if magnitude > best_magnitude {
            best_magnitude = magnitude;
            best_bin = bin;
        }
    }

    // Total silence: every non-DC magnitude is zero
    if best_magnitude == 0.0 {
        return 0.0;
    }

    best_bin as f32 * sample_rate as f32 / n as f32
}
