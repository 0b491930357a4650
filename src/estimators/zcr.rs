//! Zero-crossing-rate frequency estimation
//!
//! A crude but very cheap pitch proxy: each full period of a pure tone
//! crosses zero exactly twice, so the crossing count over the window length
//! maps directly to a frequency. Depends only on the sign of each sample, so
//! the estimate is invariant to amplitude scaling.

/// Estimate the dominant frequency from the zero-crossing count
///
/// Counts sign changes between consecutive samples (an exact zero counts as
/// non-negative, so a touch of zero is not counted twice) and maps the count
/// to Hz with `crossings * sample_rate / (2 * window_len)`.
///
/// # Arguments
///
/// * `window` - Window of mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Dominant frequency in Hz, or 0.0 for a window with no crossings
/// (silent or constant signal)
pub fn crossing_rate_frequency(window: &[f32], sample_rate: u32) -> f32 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }

    let mut crossings = 0usize;
    for pair in window.windows(2) {
        if (pair[0] >= 0.0) != (pair[1] >= 0.0) {
            crossings += 1;
        }
    }

    if crossings == 0 {
        return 0.0;
    }

    crossings as f32 * sample_rate as f32 / (2.0 * n as f32)
}
