//! Autocorrelation-based periodicity detection
//!
//! Computes the unnormalized autocorrelation of the (mean-removed) window and
//! reports `sample_rate / best_lag` for the strongest correlation lag. The
//! zero-lag lobe, which is trivially maximal, is skipped by starting the peak
//! search at the first lag where the autocorrelation begins to rise again;
//! this restricts the search to lags that can represent an actual period
//! without hard-coding a pitch range.

/// Estimate the dominant frequency from the autocorrelation peak
///
/// # Arguments
///
/// * `window` - Window of mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Dominant frequency in Hz, or 0.0 when the window is silent, the
/// autocorrelation never rises after the zero-lag lobe, or no lag produces a
/// positive correlation peak
pub fn periodicity_frequency(window: &[f32], sample_rate: u32) -> f32 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }

    // Remove DC so a constant offset does not correlate with itself at
    // every lag
    let mean = window.iter().sum::<f32>() / n as f32;
    let centered: Vec<f32> = window.iter().map(|&x| x - mean).collect();

    // Unnormalized autocorrelation for lags 0..n-1
    let mut acf = vec![0.0f32; n];
    for (lag, value) in acf.iter_mut().enumerate() {
        let mut sum = 0.0f32;
        for i in 0..n - lag {
            sum += centered[i] * centered[i + lag];
        }
        *value = sum;
    }

    // Skip past the zero-lag lobe: the peak search starts where the function
    // first rises. A silent or aperiodic window never rises.
    let search_start = match (0..n - 1).find(|&lag| acf[lag + 1] > acf[lag]) {
        Some(lag) => lag + 1,
        None => return 0.0,
    };

    // Lowest-index argmax over the remaining lags
    let mut best_lag = search_start;
    let mut best_value = acf[search_start];
    for lag in search_start + 1..n {
        if acf[lag] > best_value {
            best_value = acf[lag];
            best_lag = lag;
        }
    }

    if best_value <= 0.0 {
        return 0.0;
    }

    sample_rate as f32 / best_lag as f32
}
