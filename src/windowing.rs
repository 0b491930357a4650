//! Fixed-size sample windowing
//!
//! Splits a mono sample buffer into non-overlapping, fixed-length windows.
//! Every emitted window has exactly the requested length; a trailing partial
//! window is dropped so the estimators never see a short buffer. A buffer
//! shorter than one window yields an empty sequence, not an error.

/// Iterator over fixed-size, non-overlapping sample windows
///
/// Created by [`windows`]. Yields borrowed slices; no samples are copied.
#[derive(Debug, Clone)]
pub struct Windows<'a> {
    remaining: &'a [f32],
    size: usize,
}

/// Split `samples` into non-overlapping windows of exactly `size` samples
///
/// The trailing `samples.len() % size` samples are dropped. A `size` of
/// zero yields an empty sequence; sizes below the configured minimum are
/// otherwise rejected at configuration load (see
/// [`ExtractionConfig::validate`](crate::config::ExtractionConfig::validate)).
///
/// # Example
///
/// ```
/// use tonetrace::windowing::windows;
///
/// let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let collected: Vec<&[f32]> = windows(&samples, 2).collect();
/// assert_eq!(collected, vec![&[0.0, 1.0][..], &[2.0, 3.0][..]]);
/// ```
pub fn windows(samples: &[f32], size: usize) -> Windows<'_> {
    // Normalize a zero size so the iterator terminates and size_hint never
    // divides by zero
    Windows {
        remaining: if size == 0 { &[] } else { samples },
        size: size.max(1),
    }
}

impl<'a> Iterator for Windows<'a> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.len() < self.size {
            return None;
        }
        let (window, rest) = self.remaining.split_at(self.size);
        self.remaining = rest;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.len() / self.size;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Windows<'_> {}
