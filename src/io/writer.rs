//! Plain-text output of frequency sequences
//!
//! Output format: a comment line naming the algorithm, then one frequency
//! value per window per line, two decimal places, in temporal order. The
//! format is consumed directly by PWM tone playback scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Algorithm;
use crate::error::ExtractionError;

/// Write a frequency sequence to a text file
///
/// # Arguments
///
/// * `path` - Output file path
/// * `algorithm` - Algorithm that produced the sequence (named in the
///   header comment)
/// * `frequencies` - Frequency estimates in Hz, in window order
///
/// # Errors
///
/// Returns `ExtractionError::IoError` if the file cannot be created or
/// written.
pub fn write_frequencies(
    path: &Path,
    algorithm: Algorithm,
    frequencies: &[f32],
) -> Result<(), ExtractionError> {
    log::debug!(
        "Writing {} frequency estimates to {}",
        frequencies.len(),
        path.display()
    );

    let file = File::create(path).map_err(|e| {
        ExtractionError::IoError(format!("cannot create {}: {}", path.display(), e))
    })?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Algorithm used: {}", algorithm)
        .and_then(|_| {
            for freq in frequencies {
                writeln!(out, "{:.2}", freq)?;
            }
            out.flush()
        })
        .map_err(|e| {
            ExtractionError::IoError(format!("cannot write {}: {}", path.display(), e))
        })?;

    Ok(())
}

/// Find the first non-existing output path for a base name
///
/// Tries `<folder>/<base>.txt`, then `<folder>/<base>1.txt`,
/// `<folder>/<base>2.txt`, and so on, so repeated runs never overwrite
/// earlier output.
pub fn next_available_path(folder: &Path, base: &str) -> PathBuf {
    let candidate = folder.join(format!("{}.txt", base));
    if !candidate.exists() {
        return candidate;
    }
    let mut n = 1u32;
    loop {
        let candidate = folder.join(format!("{}{}.txt", base, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
