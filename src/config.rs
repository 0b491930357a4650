//! Configuration parameters for frequency extraction
//!
//! Settings are loaded from a JSON file (`settings.json` by convention):
//!
//! ```json
//! { "samples_per_group": 1024, "algorithm": "fft" }
//! ```
//!
//! Unknown algorithm names and window sizes below
//! [`ExtractionConfig::MIN_SAMPLES_PER_GROUP`] are rejected before any audio
//! is processed.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Frequency estimation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Spectral peak: argmax over non-DC FFT magnitude bins
    Fft,
    /// Autocorrelation periodicity detection
    Autocorrelation,
    /// Zero-crossing rate
    Zcr,
    /// Cepstral pitch detection
    Cepstrum,
}

impl Algorithm {
    /// All supported algorithms, in settings-file spelling order
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fft,
        Algorithm::Autocorrelation,
        Algorithm::Zcr,
        Algorithm::Cepstrum,
    ];

    /// Settings-file spelling of the algorithm (e.g. `"fft"`)
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fft => "fft",
            Algorithm::Autocorrelation => "autocorrelation",
            Algorithm::Zcr => "zcr",
            Algorithm::Cepstrum => "cepstrum",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fft" => Ok(Algorithm::Fft),
            "autocorrelation" => Ok(Algorithm::Autocorrelation),
            "zcr" => Ok(Algorithm::Zcr),
            "cepstrum" => Ok(Algorithm::Cepstrum),
            other => Err(ExtractionError::InvalidConfig(format!(
                "Unknown algorithm '{}'. Supported algorithms are: fft, autocorrelation, zcr, cepstrum",
                other
            ))),
        }
    }
}

/// Extraction configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Window size in samples (default: 1024)
    ///
    /// Every full window of this many samples yields one frequency estimate;
    /// a trailing partial window is dropped.
    pub samples_per_group: usize,

    /// Frequency estimation algorithm (default: fft)
    pub algorithm: Algorithm,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            samples_per_group: 1024,
            algorithm: Algorithm::Fft,
        }
    }
}

impl ExtractionConfig {
    /// Minimum accepted window size
    ///
    /// The estimators need at least two samples to detect a crossing or a
    /// period.
    pub const MIN_SAMPLES_PER_GROUP: usize = 2;

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` if `samples_per_group` is
    /// below [`Self::MIN_SAMPLES_PER_GROUP`].
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.samples_per_group < Self::MIN_SAMPLES_PER_GROUP {
            return Err(ExtractionError::InvalidConfig(format!(
                "'samples_per_group' must be at least {} to calculate the dominant frequency, got {}",
                Self::MIN_SAMPLES_PER_GROUP,
                self.samples_per_group
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON settings file
    ///
    /// Missing fields fall back to the defaults (`samples_per_group = 1024`,
    /// `algorithm = fft`).
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` if the file cannot be read,
    /// is not valid JSON, names an unknown algorithm, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self, ExtractionError> {
        log::debug!("Loading settings from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: ExtractionConfig = serde_json::from_str(&contents).map_err(|e| {
            ExtractionError::InvalidConfig(format!("cannot parse {}: {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }
}
