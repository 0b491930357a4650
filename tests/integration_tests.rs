//! Integration tests for the frequency extraction engine

use std::path::PathBuf;

use tonetrace::io::{decoder, writer};
use tonetrace::{extract_frequencies, Algorithm, ExtractionConfig, ExtractionError};

/// Generate a pure sine wave
fn sine(frequency: f32, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (i as f32 * frequency * 2.0 * std::f32::consts::PI / sample_rate as f32).sin())
        .collect()
}

fn config(samples_per_group: usize, algorithm: Algorithm) -> ExtractionConfig {
    ExtractionConfig {
        samples_per_group,
        algorithm,
    }
}

/// Unique scratch path under the system temp directory
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tonetrace_test_{}_{}", std::process::id(), name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_is_full_window_count() {
        let samples = sine(440.0, 44100, 10_000);
        for algorithm in Algorithm::ALL {
            let frequencies =
                extract_frequencies(&samples, 44100, &config(1024, algorithm)).unwrap();
            assert_eq!(
                frequencies.len(),
                10_000 / 1024,
                "{}: expected floor(10000/1024) estimates",
                algorithm
            );
        }
    }

    #[test]
    fn test_fft_single_window_end_to_end() {
        // 300 samples of a 1000 Hz sine at 44.1 kHz, one 300-sample window:
        // the estimate must land within one FFT bin width (147 Hz) of 1000 Hz
        let samples = sine(1000.0, 44100, 300);
        let frequencies =
            extract_frequencies(&samples, 44100, &config(300, Algorithm::Fft)).unwrap();

        assert_eq!(frequencies.len(), 1);
        let bin_width = 44100.0 / 300.0;
        assert!(
            (frequencies[0] - 1000.0).abs() <= bin_width,
            "Expected 1000 Hz within {:.0} Hz, got {:.1}",
            bin_width,
            frequencies[0]
        );
    }

    #[test]
    fn test_partial_window_dropped_without_error() {
        let samples = sine(1000.0, 44100, 250);
        let frequencies =
            extract_frequencies(&samples, 44100, &config(300, Algorithm::Fft)).unwrap();
        assert!(
            frequencies.is_empty(),
            "A 250-sample buffer with 300-sample windows yields no estimates"
        );
    }

    #[test]
    fn test_pure_tone_accuracy_every_window() {
        // 300 Hz at 48 kHz, 480-sample windows: exactly 3 periods per window,
        // so every window of every estimator must land within one bin width.
        // For the cepstrum the 160-sample period also keeps the first
        // rahmonic (lag 320) outside the N/2 search bound.
        let samples = sine(300.0, 48000, 4800);
        let bin_width = 48000.0 / 480.0;

        for algorithm in Algorithm::ALL {
            let frequencies =
                extract_frequencies(&samples, 48000, &config(480, algorithm)).unwrap();
            assert_eq!(frequencies.len(), 10);
            for (i, freq) in frequencies.iter().enumerate() {
                assert!(
                    (freq - 300.0).abs() <= bin_width,
                    "{}: window {} expected ~300 Hz within {:.0} Hz, got {:.1}",
                    algorithm,
                    i,
                    bin_width,
                    freq
                );
            }
        }
    }

    #[test]
    fn test_cepstrum_accuracy_on_harmonic_tone() {
        // Cepstral detection keys on harmonic structure, so feed it a
        // fundamental plus overtones (all periodic at 160 samples)
        let f0 = 300.0;
        let samples: Vec<f32> = sine(f0, 48000, 4800)
            .iter()
            .zip(&sine(3.0 * f0, 48000, 4800))
            .zip(&sine(5.0 * f0, 48000, 4800))
            .map(|((a, b), c)| a + 0.5 * b + 0.25 * c)
            .collect();

        let frequencies =
            extract_frequencies(&samples, 48000, &config(480, Algorithm::Cepstrum)).unwrap();
        assert_eq!(frequencies.len(), 10);
        let bin_width = 48000.0 / 480.0;
        for (i, freq) in frequencies.iter().enumerate() {
            assert!(
                (freq - f0).abs() <= bin_width,
                "cepstrum: window {} expected ~{:.0} Hz within {:.0} Hz, got {:.1}",
                i,
                f0,
                bin_width,
                freq
            );
        }
    }

    #[test]
    fn test_silent_buffer_yields_zero_sentinels() {
        let samples = vec![0.0f32; 4096];
        for algorithm in Algorithm::ALL {
            let frequencies =
                extract_frequencies(&samples, 44100, &config(512, algorithm)).unwrap();
            assert_eq!(frequencies.len(), 8);
            assert!(
                frequencies.iter().all(|&f| f == 0.0),
                "{}: silence must produce exactly 0.0 for every window",
                algorithm
            );
        }
    }

    #[test]
    fn test_repeated_runs_are_bit_identical() {
        let samples = sine(523.25, 44100, 8192);
        for algorithm in Algorithm::ALL {
            let first = extract_frequencies(&samples, 44100, &config(1024, algorithm)).unwrap();
            let second = extract_frequencies(&samples, 44100, &config(1024, algorithm)).unwrap();
            let identical = first
                .iter()
                .zip(&second)
                .all(|(a, b)| a.to_bits() == b.to_bits());
            assert!(identical, "{}: runs must be bit-identical", algorithm);
        }
    }

    #[test]
    fn test_window_size_one_rejected_before_processing() {
        let samples = sine(440.0, 44100, 4096);
        let result = extract_frequencies(&samples, 44100, &config(1, Algorithm::Fft));
        assert!(
            matches!(result, Err(ExtractionError::InvalidConfig(_))),
            "samples_per_group=1 must fail with a configuration error"
        );
    }

    #[test]
    fn test_window_size_two_accepted() {
        let samples = sine(440.0, 44100, 10);
        let frequencies =
            extract_frequencies(&samples, 44100, &config(2, Algorithm::Zcr)).unwrap();
        assert_eq!(frequencies.len(), 5);
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let samples = sine(440.0, 44100, 1024);
        let result = extract_frequencies(&samples, 0, &config(512, Algorithm::Fft));
        assert!(matches!(result, Err(ExtractionError::InvalidInput(_))));
    }

    #[test]
    fn test_wav_roundtrip_through_decoder() {
        let path = temp_path("roundtrip.wav");
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        // Identical 1 kHz tone on both channels
        let tone = sine(1000.0, 44100, 4410);
        let mut wav = hound::WavWriter::create(&path, spec).unwrap();
        for &sample in &tone {
            let value = (sample * 0.8 * i16::MAX as f32) as i16;
            wav.write_sample(value).unwrap();
            wav.write_sample(value).unwrap();
        }
        wav.finalize().unwrap();

        let (samples, sample_rate) = decoder::decode_audio(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(sample_rate, 44100);
        assert_eq!(samples.len(), 4410, "Stereo frames reduce to mono samples");

        let frequencies =
            extract_frequencies(&samples, sample_rate, &config(441, Algorithm::Fft)).unwrap();
        assert_eq!(frequencies.len(), 10);
        let bin_width = 44100.0 / 441.0;
        for freq in &frequencies {
            assert!(
                (freq - 1000.0).abs() <= bin_width,
                "Decoded tone should still read ~1000 Hz, got {:.1}",
                freq
            );
        }
    }

    #[test]
    fn test_corrupt_file_yields_decoding_error() {
        let path = temp_path("corrupt.wav");
        std::fs::write(&path, b"definitely not a wav file").unwrap();

        let result = decoder::decode_audio(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ExtractionError::DecodingError(_))));
    }

    #[test]
    fn test_writer_output_format() {
        let path = temp_path("format.txt");
        writer::write_frequencies(&path, Algorithm::Cepstrum, &[440.0, 0.0, 1234.567]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# Algorithm used: cepstrum");
        assert_eq!(lines[1], "440.00");
        assert_eq!(lines[2], "0.00");
        assert_eq!(lines[3], "1234.57");
    }

    #[test]
    fn test_output_paths_never_collide() {
        let folder = temp_path("outdir");
        std::fs::create_dir_all(&folder).unwrap();

        let first = writer::next_available_path(&folder, "track");
        assert_eq!(first, folder.join("track.txt"));
        std::fs::write(&first, "x").unwrap();

        let second = writer::next_available_path(&folder, "track");
        assert_eq!(second, folder.join("track1.txt"));

        std::fs::remove_dir_all(&folder).ok();
    }

    #[test]
    fn test_settings_file_loading() {
        let path = temp_path("settings.json");

        std::fs::write(&path, r#"{"samples_per_group": 300, "algorithm": "zcr"}"#).unwrap();
        let config = ExtractionConfig::from_file(&path).unwrap();
        assert_eq!(config.samples_per_group, 300);
        assert_eq!(config.algorithm, Algorithm::Zcr);

        std::fs::write(&path, r#"{"algorithm": "wavelet"}"#).unwrap();
        assert!(matches!(
            ExtractionConfig::from_file(&path),
            Err(ExtractionError::InvalidConfig(_))
        ));

        std::fs::write(&path, r#"{"samples_per_group": 1}"#).unwrap();
        assert!(matches!(
            ExtractionConfig::from_file(&path),
            Err(ExtractionError::InvalidConfig(_))
        ));

        std::fs::remove_file(&path).ok();
        assert!(
            ExtractionConfig::from_file(&path).is_err(),
            "A missing settings file is a configuration error"
        );
    }
}
