//! Command-line driver for batch frequency extraction
//!
//! Loads `settings.json`, scans the current directory for supported audio
//! files, lets the user pick one file or all of them, and writes one text
//! file of frequency estimates per input into the `output/` folder. A file
//! that fails to decode or process is reported and skipped; the remaining
//! files are still processed.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use tonetrace::io::{decoder, writer};
use tonetrace::{extract_frequencies, ExtractionConfig, ExtractionError};

const SETTINGS_PATH: &str = "settings.json";
const OUTPUT_FOLDER: &str = "output";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration errors are fatal before any file is touched
    let config = ExtractionConfig::from_file(Path::new(SETTINGS_PATH))?;

    let audio_files = find_audio_files(Path::new("."))?;
    if audio_files.is_empty() {
        return Err("no supported audio files found in the current directory".into());
    }

    let selected = if audio_files.len() == 1 {
        println!(
            "Found only one audio file: {}. Processing automatically.",
            audio_files[0].display()
        );
        audio_files
    } else {
        choose_files(audio_files)?
    };

    fs::create_dir_all(OUTPUT_FOLDER)?;

    for path in &selected {
        // Decode/processing failures are fatal for this file only
        if let Err(e) = process_file(path, &config) {
            eprintln!("Error processing {}: {}", path.display(), e);
        }
    }

    Ok(())
}

/// Decode one file, extract its frequency sequence, and write the output
fn process_file(path: &Path, config: &ExtractionConfig) -> Result<(), ExtractionError> {
    let (samples, sample_rate) = decoder::decode_audio(path)?;
    let frequencies = extract_frequencies(&samples, sample_rate, config)?;

    let base = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let output_path = writer::next_available_path(Path::new(OUTPUT_FOLDER), base);
    writer::write_frequencies(&output_path, config.algorithm, &frequencies)?;

    println!(
        "File '{}' processed. Output: '{}' (Algorithm: {})",
        path.display(),
        output_path.display(),
        config.algorithm
    );
    Ok(())
}

/// List supported audio files in `dir`, sorted by name
fn find_audio_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                decoder::SUPPORTED_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false);
        if supported {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Interactively choose one file by number, or all files with 'A'
fn choose_files(files: Vec<PathBuf>) -> io::Result<Vec<PathBuf>> {
    println!("Audio files found in the current directory:");
    for (idx, path) in files.iter().enumerate() {
        println!("  [{}] {}", idx, path.display());
    }
    println!("Choose a file by number, or 'A' to process all files.");

    let stdin = io::stdin();
    loop {
        print!("Your choice: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF on stdin: treat like choosing all files
            return Ok(files);
        }
        let choice = line.trim();

        if choice.eq_ignore_ascii_case("a") {
            return Ok(files);
        }
        if let Ok(idx) = choice.parse::<usize>() {
            if idx < files.len() {
                return Ok(vec![files[idx].clone()]);
            }
        }
        println!("Invalid input. Please enter a valid number or 'A'.");
    }
}
