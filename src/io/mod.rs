//! Audio and text file I/O
//!
//! Decoding of audio files to mono sample buffers and plain-text output of
//! frequency sequences.

pub mod decoder;
pub mod writer;
