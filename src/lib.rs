// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tones, notes, scales and chords, with MIDI note output.
//!
//! ```
//! use tonekit::music::{Chord, Note, Scale, Tone};
//!
//! let c_major = Scale::major(Tone::C);
//! let notes = c_major.range(Note::new(60), Note::new(72)).unwrap();
//! assert_eq!(notes.len(), 8);
//!
//! let triad: Vec<u8> = Chord::major_triad(Note::MIDDLE_C).iter().map(u8::from).collect();
//! assert_eq!(triad, [60, 64, 67]);
//! ```

pub mod config;
pub mod error;
pub mod midi;
pub mod music;

pub use error::{MidiError, TheoryError};
