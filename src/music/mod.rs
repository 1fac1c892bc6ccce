// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory values.
//!
//! Tones (pitch classes), notes (MIDI pitches), scales and chords. Every
//! type here is a plain value with no I/O and no shared state.

pub mod chord;
pub mod note;
pub mod scale;
pub mod tone;

pub use chord::{Chord, ChordType};
pub use note::{MidiNote, Note};
pub use scale::{Scale, ScaleRange, ScaleType};
pub use tone::{Semitones, Tone};
