// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Absolute pitches in the MIDI note range.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::tone::{Semitones, Tone};
use crate::error::{Result, TheoryError};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

const RANGE: u16 = 0x80;

/// A concrete pitch: a [`Tone`] plus an octave, stored as a MIDI note number.
///
/// Interval arithmetic wraps at both ends of the MIDI range, so `Note(127) + 1`
/// is `Note(0)` and `Note(0) - 1` is `Note(127)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Note(MidiNote);

impl Note {
    /// Middle C (C4)
    pub const MIDDLE_C: Note = Note(60);

    /// Create a note from a raw MIDI number, masked to 7 bits
    pub const fn new(value: u8) -> Self {
        Note(value & 0x7F)
    }

    /// Create a note from a tone and a raw octave (octave 0 starts at note 0)
    pub fn from_tone(tone: Tone, octave: u8) -> Self {
        Note(tone.midi(octave))
    }

    /// Create a note from a canonical tone name and a raw octave
    pub fn from_name(tone: &str, octave: u8) -> Result<Self> {
        Ok(Note::from_tone(Tone::from_name(tone)?, octave))
    }

    /// Raw MIDI note number
    pub const fn value(self) -> MidiNote {
        self.0
    }

    pub fn tone(self) -> Tone {
        Tone::new(self.0)
    }

    /// Raw octave, `value / 12`. Printed names use this minus one.
    pub const fn octave(self) -> u8 {
        self.0 / 12
    }

    /// Name in scientific pitch notation, e.g. "C4" for note 60
    pub fn name(self) -> String {
        format!("{}{}", self.tone().name(), self.octave() as i16 - 1)
    }

    /// Transpose by a signed number of semitones, wrapping at both ends of
    /// the MIDI range
    pub fn transpose(self, semitones: Semitones) -> Self {
        Note((self.0 as i16 + semitones as i16).rem_euclid(RANGE as i16) as u8)
    }

    /// Cyclic inclusive test of this note's tone against a tone window.
    ///
    /// When `end < start` the window wraps through C and only tones in
    /// `(end, start]` match. A window with `start == end` matches exactly
    /// that tone.
    pub fn is_between(self, start: Tone, end: Tone) -> bool {
        let tone = self.tone();
        if end < start {
            return end < tone && tone <= start;
        }
        start <= tone && tone <= end
    }
}

impl Add<u8> for Note {
    type Output = Note;

    fn add(self, interval: u8) -> Note {
        Note(((self.0 as u16 + interval as u16) % RANGE) as u8)
    }
}

impl AddAssign<u8> for Note {
    fn add_assign(&mut self, interval: u8) {
        *self = *self + interval;
    }
}

impl Sub<u8> for Note {
    type Output = Note;

    fn sub(self, interval: u8) -> Note {
        Note(((self.0 as u16 + RANGE - interval as u16 % RANGE) % RANGE) as u8)
    }
}

impl SubAssign<u8> for Note {
    fn sub_assign(&mut self, interval: u8) {
        *self = *self - interval;
    }
}

/// Signed distance in semitones
impl Sub<Note> for Note {
    type Output = i16;

    fn sub(self, other: Note) -> i16 {
        self.0 as i16 - other.0 as i16
    }
}

impl From<u8> for Note {
    fn from(value: u8) -> Self {
        Note::new(value)
    }
}

impl From<Note> for u8 {
    fn from(note: Note) -> Self {
        note.0
    }
}

/// Parses scientific pitch notation ("C4", "F#2", "Bb-1")
impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TheoryError::InvalidNote(s.to_string());
        let s = s.trim();

        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_ascii_digit() || c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;
        let (tone, octave) = s.split_at(split);

        let tone = Tone::parse_lenient(tone)?;
        let printed: i16 = octave.parse().map_err(|_| invalid())?;
        if !(-1..=9).contains(&printed) {
            return Err(invalid());
        }
        let value = (printed + 1) * 12 + tone.index() as i16;
        if !(0..RANGE as i16).contains(&value) {
            return Err(invalid());
        }
        Ok(Note(value as u8))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tone(), self.octave() as i16 - 1)
    }
}
