// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes.
//!
//! A [`Tone`] is a note name independent of its octave: 440Hz and 220Hz
//! are both "A". Following MIDI conventions tone 0 is C and tone 11 is B.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// Signed semitone offset
pub type Semitones = i8;

/// One of the 12 chromatic pitch classes, stored as an index in `0..12`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tone(u8);

impl Tone {
    /// Canonical tone names, indexed by pitch class
    pub const NAMES: [&'static str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    /// Returned by [`Tone::position_of`] when a name is not in [`Tone::NAMES`]
    pub const NOT_FOUND: u8 = 12;

    pub const C: Tone = Tone(0);
    pub const CS: Tone = Tone(1);
    pub const D: Tone = Tone(2);
    pub const DS: Tone = Tone(3);
    pub const E: Tone = Tone(4);
    pub const F: Tone = Tone(5);
    pub const FS: Tone = Tone(6);
    pub const G: Tone = Tone(7);
    pub const GS: Tone = Tone(8);
    pub const A: Tone = Tone(9);
    pub const AS: Tone = Tone(10);
    pub const B: Tone = Tone(11);

    /// All tones in chromatic order
    pub const ALL: [Tone; 12] = [
        Tone::C,
        Tone::CS,
        Tone::D,
        Tone::DS,
        Tone::E,
        Tone::F,
        Tone::FS,
        Tone::G,
        Tone::GS,
        Tone::A,
        Tone::AS,
        Tone::B,
    ];

    /// Create a tone from a pitch class, wrapping modulo 12
    pub const fn new(index: u8) -> Self {
        Tone(index % 12)
    }

    /// Create a tone from any integer. Negative values count down from C,
    /// so `-1` is B.
    pub fn from_index(index: i32) -> Self {
        Tone(index.rem_euclid(12) as u8)
    }

    /// Index of a canonical name in [`Tone::NAMES`], or [`Tone::NOT_FOUND`]
    pub fn position_of(name: &str) -> u8 {
        Tone::NAMES
            .iter()
            .position(|&n| n == name)
            .map_or(Tone::NOT_FOUND, |i| i as u8)
    }

    /// Look up a canonical name ("C", "C#", ... "B")
    pub fn from_name(name: &str) -> Result<Self> {
        match Tone::position_of(name) {
            Tone::NOT_FOUND => Err(TheoryError::InvalidName(name.to_string())),
            index => Ok(Tone(index)),
        }
    }

    /// Parse a tone written the way people type it ("db", " F# ", "Bb", "Cs")
    pub fn parse_lenient(s: &str) -> Result<Self> {
        let upper = s.trim().to_uppercase();
        let index = match upper.as_str() {
            "C" | "B#" | "BS" => 0,
            "C#" | "CS" | "DB" => 1,
            "D" => 2,
            "D#" | "DS" | "EB" => 3,
            "E" | "FB" => 4,
            "F" | "E#" | "ES" => 5,
            "F#" | "FS" | "GB" => 6,
            "G" => 7,
            "G#" | "GS" | "AB" => 8,
            "A" => 9,
            "A#" | "AS" | "BB" => 10,
            "B" | "CB" => 11,
            _ => return Err(TheoryError::InvalidName(s.to_string())),
        };
        Ok(Tone(index))
    }

    /// Pitch class (0-11)
    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        Tone::NAMES[(self.0 % 12) as usize]
    }

    /// Transpose by a signed number of semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        Tone::from_index(self.0 as i32 + semitones as i32)
    }

    /// Steps needed to go from `other` up to `self` (always 0-11).
    ///
    /// `C.distance_from(B) == 1`, `B.distance_from(C) == 11`.
    pub fn distance_from(self, other: Tone) -> u8 {
        (12 + self.0 - other.0) % 12
    }

    /// MIDI note number of this tone in `octave`, where octave 0 starts at
    /// note 0. Octaves past the top of the MIDI range wrap around.
    pub fn midi(self, octave: u8) -> u8 {
        ((self.0 as u16 + octave as u16 * 12) % 0x80) as u8
    }
}

impl Add<u8> for Tone {
    type Output = Tone;

    fn add(self, interval: u8) -> Tone {
        Tone(((self.0 as u16 + interval as u16) % 12) as u8)
    }
}

impl AddAssign<u8> for Tone {
    fn add_assign(&mut self, interval: u8) {
        *self = *self + interval;
    }
}

impl Sub<u8> for Tone {
    type Output = Tone;

    fn sub(self, interval: u8) -> Tone {
        Tone((self.0 + 12 - interval % 12) % 12)
    }
}

impl SubAssign<u8> for Tone {
    fn sub_assign(&mut self, interval: u8) {
        *self = *self - interval;
    }
}

/// Upward interval from `other` to `self`, see [`Tone::distance_from`]
impl Sub<Tone> for Tone {
    type Output = u8;

    fn sub(self, other: Tone) -> u8 {
        self.distance_from(other)
    }
}

impl From<u8> for Tone {
    fn from(index: u8) -> Self {
        Tone::new(index)
    }
}

impl FromStr for Tone {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Tone::from_name(s)
    }
}

impl TryFrom<String> for Tone {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self> {
        Tone::parse_lenient(&s)
    }
}

impl From<Tone> for String {
    fn from(tone: Tone) -> Self {
        tone.name().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
