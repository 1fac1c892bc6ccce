// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definitions and scale-constrained note ranges.
//!
//! A [`Scale`] is an ascending run of tones starting at its root. Indexing
//! is cyclic, which models the scale continuing into the next octave, and
//! [`Scale::range`] walks that cycle to list every note of the scale
//! between two concrete notes.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Index;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::note::Note;
use super::tone::Tone;
use crate::error::{Result, TheoryError};

/// Degrees at or above this are outside the octave and end scale construction
const OCTAVE: u8 = 12;

/// Scale types with built-in degree tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    // Major scale and modes
    Major,      // Ionian
    Dorian,     // Minor with raised 6th
    Phrygian,   // Minor with lowered 2nd
    Lydian,     // Major with raised 4th
    Mixolydian, // Major with lowered 7th
    Minor,      // Aeolian
    Locrian,    // Diminished

    // Other minor scales
    HarmonicMinor,
    MelodicMinor, // Ascending form

    // Pentatonic scales
    MajorPentatonic,
    MinorPentatonic,

    Blues,
    WholeTone,
    Chromatic,
}

impl ScaleType {
    /// Every built-in scale type
    pub const ALL: [ScaleType; 14] = [
        ScaleType::Major,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Minor,
        ScaleType::Locrian,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Blues,
        ScaleType::WholeTone,
        ScaleType::Chromatic,
    ];

    /// Degrees (semitones from root) for this scale type
    pub fn degrees(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],

            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],

            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],

            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
            ScaleType::WholeTone => &[0, 2, 4, 6, 8, 10],
            ScaleType::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Minor => "Minor",
            ScaleType::Locrian => "Locrian",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
            ScaleType::Blues => "Blues",
            ScaleType::WholeTone => "Whole Tone",
            ScaleType::Chromatic => "Chromatic",
        }
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match key.as_str() {
            "major" | "ionian" => Ok(ScaleType::Major),
            "dorian" => Ok(ScaleType::Dorian),
            "phrygian" => Ok(ScaleType::Phrygian),
            "lydian" => Ok(ScaleType::Lydian),
            "mixolydian" => Ok(ScaleType::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Ok(ScaleType::Minor),
            "locrian" => Ok(ScaleType::Locrian),
            "harmonicminor" => Ok(ScaleType::HarmonicMinor),
            "melodicminor" => Ok(ScaleType::MelodicMinor),
            "majorpentatonic" | "pentatonic" => Ok(ScaleType::MajorPentatonic),
            "minorpentatonic" => Ok(ScaleType::MinorPentatonic),
            "blues" => Ok(ScaleType::Blues),
            "wholetone" => Ok(ScaleType::WholeTone),
            "chromatic" => Ok(ScaleType::Chromatic),
            _ => Err(TheoryError::UnknownScale(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ascending, duplicate-free sequence of tones whose first element is
/// the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    tones: Vec<Tone>,
}

impl Scale {
    /// Build a scale from a root and its degrees (semitones above the root).
    ///
    /// Degrees must be given in ascending order. A degree that is not above
    /// the previously accepted one is skipped, and the first degree above 12
    /// ends construction. The root is always the first tone, so a leading 0
    /// is optional.
    pub fn new(root: Tone, degrees: &[u8]) -> Self {
        let mut tones = vec![root];
        let mut last = 0;

        for &degree in degrees {
            if degree == OCTAVE {
                trace!(degree, "octave repeats the root, ignoring the rest");
                break;
            }
            if degree > OCTAVE {
                debug!(degree, "scale degree above an octave, ignoring the rest");
                break;
            }
            if degree > last {
                tones.push(root + degree);
                last = degree;
            } else if degree != 0 {
                trace!(degree, last, "skipping out-of-order scale degree");
            }
        }

        Self { tones }
    }

    /// Build a scale from explicit tones. The first tone is the root and
    /// every later tone must sit higher above it than the one before.
    /// An empty slice gives the chromatic scale.
    pub fn from_tones(tones: &[Tone]) -> Self {
        let Some(&root) = tones.first() else {
            return Self::default();
        };

        let mut degrees = Vec::with_capacity(tones.len());
        let mut last = 0;
        for &tone in tones {
            let degree = tone.distance_from(root);
            if degree > last {
                degrees.push(degree);
                last = degree;
            }
        }

        Self::new(root, &degrees)
    }

    /// Build a scale from a built-in scale type
    pub fn of(root: Tone, scale_type: ScaleType) -> Self {
        Self::new(root, scale_type.degrees())
    }

    /// Parse a scale from strings (e.g., "Eb", "dorian")
    pub fn parse(root: &str, scale_type: &str) -> Result<Self> {
        let root = Tone::parse_lenient(root)?;
        let scale_type: ScaleType = scale_type.parse()?;
        Ok(Self::of(root, scale_type))
    }

    pub fn ionian(root: Tone) -> Self {
        Self::of(root, ScaleType::Major)
    }

    pub fn dorian(root: Tone) -> Self {
        Self::of(root, ScaleType::Dorian)
    }

    pub fn phrygian(root: Tone) -> Self {
        Self::of(root, ScaleType::Phrygian)
    }

    pub fn lydian(root: Tone) -> Self {
        Self::of(root, ScaleType::Lydian)
    }

    pub fn mixolydian(root: Tone) -> Self {
        Self::of(root, ScaleType::Mixolydian)
    }

    pub fn aeolian(root: Tone) -> Self {
        Self::of(root, ScaleType::Minor)
    }

    pub fn locrian(root: Tone) -> Self {
        Self::of(root, ScaleType::Locrian)
    }

    pub fn major(root: Tone) -> Self {
        Self::ionian(root)
    }

    pub fn minor(root: Tone) -> Self {
        Self::aeolian(root)
    }

    pub fn tones(&self) -> &[Tone] {
        &self.tones
    }

    pub fn root(&self) -> Tone {
        self.tones[0]
    }

    /// Number of tones in one octave of this scale
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// A scale always holds at least its root
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    /// Tone at a cyclic index: `get(len())` is the root again
    pub fn get(&self, index: usize) -> Tone {
        self.tones[index % self.tones.len()]
    }

    /// Degrees (semitones above the root) of every tone
    pub fn degrees(&self) -> Vec<u8> {
        let root = self.root();
        self.tones.iter().map(|t| t.distance_from(root)).collect()
    }

    pub fn contains(&self, tone: Tone) -> bool {
        self.tones.contains(&tone)
    }

    /// Index of `tone` within one octave of the scale
    pub fn position(&self, tone: Tone) -> Option<usize> {
        self.tones.iter().position(|&t| t == tone)
    }

    /// Every note of this scale from `first` to `last`, both inclusive.
    ///
    /// Returns an empty list when `last` is below `first`, and
    /// [`TheoryError::OutOfScale`] when either endpoint is not a scale tone.
    pub fn range(&self, first: Note, last: Note) -> Result<Vec<Note>> {
        Ok(self.range_iter(first, last)?.collect())
    }

    /// Lazy form of [`Scale::range`]
    pub fn range_iter(&self, first: Note, last: Note) -> Result<ScaleRange<'_>> {
        if last < first {
            return Ok(ScaleRange {
                scale: self,
                next: 0,
                end: 0,
            });
        }

        let start = self.absolute_index(first)?;
        let stop = self.absolute_index(last)?;
        trace!(%first, %last, steps = stop - start + 1, "scale range");

        Ok(ScaleRange {
            scale: self,
            next: start,
            end: stop + 1,
        })
    }

    /// Position of `note` on the endless scale: laps above the root times
    /// the scale length, plus the index within the lap. Laps start at the
    /// root rather than at C.
    fn absolute_index(&self, note: Note) -> Result<i32> {
        let pos = self
            .tones
            .iter()
            .position(|&t| note.is_between(t, t))
            .ok_or(TheoryError::OutOfScale { note })?;
        let lap = (note.value() as i32 - self.root().index() as i32).div_euclid(12);
        Ok(lap * self.len() as i32 + pos as i32)
    }

    /// Inverse of [`Scale::absolute_index`]
    fn note_at(&self, index: i32) -> Note {
        let len = self.len() as i32;
        let tone = self.tones[index.rem_euclid(len) as usize];
        let value = self.root().index() as i32
            + index.div_euclid(len) * 12
            + tone.distance_from(self.root()) as i32;
        Note::new(value as u8)
    }
}

/// The chromatic scale on C
impl Default for Scale {
    fn default() -> Self {
        Self::of(Tone::C, ScaleType::Chromatic)
    }
}

/// Cyclic: `scale[i]` is `scale[i % scale.len()]`
impl Index<usize> for Scale {
    type Output = Tone;

    fn index(&self, index: usize) -> &Tone {
        &self.tones[index % self.tones.len()]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tone) in self.tones.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tone)?;
        }
        Ok(())
    }
}

/// Ascending notes of a scale between two endpoints, see [`Scale::range_iter`]
#[derive(Debug, Clone)]
pub struct ScaleRange<'a> {
    scale: &'a Scale,
    next: i32,
    end: i32,
}

impl Iterator for ScaleRange<'_> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        if self.next >= self.end {
            return None;
        }
        let note = self.scale.note_at(self.next);
        self.next += 1;
        Some(note)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScaleRange<'_> {}

impl FusedIterator for ScaleRange<'_> {}
