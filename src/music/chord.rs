// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chords built from a root note and interval offsets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::note::Note;
use crate::error::{Result, TheoryError};

/// Chord qualities with built-in interval tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Major7,
    Minor7,
    Dominant7,
    Diminished7,
}

impl ChordType {
    /// Semitones above the root, root excluded
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[4, 7],
            ChordType::Minor => &[3, 7],
            ChordType::Diminished => &[3, 6],
            ChordType::Augmented => &[4, 8],
            ChordType::Sus2 => &[2, 7],
            ChordType::Sus4 => &[5, 7],
            ChordType::Major7 => &[4, 7, 11],
            ChordType::Minor7 => &[3, 7, 10],
            ChordType::Dominant7 => &[4, 7, 10],
            ChordType::Diminished7 => &[3, 6, 9],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Sus2 => "Sus2",
            ChordType::Sus4 => "Sus4",
            ChordType::Major7 => "Major 7th",
            ChordType::Minor7 => "Minor 7th",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Diminished7 => "Diminished 7th",
        }
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match key.as_str() {
            "major" | "maj" => Ok(ChordType::Major),
            "minor" | "min" | "m" => Ok(ChordType::Minor),
            "diminished" | "dim" => Ok(ChordType::Diminished),
            "augmented" | "aug" => Ok(ChordType::Augmented),
            "sus2" => Ok(ChordType::Sus2),
            "sus4" | "sus" => Ok(ChordType::Sus4),
            "major7" | "maj7" => Ok(ChordType::Major7),
            "minor7" | "min7" | "m7" => Ok(ChordType::Minor7),
            "dominant7" | "dom7" | "7" => Ok(ChordType::Dominant7),
            "diminished7" | "dim7" => Ok(ChordType::Diminished7),
            _ => Err(TheoryError::UnknownChord(s.to_string())),
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Notes of a chord, root first, in the order their intervals were given
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    /// Root followed by `root + d` for each degree. Nothing is sorted or
    /// deduplicated, and notes past the top of the MIDI range wrap.
    pub fn new(root: Note, degrees: &[u8]) -> Self {
        let mut notes = Vec::with_capacity(degrees.len() + 1);
        notes.push(root);
        notes.extend(degrees.iter().map(|&d| root + d));
        Self { notes }
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn of(root: Note, chord_type: ChordType) -> Self {
        Self::new(root, chord_type.intervals())
    }

    pub fn major_triad(root: Note) -> Self {
        Self::of(root, ChordType::Major)
    }

    pub fn minor_triad(root: Note) -> Self {
        Self::of(root, ChordType::Minor)
    }

    pub fn diminished_triad(root: Note) -> Self {
        Self::of(root, ChordType::Diminished)
    }

    pub fn augmented_triad(root: Note) -> Self {
        Self::of(root, ChordType::Augmented)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// First note, `None` only for a chord built from no notes
    pub fn root(&self) -> Option<Note> {
        self.notes.first().copied()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Note>> {
        self.notes.iter().copied()
    }
}

impl IntoIterator for Chord {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = Note;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Note>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(chord: &Chord) -> Vec<u8> {
        chord.iter().map(u8::from).collect()
    }

    #[test]
    fn test_triads() {
        let c4 = Note::MIDDLE_C;
        assert_eq!(values(&Chord::major_triad(c4)), vec![60, 64, 67]);
        assert_eq!(values(&Chord::minor_triad(c4)), vec![60, 63, 67]);
        assert_eq!(values(&Chord::diminished_triad(c4)), vec![60, 63, 66]);
        assert_eq!(values(&Chord::augmented_triad(c4)), vec![60, 64, 68]);
    }

    #[test]
    fn test_degrees_keep_given_order() {
        let chord = Chord::new(Note::new(60), &[7, 4, 4]);
        assert_eq!(values(&chord), vec![60, 67, 64, 64]);
        assert_eq!(chord.root(), Some(Note::new(60)));
    }

    #[test]
    fn test_wraps_at_top() {
        let chord = Chord::major_triad(Note::new(124));
        assert_eq!(values(&chord), vec![124, 0, 3]);
    }

    #[test]
    fn test_iteration() {
        let chord = Chord::of(Note::new(57), ChordType::Minor7);
        let mut seen = Vec::new();
        for note in &chord {
            seen.push(note.value());
        }
        assert_eq!(seen, vec![57, 60, 64, 67]);
        assert_eq!(chord.len(), 4);

        let owned: Vec<Note> = chord.into_iter().collect();
        assert_eq!(owned.len(), 4);
    }

    #[test]
    fn test_empty_chord() {
        let chord = Chord::from_notes(Vec::new());
        assert!(chord.is_empty());
        assert_eq!(chord.root(), None);
    }

    #[test]
    fn test_chord_type_from_str() {
        assert_eq!("maj".parse::<ChordType>(), Ok(ChordType::Major));
        assert_eq!("Dim".parse::<ChordType>(), Ok(ChordType::Diminished));
        assert_eq!("dominant-7".parse::<ChordType>(), Ok(ChordType::Dominant7));
        assert!(matches!(
            "nine".parse::<ChordType>(),
            Err(TheoryError::UnknownChord(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Chord::major_triad(Note::MIDDLE_C).to_string(), "C4 E4 G4");
    }
}
