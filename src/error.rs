// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the music theory core and MIDI output.

use thiserror::Error;

use crate::music::Note;

/// Errors produced while building or querying tones, notes, scales and chords.
///
/// Interval arithmetic never fails; wrap-around is part of the value model.
/// An inverted range is not an error either and simply yields no notes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    #[error("Unknown tone name: {0:?}")]
    InvalidName(String),

    #[error("Invalid note: {0:?}")]
    InvalidNote(String),

    #[error("Note {note} is not in the scale")]
    OutOfScale { note: Note },

    #[error("Unknown scale type: {0:?}")]
    UnknownScale(String),

    #[error("Unknown chord type: {0:?}")]
    UnknownChord(String),
}

/// Result alias for music theory operations
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Failures reported by MIDI outputs
///
/// Mirrors the lifecycle of a device connection: a port has to exist, be
/// free, and stay connected for sends to succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MidiError {
    #[error("MIDI port not found: {0}")]
    NotFound(String),

    #[error("MIDI output is not connected")]
    Unconnected,

    #[error("MIDI port could not be opened: {0}")]
    Allocated(String),

    #[error("MIDI connection lost: {0}")]
    Disconnected(String),

    #[error("MIDI system error: {0}")]
    System(String),
}
