// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-on / note-off channel messages.

use super::messages;
use crate::music::Note;

/// A note message ready to go on the wire.
///
/// Channel is 0-15, velocity 0-127. Constructors mask out-of-range values
/// instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiMessage {
    NoteOn { channel: u8, note: Note, velocity: u8 },
    NoteOff { channel: u8, note: Note, velocity: u8 },
}

impl MidiMessage {
    pub fn note_on(channel: u8, note: Note, velocity: u8) -> Self {
        MidiMessage::NoteOn {
            channel: channel & 0x0F,
            note,
            velocity: velocity & 0x7F,
        }
    }

    pub fn note_off(channel: u8, note: Note, velocity: u8) -> Self {
        MidiMessage::NoteOff {
            channel: channel & 0x0F,
            note,
            velocity: velocity & 0x7F,
        }
    }

    /// Parse raw MIDI bytes. Anything other than a complete note message
    /// yields `None`.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 3 {
            return None;
        }

        let status = data[0];
        let msg_type = status & 0xF0;
        let channel = status & 0x0F;
        let note = Note::new(data[1]);
        let velocity = data[2] & 0x7F;

        match msg_type {
            messages::NOTE_OFF => Some(MidiMessage::note_off(channel, note, velocity)),
            // Note On with velocity 0 is equivalent to Note Off
            messages::NOTE_ON if velocity == 0 => Some(MidiMessage::note_off(channel, note, 0)),
            messages::NOTE_ON => Some(MidiMessage::note_on(channel, note, velocity)),
            _ => None,
        }
    }

    /// Status byte, note number and velocity
    pub fn to_bytes(self) -> [u8; 3] {
        let (status, channel, note, velocity) = match self {
            MidiMessage::NoteOn { channel, note, velocity } => {
                (messages::NOTE_ON, channel, note, velocity)
            }
            MidiMessage::NoteOff { channel, note, velocity } => {
                (messages::NOTE_OFF, channel, note, velocity)
            }
        };
        [status | (channel & 0x0F), note.value() & 0x7F, velocity & 0x7F]
    }

    pub fn channel(self) -> u8 {
        match self {
            MidiMessage::NoteOn { channel, .. } | MidiMessage::NoteOff { channel, .. } => channel,
        }
    }

    pub fn note(self) -> Note {
        match self {
            MidiMessage::NoteOn { note, .. } | MidiMessage::NoteOff { note, .. } => note,
        }
    }

    pub fn velocity(self) -> u8 {
        match self {
            MidiMessage::NoteOn { velocity, .. } | MidiMessage::NoteOff { velocity, .. } => velocity,
        }
    }
}
