// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! MIDI output for notes.
//!
//! The music types know nothing about MIDI beyond note numbers. This module
//! turns them into note-on/note-off messages and hands the bytes to a
//! [`MidiOutput`], which may be a real device (with the `device` feature)
//! or anything else that accepts raw MIDI.

#[cfg(feature = "device")]
pub mod device;
pub mod message;
pub mod out;

#[cfg(feature = "device")]
pub use device::{DeviceOutput, PortInfo};
pub use message::MidiMessage;
pub use out::{NoteOut, DEFAULT_VELOCITY};

pub use crate::error::MidiError;

/// Something that accepts raw MIDI messages.
pub trait MidiOutput {
    /// Send a MIDI message immediately.
    ///
    /// # Arguments
    /// * `message` - Raw MIDI bytes (e.g., `[0x90, 60, 127]` for Note On)
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError>;
}

impl<O: MidiOutput + ?Sized> MidiOutput for Box<O> {
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
        (**self).send(message)
    }
}

/// MIDI message constants
pub mod messages {
    // Channel Voice Messages (upper nibble, lower nibble is channel 0-15)
    pub const NOTE_OFF: u8 = 0x80;
    pub const NOTE_ON: u8 = 0x90;
}
