// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note sender with a default channel and velocity.

use tracing::debug;

use super::{MidiMessage, MidiOutput};
use crate::error::MidiError;
use crate::music::Note;

/// Velocity used when a caller doesn't give one
pub const DEFAULT_VELOCITY: u8 = 120;

/// Sends note-on/note-off messages for [`Note`]s over any [`MidiOutput`].
pub struct NoteOut<O: MidiOutput> {
    output: O,
    channel: u8,
    velocity: u8,
}

impl<O: MidiOutput> NoteOut<O> {
    /// Wrap an output, sending on channel 0 at [`DEFAULT_VELOCITY`]
    pub fn new(output: O) -> Self {
        Self {
            output,
            channel: 0,
            velocity: DEFAULT_VELOCITY,
        }
    }

    /// Set the channel (0-15) for this sender
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel & 0x0F;
        self
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    /// Set the default velocity, keeping the low 7 bits
    pub fn set_velocity(&mut self, velocity: u8) {
        self.velocity = velocity & 0x7F;
    }

    pub fn note_on(&mut self, note: Note) -> Result<(), MidiError> {
        self.note_on_with(note, self.velocity)
    }

    pub fn note_on_with(&mut self, note: Note, velocity: u8) -> Result<(), MidiError> {
        self.send(MidiMessage::note_on(self.channel, note, velocity))
    }

    pub fn note_off(&mut self, note: Note) -> Result<(), MidiError> {
        self.note_off_with(note, self.velocity)
    }

    pub fn note_off_with(&mut self, note: Note, velocity: u8) -> Result<(), MidiError> {
        self.send(MidiMessage::note_off(self.channel, note, velocity))
    }

    /// Note-on for every note, e.g. all notes of a chord
    pub fn notes_on<I: IntoIterator<Item = Note>>(&mut self, notes: I) -> Result<(), MidiError> {
        notes.into_iter().try_for_each(|note| self.note_on(note))
    }

    pub fn notes_off<I: IntoIterator<Item = Note>>(&mut self, notes: I) -> Result<(), MidiError> {
        notes.into_iter().try_for_each(|note| self.note_off(note))
    }

    pub fn send(&mut self, message: MidiMessage) -> Result<(), MidiError> {
        debug!(?message, "sending");
        self.output.send(&message.to_bytes())
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_inner(self) -> O {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::Chord;

    /// Records every message instead of sending it
    #[derive(Default)]
    struct MockMidiOutput {
        messages: Vec<Vec<u8>>,
    }

    impl MidiOutput for MockMidiOutput {
        fn send(&mut self, message: &[u8]) -> Result<(), MidiError> {
            self.messages.push(message.to_vec());
            Ok(())
        }
    }

    struct FailingOutput;

    impl MidiOutput for FailingOutput {
        fn send(&mut self, _message: &[u8]) -> Result<(), MidiError> {
            Err(MidiError::Unconnected)
        }
    }

    #[test]
    fn test_default_velocity() {
        let mut out = NoteOut::new(MockMidiOutput::default());
        out.note_on(Note::MIDDLE_C).unwrap();
        out.note_off(Note::MIDDLE_C).unwrap();
        assert_eq!(
            out.output().messages,
            vec![vec![0x90, 60, 120], vec![0x80, 60, 120]]
        );
    }

    #[test]
    fn test_set_velocity_masks() {
        let mut out = NoteOut::new(MockMidiOutput::default());
        out.set_velocity(200);
        assert_eq!(out.velocity(), 200 & 0x7F);
        out.note_on(Note::new(64)).unwrap();
        out.note_on_with(Note::new(67), 30).unwrap();
        assert_eq!(out.output().messages[0], vec![0x90, 64, 72]);
        assert_eq!(out.output().messages[1], vec![0x90, 67, 30]);
    }

    #[test]
    fn test_channel() {
        let mut out = NoteOut::new(MockMidiOutput::default()).with_channel(9);
        assert_eq!(out.channel(), 9);
        out.note_off_with(Note::new(36), 0).unwrap();
        assert_eq!(out.into_inner().messages, vec![vec![0x89, 36, 0]]);
    }

    #[test]
    fn test_chord_on_off() {
        let mut out = NoteOut::new(MockMidiOutput::default());
        let chord = Chord::major_triad(Note::MIDDLE_C);
        out.notes_on(&chord).unwrap();
        out.notes_off(&chord).unwrap();

        let messages = &out.output().messages;
        assert_eq!(messages.len(), 6);
        assert_eq!(messages[0], vec![0x90, 60, 120]);
        assert_eq!(messages[2], vec![0x90, 67, 120]);
        assert_eq!(messages[5], vec![0x80, 67, 120]);
    }

    #[test]
    fn test_errors_propagate() {
        let mut out = NoteOut::new(FailingOutput);
        assert_eq!(out.note_on(Note::MIDDLE_C), Err(MidiError::Unconnected));
        assert_eq!(
            out.notes_on(Chord::minor_triad(Note::MIDDLE_C)),
            Err(MidiError::Unconnected)
        );
    }
}
