// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for tonekit
//!
//! These tests verify that the music types and the MIDI output layer work
//! together through the public API.

use std::fs;

use tempfile::tempdir;
use tonekit::config::PlayerConfig;
use tonekit::midi::{MidiError, MidiMessage, MidiOutput, NoteOut};
use tonekit::music::{Chord, Note, Scale, ScaleType, Tone};
use tonekit::TheoryError;

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

fn values<I: IntoIterator<Item = Note>>(notes: I) -> Vec<u8> {
    notes.into_iter().map(|n| n.value()).collect()
}

/// Tone names survive a round trip through their text form
#[test]
fn test_tone_name_round_trip() {
    for index in 0..12 {
        let tone = Tone::new(index);
        assert_eq!(Tone::from_name(tone.name()), Ok(tone));
        assert_eq!(tone.name().parse::<Tone>(), Ok(tone));
    }
    assert!(matches!(
        Tone::from_name("Z"),
        Err(TheoryError::InvalidName(_))
    ));
}

#[test]
fn test_c_major_scale_tones() {
    let names: Vec<&str> = Scale::major(Tone::C).tones().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["C", "D", "E", "F", "G", "A", "B"]);
}

/// C4 to C5 in C major is the familiar eight-note run
#[test]
fn test_c_major_octave_range() {
    let c_major = Scale::major(Tone::C);
    let range = c_major.range(Note::new(60), Note::new(72)).unwrap();

    assert_eq!(range.len(), 8);
    assert_eq!(values(range.iter().copied()), [60, 62, 64, 65, 67, 69, 71, 72]);

    let names: Vec<String> = range.iter().map(|n| n.name()).collect();
    assert_eq!(names, ["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"]);
}

#[test]
fn test_inverted_range_is_empty() {
    let c_major = Scale::major(Tone::C);
    assert_eq!(c_major.range(Note::new(72), Note::new(60)), Ok(Vec::new()));
}

#[test]
fn test_out_of_scale_endpoint() {
    let e_minor = Scale::minor(Tone::E);
    let err = e_minor.range(Note::new(60), Note::new(65)).unwrap_err();
    assert_eq!(err, TheoryError::OutOfScale { note: Note::new(65) });
    assert_eq!(err.to_string(), "Note F4 is not in the scale");
}

/// Every range starts and ends on its endpoints and climbs one scale step
/// at a time, for every root and scale type
#[test]
fn test_range_invariants_all_scales() {
    for root in 0..12 {
        for scale_type in ScaleType::ALL {
            let scale = Scale::of(Tone::new(root), scale_type);
            let first = Note::from_tone(scale[1], 3);
            let last = Note::from_tone(scale[scale.len() - 1], 7);

            let range = scale.range(first, last).unwrap();
            assert_eq!(range.first(), Some(&first), "{} {}", root, scale_type);
            assert_eq!(range.last(), Some(&last), "{} {}", root, scale_type);
            assert!(range.windows(2).all(|w| w[0] < w[1]));
            assert!(range.iter().all(|n| scale.contains(n.tone())));

            // Consecutive notes are consecutive scale positions
            for w in range.windows(2) {
                let a = scale.position(w[0].tone()).unwrap();
                let b = scale.position(w[1].tone()).unwrap();
                assert_eq!((a + 1) % scale.len(), b);
            }
        }
    }
}

#[test]
fn test_scale_from_own_tones() {
    let scale = Scale::lydian(Tone::F);
    assert_eq!(Scale::from_tones(scale.tones()), scale);
}

#[test]
fn test_note_arithmetic_inverse() {
    for v in 0..128u8 {
        for k in 0..=255u8 {
            assert_eq!(Note::new(v) + k - k, Note::new(v));
        }
    }
}

#[test]
fn test_triads() {
    let c4 = Note::MIDDLE_C;
    assert_eq!(values(&Chord::major_triad(c4)), [60, 64, 67]);
    assert_eq!(values(&Chord::minor_triad(c4)), [60, 63, 67]);
}

/// A scale range played through the sender turns into note-on/off pairs
#[test]
fn test_scale_to_midi_flow() {
    let scale = Scale::major(Tone::C);
    let notes = scale.range(Note::new(60), Note::new(64)).unwrap();

    let mut out = NoteOut::new(MockMidiOutput::default()).with_channel(2);
    for &note in &notes {
        out.note_on(note).unwrap();
        out.note_off(note).unwrap();
    }

    let messages = out.into_inner().messages;
    assert_eq!(
        messages,
        vec![
            vec![0x92, 60, 120],
            vec![0x82, 60, 120],
            vec![0x92, 62, 120],
            vec![0x82, 62, 120],
            vec![0x92, 64, 120],
            vec![0x82, 64, 120],
        ]
    );

    let parsed: Vec<MidiMessage> = messages
        .iter()
        .filter_map(|m| MidiMessage::parse(m))
        .collect();
    assert_eq!(parsed.len(), 6);
    assert_eq!(parsed[4], MidiMessage::note_on(2, Note::new(64), 120));
}

/// Chord notes go out with the configured channel and velocity
#[test]
fn test_config_drives_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("player.yaml");
    fs::write(&path, "channel: 16\nvelocity: 64\nroot: D\nscale: minor\n").unwrap();

    let config = PlayerConfig::load(&path).unwrap();
    let mut out = NoteOut::new(MockMidiOutput::default()).with_channel(config.midi_channel());
    out.set_velocity(config.velocity);

    let root = Note::from_tone(config.scale().root(), 5);
    out.notes_on(&Chord::minor_triad(root)).unwrap();

    assert_eq!(
        out.output().messages,
        vec![vec![0x9F, 62, 64], vec![0x9F, 65, 64], vec![0x9F, 69, 64]]
    );
}
