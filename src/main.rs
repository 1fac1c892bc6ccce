// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Context, Result};
use tonekit::config::PlayerConfig;
use tonekit::music::{Chord, ChordType, Note, Scale};

fn print_usage() {
    println!("tonekit - Scales and chords on MIDI");
    println!();
    println!("Usage: tonekit [--config <FILE>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --tones [ROOT SCALE]                      Print the tones of a scale");
    println!("  --range <ROOT> <SCALE> <FROM> <TO>        Print scale notes between two notes");
    println!("  --chord <ROOT-NOTE> <CHORD>               Print the notes of a chord");
    #[cfg(feature = "device")]
    {
        println!("  --list-midi                               List available MIDI outputs");
        println!("  --play-scale <N> <ROOT> <SCALE> <FROM> <TO>");
        println!("                                            Play a scale range on output N");
        println!("  --play-chord <N> <ROOT-NOTE> <CHORD>      Play a chord on output N");
    }
    println!("  --help                                    Show this help message");
    println!();
    println!("Example: tonekit --range C major C4 C5");
}

fn parse_note(s: &str) -> Result<Note> {
    s.parse()
        .with_context(|| format!("Invalid note {:?}, expected something like C4 or F#3", s))
}

/// Scale from `[ROOT, SCALE]` arguments, or the configured one if none are given
fn scale_arg(args: &[String], config: &PlayerConfig) -> Result<Scale> {
    match args {
        [] => Ok(config.scale()),
        [root, scale] => Ok(Scale::parse(root, scale)?),
        _ => Err(anyhow!("Expected both a root and a scale type")),
    }
}

fn range_args(args: &[String]) -> Result<(Scale, Note, Note)> {
    let [root, scale, from, to] = args else {
        return Err(anyhow!("Expected <ROOT> <SCALE> <FROM> <TO>"));
    };
    let scale = Scale::parse(root, scale)?;
    Ok((scale, parse_note(from)?, parse_note(to)?))
}

fn chord_args(args: &[String]) -> Result<Chord> {
    let [root, chord] = args else {
        return Err(anyhow!("Expected <ROOT-NOTE> <CHORD>"));
    };
    let chord_type: ChordType = chord.parse()?;
    Ok(Chord::of(parse_note(root)?, chord_type))
}

fn print_notes<I: IntoIterator<Item = Note>>(notes: I) {
    let names: Vec<String> = notes.into_iter().map(|n| format!("{} ({})", n, n.value())).collect();
    println!("{}", names.join(" "));
}

#[cfg(feature = "device")]
mod play {
    use std::thread;

    use anyhow::{Context, Result};
    use tonekit::config::PlayerConfig;
    use tonekit::midi::{DeviceOutput, MidiOutput, NoteOut};
    use tonekit::music::{Chord, Note};

    pub fn print_destinations() -> Result<()> {
        let ports = DeviceOutput::discover()?;
        if ports.is_empty() {
            println!("No MIDI destinations found.");
        } else {
            println!("Available MIDI destinations:");
            for port in ports {
                println!("  {}: {}", port.index, port.name);
            }
        }
        Ok(())
    }

    /// Connect by index, or by partial name when `device` isn't a number
    pub fn open(device: &str, config: &PlayerConfig) -> Result<NoteOut<DeviceOutput>> {
        let output = match device.parse::<usize>() {
            Ok(index) => DeviceOutput::connect(index)?,
            Err(_) => DeviceOutput::connect_by_name(device)?,
        };
        println!("Connected to '{}'", output.name()?);

        let mut out = NoteOut::new(output).with_channel(config.midi_channel());
        out.set_velocity(config.velocity);
        Ok(out)
    }

    pub fn play_notes<O: MidiOutput>(
        out: &mut NoteOut<O>,
        notes: &[Note],
        config: &PlayerConfig,
    ) -> Result<()> {
        for &note in notes {
            println!("Playing {}", note);
            out.note_on(note).context("Note On failed")?;
            thread::sleep(config.note_duration());
            out.note_off(note).context("Note Off failed")?;
            thread::sleep(config.gap());
        }
        Ok(())
    }

    pub fn play_chord<O: MidiOutput>(
        out: &mut NoteOut<O>,
        chord: &Chord,
        config: &PlayerConfig,
    ) -> Result<()> {
        println!("Playing {}", chord);
        out.notes_on(chord).context("Note On failed")?;
        thread::sleep(config.note_duration() * 2);
        out.notes_off(chord).context("Note Off failed")?;
        thread::sleep(config.gap());
        Ok(())
    }
}

fn run(args: &[String], config: &PlayerConfig) -> Result<()> {
    let Some(command) = args.first() else {
        println!("tonekit - Scales and chords on MIDI");
        println!("Run with --help for usage information");
        return Ok(());
    };
    let rest = &args[1..];

    match command.as_str() {
        "--tones" => {
            let scale = scale_arg(rest, config)?;
            println!("{}", scale);
        }
        "--range" => {
            let (scale, from, to) = range_args(rest)?;
            print_notes(scale.range(from, to)?);
        }
        "--chord" => {
            print_notes(&chord_args(rest)?);
        }
        #[cfg(feature = "device")]
        "--list-midi" => {
            play::print_destinations()?;
        }
        #[cfg(feature = "device")]
        "--play-scale" => {
            let Some((device, rest)) = rest.split_first() else {
                return Err(anyhow!("--play-scale requires a destination"));
            };
            let (scale, from, to) = range_args(rest)?;
            let notes = scale.range(from, to)?;
            let mut out = play::open(device, config)?;
            play::play_notes(&mut out, &notes, config)?;
        }
        #[cfg(feature = "device")]
        "--play-chord" => {
            let Some((device, rest)) = rest.split_first() else {
                return Err(anyhow!("--play-chord requires a destination"));
            };
            let chord = chord_args(rest)?;
            let mut out = play::open(device, config)?;
            play::play_chord(&mut out, &chord, config)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}


fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let (config, args) = match args.as_slice() {
        [flag, path, rest @ ..] if flag == "--config" => (PlayerConfig::load(path)?, rest),
        [flag] if flag == "--config" => {
            eprintln!("Error: --config requires a file path");
            std::process::exit(1);
        }
        rest => (PlayerConfig::default(), rest),
    };

    run(args, &config)
}
