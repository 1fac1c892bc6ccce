// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for tonekit
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale range enumeration over growing spans
//! - Scale construction from degrees and from tones
//! - Note message encoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tonekit::midi::MidiMessage;
use tonekit::music::{Chord, Note, Scale, ScaleType, Tone};

/// Benchmark range enumeration (eager and lazy) across octave spans
fn bench_scale_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_range");
    let scale = Scale::major(Tone::D);

    for octaves in [1u8, 4, 9].iter() {
        let first = Note::from_tone(Tone::D, 1);
        let last = Note::from_tone(Tone::D, 1 + octaves);

        group.bench_with_input(BenchmarkId::new("collect", octaves), octaves, |b, _| {
            b.iter(|| black_box(scale.range(black_box(first), black_box(last)).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("iter_sum", octaves), octaves, |b, _| {
            b.iter(|| {
                let iter = scale.range_iter(black_box(first), black_box(last)).unwrap();
                black_box(iter.map(|n| n.value() as u32).sum::<u32>())
            })
        });
    }

    group.finish();
}

/// Benchmark building scales
fn bench_scale_construction(c: &mut Criterion) {
    c.bench_function("scale_of_all_types", |b| {
        b.iter(|| {
            for scale_type in ScaleType::ALL {
                black_box(Scale::of(black_box(Tone::FS), scale_type));
            }
        })
    });

    let tones = Scale::minor(Tone::A).tones().to_vec();
    c.bench_function("scale_from_tones", |b| {
        b.iter(|| black_box(Scale::from_tones(black_box(&tones))))
    });
}

/// Benchmark turning chords into wire messages
fn bench_message_encoding(c: &mut Criterion) {
    let chord = Chord::major_triad(Note::MIDDLE_C);

    c.bench_function("chord_note_on_bytes", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for note in &chord {
                let bytes = MidiMessage::note_on(black_box(0), note, 120).to_bytes();
                total += bytes[1] as u32;
            }
            black_box(total)
        })
    });
}

criterion_group!(
    benches,
    bench_scale_range,
    bench_scale_construction,
    bench_message_encoding,
);
criterion_main!(benches);
