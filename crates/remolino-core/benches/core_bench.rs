//! Criterion benchmarks for remolino-core primitives
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use remolino_core::{BlockDelayBuffer, PitchDirection, RampModulator, SineModulator};

const SAMPLE_RATE: f32 = 48000.0;
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512, 1024];

fn generate_test_signal(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect()
}

fn bench_ring_write_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("RingWriteBlock");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        let mut ring = BlockDelayBuffer::new(2, block_size + 480);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    ring.write_block(0, black_box(&input), 1.0);
                    ring.write_block(1, black_box(&input), 1.0);
                    ring.commit_advance(block_size);
                    black_box(ring.write_position())
                })
            },
        );
    }

    group.finish();
}

fn bench_ring_modulated_taps(c: &mut Criterion) {
    let mut group = c.benchmark_group("RingModulatedTaps");

    for &block_size in BLOCK_SIZES {
        let input = generate_test_signal(block_size);
        let mut ring = BlockDelayBuffer::new(1, block_size + 480);
        ring.write_block(0, &input, 1.0);
        let mut lfo = SineModulator::new(SAMPLE_RATE, 1.5);

        group.bench_with_input(
            BenchmarkId::from_parameter(block_size),
            &block_size,
            |b, _| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for i in 0..block_size {
                        let delay = lfo.advance(440.0);
                        acc += ring.read_at(0, delay as isize - i as isize);
                    }
                    black_box(acc)
                })
            },
        );
    }

    group.finish();
}

fn bench_modulators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Modulators");

    let mut sine = SineModulator::new(SAMPLE_RATE, 2.0);
    group.bench_function("sine", |b| {
        b.iter(|| black_box(sine.advance(black_box(440.0))))
    });

    let mut ramp = RampModulator::new(SAMPLE_RATE, 5.0);
    group.bench_function("ramp", |b| {
        b.iter(|| black_box(ramp.advance(black_box(440.0), PitchDirection::Down)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ring_write_block,
    bench_ring_modulated_taps,
    bench_modulators
);
criterion_main!(benches);
