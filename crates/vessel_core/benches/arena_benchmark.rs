//! # Arena Performance Benchmark
//!
//! ARCHITECT'S REQUIREMENTS:
//! - Allocation is a cursor bump, nothing more
//! - A full frame's worth of scratch pushes must be noise next to the tick
//!
//! Run with: `cargo bench --package vessel_core`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vessel_core::Arena;

/// Frame arena capacity used by the host (1 MiB).
const FRAME_CAPACITY: usize = 1 << 20;

/// Benchmark: a frame's worth of small scratch allocations, then a clear.
fn bench_frame_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_pattern");

    for pushes in [64usize, 1024, 16_384] {
        group.bench_with_input(
            BenchmarkId::from_parameter(pushes),
            &pushes,
            |b, &pushes| {
                let mut arena = Arena::new(FRAME_CAPACITY);
                b.iter(|| {
                    for _ in 0..pushes {
                        black_box(arena.push(48, 8));
                    }
                    arena.clear();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: nested mark/rollback, the startup path-buffer pattern.
fn bench_mark_rollback(c: &mut Criterion) {
    c.bench_function("mark_rollback", |b| {
        let mut arena = Arena::new(FRAME_CAPACITY);
        b.iter(|| {
            let mark = arena.mark();
            black_box(arena.push(1 << 15, 2));
            black_box(arena.push(256, 8));
            arena.pop_to_mark(mark);
        });
    });
}

criterion_group!(benches, bench_frame_pattern, bench_mark_rollback);
criterion_main!(benches);
