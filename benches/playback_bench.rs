//! Criterion benchmarks for step generation, motion and playback.

use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use sortviz::animation::{MotionConfig, MotionPath, MotionTimeline};
use sortviz::binding::{ElementId, MemoryBinding};
use sortviz::options::Options;
use sortviz::session::Visualizer;
use sortviz::sort::{replay_values, Algorithm, StepSequence};

fn descending(n: i64) -> Vec<i64> {
    (0..n).rev().collect()
}

fn step_generation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_generation");

    for algorithm in [Algorithm::Bubble, Algorithm::Insertion] {
        for count in [10, 50, 200] {
            let sequence = StepSequence::new(algorithm, &descending(count));
            group.bench_function(
                format!("{}_{count}", algorithm.name()),
                |b| b.iter(|| black_box(sequence.iter().count())),
            );
        }
    }
    group.finish();
}

fn replay_benchmark(c: &mut Criterion) {
    let sequence = StepSequence::new(Algorithm::Insertion, &descending(100));
    c.bench_function("replay_insertion_100", |b| {
        b.iter(|| black_box(replay_values(black_box(&sequence))))
    });
}

fn timeline_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_update");

    for count in [2, 16, 64] {
        group.bench_function(format!("{count}_elements"), |b| {
            b.iter(|| {
                let mut timeline = MotionTimeline::new(MotionConfig::default());
                for i in 0..count {
                    let start = Vec3::new(i as f32, 0.5, 0.0);
                    let target = start + Vec3::X;
                    timeline.add(
                        ElementId(i),
                        start,
                        MotionPath::hop(start, target, 1.0),
                    );
                }
                while timeline.update(1.0 / 60.0) {}
                black_box(timeline.get_interpolated().len())
            });
        });
    }
    group.finish();
}

fn headless_playback_benchmark(c: &mut Criterion) {
    let mut options = Options::default();
    options.playback.step_delay = 0.0;
    options.playback.start_delay = 0.0;
    let frame = Duration::from_micros(16_667);

    c.bench_function("headless_bubble_20", |b| {
        b.iter(|| {
            let mut viz =
                Visualizer::new(MemoryBinding::new(), options.clone());
            let _ = viz.submit_values(&descending(20));
            while viz.tick(frame).is_ok_and(|s| !s.is_terminal()) {}
            black_box(viz.binding().calls().len())
        });
    });
}

criterion_group!(
    benches,
    step_generation_benchmark,
    replay_benchmark,
    timeline_update_benchmark,
    headless_playback_benchmark
);
criterion_main!(benches);
