use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use ringfx_core::{FeedbackDelay, FrameProcessor, ModulationEngine, ModulationKind};
use std::hint::black_box;

fn impulse_train(len: usize) -> Vec<f32> {
    (0..len).map(|i| if i % 64 == 0 { 1.0 } else { 0.0 }).collect()
}

#[library_benchmark]
fn bench_feedback_delay() {
    let buffer_size = 512;
    let mut delay: FeedbackDelay = FeedbackDelay::new(12048, 1.0, 0.5).unwrap();
    let mut buffer = impulse_train(buffer_size);
    delay.process(black_box(&mut buffer), 0);
}

fn run_modulation(kind: ModulationKind) {
    let sample_rate = 48000.0;
    let buffer_size = 512;
    let mut engine: ModulationEngine = ModulationEngine::new(kind);
    engine.set_sample_rate(sample_rate);
    let mut buffer = impulse_train(buffer_size);
    FrameProcessor::process(&mut engine, black_box(&mut buffer), 0);
}

#[library_benchmark]
fn bench_vibrato() {
    run_modulation(ModulationKind::Vibrato);
}

#[library_benchmark]
fn bench_chorus() {
    run_modulation(ModulationKind::Chorus);
}

#[library_benchmark]
fn bench_flanger() {
    run_modulation(ModulationKind::Flanger);
}

#[library_benchmark]
fn bench_modulation_per_sample() {
    let sample_rate = 48000.0;
    let mut engine: ModulationEngine = ModulationEngine::chorus();
    let input = impulse_train(512);
    let mut acc = 0.0;
    for &x in &input {
        acc += engine.process(black_box(x), sample_rate, false);
    }
    black_box(acc);
}

library_benchmark_group!(
    name = delay;
    benchmarks = bench_feedback_delay
);

library_benchmark_group!(
    name = modulation;
    benchmarks = bench_vibrato, bench_chorus, bench_flanger, bench_modulation_per_sample
);

main!(library_benchmark_groups = delay, modulation);
