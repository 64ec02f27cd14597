//! Criterion micro-benchmarks for single-cascade operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use scascade_bench::{adjacency_text, reference_graph};
use scascade_core::{EpidemicId, InitialCondition, NodeId, StopCriterion, TraceRecord};
use scascade_engine::trial::{stream_rng, trial};
use scascade_engine::{Epidemic, Frontier};
use scascade_graph::{read_adjacency, LoadOptions};

/// Benchmark: push then pop 10K nodes through a frontier.
fn bench_frontier_10k(c: &mut Criterion) {
    let mut frontier = Frontier::new(10_000).unwrap();
    c.bench_function("frontier_push_pop_10k", |b| {
        b.iter(|| {
            for v in 0..10_000u32 {
                frontier.push(NodeId(v)).unwrap();
            }
            while let Some(v) = frontier.pop() {
                black_box(v);
            }
        });
    });
}

/// Benchmark: 10K Bernoulli trials.
fn bench_trials_10k(c: &mut Criterion) {
    let mut rng = stream_rng(1, 0, 1);
    c.bench_function("trial_10k", |b| {
        b.iter(|| {
            let mut hits = 0u32;
            for _ in 0..10_000 {
                hits += u32::from(trial(&mut rng, black_box(0.3)));
            }
            black_box(hits);
        });
    });
}

/// Benchmark: one full cascade on the 10K reference graph, no trace.
fn bench_cascade_10k(c: &mut Criterion) {
    let g = reference_graph(42);
    let ic = InitialCondition::new(EpidemicId(0), [NodeId(0)], 50, StopCriterion::MaxDepth);
    c.bench_function("cascade_10k_p0.3", |b| {
        let mut sample = 0u64;
        b.iter(|| {
            sample += 1;
            let mut ep = Epidemic::new(0.3, &g, &ic, None).unwrap();
            let t = ep.run(&mut stream_rng(42, 0, sample)).unwrap();
            black_box((t, ep.infected()));
        });
    });
}

/// Benchmark: the same cascade collecting its trace in memory.
fn bench_cascade_10k_traced(c: &mut Criterion) {
    let g = reference_graph(42);
    let ic = InitialCondition::new(EpidemicId(0), [NodeId(0)], 50, StopCriterion::MaxDepth);
    let mut trace: Vec<TraceRecord> = Vec::with_capacity(100_000);
    c.bench_function("cascade_10k_p0.3_traced", |b| {
        b.iter(|| {
            trace.clear();
            let mut ep = Epidemic::new(0.3, &g, &ic, Some(&mut trace)).unwrap();
            black_box(ep.run(&mut stream_rng(42, 0, 1)).unwrap());
        });
    });
}

/// Benchmark: parse the 10K reference graph from text.
fn bench_load_10k(c: &mut Criterion) {
    let text = adjacency_text(&reference_graph(42));
    c.bench_function("load_adjacency_10k", |b| {
        b.iter(|| {
            let g = read_adjacency(black_box(text.as_bytes()), LoadOptions::default()).unwrap();
            black_box(g);
        });
    });
}

criterion_group!(
    benches,
    bench_frontier_10k,
    bench_trials_10k,
    bench_cascade_10k,
    bench_cascade_10k_traced,
    bench_load_10k
);
criterion_main!(benches);
