use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use specter::ai::{search, Algorithm, SearchConfig};
use specter::core::{World, DEFAULT_LAYOUT};
use specter::heuristics::BetterEvaluator;

fn search_position(world: &World, depth: u32, algorithm: Algorithm) {
    let config = SearchConfig::new(depth, BetterEvaluator::default());
    // prevent the result from being optimized away
    black_box(search(world, &config, algorithm).ok());
}

fn search_benchmark(c: &mut Criterion) {
    let Ok(world) = World::from_layout(DEFAULT_LAYOUT) else {
        return;
    };
    let depth = 3;

    for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta, Algorithm::Expectimax] {
        c.bench_function(&format!("{}_depth_{}", algorithm, depth), |b| {
            b.iter(|| search_position(black_box(&world), black_box(depth), algorithm))
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = search_benchmark
}
criterion_main!(benches);
