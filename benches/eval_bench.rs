use criterion::{black_box, criterion_group, criterion_main, Criterion};
use specter::core::{World, DEFAULT_LAYOUT};
use specter::heuristics::{BetterEvaluator, Evaluator, ScoreEvaluator};

fn eval_benchmark(c: &mut Criterion) {
    let Ok(world) = World::from_layout(DEFAULT_LAYOUT) else {
        return;
    };
    let better = BetterEvaluator::default();

    c.bench_function("better evaluation", |b| {
        b.iter(|| better.evaluate(black_box(&world)))
    });

    c.bench_function("score evaluation", |b| {
        b.iter(|| ScoreEvaluator.evaluate(black_box(&world)))
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
