use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use swarmline::prelude::*;

fn swarm(function: &str, n: usize) -> Swarm {
    SwarmBuilder::new()
        .with_problem_type("min")
        .unwrap()
        .with_objective_function(function)
        .unwrap()
        .with_num_particles(30)
        .unwrap()
        .with_bounds(vec![[-5.12, 5.12]; n])
        .unwrap()
        .with_cognitive_weight(1.5)
        .unwrap()
        .with_social_weight(1.5)
        .unwrap()
        .with_inertia_weight(0.7)
        .unwrap()
        .with_max_iterations(100)
        .unwrap()
        .with_seed(0)
        .build()
        .unwrap()
}

fn pipeline_benchmark(c: &mut Criterion) {
    for function in ["sphere", "rastrigin"] {
        let mut group = c.benchmark_group(format!("pso: {}", function));
        for n in [2, 5, 10, 20] {
            group.bench_with_input(BenchmarkId::new("Global", n), &n, |b, ndim| {
                b.iter(|| {
                    let pipeline = Pipeline::standard(TopologyKind::Global, NopSink::build());
                    let mut runner = Runner::new(pipeline, swarm(function, *ndim));
                    runner.run().unwrap();
                });
            });
            group.bench_with_input(BenchmarkId::new("Ring", n), &n, |b, ndim| {
                b.iter(|| {
                    let pipeline = Pipeline::standard(TopologyKind::Ring, NopSink::build());
                    let mut runner = Runner::new(pipeline, swarm(function, *ndim));
                    runner.run().unwrap();
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
