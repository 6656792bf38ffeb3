use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use aoplan_benchmarks::{chain_problem, fanout_problem};
use aoplan_search::astar::plan;
use aoplan_search::combinator::generate_assignments;

// ---------------------------------------------------------------------------
// Combinator fan-out
// ---------------------------------------------------------------------------

fn bench_combinator(c: &mut Criterion) {
    let mut group = c.benchmark_group("combinator_fanout");
    for &(width, agents) in &[(2usize, 2usize), (3, 2), (3, 3)] {
        let (graph, config) = fanout_problem(width, agents);
        // Open frontier after the split: every branch subassembly.
        let root = graph.root().unwrap();
        let split = graph.successor_nodes(root)[0];
        let open = graph.successor_nodes(split);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("w{width}_a{agents}")),
            &open,
            |b, open| {
                b.iter(|| black_box(generate_assignments(&graph, &config, open)));
            },
        );
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// End-to-end planning
// ---------------------------------------------------------------------------

fn bench_plan_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_chain");
    for &depth in &[4usize, 8, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter_batched(
                || chain_problem(depth, 2),
                |(graph, config)| black_box(plan(&graph, &config)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_plan_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_fanout");
    for &width in &[2usize, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter_batched(
                || fanout_problem(width, 2),
                |(graph, config)| black_box(plan(&graph, &config)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_combinator, bench_plan_chain, bench_plan_fanout);
criterion_main!(benches);
