//! Entry cost benchmarks for terrain_core.
//!
//! Run with: `cargo bench -p terrain_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use terrain_core::prelude::*;
use terrain_test_utils::fixtures::{sample_agent, sample_catalog, striped_grid, walker};

/// Hot-path costs a path search pays per expanded edge.
pub fn entry_cost_benchmark(c: &mut Criterion) {
    let catalog = sample_catalog();
    let mut grid = striped_grid(&catalog, 64, 64);
    let croc = sample_agent(&catalog, "Crocodile", 1, GridPos::new(1, 1));

    c.bench_function("best_movement_stats_two_pairs", |b| {
        let marsh = grid.terrain_at(GridPos::new(2, 1)).expect("striped grid has marsh");
        b.iter(|| best_movement_stats(black_box(&croc), black_box(marsh)));
    });

    c.bench_function("cost_to_enter_cardinal", |b| {
        b.iter(|| {
            cost_to_enter(
                black_box(&croc),
                GridPos::new(1, 1),
                GridPos::new(2, 1),
                black_box(&grid),
            )
        });
    });

    grid.spawn_agent(walker(2, 4.6, GridPos::new(0, 0)))
        .expect("leader spawns");
    let follower = croc.clone().with_job(JobDescriptor::following(AgentId::new(2)));
    c.bench_function("cost_to_enter_with_leader", |b| {
        b.iter(|| {
            cost_to_enter(
                black_box(&follower),
                GridPos::new(1, 1),
                GridPos::new(2, 2),
                black_box(&grid),
            )
        });
    });

    let model = catalog.movement_model();
    c.bench_function("can_occupy", |b| {
        b.iter(|| model.can_occupy(black_box(&croc), GridPos::new(3, 1), true, black_box(&grid)));
    });
}

criterion_group!(benches, entry_cost_benchmark);
criterion_main!(benches);
