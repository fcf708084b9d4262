use criterion::{criterion_group, criterion_main, Criterion};
use heartpath_lib::{
    best_with_shortcuts, shortest_path, CostPolicy, FreeRooms, Graph, Shortcut, DEFAULT_COST,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

const SIDE: usize = 40;

/// `SIDE` x `SIDE` grid of rooms, start in one corner and boss in the other.
static GRID: Lazy<Graph> = Lazy::new(|| {
    let mut graph = Graph::new(SIDE * SIDE);
    for row in 0..SIDE {
        for col in 0..SIDE {
            let room = row * SIDE + col;
            if col + 1 < SIDE {
                graph.add_edge(room, room + 1, DEFAULT_COST).expect("in range");
            }
            if row + 1 < SIDE {
                graph.add_edge(room, room + SIDE, DEFAULT_COST).expect("in range");
            }
        }
    }
    graph
});
static DIAGONAL_ROOMS: Lazy<FreeRooms> = Lazy::new(|| (0..SIDE).map(|i| i * SIDE + i).collect());
static SHORTCUTS: Lazy<Vec<Shortcut>> = Lazy::new(|| {
    (0..SIDE)
        .map(|i| Shortcut::new(i, SIDE * SIDE - 1 - i * SIDE))
        .collect()
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRID;
    let boss = SIDE * SIDE - 1;

    c.bench_function("uniform_grid_corner_to_corner", |b| {
        b.iter(|| {
            let cost = shortest_path(graph, 0, boss, CostPolicy::Uniform).expect("valid rooms");
            black_box(cost)
        });
    });

    c.bench_function("free_rooms_grid_corner_to_corner", |b| {
        let policy = CostPolicy::FreeRooms(&*DIAGONAL_ROOMS);
        b.iter(|| {
            let cost = shortest_path(graph, 0, boss, policy).expect("valid rooms");
            black_box(cost)
        });
    });

    c.bench_function("shortcut_search_grid", |b| {
        let mut scratch = graph.duplicate();
        b.iter(|| {
            let cost =
                best_with_shortcuts(&mut scratch, 0, boss, &*SHORTCUTS).expect("valid rooms");
            black_box(cost)
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
