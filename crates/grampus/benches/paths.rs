use criterion::{Criterion, criterion_group, criterion_main};
use grampus::DirectedGraph;
use grampus::adt::Stack;

/// n x n grid with right/down edges, weight 1.
fn grid(n: usize) -> DirectedGraph<(usize, usize)> {
    let mut g = DirectedGraph::new();
    for y in 0..n {
        for x in 0..n {
            g.add_vertex((x, y));
        }
    }
    for y in 0..n {
        for x in 0..n {
            if x + 1 < n {
                g.add_edge_with_weight(&(x, y), &(x + 1, y), 1.0);
            }
            if y + 1 < n {
                g.add_edge_with_weight(&(x, y), &(x, y + 1), 1.0);
            }
        }
    }
    g
}

fn bench_paths(c: &mut Criterion) {
    let n = 40;
    let g = grid(n);
    let begin = (0, 0);
    let end = (n - 1, n - 1);

    c.bench_function("breadth_first_traversal/grid_40", |b| {
        b.iter(|| g.breadth_first_traversal(&begin))
    });

    c.bench_function("shortest_path/grid_40", |b| {
        b.iter(|| {
            let mut path = Stack::new();
            g.shortest_path(&begin, &end, &mut path).unwrap()
        })
    });

    c.bench_function("cheapest_path/grid_40", |b| {
        b.iter(|| {
            let mut path = Stack::new();
            g.cheapest_path(&begin, &end, &mut path).unwrap()
        })
    });
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
