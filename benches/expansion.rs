//! Benchmarks of enumeration and expansion tables.
//!
//! Each iteration uses a fresh engine, so nothing is served from the caches.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use flag_expansion::Engine;
use flag_expansion::flags::{Graph, Tournament};

fn bench_graph_objects(c: &mut Criterion) {
    c.bench_function("graph_objects_6", |b| {
        b.iter(|| {
            let engine = Engine::<Graph>::new();
            assert_eq!(engine.objects(black_box(6)).len(), 156);
        })
    });
}

fn bench_graph_flags(c: &mut Criterion) {
    c.bench_function("graph_flags_5_over_edge", |b| {
        b.iter(|| {
            let engine = Engine::<Graph>::new();
            engine
                .enumerate_flags(black_box(5), &Graph::clique(2))
                .unwrap()
        })
    });
}

fn bench_graph_products(c: &mut Criterion) {
    c.bench_function("graph_products_3_3_in_5_over_vertex", |b| {
        b.iter(|| {
            let engine = Engine::<Graph>::new();
            engine
                .expand_flag_product_enumerate(&Graph::empty(1), 3, 3, black_box(5))
                .unwrap()
        })
    });
}

fn bench_tournament_products(c: &mut Criterion) {
    c.bench_function("tournament_objects_3_3_in_6", |b| {
        b.iter(|| {
            let engine = Engine::<Tournament>::new();
            engine
                .expand_object_product_enumerate(3, 3, black_box(6))
                .unwrap()
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_graph_objects,
              bench_graph_flags,
              bench_graph_products,
              bench_tournament_products
);
criterion_main!(benches);
