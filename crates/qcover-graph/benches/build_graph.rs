use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qcover_core::rng::RngHandle;
use qcover_graph::{canonical_hash, gnp};

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("gnp_500", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let graph = gnp(500, 0.1, &mut rng).unwrap();
            black_box(graph);
        });
    });

    let mut rng = RngHandle::from_seed(7);
    let graph = gnp(500, 0.1, &mut rng).unwrap();
    c.bench_function("canonical_hash_500", |b| {
        b.iter(|| black_box(canonical_hash(&graph)));
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
