use criterion::{criterion_group, criterion_main, Criterion};

use qcover_anneal::{AnnealingSampler, SamplerConfig};
use qcover_graph::barbell;
use qcover_qubo::EnergyModel;

fn bench_sample(c: &mut Criterion) {
    let graph = barbell(5, 3).unwrap();
    let model = EnergyModel::build(&graph, 4, 2.0).unwrap();
    let config = SamplerConfig {
        sweeps: 200,
        ..SamplerConfig::default()
    };
    let sampler = AnnealingSampler::new(config);

    c.bench_function("anneal_barbell_16_reads", |b| {
        b.iter(|| {
            let _ = sampler.sample(&model, 16, 42).unwrap();
        })
    });
}

criterion_group!(benches, bench_sample);
criterion_main!(benches);
