use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rotaeno_rating::{
    model::{aggregation::aggregate, record_tracker::RecordTracker, summary::summarize},
    utils::test_utils::{generate_catalog, generate_records}
};

pub fn criterion_benchmark(c: &mut Criterion) {
    let catalog = generate_catalog(300);
    let mut group = c.benchmark_group("aggregate");

    for n in [30, 300, 1500] {
        let records = generate_records(&catalog, n, 42);

        group.bench_with_input(BenchmarkId::from_parameter(n), &records, |b, records| {
            b.iter(|| {
                let enriched = aggregate(black_box(records), &catalog).unwrap();
                summarize(&enriched)
            })
        });
    }

    group.finish();

    let records = generate_records(&catalog, 1500, 7);
    c.bench_function("normalize 1500", |b| {
        b.iter(|| RecordTracker::from_records(black_box(records.clone())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
