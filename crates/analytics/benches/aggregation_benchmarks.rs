use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use clearlabel_analytics::{AnalyticsReport, ProductFilter, flag_frequency, top_n};
use clearlabel_products::{ProductRecord, RecordId, Score};

const FLAGS: [&str; 6] = [
    "Vague sourcing",
    "Missing certification",
    "Unverified claim",
    "Allergen labelling",
    "Packaging",
    "Supplier audit overdue",
];

fn catalog(size: usize) -> Vec<ProductRecord> {
    (0..size)
        .map(|i| ProductRecord {
            id: RecordId::Numeric(i as u64),
            product_name: format!("Product {i}"),
            category: "Bench".to_string(),
            // Deterministic spread over 0..=100.
            score: Score::new(((i * 37) % 101) as i64),
            explanation: String::new(),
            suggestions: Vec::new(),
            flags: (0..i % 3).map(|j| FLAGS[(i + j) % FLAGS.len()].to_string()).collect(),
        })
        .collect()
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytics");

    for size in [100usize, 1_000, 10_000] {
        let records = catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("report", size), &records, |b, records| {
            b.iter(|| AnalyticsReport::compute(black_box(records), 5, 5))
        });

        group.bench_with_input(BenchmarkId::new("top_n", size), &records, |b, records| {
            b.iter(|| top_n(black_box(records), 5).len())
        });

        group.bench_with_input(BenchmarkId::new("flag_frequency", size), &records, |b, records| {
            b.iter(|| flag_frequency(black_box(records), 5))
        });

        let filter = ProductFilter::default().with_query("product 1");
        group.bench_with_input(BenchmarkId::new("filter", size), &records, |b, records| {
            b.iter(|| filter.apply(black_box(records)).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregations);
criterion_main!(benches);
