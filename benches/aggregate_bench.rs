//! Benchmarks for distribution aggregation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pantopia::aggregate::{aggregate, ChartsView, Distribution, DistributionCache, GroupBy};
use pantopia::company::Company;
use pantopia::theme::Theme;
use std::sync::Arc;

const INDUSTRIES: [&str; 6] = ["Tech", "Finance", "Retail", "Health", "Energy", ""];
const STATUSES: [&str; 4] = ["Active", "Lead", "Churned", "Prospect"];

fn create_test_companies(count: usize) -> Vec<Company> {
    (0..count)
        .map(|i| {
            Company::new(
                format!("Company {}", i),
                INDUSTRIES[i % INDUSTRIES.len()],
                STATUSES[(i / 3) % STATUSES.len()],
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [100, 1000, 10000] {
        let companies = create_test_companies(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("industry_{}", size), |b| {
            b.iter(|| aggregate(black_box(&companies), GroupBy::Industry))
        });

        group.bench_function(format!("distribution_{}", size), |b| {
            b.iter(|| Distribution::from_records(black_box(&companies)))
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    let snapshot: Arc<[Company]> = create_test_companies(10000).into();
    let cache = DistributionCache::new();
    cache.get_or_compute(&snapshot);

    group.bench_function("hit_10000", |b| {
        b.iter(|| cache.get_or_compute(black_box(&snapshot)))
    });

    group.finish();
}

fn bench_charts(c: &mut Criterion) {
    let distribution = Distribution::from_records(&create_test_companies(1000));

    c.bench_function("charts_view_dark", |b| {
        b.iter(|| ChartsView::build(black_box(&distribution), Theme::Dark))
    });
}

criterion_group!(benches, bench_aggregate, bench_cache, bench_charts);
criterion_main!(benches);
