//! Benchmarks for quarterlog collection operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench operations -- filter`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use quarterlog::Item;
use quarterlog::core::filter::{filter_by_day, filter_by_week};
use quarterlog::core::ops::{remove_at, sort_and_reindex};
use quarterlog::store::{from_json_str, to_json_string};

// =============================================================================
// Test Data Generators
// =============================================================================

fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Items spread over roughly a year, in reverse order so sorting has work.
fn generate_items(count: usize) -> Vec<Item> {
    (0..count)
        .rev()
        .map(|i| {
            let offset = TimeDelta::minutes(i as i64 * 37);
            Item::at(format!("Entry number {}", i), start() + offset)
        })
        .collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_and_reindex");
    for count in [100, 1_000, 10_000] {
        let items = generate_items(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| sort_and_reindex(black_box(items.clone())));
        });
    }
    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let items = sort_and_reindex(generate_items(10_000));
    let day = start().date() + TimeDelta::days(100);

    group.bench_function("by_day", |b| {
        b.iter(|| filter_by_day(black_box(&items), Some(day)));
    });
    group.bench_function("by_week", |b| {
        b.iter(|| filter_by_week(black_box(&items), day));
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let items = sort_and_reindex(generate_items(10_000));
    c.bench_function("remove_at_middle", |b| {
        b.iter(|| remove_at(black_box(&items), 5_000));
    });
}

fn bench_store_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_format");
    let items = sort_and_reindex(generate_items(1_000));
    let json = to_json_string(&items, 4).unwrap();

    group.throughput(Throughput::Bytes(json.len() as u64));
    group.bench_function("to_json", |b| {
        b.iter(|| to_json_string(black_box(&items), 4));
    });
    group.bench_function("from_json", |b| {
        b.iter(|| from_json_str(black_box(&json)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_sort,
    bench_filter,
    bench_remove,
    bench_store_format
);
criterion_main!(benches);
