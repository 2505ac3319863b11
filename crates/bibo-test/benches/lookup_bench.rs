//! Benchmarks for enumeration lookups

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bibo_app::DatabaseDriver;
use bibo_core::ClosedSet;
use bibo_http::{ContentType, HttpMethod, HttpStatus};

fn bench_status_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("http_status");

    group.bench_function("from_code_hit", |b| {
        b.iter(|| HttpStatus::from_code(black_box(418)))
    });

    group.bench_function("resolve_miss", |b| {
        b.iter(|| HttpStatus::resolve(black_box(999)))
    });

    group.bench_function("scan_all_categories", |b| {
        b.iter(|| {
            HttpStatus::all()
                .iter()
                .filter(|s| black_box(**s).is_client_error())
                .count()
        })
    });

    group.finish();
}

fn bench_string_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_parse");

    group.bench_function("http_method", |b| {
        b.iter(|| HttpMethod::parse(black_box("options")))
    });

    group.bench_function("database_driver_last", |b| {
        b.iter(|| DatabaseDriver::parse(black_box("FireBird")))
    });

    group.bench_function("content_type_header", |b| {
        b.iter(|| ContentType::from_header(black_box("application/json; charset=utf-8")))
    });

    group.finish();
}

criterion_group!(benches, bench_status_lookup, bench_string_parse);
criterion_main!(benches);
