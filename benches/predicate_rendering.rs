//! Benchmarks for predicate construction and rendering.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use entgraph::prelude::*;
use std::hint::black_box;

/// Create an AND of `count` equality predicates.
fn create_and_pred(count: usize) -> Expr {
    let preds = (0..count).map(|i| field_eq(format!("field_{}", i), i as i64));
    and_all(preds).unwrap_or_else(|_| field_nil("field_0"))
}

/// Create a predicate nested `depth` levels deep.
fn create_nested_pred(depth: usize) -> Expr {
    if depth == 0 {
        field_eq("leaf", true)
    } else {
        and(
            or(create_nested_pred(depth - 1), field_eq("check", depth as i64)),
            not(field_eq("deleted", true)),
        )
    }
}

/// Create a multi-hop edge predicate.
fn create_edge_pred(hops: usize) -> Expr {
    (0..hops).fold(field_contains_fold("name", "a8m"), |inner, i| {
        has_edge_with(format!("edge_{}", i), [inner, field_not_nil("id")])
    })
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate_construction");

    group.bench_function("field_eq", |b| b.iter(|| black_box(field_eq("name", "a8m"))));

    group.bench_function("typed_bind", |b| {
        let p = IntP::gt(18).and(IntP::lt(65));
        b.iter(|| black_box(p.field("age")))
    });

    group.bench_function("and_10", |b| b.iter(|| black_box(create_and_pred(10))));

    group.bench_function("nested_depth_5", |b| b.iter(|| black_box(create_nested_pred(5))));

    group.bench_function("edge_3_hops", |b| b.iter(|| black_box(create_edge_pred(3))));

    group.bench_function("negate", |b| {
        let p = create_nested_pred(3);
        b.iter(|| black_box(p.negate()))
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicate_rendering");

    for size in [2, 10, 100].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let p = create_and_pred(*size);
        group.bench_with_input(BenchmarkId::new("and", size), &p, |b, p| {
            b.iter(|| black_box(p.to_string()))
        });

        let values: Vec<i64> = (0..*size as i64).collect();
        let p = field_in("id", values);
        group.bench_with_input(BenchmarkId::new("in_list", size), &p, |b, p| {
            b.iter(|| black_box(p.to_string()))
        });
    }

    let p = create_nested_pred(5);
    group.bench_function("nested_depth_5", |b| b.iter(|| black_box(p.to_string())));

    let p = create_edge_pred(3);
    group.bench_function("edge_3_hops", |b| b.iter(|| black_box(p.to_string())));

    group.finish();
}

criterion_group!(benches, bench_construction, bench_rendering);
criterion_main!(benches);
