// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::sync::Arc;
use typewalk::{Inspector, List, NullSink, Object, Value};

// ============================================================================
// Fixtures
// ============================================================================

/// Wide config-like document: 256 records with scalar and tuple fields.
fn wide_document() -> Value {
    Value::list((0..256i64).map(|i| {
        Value::map([
            ("id", Value::Int(i)),
            ("name", Value::from(format!("node-{}", i))),
            ("range", Value::pair(i, i + 1)),
            ("tags", Value::set(["a", "b"])),
        ])
    }))
}

/// Linked chain of objects, 128 levels deep.
fn deep_chain() -> Value {
    let mut node = Value::Null;
    for i in 0..128i64 {
        node = Object::new("Link")
            .with_attr("seq", i)
            .with_attr("next", node)
            .into();
    }
    node
}

/// Ring of lists where each one points at the next.
fn ring(len: usize) -> Value {
    let lists: Vec<List> = (0..len).map(|_| List::new()).collect();
    for (i, list) in lists.iter().enumerate() {
        list.push(lists[(i + 1) % len].clone());
    }
    Value::List(lists[0].clone())
}

fn quiet() -> Inspector {
    Inspector::builder().sink(Arc::new(NullSink)).build()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_wide_document(c: &mut Criterion) {
    let doc = wide_document();
    c.bench_function("inspect_wide_document", |b| {
        b.iter_batched(quiet, |mut insp| insp.inspect(black_box(&doc)), BatchSize::SmallInput)
    });
}

fn bench_deep_chain(c: &mut Criterion) {
    let chain = deep_chain();
    c.bench_function("inspect_deep_chain", |b| {
        b.iter_batched(quiet, |mut insp| insp.inspect(black_box(&chain)), BatchSize::SmallInput)
    });
}

fn bench_ring(c: &mut Criterion) {
    let value = ring(512);
    c.bench_function("inspect_ring_512", |b| {
        b.iter_batched(quiet, |mut insp| insp.inspect(black_box(&value)), BatchSize::SmallInput)
    });
}

fn bench_depth_bounded(c: &mut Criterion) {
    let doc = wide_document();
    c.bench_function("inspect_wide_document_max_depth_1", |b| {
        b.iter_batched(
            || Inspector::builder().max_depth(1).sink(Arc::new(NullSink)).build(),
            |mut insp| insp.inspect(black_box(&doc)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_wide_document,
    bench_deep_chain,
    bench_ring,
    bench_depth_bounded
);
criterion_main!(benches);
