use crate::common::{chain_over, configure_criterion, DEPTHS};
use criterion::{criterion_group, BenchmarkId, Criterion};
use error_chainlink::{ErrorKind, ErrorNode};
use std::hint::black_box;

pub fn bench_node_creation(c: &mut Criterion) {
    c.bench_function("core/typed_node", |b| b.iter(|| black_box(ErrorNode::invalid_character())));

    c.bench_function("core/wrap_once", |b| {
        b.iter(|| black_box(ErrorNode::end_of_stream().wrap()))
    });

    c.bench_function("core/wrap_with_label", |b| {
        b.iter(|| black_box(ErrorNode::end_of_stream().wrap_with("reading frame")))
    });
}

pub fn bench_is(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/is");

    for depth in DEPTHS {
        let target = ErrorNode::sentinel("target");
        let hit = chain_over(target.clone(), depth);
        let miss = ErrorNode::sentinel("target");

        group.bench_with_input(BenchmarkId::new("hit", depth), &hit, |b, err| {
            b.iter(|| black_box(err.is(black_box(&target))))
        });
        group.bench_with_input(BenchmarkId::new("miss", depth), &hit, |b, err| {
            b.iter(|| black_box(err.is(black_box(&miss))))
        });
    }
    group.finish();
}

pub fn bench_find_kind(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/find_kind");

    for depth in DEPTHS {
        let err = chain_over(ErrorNode::end_of_stream(), depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(err.find_kind(black_box(ErrorKind::EndOfStream))))
        });
    }
    group.finish();
}

pub fn bench_unwrap_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/unwrap_walk");

    for depth in DEPTHS {
        let err = chain_over(ErrorNode::invalid_character(), depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(err.root_cause().id()))
        });
    }
    group.finish();
}

criterion_group! {
    name = core_benches;
    config = configure_criterion();
    targets =
        bench_node_creation,
        bench_is,
        bench_find_kind,
        bench_unwrap_walk,
}
