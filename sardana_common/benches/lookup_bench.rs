//! Lookup benchmarks.
//!
//! Interface and classification queries run for every element on every
//! refresh; they must stay at hash/bitmask cost.

use criterion::{Criterion, criterion_group, criterion_main};
use sardana_common::data::{TypeDescriptor, normalize_type};
use sardana_common::element::ElementType;
use sardana_common::interface::InterfaceGraph;
use std::hint::black_box;

fn bench_interface_lookup(c: &mut Criterion) {
    let graph = InterfaceGraph::builtin().expect("builtin table");

    c.bench_function("interface_is_a", |b| {
        b.iter(|| black_box(graph.is_a(black_box("TwoDExpChannel"), black_box("Acquirable"))));
    });

    c.bench_function("interface_expand", |b| {
        b.iter(|| black_box(graph.expand(black_box("MacroClass"))));
    });

    c.bench_function("interface_graph_build", |b| {
        b.iter(|| black_box(InterfaceGraph::builtin()));
    });
}

fn bench_classification(c: &mut Criterion) {
    c.bench_function("element_is_acquirable_all", |b| {
        b.iter(|| {
            ElementType::ALL
                .iter()
                .filter(|t| black_box(**t).is_acquirable())
                .count()
        });
    });
}

fn bench_normalize(c: &mut Criterion) {
    let descriptor = TypeDescriptor::from("PyTango.DevVarDoubleArray");
    c.bench_function("normalize_type_tango_name", |b| {
        b.iter(|| black_box(normalize_type(black_box(&descriptor))));
    });
}

criterion_group!(
    benches,
    bench_interface_lookup,
    bench_classification,
    bench_normalize
);
criterion_main!(benches);
