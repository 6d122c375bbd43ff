use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gexf_timeline::{compute_snapshots, parse};

/// Dynamic document with `size` nodes, each with two spells, and a chain of edges
fn dynamic_document(size: usize) -> String {
    let mut doc = String::from(r#"<gexf version="1.2"><graph mode="dynamic" timeformat="double"><nodes>"#);
    for i in 0..size {
        let t = (i % 50) as f64;
        doc.push_str(&format!(
            r#"<node id="{i}" label="Node{i}"><spells><spell start="{}" end="{}"/><spell start="{}"/></spells></node>"#,
            t,
            t + 5.0,
            t + 20.0
        ));
    }
    doc.push_str("</nodes><edges>");
    for i in 1..size {
        doc.push_str(&format!(
            r#"<edge id="e{i}" source="{}" target="{i}" start="{}" end="{}"/>"#,
            i - 1,
            (i % 30) as f64,
            (i % 30) as f64 + 10.0
        ));
    }
    doc.push_str("</edges></graph></gexf>");
    doc
}

/// Benchmark document parsing and assembly
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1000, 10_000].iter() {
        let doc = dynamic_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| parse(doc).unwrap());
        });
    }
    group.finish();
}

/// Benchmark timeline reconstruction on an assembled graph
fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshots");

    for size in [100, 1000, 10_000].iter() {
        let graph = parse(&dynamic_document(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| compute_snapshots(graph).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_snapshots);
criterion_main!(benches);
