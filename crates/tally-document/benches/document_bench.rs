// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the tally-document crate. Measures table layout
// alone and full PDF rendering of a product list large enough to paginate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use tally_document::ProductTableWriter;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn sample_rows(count: usize) -> Vec<[String; 3]> {
    (0..count)
        .map(|i| {
            [
                format!("{:013}", 4_006_381_333_931u64 + i as u64),
                format!("Sample product number {i} with a moderately long name"),
                ((i % 12) + 1).to_string(),
            ]
        })
        .collect()
}

fn header() -> [String; 3] {
    ["Barcode".into(), "Product Name".into(), "Quantity".into()]
}

/// Layout of 500 rows (about two dozen pages) without PDF serialisation.
fn bench_layout(c: &mut Criterion) {
    let writer = ProductTableWriter::a4();
    let rows = sample_rows(500);
    let header = header();

    c.bench_function("table layout (500 rows)", |b| {
        b.iter(|| {
            let pages = writer.layout("Product List", &header, black_box(&rows));
            black_box(pages.len());
        });
    });
}

/// Full render of the same list to PDF bytes.
fn bench_render(c: &mut Criterion) {
    let writer = ProductTableWriter::a4();
    let rows = sample_rows(500);
    let header = header();

    c.bench_function("table render (500 rows)", |b| {
        b.iter(|| {
            let bytes = writer
                .render("Product List", &header, black_box(&rows))
                .expect("latin table renders");
            black_box(bytes.len());
        });
    });
}

criterion_group!(benches, bench_layout, bench_render);
criterion_main!(benches);
