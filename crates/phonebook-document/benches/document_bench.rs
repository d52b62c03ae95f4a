// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the phonebook-document crate: pagination of a
// large listing and full PDF generation for a conference-sized phonebook.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use phonebook_core::{Directory, Entry, PhonebookConfig};
use phonebook_document::layout::paginate;
use phonebook_document::{Logo, PageGeometry, PdfRenderer};

fn directory(n: usize) -> Directory {
    Directory::new(
        "Bench Camp",
        (0..n)
            .map(|i| Entry::new(format!("Participant {i:04}"), 1000 + i as i64))
            .collect(),
    )
}

fn bench_paginate(c: &mut Criterion) {
    let geometry = PageGeometry::default();
    c.bench_function("paginate (10k entries)", |b| {
        b.iter(|| black_box(paginate(&geometry, black_box(10_000))));
    });
}

/// Render 500 entries with a small synthetic logo on the cover page.
fn bench_pdf_render(c: &mut Criterion) {
    let dir = directory(500);
    let logo = Logo::from_dynamic(DynamicImage::ImageRgb8(RgbImage::from_pixel(
        64,
        32,
        Rgb([20, 80, 160]),
    )));
    let renderer = PdfRenderer::from_config(&PhonebookConfig::default());

    c.bench_function("pdf_render (500 entries)", |b| {
        b.iter(|| {
            let bytes = renderer.render(black_box(&dir), Some(&logo)).unwrap();
            black_box(bytes);
        });
    });
}

criterion_group!(benches, bench_paginate, bench_pdf_render);
criterion_main!(benches);
