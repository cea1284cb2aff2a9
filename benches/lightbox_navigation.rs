// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for portfolio loading and lightbox navigation.
//!
//! Measures the performance of:
//! - Directory scanning (building the gallery without a manifest)
//! - Navigation operations (next/previous/swipe)
//! - Counter formatting

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::config::SortOrder;
use iced_folio::gallery::{Gallery, Lightbox};
use std::fs;
use std::hint::black_box;

const PORTFOLIO_SIZE: usize = 500;
const SWIPE_THRESHOLD: f32 = 50.0;

/// Benchmark directory scanning performance.
///
/// Measures how long it takes to scan a portfolio directory and build the
/// ordered gallery.
fn bench_scan_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    for i in 0..PORTFOLIO_SIZE {
        fs::write(temp_dir.path().join(format!("photo_{i:04}.jpg")), b"fake")
            .expect("failed to write test file");
    }

    group.bench_function("scan_portfolio", |b| {
        b.iter(|| {
            let gallery = Gallery::load(temp_dir.path(), SortOrder::Alphabetical).unwrap();
            black_box(&gallery);
        });
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous/swipe).
///
/// Measures the pure state-machine time without any image loading.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let mut lightbox = Lightbox::new(PORTFOLIO_SIZE, SWIPE_THRESHOLD);
    lightbox.open(0);

    group.bench_function("show_next", |b| {
        b.iter(|| {
            let mut nav = lightbox.clone();
            nav.show_next();
            black_box(&nav);
        });
    });

    group.bench_function("show_prev", |b| {
        b.iter(|| {
            let mut nav = lightbox.clone();
            nav.show_prev();
            black_box(&nav);
        });
    });

    group.bench_function("handle_swipe", |b| {
        b.iter(|| {
            let mut nav = lightbox.clone();
            nav.handle_swipe(100.0, 40.0);
            black_box(&nav);
        });
    });

    group.finish();
}

/// Benchmark the counter formatting done on every render while open.
fn bench_counter_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("lightbox_navigation");

    let mut lightbox = Lightbox::new(PORTFOLIO_SIZE, SWIPE_THRESHOLD);
    lightbox.open(PORTFOLIO_SIZE / 2);

    group.bench_function("counter_text", |b| {
        b.iter(|| {
            black_box(lightbox.counter_text());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scan_portfolio,
    bench_navigate,
    bench_counter_text
);
criterion_main!(benches);
