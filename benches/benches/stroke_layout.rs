// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use plotview_font::{HAlign, LayoutOptions, StrokeFont, VAlign};

const SAMPLES: &[(&str, &str)] = &[
    ("label", "U3"),
    ("value", "4.7uF 16V"),
    ("sentence", "The quick brown fox jumps over the lazy dog 0123456789"),
];

fn bench_layout(c: &mut Criterion) {
    let font = StrokeFont::default();
    let mut group = c.benchmark_group("stroke_layout");

    for &(name, text) in SAMPLES {
        group.throughput(Throughput::Elements(text.len() as u64));

        let plain = LayoutOptions::default().with_square_cells(10.0);
        group.bench_function(BenchmarkId::new("plain", name), |b| {
            b.iter(|| black_box(font.layout(black_box(text), Point::ORIGIN, &plain)));
        });

        let quarter = plain
            .clone()
            .with_align(HAlign::Center, VAlign::Center)
            .with_rotation(90.0);
        group.bench_function(BenchmarkId::new("centered_quarter_turn", name), |b| {
            b.iter(|| black_box(font.layout(black_box(text), Point::new(50.0, 50.0), &quarter)));
        });

        let tilted = plain.clone().with_mirror(false, true).with_rotation(30.0);
        group.bench_function(BenchmarkId::new("mirrored_tilted", name), |b| {
            b.iter(|| black_box(font.layout(black_box(text), Point::ORIGIN, &tilted)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
