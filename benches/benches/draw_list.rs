// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use plotview_scene::{PrimitiveDesc, Scene};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Mixed shapes scattered over a square `extent` wide, a fraction of them
/// beyond the default depth cutoff.
fn populate(n: usize, extent: f64) -> Scene {
    let mut scene = Scene::default();
    let mut rng = Rng::new(0x5eed_1234_abcd_0001);
    for i in 0..n {
        let p = Point::new(rng.next_f64() * extent, rng.next_f64() * extent);
        let z = rng.next_f64() * 3.0;
        let desc = match i % 4 {
            0 => PrimitiveDesc::circle(p, 5.0 + rng.next_f64() * 20.0),
            1 => PrimitiveDesc::rectangle(p, 20.0, 10.0, rng.next_f64() * 360.0),
            2 => PrimitiveDesc::line(p, 40.0, rng.next_f64() * 360.0),
            _ => PrimitiveDesc::text(p, "R12 10k", 8.0, 0.0),
        };
        scene
            .add_primitive(desc.with_z(z))
            .expect("generated primitives are valid");
    }
    scene
}

fn bench_draw_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_list");
    for &n in &[1_000_usize, 10_000, 50_000] {
        let scene = populate(n, 5_000.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("home_view", n), |b| {
            b.iter(|| black_box(scene.build_draw_list().len()));
        });

        let mut zoomed = scene.clone();
        zoomed.zoom_in();
        zoomed.zoom_in();
        zoomed.pan(Vec2::new(2_000.0, 2_000.0));
        group.bench_function(BenchmarkId::new("zoomed_in", n), |b| {
            b.iter(|| black_box(zoomed.build_draw_list().len()));
        });
    }
    group.finish();
}

fn bench_frame_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_all");
    for &n in &[1_000_usize, 10_000] {
        let scene = populate(n, 50_000.0);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter_batched_ref(
                || scene.clone(),
                |s| {
                    s.frame_all();
                    black_box(s.camera().zoom());
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw_list, bench_frame_all);
criterion_main!(benches);
