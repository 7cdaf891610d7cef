// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Circle, Config, Point, QuadTree, Rectangle};

const CANVAS: Rectangle = Rectangle::new(1000.0, 1000.0, 1000.0, 1000.0);

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
    /// Approximately normal (Irwin-Hall with four terms), mean 0, std dev 1.
    fn next_gaussian(&mut self) -> f64 {
        let s: f64 = (0..4).map(|_| self.next_f64()).sum();
        (s - 2.0) * 3.0_f64.sqrt()
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| Point::with_data(rng.next_f64() * 2000.0, rng.next_f64() * 2000.0, i as u32))
        .collect()
}

fn gen_clustered_points(count: usize, spread: f64) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    (0..count)
        .map(|i| {
            let x = (1000.0 + rng.next_gaussian() * spread).clamp(0.0, 2000.0);
            let y = (1000.0 + rng.next_gaussian() * spread).clamp(0.0, 2000.0);
            Point::with_data(x, y, i as u32)
        })
        .collect()
}

fn build(points: &[Point<u32>], capacity: usize) -> QuadTree<u32> {
    let mut tree = QuadTree::with_config(CANVAS, Config::new(capacity)).unwrap();
    tree.extend(points.iter().copied());
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 16] {
            group.bench_function(format!("uniform_n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || QuadTree::with_config(CANVAS, Config::new(capacity)).unwrap(),
                    |mut tree| {
                        for p in points.iter().copied() {
                            let _ = tree.insert(p);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    let points = gen_clustered_points(10_000, 120.0);
    group.bench_function("clustered_n10000_cap4", |b| {
        b.iter_batched(
            || QuadTree::with_config(CANVAS, Config::new(4)).unwrap(),
            |mut tree| {
                tree.extend(points.iter().copied());
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_query_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_vs_scan");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        let tree = build(&points, 8);
        let circle = Circle::new(800.0, 1200.0, 64.0);
        let rect = Rectangle::new(800.0, 1200.0, 64.0, 64.0);

        group.bench_function(format!("circle_tree_n{}", n), |b| {
            b.iter(|| black_box(tree.query(black_box(&circle)).len()))
        });
        group.bench_function(format!("circle_scan_n{}", n), |b| {
            b.iter(|| {
                let c = black_box(&circle);
                black_box(points.iter().filter(|p| c.contains_point(p.x, p.y)).count())
            })
        });
        group.bench_function(format!("rect_tree_n{}", n), |b| {
            b.iter(|| black_box(tree.query(black_box(&rect)).len()))
        });
        group.bench_function(format!("rect_scan_n{}", n), |b| {
            b.iter(|| {
                let r = black_box(&rect);
                black_box(points.iter().filter(|p| r.contains_point(p.x, p.y)).count())
            })
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_heavy");
    let points = gen_clustered_points(20_000, 250.0);
    let tree = build(&points, 8);
    group.bench_function("moving_cursor_256_queries_reused_buffer", |b| {
        let mut found = Vec::new();
        b.iter(|| {
            let mut checks = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * 125.0;
                let y = (q / 16) as f64 * 125.0;
                found.clear();
                checks += tree.query_into(&Circle::new(x, y, 64.0), &mut found);
            }
            black_box(checks);
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_query_vs_scan,
    bench_query_heavy
);
criterion_main!(benches);
