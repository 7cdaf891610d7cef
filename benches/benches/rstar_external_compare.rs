// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Circle, Point, QuadTree, Rectangle};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let px = x as f64 * cell + 0.5 * cell;
            let py = y as f64 * cell + 0.5 * cell;
            out.push(Point::with_data(px, py, (y * n + x) as u32));
        }
    }
    out
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[64usize, 128] {
        let cell = 10.0;
        let half = n as f64 * cell / 2.0;
        let boundary = Rectangle::new(half, half, half, half);
        let points = gen_grid_points(n, cell);
        let circle = Circle::new(half * 0.6, half * 1.3, 40.0);
        let rect = Rectangle::new(half * 0.6, half * 1.3, 40.0, 40.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(boundary, 8).unwrap(),
                |mut tree| {
                    tree.extend(points.iter().copied());
                    let hits = tree.query(&circle).len() + tree.query(&rect).len();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let envelope = AABB::from_corners(
                        [rect.left(), rect.top()],
                        [rect.right(), rect.bottom()],
                    );
                    let hits = tree
                        .locate_within_distance([circle.x, circle.y], circle.radius * circle.radius)
                        .count()
                        + tree.locate_in_envelope(&envelope).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
