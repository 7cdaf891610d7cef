// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless quadtree visualizer.
//!
//! Scatter points in a Gaussian cluster over a 600×600 canvas, print the node outlines
//! a renderer would draw, then sweep a circular "cursor" across the canvas and report
//! how many points each query tested versus how many it found.
//!
//! Set `RUST_LOG=understory_quadtree=trace` to see subdivisions as they happen.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_visualize`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Circle, Point, QuadTree, Rectangle};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 600.0;
const POINTS: usize = 300;
const CURSOR_RADIUS: f64 = 64.0;

/// Normal sample via Box-Muller.
fn gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random_range(f64::EPSILON..1.0);
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (core::f64::consts::TAU * u2).cos();
    mean + z * std_dev
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let boundary = Rectangle::new(WIDTH / 2.0, HEIGHT / 2.0, WIDTH / 2.0, HEIGHT / 2.0);
    let mut tree = QuadTree::new(boundary, 4)?;

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut rejected = 0;
    for i in 0..POINTS {
        let x = gaussian(&mut rng, WIDTH / 2.0, WIDTH / 8.0);
        let y = gaussian(&mut rng, HEIGHT / 2.0, HEIGHT / 8.0);
        if !tree.insert(Point::with_data(x, y, i)) {
            rejected += 1;
        }
    }
    println!(
        "{} points stored, {} outside the canvas; {} nodes, height {}",
        tree.len(),
        rejected,
        tree.node_count(),
        tree.height()
    );

    // What a renderer draws: one outline per node, plus each node's own points.
    tree.walk(&mut |node| {
        let r = node.boundary().to_kurbo();
        let indent = "  ".repeat(usize::from(node.depth()));
        println!(
            "{indent}[{:>6.1},{:>6.1} .. {:>6.1},{:>6.1}] {} pts{}",
            r.x0,
            r.y0,
            r.x1,
            r.y1,
            node.points().len(),
            if node.is_divided() { " +" } else { "" }
        );
    });

    // Sweep the cursor along the diagonal.
    for step in 0..=6 {
        let t = f64::from(step) / 6.0;
        let cursor = Circle::new(t * WIDTH, t * HEIGHT, CURSOR_RADIUS);
        let result = tree.query(&cursor);
        println!(
            "cursor at ({:>5.1}, {:>5.1}): {:>3} found, {:>3} checks",
            cursor.x,
            cursor.y,
            result.len(),
            result.count
        );
    }

    Ok(())
}
