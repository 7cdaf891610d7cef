// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a few labelled points, query with a rectangle, a circle, and a Kurbo shape,
//! and show that out-of-bounds points are rejected.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`

use understory_quadtree::{Circle, Point, QuadTree, Rectangle};

fn main() -> anyhow::Result<()> {
    let boundary = Rectangle::new(50.0, 50.0, 50.0, 50.0);
    let mut tree = QuadTree::new(boundary, 2)?;

    for (x, y, label) in [
        (10.0, 10.0, "a"),
        (20.0, 15.0, "b"),
        (80.0, 20.0, "c"),
        (50.0, 50.0, "center"),
        (90.0, 90.0, "d"),
    ] {
        assert!(tree.insert(Point::with_data(x, y, label)));
    }
    let outside = tree.insert(Point::with_data(120.0, 10.0, "outside"));
    println!(
        "inserted {} points, out-of-bounds accepted: {}",
        tree.len(),
        outside
    );
    println!("nodes: {}, height: {}", tree.node_count(), tree.height());

    let rect = Rectangle::new(15.0, 15.0, 10.0, 10.0);
    let hits = tree.query(&rect);
    let labels: Vec<_> = hits.iter().map(|p| p.data).collect();
    println!("rect {:?}: {:?} ({} checks)", rect, labels, hits.count);

    let circle = Circle::new(50.0, 50.0, 0.0);
    let hits = tree.query(&circle);
    let labels: Vec<_> = hits.iter().map(|p| p.data).collect();
    println!("zero-radius circle at the center: {:?}", labels);
    assert_eq!(labels, ["center"]);

    // Kurbo shapes work as query regions too.
    let hits = tree.query(&kurbo::Rect::new(60.0, 0.0, 100.0, 100.0));
    let labels: Vec<_> = hits.iter().map(|p| p.data).collect();
    println!("kurbo rect (60,0)-(100,100): {:?}", labels);

    Ok(())
}
