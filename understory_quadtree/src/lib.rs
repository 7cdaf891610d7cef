// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point quadtree over a bounded 2D region.
//!
//! Understory Quadtree answers "which stored points fall inside this shape?" without
//! scanning every point.
//!
//! - Store points (with an optional user payload) inside a fixed boundary rectangle.
//! - Nodes hold up to `capacity` points, then split once into four quadrants.
//! - Query with any [`Region`]: rectangles, circles, Kurbo shapes, or your own type.
//!   Subtrees whose boundary misses the region are skipped entirely.
//!
//! Rectangles are described by center and half extents. All containment tests are
//! closed, so points on a boundary match, and rectangles that only touch intersect.
//! Coordinates use screen orientation: `y` grows downward, so the "north" quadrants
//! are the ones with smaller `y`.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Circle, Point, QuadTree, Rectangle};
//!
//! // A 600×600 canvas, four points per node.
//! let boundary = Rectangle::new(300.0, 300.0, 300.0, 300.0);
//! let mut tree = QuadTree::new(boundary, 4).unwrap();
//!
//! for i in 0..100_u32 {
//!     let t = f64::from(i);
//!     assert!(tree.insert(Point::with_data(t * 6.0, 600.0 - t * 6.0, i)));
//! }
//! // Outside the boundary: rejected, nothing changes.
//! assert!(!tree.insert(Point::with_data(-1.0, 0.0, 100)));
//! assert_eq!(tree.len(), 100);
//!
//! // Every point within 30 units of the center.
//! let result = tree.query(&Circle::new(300.0, 300.0, 30.0));
//! assert_eq!(result.len(), 7);
//! // Far fewer points were tested than stored.
//! assert!(result.count < 100);
//! ```
//!
//! ## Inspecting the structure
//!
//! Renderers and debugging tools can walk the nodes read-only:
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, Quadrant, Rectangle};
//!
//! let mut tree = QuadTree::new(Rectangle::new(50.0, 50.0, 50.0, 50.0), 1).unwrap();
//! tree.insert(Point::new(10.0, 10.0));
//! tree.insert(Point::new(90.0, 10.0));
//!
//! assert!(tree.is_divided());
//! let ne = tree.child(Quadrant::NorthEast).unwrap();
//! assert_eq!(*ne.boundary(), Rectangle::new(75.0, 25.0, 25.0, 25.0));
//!
//! let mut outlines = Vec::new();
//! tree.walk(&mut |node| outlines.push(node.boundary().to_kurbo()));
//! assert_eq!(outlines.len(), 5);
//! ```
//!
//! ## Custom regions
//!
//! ```rust
//! use understory_quadtree::{Point, QuadTree, Rectangle, Region};
//!
//! /// Everything left of a vertical line.
//! struct LeftOf(f64);
//!
//! impl Region for LeftOf {
//!     fn contains_point(&self, x: f64, _y: f64) -> bool {
//!         x <= self.0
//!     }
//!     fn intersects(&self, rect: &Rectangle) -> bool {
//!         rect.left() <= self.0
//!     }
//! }
//!
//! let mut tree = QuadTree::new(Rectangle::new(0.0, 0.0, 10.0, 10.0), 2).unwrap();
//! tree.extend([Point::new(-5.0, 0.0), Point::new(5.0, 0.0), Point::new(0.0, 3.0)]);
//! assert_eq!(tree.query(&LeftOf(0.0)).len(), 2);
//! ```
//!
//! ## Depth limit
//!
//! Points that share coordinates can never be separated by splitting. Subdivision
//! stops at [`Config::max_depth`] (default 32); a node at that depth keeps every point
//! routed to it, even past its capacity.
//!
//! ## Logging
//!
//! Subdivision and depth-limit overflow are reported through [`tracing`] at `trace`
//! and `debug` level. Install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod query;
pub mod region;
pub mod tree;
pub mod types;

pub use config::Config;
pub use error::Error;
pub use query::QueryResult;
pub use region::Region;
pub use tree::{Iter, QuadTree};
pub use types::{Circle, Point, Quadrant, Quadrants, Rectangle};
