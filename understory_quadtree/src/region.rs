// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query shapes.
//!
//! A [`Region`] answers two questions: does it contain a coordinate, and does it
//! overlap a node boundary. [`QuadTree::query`](crate::QuadTree::query) only needs
//! those two, so any shape implementing the trait can drive a query. Implementations
//! are provided for [`Rectangle`], [`Circle`], and the Kurbo [`Rect`](kurbo::Rect) and
//! [`Circle`](kurbo::Circle) shapes.
//!
//! `intersects` may be conservative (report overlap where there is none) at the cost
//! of extra containment checks; it must never report a miss for an overlapping node,
//! or matching points under that node are skipped.

use alloc::boxed::Box;

use crate::types::{Circle, Rectangle};

/// A shape usable as a query region.
pub trait Region {
    /// Whether `(x, y)` lies inside the region.
    fn contains_point(&self, x: f64, y: f64) -> bool;

    /// Whether the region overlaps `rect`.
    fn intersects(&self, rect: &Rectangle) -> bool;
}

impl Region for Rectangle {
    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        Self::contains_point(self, x, y)
    }

    #[inline]
    fn intersects(&self, rect: &Self) -> bool {
        Self::intersects(self, rect)
    }
}

impl Region for Circle {
    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        Self::contains_point(self, x, y)
    }

    #[inline]
    fn intersects(&self, rect: &Rectangle) -> bool {
        Self::intersects(self, rect)
    }
}

/// Closed on all edges, unlike [`kurbo::Rect::contains`], which excludes the far edges.
impl Region for kurbo::Rect {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        let r = self.abs();
        x >= r.x0 && x <= r.x1 && y >= r.y0 && y <= r.y1
    }

    fn intersects(&self, rect: &Rectangle) -> bool {
        let r = self.abs();
        !(rect.left() > r.x1 || rect.right() < r.x0 || rect.top() > r.y1 || rect.bottom() < r.y0)
    }
}

impl Region for kurbo::Circle {
    fn contains_point(&self, x: f64, y: f64) -> bool {
        Circle::from(*self).contains_point(x, y)
    }

    fn intersects(&self, rect: &Rectangle) -> bool {
        Circle::from(*self).intersects(rect)
    }
}

impl<R: Region + ?Sized> Region for &R {
    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        (**self).contains_point(x, y)
    }

    #[inline]
    fn intersects(&self, rect: &Rectangle) -> bool {
        (**self).intersects(rect)
    }
}

impl<R: Region + ?Sized> Region for Box<R> {
    #[inline]
    fn contains_point(&self, x: f64, y: f64) -> bool {
        (**self).contains_point(x, y)
    }

    #[inline]
    fn intersects(&self, rect: &Rectangle) -> bool {
        (**self).intersects(rect)
    }
}
