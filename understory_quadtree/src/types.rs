// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: points, center/half-extent rectangles, circles, and quadrant naming.
//!
//! All containment tests are closed (boundary-inclusive). Coordinates follow screen
//! convention: `y` grows downward, so "north" is the half with the smaller `y`.

use crate::error::Error;

/// A 2D point carrying an opaque user payload.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<D = ()> {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate (grows downward).
    pub y: f64,
    /// User payload.
    pub data: D,
}

impl Point {
    /// Create a point without a payload.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, data: () }
    }
}

impl<D> Point<D> {
    /// Create a point carrying `data`.
    pub const fn with_data(x: f64, y: f64, data: D) -> Self {
        Self { x, y, data }
    }

    /// The coordinates as a Kurbo point.
    pub const fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// Axis-aligned rectangle described by its center and half extents.
///
/// The full width is `2 * half_width`. Both half extents are expected to be
/// non-negative; use [`Rectangle::try_new`] to validate untrusted input.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Half of the width.
    pub half_width: f64,
    /// Half of the height.
    pub half_height: f64,
}

impl Rectangle {
    /// Create a rectangle from its center and half extents. No validation is performed.
    pub const fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Self {
        Self {
            x,
            y,
            half_width,
            half_height,
        }
    }

    /// Create a rectangle, rejecting non-finite values and negative half extents.
    pub fn try_new(x: f64, y: f64, half_width: f64, half_height: f64) -> Result<Self, Error> {
        finite("x", x)?;
        finite("y", y)?;
        finite_non_negative("half_width", half_width)?;
        finite_non_negative("half_height", half_height)?;
        Ok(Self::new(x, y, half_width, half_height))
    }

    /// Create a rectangle spanning two opposite corners, in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(
            0.5 * (x0 + x1),
            0.5 * (y0 + y1),
            0.5 * (x1 - x0).abs(),
            0.5 * (y1 - y0).abs(),
        )
    }

    /// Whether all fields are finite and both half extents are non-negative.
    pub fn is_well_formed(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.half_width.is_finite()
            && self.half_height.is_finite()
            && self.half_width >= 0.0
            && self.half_height >= 0.0
    }

    /// Left edge.
    #[inline]
    pub fn left(&self) -> f64 {
        self.x - self.half_width
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.half_width
    }

    /// Top edge (smaller `y`).
    #[inline]
    pub fn top(&self) -> f64 {
        self.y - self.half_height
    }

    /// Bottom edge (larger `y`).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.half_height
    }

    /// Full width.
    #[inline]
    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    /// Full height.
    #[inline]
    pub fn height(&self) -> f64 {
        2.0 * self.half_height
    }

    /// Whether `(x, y)` lies inside or on the boundary.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    /// Whether the point's coordinates lie inside or on the boundary.
    #[inline]
    pub fn contains<D>(&self, point: &Point<D>) -> bool {
        self.contains_point(point.x, point.y)
    }

    /// Whether the two rectangles overlap. Touching edges or corners count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.left() > self.right()
            || other.right() < self.left()
            || other.top() > self.bottom()
            || other.bottom() < self.top())
    }

    /// The quarter of this rectangle named by `quadrant`.
    ///
    /// Half extents are halved and the center moves by the new half extents, so the
    /// four quadrants tile `self` and share only their inner edges.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let w = self.half_width / 2.0;
        let h = self.half_height / 2.0;
        let (x, y) = match quadrant {
            Quadrant::NorthEast => (self.x + w, self.y - h),
            Quadrant::NorthWest => (self.x - w, self.y - h),
            Quadrant::SouthEast => (self.x + w, self.y + h),
            Quadrant::SouthWest => (self.x - w, self.y + h),
        };
        Self::new(x, y, w, h)
    }

    /// The quadrants whose closed boundary contains `(x, y)`.
    ///
    /// Points on an inner edge belong to two quadrants; the center belongs to all four.
    pub fn quadrants_containing(&self, x: f64, y: f64) -> Quadrants {
        let mut set = Quadrants::empty();
        for quadrant in Quadrant::INSERT_ORDER {
            if self.quadrant(quadrant).contains_point(x, y) {
                set |= Quadrants::from(quadrant);
            }
        }
        set
    }

    /// Convert to a Kurbo rectangle (min/max corners).
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }
}

impl From<kurbo::Rect> for Rectangle {
    fn from(r: kurbo::Rect) -> Self {
        Self::from_corners(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<Rectangle> for kurbo::Rect {
    fn from(r: Rectangle) -> Self {
        r.to_kurbo()
    }
}

/// A circular region.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Radius, expected to be non-negative.
    pub radius: f64,
}

impl Circle {
    /// Create a circle. No validation is performed.
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }

    /// Create a circle, rejecting non-finite values and a negative radius.
    pub fn try_new(x: f64, y: f64, radius: f64) -> Result<Self, Error> {
        finite("x", x)?;
        finite("y", y)?;
        finite_non_negative("radius", radius)?;
        Ok(Self::new(x, y, radius))
    }

    #[inline]
    fn radius_squared(&self) -> f64 {
        self.radius * self.radius
    }

    /// Whether `(x, y)` lies inside or on the circle.
    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.radius_squared()
    }

    /// Whether the point's coordinates lie inside or on the circle.
    #[inline]
    pub fn contains<D>(&self, point: &Point<D>) -> bool {
        self.contains_point(point.x, point.y)
    }

    /// Whether the circle overlaps `rect`, boundary contact included.
    pub fn intersects(&self, rect: &Rectangle) -> bool {
        let dx = (rect.x - self.x).abs();
        let dy = (rect.y - self.y).abs();
        let w = rect.half_width;
        let h = rect.half_height;

        if dx > self.radius + w || dy > self.radius + h {
            return false;
        }
        // The center projects onto the rectangle's span on at least one axis.
        if dx <= w || dy <= h {
            return true;
        }
        // Otherwise the nearest feature is a corner.
        let cx = dx - w;
        let cy = dy - h;
        cx * cx + cy * cy <= self.radius_squared()
    }

    /// The smallest rectangle enclosing the circle.
    pub const fn bounding_rect(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.radius, self.radius)
    }

    /// Convert to a Kurbo circle.
    pub const fn to_kurbo(&self) -> kurbo::Circle {
        kurbo::Circle {
            center: kurbo::Point::new(self.x, self.y),
            radius: self.radius,
        }
    }
}

impl From<kurbo::Circle> for Circle {
    fn from(c: kurbo::Circle) -> Self {
        Self::new(c.center.x, c.center.y, c.radius)
    }
}

impl From<Circle> for kurbo::Circle {
    fn from(c: Circle) -> Self {
        c.to_kurbo()
    }
}

/// One of the four children of a subdivided node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// `+x`, `-y`.
    NorthEast,
    /// `-x`, `-y`.
    NorthWest,
    /// `+x`, `+y`.
    SouthEast,
    /// `-x`, `+y`.
    SouthWest,
}

impl Quadrant {
    /// Order in which insertion offers a point to the children. The first child that
    /// accepts wins, so this also settles ownership of points on shared edges.
    pub const INSERT_ORDER: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Order in which queries descend into the children.
    pub const QUERY_ORDER: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Slot of this quadrant in a node's child array (insert order).
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::NorthEast => 0,
            Self::NorthWest => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
        }
    }
}

bitflags::bitflags! {
    /// A set of quadrants.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// See [`Quadrant::NorthEast`].
        const NORTH_EAST = 0b0000_0001;
        /// See [`Quadrant::NorthWest`].
        const NORTH_WEST = 0b0000_0010;
        /// See [`Quadrant::SouthEast`].
        const SOUTH_EAST = 0b0000_0100;
        /// See [`Quadrant::SouthWest`].
        const SOUTH_WEST = 0b0000_1000;
    }
}

impl From<Quadrant> for Quadrants {
    fn from(q: Quadrant) -> Self {
        match q {
            Quadrant::NorthEast => Self::NORTH_EAST,
            Quadrant::NorthWest => Self::NORTH_WEST,
            Quadrant::SouthEast => Self::SOUTH_EAST,
            Quadrant::SouthWest => Self::SOUTH_WEST,
        }
    }
}

fn finite(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidArgument { name, value })
    }
}

fn finite_non_negative(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument { name, value })
    }
}
