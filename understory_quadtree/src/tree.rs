// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The quadtree node: construction, subdivision, insertion, and region queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use tracing::{debug, trace};

use crate::config::Config;
use crate::error::Error;
use crate::query::QueryResult;
use crate::region::Region;
use crate::types::{Point, Quadrant, Rectangle};

/// A point quadtree node. The value returned by [`QuadTree::new`] is the root.
///
/// An undivided node buffers up to `capacity` points. The insertion that would exceed
/// the capacity splits the node into four quadrant children (once, irreversibly), moves
/// the buffered points down, and routes the new point the same way. Children are owned;
/// there are no parent links since every traversal runs root to leaf.
///
/// Points on an edge shared by several quadrants go to the first of them in
/// [`Quadrant::INSERT_ORDER`], so every stored point lives in exactly one node.
///
/// Far from the origin, rounding in the quadrant extents can leave a sliver along the
/// parent's edge that no child covers. A buffered point in that sliver stays in the
/// divided parent's [`points`](Self::points), and a later insert landing there returns
/// `false`.
pub struct QuadTree<D = ()> {
    boundary: Rectangle,
    capacity: usize,
    max_depth: u8,
    depth: u8,
    points: Vec<Point<D>>,
    // Indexed by `Quadrant::index`.
    children: Option<Box<[Self; 4]>>,
}

impl<D> QuadTree<D> {
    /// Create an empty tree covering `boundary` with the given node capacity.
    ///
    /// Uses [`Config::DEFAULT_MAX_DEPTH`] as the depth limit.
    ///
    /// # Errors
    ///
    /// - [`Error::TypeMismatch`] if `boundary` is not finite or has negative half extents.
    /// - [`Error::RangeViolation`] if `capacity` is zero.
    pub fn new(boundary: Rectangle, capacity: usize) -> Result<Self, Error> {
        Self::with_config(boundary, Config::new(capacity))
    }

    /// Create an empty tree covering `boundary` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// As [`QuadTree::new`], plus [`Error::RangeViolation`] for an unsupported depth limit.
    pub fn with_config(boundary: Rectangle, config: Config) -> Result<Self, Error> {
        if !boundary.is_well_formed() {
            return Err(Error::TypeMismatch(boundary));
        }
        config.validate()?;
        Ok(Self::node(boundary, config.capacity, config.max_depth, 0))
    }

    fn node(boundary: Rectangle, capacity: usize, max_depth: u8, depth: u8) -> Self {
        Self {
            boundary,
            capacity,
            max_depth,
            depth,
            points: Vec::new(),
            children: None,
        }
    }

    /// The region this node is responsible for.
    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    /// Buffer size that triggers subdivision.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Configuration shared by every node of this tree.
    pub fn config(&self) -> Config {
        Config {
            capacity: self.capacity,
            max_depth: self.max_depth,
        }
    }

    /// Distance from the root; the root is `0`.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Depth at which nodes stop subdividing.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Whether this node has split into four children.
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Points buffered directly in this node (not in its children).
    ///
    /// Empty for a divided node, except for points that rounding left outside every
    /// quadrant when the node split.
    pub fn points(&self) -> &[Point<D>] {
        &self.points
    }

    /// The child covering `quadrant`, if this node is divided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children
            .as_deref()
            .map(|children| &children[quadrant.index()])
    }

    /// The children in [`Quadrant::INSERT_ORDER`]; empty for an undivided node.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Self)> + '_ {
        Quadrant::INSERT_ORDER
            .into_iter()
            .filter_map(move |q| self.child(q).map(|c| (q, c)))
    }

    /// Total number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len() + self.children().map(|(_, c)| c.len()).sum::<usize>()
    }

    /// True if no point is stored in this subtree.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children().all(|(_, c)| c.is_empty())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().map(|(_, c)| c.node_count()).sum::<usize>()
    }

    /// Number of levels below this node; `0` for an undivided node.
    pub fn height(&self) -> usize {
        self.children()
            .map(|(_, c)| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    /// Visit this node and every descendant, parents before children, children in
    /// [`Quadrant::INSERT_ORDER`].
    ///
    /// This is how a renderer draws the tree: each node's boundary outline and buffered points.
    pub fn walk(&self, f: &mut impl FnMut(&Self)) {
        f(self);
        for (_, child) in self.children() {
            child.walk(f);
        }
    }

    /// Iterate over every point stored in this subtree, in [`QuadTree::walk`] order.
    pub fn iter(&self) -> Iter<'_, D> {
        Iter {
            stack: alloc::vec![self],
            current: core::slice::Iter::default(),
        }
    }

    /// Insert a point. Returns `false`, leaving the tree untouched, if the point lies
    /// outside this node's boundary.
    pub fn insert(&mut self, point: Point<D>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert a point, handing it back if it lies outside this node's boundary.
    pub fn try_insert(&mut self, point: Point<D>) -> Result<(), Point<D>> {
        let result = self.insert_node(point);
        if let Err(rejected) = &result {
            trace!(x = rejected.x, y = rejected.y, "point rejected");
        }
        result
    }

    fn insert_node(&mut self, point: Point<D>) -> Result<(), Point<D>> {
        if !self.boundary.contains(&point) {
            return Err(point);
        }

        if self.children.is_none() {
            if self.points.len() < self.capacity {
                self.points.push(point);
                return Ok(());
            }
            if self.depth >= self.max_depth {
                debug!(
                    depth = self.depth,
                    points = self.points.len() + 1,
                    capacity = self.capacity,
                    "depth limit reached, storing point beyond capacity"
                );
                self.points.push(point);
                return Ok(());
            }
            self.subdivide();
        }

        self.insert_into_children(point)
    }

    /// Offer `point` to the children whose boundary holds it, in insert order.
    fn insert_into_children(&mut self, point: Point<D>) -> Result<(), Point<D>> {
        let candidates = self.boundary.quadrants_containing(point.x, point.y);
        let Some(children) = self.children.as_deref_mut() else {
            return Err(point);
        };
        let mut point = point;
        for quadrant in Quadrant::INSERT_ORDER {
            if !candidates.contains(quadrant.into()) {
                continue;
            }
            match children[quadrant.index()].insert_node(point) {
                Ok(()) => return Ok(()),
                Err(rejected) => point = rejected,
            }
        }
        Err(point)
    }

    fn subdivide(&mut self) {
        let depth = self.depth + 1;
        let children = Quadrant::INSERT_ORDER.map(|q| {
            Self::node(
                self.boundary.quadrant(q),
                self.capacity,
                self.max_depth,
                depth,
            )
        });
        self.children = Some(Box::new(children));
        trace!(
            depth = self.depth,
            points = self.points.len(),
            "subdividing node"
        );

        let buffered = core::mem::take(&mut self.points);
        let mut stranded = Vec::new();
        for point in buffered {
            if let Err(point) = self.insert_into_children(point) {
                stranded.push(point);
            }
        }
        // Only possible when rounding opens a gap between quadrant edges. The points
        // stay here, where queries still reach them.
        if !stranded.is_empty() {
            debug!(
                depth = self.depth,
                stranded = stranded.len(),
                "points not accepted by any quadrant"
            );
            self.points = stranded;
        }
    }

    /// Collect every stored point inside `region`.
    ///
    /// Subtrees whose boundary does not intersect the region are skipped without
    /// testing any of their points.
    pub fn query<R: Region + ?Sized>(&self, region: &R) -> QueryResult<'_, D> {
        let mut found = Vec::new();
        let count = self.query_into(region, &mut found);
        QueryResult { found, count }
    }

    /// Append every stored point inside `region` to `found` and return the number of
    /// points tested.
    ///
    /// Reusing `found` across calls accumulates matches from several queries.
    pub fn query_into<'a, R: Region + ?Sized>(
        &'a self,
        region: &R,
        found: &mut Vec<&'a Point<D>>,
    ) -> usize {
        if !region.intersects(&self.boundary) {
            return 0;
        }

        let mut count = self.points.len();
        found.extend(
            self.points
                .iter()
                .filter(|p| region.contains_point(p.x, p.y)),
        );

        if let Some(children) = self.children.as_deref() {
            for quadrant in Quadrant::QUERY_ORDER {
                count += children[quadrant.index()].query_into(region, found);
            }
        }
        count
    }
}

impl<D> Debug for QuadTree<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary)
            .field("capacity", &self.capacity)
            .field("max_depth", &self.max_depth)
            .field("depth", &self.depth)
            .field("points", &self.points.len())
            .field("children", &self.children.is_some())
            .finish()
    }
}

impl<D> Extend<Point<D>> for QuadTree<D> {
    /// Insert every point; those outside the boundary are dropped.
    fn extend<I: IntoIterator<Item = Point<D>>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

impl<'a, D> IntoIterator for &'a QuadTree<D> {
    type Item = &'a Point<D>;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a subtree. See [`QuadTree::iter`].
pub struct Iter<'a, D> {
    stack: Vec<&'a QuadTree<D>>,
    current: core::slice::Iter<'a, Point<D>>,
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a Point<D>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(p) = self.current.next() {
                return Some(p);
            }
            let node = self.stack.pop()?;
            self.current = node.points.iter();
            if let Some(children) = node.children.as_deref() {
                // Reversed so the first quadrant is popped first.
                self.stack.extend(children.iter().rev());
            }
        }
    }
}

impl<D> Debug for Iter<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("pending_nodes", &self.stack.len())
            .field("current", &self.current.len())
            .finish()
    }
}
