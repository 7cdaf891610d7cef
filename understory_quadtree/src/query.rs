// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region query results returned by [`QuadTree::query`](crate::QuadTree::query).

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Point;

/// Points found by a region query, plus the number of containment checks it took.
pub struct QueryResult<'a, D> {
    /// Matching points, borrowed from the tree.
    ///
    /// Order follows the traversal (node buffer first, then children north-west,
    /// north-east, south-west, south-east) and is not otherwise meaningful.
    pub found: Vec<&'a Point<D>>,
    /// Number of stored points tested against the region.
    ///
    /// Equals the number of points held by nodes whose boundary, and every
    /// ancestor's boundary, intersects the region. Useful for measuring pruning.
    pub count: usize,
}

impl<'a, D> QueryResult<'a, D> {
    /// Number of matches.
    pub fn len(&self) -> usize {
        self.found.len()
    }

    /// True if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    /// Iterate over the matches.
    pub fn iter(&self) -> impl Iterator<Item = &'a Point<D>> + '_ {
        self.found.iter().copied()
    }
}

impl<D> Debug for QueryResult<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QueryResult")
            .field("found", &self.found.len())
            .field("count", &self.count)
            .finish()
    }
}

impl<'a, D> IntoIterator for QueryResult<'a, D> {
    type Item = &'a Point<D>;
    type IntoIter = alloc::vec::IntoIter<&'a Point<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.found.into_iter()
    }
}
