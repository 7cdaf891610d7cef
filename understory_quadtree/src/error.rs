// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

use crate::types::Rectangle;

/// Errors raised while constructing geometry, configuration, or a tree.
///
/// Insertion and queries never fail: a point outside the boundary is reported by
/// [`QuadTree::insert`](crate::QuadTree::insert) returning `false`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The boundary is not a well-formed rectangle.
    #[error("boundary should be a finite rectangle with non-negative half extents, got {0:?}")]
    TypeMismatch(Rectangle),

    /// A numeric argument is not finite, or is negative where only non-negative values make sense.
    #[error("{name} should be a finite, non-negative number but is {value}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An integer argument lies outside its accepted range.
    #[error("{name} must be in {min}..={max} but is {value}")]
    RangeViolation {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value.
        value: usize,
        /// Smallest accepted value.
        min: usize,
        /// Largest accepted value.
        max: usize,
    },
}
