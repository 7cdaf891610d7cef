// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree configuration.

use crate::error::Error;

/// Parameters shared by every node of a [`QuadTree`](crate::QuadTree).
///
/// Children inherit the configuration of their parent unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Maximum number of points an undivided node holds before it subdivides.
    pub capacity: usize,
    /// Depth below the root at which nodes stop subdividing.
    ///
    /// A node at this depth keeps every point routed to it, beyond `capacity` if
    /// needed. This bounds the tree when many points share coordinates.
    pub max_depth: u8,
}

impl Config {
    /// Capacity used by [`Config::default`].
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Depth limit used by [`Config::default`] and [`Config::new`].
    pub const DEFAULT_MAX_DEPTH: u8 = 32;

    /// Largest accepted `max_depth`.
    ///
    /// Beyond this, quadrant extents of any practical boundary fall below `f64` resolution.
    pub const MAX_SUPPORTED_DEPTH: u8 = 64;

    /// A configuration with the given capacity and the default depth limit.
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the depth limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check that `capacity >= 1` and `max_depth <= MAX_SUPPORTED_DEPTH`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.capacity < 1 {
            return Err(Error::RangeViolation {
                name: "capacity",
                value: self.capacity,
                min: 1,
                max: usize::MAX,
            });
        }
        if self.max_depth > Self::MAX_SUPPORTED_DEPTH {
            return Err(Error::RangeViolation {
                name: "max_depth",
                value: usize::from(self.max_depth),
                min: 0,
                max: usize::from(Self::MAX_SUPPORTED_DEPTH),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.max_depth, 32);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_capacity_is_out_of_range() {
        assert!(matches!(
            Config::new(0).validate(),
            Err(Error::RangeViolation {
                name: "capacity",
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn depth_limit_is_bounded() {
        assert_eq!(Config::new(1).with_max_depth(0).validate(), Ok(()));
        assert_eq!(Config::new(1).with_max_depth(64).validate(), Ok(()));
        assert!(matches!(
            Config::new(1).with_max_depth(65).validate(),
            Err(Error::RangeViolation {
                name: "max_depth",
                value: 65,
                ..
            })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_fills_missing_fields_with_defaults() {
        let config = Config::new(16).with_max_depth(8);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);

        let partial: Config = serde_json::from_str(r#"{"capacity": 2}"#).unwrap();
        assert_eq!(partial.capacity, 2);
        assert_eq!(partial.max_depth, Config::DEFAULT_MAX_DEPTH);
    }
}
