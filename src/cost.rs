// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! An unsigned cost that can also be infinite
//!
//! Shortest-path searches start every node other than the source at [Cost::Infinite], which
//! compares greater than any finite cost, so it never needs a sentinel value.
//!
//! # Example
//!
//! ```
//! use advent::cost::Cost;
//!
//! let mut best = Cost::Infinite;
//! assert!(Cost::Finite(u64::MAX) < best);
//! best = best.min(Cost::ZERO + 12);
//! assert_eq!(best.finite(), Some(12));
//! assert_eq!(Cost::Infinite + 5, Cost::Infinite);
//! ```

use std::fmt::{self, Display};
use std::ops::{Add, AddAssign};

/// A cost which is either finite, or greater than every finite value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Cost {
    /// A known cost
    Finite(u64),
    /// An unreached or unreachable cost
    #[default]
    Infinite,
}

impl Cost {
    /// The cost of not moving at all
    pub const ZERO: Cost = Cost::Finite(0);

    /// The finite value, if there is one
    pub const fn finite(self) -> Option<u64> {
        match self {
            Cost::Finite(n) => Some(n),
            Cost::Infinite => None,
        }
    }

    /// Whether the cost is [Cost::Infinite]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Cost::Infinite)
    }
}

impl From<u64> for Cost {
    fn from(n: u64) -> Self {
        Cost::Finite(n)
    }
}

impl Add<u64> for Cost {
    type Output = Cost;

    /// Overflowing a finite cost gives [Cost::Infinite]
    fn add(self, rhs: u64) -> Self::Output {
        match self {
            Cost::Finite(n) => n.checked_add(rhs).map_or(Cost::Infinite, Cost::Finite),
            Cost::Infinite => Cost::Infinite,
        }
    }
}

impl AddAssign<u64> for Cost {
    fn add_assign(&mut self, rhs: u64) {
        *self = *self + rhs;
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cost::Finite(n) => write!(f, "{n}"),
            Cost::Infinite => write!(f, "∞"),
        }
    }
}
