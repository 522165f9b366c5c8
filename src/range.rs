//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Closed interval value type.

use crate::discrete::Discrete;
use crate::result::{RangetreeError, RangetreeResult};
use std::fmt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

/// An immutable closed interval `[low, high]` over a discrete domain.
///
/// The constructor guarantees `low <= high`, so an `Interval` always covers at least one value.
///
/// # Examples
///
/// ```rust
/// use rangetree::Interval;
///
/// let interval = Interval::new(5, 10).unwrap();
/// assert_eq!(interval.size(), 6);
/// assert!(interval.contains(7));
/// assert!(Interval::new(10, 5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interval<T> {
    low: T,
    high: T,
}

impl<T: Discrete> Interval<T> {
    /// Creates the interval `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`RangetreeError::InvalidRange`] when `high < low`.
    pub fn new(low: T, high: T) -> RangetreeResult<Self> {
        if high < low {
            return Err(RangetreeError::invalid_range(low, high));
        }
        Ok(Interval { low, high })
    }

    /// Creates the single-value interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Interval {
            low: value,
            high: value,
        }
    }

    /// Builds a closed interval from any Rust range expression.
    ///
    /// Unbounded sides extend to the edge of the domain and exclusive ends are stepped
    /// inward by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangetree::Interval;
    ///
    /// assert_eq!(Interval::from_bounds(2u8..5).unwrap(), Interval::new(2, 4).unwrap());
    /// assert_eq!(Interval::from_bounds(2u8..=5).unwrap(), Interval::new(2, 5).unwrap());
    /// assert_eq!(Interval::from_bounds(250u8..).unwrap(), Interval::new(250, 255).unwrap());
    /// assert_eq!(Interval::<u8>::from_bounds(..).unwrap(), Interval::new(0, 255).unwrap());
    /// assert!(Interval::from_bounds(5u8..5).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RangetreeError::InvalidRange`] when the expression covers no values.
    pub fn from_bounds<R: RangeBounds<T>>(range_bounds: R) -> RangetreeResult<Self> {
        let start = match range_bounds.start_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.successor(),
            Bound::Unbounded => Some(T::MIN),
        };
        let end = match range_bounds.end_bound() {
            Bound::Included(&n) => Some(n),
            Bound::Excluded(&n) => n.predecessor(),
            Bound::Unbounded => Some(T::MAX),
        };

        match (start, end) {
            (Some(low), Some(high)) => Self::new(low, high),
            // Excluding the domain edge leaves nothing on that side.
            _ => Err(RangetreeError::invalid_range(
                bound_value(range_bounds.start_bound(), T::MIN),
                bound_value(range_bounds.end_bound(), T::MAX),
            )),
        }
    }

    /// Creates `[low, high]` from endpoints the caller has already ordered.
    #[inline]
    pub(crate) fn from_ordered(low: T, high: T) -> Self {
        debug_assert!(low <= high);
        Interval { low, high }
    }

    /// Returns the low endpoint.
    #[inline]
    pub fn low(&self) -> T {
        self.low
    }

    /// Returns the high endpoint.
    #[inline]
    pub fn high(&self) -> T {
        self.high
    }

    /// Returns `true` if `value` lies within the interval.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if every value of `other` lies within `self`.
    ///
    /// An interval contains itself.
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.low >= self.low && other.high <= self.high
    }

    /// Returns `true` if the two intervals share at least one value.
    ///
    /// ```rust
    /// use rangetree::Interval;
    ///
    /// let a = Interval::new(5, 10).unwrap();
    /// assert!(a.overlaps(&Interval::new(10, 12).unwrap()));
    /// assert!(!a.overlaps(&Interval::new(11, 15).unwrap()));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Returns `true` if the intervals are disjoint but leave no gap between them,
    /// i.e. one's low is the other's high plus one.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.high.successor() == Some(other.low) || other.high.successor() == Some(self.low)
    }

    /// Returns the number of values covered by the interval.
    ///
    /// The count is exact even for an interval spanning an entire 64-bit domain.
    #[inline]
    pub fn size(&self) -> u128 {
        T::span(self.low, self.high)
    }
}

/// Returns `true` if a range ending at `high` and a range starting at `low` leave no gap
/// between them, where `low` is not below the start of the first range.
#[inline]
pub(crate) fn touches<T: Discrete>(high: T, low: T) -> bool {
    match high.successor() {
        Some(next) => low <= next,
        // Nothing can start above the domain maximum.
        None => true,
    }
}

fn bound_value<T: Copy>(bound: Bound<&T>, unbounded: T) -> T {
    match bound {
        Bound::Included(&n) | Bound::Excluded(&n) => n,
        Bound::Unbounded => unbounded,
    }
}

impl<T: Discrete> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = RangetreeError;

    fn try_from(range: RangeInclusive<T>) -> RangetreeResult<Self> {
        let (low, high) = range.into_inner();
        Interval::new(low, high)
    }
}

impl<T: Discrete> From<T> for Interval<T> {
    fn from(value: T) -> Self {
        Interval::point(value)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.low, self.high)
    }
}
