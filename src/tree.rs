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

use crate::classify::{Placement, classify};
use crate::discrete::Discrete;
use crate::range::{Interval, touches};
use crate::result::RangetreeResult;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Bound;
use tracing::{debug, trace};

/// A `DisjointRangeTree` tracks a set of disjoint, non-adjacent closed ranges.
///
/// Internally backed by an ordered map from each range's low endpoint to its high endpoint.
/// Inserting a range coalesces it with every stored range it overlaps or touches; removing a
/// range erases, splits or truncates whatever it intersects. The number of stored ranges
/// therefore tracks the number of gaps in the set, not the number of values.
///
/// | operation                | cost                                   |
/// |--------------------------|----------------------------------------|
/// | insertion, removal       | `O(log n + k)`, `k` ranges merged/erased |
/// | containment, `get`       | `O(log n)`                             |
/// | `size()`                 | `O(1)` cached, `O(n)` after a mutation |
/// | `range_count()`          | `O(1)`                                 |
///
/// The tree is not internally synchronized. `size()` fills a cache through a shared
/// reference, which makes the type `!Sync`.
///
/// # Examples
///
/// ```rust
/// use rangetree::DisjointRangeTree;
///
/// let mut tree = DisjointRangeTree::new();
///
/// tree.add_range(5, 10).unwrap();
/// tree.add_range(15, 20).unwrap();
/// tree.add_range(11, 14).unwrap();
/// assert_eq!(tree.range_count(), 1);
/// assert_eq!(tree.size(), 16);
///
/// assert!(tree.remove_point(12));
/// assert_eq!(tree.to_string(), "(5,11), (13,20)");
/// ```
pub struct DisjointRangeTree<T> {
    ranges: BTreeMap<T, T>,
    cached_size: Cell<Option<u128>>,
}

impl<T: Discrete> DisjointRangeTree<T> {
    /// Creates an empty `DisjointRangeTree`.
    ///
    /// # Examples
    /// ```rust
    /// use rangetree::DisjointRangeTree;
    ///
    /// let tree = DisjointRangeTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        DisjointRangeTree {
            ranges: BTreeMap::new(),
            cached_size: Cell::new(None),
        }
    }

    /// Returns `true` if the tree holds no ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the number of disjoint ranges stored.
    #[inline]
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Returns the total number of values covered by all stored ranges.
    ///
    /// The total is cached. Any insertion or removal, including one that changes nothing,
    /// discards the cache, and the next call recomputes it in `O(n)`.
    pub fn size(&self) -> u128 {
        if let Some(size) = self.cached_size.get() {
            return size;
        }

        let size = self
            .ranges
            .iter()
            .map(|(&low, &high)| T::span(low, high))
            .sum();
        debug!(ranges = self.ranges.len(), %size, "recomputed size");
        self.cached_size.set(Some(size));
        size
    }

    /// Returns the lowest value in the set, or `None` if it is empty.
    pub fn lowest(&self) -> Option<T> {
        self.ranges.first_key_value().map(|(&low, _)| low)
    }

    /// Returns the highest value in the set, or `None` if it is empty.
    pub fn highest(&self) -> Option<T> {
        self.ranges.last_key_value().map(|(_, &high)| high)
    }

    /// Returns the stored range covering `value`, if any.
    ///
    /// ```rust
    /// use rangetree::{DisjointRangeTree, Interval};
    ///
    /// let mut tree = DisjointRangeTree::new();
    /// tree.add_range(10u16, 20).unwrap();
    /// assert_eq!(tree.get(15), Some(Interval::new(10, 20).unwrap()));
    /// assert_eq!(tree.get(21), None);
    /// ```
    pub fn get(&self, value: T) -> Option<Interval<T>> {
        self.floor(value)
            .filter(|range| range.contains(value))
    }

    /// Returns `true` if `value` is in the set.
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.contains_interval(&Interval::point(value))
    }

    /// Returns `true` if every value of `[low, high]` is in the set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RangetreeError::InvalidRange`] when `high < low`.
    pub fn contains_range(&self, low: T, high: T) -> RangetreeResult<bool> {
        Ok(self.contains_interval(&Interval::new(low, high)?))
    }

    /// Returns `true` if every value of `interval` is in the set.
    ///
    /// Because stored ranges never touch, the interval is covered only if a single stored
    /// range covers it.
    pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
        self.floor(interval.low())
            .is_some_and(|range| range.contains_interval(interval))
    }

    /// Adds the single value `value`, merging with touching neighbours.
    #[inline]
    pub fn add_point(&mut self, value: T) {
        self.add_interval(Interval::point(value));
    }

    /// Adds every value of `[low, high]`, merging with overlapping or adjacent ranges.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RangetreeError::InvalidRange`] when `high < low`; the tree is left
    /// untouched.
    pub fn add_range(&mut self, low: T, high: T) -> RangetreeResult<()> {
        self.add_interval(Interval::new(low, high)?);
        Ok(())
    }

    /// Adds every value of `interval`, merging with overlapping or adjacent ranges.
    ///
    /// A single insertion can bridge any number of stored ranges, on both sides of
    /// `interval.low()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangetree::{DisjointRangeTree, Interval};
    ///
    /// let mut tree = DisjointRangeTree::new();
    /// for low in [5, 15, 25, 35] {
    ///     tree.add_range(low, low + 5).unwrap();
    /// }
    /// tree.add_interval(Interval::new(12, 38).unwrap());
    /// assert_eq!(tree.to_string(), "(5,10), (12,40)");
    /// ```
    pub fn add_interval(&mut self, interval: Interval<T>) {
        self.invalidate();

        let (low, high) = (interval.low(), interval.high());
        match self.ranges.get_mut(&low) {
            // The stored range already covers the request.
            Some(existing) if *existing >= high => return,
            Some(existing) => *existing = high,
            None => {
                self.ranges.insert(low, high);
            }
        }

        self.merge_from(low);
        debug_assert!(self.invariants_hold(), "invariant broken after add {interval}");
    }

    /// Removes the single value `value`.
    ///
    /// Returns `true` if the value was present.
    #[inline]
    pub fn remove_point(&mut self, value: T) -> bool {
        self.remove_interval(Interval::point(value))
    }

    /// Removes every value of `[low, high]`.
    ///
    /// Returns `true` if any stored range was erased, split or truncated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RangetreeError::InvalidRange`] when `high < low`; the tree is left
    /// untouched.
    pub fn remove_range(&mut self, low: T, high: T) -> RangetreeResult<bool> {
        Ok(self.remove_interval(Interval::new(low, high)?))
    }

    /// Removes every value of `interval`.
    ///
    /// Each stored range touched by `interval` is erased if covered, split in two if it
    /// strictly contains `interval`, or truncated if it overlaps one end. Returns `true`
    /// if anything changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rangetree::{DisjointRangeTree, Interval};
    ///
    /// let mut tree = DisjointRangeTree::new();
    /// tree.add_range(5, 10).unwrap();
    /// tree.add_range(20, 25).unwrap();
    /// tree.add_range(40, 45).unwrap();
    ///
    /// assert!(tree.remove_interval(Interval::new(8, 42).unwrap()));
    /// assert_eq!(tree.to_string(), "(5,7), (43,45)");
    /// assert!(!tree.remove_interval(Interval::new(8, 42).unwrap()));
    /// ```
    pub fn remove_interval(&mut self, interval: Interval<T>) -> bool {
        self.invalidate();
        let removed = self.erase(&interval);
        debug_assert!(self.invariants_hold(), "invariant broken after remove {interval}");
        removed
    }

    /// Removes every range, leaving the tree empty.
    pub fn clear(&mut self) {
        self.invalidate();
        self.ranges.clear();
    }

    /// Returns an ascending iterator over the stored ranges.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.ranges.iter(),
        }
    }

    /// The stored range with the greatest low endpoint `<= value`.
    fn floor(&self, value: T) -> Option<Interval<T>> {
        self.ranges
            .range(..=value)
            .next_back()
            .map(|(&low, &high)| Interval::from_ordered(low, high))
    }

    /// Coalesces the range stored at `low` with every neighbour it now touches.
    ///
    /// The scan starts from the predecessor when that one reaches up to `low`, then absorbs
    /// successors until the first real gap.
    fn merge_from(&mut self, low: T) {
        let mut start = low;
        if let Some((&prev_low, &prev_high)) = self.ranges.range(..low).next_back() {
            if touches(prev_high, low) {
                start = prev_low;
            }
        }

        let Some(&start_high) = self.ranges.get(&start) else {
            return;
        };
        let mut high = start_high;
        let mut absorbed = 0usize;
        while let Some((&next_low, &next_high)) = self
            .ranges
            .range((Bound::Excluded(start), Bound::Unbounded))
            .next()
        {
            if !touches(high, next_low) {
                break;
            }
            high = high.max(next_high);
            self.ranges.remove(&next_low);
            absorbed += 1;
        }

        if let Some(stored) = self.ranges.get_mut(&start) {
            *stored = high;
        }
        if absorbed > 0 || start != low {
            trace!(low = %start, high = %high, absorbed, "merged ranges");
        }
    }

    /// Applies the removal of `x` to every stored range it intersects.
    fn erase(&mut self, x: &Interval<T>) -> bool {
        // Begin at the greatest range starting at or below x.low, which may reach into x;
        // with no such range, begin at the first one.
        let mut cursor = match self.ranges.range(..=x.low()).next_back() {
            Some((&low, _)) => Bound::Included(low),
            None => Bound::Unbounded,
        };
        let mut changed = false;
        let mut covered = 0usize;

        while let Some((&low, &high)) = self.ranges.range((cursor, Bound::Unbounded)).next() {
            cursor = Bound::Excluded(low);
            let r = Interval::from_ordered(low, high);

            match classify(&r, x) {
                Placement::Below => {}
                Placement::Above => break,
                Placement::Equal => {
                    self.ranges.remove(&low);
                    trace!(range = %r, "erased range");
                    return true;
                }
                Placement::Splits { below, above } => {
                    self.ranges.remove(&low);
                    for piece in below.into_iter().chain(above) {
                        self.ranges.insert(piece.low(), piece.high());
                    }
                    trace!(range = %r, removed = %x, "split range");
                    return true;
                }
                Placement::Covered => {
                    self.ranges.remove(&low);
                    covered += 1;
                }
                Placement::OverlapLow { keep } => {
                    if let Some(stored) = self.ranges.get_mut(&low) {
                        *stored = keep.high();
                    }
                    trace!(range = %r, kept = %keep, "truncated range high end");
                    changed = true;
                }
                Placement::OverlapHigh { keep } => {
                    // The key itself moves, so the entry is replaced.
                    self.ranges.remove(&low);
                    self.ranges.insert(keep.low(), keep.high());
                    trace!(range = %r, kept = %keep, covered, "truncated range low end");
                    return true;
                }
            }
        }

        if covered > 0 {
            trace!(removed = %x, covered, "erased covered ranges");
        }
        changed || covered > 0
    }

    fn invalidate(&self) {
        self.cached_size.set(None);
    }

    /// Every stored range is well formed and leaves a gap of at least one value before the next.
    fn invariants_hold(&self) -> bool {
        let mut previous: Option<T> = None;
        for (&low, &high) in &self.ranges {
            if high < low {
                return false;
            }
            if let Some(prev_high) = previous {
                if touches(prev_high, low) {
                    return false;
                }
            }
            previous = Some(high);
        }
        true
    }
}

impl<T: Discrete> Default for DisjointRangeTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DisjointRangeTree<T> {
    fn clone(&self) -> Self {
        DisjointRangeTree {
            ranges: self.ranges.clone(),
            cached_size: self.cached_size.clone(),
        }
    }
}

/// Trees are equal when they store the same ranges; the size cache is ignored.
impl<T: PartialEq> PartialEq for DisjointRangeTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl<T: Eq> Eq for DisjointRangeTree<T> {}

impl<T: Discrete> FromIterator<Interval<T>> for DisjointRangeTree<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut tree = DisjointRangeTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Discrete> Extend<Interval<T>> for DisjointRangeTree<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

impl<'a, T: Discrete> IntoIterator for &'a DisjointRangeTree<T> {
    type Item = Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the ranges in ascending order, e.g. `(1,4), (10,10), (100,150)`.
///
/// Intended for debugging; the format is not stable.
impl<T: fmt::Display> fmt::Display for DisjointRangeTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (low, high)) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({low},{high})")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DisjointRangeTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointRangeTree")
            .field("ranges", &self.ranges)
            .field("cached_size", &self.cached_size.get())
            .finish()
    }
}

/// An ascending iterator over the ranges of a [`DisjointRangeTree`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: btree_map::Iter<'a, T, T>,
}

impl<T: Discrete> Iterator for Iter<'_, T> {
    type Item = Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&low, &high)| Interval::from_ordered(low, high))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Discrete> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(&low, &high)| Interval::from_ordered(low, high))
    }
}

impl<T: Discrete> ExactSizeIterator for Iter<'_, T> {}

impl<T: Discrete> FusedIterator for Iter<'_, T> {}
