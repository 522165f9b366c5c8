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

//! Placement of a stored range relative to a removal query.
//!
//! Removal walks the stored ranges in ascending order and classifies each one against the
//! query before touching the map. Because the query is a single contiguous interval, a
//! walk produces at most one `Equal`, `Splits`, `OverlapLow` or `OverlapHigh` outcome,
//! with any number of `Covered` outcomes between an `OverlapLow` and an `OverlapHigh`.

use crate::discrete::Discrete;
use crate::range::Interval;

/// Where a stored range `r` sits relative to a removal query `x`.
///
/// Variants that leave part of `r` behind carry the surviving piece(s).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement<T> {
    /// `r` ends before `x` starts.
    Below,
    /// `r` starts after `x` ends. Nothing further along can intersect `x`.
    Above,
    /// `r` and `x` are identical.
    Equal,
    /// `x` strictly contains `r`; `r` is erased outright.
    Covered,
    /// `r` strictly contains `x`; whatever lies outside `x` survives.
    Splits {
        below: Option<Interval<T>>,
        above: Option<Interval<T>>,
    },
    /// `x` starts inside `r` and runs past its high end; `r` keeps its lower part.
    OverlapLow { keep: Interval<T> },
    /// `x` ends inside `r` and starts before it; `r` keeps its upper part.
    OverlapHigh { keep: Interval<T> },
}

/// Classifies stored range `r` against removal query `x`.
///
/// # Panics
///
/// Panics if a single-value range lands in a partial-overlap case. A single value either
/// lies inside `x` or outside it, so reaching that arm means the classification is broken.
pub(crate) fn classify<T: Discrete>(r: &Interval<T>, x: &Interval<T>) -> Placement<T> {
    if r == x {
        return Placement::Equal;
    }
    if r.contains_interval(x) {
        return Placement::Splits {
            below: remainder_below(r, x),
            above: remainder_above(r, x),
        };
    }
    if x.contains_interval(r) {
        return Placement::Covered;
    }
    if r.high() < x.low() {
        return Placement::Below;
    }
    if r.low() > x.high() {
        return Placement::Above;
    }

    assert_ne!(
        r.low(),
        r.high(),
        "BUG: single-value range {r} not caught by containment against {x}"
    );

    if r.low() < x.low() {
        // r.low < x.low <= r.high < x.high
        match remainder_below(r, x) {
            Some(keep) => Placement::OverlapLow { keep },
            None => unreachable!("BUG: {r} overlaps low end of {x} but leaves nothing below"),
        }
    } else {
        // x.low < r.low <= x.high < r.high
        match remainder_above(r, x) {
            Some(keep) => Placement::OverlapHigh { keep },
            None => unreachable!("BUG: {r} overlaps high end of {x} but leaves nothing above"),
        }
    }
}

/// The part of `r` strictly below `x`, if any.
fn remainder_below<T: Discrete>(r: &Interval<T>, x: &Interval<T>) -> Option<Interval<T>> {
    if r.low() < x.low() {
        x.low()
            .predecessor()
            .map(|high| Interval::from_ordered(r.low(), high))
    } else {
        None
    }
}

/// The part of `r` strictly above `x`, if any.
fn remainder_above<T: Discrete>(r: &Interval<T>, x: &Interval<T>) -> Option<Interval<T>> {
    if r.high() > x.high() {
        x.high()
            .successor()
            .map(|low| Interval::from_ordered(low, r.high()))
    } else {
        None
    }
}
