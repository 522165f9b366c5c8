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

//! Trait definitions for totally ordered discrete domains.

use std::fmt::{Debug, Display};

/// A totally ordered, discrete value type that ranges can be built over.
///
/// Every value except the domain's maximum has a successor and every value except its
/// minimum has a predecessor. Both are exposed as checked operations so that adjacency
/// arithmetic (`high + 1`, `low - 1`) can never wrap at the edges of the domain.
///
/// Implemented for all primitive integers up to 64 bits wide, signed and unsigned.
///
/// # Examples
///
/// ```rust
/// use rangetree::Discrete;
///
/// assert_eq!(7u8.successor(), Some(8));
/// assert_eq!(u8::MAX.successor(), None);
/// assert_eq!(i8::MIN.predecessor(), None);
///
/// // The point count of the whole domain does not overflow.
/// assert_eq!(u64::span(0, u64::MAX), 1u128 << 64);
/// ```
pub trait Discrete: Copy + Ord + Debug + Display {
    /// The smallest representable value.
    const MIN: Self;

    /// The largest representable value.
    const MAX: Self;

    /// Returns the value immediately above `self`, or `None` at [`Discrete::MAX`].
    fn successor(self) -> Option<Self>;

    /// Returns the value immediately below `self`, or `None` at [`Discrete::MIN`].
    fn predecessor(self) -> Option<Self>;

    /// Returns the number of values in the closed interval `[low, high]`.
    ///
    /// Callers must ensure `low <= high`.
    fn span(low: Self, high: Self) -> u128;
}

macro_rules! impl_discrete {
    ($($t:ty),* $(,)?) => {
        $(
            impl Discrete for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }

                #[inline]
                fn predecessor(self) -> Option<Self> {
                    self.checked_sub(1)
                }

                #[inline]
                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
                fn span(low: Self, high: Self) -> u128 {
                    debug_assert!(low <= high);
                    // Every implementor fits in i128, so the difference is exact.
                    (high as i128 - low as i128).unsigned_abs() + 1
                }
            }
        )*
    };
}

impl_discrete!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
