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

//! # Rangetree
//!
//! A Rust library for tracking sets of integers as disjoint closed ranges. Overlapping or
//! adjacent ranges are coalesced as they are inserted, and ranges are erased, split or
//! truncated as values are removed, so memory use grows with the number of *gaps* in the
//! set rather than the number of values in it.
//!
//! ## Key Features
//!
//! - **Automatic Coalescing**: `(1,4)` and `(5,9)` are stored as the single range `(1,9)`
//! - **Range Removal**: Removing from the middle of a range splits it in two
//! - **Any Integer Domain**: Works over every primitive integer up to 64 bits through the `Discrete` trait
//! - **Edge Safe**: Ranges touching `MIN` or `MAX` of the domain never wrap
//! - **Cached Size**: The total value count is computed lazily and cached until the next mutation
//!
//! ## Usage Examples
//!
//! ### Identifier Pool
//!
//! ```rust
//! use rangetree::DisjointRangeTree;
//!
//! // All identifiers start out free
//! let mut free = DisjointRangeTree::new();
//! free.add_range(1u32, 1000).unwrap();
//!
//! // Hand out the lowest free identifier
//! let id = free.lowest().unwrap();
//! assert!(free.remove_point(id));
//! assert_eq!(free.lowest(), Some(2));
//!
//! // Return it to the pool; the ranges merge back together
//! free.add_point(id);
//! assert_eq!(free.range_count(), 1);
//! assert_eq!(free.size(), 1000);
//! ```
//!
//! ### Acknowledgement Window
//!
//! ```rust
//! use rangetree::DisjointRangeTree;
//!
//! let mut acked = DisjointRangeTree::new();
//! for seq in [1u64, 2, 3, 7, 8, 5] {
//!     acked.add_point(seq);
//! }
//! assert_eq!(acked.to_string(), "(1,3), (5,5), (7,8)");
//!
//! // The late packets fill the holes
//! acked.add_point(4);
//! acked.add_point(6);
//! assert_eq!(acked.to_string(), "(1,8)");
//! ```
//!
//! ## Range Specifications
//!
//! Ranges are closed on both ends. Besides explicit `(low, high)` pairs, an [`Interval`] can
//! be built from any Rust range expression:
//!
//! ```rust
//! use rangetree::{DisjointRangeTree, Interval};
//!
//! let mut tree = DisjointRangeTree::<u8>::new();
//!
//! tree.add_interval(Interval::from_bounds(0..10).unwrap());    // 0..=9
//! tree.add_interval(Interval::from_bounds(20..=29).unwrap());  // 20..=29
//! tree.add_interval(Interval::from_bounds(250..).unwrap());    // 250..=255
//!
//! assert_eq!(tree.to_string(), "(0,9), (20,29), (250,255)");
//! assert_eq!(tree.highest(), Some(u8::MAX));
//! ```
//!
//! ## Error Handling
//!
//! Operations that accept a raw `(low, high)` pair return `RangetreeResult<T>`, which fails with
//! `RangetreeError::InvalidRange` when `high < low`. Operations taking an [`Interval`] cannot
//! fail, as the interval was validated when it was built.
//!
//! ## Thread Safety
//!
//! `DisjointRangeTree` is not internally synchronized. `size()` updates a cache through a
//! shared reference, so the tree is `Send` but not `Sync`; wrap it in a lock to share it.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::missing_errors_doc
)]

mod classify;
mod discrete;
mod range;
mod result;
mod tree;

pub use self::discrete::Discrete;
pub use self::range::Interval;
pub use self::result::{RangetreeError, RangetreeResult};
pub use self::tree::{DisjointRangeTree, Iter};
