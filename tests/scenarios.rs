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

use rangetree::{DisjointRangeTree, Interval, RangetreeError};

fn ranges<T: rangetree::Discrete>(tree: &DisjointRangeTree<T>) -> Vec<(T, T)> {
    tree.iter().map(|r| (r.low(), r.high())).collect()
}

#[test]
fn test_single_range_membership() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(1u32, 4).unwrap();
    for value in 1..=4 {
        assert!(tree.contains_point(value));
    }
    assert!(!tree.contains_point(0));
    assert!(!tree.contains_point(5));
    assert_eq!(tree.range_count(), 1);
    assert_eq!(tree.size(), 4);
}

#[test]
fn test_gap_fill_coalesces() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(5, 10).unwrap();
    tree.add_range(15, 20).unwrap();
    tree.add_range(11, 14).unwrap();
    assert_eq!(ranges(&tree), vec![(5, 20)]);
    assert_eq!(tree.range_count(), 1);
    assert_eq!(tree.size(), 16);
}

#[test]
fn test_remove_low_edge() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(1, 4).unwrap();
    assert!(tree.remove_point(1));
    assert_eq!(ranges(&tree), vec![(2, 4)]);
    assert!(!tree.contains_point(1));
    assert_eq!(tree.size(), 3);
}

#[test]
fn test_remove_splits() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(20, 27).unwrap();
    assert!(tree.remove_range(23, 23).unwrap());
    assert_eq!(ranges(&tree), vec![(20, 22), (24, 27)]);
    assert_eq!(tree.range_count(), 2);
    assert_eq!(tree.size(), 7);
}

#[test]
fn test_remove_spanning_several() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(5, 10).unwrap();
    tree.add_range(20, 25).unwrap();
    tree.add_range(40, 45).unwrap();
    assert!(tree.remove_range(8, 42).unwrap());
    assert_eq!(ranges(&tree), vec![(5, 7), (43, 45)]);
    assert_eq!(tree.range_count(), 2);
    assert!(!tree.contains_range(8, 42).unwrap());
}

#[test]
fn test_alternating_points_collapse() {
    let mut tree = DisjointRangeTree::new();
    for value in (0..=998).step_by(2) {
        tree.add_point(value);
    }
    assert_eq!(tree.range_count(), 500);
    for value in (1..=999).step_by(2) {
        tree.add_point(value);
    }
    assert_eq!(ranges(&tree), vec![(0, 999)]);
    assert_eq!(tree.size(), 1000);
}

#[test]
fn test_u8_domain_edges() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(250u8, 255).unwrap();
    tree.add_point(0);
    assert_eq!(tree.size(), 7);
    assert!(tree.contains_point(u8::MAX));

    // Adjacency at MAX must not wrap around to 0.
    assert_eq!(tree.range_count(), 2);
    tree.add_point(249);
    assert_eq!(ranges(&tree), vec![(0, 0), (249, 255)]);

    assert!(tree.remove_point(u8::MAX));
    assert_eq!(ranges(&tree), vec![(0, 0), (249, 254)]);
    assert!(tree.remove_point(u8::MIN));
    assert_eq!(ranges(&tree), vec![(249, 254)]);

    tree.add_range(0, 255).unwrap();
    assert_eq!(ranges(&tree), vec![(0, 255)]);
    assert_eq!(tree.size(), 256);

    assert!(tree.remove_range(1, 254).unwrap());
    assert_eq!(ranges(&tree), vec![(0, 0), (255, 255)]);
    assert!(tree.remove_range(0, 255).unwrap());
    assert!(tree.is_empty());
}

#[test]
fn test_i32_domain_edges() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(i32::MAX - 5, i32::MAX).unwrap();
    assert!(tree.contains_point(i32::MAX));
    assert_eq!(tree.size(), 6);

    tree.add_range(i32::MIN, i32::MIN + 5).unwrap();
    assert!(tree.contains_point(i32::MIN));
    assert_eq!(tree.size(), 12);
    assert_eq!(tree.lowest(), Some(i32::MIN));
    assert_eq!(tree.highest(), Some(i32::MAX));

    assert!(tree.remove_range(i32::MAX - 2, i32::MAX).unwrap());
    assert_eq!(tree.highest(), Some(i32::MAX - 3));
    assert!(tree.remove_range(i32::MIN, i32::MIN + 1).unwrap());
    assert_eq!(tree.lowest(), Some(i32::MIN + 2));
}

#[test]
fn test_u64_full_domain() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(u64::MIN, u64::MAX).unwrap();
    assert_eq!(tree.size(), 1u128 << 64);

    assert!(tree.remove_point(1 << 32));
    assert_eq!(tree.range_count(), 2);
    assert_eq!(tree.size(), (1u128 << 64) - 1);

    tree.add_point(1 << 32);
    assert_eq!(ranges(&tree), vec![(u64::MIN, u64::MAX)]);
}

#[test]
fn test_remove_missing_is_noop() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(5, 10).unwrap();
    let before = tree.clone();
    assert!(!tree.remove_point(15));
    assert!(!tree.remove_range(0, 4).unwrap());
    assert_eq!(tree, before);
    assert_eq!(tree.size(), 6);
}

#[test]
fn test_contained_insert_is_noop() {
    let mut tree = DisjointRangeTree::new();
    tree.add_range(5, 20).unwrap();
    let before = tree.clone();
    tree.add_range(10, 15).unwrap();
    tree.add_point(20);
    assert_eq!(tree, before);
}

#[test]
fn test_empty_tree() {
    let tree = DisjointRangeTree::<i32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.range_count(), 0);
    assert_eq!(tree.size(), 0);
    assert!(!tree.contains_point(5));
    assert!(!tree.contains_range(0, 10).unwrap());
    assert_eq!(tree.lowest(), None);
    assert_eq!(tree.highest(), None);
    assert_eq!(tree.iter().next(), None);
}

#[test]
fn test_invalid_range_is_reported() {
    let mut tree = DisjointRangeTree::new();
    let error = tree.add_range(10, 5).unwrap_err();
    assert_eq!(
        error,
        RangetreeError::InvalidRange {
            low: "10".to_string(),
            high: "5".to_string(),
        }
    );
    assert!(tree.is_empty());
}

#[test]
fn test_interval_from_rust_ranges() {
    let mut tree = DisjointRangeTree::new();
    tree.add_interval(Interval::from_bounds(10u16..20).unwrap());
    tree.add_interval(Interval::try_from(20u16..=29).unwrap());
    assert_eq!(ranges(&tree), vec![(10, 29)]);
    assert!(tree.remove_interval(Interval::from_bounds(..15).unwrap()));
    assert_eq!(ranges(&tree), vec![(15, 29)]);
}
