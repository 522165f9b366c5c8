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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rangetree::DisjointRangeTree;
use std::collections::BTreeSet;

#[derive(Arbitrary, Debug, Clone)]
enum TreeOperation {
    AddPoint(u8),
    AddRange { low: u8, high: u8 },
    RemovePoint(u8),
    RemoveRange { low: u8, high: u8 },
    ContainsRange { low: u8, high: u8 },
    Get(u8),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    operations: Vec<TreeOperation>,
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}

fn fuzz(data: FuzzInput) {
    if data.operations.is_empty() || data.operations.len() > 256 {
        return;
    }
    // A u8 domain lets the reference cover every value, including both edges.
    let mut tree = DisjointRangeTree::new();
    let mut reference = BTreeSet::new();

    for op in &data.operations {
        match *op {
            TreeOperation::AddPoint(value) => {
                tree.add_point(value);
                reference.insert(value);
            }
            TreeOperation::AddRange { low, high } => {
                if high < low {
                    assert!(tree.add_range(low, high).is_err());
                    continue;
                }
                tree.add_range(low, high).unwrap();
                reference.extend(low..=high);
            }
            TreeOperation::RemovePoint(value) => {
                let removed = tree.remove_point(value);
                assert_eq!(removed, reference.remove(&value));
            }
            TreeOperation::RemoveRange { low, high } => {
                let (low, high) = ordered(low, high);
                let expected = reference.range(low..=high).next().is_some();
                let removed = tree.remove_range(low, high).unwrap();
                assert_eq!(removed, expected, "remove ({low},{high}) on {tree}");
                reference.retain(|v| *v < low || *v > high);
            }
            TreeOperation::ContainsRange { low, high } => {
                let (low, high) = ordered(low, high);
                let expected = (low..=high).all(|v| reference.contains(&v));
                assert_eq!(tree.contains_range(low, high).unwrap(), expected);
            }
            TreeOperation::Get(value) => {
                let covering = tree.get(value);
                assert_eq!(covering.is_some(), reference.contains(&value));
            }
            TreeOperation::Clear => {
                tree.clear();
                reference.clear();
            }
        }

        assert_eq!(tree.size(), reference.len() as u128, "tree={tree}");
        assert_eq!(tree.lowest(), reference.first().copied());
        assert_eq!(tree.highest(), reference.last().copied());

        let ranges: Vec<_> = tree.iter().collect();
        for pair in ranges.windows(2) {
            assert!(
                u16::from(pair[0].high()) + 1 < u16::from(pair[1].low()),
                "ranges should be disjoint and non-adjacent: {tree}"
            );
        }
        for value in u8::MIN..=u8::MAX {
            assert_eq!(tree.contains_point(value), reference.contains(&value));
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
