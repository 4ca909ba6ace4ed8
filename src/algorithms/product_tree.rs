// src/algorithms/product_tree.rs

use num::BigInt;

use crate::algorithms::list_ops::pair_mul;
use crate::core::num_list::NumList;

/// Log base-2 of `num`, rounded up to the nearest integer.
///
/// 0 -> 0, 1 -> 0, 2 -> 1, 3 -> 2, 4 -> 2, 5 -> 3, 8 -> 3, 9 -> 4, ...
pub fn ceil_log2(num: usize) -> usize {
    let mut l2 = 0;
    let mut i = 1usize;
    while i < num {
        l2 += 1;
        i *= 2;
    }
    l2
}

/// Balanced binary tree of pairwise products.
///
/// Level 0 is the caller's input list, borrowed for the tree's lifetime;
/// every level above it is owned and holds the pairwise products of the
/// level below, with an odd trailing element propagated upward unchanged.
/// The top level has length one and holds the product of every input.
pub struct ProductTree<'a> {
    leaves: &'a NumList,
    upper: Vec<NumList>,
}

impl<'a> ProductTree<'a> {
    /// Builds the tree bottom-up. Height is `ceil_log2(n) + 1`, so a list
    /// of zero or one elements yields a tree of just the leaf level.
    pub fn build(leaves: &'a NumList) -> Self {
        let height = ceil_log2(leaves.len()) + 1;
        let mut upper: Vec<NumList> = Vec::with_capacity(height - 1);

        for _ in 1..height {
            let level = {
                let src = upper.last().unwrap_or(leaves);
                let mut level = NumList::with_len((src.len() + 1) / 2);
                pair_mul(&mut level, src);
                level
            };
            upper.push(level);
        }

        ProductTree { leaves, upper }
    }

    pub fn height(&self) -> usize {
        self.upper.len() + 1
    }

    /// Level `l` of the tree; level 0 is the borrowed input list.
    pub fn level(&self, l: usize) -> &NumList {
        if l == 0 {
            self.leaves
        } else {
            &self.upper[l - 1]
        }
    }

    /// The product of every input. Panics on an empty input list.
    pub fn root(&self) -> &BigInt {
        let top = self.level(self.height() - 1);
        &top[0]
    }
}
