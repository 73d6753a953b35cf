// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::tree::{Side, TreeNode};

/// The seven-node demo tree used by `--demo`.
///
/// ```text
///         1
///       /   \
///      2     3
///     / \   / \
///    10  2 2   1
/// ```
pub fn sample_tree() -> TreeNode {
    let left = TreeNode::new("2").with_left(TreeNode::leaf("10")).with_right(TreeNode::leaf("2"));
    let right = TreeNode::new("3").with_left(TreeNode::leaf("2")).with_right(TreeNode::leaf("1"));
    TreeNode::new("1").with_left(left).with_right(right)
}

/// A complete tree of the given height with labels numbered in inorder.
pub fn complete_tree(height: usize) -> TreeNode {
    fn build(height: usize, next_label: &mut usize) -> TreeNode {
        let left = (height > 0).then(|| build(height - 1, next_label));
        let mut node = TreeNode::new(next_label.to_string());
        *next_label += 1;
        if let Some(left) = left {
            node = node.with_left(left);
        }
        if height > 0 {
            node = node.with_right(build(height - 1, next_label));
        }
        node
    }

    let mut next_label = 0;
    build(height, &mut next_label)
}

/// A degenerate chain of `len` nodes that always descends on `side`.
pub fn chain_tree(len: usize, side: Side) -> Option<TreeNode> {
    (0..len).rev().fold(None, |child, idx| {
        let node = TreeNode::new(idx.to_string());
        Some(match (child, side) {
            (None, _) => node,
            (Some(child), Side::Left) => node.with_left(child),
            (Some(child), Side::Right) => node.with_right(child),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::{chain_tree, complete_tree, sample_tree};
    use crate::model::Side;

    #[test]
    fn sample_tree_has_seven_nodes_and_height_two() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn complete_tree_sizes() {
        assert_eq!(complete_tree(0).node_count(), 1);
        assert_eq!(complete_tree(3).node_count(), 15);
        assert_eq!(complete_tree(3).value(), "7");
    }

    #[test]
    fn chain_tree_descends_one_side() {
        let chain = chain_tree(4, Side::Right).expect("chain");
        assert_eq!(chain.node_count(), 4);
        assert_eq!(chain.height(), 3);
        assert!(chain.left().is_none());
        assert!(chain_tree(0, Side::Left).is_none());
    }
}
