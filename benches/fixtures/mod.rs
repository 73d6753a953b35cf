// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use glyphtree::model::fixtures::{chain_tree, complete_tree, sample_tree};
use glyphtree::model::{Side, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Sample,
    Complete6,
    Complete10,
    LeftChain64,
    LongLabels,
}

impl Case {
    pub const ALL: [Case; 5] =
        [Case::Sample, Case::Complete6, Case::Complete10, Case::LeftChain64, Case::LongLabels];

    pub fn id(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Complete6 => "complete_h6",
            Self::Complete10 => "complete_h10",
            Self::LeftChain64 => "left_chain_64",
            Self::LongLabels => "long_labels",
        }
    }
}

pub fn fixture(case: Case) -> TreeNode {
    match case {
        Case::Sample => sample_tree(),
        Case::Complete6 => complete_tree(6),
        Case::Complete10 => complete_tree(10),
        Case::LeftChain64 => chain_tree(64, Side::Left).expect("non-empty chain"),
        Case::LongLabels => relabel_long(&complete_tree(6)),
    }
}

fn relabel_long(node: &TreeNode) -> TreeNode {
    let mut out = TreeNode::new(format!("node-{}-with-a-long-label", node.value()));
    if let Some(left) = node.left() {
        out = out.with_left(relabel_long(left));
    }
    if let Some(right) = node.right() {
        out = out.with_right(relabel_long(right));
    }
    out
}
