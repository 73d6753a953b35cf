// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_char(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

/// A binary tree node owning at most two children.
///
/// The JSON shape is `{"value": "1", "left": {..}, "right": {..}}`; missing or `null` children mean
/// "no child".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    value: SmolStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<Box<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self { value: value.into(), left: None, right: None }
    }

    pub fn leaf(value: impl Into<SmolStr>) -> Self {
        Self::new(value)
    }

    pub fn with_left(mut self, child: TreeNode) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: TreeNode) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<&TreeNode> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Depth of the deepest node below this one; a leaf has height `0`.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.left().map(|child| (child, depth + 1)));
            stack.extend(node.right().map(|child| (child, depth + 1)));
        }
        max_depth
    }
}

/// Parses a JSON tree document. A top-level `null` is the empty tree.
pub fn parse_tree_json(src: &str) -> Result<Option<TreeNode>, TreeParseError> {
    serde_json::from_str::<Option<TreeNode>>(src).map_err(TreeParseError)
}

#[derive(Debug)]
pub struct TreeParseError(serde_json::Error);

impl TreeParseError {
    pub fn line(&self) -> usize {
        self.0.line()
    }

    pub fn column(&self) -> usize {
        self.0.column()
    }
}

impl fmt::Display for TreeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tree json: {}", self.0)
    }
}

impl std::error::Error for TreeParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
