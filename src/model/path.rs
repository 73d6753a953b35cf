// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::tree::{Side, TreeNode};

/// Stable address of a node: the `L`/`R` steps taken from the root.
///
/// The root is the empty path and displays as `root`. Unlike values, paths are unique per tree,
/// so they key per-node output such as highlight spans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(SmolStr);

impl NodePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn child(&self, side: Side) -> Self {
        let mut steps = String::with_capacity(self.0.len() + 1);
        steps.push_str(&self.0);
        steps.push(side.as_char());
        Self(SmolStr::from(steps))
    }

    pub fn steps(&self) -> impl Iterator<Item = Side> + '_ {
        self.0.chars().map(|ch| if ch == 'L' { Side::Left } else { Side::Right })
    }

    /// Follows the path from `root`, returning `None` if a step leads to a missing child.
    pub fn resolve<'t>(&self, root: &'t TreeNode) -> Option<&'t TreeNode> {
        self.steps().try_fold(root, |node, side| node.child(side))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            f.write_str(&self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodePathError {
    invalid: char,
}

impl fmt::Display for ParseNodePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid node path step {:?} (expected 'L' or 'R')", self.invalid)
    }
}

impl std::error::Error for ParseNodePathError {}

impl FromStr for NodePath {
    type Err = ParseNodePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "root" {
            return Ok(Self::root());
        }
        if let Some(invalid) = s.chars().find(|ch| !matches!(ch, 'L' | 'R')) {
            return Err(ParseNodePathError { invalid });
        }
        Ok(Self(SmolStr::from(s)))
    }
}
