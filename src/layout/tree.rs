// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::model::{NodePath, Side, TreeNode};

use super::glyph::{Glyph, GLYPH_WIDTH};

pub const DEFAULT_NODE_GAP: usize = 3;
pub const DEFAULT_DEPTH_GAP: usize = 6;

/// Spacing knobs for [`layout_tree_with_options`].
///
/// `depth_gap` smaller than the glyph height makes children overlap their parent's glyph rows;
/// the renderer then falls back to straight `|` connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Blank columns between horizontally adjacent glyphs.
    pub node_gap: usize,
    /// Rows between the tops of glyphs on consecutive depths.
    pub depth_gap: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { node_gap: DEFAULT_NODE_GAP, depth_gap: DEFAULT_DEPTH_GAP }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePlacement {
    path: NodePath,
    slot: usize,
    depth: usize,
    x: usize,
    y: usize,
    glyph: Glyph,
}

impl NodePlacement {
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// Position in the inorder sequence.
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn width(&self) -> usize {
        self.glyph.width()
    }

    pub fn height(&self) -> usize {
        self.glyph.height()
    }

    /// Column of the glyph's center (integer division).
    pub fn center_x(&self) -> usize {
        self.x + self.width() / 2
    }

    /// First row strictly below the glyph.
    pub fn bottom_y(&self) -> usize {
        self.y + self.height()
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }
}

/// Node identity: placements are keyed by address, never by value, since values repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeKey(usize);

impl NodeKey {
    fn of(node: &TreeNode) -> Self {
        Self(node as *const TreeNode as usize)
    }
}

/// Grid coordinates for every node of one tree.
///
/// Borrows the tree so that address-based lookups stay valid for the layout's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLayout<'t> {
    options: LayoutOptions,
    unit: usize,
    placements: Vec<NodePlacement>,
    slots: HashMap<NodeKey, usize>,
    max_x: usize,
    max_y: usize,
    _tree: PhantomData<&'t TreeNode>,
}

impl TreeLayout<'_> {
    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Horizontal distance between consecutive inorder slots.
    pub fn unit(&self) -> usize {
        self.unit
    }

    pub fn placement(&self, node: &TreeNode) -> Option<&NodePlacement> {
        let slot = *self.slots.get(&NodeKey::of(node))?;
        self.placements.get(slot)
    }

    /// Placements in inorder (equivalently: by increasing `x`).
    pub fn placements_in_order(&self) -> &[NodePlacement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn max_x(&self) -> usize {
        self.max_x
    }

    pub fn max_y(&self) -> usize {
        self.max_y
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    CoordinateOverflow { slot: usize, depth: usize },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CoordinateOverflow { slot, depth } => {
                write!(f, "coordinates overflow for node at slot {slot}, depth {depth}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

pub fn layout_tree(root: Option<&TreeNode>) -> Result<TreeLayout<'_>, LayoutError> {
    layout_tree_with_options(root, LayoutOptions::default())
}

/// Inorder “slot” layout.
///
/// Baseline grid:
/// - `x`: the node's inorder index times `GLYPH_WIDTH + node_gap`
/// - `y`: the node's depth times `depth_gap` (root at `0`)
///
/// Every call starts from a fresh slot counter, so repeated layouts of the same tree agree.
pub fn layout_tree_with_options(
    root: Option<&TreeNode>,
    options: LayoutOptions,
) -> Result<TreeLayout<'_>, LayoutError> {
    let unit = GLYPH_WIDTH
        .checked_add(options.node_gap)
        .ok_or(LayoutError::CoordinateOverflow { slot: 0, depth: 0 })?;

    let mut ctx = LayoutCtx {
        unit,
        depth_gap: options.depth_gap,
        next_slot: 0,
        placements: Vec::new(),
        slots: HashMap::new(),
        max_x: 0,
        max_y: 0,
    };
    ctx.place(root, 0, NodePath::root())?;

    Ok(TreeLayout {
        options,
        unit,
        placements: ctx.placements,
        slots: ctx.slots,
        max_x: ctx.max_x,
        max_y: ctx.max_y,
        _tree: PhantomData,
    })
}

struct LayoutCtx {
    unit: usize,
    depth_gap: usize,
    next_slot: usize,
    placements: Vec<NodePlacement>,
    slots: HashMap<NodeKey, usize>,
    max_x: usize,
    max_y: usize,
}

impl LayoutCtx {
    fn place(
        &mut self,
        node: Option<&TreeNode>,
        depth: usize,
        path: NodePath,
    ) -> Result<(), LayoutError> {
        let Some(node) = node else {
            return Ok(());
        };

        self.place(node.left(), depth + 1, path.child(Side::Left))?;

        let slot = self.next_slot;
        let overflow = LayoutError::CoordinateOverflow { slot, depth };
        let x = slot.checked_mul(self.unit).ok_or_else(|| overflow.clone())?;
        let y = depth.checked_mul(self.depth_gap).ok_or(overflow)?;

        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.slots.insert(NodeKey::of(node), self.placements.len());
        self.placements.push(NodePlacement {
            path: path.clone(),
            slot,
            depth,
            x,
            y,
            glyph: Glyph::for_label(node.value()),
        });
        self.next_slot += 1;

        self.place(node.right(), depth + 1, path.child(Side::Right))
    }
}
