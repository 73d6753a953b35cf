// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for binary trees.
//!
//! This module assigns every node a glyph and a grid position; rendering happens in
//! [`crate::render`].

pub mod glyph;
pub mod tree;

pub use glyph::{Glyph, GLYPH_HEIGHT, GLYPH_LABEL_CAPACITY, GLYPH_WIDTH};
pub use tree::{
    layout_tree, layout_tree_with_options, LayoutError, LayoutOptions, NodePlacement, TreeLayout,
    DEFAULT_DEPTH_GAP, DEFAULT_NODE_GAP,
};
