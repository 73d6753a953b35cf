// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! glyphtree — binary trees as ASCII art.
//!
//! Every node becomes a small circle glyph placed by inorder position and depth; parents and
//! children are joined by `/`, `\` or `|` connectors.
//!
//! ```
//! use glyphtree::{render_tree, TreeNode};
//!
//! let tree = TreeNode::new("5");
//! let text = render_tree(Some(&tree)).expect("render");
//! assert!(text.starts_with("  ___\n /   \\\n|  5  |\n"));
//! ```

pub mod layout;
pub mod model;
pub mod render;

pub use layout::{layout_tree, layout_tree_with_options, LayoutError, LayoutOptions, TreeLayout};
pub use model::{parse_tree_json, NodePath, Side, TreeNode, TreeParseError};
pub use render::{
    render_layout, render_tree, render_tree_annotated, render_tree_annotated_with_options,
    render_tree_with_options, AnnotatedRender, TreeRenderError,
};
