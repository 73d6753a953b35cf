// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Binary tree model.
//!
//! Trees are built in code or parsed from JSON, then handed read-only to layout and rendering.

pub mod fixtures;
pub mod path;
pub mod tree;

pub use path::{NodePath, ParseNodePathError};
pub use tree::{parse_tree_json, Side, TreeNode, TreeParseError};
