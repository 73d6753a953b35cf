// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use crate::layout::{
    layout_tree_with_options, LayoutError, LayoutOptions, NodePlacement, TreeLayout,
};
use crate::model::{Side, TreeNode};

use super::text::canvas_to_lines_trimmed;
use super::{
    clamp_highlight_index_to_text, AnnotatedRender, Canvas, CanvasError, HighlightIndex,
    CONNECTOR_LEAN_LEFT, CONNECTOR_LEAN_RIGHT, CONNECTOR_VERTICAL,
};

/// Extra columns right of the last slot so the rightmost glyph and its connectors never clip.
pub const CANVAS_MARGIN_X: usize = 20;
/// Extra rows below the deepest level.
pub const CANVAS_MARGIN_Y: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRenderError {
    Layout(LayoutError),
    Canvas(CanvasError),
    MissingPlacement { value: String },
}

impl fmt::Display for TreeRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::MissingPlacement { value } => {
                write!(f, "missing placement for node {value:?} (layout of a different tree?)")
            }
        }
    }
}

impl std::error::Error for TreeRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Canvas(err) => Some(err),
            Self::MissingPlacement { .. } => None,
        }
    }
}

impl From<LayoutError> for TreeRenderError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<CanvasError> for TreeRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Renders `root` with the default spacing.
///
/// An empty tree renders as blank lines only.
pub fn render_tree(root: Option<&TreeNode>) -> Result<String, TreeRenderError> {
    render_tree_with_options(root, LayoutOptions::default())
}

pub fn render_tree_with_options(
    root: Option<&TreeNode>,
    options: LayoutOptions,
) -> Result<String, TreeRenderError> {
    let layout = layout_tree_with_options(root, options)?;
    render_layout(root, &layout)
}

/// Renders a layout previously computed for `root`.
///
/// Output rows have trailing spaces trimmed and every row (blank ones included) ends in `\n`.
pub fn render_layout(
    root: Option<&TreeNode>,
    layout: &TreeLayout<'_>,
) -> Result<String, TreeRenderError> {
    let canvas = paint(root, layout)?;
    Ok(canvas_to_lines_trimmed(&canvas))
}

pub fn render_tree_annotated(root: Option<&TreeNode>) -> Result<AnnotatedRender, TreeRenderError> {
    render_tree_annotated_with_options(root, LayoutOptions::default())
}

/// Like [`render_tree_with_options`], plus the cells each node's glyph covers, keyed by node path.
///
/// Spans are clamped to the trimmed text; glyph cells hidden under a later glyph still count.
pub fn render_tree_annotated_with_options(
    root: Option<&TreeNode>,
    options: LayoutOptions,
) -> Result<AnnotatedRender, TreeRenderError> {
    let layout = layout_tree_with_options(root, options)?;
    let canvas = paint(root, &layout)?;
    let text = canvas_to_lines_trimmed(&canvas);

    let mut highlight_index = HighlightIndex::new();
    for placement in layout.placements_in_order() {
        let x1 = placement.x() + placement.width() - 1;
        let spans = (0..placement.height())
            .map(|row| (placement.y() + row, placement.x(), x1))
            .filter(|&(y, _, _)| y < canvas.height())
            .collect::<Vec<_>>();
        highlight_index.insert(placement.path().clone(), spans);
    }

    clamp_highlight_index_to_text(&mut highlight_index, &text);
    Ok(AnnotatedRender { text, highlight_index })
}

fn canvas_size(layout: &TreeLayout<'_>) -> (usize, usize) {
    let width = layout.max_x().saturating_add(layout.unit()).saturating_add(CANVAS_MARGIN_X);
    let height = layout
        .max_y()
        .saturating_add(layout.options().depth_gap)
        .saturating_add(CANVAS_MARGIN_Y);
    (width, height)
}

/// Stamps glyphs and connectors in pre-order: a node, its connectors, then the left subtree,
/// then the right subtree. Children therefore draw over their parent's connector ends.
fn paint(root: Option<&TreeNode>, layout: &TreeLayout<'_>) -> Result<Canvas, TreeRenderError> {
    let (width, height) = canvas_size(layout);
    let mut canvas = Canvas::new(width, height)?;

    let mut stack = SmallVec::<[&TreeNode; 32]>::new();
    stack.extend(root);
    while let Some(node) = stack.pop() {
        let placement = placement_of(layout, node)?;
        for (row, text) in placement.glyph().rows().iter().enumerate() {
            canvas.write_str_clipped(placement.x(), placement.y() + row, text);
        }

        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                let child_placement = placement_of(layout, child)?;
                draw_connector(
                    &mut canvas,
                    ConnectorGeometry::between(placement, child_placement),
                    side,
                );
            }
        }

        stack.extend(node.right());
        stack.extend(node.left());
    }

    Ok(canvas)
}

fn placement_of<'l>(
    layout: &'l TreeLayout<'_>,
    node: &TreeNode,
) -> Result<&'l NodePlacement, TreeRenderError> {
    layout
        .placement(node)
        .ok_or_else(|| TreeRenderError::MissingPlacement { value: node.value().to_owned() })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConnectorGeometry {
    parent_center_x: usize,
    /// First row below the parent's glyph.
    parent_bottom_y: usize,
    child_center_x: usize,
    child_y: usize,
}

impl ConnectorGeometry {
    fn between(parent: &NodePlacement, child: &NodePlacement) -> Self {
        Self {
            parent_center_x: parent.center_x(),
            parent_bottom_y: parent.bottom_y(),
            child_center_x: child.center_x(),
            child_y: child.y(),
        }
    }
}

/// Draws one parent→child connector.
///
/// A child starting at or above the parent's bottom row gets a straight `|` run down the parent's
/// center. Otherwise a one-cell-per-row diagonal leaves the parent's center towards the child:
/// a left child leans `/` unless its center is strictly right of the parent's, a right child leans
/// `\` unless its center is strictly left of it.
fn draw_connector(canvas: &mut Canvas, geometry: ConnectorGeometry, side: Side) {
    let ConnectorGeometry { parent_center_x, parent_bottom_y, child_center_x, child_y } = geometry;

    if child_y <= parent_bottom_y {
        for y in parent_bottom_y..=child_y {
            canvas.put_clipped(parent_center_x, y, CONNECTOR_VERTICAL);
        }
        return;
    }

    let leans_right = match side {
        Side::Left => child_center_x > parent_center_x,
        Side::Right => child_center_x >= parent_center_x,
    };
    let ch = if leans_right { CONNECTOR_LEAN_RIGHT } else { CONNECTOR_LEAN_LEFT };

    for step in 1..=(child_y - parent_bottom_y) {
        let x = if leans_right {
            parent_center_x.checked_add(step)
        } else {
            parent_center_x.checked_sub(step)
        };
        // Columns left of the canvas are clipped like any other out-of-bounds cell.
        if let Some(x) = x {
            canvas.put_clipped(x, parent_bottom_y + step - 1, ch);
        }
    }
}
