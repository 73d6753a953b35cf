// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for laid-out trees.
//!
//! Renderers produce ASCII text output as well as a highlight index that maps every node to the
//! cells its glyph occupies in the returned text.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::NodePath;

pub(crate) mod text;
pub mod tree;

pub use tree::{
    render_layout, render_tree, render_tree_annotated, render_tree_annotated_with_options,
    render_tree_with_options, TreeRenderError, CANVAS_MARGIN_X, CANVAS_MARGIN_Y,
};

pub const CONNECTOR_VERTICAL: char = '|';
pub const CONNECTOR_LEAN_LEFT: char = '/';
pub const CONNECTOR_LEAN_RIGHT: char = '\\';

/// A contiguous span of highlighted cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive, relative to the returned
/// rendered text lines.
pub type LineSpan = (usize, usize, usize);

/// Mapping from node paths to the spans covered by that node's glyph.
pub type HighlightIndex = BTreeMap<NodePath, Vec<LineSpan>>;

/// Render output plus an index suitable for cell-accurate highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRender {
    pub text: String,
    pub highlight_index: HighlightIndex,
}

pub(crate) fn clamp_highlight_index_to_text(highlight_index: &mut HighlightIndex, text: &str) {
    let line_lens = text.split('\n').map(text::text_len).collect::<Vec<_>>();

    highlight_index.retain(|_, spans| {
        spans.retain_mut(|span| {
            let (y, x0, x1) = span;

            let len = match line_lens.get(*y) {
                Some(len) => *len,
                None => return false,
            };

            if len == 0 || *x0 >= len {
                return false;
            }

            let max_x = len - 1;
            if *x1 > max_x {
                *x1 = max_x;
            }

            *x0 <= *x1
        });
        !spans.is_empty()
    });
}

/// A fixed-size character grid.
///
/// Checked accessors (`get`/`set`) report out-of-bounds coordinates as errors; the `*_clipped`
/// writers silently drop whatever falls outside the grid. Later writes overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self { width, height, cells: vec![fill; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    /// Sets the character at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Sets `(x, y)` if it lies on the canvas; returns whether anything was written.
    pub fn put_clipped(&mut self, x: usize, y: usize, ch: char) -> bool {
        match self.index_of(x, y) {
            Ok(idx) => {
                self.cells[idx] = ch;
                true
            }
            Err(_) => false,
        }
    }

    /// Writes `text` left-to-right starting at `(x, y)`, dropping every character that falls
    /// outside the canvas. Returns the number of characters written.
    pub fn write_str_clipped(&mut self, x: usize, y: usize, text: &str) -> usize {
        if y >= self.height {
            return 0;
        }

        let mut written = 0;
        for (offset, ch) in text.chars().enumerate() {
            let Some(col) = x.checked_add(offset) else {
                break;
            };
            if col >= self.width {
                break;
            }
            self.cells[(y * self.width) + col] = ch;
            written += 1;
        }
        written
    }

    /// The characters of row `y`.
    pub fn row(&self, y: usize) -> Result<&[char], CanvasError> {
        if y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let start = y * self.width;
        Ok(&self.cells[start..start + self.width])
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x])?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
