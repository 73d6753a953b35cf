// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::render::text::{take_chars, text_len};

const GLYPH_TOP: &str = "  ___  ";
const GLYPH_UPPER: &str = " /   \\ ";
const GLYPH_BOTTOM: &str = " \\___/ ";
const LABEL_LEFT: &str = "| ";
const LABEL_RIGHT: &str = " |";

/// Width of every glyph row, taken from the template itself.
pub const GLYPH_WIDTH: usize = GLYPH_TOP.len();
pub const GLYPH_HEIGHT: usize = 4;
/// Characters available for the label between the bars.
pub const GLYPH_LABEL_CAPACITY: usize = GLYPH_WIDTH - LABEL_LEFT.len() - LABEL_RIGHT.len();

const GLYPH_LABEL_ROW: usize = 2;

const _: () = assert!(GLYPH_UPPER.len() == GLYPH_WIDTH && GLYPH_BOTTOM.len() == GLYPH_WIDTH);
const _: () = assert!(GLYPH_LABEL_CAPACITY > 0);

/// A node drawn as a small circle with its label centered in the middle row.
///
/// ```text
///   ___
///  /   \
/// |  5  |
///  \___/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    rows: [String; GLYPH_HEIGHT],
}

impl Glyph {
    /// Builds the glyph for `label`, truncating it to [`GLYPH_LABEL_CAPACITY`] chars.
    ///
    /// Odd leftover padding goes to the right of the label. Control characters are drawn as
    /// spaces so every row keeps its width.
    pub fn for_label(label: &str) -> Self {
        let label = take_chars(label, GLYPH_LABEL_CAPACITY);
        let free = GLYPH_LABEL_CAPACITY - text_len(label);
        let left_pad = free / 2;
        let right_pad = free - left_pad;

        let mut middle = String::with_capacity(GLYPH_WIDTH + label.len());
        middle.push_str(LABEL_LEFT);
        middle.extend(std::iter::repeat(' ').take(left_pad));
        middle.extend(label.chars().map(|ch| if ch.is_control() { ' ' } else { ch }));
        middle.extend(std::iter::repeat(' ').take(right_pad));
        middle.push_str(LABEL_RIGHT);

        Self {
            rows: [GLYPH_TOP.to_owned(), GLYPH_UPPER.to_owned(), middle, GLYPH_BOTTOM.to_owned()],
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn label_row(&self) -> &str {
        &self.rows[GLYPH_LABEL_ROW]
    }

    pub fn width(&self) -> usize {
        GLYPH_WIDTH
    }

    pub fn height(&self) -> usize {
        GLYPH_HEIGHT
    }
}
