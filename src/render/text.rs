// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

/// The longest prefix of `text` holding at most `max_len` chars.
pub(crate) fn take_chars(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Serializes every canvas row with trailing spaces removed, each followed by `\n`.
///
/// Blank rows are kept (as empty lines) so the output height always equals the canvas height.
pub(crate) fn canvas_to_lines_trimmed(canvas: &Canvas) -> String {
    let mut out = String::with_capacity(canvas.height() * (canvas.width() + 1));
    let mut line = String::with_capacity(canvas.width());
    for y in 0..canvas.height() {
        line.clear();
        // (0, y) is in bounds by construction.
        line.extend(canvas.row(y).expect("in bounds"));
        out.push_str(line.trim_end_matches(' '));
        out.push('\n');
    }
    out
}
