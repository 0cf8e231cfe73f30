//! Cursor position and horizontal scrolling for the single-line HandleInput.
//!
//! `CursorState` owns the cursor byte offset and the scroll offset (in display
//! columns). The buffer itself is owned by `HandleInput` and passed in.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// Display columns hidden off the left edge
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self { pos: 0, scroll: 0 }
    }

    /// Display column of the cursor from the start of the buffer.
    pub fn column(&self, buffer: &str) -> usize {
        buffer[..self.pos].width()
    }

    /// Keep the cursor inside a window `visible_width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, visible_width: u16) {
        let width = usize::from(visible_width);
        if width == 0 {
            self.scroll = 0;
            return;
        }
        let col = self.column(buffer);
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + width {
            self.scroll = col + 1 - width;
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// The part of `text` that fits in `width` columns after skipping `scroll` columns.
pub(super) fn visible_slice(text: &str, scroll: usize, width: usize) -> &str {
    let mut skipped = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices() {
        if skipped >= scroll {
            start = i;
            break;
        }
        skipped += c.width().unwrap_or(0);
    }

    let rest = &text[start..];
    let mut used = 0;
    let mut end = rest.len();
    for (i, c) in rest.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            end = i;
            break;
        }
        used += w;
    }
    &rest[..end]
}
