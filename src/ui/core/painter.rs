//! The drawing-command list a frame is built into.

use super::geom::{Pos, Rect};
use super::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    /// Blank the cells of `rect` and paint them with `style`.
    FillRect { rect: Rect, style: Style },
    /// `len` copies of `ch` going down from `pos`.
    VLine {
        pos: Pos,
        len: u16,
        ch: char,
        style: Style,
    },
    /// One line of text from `pos`. Glyphs that do not fit entirely inside
    /// `clip` are dropped.
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
}

/// Owned by the shell and refilled every frame. Commands that would draw
/// nothing are never recorded.
#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, keeping the allocation.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if !rect.is_empty() {
            self.cmds.push(PaintCmd::FillRect { rect, style });
        }
    }

    pub fn vline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        if len > 0 {
            self.cmds.push(PaintCmd::VLine { pos, len, ch, style });
        }
    }

    pub fn text(&mut self, pos: Pos, text: &str, style: Style, clip: Rect) {
        if clip.is_empty() || text.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.to_owned(),
            style,
            clip,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
