//! Cell-grid geometry.
//!
//! Every size here is measured in terminal cells. Arithmetic saturates so a
//! window shrunk below the margins yields empty rectangles instead of panics.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle anchored at the origin, as reported by a frame-request.
    pub const fn sized(w: u16, h: u16) -> Self {
        Self::new(0, 0, w, h)
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// The single-row strip at `row` (relative to the top), or `None` past the bottom.
    pub fn row(&self, row: u16) -> Option<Rect> {
        if row >= self.h || self.w == 0 {
            return None;
        }
        Some(Rect::new(self.x, self.y.saturating_add(row), self.w, 1))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
