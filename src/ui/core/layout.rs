//! Rect arithmetic for laying out panes: insets, overlap and ratio splits.
//! Everything saturates, so a window too small for its margins yields empty
//! rects rather than wrapping around.

use super::geom::Rect;

/// Cells removed from each side of a rect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: u16,
    pub right: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Insets {
    pub const fn all(v: u16) -> Self {
        Self::xy(v, v)
    }

    /// `x` on the left and right, `y` on the top and bottom.
    pub const fn xy(x: u16, y: u16) -> Self {
        Self {
            left: x,
            right: x,
            top: y,
            bottom: y,
        }
    }
}

/// Share of `total` given to the first part of a ratio split, rounded to the
/// nearest cell. NaN counts as 0 and the ratio is clamped to `0.0..=1.0`.
pub fn ratio_len(total: u16, ratio: f32) -> u16 {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    ((f32::from(total) * ratio).round() as u16).min(total)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Rect {
    pub fn inset(self, insets: Insets) -> Self {
        Rect::new(
            self.x.saturating_add(insets.left),
            self.y.saturating_add(insets.top),
            self.w.saturating_sub(insets.left.saturating_add(insets.right)),
            self.h.saturating_sub(insets.top.saturating_add(insets.bottom)),
        )
    }

    /// The overlap of two rects; empty when they do not touch.
    pub fn intersect(self, other: Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(left, top, right.saturating_sub(left), bottom.saturating_sub(top))
    }

    /// The last `w` columns, and everything to their left.
    pub fn split_right(self, w: u16) -> (Rect, Rect) {
        self.split_at(Axis::Horizontal, self.w.saturating_sub(w))
    }

    /// Left part gets `ratio` of the width, the right part the remainder.
    pub fn split_h_ratio(self, ratio: f32) -> (Rect, Rect) {
        self.split_at(Axis::Horizontal, ratio_len(self.w, ratio))
    }

    /// Top part gets `ratio` of the height, the bottom part the remainder.
    pub fn split_v_ratio(self, ratio: f32) -> (Rect, Rect) {
        self.split_at(Axis::Vertical, ratio_len(self.h, ratio))
    }

    /// Cut `len` cells off the start along `axis`.
    fn split_at(self, axis: Axis, len: u16) -> (Rect, Rect) {
        match axis {
            Axis::Horizontal => {
                let len = len.min(self.w);
                (
                    Rect::new(self.x, self.y, len, self.h),
                    Rect::new(self.x.saturating_add(len), self.y, self.w - len, self.h),
                )
            }
            Axis::Vertical => {
                let len = len.min(self.h);
                (
                    Rect::new(self.x, self.y, self.w, len),
                    Rect::new(self.x, self.y.saturating_add(len), self.w, self.h - len),
                )
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
