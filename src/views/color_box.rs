use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Style};

/// Fill `area` with a solid `color`.
pub fn paint_color_box(painter: &mut Painter, area: Rect, color: Color) {
    painter.fill_rect(area, Style::default().bg(color));
}
