use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{palette, Style};
use crate::ui::core::text::truncate_label;

/// Padding around each row's label. A terminal row has no room for vertical
/// padding, so only the horizontal part is non-zero.
pub const ROW_INSET: Insets = Insets::xy(1, 0);

/// Paint one label per row, starting at the top of `area`. Labels that do not
/// fit vertically are skipped; labels that do not fit horizontally end in an
/// ellipsis.
pub fn paint_label_list<'a, I>(painter: &mut Painter, area: Rect, labels: I)
where
    I: IntoIterator<Item = &'a str>,
{
    if area.is_empty() {
        return;
    }

    let background = Style::default().bg(palette::PAPER);
    let label_style = background.fg(palette::TEXT);
    painter.fill_rect(area, background);

    for (row, label) in (0..area.h).zip(labels) {
        let Some(strip) = area.row(row) else {
            break;
        };
        let inner = strip.inset(ROW_INSET);
        if inner.is_empty() {
            continue;
        }
        let text = truncate_label(label, inner.w as usize);
        painter.text(Pos::new(inner.x, inner.y), &text, label_style, inner);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/label_list.rs"]
mod tests;
