//! Read-only text pane.
//!
//! The buffer is word-wrapped to the pane width every frame. When the wrapped
//! text is taller than the pane, the last column becomes a scrollbar and the
//! text is wrapped one column narrower.

use crate::models::TextBuffer;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{palette, Style};
use crate::ui::core::text::wrap;

const TRACK_CHAR: char = '│';
const THUMB_CHAR: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextViewLayout {
    pub lines: Vec<String>,
    pub text_area: Rect,
    pub scrollbar: Option<Rect>,
}

impl TextViewLayout {
    pub fn compute(text: &str, area: Rect) -> Self {
        let lines = wrap(text, area.w as usize);
        if lines.len() <= area.h as usize || area.w < 2 {
            return Self {
                lines,
                text_area: area,
                scrollbar: None,
            };
        }

        let (text_area, scrollbar) = area.split_right(1);
        Self {
            lines: wrap(text, text_area.w as usize),
            text_area,
            scrollbar: Some(scrollbar),
        }
    }

    /// Largest scroll offset that still fills the pane.
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.text_area.h as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarMetrics {
    pub track: Rect,
    pub thumb: Rect,
}

impl ScrollbarMetrics {
    pub fn compute(track: Rect, total: usize, visible: usize, scroll: usize) -> Option<Self> {
        if track.is_empty() || total <= visible || visible == 0 {
            return None;
        }
        let track_h = track.h as usize;
        let thumb_h = (track_h * visible / total).clamp(1, track_h);
        let max_scroll = total - visible;
        let travel = track_h - thumb_h;
        let offset = scroll.min(max_scroll) * travel / max_scroll;
        let thumb = Rect::new(
            track.x,
            track.y.saturating_add(offset as u16),
            track.w,
            thumb_h as u16,
        );
        Some(Self { track, thumb })
    }
}

/// Max scroll offset for `buffer` shown in `area`.
pub fn max_scroll(buffer: &TextBuffer, area: Rect) -> usize {
    TextViewLayout::compute(buffer.text(), area).max_scroll()
}

pub fn paint_text_view(painter: &mut Painter, area: Rect, buffer: &TextBuffer) -> TextViewLayout {
    let view = TextViewLayout::compute(buffer.text(), area);
    if area.is_empty() {
        return view;
    }

    let background = Style::default().bg(palette::PAPER);
    painter.fill_rect(area, background);
    if buffer.is_empty() {
        return view;
    }

    let text_style = background.fg(palette::TEXT);
    let scroll = buffer.scroll().min(view.max_scroll());
    let visible = view.lines.iter().skip(scroll);
    for (row, line) in (0..view.text_area.h).zip(visible) {
        let Some(strip) = view.text_area.row(row) else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        painter.text(Pos::new(strip.x, strip.y), line, text_style, strip);
    }

    if let Some(track) = view.scrollbar {
        let metrics = ScrollbarMetrics::compute(
            track,
            view.lines.len(),
            view.text_area.h as usize,
            scroll,
        );
        if let Some(metrics) = metrics {
            let track_style = background.fg(palette::MUTED);
            let thumb_style = background.fg(palette::TEXT);
            painter.vline(
                Pos::new(metrics.track.x, metrics.track.y),
                metrics.track.h,
                TRACK_CHAR,
                track_style,
            );
            painter.vline(
                Pos::new(metrics.thumb.x, metrics.thumb.y),
                metrics.thumb.h,
                THUMB_CHAR,
                thumb_style,
            );
        }
    }

    view
}

#[cfg(test)]
#[path = "../../tests/unit/views/text_view.rs"]
mod tests;
