use super::*;
use crate::models::ScrollDelta;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::painter::PaintCmd;

#[test]
fn short_text_has_no_scrollbar() {
    let view = TextViewLayout::compute("hello world", Rect::new(0, 0, 20, 3));
    assert_eq!(view.lines, vec!["hello world"]);
    assert_eq!(view.scrollbar, None);
    assert_eq!(view.max_scroll(), 0);
}

#[test]
fn overflowing_text_rewraps_beside_a_scrollbar() {
    let view = TextViewLayout::compute("a b c d e f", Rect::new(0, 0, 3, 2));
    assert_eq!(view.text_area, Rect::new(0, 0, 2, 2));
    assert_eq!(view.scrollbar, Some(Rect::new(2, 0, 1, 2)));
    assert_eq!(view.lines.len(), 6);
    assert_eq!(view.max_scroll(), 4);
}

#[test]
fn scrollbar_thumb_tracks_scroll() {
    let track = Rect::new(9, 0, 1, 10);
    let top = ScrollbarMetrics::compute(track, 20, 10, 0).unwrap();
    assert_eq!(top.thumb, Rect::new(9, 0, 1, 5));

    let bottom = ScrollbarMetrics::compute(track, 20, 10, 10).unwrap();
    assert_eq!(bottom.thumb, Rect::new(9, 5, 1, 5));

    let past_end = ScrollbarMetrics::compute(track, 20, 10, 99).unwrap();
    assert_eq!(past_end.thumb, bottom.thumb);

    assert!(ScrollbarMetrics::compute(track, 10, 10, 0).is_none());
}

#[test]
fn paints_visible_slice_from_scroll_offset() {
    let area = Rect::new(0, 0, 5, 2);
    let mut buffer = TextBuffer::new("l1\nl2\nl3\nl4");
    buffer.scroll_by(ScrollDelta::Lines(1), max_scroll(&buffer, area));

    let mut painter = Painter::new();
    let view = paint_text_view(&mut painter, area, &buffer);

    let mut backend = TestBackend::new(5, 2);
    backend.draw(area, painter.cmds());
    let frame = backend.buffer();
    assert_eq!(frame.text_in(view.text_area), "l2\nl3");
    assert_eq!(frame.cell(4, 0).unwrap().symbol, "█");
    assert_eq!(frame.cell(4, 1).unwrap().symbol, "│");
}

#[test]
fn stale_scroll_is_clamped_when_painting() {
    let area = Rect::new(0, 0, 10, 5);
    let mut buffer = TextBuffer::new("only line");
    buffer.scroll_by(ScrollDelta::Bottom, 50);

    let mut painter = Painter::new();
    paint_text_view(&mut painter, area, &buffer);

    let mut backend = TestBackend::new(10, 5);
    backend.draw(area, painter.cmds());
    assert_eq!(backend.buffer().text_in(area), "only line\n\n\n\n");
}

#[test]
fn empty_buffer_paints_only_the_background() {
    let mut painter = Painter::new();
    let area = Rect::new(0, 0, 8, 3);
    paint_text_view(&mut painter, area, &TextBuffer::new(""));
    assert_eq!(
        painter.cmds(),
        [PaintCmd::FillRect {
            rect: area,
            style: Style::default().bg(palette::PAPER),
        }]
    );
}
