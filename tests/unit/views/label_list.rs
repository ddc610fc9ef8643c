use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;

fn render(area: Rect, labels: &[&str]) -> String {
    let mut painter = Painter::new();
    paint_label_list(&mut painter, area, labels.iter().copied());
    let mut backend = TestBackend::new(area.right(), area.bottom());
    backend.draw(Rect::sized(area.right(), area.bottom()), painter.cmds());
    backend.buffer().text_in(area)
}

#[test]
fn rows_are_inset_and_truncated() {
    let text = render(
        Rect::new(0, 0, 10, 3),
        &["Alpha", "A very long title", "C", "D"],
    );
    assert_eq!(text, " Alpha\n A very…\n C");
}

#[test]
fn fewer_labels_than_rows_leave_blank_rows() {
    let text = render(Rect::new(0, 0, 6, 3), &["x"]);
    assert_eq!(text, " x\n\n");
}

#[test]
fn rows_too_narrow_for_the_inset_are_skipped() {
    let mut painter = Painter::new();
    paint_label_list(&mut painter, Rect::new(0, 0, 2, 2), ["a", "b"]);
    // Only the background fill.
    assert_eq!(painter.len(), 1);
}

#[test]
fn empty_area_paints_nothing() {
    let mut painter = Painter::new();
    paint_label_list(&mut painter, Rect::new(0, 0, 0, 5), ["a"]);
    assert!(painter.is_empty());
}
