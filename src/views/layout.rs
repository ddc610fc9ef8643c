use super::color_box::paint_color_box;
use super::label_list::paint_label_list;
use super::text_view::paint_text_view;
use crate::models::AppState;
use crate::ui::core::geom::Rect;
use crate::ui::core::layout::Insets;
use crate::ui::core::painter::Painter;
use crate::ui::core::style::palette;

/// Share of the content width taken by the feed list.
pub const FEED_LIST_RATIO: f32 = 0.3;
/// Share of the right column's height taken by the entry list.
pub const ENTRY_LIST_RATIO: f32 = 0.4;

/// Where each pane landed in the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Regions {
    /// Window area minus the margin.
    pub content: Rect,
    pub feeds: Rect,
    pub entries: Rect,
    pub text: Rect,
}

impl Regions {
    pub fn compute(area: Rect, margin: u16) -> Self {
        let content = area.inset(Insets::all(margin));
        let (feeds, right) = content.split_h_ratio(FEED_LIST_RATIO);
        let (entries, text) = right.split_v_ratio(ENTRY_LIST_RATIO);
        Self {
            content,
            feeds,
            entries,
            text,
        }
    }
}

/// Build the frame's drawing commands for `state` inside `area`.
///
/// Pushes onto `painter` and touches nothing else, so rendering the same
/// state twice yields the same command list.
pub fn layout(state: &AppState, area: Rect, margin: u16, painter: &mut Painter) -> Regions {
    let regions = Regions::compute(area, margin);
    let stage = state.stage();

    if stage.shows_lists() {
        paint_label_list(
            painter,
            regions.feeds,
            state.feeds().iter().map(|feed| feed.name.as_str()),
        );
        paint_label_list(
            painter,
            regions.entries,
            state.entries().iter().map(|entry| entry.title.as_str()),
        );
    } else {
        paint_color_box(painter, regions.feeds, palette::RED);
        paint_color_box(painter, regions.entries, palette::GREEN);
    }

    if stage.shows_text_view() {
        paint_text_view(painter, regions.text, state.text());
    } else {
        paint_color_box(painter, regions.text, palette::BLUE);
    }

    regions
}

#[cfg(test)]
#[path = "../../tests/unit/views/layout.rs"]
mod tests;
