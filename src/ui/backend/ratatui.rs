//! Rasterizes drawing-command lists into a ratatui frame.

use std::io;

use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Style};

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        let area = area.intersect(self.frame.area().into());
        self.frame.render_widget(CmdList(cmds), area.into());
    }
}

/// Stdout terminal. The rest of the crate only sees `Rect`s and `PaintCmd`s.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    /// Current drawable area, in cells.
    pub fn area(&self) -> io::Result<Rect> {
        let size = self.terminal.size()?;
        Ok(Rect::sized(size.width, size.height))
    }

    pub fn present(&mut self, area: Rect, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal
            .draw(|frame| RatatuiBackend::new(frame).draw(area, cmds))?;
        Ok(())
    }
}

struct CmdList<'a>(&'a [PaintCmd]);

impl Widget for CmdList<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let bounds = Rect::from(area);
        for cmd in self.0 {
            match cmd {
                PaintCmd::FillRect { rect, style } => {
                    for (x, y) in cells(rect.intersect(bounds)) {
                        put(buf, x, y, " ", *style);
                    }
                }
                PaintCmd::VLine {
                    pos,
                    len,
                    ch,
                    style,
                } => {
                    let mut utf8 = [0u8; 4];
                    let symbol = ch.encode_utf8(&mut utf8);
                    for (x, y) in cells(Rect::new(pos.x, pos.y, 1, *len).intersect(bounds)) {
                        put(buf, x, y, symbol, *style);
                    }
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => {
                    put_text(buf, *pos, text, *style, clip.intersect(bounds));
                }
            }
        }
    }
}

fn cells(rect: Rect) -> impl Iterator<Item = (u16, u16)> {
    (rect.y..rect.bottom()).flat_map(move |y| (rect.x..rect.right()).map(move |x| (x, y)))
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(to_ratatui_style(style));
    }
}

/// One line of text. A wide glyph is drawn only when all of its cells fit;
/// the cells it covers after the first are reset.
fn put_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Rect) {
    if pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            put(buf, x, pos.y, g, style);
            for dx in 1..w {
                if let Some(cell) = buf.cell_mut((x + dx, pos.y)) {
                    cell.reset();
                    cell.set_style(to_ratatui_style(style));
                }
            }
        }
        x = x.saturating_add(w);
    }
}

fn to_ratatui_style(style: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = style.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = style.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out
}

fn to_ratatui_color(color: Color) -> RColor {
    RColor::Rgb(color.r, color.g, color.b)
}
