//! Text measurement for fixed-width cells.
//!
//! Widths are terminal cells. Cuts always land on grapheme boundaries, so a
//! combining mark never gets separated from its base character.

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub const ELLIPSIS: &str = "…";

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn fit_prefix(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, g) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + g.len();
    }
    end
}

/// Single-line label text: the first line of `s`, cut to `max_width` cells
/// with a trailing ellipsis when it does not fit.
pub fn truncate_label(s: &str, max_width: usize) -> Cow<'_, str> {
    let line = s.lines().next().unwrap_or("");
    if display_width(line) <= max_width && line.len() == s.len() {
        return Cow::Borrowed(s);
    }
    if display_width(line) <= max_width {
        return Cow::Borrowed(line);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let keep = fit_prefix(line, max_width - display_width(ELLIPSIS));
    let mut out = String::with_capacity(keep + ELLIPSIS.len());
    out.push_str(line[..keep].trim_end());
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Greedy word wrap into display lines of at most `width` cells.
///
/// Hard line breaks are kept (a blank source line yields a blank display
/// line). Words wider than `width` are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    if width == 0 {
        return out;
    }

    for source_line in text.lines() {
        let mut line = String::new();
        let mut line_w = 0usize;

        for word in source_line.split_whitespace() {
            let mut word = word;
            let mut word_w = display_width(word);
            let sep = usize::from(line_w > 0);

            if line_w + sep + word_w <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_w += sep + word_w;
                continue;
            }

            if line_w > 0 {
                out.push(std::mem::take(&mut line));
            }

            while word_w > width {
                let cut = fit_prefix(word, width).max(first_grapheme_len(word));
                out.push(word[..cut].to_string());
                word = &word[cut..];
                word_w = display_width(word);
            }

            line.push_str(word);
            line_w = word_w;
        }

        out.push(line);
    }

    out
}

fn first_grapheme_len(s: &str) -> usize {
    s.graphemes(true).next().map(str::len).unwrap_or(s.len())
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
