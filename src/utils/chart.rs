//! Horizontal bar charts for the dashboard views.

use crate::utils::formatting::{pad_left, pad_right};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const BAR_GLYPH: &str = "█";
const MAX_BAR_WIDTH: usize = 40;

/// Render `(category, count)` pairs as a horizontal bar chart, one line per
/// category, bars scaled to the highest count.
pub fn render(entries: &[(String, usize)], colour: Colour) -> String {
    let max_count = entries.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max_count == 0 {
        return String::new();
    }

    let label_w = entries
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);
    let count_w = max_count.to_string().len();

    let mut out = String::new();
    for (label, count) in entries {
        let bar_len = scaled_len(*count, max_count);
        let bar = BAR_GLYPH.repeat(bar_len);
        out.push_str(&format!(
            "  {}  {}  {}\n",
            pad_right(label, label_w),
            pad_left(&count.to_string(), count_w),
            colour.paint(bar),
        ));
    }

    out
}

/// Bar length proportional to `count / max`, at least 1 for non-zero counts.
fn scaled_len(count: usize, max: usize) -> usize {
    if count == 0 {
        return 0;
    }
    ((count * MAX_BAR_WIDTH) / max).max(1)
}
