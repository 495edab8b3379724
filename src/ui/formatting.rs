//! Column formatting helpers for terminal output

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads `text` with spaces to `width` display columns, truncating with an
/// ellipsis when it does not fit.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = text.width();
    if text_width <= width {
        let mut padded = String::with_capacity(text.len() + width - text_width);
        padded.push_str(text);
        padded.extend(std::iter::repeat_n(' ', width - text_width));
        return padded;
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > width - 1 {
            break;
        }
        truncated.push(c);
        used += char_width;
    }
    truncated.push('…');
    used += 1;
    truncated.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    truncated
}
