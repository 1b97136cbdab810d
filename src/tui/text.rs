//! Width-aware text helpers
//!
//! The page is pre-wrapped before rendering so that one `Line` is exactly one
//! terminal row. Section geometry is derived from line counts, so every
//! helper here measures with unicode display width, never byte length.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text at word boundaries to fit within `width` columns
///
/// Words wider than `width` are split mid-word. Explicit newlines start a new
/// line; an empty input line yields an empty output line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                // Hard-split an overlong word
                for c in word.chars() {
                    let w = c.width().unwrap_or(0);
                    if current_width + w > width {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += w;
                }
            }
        }

        lines.push(current);
    }
    lines
}

/// Truncate to `width` columns, ending with an ellipsis when cut
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let target = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Keep the last `width` columns, starting with an ellipsis when cut
///
/// Single-line inputs show their tail so the cursor stays on screen.
pub fn tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let target = width - 1;
    let mut kept = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        kept.push(c);
        used += w;
    }
    let mut out = String::from('…');
    out.extend(kept.into_iter().rev());
    out
}

/// Left padding that centers `text` in `width` columns
pub fn center_pad(text: &str, width: usize) -> usize {
    width.saturating_sub(text.width()) / 2
}
