//! Text helpers shared across render functions.

use unicode_width::UnicodeWidthChar;

/// Truncates a string to fit within `max_width` display columns, appending
/// an ellipsis when truncation occurs. Width-aware so wide characters do not
/// overflow the column budget.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Reserve one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
