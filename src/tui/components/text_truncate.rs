//! Text truncation helpers for fixed-size terminal views.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates rendered output to a maximum number of lines.
///
/// When the output exceeds `max_height` lines, the surplus is dropped and
/// the final kept line is replaced with an ellipsis marker. A zero height
/// leaves the output untouched.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 {
        return;
    }

    let line_count = output.lines().count();
    if line_count <= max_height {
        return;
    }

    let keep = max_height.saturating_sub(1);
    let cut_at = if keep == 0 {
        0
    } else {
        output
            .char_indices()
            .filter(|&(_, character)| character == '\n')
            .nth(keep - 1)
            .map_or(0, |(index, _)| index + 1)
    };

    output.truncate(cut_at);
    output.push_str("...\n");
}

/// Truncates text to the provided display width, appending an ellipsis when
/// anything was cut.
///
/// Width is measured in terminal columns, not Unicode scalar count, so wide
/// characters consume two columns. Widths of three or fewer columns degrade
/// to a run of dots because the ellipsis itself would not fit.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(3);
    let mut truncated = String::new();
    let mut current_width = 0;

    for character in text.chars() {
        let char_width = UnicodeWidthChar::width(character).unwrap_or(0);
        if current_width + char_width > target_width {
            break;
        }
        truncated.push(character);
        current_width += char_width;
    }

    truncated.push_str("...");
    truncated
}
