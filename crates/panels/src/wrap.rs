//! Word wrapping for panel text.
//!
//! Wraps at word boundaries where possible, force-breaking words
//! wider than the viewport. Uses display width and grapheme clusters
//! so CJK and emoji content wraps where it actually renders.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Word boundaries are graphemes whose first char is non-alphanumeric.
fn is_boundary(g: &str) -> bool {
    g.chars().next().is_none_or(|c| !c.is_alphanumeric())
}

/// Grapheme index at which to break the segment starting at `start`.
fn wrap_point(graphemes: &[&str], start: usize, max_width: usize) -> usize {
    let line_len = graphemes.len();
    if start >= line_len {
        return line_len;
    }

    // Last grapheme that still fits in max_width display columns
    let mut display_width = 0;
    let mut ideal_end = start;
    for (i, grapheme) in graphemes.iter().enumerate().skip(start) {
        let grapheme_width = grapheme.width();
        if display_width + grapheme_width > max_width {
            ideal_end = i;
            break;
        }
        display_width += grapheme_width;
        ideal_end = i + 1;
    }

    if ideal_end >= line_len {
        return line_len;
    }

    if is_boundary(graphemes[ideal_end]) {
        return ideal_end + 1;
    }

    // Walk back to the nearest word boundary, but never produce an
    // empty segment
    for i in (start..ideal_end).rev() {
        if is_boundary(graphemes[i]) && i > start {
            return i + 1;
        }
    }

    // Single long word: force a break
    ideal_end.max(start + 1)
}

/// Wrap `text` into lines of at most `max_width` display columns.
///
/// Existing newlines are kept. Always returns at least one line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    for line in text.lines() {
        if line.width() <= max_width {
            out.push(line.to_string());
            continue;
        }

        let graphemes: Vec<&str> = line.graphemes(true).collect();
        let mut start = 0;
        while start < graphemes.len() {
            let end = wrap_point(&graphemes, start, max_width);
            out.push(graphemes[start..end].concat().trim_end().to_string());
            start = end;
        }
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_line_passes_through() {
        assert_eq!(wrap_text("short line", 80), vec!["short line"]);
    }

    #[test]
    fn test_wraps_at_spaces() {
        let lines = wrap_text("the quick brown fox jumps over", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 10, "line too wide: {:?}", line);
        }
        assert_eq!(lines[0], "the quick");
    }

    #[test]
    fn test_long_word_is_force_broken() {
        let lines = wrap_text("pneumonoultramicroscopic", 8);
        assert!(lines.len() >= 3);
        assert_eq!(lines[0], "pneumono");
    }

    #[test]
    fn test_existing_newlines_kept() {
        let lines = wrap_text("one\n\ntwo", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_wide_graphemes_counted_by_display_width() {
        // Each ideograph takes two columns
        let lines = wrap_text("漢字漢字漢字", 4);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "漢字");
    }

    #[test]
    fn test_zero_width_guard() {
        assert_eq!(wrap_text("anything", 0), vec!["anything"]);
    }

    #[test]
    fn test_empty_text_gives_one_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }
}
