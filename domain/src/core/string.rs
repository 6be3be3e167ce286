//! String utilities for the domain layer.

/// Produce a single-line preview of `s`, at most `max_bytes` long.
///
/// Runs of whitespace (including newlines) collapse to one space so chat
/// messages fit on one log line. Truncation appends an ellipsis and never
/// splits a UTF-8 character boundary.
pub fn preview(s: &str, max_bytes: usize) -> String {
    let flat = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_bytes {
        return flat;
    }
    let target = max_bytes.saturating_sub(3);
    let mut end = target.min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_string_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn preview_collapses_whitespace() {
        assert_eq!(preview("a\nmulti-line\n\n  message", 80), "a multi-line message");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn preview_multibyte_boundary() {
        // 'の' is 3 bytes; cutting inside it must back up to a boundary
        assert_eq!(preview("あのね", 7), "あ...");
        assert_eq!(preview("あのね", 9), "あのね");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(preview("", 10), "");
    }
}
