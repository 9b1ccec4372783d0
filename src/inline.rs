//! Inline emphasis rewriting.
//!
//! Tana's emphasis convention is inverted relative to common Markdown:
//! bold stays `**bold**`, but italics are written `__like this__`. The
//! rewriter is a format adapter over one line of content, not a Markdown
//! renderer: it re-marks bold and italic spans and copies everything else
//! through untouched, link syntax included.
//!
//! The implementation is an explicit left-to-right scan. A span opens at a
//! `*`/`_` delimiter preceded by start-of-text, whitespace or `(` and
//! followed by non-whitespace; it closes at a matching delimiter preceded
//! by non-whitespace and followed by end-of-text, whitespace, `)` or `.`.
//! Anything else is literal text. Span contents are re-scanned so nested
//! emphasis resolves innermost-first.

const BOLD_MARK: &str = "**";
const ITALIC_MARK: &str = "__";

/// Rewrite the emphasis spans of one line of content.
pub fn rewrite(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    rewrite_chars(&chars)
}

fn rewrite_chars(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let mark = chars[i];
        if mark == '*' || mark == '_' {
            let double = chars.get(i + 1) == Some(&mark);
            if double && opens_span(chars, i, 2) {
                if let Some(close) = find_closer(chars, mark, i + 2, 2) {
                    out.push_str(BOLD_MARK);
                    out.push_str(&rewrite_chars(&chars[i + 2..close]));
                    out.push_str(BOLD_MARK);
                    i = close + 2;
                    continue;
                }
            }
            // A double marker whose double closer never appears is retried
            // as a single marker opening an italic span.
            if opens_span(chars, i, 1) {
                if let Some(close) = find_closer(chars, mark, i + 1, 1) {
                    out.push_str(ITALIC_MARK);
                    out.push_str(&rewrite_chars(&chars[i + 1..close]));
                    out.push_str(ITALIC_MARK);
                    i = close + 1;
                    continue;
                }
            }
        }
        out.push(mark);
        i += 1;
    }
    out
}

/// A delimiter of `len` marker characters at `i` can open a span: preceded
/// by start-of-text, whitespace or `(`, followed by non-whitespace.
fn opens_span(chars: &[char], i: usize, len: usize) -> bool {
    let before_ok = match i.checked_sub(1).and_then(|k| chars.get(k)) {
        None => true,
        Some(&prev) => prev.is_whitespace() || prev == '(',
    };
    before_ok && chars.get(i + len).is_some_and(|c| !c.is_whitespace())
}

/// A delimiter of `len` marker characters at `j` can close a span:
/// preceded by non-whitespace, followed by end-of-text, whitespace, `)` or
/// `.`. A single-marker closer flush against its own marker character
/// would split a longer run and stays literal.
fn closes_span(chars: &[char], mark: char, j: usize, len: usize) -> bool {
    let Some(&prev) = j.checked_sub(1).and_then(|k| chars.get(k)) else {
        return false;
    };
    if prev.is_whitespace() || (len == 1 && prev == mark) {
        return false;
    }
    match chars.get(j + len) {
        None => true,
        Some(&next) => next.is_whitespace() || next == ')' || next == '.',
    }
}

/// Find the earliest valid closing delimiter for a span whose content
/// starts at `from`. The content must be non-empty.
fn find_closer(chars: &[char], mark: char, from: usize, len: usize) -> Option<usize> {
    let mut j = from + 1;
    while j + len <= chars.len() {
        if chars[j..j + len].iter().all(|&c| c == mark) && closes_span(chars, mark, j, len) {
            return Some(j);
        }
        j += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_both_forms_normalize() {
        assert_eq!(
            rewrite("Some **bold** and __more bold__ text"),
            "Some **bold** and **more bold** text"
        );
    }

    #[test]
    fn test_italic_both_forms_invert() {
        assert_eq!(
            rewrite("Some *italic* and _more italic_ text"),
            "Some __italic__ and __more italic__ text"
        );
    }

    #[test]
    fn test_mixed_bold_and_italic() {
        assert_eq!(
            rewrite("Mix _italic_ and **bold** text"),
            "Mix __italic__ and **bold** text"
        );
    }

    #[test]
    fn test_bold_rewrite_is_idempotent() {
        let once = rewrite("Some **bold** and __more bold__ text");
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn test_nested_italic_inside_bold() {
        assert_eq!(rewrite("**bold *it* end**"), "**bold __it__ end**");
    }

    #[test]
    fn test_nested_bold_inside_italic() {
        assert_eq!(rewrite("*a **b** c*"), "__a **b** c__");
    }

    #[test]
    fn test_triple_markers_nest_both_ways() {
        assert_eq!(rewrite("***both***"), "**__both__**");
    }

    #[test]
    fn test_opening_delimiter_needs_following_text() {
        assert_eq!(rewrite("a * b* c"), "a * b* c");
    }

    #[test]
    fn test_closing_delimiter_needs_preceding_text() {
        assert_eq!(rewrite("*a * c"), "*a * c");
    }

    #[test]
    fn test_intraword_underscores_are_literal() {
        assert_eq!(rewrite("snake_case_name stays"), "snake_case_name stays");
    }

    #[test]
    fn test_parenthesized_span() {
        assert_eq!(
            rewrite("*(an aside, kept whole)* after"),
            "__(an aside, kept whole)__ after"
        );
    }

    #[test]
    fn test_span_closed_before_period() {
        assert_eq!(rewrite("ends with *flair*."), "ends with __flair__.");
    }

    #[test]
    fn test_bold_followed_by_colon_is_kept() {
        // the closer sits before a colon, outside the recognized trailing
        // set, so the already-bold source text passes through untouched
        assert_eq!(rewrite("**Label**: rest"), "**Label**: rest");
    }

    #[test]
    fn test_link_syntax_passes_through() {
        assert_eq!(
            rewrite("[Tana Website](https://tana.inc)"),
            "[Tana Website](https://tana.inc)"
        );
    }

    #[test]
    fn test_emphasis_inside_link_text() {
        assert_eq!(
            rewrite("[a __bold__ link](https://example.com/a_b_c)"),
            "[a **bold** link](https://example.com/a_b_c)"
        );
    }

    #[test]
    fn test_degenerate_runs_stay_literal() {
        assert_eq!(rewrite("**** four"), "**** four");
        assert_eq!(rewrite("*a**"), "*a**");
    }

    #[test]
    fn test_unclosed_double_retries_as_italic() {
        assert_eq!(rewrite("**a*"), "__*a__");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(rewrite("no markers at all"), "no markers at all");
        assert_eq!(rewrite(""), "");
    }
}
