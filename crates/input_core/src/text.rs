//! UTF-8 boundary helpers for single-line editing.
//!
//! Caret and selection offsets are byte indices into the value and must
//! always sit on a `char` boundary. Length limits are expressed in UTF-16
//! code units, which is how form controls measure `minlength`/`maxlength`.

use std::borrow::Cow;

/// Clamp `index` to the nearest `char` boundary at or before it.
///
/// Indices past the end clamp to `s.len()`.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b";
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 100), s.len());
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Byte index of the character boundary before `i` (0 at the start).
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// Byte index of the character boundary after `i` (`s.len()` at the end).
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |c| i + c.len_utf8())
}

/// Strip CR and LF, which a single-line control never accepts from typing.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

/// Length of `s` in UTF-16 code units.
#[inline]
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Longest prefix of `s` that fits in `max_units` UTF-16 code units.
///
/// Never splits a character, so a surrogate pair that would straddle the
/// limit is dropped entirely.
pub fn truncate_to_utf16_units(s: &str, max_units: usize) -> &str {
    let mut units = 0;
    for (idx, c) in s.char_indices() {
        units += c.len_utf16();
        if units > max_units {
            return &s[..idx];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_step_over_multibyte_chars() {
        let s = "a€b";
        assert_eq!(next_cursor_boundary(s, 0), 1);
        assert_eq!(next_cursor_boundary(s, 1), 4);
        assert_eq!(next_cursor_boundary(s, 5), 5);
        assert_eq!(prev_cursor_boundary(s, 4), 1);
        assert_eq!(prev_cursor_boundary(s, 0), 0);
    }

    #[test]
    fn utf16_length_counts_surrogate_pairs_twice() {
        assert_eq!(utf16_len("abc"), 3);
        assert_eq!(utf16_len("€"), 1);
        assert_eq!(utf16_len("😀"), 2);
    }

    #[test]
    fn truncation_never_splits_a_pair() {
        assert_eq!(truncate_to_utf16_units("ab😀c", 3), "ab");
        assert_eq!(truncate_to_utf16_units("ab😀c", 4), "ab😀");
        assert_eq!(truncate_to_utf16_units("abc", 10), "abc");
        assert_eq!(truncate_to_utf16_units("abc", 0), "");
    }
}
