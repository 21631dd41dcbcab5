//! Editing state for one single-line text control.
//!
//! The buffer does no layout or measurement. It owns the value, the caret,
//! the selection anchor and a revision counter that moves on every text
//! change.

use crate::text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
    truncate_to_utf16_units, utf16_len,
};

/// A normalized byte range (`start <= end`) on char boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Value, caret and selection of a single-line control.
///
/// ```
/// use input_core::EditBuffer;
///
/// let mut buf = EditBuffer::new("Hello");
/// buf.insert_text(" World", None);
/// assert_eq!(buf.value(), "Hello World");
/// ```
#[derive(Clone, Debug, Default)]
pub struct EditBuffer {
    value: String,
    revision: u64,
    /// Byte index into `value`, always on a char boundary.
    caret: usize,
    /// When set, the selection is `min(anchor, caret)..max(anchor, caret)`.
    selection_anchor: Option<usize>,
}

impl EditBuffer {
    /// Buffer holding `initial` with the caret at the end.
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let caret = value.len();
        Self {
            value,
            revision: 0,
            caret,
            selection_anchor: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Monotonic counter bumped on every text change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        selection_range(&self.value, self.selection_anchor, self.caret)
    }

    /// Overwrite the value. The caret moves to the end and the selection is dropped.
    ///
    /// The value is stored verbatim; newline filtering applies to typing only.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.caret = self.value.len();
        self.selection_anchor = None;
        self.bump();
    }

    /// Clamp the caret and drop the selection, as focus changes do.
    pub fn collapse(&mut self) {
        self.clamp();
        self.selection_anchor = None;
    }

    /// Insert typed text at the caret, replacing any selection.
    ///
    /// Newlines are stripped. With `max_units`, the insertion is cut so the
    /// resulting value stays within that many UTF-16 code units. Returns
    /// `true` if the value changed.
    pub fn insert_text(&mut self, s: &str, max_units: Option<usize>) -> bool {
        self.clamp();
        let s = filter_single_line(s);
        if s.is_empty() {
            return false;
        }

        let removed = self.delete_selection();

        let s = match max_units {
            Some(max) => {
                let room = max.saturating_sub(utf16_len(&self.value));
                truncate_to_utf16_units(&s, room)
            }
            None => &s,
        };
        if s.is_empty() {
            return removed;
        }

        self.value.insert_str(self.caret, s);
        self.caret += s.len();
        self.bump();
        true
    }

    /// Delete the selection, or the character before the caret.
    pub fn backspace(&mut self) -> bool {
        self.clamp();
        if self.delete_selection() {
            return true;
        }
        if self.caret == 0 {
            return false;
        }

        let prev = prev_cursor_boundary(&self.value, self.caret);
        self.value.drain(prev..self.caret);
        self.caret = prev;
        self.bump();
        true
    }

    /// Delete the selection, or the character after the caret.
    pub fn delete(&mut self) -> bool {
        self.clamp();
        if self.delete_selection() {
            return true;
        }
        if self.caret >= self.value.len() {
            return false;
        }

        let next = next_cursor_boundary(&self.value, self.caret);
        self.value.drain(self.caret..next);
        self.bump();
        true
    }

    pub fn move_left(&mut self, selecting: bool) {
        self.clamp();
        if !selecting && let Some(sel) = self.selection() {
            self.move_to(sel.start, false);
            return;
        }
        let target = prev_cursor_boundary(&self.value, self.caret);
        self.move_to(target, selecting);
    }

    pub fn move_right(&mut self, selecting: bool) {
        self.clamp();
        if !selecting && let Some(sel) = self.selection() {
            self.move_to(sel.end, false);
            return;
        }
        let target = next_cursor_boundary(&self.value, self.caret);
        self.move_to(target, selecting);
    }

    pub fn move_to_start(&mut self, selecting: bool) {
        self.move_to(0, selecting);
    }

    pub fn move_to_end(&mut self, selecting: bool) {
        self.move_to(self.value.len(), selecting);
    }

    pub fn select_all(&mut self) {
        self.caret = self.value.len();
        self.selection_anchor = Some(0);
        self.normalize_anchor();
    }

    /// Place the caret at byte index `caret`, extending the selection if `selecting`.
    pub fn move_to(&mut self, caret: usize, selecting: bool) {
        let caret = clamp_to_char_boundary(&self.value, caret);
        if selecting {
            if self.selection_anchor.is_none() {
                self.selection_anchor = Some(self.caret);
            }
            self.caret = caret;
            self.normalize_anchor();
        } else {
            self.caret = caret;
            self.selection_anchor = None;
        }
    }

    fn delete_selection(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.selection_anchor = None;
            return false;
        };

        self.value.drain(sel.start..sel.end);
        self.caret = sel.start;
        self.selection_anchor = None;
        self.bump();
        true
    }

    fn normalize_anchor(&mut self) {
        let Some(anchor) = self.selection_anchor else {
            return;
        };
        let anchor = clamp_to_char_boundary(&self.value, anchor);
        // A collapsed selection is no selection.
        self.selection_anchor = (anchor != self.caret).then_some(anchor);
    }

    fn clamp(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        if let Some(a) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.value, a));
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn selection_range(value: &str, anchor: Option<usize>, caret: usize) -> Option<SelectionRange> {
    let a = clamp_to_char_boundary(value, anchor?);
    let c = clamp_to_char_boundary(value, caret);
    let range = SelectionRange::new(a, c);
    (!range.is_empty()).then_some(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_caret_on_char_boundary() {
        let mut buf = EditBuffer::default();
        assert!(buf.insert_text("€", None));
        assert_eq!(buf.value(), "€");
        assert_eq!(buf.caret(), "€".len());
        assert!(buf.value().is_char_boundary(buf.caret()));
    }

    #[test]
    fn typing_strips_newlines() {
        let mut buf = EditBuffer::default();
        buf.insert_text("a\nb\r\nc", None);
        assert_eq!(buf.value(), "abc");
    }

    #[test]
    fn set_stores_value_verbatim() {
        let mut buf = EditBuffer::new("x");
        buf.set("line\nbreak");
        assert_eq!(buf.value(), "line\nbreak");
        assert_eq!(buf.caret(), "line\nbreak".len());
    }

    #[test]
    fn backspace_removes_a_full_scalar_value() {
        let mut buf = EditBuffer::new("a€");
        assert!(buf.backspace());
        assert_eq!(buf.value(), "a");
        assert_eq!(buf.caret(), 1);
    }

    #[test]
    fn backspace_at_start_is_not_a_change() {
        let mut buf = EditBuffer::new("ab");
        buf.move_to_start(false);
        let rev = buf.revision();
        assert!(!buf.backspace());
        assert_eq!(buf.revision(), rev);
    }

    #[test]
    fn shift_left_selects_and_typing_replaces_it() {
        let mut buf = EditBuffer::new("hello");
        buf.move_left(true);
        assert_eq!(buf.selection(), Some(SelectionRange { start: 4, end: 5 }));

        buf.insert_text("X", None);
        assert_eq!(buf.value(), "hellX");
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn delete_removes_selection_before_single_char() {
        let mut buf = EditBuffer::new("abcd");
        buf.move_left(true);
        buf.move_left(true);
        assert!(buf.delete());
        assert_eq!(buf.value(), "ab");
        assert_eq!(buf.caret(), 2);
    }

    #[test]
    fn plain_arrow_collapses_selection_to_its_edge() {
        let mut buf = EditBuffer::new("hello");
        buf.select_all();
        buf.move_left(false);
        assert_eq!(buf.caret(), 0);
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn max_units_bounds_insertion() {
        let mut buf = EditBuffer::new("ab");
        assert!(buf.insert_text("cdef", Some(4)));
        assert_eq!(buf.value(), "abcd");
        assert!(!buf.insert_text("g", Some(4)));
        assert_eq!(buf.value(), "abcd");
    }

    #[test]
    fn max_units_applies_after_selection_is_replaced() {
        let mut buf = EditBuffer::new("abcd");
        buf.select_all();
        assert!(buf.insert_text("xyz", Some(4)));
        assert_eq!(buf.value(), "xyz");
    }

    #[test]
    fn revision_moves_only_on_text_changes() {
        let mut buf = EditBuffer::new("ab");
        let rev = buf.revision();
        buf.move_left(false);
        buf.select_all();
        assert_eq!(buf.revision(), rev);
        buf.insert_text("z", None);
        assert_ne!(buf.revision(), rev);
    }
}
