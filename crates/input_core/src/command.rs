//! Keystroke-level edit commands.

use crate::buffer::EditBuffer;

/// One keystroke delivered to a focused single-line control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditCommand {
    /// Text produced by the keystroke (usually one character).
    Insert(String),
    Backspace,
    Delete,
    Left { selecting: bool },
    Right { selecting: bool },
    Home { selecting: bool },
    End { selecting: bool },
    SelectAll,
}

impl EditCommand {
    /// Whether this command can change the text (as opposed to moving the caret).
    pub fn mutates_text(&self) -> bool {
        matches!(self, Self::Insert(_) | Self::Backspace | Self::Delete)
    }
}

impl EditBuffer {
    /// Apply `cmd`, bounding insertions by `max_units` UTF-16 code units.
    ///
    /// Returns `true` if the value changed.
    pub fn apply(&mut self, cmd: &EditCommand, max_units: Option<usize>) -> bool {
        match cmd {
            EditCommand::Insert(s) => self.insert_text(s, max_units),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Delete => self.delete(),
            EditCommand::Left { selecting } => {
                self.move_left(*selecting);
                false
            }
            EditCommand::Right { selecting } => {
                self.move_right(*selecting);
                false
            }
            EditCommand::Home { selecting } => {
                self.move_to_start(*selecting);
                false
            }
            EditCommand::End { selecting } => {
                self.move_to_end(*selecting);
                false
            }
            EditCommand::SelectAll => {
                self.select_all();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_commands_report_no_change() {
        let mut buf = EditBuffer::new("abc");
        assert!(!buf.apply(&EditCommand::Home { selecting: false }, None));
        assert!(!buf.apply(&EditCommand::End { selecting: true }, None));
        assert!(!buf.apply(&EditCommand::SelectAll, None));
        assert_eq!(buf.value(), "abc");
    }

    #[test]
    fn home_then_insert_prepends() {
        let mut buf = EditBuffer::new("bc");
        buf.apply(&EditCommand::Home { selecting: false }, None);
        assert!(buf.apply(&EditCommand::Insert("a".into()), None));
        assert_eq!(buf.value(), "abc");
    }
}
