//! The control's rendering boundary.
//!
//! Built once when the component is constructed and owned by it for its
//! whole lifetime. It holds exactly one input primitive and one message
//! region; nothing outside the component reaches into it.

use crate::input_type::InputType;
use input_core::{EditBuffer, EditCommand, utf16_len};

/// Class set on the input while an error is presented.
pub const ERROR_CLASS: &str = "error";
/// Id of the message region, referenced by the input's `aria-describedby`.
pub const MESSAGE_ID: &str = "message";

/// One attribute mutation received by the input primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributePatch {
    Set { name: String, value: String },
    Remove { name: String },
}

/// The input primitive inside the boundary.
///
/// Attributes keep insertion order. Every mutation after construction is
/// journaled so forwarding order can be inspected.
#[derive(Clone, Debug)]
pub struct InputElement {
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    buffer: EditBuffer,
    /// Set once the value was written by the user or through the `value`
    /// property; from then on the `value` attribute only changes the default.
    dirty: bool,
    focused: bool,
    journal: Vec<AttributePatch>,
}

impl InputElement {
    fn new() -> Self {
        Self {
            attributes: vec![
                ("type".to_string(), "text".to_string()),
                ("aria-describedby".to_string(), MESSAGE_ID.to_string()),
            ],
            classes: Vec::new(),
            buffer: EditBuffer::default(),
            dirty: false,
            focused: false,
            journal: Vec::new(),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k == name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self.journal.push(AttributePatch::Set {
            name: name.to_string(),
            value: value.to_string(),
        });

        if name == "value" && !self.dirty {
            self.buffer.set(value);
        }
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) {
        let before = self.attributes.len();
        self.attributes.retain(|(k, _)| k != name);
        if self.attributes.len() == before {
            return;
        }
        self.journal.push(AttributePatch::Remove {
            name: name.to_string(),
        });

        if name == "value" && !self.dirty {
            self.buffer.set("");
        }
    }

    /// Attribute mutations received since construction, oldest first.
    pub fn journal(&self) -> &[AttributePatch] {
        &self.journal
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn value(&self) -> &str {
        self.buffer.value()
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.buffer.set(value);
        self.dirty = true;
    }

    /// Revision of the displayed value; moves on every text change.
    pub fn value_revision(&self) -> u64 {
        self.buffer.revision()
    }

    pub fn caret(&self) -> usize {
        self.buffer.caret()
    }

    pub fn default_value(&self) -> &str {
        self.get_attribute("value").unwrap_or("")
    }

    pub fn input_type(&self) -> InputType {
        InputType::from_attr(self.get_attribute("type"))
    }

    pub fn required(&self) -> bool {
        self.has_attribute("required")
    }

    pub fn disabled(&self) -> bool {
        self.has_attribute("disabled")
    }

    pub fn read_only(&self) -> bool {
        self.has_attribute("readonly")
    }

    /// `None` when absent or not a non-negative integer.
    pub fn min_length(&self) -> Option<u32> {
        parse_length(self.get_attribute("minlength"))
    }

    pub fn max_length(&self) -> Option<u32> {
        parse_length(self.get_attribute("maxlength"))
    }

    pub fn pattern(&self) -> &str {
        self.get_attribute("pattern").unwrap_or("")
    }

    pub fn placeholder(&self) -> &str {
        self.get_attribute("placeholder").unwrap_or("")
    }

    /// Spell checking is on unless the attribute says `"false"`.
    pub fn spellcheck(&self) -> bool {
        !self
            .get_attribute("spellcheck")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("false"))
    }

    /// Id of the suggestions list the input refers to.
    pub fn list(&self) -> Option<&str> {
        self.get_attribute("list").filter(|id| !id.is_empty())
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns `false` when focus is refused (disabled input).
    pub(crate) fn focus(&mut self) -> bool {
        if self.disabled() {
            return false;
        }
        self.focused = true;
        self.buffer.collapse();
        true
    }

    /// Returns `false` when the input was not focused.
    pub(crate) fn blur(&mut self) -> bool {
        if !self.focused {
            return false;
        }
        self.focused = false;
        self.buffer.collapse();
        true
    }

    /// Deliver a keystroke. `None` if the input does not have focus,
    /// otherwise whether the value changed.
    pub(crate) fn keystroke(&mut self, cmd: &EditCommand) -> Option<bool> {
        if !self.focused {
            return None;
        }
        if cmd.mutates_text() && (self.read_only() || self.disabled()) {
            return Some(false);
        }

        let max_units = self.max_length().map(|m| m as usize);
        let changed = self.buffer.apply(cmd, max_units);
        if changed {
            self.dirty = true;
        }
        Some(changed)
    }

    /// Value length as form constraints measure it.
    pub fn value_units(&self) -> usize {
        utf16_len(self.buffer.value())
    }
}

fn parse_length(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse().ok()
}

/// Region below the input that shows the current error text.
///
/// Announced assertively (`role="alert"`, `aria-live="assertive"`).
#[derive(Clone, Debug, Default)]
pub struct MessageRegion {
    text: String,
}

impl MessageRegion {
    pub const ROLE: &'static str = "alert";
    pub const ARIA_LIVE: &'static str = "assertive";

    pub fn id(&self) -> &'static str {
        MESSAGE_ID
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

/// The boundary: one input primitive plus its message region.
#[derive(Clone, Debug)]
pub struct RenderedControl {
    input: InputElement,
    message: MessageRegion,
}

impl RenderedControl {
    pub(crate) fn new() -> Self {
        Self {
            input: InputElement::new(),
            message: MessageRegion::default(),
        }
    }

    pub fn input(&self) -> &InputElement {
        &self.input
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputElement {
        &mut self.input
    }

    pub fn message(&self) -> &MessageRegion {
        &self.message
    }

    /// Put the error on screen: message text, error class, `aria-invalid`.
    pub(crate) fn show_error(&mut self, message: &str) {
        self.message.text = message.to_string();
        self.input.add_class(ERROR_CLASS);
        self.input.set_attribute("aria-invalid", "true");
    }

    /// Take every trace of a presented error off screen.
    pub(crate) fn clear_error(&mut self) {
        self.message.text.clear();
        self.input.remove_class(ERROR_CLASS);
        self.input.remove_attribute("aria-invalid");
    }

    pub fn shows_error(&self) -> bool {
        self.message.is_visible() || self.input.has_class(ERROR_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_starts_with_text_input_described_by_message() {
        let control = RenderedControl::new();
        let input = control.input();
        assert_eq!(input.get_attribute("type"), Some("text"));
        assert_eq!(input.get_attribute("aria-describedby"), Some(MESSAGE_ID));
        assert_eq!(control.message().id(), MESSAGE_ID);
        assert!(input.journal().is_empty());
        assert!(!control.shows_error());
    }

    #[test]
    fn value_attribute_moves_display_only_until_dirty() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();

        input.set_attribute("value", "a");
        assert_eq!(input.value(), "a");

        input.set_value("typed");
        input.set_attribute("value", "b");
        assert_eq!(input.value(), "typed");
        assert_eq!(input.default_value(), "b");
    }

    #[test]
    fn remove_of_absent_attribute_is_not_journaled() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        input.remove_attribute("pattern");
        assert!(input.journal().is_empty());

        input.set_attribute("pattern", "x");
        input.remove_attribute("pattern");
        assert_eq!(
            input.journal(),
            [
                AttributePatch::Set {
                    name: "pattern".into(),
                    value: "x".into()
                },
                AttributePatch::Remove {
                    name: "pattern".into()
                },
            ]
        );
    }

    #[test]
    fn lengths_parse_non_negative_integers_only() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        assert_eq!(input.min_length(), None);
        input.set_attribute("minlength", " 3 ");
        assert_eq!(input.min_length(), Some(3));
        input.set_attribute("maxlength", "-1");
        assert_eq!(input.max_length(), None);
        input.set_attribute("maxlength", "ten");
        assert_eq!(input.max_length(), None);
    }

    #[test]
    fn spellcheck_defaults_on() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        assert!(input.spellcheck());
        input.set_attribute("spellcheck", "false");
        assert!(!input.spellcheck());
        input.set_attribute("spellcheck", "");
        assert!(input.spellcheck());
    }

    #[test]
    fn keystrokes_need_focus_and_respect_readonly() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        let cmd = EditCommand::Insert("a".into());

        assert_eq!(input.keystroke(&cmd), None);

        assert!(input.focus());
        assert_eq!(input.keystroke(&cmd), Some(true));
        assert_eq!(input.value(), "a");

        input.set_attribute("readonly", "");
        assert_eq!(input.keystroke(&cmd), Some(false));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn disabled_input_refuses_focus() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        input.set_attribute("disabled", "true");
        assert!(!input.focus());
        assert!(!input.blur());
    }

    #[test]
    fn maxlength_bounds_typing() {
        let mut control = RenderedControl::new();
        let input = control.input_mut();
        input.set_attribute("maxlength", "2");
        input.focus();
        input.keystroke(&EditCommand::Insert("abc".into()));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn error_presentation_round_trip() {
        let mut control = RenderedControl::new();
        control.show_error("Please fill out this field.");
        assert!(control.shows_error());
        assert!(control.input().has_class(ERROR_CLASS));
        assert_eq!(control.input().get_attribute("aria-invalid"), Some("true"));

        control.clear_error();
        assert!(!control.shows_error());
        assert_eq!(control.message().text(), "");
        assert!(!control.input().has_attribute("aria-invalid"));
    }
}
