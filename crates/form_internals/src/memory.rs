//! In-memory internals handle, standing in for a host document.

use crate::internals::{ElementInternals, ValidationAnchor};
use crate::validity::ValidityFlags;

/// Records everything a control pushes through its internals handle.
#[derive(Clone, Debug, Default)]
pub struct FormInternals {
    value: Option<String>,
    state: Option<String>,
    flags: ValidityFlags,
    message: String,
    anchor: Option<ValidationAnchor>,
    invalid_events: usize,
    reported: Vec<String>,
    value_updates: usize,
}

impl FormInternals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last submission value, `None` until the control reports one.
    pub fn form_value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Last restorable state value.
    pub fn form_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Number of `set_form_value` calls received.
    pub fn value_updates(&self) -> usize {
        self.value_updates
    }

    pub fn anchor(&self) -> Option<&ValidationAnchor> {
        self.anchor.as_ref()
    }

    /// `invalid` events fired by `check_validity`/`report_validity`.
    pub fn invalid_events(&self) -> usize {
        self.invalid_events
    }

    /// Messages surfaced to the user by `report_validity`, oldest first.
    pub fn reported_messages(&self) -> &[String] {
        &self.reported
    }
}

impl ElementInternals for FormInternals {
    fn set_form_value(&mut self, value: &str, state: &str) {
        log::trace!(target: "form_internals", "form value {value:?} (state {state:?})");
        self.value = Some(value.to_string());
        self.state = Some(state.to_string());
        self.value_updates += 1;
    }

    fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: Option<&str>,
        anchor: Option<ValidationAnchor>,
    ) {
        self.flags = flags;
        self.anchor = anchor;
        self.message = match flags.first() {
            None => String::new(),
            Some(flag) => match message.filter(|m| !m.is_empty()) {
                Some(m) => m.to_string(),
                None => flag.default_message().to_string(),
            },
        };
        log::trace!(target: "form_internals", "validity {flags} {:?}", self.message);
    }

    fn validity(&self) -> ValidityFlags {
        self.flags
    }

    fn validation_message(&self) -> &str {
        &self.message
    }

    fn check_validity(&mut self) -> bool {
        let valid = self.flags.is_valid();
        if !valid {
            self.invalid_events += 1;
        }
        valid
    }

    fn report_validity(&mut self) -> bool {
        let valid = self.check_validity();
        if !valid {
            self.reported.push(self.message.clone());
        }
        valid
    }
}
