//! The handle a host hands to a form-associated control.
//!
//! The host owns form submission, constraint aggregation and error
//! reporting. A control only pushes its value and validity through this
//! handle and reads validity back; it never computes validity on its own.

use crate::validity::ValidityFlags;
use std::fmt;

/// Element a reported validity error is positioned against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationAnchor {
    /// The input primitive inside the control's rendering boundary.
    InnerInput,
    /// Some other element, by id.
    Element(String),
}

/// Why the host is restoring form state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestoreMode {
    /// Navigation restore (back/forward, session restore).
    #[default]
    Restore,
    /// Browser autofill.
    Autocomplete,
}

impl RestoreMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "restore" => Some(RestoreMode::Restore),
            "autocomplete" => Some(RestoreMode::Autocomplete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RestoreMode::Restore => "restore",
            RestoreMode::Autocomplete => "autocomplete",
        }
    }
}

impl fmt::Display for RestoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form-association internals supplied by the host at construction.
pub trait ElementInternals {
    /// Publish the submission value and the state the host should hand back
    /// on restore.
    fn set_form_value(&mut self, value: &str, state: &str);

    /// Replace the validity flags.
    ///
    /// `message` is the human-readable reason; `anchor` positions reported
    /// errors. Clearing all flags clears the message.
    fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: Option<&str>,
        anchor: Option<ValidationAnchor>,
    );

    fn validity(&self) -> ValidityFlags;

    fn validation_message(&self) -> &str;

    /// Returns validity; an invalid control fires an `invalid` event.
    fn check_validity(&mut self) -> bool;

    /// Like [`check_validity`](Self::check_validity), and also surfaces the
    /// message to the user when invalid.
    fn report_validity(&mut self) -> bool;
}
