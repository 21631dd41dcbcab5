//! Form participation on top of the rendered control and the host's internals.

use crate::rendered::RenderedControl;
use form_internals::{ElementInternals, RestoreMode, ValidationAnchor, ValidityFlags};

/// Bridges the rendered control to the host form.
///
/// The host only ever learns the value through this adapter, and validity
/// is always read back from the internals handle rather than recomputed.
#[derive(Debug)]
pub(crate) struct FormLifecycleAdapter<I> {
    internals: I,
}

impl<I: ElementInternals> FormLifecycleAdapter<I> {
    pub(crate) fn new(internals: I) -> Self {
        Self { internals }
    }

    pub(crate) fn internals(&self) -> &I {
        &self.internals
    }

    pub(crate) fn internals_mut(&mut self) -> &mut I {
        &mut self.internals
    }

    /// Publish the displayed value as both submission value and restore state.
    pub(crate) fn report_value(&mut self, control: &RenderedControl) {
        let value = control.input().value();
        log::trace!(target: "text_input.form", "report value {value:?}");
        self.internals.set_form_value(value, value);
    }

    /// Reset to the declared default, never to what the user last typed.
    pub(crate) fn reset(
        &mut self,
        control: &mut RenderedControl,
        declared_default: Option<&str>,
    ) {
        let value = declared_default.unwrap_or("");
        log::debug!(target: "text_input.form", "form reset to {value:?}");
        control.input_mut().set_value(value);
        self.report_value(control);
    }

    /// Put a restored value straight into the control.
    ///
    /// The host already holds this state, so nothing is reported back. Nothing
    /// is cleared or validated either: an invalid restored value shows no
    /// error until the next blur.
    pub(crate) fn restore(&self, control: &mut RenderedControl, state: &str, mode: RestoreMode) {
        log::debug!(target: "text_input.form", "form state restore ({mode}) to {state:?}");
        control.input_mut().set_value(state);
    }

    pub(crate) fn check_validity(&mut self) -> bool {
        self.internals.check_validity()
    }

    pub(crate) fn report_validity(&mut self) -> bool {
        self.internals.report_validity()
    }

    pub(crate) fn validity(&self) -> ValidityFlags {
        self.internals.validity()
    }

    pub(crate) fn validation_message(&self) -> &str {
        self.internals.validation_message()
    }

    pub(crate) fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: Option<&str>,
        anchor: Option<ValidationAnchor>,
    ) {
        self.internals.set_validity(flags, message, anchor);
    }
}
