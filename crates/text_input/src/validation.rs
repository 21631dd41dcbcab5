//! Validation orchestration and error presentation.
//!
//! The validation procedure is external: it receives a [`ValidationTarget`]
//! and decides validity on its own. The delegate only calls it at the two
//! trigger points and decides, from the `show_error` flag, whether the
//! outcome may reach the screen.

use crate::input_type::InputType;
use crate::rendered::RenderedControl;
use form_internals::{ElementInternals, ValidationAnchor, ValidityFlags};

/// Whether an error is currently on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidityPresentation {
    #[default]
    Clean,
    ErrorShown,
}

/// Where a validation pass came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationTrigger {
    /// Silent pass when the control is connected.
    Connect,
    /// Presenting pass when the input loses focus.
    Blur,
}

impl ValidationTrigger {
    pub fn show_error(self) -> bool {
        matches!(self, ValidationTrigger::Blur)
    }
}

/// What a validation procedure sees of the control, and how it reports back.
///
/// The rendered control is read-only here: a procedure can read constraints
/// and report validity but cannot move focus or edit the value.
pub struct ValidationTarget<'a> {
    control: &'a RenderedControl,
    internals: &'a mut dyn ElementInternals,
}

impl<'a> ValidationTarget<'a> {
    pub(crate) fn new(
        control: &'a RenderedControl,
        internals: &'a mut dyn ElementInternals,
    ) -> Self {
        Self { control, internals }
    }

    pub fn value(&self) -> &str {
        self.control.input().value()
    }

    /// Value length in UTF-16 code units.
    pub fn value_units(&self) -> usize {
        self.control.input().value_units()
    }

    pub fn input_type(&self) -> InputType {
        self.control.input().input_type()
    }

    pub fn required(&self) -> bool {
        self.control.input().required()
    }

    pub fn disabled(&self) -> bool {
        self.control.input().disabled()
    }

    pub fn read_only(&self) -> bool {
        self.control.input().read_only()
    }

    pub fn min_length(&self) -> Option<u32> {
        self.control.input().min_length()
    }

    pub fn max_length(&self) -> Option<u32> {
        self.control.input().max_length()
    }

    pub fn pattern(&self) -> &str {
        self.control.input().pattern()
    }

    /// Report validity for the control.
    pub fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: Option<&str>,
        anchor: Option<ValidationAnchor>,
    ) {
        self.internals.set_validity(flags, message, anchor);
    }

    pub fn validity(&self) -> ValidityFlags {
        self.internals.validity()
    }

    pub fn validation_message(&self) -> &str {
        self.internals.validation_message()
    }
}

/// An external validation procedure.
///
/// Runs synchronously; everything it reports through the target must be
/// reported before it returns.
pub trait Validator {
    fn validate(&mut self, target: &mut ValidationTarget<'_>, show_error: bool);
}

impl<F> Validator for F
where
    F: FnMut(&mut ValidationTarget<'_>, bool),
{
    fn validate(&mut self, target: &mut ValidationTarget<'_>, show_error: bool) {
        self(target, show_error)
    }
}

/// Procedure that never reports anything; validity stays whatever was last set.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoValidation;

impl Validator for NoValidation {
    fn validate(&mut self, _target: &mut ValidationTarget<'_>, _show_error: bool) {}
}

/// Sole caller of the validation procedure and owner of the presentation state.
pub(crate) struct ValidationDelegate {
    validator: Box<dyn Validator>,
    presentation: ValidityPresentation,
}

impl ValidationDelegate {
    pub(crate) fn new(validator: Box<dyn Validator>) -> Self {
        Self {
            validator,
            presentation: ValidityPresentation::Clean,
        }
    }

    pub(crate) fn presentation(&self) -> ValidityPresentation {
        self.presentation
    }

    /// Run the procedure for `trigger`.
    ///
    /// A silent pass may change validity but never what is on screen. A
    /// presenting pass shows the reported message when the control ends up
    /// invalid and clears the screen when it ends up valid.
    pub(crate) fn run(
        &mut self,
        trigger: ValidationTrigger,
        control: &mut RenderedControl,
        internals: &mut dyn ElementInternals,
    ) {
        let show_error = trigger.show_error();
        {
            let mut target = ValidationTarget::new(control, internals);
            self.validator.validate(&mut target, show_error);
        }

        let flags = internals.validity();
        log::debug!(target: "text_input.validation", "{trigger:?} pass: {flags}");
        if !show_error {
            return;
        }

        if flags.is_valid() {
            self.clear(control);
        } else {
            control.show_error(internals.validation_message());
            self.presentation = ValidityPresentation::ErrorShown;
        }
    }

    /// Optimistic clear on every edit: the error leaves the screen before
    /// the new value is validated.
    pub(crate) fn clear(&mut self, control: &mut RenderedControl) {
        if self.presentation == ValidityPresentation::ErrorShown {
            log::debug!(target: "text_input.validation", "error presentation cleared");
        }
        control.clear_error();
        self.presentation = ValidityPresentation::Clean;
    }
}

impl std::fmt::Debug for ValidationDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationDelegate")
            .field("presentation", &self.presentation)
            .finish_non_exhaustive()
    }
}
