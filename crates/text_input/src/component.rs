//! The text input control.

use crate::attributes::{
    AttributeHandling, AttributeKind, CoercedProperty, ControlConfiguration, FlagValue,
};
use crate::constraints::ConstraintValidator;
use crate::input_type::InputType;
use crate::lifecycle::FormLifecycleAdapter;
use crate::rendered::RenderedControl;
use crate::sync::{AttributeSynchronizer, apply_flag};
use crate::validation::{ValidationDelegate, ValidationTrigger, Validator, ValidityPresentation};
use form_internals::{
    ElementInternals, FormInternals, RestoreMode, ValidationAnchor, ValidityFlags,
};
use input_core::EditCommand;

/// A single-line text field that takes part in its host form.
///
/// The host drives it through attribute changes, connection, and the form
/// callbacks (`form_reset`, `form_state_restore`, `form_disabled`). User
/// interaction arrives as focus, keystrokes and blur. Everything runs
/// synchronously on the caller's thread.
///
/// ```
/// use form_internals::FormInternals;
/// use text_input::{ConstraintValidator, TextInput};
///
/// let mut field = TextInput::new(FormInternals::new(), ConstraintValidator::new());
/// field.attribute_changed("required", Some("true"));
/// field.connected();
///
/// field.focus();
/// field.blur();
/// assert!(!field.check_validity());
/// assert_eq!(field.rendered().message().text(), "Please fill out this field.");
/// ```
#[derive(Debug)]
pub struct TextInput<I = FormInternals> {
    rendered: RenderedControl,
    sync: AttributeSynchronizer,
    form: FormLifecycleAdapter<I>,
    validation: ValidationDelegate,
    /// A change event is owed on the next blur.
    edited_since_focus: bool,
}

impl Default for TextInput<FormInternals> {
    fn default() -> Self {
        TextInput::new(FormInternals::new(), ConstraintValidator::new())
    }
}

impl<I: ElementInternals> TextInput<I> {
    /// Build the control and its rendering boundary.
    ///
    /// `internals` is the host's form-association handle; `validator` is the
    /// validation procedure run on connection and on blur.
    pub fn new(internals: I, validator: impl Validator + 'static) -> Self {
        Self {
            rendered: RenderedControl::new(),
            sync: AttributeSynchronizer::default(),
            form: FormLifecycleAdapter::new(internals),
            validation: ValidationDelegate::new(Box::new(validator)),
            edited_since_focus: false,
        }
    }

    // --- Host lifecycle ---

    /// An attribute on the control changed; `None` means it was removed.
    pub fn attribute_changed(&mut self, name: &str, value: Option<&str>) {
        let Some(kind) = self.sync.record(name, value) else {
            return;
        };

        match kind.handling() {
            AttributeHandling::Coerced(CoercedProperty::Value) => {
                self.set_value(value.unwrap_or(""));
            }
            AttributeHandling::Coerced(CoercedProperty::Required) => {
                self.set_required(value);
            }
            AttributeHandling::Coerced(CoercedProperty::Disabled) => {
                self.set_disabled(value);
            }
            AttributeHandling::Passthrough => {
                self.sync.forward(&mut self.rendered, kind, value);
            }
            AttributeHandling::Recorded => {}
        }
    }

    /// The control was inserted into its host tree.
    ///
    /// Flushes staged configuration, then runs a validation pass that may
    /// set validity but never shows an error.
    pub fn connected(&mut self) {
        self.sync.connect(&mut self.rendered);
        self.validation.run(
            ValidationTrigger::Connect,
            &mut self.rendered,
            self.form.internals_mut(),
        );
    }

    /// The control was removed from its host tree. Focus is dropped without
    /// a blur pass.
    pub fn disconnected(&mut self) {
        self.sync.disconnect();
        self.rendered.input_mut().blur();
        self.edited_since_focus = false;
    }

    pub fn is_connected(&self) -> bool {
        self.sync.is_connected()
    }

    // --- Form callbacks ---

    /// The owning form was reset: back to the declared `value` attribute.
    pub fn form_reset(&mut self) {
        let declared = self.sync.configuration().get(AttributeKind::Value.as_str());
        self.form.reset(&mut self.rendered, declared);
    }

    /// The host restores a previously saved state.
    ///
    /// The value is not reported back to the form, and no error is shown for
    /// it until the next blur.
    pub fn form_state_restore(&mut self, state: &str, mode: RestoreMode) {
        self.form.restore(&mut self.rendered, state, mode);
    }

    /// The owning form (or fieldset) changed its disabled state.
    pub fn form_disabled(&mut self, disabled: bool) {
        log::debug!(target: "text_input.form", "form disabled = {disabled}");
        self.set_disabled(disabled);
    }

    // --- User interaction ---

    /// Focus the input. Refused while disconnected or disabled.
    pub fn focus(&mut self) -> bool {
        if !self.sync.is_connected() || !self.rendered.input_mut().focus() {
            return false;
        }
        self.edited_since_focus = false;
        true
    }

    /// Move focus away. Fires the owed change, then the presenting
    /// validation pass. A no-op if the input is not focused.
    pub fn blur(&mut self) {
        if !self.rendered.input_mut().blur() {
            return;
        }
        if std::mem::take(&mut self.edited_since_focus) {
            self.on_input();
        }
        self.validation.run(
            ValidationTrigger::Blur,
            &mut self.rendered,
            self.form.internals_mut(),
        );
    }

    /// Deliver one keystroke to the focused input.
    ///
    /// Every delivered keystroke clears a shown error and reports the value,
    /// whether or not the text changed. Returns `false` if the keystroke was
    /// not delivered (input not focused).
    pub fn keystroke(&mut self, cmd: &EditCommand) -> bool {
        let Some(changed) = self.rendered.input_mut().keystroke(cmd) else {
            return false;
        };
        log::trace!(target: "text_input.form", "keystroke {cmd:?} (changed={changed})");
        self.edited_since_focus |= changed;
        self.on_input();
        true
    }

    /// Type `text` one character per keystroke.
    pub fn type_text(&mut self, text: &str) -> bool {
        text.chars()
            .all(|c| self.keystroke(&EditCommand::Insert(c.to_string())))
    }

    fn on_input(&mut self) {
        self.validation.clear(&mut self.rendered);
        self.form.report_value(&self.rendered);
    }

    // --- Properties ---

    pub fn value(&self) -> &str {
        self.rendered.input().value()
    }

    /// Set the displayed value. The form learns it; nothing is validated.
    pub fn set_value(&mut self, value: &str) {
        self.rendered.input_mut().set_value(value);
        self.form.report_value(&self.rendered);
    }

    pub fn required(&self) -> bool {
        self.rendered.input().required()
    }

    /// `true`/`"true"` sets, `false`/`"false"` clears, anything else is ignored.
    pub fn set_required<'a>(&mut self, value: impl Into<FlagValue<'a>>) {
        apply_flag(&mut self.rendered, AttributeKind::Required, value.into());
    }

    pub fn disabled(&self) -> bool {
        self.rendered.input().disabled()
    }

    /// Same coercion as [`set_required`](Self::set_required).
    pub fn set_disabled<'a>(&mut self, value: impl Into<FlagValue<'a>>) {
        apply_flag(&mut self.rendered, AttributeKind::Disabled, value.into());
    }

    pub fn input_type(&self) -> InputType {
        self.rendered.input().input_type()
    }

    pub fn set_input_type(&mut self, ty: &str) {
        self.rendered.input_mut().set_attribute("type", ty);
    }

    pub fn min_length(&self) -> Option<u32> {
        self.rendered.input().min_length()
    }

    pub fn set_min_length(&mut self, min: u32) {
        self.rendered.input_mut().set_attribute("minlength", &min.to_string());
    }

    pub fn max_length(&self) -> Option<u32> {
        self.rendered.input().max_length()
    }

    pub fn set_max_length(&mut self, max: u32) {
        self.rendered.input_mut().set_attribute("maxlength", &max.to_string());
    }

    /// Read-only property; change it through the `readonly` attribute.
    pub fn read_only(&self) -> bool {
        self.rendered.input().read_only()
    }

    pub fn pattern(&self) -> &str {
        self.rendered.input().pattern()
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        self.rendered.input_mut().set_attribute("pattern", pattern);
    }

    pub fn placeholder(&self) -> &str {
        self.rendered.input().placeholder()
    }

    pub fn spellcheck(&self) -> bool {
        self.rendered.input().spellcheck()
    }

    /// Id of the suggestions list, if one is referenced.
    pub fn list(&self) -> Option<&str> {
        self.rendered.input().list()
    }

    // --- Validity ---

    pub fn check_validity(&mut self) -> bool {
        self.form.check_validity()
    }

    pub fn report_validity(&mut self) -> bool {
        self.form.report_validity()
    }

    pub fn validity(&self) -> ValidityFlags {
        self.form.validity()
    }

    pub fn validation_message(&self) -> &str {
        self.form.validation_message()
    }

    /// Report validity directly, bypassing the validation procedure.
    pub fn set_validity(
        &mut self,
        flags: ValidityFlags,
        message: Option<&str>,
        anchor: Option<ValidationAnchor>,
    ) {
        self.form.set_validity(flags, message, anchor);
    }

    // --- Inspection ---

    pub fn presentation(&self) -> ValidityPresentation {
        self.validation.presentation()
    }

    pub fn rendered(&self) -> &RenderedControl {
        &self.rendered
    }

    pub fn configuration(&self) -> &ControlConfiguration {
        self.sync.configuration()
    }

    pub fn internals(&self) -> &I {
        self.form.internals()
    }
}
