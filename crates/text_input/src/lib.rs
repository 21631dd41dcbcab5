//! # text_input
//!
//! A form-associated single-line text field.
//!
//! The control keeps three things consistent under any interleaving of host
//! and user events:
//! - declarative configuration arriving as attributes, possibly before the
//!   control is connected ([`ControlConfiguration`], replayed on connection)
//! - form participation: value reporting, reset, state restore and disabled
//!   propagation through the host's [`ElementInternals`] handle
//! - error presentation: a silent validation pass on connection, a
//!   presenting pass on blur, and an optimistic clear on every keystroke
//!
//! Validation rules are not part of the control. They come from a
//! [`Validator`]; [`ConstraintValidator`] implements the standard text
//! constraints.
//!
//! [`ElementInternals`]: form_internals::ElementInternals

mod attributes;
mod component;
mod constraints;
mod input_type;
mod lifecycle;
mod rendered;
#[cfg(feature = "scenario")]
pub mod scenario;
mod sync;
mod validation;

pub use attributes::{
    AttributeHandling, AttributeKind, CoercedProperty, ControlConfiguration, FlagValue,
};
pub use component::TextInput;
pub use constraints::{ConstraintValidator, MessagesError, ValidationMessages};
pub use input_type::InputType;
pub use rendered::{
    AttributePatch, ERROR_CLASS, InputElement, MESSAGE_ID, MessageRegion, RenderedControl,
};
pub use validation::{
    NoValidation, ValidationTarget, ValidationTrigger, Validator, ValidityPresentation,
};

pub use form_internals::{
    ElementInternals, FormInternals, RestoreMode, ValidationAnchor, ValidityFlag, ValidityFlags,
};
pub use input_core::EditCommand;
