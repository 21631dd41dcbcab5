//! Built-in validation procedure for the standard text constraints.
//!
//! Checks `required`, `type` (email, url), `pattern`, `minlength` and
//! `maxlength` against the current value and reports the outcome through
//! the validation target. Disabled and read-only controls are barred from
//! validation and always report valid.

use crate::input_type::InputType;
use crate::validation::{ValidationTarget, Validator};
use form_internals::{ValidationAnchor, ValidityFlag, ValidityFlags};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

/// Messages shown for each failing constraint.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationMessages {
    pub value_missing: String,
    pub type_mismatch_email: String,
    pub type_mismatch_url: String,
    pub pattern_mismatch: String,
    pub too_long: String,
    pub too_short: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            value_missing: ValidityFlag::ValueMissing.default_message().to_string(),
            type_mismatch_email: "Please enter an email address.".to_string(),
            type_mismatch_url: "Please enter a URL.".to_string(),
            pattern_mismatch: ValidityFlag::PatternMismatch.default_message().to_string(),
            too_long: ValidityFlag::TooLong.default_message().to_string(),
            too_short: ValidityFlag::TooShort.default_message().to_string(),
        }
    }
}

#[derive(Debug)]
pub enum MessagesError {
    Parse(toml::de::Error),
}

impl fmt::Display for MessagesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagesError::Parse(err) => write!(f, "invalid validation messages: {err}"),
        }
    }
}

impl std::error::Error for MessagesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MessagesError::Parse(err) => Some(err),
        }
    }
}

impl ValidationMessages {
    /// Parse messages from a TOML table; missing keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, MessagesError> {
        toml::from_str(src).map_err(MessagesError::Parse)
    }

    fn for_flag(&self, flag: ValidityFlag, ty: InputType) -> &str {
        match flag {
            ValidityFlag::ValueMissing => &self.value_missing,
            ValidityFlag::TypeMismatch if ty == InputType::Url => &self.type_mismatch_url,
            ValidityFlag::TypeMismatch => &self.type_mismatch_email,
            ValidityFlag::PatternMismatch => &self.pattern_mismatch,
            ValidityFlag::TooLong => &self.too_long,
            ValidityFlag::TooShort => &self.too_short,
            other => other.default_message(),
        }
    }
}

/// HTML's "valid email address" production.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+",
        r"@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
        r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    ))
    .expect("email regex is valid")
});

/// Validation procedure for the standard text constraints.
#[derive(Debug, Default)]
pub struct ConstraintValidator {
    messages: ValidationMessages,
    /// Last compiled `pattern`, keyed by its source. `None` when it did not compile.
    compiled: Option<(String, Option<Regex>)>,
}

impl ConstraintValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_messages(messages: ValidationMessages) -> Self {
        Self {
            messages,
            compiled: None,
        }
    }

    pub fn messages(&self) -> &ValidationMessages {
        &self.messages
    }

    /// Compute the flags for `target`'s current value and constraints.
    pub fn evaluate(&mut self, target: &ValidationTarget<'_>) -> ValidityFlags {
        let mut flags = ValidityFlags::empty();
        if target.disabled() || target.read_only() {
            return flags;
        }

        let value = target.value();
        if value.is_empty() {
            flags.set(ValidityFlag::ValueMissing, target.required());
            return flags;
        }

        flags.set(
            ValidityFlag::TypeMismatch,
            type_mismatch(target.input_type(), value),
        );

        if let Some(re) = self.pattern_regex(target.pattern()) {
            flags.set(ValidityFlag::PatternMismatch, !re.is_match(value));
        }

        let units = target.value_units();
        if let Some(max) = target.max_length() {
            flags.set(ValidityFlag::TooLong, units > max as usize);
        }
        if let Some(min) = target.min_length() {
            flags.set(ValidityFlag::TooShort, units < min as usize);
        }
        flags
    }

    fn pattern_regex(&mut self, pattern: &str) -> Option<&Regex> {
        if pattern.is_empty() {
            return None;
        }

        let stale = self
            .compiled
            .as_ref()
            .is_none_or(|(source, _)| source != pattern);
        if stale {
            // The pattern must match the whole value.
            let compiled = match Regex::new(&format!("^(?:{pattern})$")) {
                Ok(re) => Some(re),
                Err(err) => {
                    log::warn!(
                        target: "text_input.constraints",
                        "pattern {pattern:?} ignored: {err}"
                    );
                    None
                }
            };
            self.compiled = Some((pattern.to_string(), compiled));
        }

        self.compiled.as_ref().and_then(|(_, re)| re.as_ref())
    }
}

fn type_mismatch(ty: InputType, value: &str) -> bool {
    match ty {
        InputType::Email => !EMAIL.is_match(value),
        InputType::Url => url::Url::parse(value).is_err(),
        InputType::Text | InputType::Search | InputType::Tel | InputType::Password => false,
    }
}

impl Validator for ConstraintValidator {
    fn validate(&mut self, target: &mut ValidationTarget<'_>, show_error: bool) {
        let flags = self.evaluate(target);
        let message = flags
            .first()
            .map(|flag| self.messages.for_flag(flag, target.input_type()));
        log::trace!(
            target: "text_input.constraints",
            "{:?} -> {flags} (show_error={show_error})",
            target.value()
        );
        let anchor = (!flags.is_valid()).then_some(ValidationAnchor::InnerInput);
        target.set_validity(flags, message, anchor);
    }
}
