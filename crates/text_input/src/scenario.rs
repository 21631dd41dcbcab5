//! Scripted replay of host and user events against one control.
//!
//! A scenario is a TOML document with an optional `[messages]` table and a
//! list of `[[step]]` tables, each tagged by `op`:
//!
//! ```toml
//! [[step]]
//! op = "attribute"
//! name = "required"
//! value = "true"
//!
//! [[step]]
//! op = "connect"
//!
//! [[step]]
//! op = "focus"
//!
//! [[step]]
//! op = "blur"
//! ```
//!
//! An `attribute` step without `value` removes the attribute.

use crate::component::TextInput;
use crate::constraints::{ConstraintValidator, ValidationMessages};
use crate::validation::ValidityPresentation;
use form_internals::{FormInternals, RestoreMode, ValidityFlags};
use input_core::EditCommand;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    #[serde(default)]
    pub messages: ValidationMessages,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Attribute {
        name: String,
        value: Option<String>,
    },
    Connect,
    Disconnect,
    Focus,
    Blur,
    Type {
        text: String,
    },
    Key {
        key: Key,
        #[serde(default)]
        selecting: bool,
    },
    SetValue {
        value: String,
    },
    Reset,
    Restore {
        state: String,
        #[serde(default = "default_mode")]
        mode: String,
    },
    FormDisabled {
        disabled: bool,
    },
    /// Record the outcome of `check_validity`.
    Check,
    /// Record the outcome of `report_validity`.
    Report,
}

fn default_mode() -> String {
    RestoreMode::default().as_str().to_string()
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    SelectAll,
}

impl Key {
    fn command(self, selecting: bool) -> EditCommand {
        match self {
            Key::Backspace => EditCommand::Backspace,
            Key::Delete => EditCommand::Delete,
            Key::Left => EditCommand::Left { selecting },
            Key::Right => EditCommand::Right { selecting },
            Key::Home => EditCommand::Home { selecting },
            Key::End => EditCommand::End { selecting },
            Key::SelectAll => EditCommand::SelectAll,
        }
    }
}

#[derive(Debug)]
pub enum ScenarioError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    UnknownRestoreMode {
        step: usize,
        mode: String,
    },
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io { path, source } => {
                write!(f, "failed to read scenario {}: {source}", path.display())
            }
            ScenarioError::Parse(err) => write!(f, "invalid scenario: {err}"),
            ScenarioError::UnknownRestoreMode { step, mode } => {
                write!(f, "step {step}: unknown restore mode {mode:?}")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io { source, .. } => Some(source),
            ScenarioError::Parse(err) => Some(err),
            ScenarioError::UnknownRestoreMode { .. } => None,
        }
    }
}

impl Scenario {
    pub fn from_toml_str(src: &str) -> Result<Self, ScenarioError> {
        toml::from_str(src).map_err(ScenarioError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Form state after the last step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub value: String,
    /// Last value handed to the form, `None` if nothing was ever reported.
    pub submitted: Option<String>,
    pub validity: ValidityFlags,
    pub validation_message: String,
    pub presentation: ValidityPresentation,
    /// Text of the message region.
    pub shown_message: String,
    /// Outcomes of `check` and `report` steps, in order.
    pub checks: Vec<bool>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "value: {:?}", self.value)?;
        match &self.submitted {
            Some(submitted) => writeln!(f, "submitted: {submitted:?}")?,
            None => writeln!(f, "submitted: <none>")?,
        }
        writeln!(f, "validity: {}", self.validity)?;
        writeln!(f, "validation message: {:?}", self.validation_message)?;
        writeln!(f, "presentation: {:?}", self.presentation)?;
        writeln!(f, "shown message: {:?}", self.shown_message)?;
        write!(f, "checks: {:?}", self.checks)
    }
}

/// Drive a fresh control with the built-in constraint validator through
/// every step of `scenario`.
pub fn run(scenario: &Scenario) -> Result<Report, ScenarioError> {
    let validator = ConstraintValidator::with_messages(scenario.messages.clone());
    let mut field = TextInput::new(FormInternals::new(), validator);
    let mut checks = Vec::new();

    for (index, step) in scenario.steps.iter().enumerate() {
        log::debug!(target: "text_field.replay", "step {index}: {step:?}");
        match step {
            Step::Attribute { name, value } => field.attribute_changed(name, value.as_deref()),
            Step::Connect => field.connected(),
            Step::Disconnect => field.disconnected(),
            Step::Focus => {
                if !field.focus() {
                    log::debug!(target: "text_field.replay", "step {index}: focus refused");
                }
            }
            Step::Blur => field.blur(),
            Step::Type { text } => {
                if !field.type_text(text) {
                    log::debug!(target: "text_field.replay", "step {index}: typing dropped");
                }
            }
            Step::Key { key, selecting } => {
                field.keystroke(&key.command(*selecting));
            }
            Step::SetValue { value } => field.set_value(value),
            Step::Reset => field.form_reset(),
            Step::Restore { state, mode } => {
                let mode = RestoreMode::parse(mode).ok_or_else(|| {
                    ScenarioError::UnknownRestoreMode {
                        step: index,
                        mode: mode.clone(),
                    }
                })?;
                field.form_state_restore(state, mode);
            }
            Step::FormDisabled { disabled } => field.form_disabled(*disabled),
            Step::Check => checks.push(field.check_validity()),
            Step::Report => checks.push(field.report_validity()),
        }
    }

    Ok(Report {
        value: field.value().to_string(),
        submitted: field.internals().form_value().map(str::to_string),
        validity: field.validity(),
        validation_message: field.validation_message().to_string(),
        presentation: field.presentation(),
        shown_message: field.rendered().message().text().to_string(),
        checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_internals::ValidityFlag;

    #[test]
    fn parses_tagged_steps() {
        let scenario = Scenario::from_toml_str(
            r#"
            [[step]]
            op = "attribute"
            name = "pattern"
            value = "[0-9]+"

            [[step]]
            op = "attribute"
            name = "placeholder"

            [[step]]
            op = "key"
            key = "select_all"
            "#,
        )
        .unwrap();

        assert_eq!(
            scenario.steps,
            [
                Step::Attribute {
                    name: "pattern".into(),
                    value: Some("[0-9]+".into()),
                },
                Step::Attribute {
                    name: "placeholder".into(),
                    value: None,
                },
                Step::Key {
                    key: Key::SelectAll,
                    selecting: false,
                },
            ]
        );
        assert_eq!(scenario.messages, ValidationMessages::default());
    }

    #[test]
    fn unknown_op_is_a_parse_error() {
        let err = Scenario::from_toml_str("[[step]]\nop = \"submit\"\n").unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
        assert!(err.to_string().starts_with("invalid scenario:"));
    }

    #[test]
    fn unknown_restore_mode_names_the_step() {
        let scenario = Scenario::from_toml_str(
            "[[step]]\nop = \"restore\"\nstate = \"x\"\nmode = \"navigate\"\n",
        )
        .unwrap();
        let err = run(&scenario).unwrap_err();
        assert_eq!(err.to_string(), "step 0: unknown restore mode \"navigate\"");
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Scenario::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.toml"));
    }

    #[test]
    fn empty_scenario_reports_untouched_control() {
        let report = run(&Scenario::default()).unwrap();
        assert_eq!(report.value, "");
        assert_eq!(report.submitted, None);
        assert!(report.validity.is_valid());
        assert_eq!(report.presentation, ValidityPresentation::Clean);
        assert!(report.checks.is_empty());
    }

    #[test]
    fn run_collects_checks_in_order() {
        let scenario = Scenario {
            messages: ValidationMessages::default(),
            steps: vec![
                Step::Attribute {
                    name: "required".into(),
                    value: Some("true".into()),
                },
                Step::Connect,
                Step::Check,
                Step::SetValue {
                    value: "ok".into(),
                },
                Step::Focus,
                Step::Blur,
                Step::Report,
            ],
        };
        let report = run(&scenario).unwrap();
        assert_eq!(report.checks, [false, true]);
        assert_eq!(report.submitted.as_deref(), Some("ok"));
        assert!(!report.validity.contains(ValidityFlag::ValueMissing));
    }
}
