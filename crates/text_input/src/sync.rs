//! Attribute synchronization between the host and the rendered control.
//!
//! Every attribute change is recorded first. Passthrough attributes are
//! forwarded literally while the control is reachable and staged otherwise;
//! connecting replays the whole record in receipt order.

use crate::attributes::{AttributeKind, ControlConfiguration, FlagValue};
use crate::rendered::RenderedControl;

#[derive(Clone, Debug, Default)]
pub(crate) struct AttributeSynchronizer {
    config: ControlConfiguration,
    connected: bool,
}

impl AttributeSynchronizer {
    pub(crate) fn configuration(&self) -> &ControlConfiguration {
        &self.config
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connected
    }

    /// Record `name` and classify it. `None` for names outside the observed set.
    pub(crate) fn record(&mut self, name: &str, value: Option<&str>) -> Option<AttributeKind> {
        self.config.record(name, value);
        let kind = AttributeKind::from_name(name);
        if kind.is_none() {
            log::trace!(target: "text_input.sync", "recorded inert attribute {name:?}");
        }
        kind
    }

    /// Forward a passthrough attribute if the control is reachable.
    ///
    /// Returns `false` when the value stays staged until connection.
    pub(crate) fn forward(
        &self,
        control: &mut RenderedControl,
        kind: AttributeKind,
        value: Option<&str>,
    ) -> bool {
        if !self.connected {
            log::trace!(target: "text_input.sync", "staged {}={value:?}", kind.as_str());
            return false;
        }
        forward_literal(control, kind, value);
        true
    }

    /// Mark the control reachable and replay every recorded entry onto it.
    pub(crate) fn connect(&mut self, control: &mut RenderedControl) {
        self.connected = true;
        log::debug!(
            target: "text_input.sync",
            "connected; replaying {} attribute(s)",
            self.config.len()
        );

        for (name, value) in self.config.iter() {
            let Some(kind) = AttributeKind::from_name(name) else {
                continue;
            };
            // Coerced kinds too: replay is plain forwarding, so a recorded
            // "false" becomes a present attribute.
            forward_literal(control, kind, value);
        }
    }

    pub(crate) fn disconnect(&mut self) {
        self.connected = false;
        log::debug!(target: "text_input.sync", "disconnected");
    }
}

fn forward_literal(control: &mut RenderedControl, kind: AttributeKind, value: Option<&str>) {
    let name = kind.as_str();
    let input = control.input_mut();
    match value {
        Some(value) => {
            if matches!(kind, AttributeKind::MinLength | AttributeKind::MaxLength)
                && value.trim().parse::<u32>().is_err()
            {
                log::warn!(
                    target: "text_input.sync",
                    "{name}={value:?} is not a non-negative integer; constraint ignored"
                );
            }
            log::trace!(target: "text_input.sync", "forward {name}={value:?}");
            input.set_attribute(name, value);
        }
        None => {
            log::trace!(target: "text_input.sync", "forward removal of {name}");
            input.remove_attribute(name);
        }
    }
}

/// Apply a boolean-like value to `required`/`disabled` on the input.
///
/// Applying the same value again leaves the input as it was. Returns `false`
/// when the value is not recognized and nothing changed.
pub(crate) fn apply_flag(
    control: &mut RenderedControl,
    kind: AttributeKind,
    value: FlagValue<'_>,
) -> bool {
    let name = kind.as_str();
    let Some(on) = value.coerce() else {
        log::trace!(target: "text_input.sync", "{name}: {value:?} ignored");
        return false;
    };

    let input = control.input_mut();
    if on {
        input.set_attribute(name, "true");
    } else {
        input.remove_attribute(name);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendered::AttributePatch;

    fn set(name: &str, value: &str) -> AttributePatch {
        AttributePatch::Set {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn passthrough_is_staged_until_connect() {
        let mut sync = AttributeSynchronizer::default();
        let mut control = RenderedControl::new();

        let kind = sync.record("pattern", Some("[0-9]+")).unwrap();
        assert!(!sync.forward(&mut control, kind, Some("[0-9]+")));
        assert!(control.input().journal().is_empty());

        sync.connect(&mut control);
        assert_eq!(control.input().journal(), [set("pattern", "[0-9]+")]);
    }

    #[test]
    fn connected_passthrough_forwards_immediately() {
        let mut sync = AttributeSynchronizer::default();
        let mut control = RenderedControl::new();
        sync.connect(&mut control);

        let kind = sync.record("placeholder", Some("Name")).unwrap();
        assert!(sync.forward(&mut control, kind, Some("Name")));
        assert_eq!(control.input().placeholder(), "Name");
    }

    #[test]
    fn replay_skips_unknown_names() {
        let mut sync = AttributeSynchronizer::default();
        let mut control = RenderedControl::new();

        assert_eq!(sync.record("data-x", Some("1")), None);
        assert_eq!(sync.record("minLength", Some("2")), None);
        sync.record("type", Some("email"));
        sync.connect(&mut control);

        assert_eq!(control.input().journal(), [set("type", "email")]);
        assert!(!control.input().has_attribute("data-x"));
        assert_eq!(sync.configuration().len(), 3);
    }

    #[test]
    fn replay_forwards_flags_literally() {
        let mut sync = AttributeSynchronizer::default();
        let mut control = RenderedControl::new();

        sync.record("required", Some("false"));
        sync.record("disabled", Some("maybe"));
        sync.connect(&mut control);

        assert_eq!(
            control.input().journal(),
            [set("required", "false"), set("disabled", "maybe")]
        );
        assert!(control.input().required());
        assert!(control.input().disabled());
    }

    fn attrs(control: &RenderedControl) -> Vec<(String, String)> {
        control
            .input()
            .attributes()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn flag_application_is_idempotent() {
        let mut control = RenderedControl::new();
        assert!(apply_flag(&mut control, AttributeKind::Required, "true".into()));
        let once = attrs(&control);
        assert!(apply_flag(&mut control, AttributeKind::Required, "true".into()));
        assert_eq!(once, attrs(&control));

        assert!(!apply_flag(&mut control, AttributeKind::Required, "yes".into()));
        assert!(control.input().required());

        assert!(apply_flag(&mut control, AttributeKind::Required, false.into()));
        assert!(!control.input().required());
    }

    #[test]
    fn removal_while_connected_removes_from_input() {
        let mut sync = AttributeSynchronizer::default();
        let mut control = RenderedControl::new();
        sync.connect(&mut control);

        sync.forward(&mut control, AttributeKind::ReadOnly, Some(""));
        assert!(control.input().read_only());
        sync.record("readonly", None);
        sync.forward(&mut control, AttributeKind::ReadOnly, None);
        assert!(!control.input().read_only());
    }
}
