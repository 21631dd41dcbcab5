//! Recognized configuration attributes and the configuration record.

use indexmap::IndexMap;

/// The closed set of attributes the control observes.
///
/// Names are case-sensitive; anything else is recorded but inert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Name,
    Type,
    Required,
    MinLength,
    MaxLength,
    Pattern,
    List,
    Placeholder,
    ReadOnly,
    Spellcheck,
    Value,
    Disabled,
}

/// Property a coerced attribute is routed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoercedProperty {
    Value,
    Required,
    Disabled,
}

/// How a recognized attribute reaches the rendered control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeHandling {
    /// Routed through the typed property setter.
    Coerced(CoercedProperty),
    /// Forwarded literally onto the input, once it is reachable.
    Passthrough,
    /// Recorded only; forwarded literally when the configuration is replayed.
    Recorded,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 12] = [
        AttributeKind::Name,
        AttributeKind::Type,
        AttributeKind::Required,
        AttributeKind::MinLength,
        AttributeKind::MaxLength,
        AttributeKind::Pattern,
        AttributeKind::List,
        AttributeKind::Placeholder,
        AttributeKind::ReadOnly,
        AttributeKind::Spellcheck,
        AttributeKind::Value,
        AttributeKind::Disabled,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "name" => AttributeKind::Name,
            "type" => AttributeKind::Type,
            "required" => AttributeKind::Required,
            "minlength" => AttributeKind::MinLength,
            "maxlength" => AttributeKind::MaxLength,
            "pattern" => AttributeKind::Pattern,
            "list" => AttributeKind::List,
            "placeholder" => AttributeKind::Placeholder,
            "readonly" => AttributeKind::ReadOnly,
            "spellcheck" => AttributeKind::Spellcheck,
            "value" => AttributeKind::Value,
            "disabled" => AttributeKind::Disabled,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Name => "name",
            AttributeKind::Type => "type",
            AttributeKind::Required => "required",
            AttributeKind::MinLength => "minlength",
            AttributeKind::MaxLength => "maxlength",
            AttributeKind::Pattern => "pattern",
            AttributeKind::List => "list",
            AttributeKind::Placeholder => "placeholder",
            AttributeKind::ReadOnly => "readonly",
            AttributeKind::Spellcheck => "spellcheck",
            AttributeKind::Value => "value",
            AttributeKind::Disabled => "disabled",
        }
    }

    pub fn handling(self) -> AttributeHandling {
        match self {
            AttributeKind::Value => AttributeHandling::Coerced(CoercedProperty::Value),
            AttributeKind::Required => AttributeHandling::Coerced(CoercedProperty::Required),
            AttributeKind::Disabled => AttributeHandling::Coerced(CoercedProperty::Disabled),
            AttributeKind::Type
            | AttributeKind::MinLength
            | AttributeKind::MaxLength
            | AttributeKind::Pattern
            | AttributeKind::List
            | AttributeKind::Placeholder
            | AttributeKind::ReadOnly
            | AttributeKind::Spellcheck => AttributeHandling::Passthrough,
            AttributeKind::Name => AttributeHandling::Recorded,
        }
    }
}

/// A boolean-like value for `required`/`disabled`.
///
/// Only `true`/`"true"` and `false`/`"false"` mean anything; every other
/// value, including a removed attribute, leaves the flag as it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagValue<'a> {
    Bool(bool),
    Str(&'a str),
    Absent,
}

impl FlagValue<'_> {
    /// `Some(on)` for a recognized value, `None` for a no-op.
    pub fn coerce(self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(b),
            FlagValue::Str("true") => Some(true),
            FlagValue::Str("false") => Some(false),
            FlagValue::Str(_) | FlagValue::Absent => None,
        }
    }
}

impl From<bool> for FlagValue<'_> {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl<'a> From<&'a str> for FlagValue<'a> {
    fn from(s: &'a str) -> Self {
        FlagValue::Str(s)
    }
}

impl<'a> From<Option<&'a str>> for FlagValue<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(FlagValue::Absent, FlagValue::Str)
    }
}

/// Latest value of every attribute the host has set on the control.
///
/// Keys are unique and keep the position of their first receipt; a later
/// change overwrites the value in place. Entries are never removed: an
/// attribute removal is recorded as `None`.
#[derive(Clone, Debug, Default)]
pub struct ControlConfiguration {
    entries: IndexMap<String, Option<String>>,
}

impl ControlConfiguration {
    pub fn record(&mut self, name: &str, value: Option<&str>) {
        self.entries
            .insert(name.to_string(), value.map(str::to_string));
    }

    /// Latest value for `name`. `None` when never set or removed.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|v| v.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in receipt order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(AttributeKind::from_name("minlength"), Some(AttributeKind::MinLength));
        assert_eq!(AttributeKind::from_name("minLength"), None);
        assert_eq!(AttributeKind::from_name("Required"), None);
    }

    #[test]
    fn every_kind_round_trips_through_its_name() {
        for kind in AttributeKind::ALL {
            assert_eq!(AttributeKind::from_name(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn coerced_and_passthrough_sets() {
        let coerced: Vec<_> = AttributeKind::ALL
            .into_iter()
            .filter(|k| matches!(k.handling(), AttributeHandling::Coerced(_)))
            .map(AttributeKind::as_str)
            .collect();
        assert_eq!(coerced, ["required", "value", "disabled"]);
        assert_eq!(AttributeKind::Name.handling(), AttributeHandling::Recorded);
        assert_eq!(
            AttributeKind::Spellcheck.handling(),
            AttributeHandling::Passthrough
        );
    }

    #[test]
    fn flag_coercion_recognizes_only_true_and_false() {
        assert_eq!(FlagValue::from("true").coerce(), Some(true));
        assert_eq!(FlagValue::from(false).coerce(), Some(false));
        assert_eq!(FlagValue::from("").coerce(), None);
        assert_eq!(FlagValue::from("TRUE").coerce(), None);
        assert_eq!(FlagValue::from("required").coerce(), None);
        assert_eq!(FlagValue::from(None).coerce(), None);
    }

    #[test]
    fn overwrite_keeps_first_receipt_position() {
        let mut config = ControlConfiguration::default();
        config.record("pattern", Some("a"));
        config.record("type", Some("email"));
        config.record("pattern", Some("b"));

        let entries: Vec<_> = config.iter().collect();
        assert_eq!(entries, [("pattern", Some("b")), ("type", Some("email"))]);
    }

    #[test]
    fn removal_is_recorded_not_dropped() {
        let mut config = ControlConfiguration::default();
        config.record("value", Some("42"));
        config.record("value", None);
        assert!(config.contains("value"));
        assert_eq!(config.get("value"), None);
        assert_eq!(config.len(), 1);
    }
}
