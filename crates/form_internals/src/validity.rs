//! Validity flags reported through an internals handle.
//!
//! A control is valid when no flag is set. Flags are only ever produced by a
//! validation procedure through `set_validity`; nothing in this crate
//! computes them.

use std::fmt;

/// One named reason a value can be invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidityFlag {
    ValueMissing,
    TypeMismatch,
    PatternMismatch,
    TooLong,
    TooShort,
    RangeUnderflow,
    RangeOverflow,
    StepMismatch,
    BadInput,
    CustomError,
}

impl ValidityFlag {
    /// All flags, in the order messages are chosen.
    pub const ALL: [ValidityFlag; 10] = [
        ValidityFlag::CustomError,
        ValidityFlag::ValueMissing,
        ValidityFlag::TypeMismatch,
        ValidityFlag::PatternMismatch,
        ValidityFlag::TooLong,
        ValidityFlag::TooShort,
        ValidityFlag::RangeUnderflow,
        ValidityFlag::RangeOverflow,
        ValidityFlag::StepMismatch,
        ValidityFlag::BadInput,
    ];

    /// Name as it appears on a `ValidityState` object (`valueMissing`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            ValidityFlag::ValueMissing => "valueMissing",
            ValidityFlag::TypeMismatch => "typeMismatch",
            ValidityFlag::PatternMismatch => "patternMismatch",
            ValidityFlag::TooLong => "tooLong",
            ValidityFlag::TooShort => "tooShort",
            ValidityFlag::RangeUnderflow => "rangeUnderflow",
            ValidityFlag::RangeOverflow => "rangeOverflow",
            ValidityFlag::StepMismatch => "stepMismatch",
            ValidityFlag::BadInput => "badInput",
            ValidityFlag::CustomError => "customError",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Fallback message used when a flag is raised without one.
    pub fn default_message(self) -> &'static str {
        match self {
            ValidityFlag::ValueMissing => "Please fill out this field.",
            ValidityFlag::TypeMismatch => "Please enter a valid value.",
            ValidityFlag::PatternMismatch => "Please match the requested format.",
            ValidityFlag::TooLong => "Please shorten this text.",
            ValidityFlag::TooShort => "Please lengthen this text.",
            ValidityFlag::RangeUnderflow => "Value must be greater or equal to minimum.",
            ValidityFlag::RangeOverflow => "Value must be less or equal to maximum.",
            ValidityFlag::StepMismatch | ValidityFlag::BadInput | ValidityFlag::CustomError => {
                "Please enter a valid value."
            }
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for ValidityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of raised [`ValidityFlag`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValidityFlags(u16);

impl ValidityFlags {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn with(mut self, flag: ValidityFlag) -> Self {
        self.set(flag, true);
        self
    }

    pub fn set(&mut self, flag: ValidityFlag, on: bool) {
        if on {
            self.0 |= flag.bit();
        } else {
            self.0 &= !flag.bit();
        }
    }

    pub fn contains(&self, flag: ValidityFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// `true` when no flag is raised.
    pub fn is_valid(&self) -> bool {
        self.0 == 0
    }

    /// Raised flags in message-priority order.
    pub fn iter(&self) -> impl Iterator<Item = ValidityFlag> + '_ {
        ValidityFlag::ALL.into_iter().filter(|f| self.contains(*f))
    }

    /// Highest-priority raised flag, if any.
    pub fn first(&self) -> Option<ValidityFlag> {
        self.iter().next()
    }
}

impl FromIterator<ValidityFlag> for ValidityFlags {
    fn from_iter<T: IntoIterator<Item = ValidityFlag>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Display for ValidityFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("valid");
        }
        for (i, flag) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{flag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_valid() {
        assert!(ValidityFlags::empty().is_valid());
        assert_eq!(ValidityFlags::default().first(), None);
    }

    #[test]
    fn set_and_clear_flags() {
        let mut flags = ValidityFlags::empty();
        flags.set(ValidityFlag::TooShort, true);
        flags.set(ValidityFlag::PatternMismatch, true);
        assert!(!flags.is_valid());
        assert!(flags.contains(ValidityFlag::TooShort));

        flags.set(ValidityFlag::TooShort, false);
        assert!(!flags.contains(ValidityFlag::TooShort));
        assert_eq!(flags.first(), Some(ValidityFlag::PatternMismatch));
    }

    #[test]
    fn custom_error_wins_message_priority() {
        let flags: ValidityFlags = [ValidityFlag::ValueMissing, ValidityFlag::CustomError]
            .into_iter()
            .collect();
        assert_eq!(flags.first(), Some(ValidityFlag::CustomError));
        assert_eq!(flags.to_string(), "customError,valueMissing");
    }

    #[test]
    fn names_round_trip() {
        for flag in ValidityFlag::ALL {
            assert_eq!(ValidityFlag::from_name(flag.as_str()), Some(flag));
        }
        assert_eq!(ValidityFlag::from_name("value-missing"), None);
    }
}
