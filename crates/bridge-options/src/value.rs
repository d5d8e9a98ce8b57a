//! Tagged dynamic option values.

use std::fmt;

/// A dynamically-typed option value from the host runtime.
///
/// The runtime's value representation is open-ended; at the bridge boundary
/// it narrows to this closed union so downstream code can match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A UTF-8 string value.
    Str(String),
    /// A 32-bit signed integer value.
    Int(i32),
    /// A 64-bit signed integer value.
    Long(i64),
    /// A boolean value.
    Bool(bool),
}

impl OptionValue {
    /// Render the value as its canonical string form.
    ///
    /// Integers render in decimal, booleans as `true`/`false`. This is the
    /// representation configuration parsing operates on.
    #[must_use]
    pub fn string_value(&self) -> String {
        self.to_string()
    }

    /// Whether this value is the string variant.
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Whether this value is the boolean variant.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
