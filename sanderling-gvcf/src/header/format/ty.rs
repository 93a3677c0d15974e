//! FORMAT field value type.

use std::fmt;

/// A FORMAT field value type.
///
/// Unlike INFO fields, genotype fields cannot be flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Type {
    /// A 32-bit integer.
    Integer,
    /// A float.
    Float,
    /// A single character.
    Character,
    /// A string.
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("Integer"),
            Self::Float => f.write_str("Float"),
            Self::Character => f.write_str("Character"),
            Self::String => f.write_str("String"),
        }
    }
}
