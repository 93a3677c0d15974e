//! Declared field cardinality.

use std::fmt;

/// The number of values an INFO or FORMAT field carries per record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Number {
    /// A fixed count (`0` for flags).
    Count(usize),
    /// One value per alternate allele (`A`).
    AlternateBases,
    /// One value per allele, including the reference (`R`).
    ReferenceAlternateBases,
    /// One value per possible genotype (`G`).
    Genotypes,
    /// An unknown or unbounded number of values (`.`).
    #[default]
    Unknown,
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::AlternateBases => f.write_str("A"),
            Self::ReferenceAlternateBases => f.write_str("R"),
            Self::Genotypes => f.write_str("G"),
            Self::Unknown => f.write_str("."),
        }
    }
}
