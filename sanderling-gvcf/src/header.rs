//! gVCF header declarations.
//!
//! Each type in this module models one kind of `##`-prefixed meta line: the
//! named filters a record can fail, the INFO fields a record body can carry,
//! and the FORMAT fields a genotype column can carry. The writer renders them
//! to the wire; the types themselves only hold the declared identifiers,
//! cardinalities, value types, and descriptions.

pub mod filter;
pub mod format;
pub mod info;
pub mod number;

pub use self::{filter::Filter, format::Format, info::Info, number::Number};
