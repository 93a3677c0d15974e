//! **sanderling-gvcf** handles the writing of the Genome Variant Call Format
//! (gVCF) header.
//!
//! A gVCF stream opens with a header: a block of `##`-prefixed meta lines
//! declaring the file format, the filters, the INFO and FORMAT fields record
//! bodies may reference, and the reference sequences, followed by a single
//! `#CHROM` column name line. This crate synthesizes that header from a
//! configuration describing the run, so that every annotation a record can
//! carry is declared before the first record is written.

#[cfg(feature = "async")]
pub mod r#async;

pub mod file_format;
pub mod header;
pub mod io;
pub mod options;

pub use self::{file_format::FileFormat, options::Options};
