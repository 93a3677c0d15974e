//! Depth summary I/O.
//!
//! A depth summary is a tab-delimited text file with one record per
//! chromosome: the chromosome name and its expected depth.
//!
//! ```text
//! chr1	38.29
//! chr2	37.11
//! ```

pub mod reader;
pub mod writer;

pub use self::{reader::Reader, writer::Writer};
