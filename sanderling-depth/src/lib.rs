//! **sanderling-depth** models the per-chromosome expected-depth table used to
//! normalize depth-based filtering in a variant call stream.
//!
//! The table maps each chromosome name to an expected (e.g. mean autosomal)
//! sequencing depth. It is exchanged between pipeline stages as a
//! tab-delimited depth summary ([`io::Reader`]/[`io::Writer`]) and is the
//! input to the per-chromosome maximum-depth cutoffs ([`MaxDepth`]) applied
//! when records are emitted.

mod chrom_depth;
pub mod io;
mod max_depth;

pub use self::{chrom_depth::ChromDepth, max_depth::MaxDepth};
