//! **sanderling** synthesizes gVCF headers for a germline small-variant call
//! stream.
//!
//! This is a meta-crate: each member crate is re-exported behind a feature of
//! the same name.

#[cfg(feature = "depth")]
pub use sanderling_depth as depth;

#[cfg(feature = "gvcf")]
pub use sanderling_gvcf as gvcf;
