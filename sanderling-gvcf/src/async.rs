//! Async gVCF header I/O.

pub mod io;
