//! gVCF header I/O.

pub mod writer;

pub use self::writer::Writer;
