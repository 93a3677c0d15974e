//! gVCF file format version.

use std::{cmp::Ordering, fmt};

/// A gVCF file format version.
///
/// This is the version written as the `##fileformat` line, which is required
/// to be the first line of the header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FileFormat {
    major: u8,
    minor: u8,
}

impl FileFormat {
    /// VCF 4.1
    pub const V4_1: Self = Self::new(4, 1);

    /// VCF 4.2
    pub const V4_2: Self = Self::new(4, 2);

    /// VCF 4.3
    pub const V4_3: Self = Self::new(4, 3);

    /// Creates a file format version.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::FileFormat;
    /// let file_format = FileFormat::new(4, 1);
    /// ```
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Returns the major version.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::FileFormat;
    /// let file_format = FileFormat::new(4, 1);
    /// assert_eq!(file_format.major(), 4);
    /// ```
    pub fn major(&self) -> u8 {
        self.major
    }

    /// Returns the minor version.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::FileFormat;
    /// let file_format = FileFormat::new(4, 1);
    /// assert_eq!(file_format.minor(), 1);
    /// ```
    pub fn minor(&self) -> u8 {
        self.minor
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        Self::V4_1
    }
}

impl PartialOrd for FileFormat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileFormat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VCFv{}.{}", self.major, self.minor)
    }
}
