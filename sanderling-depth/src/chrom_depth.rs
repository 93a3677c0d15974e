use indexmap::IndexMap;

/// An ordered mapping of chromosome name to expected depth.
///
/// Each chromosome appears at most once, and entries iterate in insertion
/// order. Depths are finite, positive values; both properties are enforced on
/// insertion, so a constructed table is always safe to derive cutoffs from.
///
/// An empty table is valid and means no chromosome has a known expected
/// depth, e.g. when depth-based filtering is disabled upstream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChromDepth(IndexMap<String, f64>);

impl ChromDepth {
    /// Creates an empty chromosome depth table.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    /// let chrom_depth = ChromDepth::new();
    /// assert!(chrom_depth.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an expected depth for the given chromosome.
    ///
    /// If the chromosome is already present, its depth is replaced and the
    /// previous value returned. The entry keeps its original position.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is not a finite, positive value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    ///
    /// let mut chrom_depth = ChromDepth::new();
    /// assert_eq!(chrom_depth.insert("chr1", 38.29), None);
    /// assert_eq!(chrom_depth.insert("chr1", 40.0), Some(38.29));
    /// ```
    pub fn insert<N>(&mut self, chrom: N, depth: f64) -> Option<f64>
    where
        N: Into<String>,
    {
        assert!(
            depth.is_finite() && depth > 0.0,
            "depth must be finite and positive"
        );

        self.0.insert(chrom.into(), depth)
    }

    /// Returns the expected depth of the given chromosome.
    ///
    /// A chromosome missing from the table is not an error: it simply has no
    /// known expected depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    ///
    /// let mut chrom_depth = ChromDepth::new();
    /// chrom_depth.insert("chr1", 38.29);
    ///
    /// assert_eq!(chrom_depth.get("chr1"), Some(38.29));
    /// assert_eq!(chrom_depth.get("chrM"), None);
    /// ```
    pub fn get(&self, chrom: &str) -> Option<f64> {
        self.0.get(chrom).copied()
    }

    /// Returns the number of chromosomes in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    /// let chrom_depth = ChromDepth::new();
    /// assert_eq!(chrom_depth.len(), 0);
    /// ```
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the table is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    /// let chrom_depth = ChromDepth::new();
    /// assert!(chrom_depth.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over entries in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::ChromDepth;
    ///
    /// let mut chrom_depth = ChromDepth::new();
    /// chrom_depth.insert("chr2", 37.11);
    /// chrom_depth.insert("chr1", 38.29);
    ///
    /// let mut entries = chrom_depth.iter();
    /// assert_eq!(entries.next(), Some(("chr2", 37.11)));
    /// assert_eq!(entries.next(), Some(("chr1", 38.29)));
    /// assert!(entries.next().is_none());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(chrom, depth)| (chrom.as_str(), *depth))
    }
}

impl FromIterator<(String, f64)> for ChromDepth {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut chrom_depth = Self::default();

        for (chrom, depth) in iter {
            chrom_depth.insert(chrom, depth);
        }

        chrom_depth
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ChromDepth {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(chrom, depth)| (chrom.to_string(), depth))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        let mut chrom_depth = ChromDepth::new();

        assert_eq!(chrom_depth.insert("chr1", 38.29), None);
        assert_eq!(chrom_depth.insert("chr2", 37.11), None);
        assert_eq!(chrom_depth.len(), 2);

        assert_eq!(chrom_depth.insert("chr1", 40.0), Some(38.29));
        assert_eq!(chrom_depth.len(), 2);
        assert_eq!(chrom_depth.get("chr1"), Some(40.0));
    }

    #[test]
    #[should_panic(expected = "depth must be finite and positive")]
    fn test_insert_with_nonpositive_depth() {
        let mut chrom_depth = ChromDepth::new();
        chrom_depth.insert("chr1", 0.0);
    }

    #[test]
    #[should_panic(expected = "depth must be finite and positive")]
    fn test_insert_with_nonfinite_depth() {
        let mut chrom_depth = ChromDepth::new();
        chrom_depth.insert("chr1", f64::NAN);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let chrom_depth: ChromDepth =
            [("chr2", 37.11), ("chr1", 38.29), ("chrX", 19.04)].into_iter().collect();

        let chroms: Vec<_> = chrom_depth.iter().map(|(chrom, _)| chrom).collect();

        assert_eq!(chroms, ["chr2", "chr1", "chrX"]);
    }
}
