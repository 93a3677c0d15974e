use indexmap::IndexMap;

use super::ChromDepth;

/// Per-chromosome maximum-depth cutoffs derived from a depth table.
///
/// The cutoff for a chromosome is `factor` times its expected depth. Cutoffs
/// are computed once, up front, and then consulted for every emitted record,
/// keeping the per-record path a plain lookup.
///
/// Cutoffs are record-stage state, decoupled from header synthesis: the
/// header documents the cutoff *rule*, while the literal per-chromosome
/// values live here.
///
/// Entries are held in sorted chromosome-name order so that iteration, and
/// any output derived from it, is reproducible regardless of how the source
/// table was built.
#[derive(Clone, Debug, PartialEq)]
pub struct MaxDepth {
    factor: f64,
    cutoffs: IndexMap<String, f64>,
}

impl MaxDepth {
    /// Computes cutoffs for every chromosome in the given depth table.
    ///
    /// # Panics
    ///
    /// Panics if `factor` is not a finite, nonnegative value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::{ChromDepth, MaxDepth};
    ///
    /// let chrom_depth: ChromDepth = [("chr1", 40.0)].into_iter().collect();
    /// let max_depth = MaxDepth::new(&chrom_depth, 3.0);
    ///
    /// assert_eq!(max_depth.get("chr1"), Some(120.0));
    /// ```
    pub fn new(chrom_depth: &ChromDepth, factor: f64) -> Self {
        assert!(
            factor.is_finite() && factor >= 0.0,
            "factor must be finite and nonnegative"
        );

        let mut cutoffs: Vec<_> = chrom_depth
            .iter()
            .map(|(chrom, depth)| (chrom.to_string(), factor * depth))
            .collect();

        cutoffs.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        Self {
            factor,
            cutoffs: cutoffs.into_iter().collect(),
        }
    }

    /// Returns the multiplier the cutoffs were derived with.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the maximum-depth cutoff of the given chromosome.
    ///
    /// A chromosome absent from the source table has no cutoff: its depth is
    /// unbounded rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::{ChromDepth, MaxDepth};
    ///
    /// let chrom_depth: ChromDepth = [("chr1", 40.0)].into_iter().collect();
    /// let max_depth = MaxDepth::new(&chrom_depth, 3.0);
    ///
    /// assert_eq!(max_depth.get("chr1"), Some(120.0));
    /// assert_eq!(max_depth.get("chrM"), None);
    /// ```
    pub fn get(&self, chrom: &str) -> Option<f64> {
        self.cutoffs.get(chrom).copied()
    }

    /// Returns whether a depth observed on the given chromosome exceeds its
    /// cutoff.
    ///
    /// This is `false` for chromosomes without a cutoff.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::{ChromDepth, MaxDepth};
    ///
    /// let chrom_depth: ChromDepth = [("chr1", 40.0)].into_iter().collect();
    /// let max_depth = MaxDepth::new(&chrom_depth, 3.0);
    ///
    /// assert!(!max_depth.exceeds("chr1", 120.0));
    /// assert!(max_depth.exceeds("chr1", 121.0));
    /// assert!(!max_depth.exceeds("chrM", 9999.0));
    /// ```
    pub fn exceeds(&self, chrom: &str, depth: f64) -> bool {
        self.get(chrom).is_some_and(|cutoff| depth > cutoff)
    }

    /// Returns the number of chromosomes with a cutoff.
    pub fn len(&self) -> usize {
        self.cutoffs.len()
    }

    /// Returns whether any chromosome has a cutoff.
    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_empty()
    }

    /// Returns an iterator over entries in sorted chromosome-name order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::{ChromDepth, MaxDepth};
    ///
    /// let chrom_depth: ChromDepth = [("chr2", 10.0), ("chr1", 20.0)].into_iter().collect();
    /// let max_depth = MaxDepth::new(&chrom_depth, 2.0);
    ///
    /// let mut entries = max_depth.iter();
    /// assert_eq!(entries.next(), Some(("chr1", 40.0)));
    /// assert_eq!(entries.next(), Some(("chr2", 20.0)));
    /// assert!(entries.next().is_none());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.cutoffs
            .iter()
            .map(|(chrom, cutoff)| (chrom.as_str(), *cutoff))
    }
}
