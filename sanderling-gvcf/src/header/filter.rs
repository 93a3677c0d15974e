//! gVCF header filter declaration.

/// A filter declaration (`##FILTER`).
///
/// A filter names a criterion a record can fail. The built-in constructors
/// cover the catalog the caller enables through
/// [`options::Builder`](crate::options::Builder); descriptions are derived
/// from the configured threshold so the declared rule always matches the rule
/// applied to records.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Filter {
    id: String,
    description: String,
}

impl Filter {
    /// Creates a filter declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::Filter;
    /// let filter = Filter::new("q10", "Quality below 10");
    /// ```
    pub fn new<I, D>(id: I, description: D) -> Self
    where
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }

    /// A locus in a region with conflicting indel calls.
    pub fn indel_conflict() -> Self {
        Self::new(
            "IndelConflict",
            "Locus is in a region with conflicting indel calls",
        )
    }

    /// A site genotype conflicting with a proximal indel call.
    pub fn site_conflict() -> Self {
        Self::new(
            "SiteConflict",
            "Site genotype conflicts with a proximal indel call",
        )
    }

    /// A locus with GQX below the given minimum, or missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::Filter;
    /// let filter = Filter::low_gqx(30.0);
    /// assert_eq!(filter.description(), "Locus GQX is less than 30 or not present");
    /// ```
    pub fn low_gqx(min_gqx: f64) -> Self {
        Self::new(
            "LowGQX",
            format!("Locus GQX is less than {min_gqx} or not present"),
        )
    }

    /// A site where the filtered-basecall fraction exceeds the given maximum.
    pub fn high_dpf_ratio(max_ratio: f64) -> Self {
        Self::new(
            "HighDPFRatio",
            format!(
                "The fraction of basecalls filtered out at a site is greater than {max_ratio}"
            ),
        )
    }

    /// A SNV whose strand bias exceeds the given maximum.
    pub fn high_snv_sb(max_strand_bias: f64) -> Self {
        Self::new(
            "HighSNVSB",
            format!("SNV strand bias value (SNVSB) exceeds {max_strand_bias}"),
        )
    }

    /// A SNV whose contextual homopolymer length exceeds the given maximum.
    pub fn high_snv_hpol(max_hpol_length: u32) -> Self {
        Self::new(
            "HighSNVHPOL",
            format!("SNV contextual homopolymer length (SNVHPOL) exceeds {max_hpol_length}"),
        )
    }

    /// An indel allele in a repeat track whose reference repeat count exceeds
    /// the given maximum.
    pub fn high_ref_rep(max_ref_repeat: u32) -> Self {
        Self::new(
            "HighREFREP",
            format!(
                "Locus contains an indel allele occurring in a homopolymer or dinucleotide track with a reference repeat greater than {max_ref_repeat}"
            ),
        )
    }

    /// A locus whose depth exceeds the given multiple of the chromosome's
    /// expected depth.
    ///
    /// The description documents the rule, not a per-chromosome number: the
    /// literal cutoffs are held in a
    /// [`MaxDepth`](sanderling_depth::MaxDepth) table and applied per record.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::Filter;
    /// let filter = Filter::high_depth(3.0);
    /// assert_eq!(
    ///     filter.description(),
    ///     "Locus depth is greater than 3x the expected chromosome depth"
    /// );
    /// ```
    pub fn high_depth(max_depth_factor: f64) -> Self {
        Self::new(
            "HighDepth",
            format!(
                "Locus depth is greater than {max_depth_factor}x the expected chromosome depth"
            ),
        )
    }

    /// Returns the filter ID.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::Filter;
    /// let filter = Filter::indel_conflict();
    /// assert_eq!(filter.id(), "IndelConflict");
    /// ```
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the filter description.
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let filter = Filter::new("q10", "Quality below 10");
        assert_eq!(filter.id(), "q10");
        assert_eq!(filter.description(), "Quality below 10");
    }

    #[test]
    fn test_threshold_descriptions() {
        assert_eq!(
            Filter::low_gqx(30.0).description(),
            "Locus GQX is less than 30 or not present"
        );

        assert_eq!(
            Filter::high_dpf_ratio(0.4).description(),
            "The fraction of basecalls filtered out at a site is greater than 0.4"
        );

        assert_eq!(
            Filter::high_snv_sb(10.0).description(),
            "SNV strand bias value (SNVSB) exceeds 10"
        );

        assert_eq!(
            Filter::high_snv_hpol(6).description(),
            "SNV contextual homopolymer length (SNVHPOL) exceeds 6"
        );

        assert_eq!(
            Filter::high_ref_rep(8).description(),
            "Locus contains an indel allele occurring in a homopolymer or dinucleotide track with a reference repeat greater than 8"
        );
    }

    #[test]
    fn test_high_depth_description_is_chromosome_independent() {
        let filter = Filter::high_depth(3.0);
        assert_eq!(filter.id(), "HighDepth");
        assert_eq!(
            filter.description(),
            "Locus depth is greater than 3x the expected chromosome depth"
        );
    }
}
