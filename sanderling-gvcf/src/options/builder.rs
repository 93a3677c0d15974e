//! gVCF header output options builder.

use std::num::NonZero;

use super::{BlockParameters, Options};
use crate::{FileFormat, header::Filter};

/// A gVCF header output options builder.
#[derive(Default)]
pub struct Builder {
    options: Options,
}

impl Builder {
    /// Sets the file format version.
    ///
    /// The default is VCF 4.1.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::{FileFormat, Options};
    /// let builder = Options::builder().set_file_format(FileFormat::V4_2);
    /// ```
    pub fn set_file_format(mut self, file_format: FileFormat) -> Self {
        self.options.file_format = file_format;
        self
    }

    /// Sets the reference URI written as the `##reference` line.
    ///
    /// When unset, no `##reference` line is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let builder = Options::builder().set_reference("file:///data/genome.fa");
    /// ```
    pub fn set_reference<S>(mut self, reference: S) -> Self
    where
        S: Into<String>,
    {
        self.options.reference = Some(reference.into());
        self
    }

    /// Adds a sample, appending one genotype column.
    ///
    /// At least one sample must be added before the header can be written.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let builder = Options::builder().add_sample("SAMPLE1");
    /// ```
    pub fn add_sample<S>(mut self, sample: S) -> Self
    where
        S: Into<String>,
    {
        self.options.samples.push(sample.into());
        self
    }

    /// Adds a contig, appending one `##contig` line.
    ///
    /// Contigs are written in the order they are added, which must match the
    /// order records will be emitted in. Re-adding a contig replaces its
    /// length and keeps its original position.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZero;
    /// use sanderling_gvcf::Options;
    ///
    /// let builder = Options::builder()
    ///     .add_contig("chr1", const { NonZero::new(249250621).unwrap() });
    /// ```
    pub fn add_contig<N>(mut self, name: N, length: NonZero<usize>) -> Self
    where
        N: Into<String>,
    {
        self.options.contigs.insert(name.into(), length);
        self
    }

    /// Enables the low genotype quality filter with the given minimum GQX.
    ///
    /// # Panics
    ///
    /// Panics if `min_gqx` is not finite or is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let builder = Options::builder().set_min_gqx(30.0);
    /// ```
    pub fn set_min_gqx(mut self, min_gqx: f64) -> Self {
        assert!(
            min_gqx.is_finite() && min_gqx >= 0.0,
            "min_gqx must be finite and nonnegative"
        );
        self.options.min_gqx = Some(min_gqx);
        self
    }

    /// Enables the filtered-basecall fraction filter with the given maximum.
    ///
    /// # Panics
    ///
    /// Panics if `max_base_filt` is not finite or is negative.
    pub fn set_max_base_filt(mut self, max_base_filt: f64) -> Self {
        assert!(
            max_base_filt.is_finite() && max_base_filt >= 0.0,
            "max_base_filt must be finite and nonnegative"
        );
        self.options.max_base_filt = Some(max_base_filt);
        self
    }

    /// Enables the SNV strand bias filter with the given maximum.
    ///
    /// # Panics
    ///
    /// Panics if `max_snv_sb` is not finite or is negative.
    pub fn set_max_snv_sb(mut self, max_snv_sb: f64) -> Self {
        assert!(
            max_snv_sb.is_finite() && max_snv_sb >= 0.0,
            "max_snv_sb must be finite and nonnegative"
        );
        self.options.max_snv_sb = Some(max_snv_sb);
        self
    }

    /// Enables the SNV homopolymer length filter with the given maximum.
    pub fn set_max_snv_hpol(mut self, max_snv_hpol: u32) -> Self {
        self.options.max_snv_hpol = Some(max_snv_hpol);
        self
    }

    /// Enables the reference repeat filter with the given maximum.
    pub fn set_max_ref_rep(mut self, max_ref_rep: u32) -> Self {
        self.options.max_ref_rep = Some(max_ref_rep);
        self
    }

    /// Enables the depth filter with the given expected-depth multiplier.
    ///
    /// The header documents the multiplier rule; per-chromosome cutoffs are
    /// computed separately and applied per record.
    ///
    /// # Panics
    ///
    /// Panics if `max_depth_factor` is not finite or is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let builder = Options::builder().set_max_depth_factor(3.0);
    /// ```
    pub fn set_max_depth_factor(mut self, max_depth_factor: f64) -> Self {
        assert!(
            max_depth_factor.is_finite() && max_depth_factor >= 0.0,
            "max_depth_factor must be finite and nonnegative"
        );
        self.options.max_depth_factor = Some(max_depth_factor);
        self
    }

    /// Sets whether the indel conflict filter is declared.
    ///
    /// The default is `false`.
    pub fn set_indel_conflict(mut self, value: bool) -> Self {
        self.options.indel_conflict = value;
        self
    }

    /// Sets whether the site conflict filter is declared.
    ///
    /// The default is `false`.
    pub fn set_site_conflict(mut self, value: bool) -> Self {
        self.options.site_conflict = value;
        self
    }

    /// Enables non-variant block compression with the given banding
    /// parameters, declaring the block flag INFO field.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::{Options, options::BlockParameters};
    /// let builder = Options::builder().set_block_compression(BlockParameters::default());
    /// ```
    pub fn set_block_compression(mut self, parameters: BlockParameters) -> Self {
        self.options.block_compression = Some(parameters);
        self
    }

    /// Sets whether FORMAT declarations are written.
    ///
    /// When `false`, the `##FORMAT` block is omitted. The tabular FORMAT
    /// column is unaffected.
    ///
    /// The default is `true`.
    pub fn set_format_declarations(mut self, value: bool) -> Self {
        self.options.format_declarations = value;
        self
    }

    /// Adds a caller-defined filter declaration.
    ///
    /// Added filters are written after the built-in catalog, in the order
    /// they are registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::{Options, header::Filter};
    ///
    /// let builder = Options::builder()
    ///     .add_filter(Filter::new("q10", "Quality below 10"));
    /// ```
    pub fn add_filter(mut self, filter: Filter) -> Self {
        self.options.additional_filters.push(filter);
        self
    }

    /// Builds the output options.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let options = Options::builder().add_sample("SAMPLE1").build();
    /// assert_eq!(options.samples(), ["SAMPLE1"]);
    /// ```
    pub fn build(self) -> Options {
        self.options
    }
}
