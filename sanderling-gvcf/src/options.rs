//! gVCF header output options.

mod block_parameters;
pub mod builder;

pub use self::{block_parameters::BlockParameters, builder::Builder};

use std::num::NonZero;

use indexmap::IndexMap;

use crate::{FileFormat, header::Filter};

/// gVCF header output options.
///
/// This is the immutable configuration snapshot the writer derives the header
/// from: the declared file format, the reference and contig metadata, the
/// sample names, and the enabled filters with their thresholds. An absent
/// optional threshold means the corresponding filter is disabled, never an
/// error.
///
/// Options are built once, before header synthesis, and are read-only
/// afterwards. They can be shared by reference across concurrent writer
/// invocations.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    pub(crate) file_format: FileFormat,
    pub(crate) reference: Option<String>,
    pub(crate) samples: Vec<String>,
    pub(crate) contigs: IndexMap<String, NonZero<usize>>,
    pub(crate) min_gqx: Option<f64>,
    pub(crate) max_base_filt: Option<f64>,
    pub(crate) max_snv_sb: Option<f64>,
    pub(crate) max_snv_hpol: Option<u32>,
    pub(crate) max_ref_rep: Option<u32>,
    pub(crate) max_depth_factor: Option<f64>,
    pub(crate) indel_conflict: bool,
    pub(crate) site_conflict: bool,
    pub(crate) block_compression: Option<BlockParameters>,
    pub(crate) format_declarations: bool,
    pub(crate) additional_filters: Vec<Filter>,
}

impl Options {
    /// Creates an options builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    /// let builder = Options::builder();
    /// ```
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the declared file format.
    pub fn file_format(&self) -> FileFormat {
        self.file_format
    }

    /// Returns the reference URI, if set.
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Returns the sample names, in genotype column order.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Returns the contig names and lengths, in declared order.
    pub fn contigs(&self) -> &IndexMap<String, NonZero<usize>> {
        &self.contigs
    }

    /// Returns the minimum GQX threshold, if the filter is enabled.
    pub fn min_gqx(&self) -> Option<f64> {
        self.min_gqx
    }

    /// Returns the maximum filtered-basecall fraction, if the filter is
    /// enabled.
    pub fn max_base_filt(&self) -> Option<f64> {
        self.max_base_filt
    }

    /// Returns the maximum SNV strand bias, if the filter is enabled.
    pub fn max_snv_sb(&self) -> Option<f64> {
        self.max_snv_sb
    }

    /// Returns the maximum SNV contextual homopolymer length, if the filter
    /// is enabled.
    pub fn max_snv_hpol(&self) -> Option<u32> {
        self.max_snv_hpol
    }

    /// Returns the maximum reference repeat count, if the filter is enabled.
    pub fn max_ref_rep(&self) -> Option<u32> {
        self.max_ref_rep
    }

    /// Returns the expected-depth multiplier, if the depth filter is enabled.
    pub fn max_depth_factor(&self) -> Option<f64> {
        self.max_depth_factor
    }

    /// Returns whether the indel conflict filter is enabled.
    pub fn indel_conflict(&self) -> bool {
        self.indel_conflict
    }

    /// Returns whether the site conflict filter is enabled.
    pub fn site_conflict(&self) -> bool {
        self.site_conflict
    }

    /// Returns the non-variant block banding parameters, if block
    /// compression is enabled.
    pub fn block_compression(&self) -> Option<BlockParameters> {
        self.block_compression
    }

    /// Returns whether FORMAT declarations are written.
    pub fn format_declarations(&self) -> bool {
        self.format_declarations
    }

    /// Returns the caller-registered filter declarations.
    pub fn additional_filters(&self) -> &[Filter] {
        &self.additional_filters
    }

    /// Returns the enabled filter declarations, in emission order.
    ///
    /// Built-in filters come first, in catalog order, one per enabled option;
    /// caller-registered filters follow in registration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::Options;
    ///
    /// let options = Options::builder().set_min_gqx(30.0).build();
    ///
    /// let filters = options.filters();
    /// assert_eq!(filters.len(), 1);
    /// assert_eq!(filters[0].id(), "LowGQX");
    /// ```
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if self.indel_conflict {
            filters.push(Filter::indel_conflict());
        }

        if self.site_conflict {
            filters.push(Filter::site_conflict());
        }

        if let Some(min_gqx) = self.min_gqx {
            filters.push(Filter::low_gqx(min_gqx));
        }

        if let Some(max_ratio) = self.max_base_filt {
            filters.push(Filter::high_dpf_ratio(max_ratio));
        }

        if let Some(max_strand_bias) = self.max_snv_sb {
            filters.push(Filter::high_snv_sb(max_strand_bias));
        }

        if let Some(max_hpol_length) = self.max_snv_hpol {
            filters.push(Filter::high_snv_hpol(max_hpol_length));
        }

        if let Some(max_ref_repeat) = self.max_ref_rep {
            filters.push(Filter::high_ref_rep(max_ref_repeat));
        }

        if let Some(max_depth_factor) = self.max_depth_factor {
            filters.push(Filter::high_depth(max_depth_factor));
        }

        filters.extend(self.additional_filters.iter().cloned());

        filters
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            file_format: FileFormat::default(),
            reference: None,
            samples: Vec::new(),
            contigs: IndexMap::new(),
            min_gqx: None,
            max_base_filt: None,
            max_snv_sb: None,
            max_snv_hpol: None,
            max_ref_rep: None,
            max_depth_factor: None,
            indel_conflict: false,
            site_conflict: false,
            block_compression: None,
            format_declarations: true,
            additional_filters: Vec::new(),
        }
    }
}
