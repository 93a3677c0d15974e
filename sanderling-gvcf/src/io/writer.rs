//! gVCF header writer.

pub(crate) mod header;

use std::io::{self, Write};

use sanderling_depth::ChromDepth;

use crate::Options;

/// A gVCF header writer.
///
/// The header is written once per output stream, before any record. For a
/// fixed options and depth table pair, the written bytes are fully
/// deterministic.
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use sanderling_depth::ChromDepth;
/// use sanderling_gvcf::{Options, io::Writer};
///
/// let options = Options::builder()
///     .add_sample("SAMPLE1")
///     .add_contig("chr1", const { NonZero::new(1000).unwrap() })
///     .build();
///
/// let mut writer = Writer::new(Vec::new());
/// writer.write_header(&options, &ChromDepth::default())?;
/// # Ok::<_, std::io::Error>(())
/// ```
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    /// Creates a gVCF header writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::io::Writer;
    /// let writer = Writer::new(Vec::<u8>::new());
    /// ```
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::io::Writer;
    /// let writer = Writer::new(Vec::<u8>::new());
    /// assert!(writer.get_ref().is_empty());
    /// ```
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Returns the underlying writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::io::Writer;
    /// let writer = Writer::new(Vec::<u8>::new());
    /// assert!(writer.into_inner().is_empty());
    /// ```
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Writes the complete header block.
    ///
    /// Meta lines are written first (`##fileformat`, `##source`, and
    /// `##reference` when set), then FILTER, INFO, FORMAT, and contig
    /// declarations, and finally the tab-delimited column name line with one
    /// trailing column per sample.
    ///
    /// The depth table pairs the header with the record stream derived from
    /// the same inputs, but it contributes no header text: the depth filter's
    /// declaration documents the chromosome-independent rule, while the
    /// per-chromosome cutoffs belong to a
    /// [`MaxDepth`](sanderling_depth::MaxDepth) table consulted at record
    /// emission time.
    ///
    /// # Errors
    ///
    /// Contract violations the header grammar cannot tolerate, like an empty
    /// sample list or a declared ID that would corrupt a line, fail with
    /// [`io::ErrorKind::InvalidInput`] before anything is written. Sink
    /// failures propagate unchanged and abort the remaining emission.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZero;
    ///
    /// use sanderling_depth::ChromDepth;
    /// use sanderling_gvcf::{Options, io::Writer};
    ///
    /// let options = Options::builder()
    ///     .set_min_gqx(30.0)
    ///     .add_sample("SAMPLE1")
    ///     .add_contig("chr1", const { NonZero::new(1000).unwrap() })
    ///     .build();
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_header(&options, &ChromDepth::default())?;
    ///
    /// let src = String::from_utf8(writer.into_inner()).unwrap();
    /// assert!(src.starts_with("##fileformat=VCFv4.1\n"));
    /// assert!(src.ends_with("\tSAMPLE1\n"));
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub fn write_header(
        &mut self,
        options: &Options,
        chrom_depth: &ChromDepth,
    ) -> io::Result<()> {
        header::write_header(&mut self.inner, options, chrom_depth)
    }
}
