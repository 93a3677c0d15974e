//! Depth summary writer.

use std::io::{self, Write};

use crate::ChromDepth;

/// A depth summary writer.
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    /// Creates a depth summary writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::io::Writer;
    /// let writer = Writer::new(Vec::<u8>::new());
    /// ```
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Writer<W>
where
    W: Write,
{
    /// Writes the entire depth summary, one record per table entry, in table
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::{ChromDepth, io::Writer};
    ///
    /// let chrom_depth: ChromDepth = [("chr1", 38.29)].into_iter().collect();
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_chrom_depth(&chrom_depth)?;
    ///
    /// assert_eq!(writer.get_ref(), b"chr1\t38.29\n");
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub fn write_chrom_depth(&mut self, chrom_depth: &ChromDepth) -> io::Result<()> {
        for (chrom, depth) in chrom_depth.iter() {
            writeln!(self.inner, "{chrom}\t{depth}")?;
        }

        Ok(())
    }
}
