//! Async gVCF header writer.

use sanderling_depth::ChromDepth;
use tokio::io::{self, AsyncWrite, AsyncWriteExt};

use crate::Options;

/// An async gVCF header writer.
pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W> {
    /// Creates an async gVCF header writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::r#async::io::Writer;
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
    W: AsyncWrite + Unpin,
{
    /// Writes the complete header block.
    ///
    /// The header is serialized in full before any byte reaches the
    /// underlying writer, so validation failures behave as in the sync
    /// writer: nothing is written. The written bytes are identical to the
    /// sync writer's for the same inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[tokio::main]
    /// # async fn main() -> tokio::io::Result<()> {
    /// use sanderling_depth::ChromDepth;
    /// use sanderling_gvcf::{Options, r#async::io::Writer};
    ///
    /// let options = Options::builder().add_sample("SAMPLE1").build();
    ///
    /// let mut writer = Writer::new(Vec::new());
    /// writer.write_header(&options, &ChromDepth::default()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn write_header(
        &mut self,
        options: &Options,
        chrom_depth: &ChromDepth,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        crate::io::writer::header::write_header(&mut buf, options, chrom_depth)?;
        self.inner.write_all(&buf).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_header_matches_sync_output() -> io::Result<()> {
        use std::num::NonZero;

        let options = Options::builder()
            .set_min_gqx(30.0)
            .set_max_depth_factor(3.0)
            .add_sample("SAMPLE1")
            .add_contig("chr1", const { NonZero::new(1000).unwrap() })
            .build();

        let chrom_depth = ChromDepth::default();

        let mut writer = Writer::new(Vec::new());
        writer.write_header(&options, &chrom_depth).await?;

        let mut sync_writer = crate::io::Writer::new(Vec::new());
        sync_writer.write_header(&options, &chrom_depth)?;

        assert_eq!(writer.get_ref(), sync_writer.get_ref());

        Ok(())
    }

    #[tokio::test]
    async fn test_write_header_with_no_samples() {
        let options = Options::default();

        let mut writer = Writer::new(Vec::new());
        let err = writer
            .write_header(&options, &ChromDepth::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(writer.get_ref().is_empty());
    }
}
