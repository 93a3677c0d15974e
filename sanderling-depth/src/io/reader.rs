//! Depth summary reader.

use std::io::{self, BufRead};

use crate::ChromDepth;

const LINE_FEED: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';
const DELIMITER: u8 = b'\t';

/// A depth summary reader.
pub struct Reader<R> {
    inner: R,
}

impl<R> Reader<R> {
    /// Creates a depth summary reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::io::Reader;
    /// let data = b"chr1\t38.29\n";
    /// let reader = Reader::new(&data[..]);
    /// ```
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Reads the entire depth summary.
    ///
    /// Records are returned in file order. A duplicate chromosome name, a
    /// missing field, or a depth that is not a finite, positive number is an
    /// [`io::ErrorKind::InvalidData`] error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_depth::io::Reader;
    ///
    /// let data = b"chr1\t38.29\nchr2\t37.11\n";
    /// let mut reader = Reader::new(&data[..]);
    ///
    /// let chrom_depth = reader.read_chrom_depth()?;
    ///
    /// assert_eq!(chrom_depth.len(), 2);
    /// assert_eq!(chrom_depth.get("chr1"), Some(38.29));
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub fn read_chrom_depth(&mut self) -> io::Result<ChromDepth> {
        let mut chrom_depth = ChromDepth::new();
        let mut buf = Vec::new();

        loop {
            buf.clear();

            if self.inner.read_until(LINE_FEED, &mut buf)? == 0 {
                break;
            }

            if buf.ends_with(&[LINE_FEED]) {
                buf.pop();

                if buf.ends_with(&[CARRIAGE_RETURN]) {
                    buf.pop();
                }
            }

            let (chrom, depth) = parse_record(&buf)?;

            if chrom_depth.get(&chrom).is_some() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("duplicate chromosome: {chrom}"),
                ));
            }

            chrom_depth.insert(chrom, depth);
        }

        Ok(chrom_depth)
    }
}

fn parse_record(src: &[u8]) -> io::Result<(String, f64)> {
    let i = memchr::memchr(DELIMITER, src).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "missing depth field")
    })?;

    let (raw_chrom, raw_depth) = (&src[..i], &src[i + 1..]);

    if raw_chrom.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing chromosome name",
        ));
    }

    let chrom = std::str::from_utf8(raw_chrom)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        .to_string();

    let depth: f64 = lexical_core::parse(raw_depth)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if !depth.is_finite() || depth <= 0.0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid depth for {chrom}: expected a finite, positive value"),
        ));
    }

    Ok((chrom, depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_chrom_depth() -> io::Result<()> {
        let data = b"chr1\t38.29\nchr2\t37.11\nchrM\t6467.2\n";
        let mut reader = Reader::new(&data[..]);

        let chrom_depth = reader.read_chrom_depth()?;

        assert_eq!(chrom_depth.len(), 3);
        assert_eq!(chrom_depth.get("chr1"), Some(38.29));
        assert_eq!(chrom_depth.get("chr2"), Some(37.11));
        assert_eq!(chrom_depth.get("chrM"), Some(6467.2));

        Ok(())
    }

    #[test]
    fn test_read_chrom_depth_with_empty_input() -> io::Result<()> {
        let mut reader = Reader::new(&b""[..]);
        let chrom_depth = reader.read_chrom_depth()?;
        assert!(chrom_depth.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_chrom_depth_without_final_newline() -> io::Result<()> {
        let mut reader = Reader::new(&b"chr1\t38.29"[..]);
        let chrom_depth = reader.read_chrom_depth()?;
        assert_eq!(chrom_depth.get("chr1"), Some(38.29));
        Ok(())
    }

    #[test]
    fn test_read_chrom_depth_with_crlf_line_endings() -> io::Result<()> {
        let mut reader = Reader::new(&b"chr1\t38.29\r\nchr2\t37.11\r\n"[..]);
        let chrom_depth = reader.read_chrom_depth()?;
        assert_eq!(chrom_depth.len(), 2);
        assert_eq!(chrom_depth.get("chr2"), Some(37.11));
        Ok(())
    }

    #[test]
    fn test_read_chrom_depth_with_invalid_input() {
        fn t(data: &[u8]) {
            let mut reader = Reader::new(data);
            let err = reader.read_chrom_depth().unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        }

        t(b"chr1\n"); // missing depth field
        t(b"\t38.29\n"); // missing chromosome name
        t(b"chr\xff1\t38.29\n"); // non-UTF-8 chromosome name
        t(b"chr1\teight\n"); // unparsable depth
        t(b"chr1\t38.29\textra\n"); // trailing field
        t(b"chr1\t0\n"); // nonpositive depth
        t(b"chr1\t-1.5\n"); // negative depth
        t(b"chr1\tnan\n"); // nonfinite depth
        t(b"chr1\t38.29\nchr1\t40.0\n"); // duplicate chromosome
    }
}
