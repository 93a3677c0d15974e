//! Whole-header integration tests: synthesize headers and compare bytes.

use std::{
    io::{self, Write},
    num::NonZero,
};

use sanderling_depth::ChromDepth;
use sanderling_gvcf::{Options, header::Filter, io::Writer, options::BlockParameters};

fn write_header_to_vec(options: &Options, chrom_depth: &ChromDepth) -> io::Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_header(options, chrom_depth)?;
    Ok(writer.into_inner())
}

fn full_catalog_options() -> Options {
    Options::builder()
        .set_reference("file:///data/genome.fa")
        .set_indel_conflict(true)
        .set_site_conflict(true)
        .set_min_gqx(30.0)
        .set_max_base_filt(0.4)
        .set_max_snv_sb(10.0)
        .set_max_snv_hpol(6)
        .set_max_ref_rep(8)
        .set_max_depth_factor(3.0)
        .set_block_compression(BlockParameters::default())
        .add_sample("SAMPLE1")
        .add_contig("chr1", const { NonZero::new(249250621).unwrap() })
        .build()
}

// Not a format string: the GQX description contains literal braces.
const FULL_CATALOG_AFTER_SOURCE: &str = "\
##reference=file:///data/genome.fa
##FILTER=<ID=IndelConflict,Description=\"Locus is in a region with conflicting indel calls\">
##FILTER=<ID=SiteConflict,Description=\"Site genotype conflicts with a proximal indel call\">
##FILTER=<ID=LowGQX,Description=\"Locus GQX is less than 30 or not present\">
##FILTER=<ID=HighDPFRatio,Description=\"The fraction of basecalls filtered out at a site is greater than 0.4\">
##FILTER=<ID=HighSNVSB,Description=\"SNV strand bias value (SNVSB) exceeds 10\">
##FILTER=<ID=HighSNVHPOL,Description=\"SNV contextual homopolymer length (SNVHPOL) exceeds 6\">
##FILTER=<ID=HighREFREP,Description=\"Locus contains an indel allele occurring in a homopolymer or dinucleotide track with a reference repeat greater than 8\">
##FILTER=<ID=HighDepth,Description=\"Locus depth is greater than 3x the expected chromosome depth\">
##INFO=<ID=END,Number=1,Type=Integer,Description=\"End position of the region described in this record\">
##INFO=<ID=BLOCKAVG_min30p3a,Number=0,Type=Flag,Description=\"Non-variant site block. All sites in a block are constrained to be non-variant, have the same filter value, and have sample values in range [x,y], y <= max(x+3,(x*1.3)). All printed site block sample values are the minimum observed in the region spanned by the block\">
##INFO=<ID=SNVSB,Number=1,Type=Float,Description=\"SNV site strand bias\">
##INFO=<ID=SNVHPOL,Number=1,Type=Integer,Description=\"SNV contextual homopolymer length\">
##INFO=<ID=CIGAR,Number=A,Type=String,Description=\"CIGAR alignment for each alternate indel allele\">
##INFO=<ID=RU,Number=A,Type=String,Description=\"Smallest repeating sequence unit extended or contracted in the indel allele relative to the reference\">
##INFO=<ID=REFREP,Number=A,Type=Integer,Description=\"Number of times RU is repeated in the reference\">
##INFO=<ID=IDREP,Number=A,Type=Integer,Description=\"Number of times RU is repeated in the indel allele\">
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">
##FORMAT=<ID=GQ,Number=1,Type=Integer,Description=\"Genotype Quality\">
##FORMAT=<ID=GQX,Number=1,Type=Integer,Description=\"Minimum of {Genotype quality assuming variant position,Genotype quality assuming non-variant position}\">
##FORMAT=<ID=DP,Number=1,Type=Integer,Description=\"Filtered basecall depth used for site genotyping\">
##FORMAT=<ID=DPF,Number=1,Type=Integer,Description=\"Basecalls filtered from input prior to site genotyping\">
##FORMAT=<ID=AD,Number=.,Type=Integer,Description=\"Allelic depths for the ref and alt alleles in the order listed\">
##FORMAT=<ID=DPI,Number=1,Type=Integer,Description=\"Read depth associated with the indel, taken from the site preceding the indel\">
##contig=<ID=chr1,length=249250621>
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE1
";

fn full_catalog_expected() -> String {
    let mut expected = format!(
        "##fileformat=VCFv4.1\n##source={} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    expected.push_str(FULL_CATALOG_AFTER_SOURCE);
    expected
}

// ---------------------------------------------------------------------------
// Golden output
// ---------------------------------------------------------------------------

#[test]
fn test_write_header_with_full_catalog() -> io::Result<()> {
    let buf = write_header_to_vec(&full_catalog_options(), &ChromDepth::default())?;
    assert_eq!(String::from_utf8(buf).unwrap(), full_catalog_expected());
    Ok(())
}

#[test]
fn test_write_header_is_deterministic() -> io::Result<()> {
    let options = full_catalog_options();
    let chrom_depth: ChromDepth = [("chr1", 38.29)].into_iter().collect();

    let first = write_header_to_vec(&options, &chrom_depth)?;
    let second = write_header_to_vec(&options, &chrom_depth)?;

    assert_eq!(first, second);

    Ok(())
}

// ---------------------------------------------------------------------------
// Filter lines track enabled options
// ---------------------------------------------------------------------------

#[test]
fn test_disabling_a_filter_removes_exactly_its_line() -> io::Result<()> {
    let all = write_header_to_vec(&full_catalog_options(), &ChromDepth::default())?;

    let without_sb = Options::builder()
        .set_reference("file:///data/genome.fa")
        .set_indel_conflict(true)
        .set_site_conflict(true)
        .set_min_gqx(30.0)
        .set_max_base_filt(0.4)
        .set_max_snv_hpol(6)
        .set_max_ref_rep(8)
        .set_max_depth_factor(3.0)
        .set_block_compression(BlockParameters::default())
        .add_sample("SAMPLE1")
        .add_contig("chr1", const { NonZero::new(249250621).unwrap() })
        .build();

    let buf = write_header_to_vec(&without_sb, &ChromDepth::default())?;

    let all = String::from_utf8(all).unwrap();
    let actual: Vec<_> = String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    let expected: Vec<_> = all
        .lines()
        .filter(|line| !line.starts_with("##FILTER=<ID=HighSNVSB,"))
        .map(String::from)
        .collect();

    assert_eq!(actual, expected);

    Ok(())
}

#[test]
fn test_filter_line_count_matches_enabled_filters() -> io::Result<()> {
    fn filter_line_count(options: &Options) -> io::Result<usize> {
        let buf = write_header_to_vec(options, &ChromDepth::default())?;
        let src = String::from_utf8(buf).unwrap();
        Ok(src.lines().filter(|l| l.starts_with("##FILTER=")).count())
    }

    let none = Options::builder().add_sample("SAMPLE1").build();
    assert_eq!(filter_line_count(&none)?, 0);

    let one = Options::builder().add_sample("SAMPLE1").set_min_gqx(30.0).build();
    assert_eq!(filter_line_count(&one)?, 1);

    assert_eq!(filter_line_count(&full_catalog_options())?, 8);

    Ok(())
}

#[test]
fn test_caller_registered_filters_follow_the_catalog() -> io::Result<()> {
    let options = Options::builder()
        .set_min_gqx(30.0)
        .add_filter(Filter::new("q10", "Quality below 10"))
        .add_sample("SAMPLE1")
        .build();

    let buf = write_header_to_vec(&options, &ChromDepth::default())?;
    let src = String::from_utf8(buf).unwrap();

    let filter_lines: Vec<_> = src.lines().filter(|l| l.starts_with("##FILTER=")).collect();

    assert_eq!(
        filter_lines,
        [
            "##FILTER=<ID=LowGQX,Description=\"Locus GQX is less than 30 or not present\">",
            "##FILTER=<ID=q10,Description=\"Quality below 10\">",
        ]
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// The depth table never leaks into header text
// ---------------------------------------------------------------------------

#[test]
fn test_output_is_independent_of_depth_table_contents() -> io::Result<()> {
    let options = full_catalog_options();

    let empty = ChromDepth::default();
    let populated: ChromDepth = [("chr2", 37.0), ("chr1", 38.29), ("chrX", 19.04)]
        .into_iter()
        .collect();

    assert_eq!(
        write_header_to_vec(&options, &empty)?,
        write_header_to_vec(&options, &populated)?
    );

    Ok(())
}

#[test]
fn test_depth_filter_with_empty_table_documents_the_rule() -> io::Result<()> {
    let options = Options::builder()
        .set_max_depth_factor(3.0)
        .add_sample("SAMPLE1")
        .add_contig("chr1", const { NonZero::new(1000).unwrap() })
        .build();

    let buf = write_header_to_vec(&options, &ChromDepth::default())?;
    let src = String::from_utf8(buf).unwrap();

    assert!(src.contains(
        "##FILTER=<ID=HighDepth,Description=\"Locus depth is greater than 3x the expected chromosome depth\">"
    ));
    assert!(!src.contains("MaxDepth"));
    assert!(src.ends_with("\tSAMPLE1\n"));

    Ok(())
}

// ---------------------------------------------------------------------------
// Columns and contigs
// ---------------------------------------------------------------------------

#[test]
fn test_sample_columns_preserve_declared_order() -> io::Result<()> {
    let options = Options::builder()
        .add_sample("SAMPLE2")
        .add_sample("SAMPLE1")
        .add_sample("SAMPLE3")
        .build();

    let buf = write_header_to_vec(&options, &ChromDepth::default())?;
    let src = String::from_utf8(buf).unwrap();
    let column_line = src.lines().last().unwrap();

    assert_eq!(
        column_line,
        "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE2\tSAMPLE1\tSAMPLE3"
    );

    Ok(())
}

#[test]
fn test_contig_lines_preserve_declared_order() -> io::Result<()> {
    let options = Options::builder()
        .add_sample("SAMPLE1")
        .add_contig("chrM", const { NonZero::new(16571).unwrap() })
        .add_contig("chr1", const { NonZero::new(249250621).unwrap() })
        .add_contig("chr10", const { NonZero::new(135534747).unwrap() })
        .build();

    // Depth entries deliberately cover a different contig set in a different
    // order.
    let chrom_depth: ChromDepth = [("chr10", 40.0), ("chr2", 37.0)].into_iter().collect();

    let buf = write_header_to_vec(&options, &chrom_depth)?;
    let src = String::from_utf8(buf).unwrap();

    let contig_lines: Vec<_> = src.lines().filter(|l| l.starts_with("##contig=")).collect();

    assert_eq!(
        contig_lines,
        [
            "##contig=<ID=chrM,length=16571>",
            "##contig=<ID=chr1,length=249250621>",
            "##contig=<ID=chr10,length=135534747>",
        ]
    );

    Ok(())
}

#[test]
fn test_format_declarations_can_be_suppressed() -> io::Result<()> {
    let options = Options::builder()
        .add_sample("SAMPLE1")
        .set_format_declarations(false)
        .build();

    let buf = write_header_to_vec(&options, &ChromDepth::default())?;
    let src = String::from_utf8(buf).unwrap();

    assert!(!src.contains("##FORMAT="));

    let column_line = src.lines().last().unwrap();
    assert!(column_line.contains("\tFORMAT\t"));

    Ok(())
}

// ---------------------------------------------------------------------------
// The worked example: one filter, one contig, one sample
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_single_sample_header() -> io::Result<()> {
    let options = Options::builder()
        .set_min_gqx(30.0)
        .add_sample("SAMPLE1")
        .add_contig("chr1", const { NonZero::new(1000).unwrap() })
        .build();

    let buf = write_header_to_vec(&options, &ChromDepth::default())?;
    let src = String::from_utf8(buf).unwrap();

    let filter_lines: Vec<_> = src.lines().filter(|l| l.starts_with("##FILTER=")).collect();
    assert_eq!(
        filter_lines,
        ["##FILTER=<ID=LowGQX,Description=\"Locus GQX is less than 30 or not present\">"]
    );

    let contig_lines: Vec<_> = src.lines().filter(|l| l.starts_with("##contig=")).collect();
    assert_eq!(contig_lines, ["##contig=<ID=chr1,length=1000>"]);

    assert!(src.ends_with("\tSAMPLE1\n"));

    Ok(())
}

// ---------------------------------------------------------------------------
// Failure semantics
// ---------------------------------------------------------------------------

/// A sink that accepts a fixed number of writes, then fails every subsequent
/// write.
struct FailingWriter {
    writes_left: usize,
    failures: usize,
    buf: Vec<u8>,
}

impl FailingWriter {
    fn new(writes_left: usize) -> Self {
        Self {
            writes_left,
            failures: 0,
            buf: Vec::new(),
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.writes_left == 0 {
            self.failures += 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink failed"));
        }

        self.writes_left -= 1;
        self.buf.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_propagates_and_aborts_emission() {
    let options = full_catalog_options();

    let mut writer = Writer::new(FailingWriter::new(4));
    let err = writer
        .write_header(&options, &ChromDepth::default())
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

    let sink = writer.into_inner();
    assert_eq!(sink.failures, 1);

    let full_len = full_catalog_expected().len();
    assert!(sink.buf.len() < full_len);
}

#[test]
fn test_empty_sample_list_fails_before_any_write() {
    let options = Options::builder()
        .set_min_gqx(30.0)
        .add_contig("chr1", const { NonZero::new(1000).unwrap() })
        .build();

    let mut writer = Writer::new(FailingWriter::new(usize::MAX));
    let err = writer
        .write_header(&options, &ChromDepth::default())
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(writer.get_ref().buf.is_empty());
}
