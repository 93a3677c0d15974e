use std::io::{self, Write};

use sanderling_depth::ChromDepth;

use crate::{
    Options,
    header::{Filter, Format, Info},
};

// The depth table is part of the synthesis contract but contributes no header
// text: depth cutoffs are per-record state, and the HighDepth declaration
// documents the rule instead of per-chromosome numbers.
pub(crate) fn write_header<W>(
    writer: &mut W,
    options: &Options,
    _chrom_depth: &ChromDepth,
) -> io::Result<()>
where
    W: Write,
{
    let filters = options.filters();

    validate(options, &filters)?;

    write_meta(writer, options)?;
    write_filters(writer, &filters)?;
    write_infos(writer, options)?;
    write_formats(writer, options)?;
    write_contigs(writer, options)?;
    write_column_names(writer, options.samples())?;

    Ok(())
}

fn validate(options: &Options, filters: &[Filter]) -> io::Result<()> {
    if options.samples().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "sample list is empty",
        ));
    }

    for sample in options.samples() {
        if !is_valid_sample_name(sample) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid sample name: {sample}"),
            ));
        }
    }

    for name in options.contigs().keys() {
        if !is_valid_id(name) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid contig name: {name}"),
            ));
        }
    }

    if let Some(reference) = options.reference()
        && !is_valid_description(reference)
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "invalid reference URI",
        ));
    }

    for filter in filters {
        if !is_valid_id(filter.id()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid filter ID: {}", filter.id()),
            ));
        }

        if !is_valid_description(filter.description()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid description for filter {}", filter.id()),
            ));
        }
    }

    Ok(())
}

// IDs land inside `<ID=..,..>` structured lines, so the structural characters
// of that grammar cannot appear in them.
fn is_valid_id(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_graphic() && !matches!(b, b'<' | b'>' | b'=' | b',' | b'"' | b';'))
}

fn is_valid_sample_name(s: &str) -> bool {
    !s.is_empty() && !s.bytes().any(|b| matches!(b, b'\t' | b'\n' | b'\r'))
}

fn is_valid_description(s: &str) -> bool {
    !s.bytes().any(|b| matches!(b, b'\n' | b'\r'))
}

fn write_meta<W>(writer: &mut W, options: &Options) -> io::Result<()>
where
    W: Write,
{
    writeln!(writer, "##fileformat={}", options.file_format())?;

    writeln!(
        writer,
        "##source={} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )?;

    if let Some(reference) = options.reference() {
        writeln!(writer, "##reference={reference}")?;
    }

    Ok(())
}

fn write_filters<W>(writer: &mut W, filters: &[Filter]) -> io::Result<()>
where
    W: Write,
{
    for filter in filters {
        write!(writer, "##FILTER=<ID={},Description=", filter.id())?;
        write_description(writer, filter.description())?;
        writeln!(writer, ">")?;
    }

    Ok(())
}

fn write_infos<W>(writer: &mut W, options: &Options) -> io::Result<()>
where
    W: Write,
{
    let mut infos = vec![Info::end()];

    if let Some(parameters) = options.block_compression() {
        infos.push(Info::block_avg(parameters));
    }

    infos.extend([
        Info::snv_sb(),
        Info::snv_hpol(),
        Info::cigar(),
        Info::ru(),
        Info::ref_rep(),
        Info::id_rep(),
    ]);

    for info in &infos {
        write!(
            writer,
            "##INFO=<ID={},Number={},Type={},Description=",
            info.id(),
            info.number(),
            info.ty()
        )?;
        write_description(writer, info.description())?;
        writeln!(writer, ">")?;
    }

    Ok(())
}

fn write_formats<W>(writer: &mut W, options: &Options) -> io::Result<()>
where
    W: Write,
{
    if !options.format_declarations() {
        return Ok(());
    }

    let formats = [
        Format::gt(),
        Format::gq(),
        Format::gqx(),
        Format::dp(),
        Format::dpf(),
        Format::ad(),
        Format::dpi(),
    ];

    for format in &formats {
        write!(
            writer,
            "##FORMAT=<ID={},Number={},Type={},Description=",
            format.id(),
            format.number(),
            format.ty()
        )?;
        write_description(writer, format.description())?;
        writeln!(writer, ">")?;
    }

    Ok(())
}

fn write_contigs<W>(writer: &mut W, options: &Options) -> io::Result<()>
where
    W: Write,
{
    for (name, length) in options.contigs() {
        writeln!(writer, "##contig=<ID={name},length={length}>")?;
    }

    Ok(())
}

fn write_column_names<W>(writer: &mut W, samples: &[String]) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(b"#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT")?;

    for sample in samples {
        write!(writer, "\t{sample}")?;
    }

    writer.write_all(b"\n")
}

fn write_description<W>(writer: &mut W, s: &str) -> io::Result<()>
where
    W: Write,
{
    writer.write_all(b"\"")?;

    let mut src = s.as_bytes();

    while let Some(i) = src.iter().position(|&b| matches!(b, b'"' | b'\\')) {
        writer.write_all(&src[..i])?;
        writer.write_all(b"\\")?;
        writer.write_all(&src[i..=i])?;
        src = &src[i + 1..];
    }

    writer.write_all(src)?;
    writer.write_all(b"\"")
}
