//! gVCF header INFO field declaration.

pub mod ty;

pub use self::ty::Type;

use super::Number;
use crate::options::BlockParameters;

/// An INFO field declaration (`##INFO`).
///
/// The built-in constructors cover every INFO field a record body in this
/// stream can populate: the region end, the non-variant block flag, the SNV
/// site annotations, and the indel allele annotations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Info {
    id: String,
    number: Number,
    ty: Type,
    description: String,
}

impl Info {
    /// Creates an INFO field declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::{Info, Number, info::Type};
    /// let info = Info::new("END", Number::Count(1), Type::Integer, "End position");
    /// ```
    pub fn new<I, D>(id: I, number: Number, ty: Type, description: D) -> Self
    where
        I: Into<String>,
        D: Into<String>,
    {
        Self {
            id: id.into(),
            number,
            ty,
            description: description.into(),
        }
    }

    /// The end position of the region a record describes.
    pub fn end() -> Self {
        Self::new(
            "END",
            Number::Count(1),
            Type::Integer,
            "End position of the region described in this record",
        )
    }

    /// The non-variant block flag.
    ///
    /// The ID and the banding rule in the description are both derived from
    /// the block parameters, so the declaration always matches the banding
    /// applied when blocks were formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::{header::Info, options::BlockParameters};
    /// let info = Info::block_avg(BlockParameters::default());
    /// assert_eq!(info.id(), "BLOCKAVG_min30p3a");
    /// ```
    pub fn block_avg(parameters: BlockParameters) -> Self {
        let abs_tol = parameters.abs_tol();
        let band_factor = 1.0 + f64::from(parameters.percent_tol()) / 100.0;

        Self::new(
            parameters.id(),
            Number::Count(0),
            Type::Flag,
            format!(
                "Non-variant site block. All sites in a block are constrained to be non-variant, have the same filter value, and have sample values in range [x,y], y <= max(x+{abs_tol},(x*{band_factor})). All printed site block sample values are the minimum observed in the region spanned by the block"
            ),
        )
    }

    /// The SNV site strand bias.
    pub fn snv_sb() -> Self {
        Self::new(
            "SNVSB",
            Number::Count(1),
            Type::Float,
            "SNV site strand bias",
        )
    }

    /// The SNV contextual homopolymer length.
    pub fn snv_hpol() -> Self {
        Self::new(
            "SNVHPOL",
            Number::Count(1),
            Type::Integer,
            "SNV contextual homopolymer length",
        )
    }

    /// The CIGAR alignment of each alternate indel allele.
    pub fn cigar() -> Self {
        Self::new(
            "CIGAR",
            Number::AlternateBases,
            Type::String,
            "CIGAR alignment for each alternate indel allele",
        )
    }

    /// The repeating sequence unit of an indel allele.
    pub fn ru() -> Self {
        Self::new(
            "RU",
            Number::AlternateBases,
            Type::String,
            "Smallest repeating sequence unit extended or contracted in the indel allele relative to the reference",
        )
    }

    /// The reference repeat count of the repeating sequence unit.
    pub fn ref_rep() -> Self {
        Self::new(
            "REFREP",
            Number::AlternateBases,
            Type::Integer,
            "Number of times RU is repeated in the reference",
        )
    }

    /// The indel allele repeat count of the repeating sequence unit.
    pub fn id_rep() -> Self {
        Self::new(
            "IDREP",
            Number::AlternateBases,
            Type::Integer,
            "Number of times RU is repeated in the indel allele",
        )
    }

    /// Returns the field ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the declared cardinality.
    pub fn number(&self) -> Number {
        self.number
    }

    /// Returns the declared value type.
    pub fn ty(&self) -> Type {
        self.ty
    }

    /// Returns the field description.
    pub fn description(&self) -> &str {
        &self.description
    }
}
