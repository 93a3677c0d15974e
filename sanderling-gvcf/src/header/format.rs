//! gVCF header FORMAT field declaration.

pub mod ty;

pub use self::ty::Type;

use super::Number;

/// A FORMAT field declaration (`##FORMAT`).
///
/// The built-in constructors cover every genotype field a sample column in
/// this stream can populate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Format {
    id: String,
    number: Number,
    ty: Type,
    description: String,
}

impl Format {
    /// Creates a FORMAT field declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use sanderling_gvcf::header::{Format, Number, format::Type};
    /// let format = Format::new("GT", Number::Count(1), Type::String, "Genotype");
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

    /// The genotype.
    pub fn gt() -> Self {
        Self::new("GT", Number::Count(1), Type::String, "Genotype")
    }

    /// The genotype quality.
    pub fn gq() -> Self {
        Self::new("GQ", Number::Count(1), Type::Integer, "Genotype Quality")
    }

    /// The minimum of the variant and non-variant genotype qualities.
    pub fn gqx() -> Self {
        Self::new(
            "GQX",
            Number::Count(1),
            Type::Integer,
            "Minimum of {Genotype quality assuming variant position,Genotype quality assuming non-variant position}",
        )
    }

    /// The filtered basecall depth used for site genotyping.
    pub fn dp() -> Self {
        Self::new(
            "DP",
            Number::Count(1),
            Type::Integer,
            "Filtered basecall depth used for site genotyping",
        )
    }

    /// The count of basecalls filtered before site genotyping.
    pub fn dpf() -> Self {
        Self::new(
            "DPF",
            Number::Count(1),
            Type::Integer,
            "Basecalls filtered from input prior to site genotyping",
        )
    }

    /// The allelic depths.
    pub fn ad() -> Self {
        Self::new(
            "AD",
            Number::Unknown,
            Type::Integer,
            "Allelic depths for the ref and alt alleles in the order listed",
        )
    }

    /// The read depth associated with an indel.
    pub fn dpi() -> Self {
        Self::new(
            "DPI",
            Number::Count(1),
            Type::Integer,
            "Read depth associated with the indel, taken from the site preceding the indel",
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
