//! Error types for the engine and its configuration layer

use miette::Diagnostic;
use thiserror::Error;

use crate::dimension::Dimension;

/// Errors raised by conversion, arithmetic and registration.
///
/// Every variant is a programmer or data error; none is transient and none is
/// retried.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum UnitError {
    /// Operands of an operation that needs equal dimensions differ
    #[error("dimension mismatch: expected {expected}, found {found}")]
    #[diagnostic(
        code(U0001),
        help("convert one operand into a unit of dimension {} before combining them", .expected)
    )]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },

    /// Multiplication or division attempted on an affine unit
    #[error("unit `{symbol}` has offset {offset} and cannot be multiplied or divided")]
    #[diagnostic(
        code(U0002),
        help("convert the operand to its ratio reference unit (e.g. kelvin) first")
    )]
    NonMultiplicativeUnit { symbol: String, offset: f64 },

    /// No concrete unit is registered for the result of a product/quotient
    #[error("no unit is registered for dimension {dimension}")]
    #[diagnostic(
        code(U0003),
        help("register a reference unit (scale 1, offset 0) for this dimension")
    )]
    UnresolvedDimension { dimension: Dimension },

    /// A unit definition is malformed or collides with an existing one
    #[error("invalid definition for unit `{symbol}`: {reason}")]
    #[diagnostic(code(U0004))]
    InvalidUnitDefinition { symbol: String, reason: String },

    /// A symbol lookup found nothing
    #[error("unknown unit: {symbol}")]
    #[diagnostic(code(U0005), help("check the spelling, or register the unit first"))]
    UnknownUnit { symbol: String },
}

impl UnitError {
    pub(crate) fn mismatch(expected: Dimension, found: Dimension) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    pub(crate) fn invalid(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUnitDefinition {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while loading a [`crate::config::RegistryConfig`]
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    #[diagnostic(code(C0001))]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    #[diagnostic(code(C0002))]
    Parse(String),

    #[error("unsupported config format: {0}")]
    #[diagnostic(code(C0003), help("use a .toml or .json file"))]
    UnsupportedFormat(String),

    #[error("unknown dimension name `{0}`")]
    #[diagnostic(
        code(C0004),
        help("use a named dimension such as \"length\" or an exponent table")
    )]
    UnknownDimension(String),

    #[error("unknown SI prefix `{0}`")]
    #[diagnostic(code(C0005), help("use a prefix name (\"milli\") or symbol (\"m\")"))]
    UnknownPrefix(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Unit(#[from] UnitError),
}

pub type Result<T, E = UnitError> = std::result::Result<T, E>;
