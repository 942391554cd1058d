//! Compile-time unit tags
//!
//! Every concrete unit is a zero-sized marker type implementing [`Unit`].
//! The marker carries no data; its associated constants describe the
//! transform and its associated [`QuantityKind`] fixes the dimension at the
//! type level, so `Measurable<Meter> + Measurable<Kilogram>` does not
//! compile.

use std::borrow::Cow;
use std::fmt;

use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;

/// Type-level quantity family (length, mass, area, ...).
///
/// Two unit tags with the same `Kind` are statically known to share a
/// dimension.
pub trait QuantityKind: 'static {
    /// The dimension every unit of this kind has
    const DIMENSION: Dimension;

    /// Human name of the quantity, e.g. `"absorbed dose"`
    const NAME: &'static str;
}

/// Trait for all compile-time unit tags
///
/// Every unit has:
/// - a kind, and through it a dimension
/// - a scale and an offset relative to the reference unit of that dimension
///   (`amount_in_reference = amount * SCALE + OFFSET`)
/// - a symbol and a name
///
/// `SCALE` must be strictly positive; the registry rejects tags that violate
/// this when they are registered.
pub trait Unit: Copy + Default + fmt::Debug + 'static {
    type Kind: QuantityKind;

    const SCALE: f64;

    /// Nonzero only for affine units such as Celsius
    const OFFSET: f64 = 0.0;

    const SYMBOL: &'static str;

    const NAME: &'static str;

    const DIMENSION: Dimension = <Self::Kind as QuantityKind>::DIMENSION;

    /// Runtime descriptor of this tag
    fn descriptor() -> UnitDescriptor {
        UnitDescriptor::from_parts(
            Cow::Borrowed(Self::SYMBOL),
            Cow::Borrowed(Self::NAME),
            Self::DIMENSION,
            Self::SCALE,
            Self::OFFSET,
        )
    }

    /// Convert an amount in this unit to the reference unit
    #[inline]
    fn to_reference(amount: f64) -> f64 {
        amount * Self::SCALE + Self::OFFSET
    }

    /// Convert a reference-unit amount to this unit
    #[inline]
    fn from_reference(amount: f64) -> f64 {
        (amount - Self::OFFSET) / Self::SCALE
    }
}
