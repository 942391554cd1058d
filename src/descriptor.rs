//! Runtime unit descriptors
//!
//! A [`UnitDescriptor`] is the runtime identity of a unit: symbol, name,
//! dimension and an affine transform into the reference unit of that
//! dimension,
//!
//! ```text
//! amount_in_reference = amount * scale + offset
//! ```
//!
//! The reference unit of every dimension is its coherent SI unit (m, kg, m²,
//! m³, Gy, K, ...), with `scale = 1` and `offset = 0`. Ratio units have
//! `offset = 0`; affine units such as Celsius have a nonzero offset.

use std::borrow::Cow;
use std::fmt;

use crate::dimension::Dimension;
use crate::error::{Result, UnitError};
use crate::prefix::Prefix;

/// Immutable description of one concrete unit
#[derive(Debug, Clone, PartialEq)]
pub struct UnitDescriptor {
    symbol: Cow<'static, str>,
    name: Cow<'static, str>,
    dimension: Dimension,
    scale: f64,
    offset: f64,
}

impl UnitDescriptor {
    /// General constructor.
    ///
    /// Fails with [`UnitError::InvalidUnitDefinition`] if the symbol is empty,
    /// `scale` is not strictly positive, or either number is not finite.
    pub fn new(
        symbol: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        dimension: Dimension,
        scale: f64,
        offset: f64,
    ) -> Result<Self> {
        let unit = Self::from_parts(symbol.into(), name.into(), dimension, scale, offset);
        unit.validate()?;
        Ok(unit)
    }

    /// The reference unit of `dimension` (scale 1, offset 0)
    pub fn reference(
        symbol: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        dimension: Dimension,
    ) -> Result<Self> {
        Self::new(symbol, name, dimension, 1.0, 0.0)
    }

    /// A unit defined against `reference` by
    /// `amount_in_reference = amount * scale + offset`.
    ///
    /// `reference` is normally the reference unit of its dimension. If it is
    /// not, the two transforms compose, so the stored transform is always
    /// relative to the dimension's reference unit.
    pub fn affine(
        symbol: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        reference: &UnitDescriptor,
        scale: f64,
        offset: f64,
    ) -> Result<Self> {
        let symbol = symbol.into();
        check_transform(&symbol, scale, offset)?;
        Self::new(
            symbol,
            name,
            reference.dimension,
            scale * reference.scale,
            offset * reference.scale + reference.offset,
        )
    }

    /// Derive a prefixed unit: the scale is multiplied by the prefix factor;
    /// dimension and offset are inherited unchanged.
    pub fn derive_with_prefix(&self, prefix: Prefix) -> Result<Self> {
        Self::new(
            format!("{}{}", prefix.symbol(), self.symbol),
            format!("{}{}", prefix.name(), self.name),
            self.dimension,
            self.scale * prefix.factor(),
            self.offset,
        )
    }

    /// Unchecked construction for compile-time tags; see [`crate::Unit`].
    pub(crate) fn from_parts(
        symbol: Cow<'static, str>,
        name: Cow<'static, str>,
        dimension: Dimension,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            symbol,
            name,
            dimension,
            scale,
            offset,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(UnitError::invalid(
                self.name.as_ref(),
                "unit symbol must not be empty",
            ));
        }
        check_transform(&self.symbol, self.scale, self.offset)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether this is the reference unit of its dimension
    pub fn is_reference(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Whether the transform has an offset (e.g. Celsius)
    pub fn is_affine(&self) -> bool {
        self.offset != 0.0
    }

    /// Same dimension and bit-identical transform. Conversion between two
    /// such units is the identity.
    pub fn same_transform(&self, other: &UnitDescriptor) -> bool {
        self.dimension == other.dimension
            && self.scale.to_bits() == other.scale.to_bits()
            && self.offset.to_bits() == other.offset.to_bits()
    }

    /// Express `amount` (in this unit) in the reference unit
    #[inline]
    pub fn to_reference(&self, amount: f64) -> f64 {
        amount * self.scale + self.offset
    }

    /// Express a reference-unit amount in this unit
    #[inline]
    pub fn from_reference(&self, amount: f64) -> f64 {
        (amount - self.offset) / self.scale
    }
}

fn check_transform(symbol: &str, scale: f64, offset: f64) -> Result<()> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(UnitError::invalid(
            symbol,
            format!("scale must be finite and positive, got {}", scale),
        ));
    }
    if !offset.is_finite() {
        return Err(UnitError::invalid(
            symbol,
            format!("offset must be finite, got {}", offset),
        ));
    }
    Ok(())
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> UnitDescriptor {
        UnitDescriptor::reference("m", "meter", Dimension::LENGTH).unwrap()
    }

    fn kelvin() -> UnitDescriptor {
        UnitDescriptor::reference("K", "kelvin", Dimension::TEMPERATURE).unwrap()
    }

    #[test]
    fn test_reference_unit() {
        let m = meter();
        assert!(m.is_reference());
        assert!(!m.is_affine());
        assert_eq!(m.to_reference(3.5), 3.5);
    }

    #[test]
    fn test_prefix_derivation() {
        let cm = meter().derive_with_prefix(Prefix::Centi).unwrap();
        assert_eq!(cm.symbol(), "cm");
        assert_eq!(cm.name(), "centimeter");
        assert_eq!(cm.scale(), 1e-2);
        assert_eq!(cm.offset(), 0.0);
        assert_eq!(cm.dimension(), Dimension::LENGTH);
    }

    #[test]
    fn test_prefix_inherits_offset() {
        let celsius = UnitDescriptor::affine("°C", "degree Celsius", &kelvin(), 1.0, 273.15).unwrap();
        let milli = celsius.derive_with_prefix(Prefix::Milli).unwrap();
        assert_eq!(milli.offset(), 273.15);
        assert_eq!(milli.scale(), 1e-3);
        assert_eq!(milli.dimension(), Dimension::TEMPERATURE);
    }

    #[test]
    fn test_affine_composes_through_non_reference_unit() {
        let celsius = UnitDescriptor::affine("°C", "degree Celsius", &kelvin(), 1.0, 273.15).unwrap();
        // °F = °C * 5/9 - 160/9
        let fahrenheit =
            UnitDescriptor::affine("°F", "degree Fahrenheit", &celsius, 5.0 / 9.0, -160.0 / 9.0)
                .unwrap();
        assert!((fahrenheit.to_reference(32.0) - 273.15).abs() < 1e-9);
        assert!((fahrenheit.to_reference(212.0) - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = UnitDescriptor::new("x", "bogus", Dimension::LENGTH, scale, 0.0).unwrap_err();
            assert!(matches!(err, UnitError::InvalidUnitDefinition { .. }), "{scale}");
        }
        assert!(UnitDescriptor::affine("x", "bogus", &meter(), -2.0, 0.0).is_err());
    }

    #[test]
    fn test_rejects_empty_symbol_and_bad_offset() {
        assert!(UnitDescriptor::reference("", "nothing", Dimension::LENGTH).is_err());
        assert!(UnitDescriptor::new("x", "x", Dimension::LENGTH, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_same_transform() {
        let a = meter();
        let b = UnitDescriptor::reference("metre", "metre", Dimension::LENGTH).unwrap();
        assert!(a.same_transform(&b));
        assert!(!a.same_transform(&kelvin()));
    }
}
