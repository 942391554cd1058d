//! Runtime measurables
//!
//! A [`DynamicMeasurable`] carries its unit as a shared descriptor instead of
//! a type parameter. It is what products and quotients produce (their unit
//! is only known after registry resolution) and what callers use when units
//! come from data, e.g. a configuration file.

use std::fmt;
use std::sync::Arc;

use crate::convert::{self, ArithmeticOp, Composition};
use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::error::Result;
use crate::quantity::Measurable;
use crate::registry::UnitRegistry;
use crate::unit::Unit;

/// An amount with a runtime unit
#[derive(Debug, Clone)]
pub struct DynamicMeasurable {
    amount: f64,
    unit: Arc<UnitDescriptor>,
}

impl DynamicMeasurable {
    pub fn new(amount: f64, unit: Arc<UnitDescriptor>) -> Self {
        Self { amount, unit }
    }

    pub fn from_typed<U: Unit>(measurable: Measurable<U>) -> Self {
        Self::new(measurable.amount(), Arc::new(U::descriptor()))
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> &Arc<UnitDescriptor> {
        &self.unit
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Express this amount in `unit`, which must have the same dimension
    pub fn in_unit(&self, unit: &Arc<UnitDescriptor>) -> Result<Self> {
        let amount = convert::convert(self.amount, &self.unit, unit)?;
        Ok(Self::new(amount, Arc::clone(unit)))
    }

    /// Convert into a compile-time tag
    pub fn into_typed<U: Unit>(self) -> Result<Measurable<U>> {
        convert::require_same_dimension(U::DIMENSION, self.dimension())?;
        Ok(Measurable::new(convert::transform(
            self.amount,
            (self.unit.scale(), self.unit.offset()),
            (U::SCALE, U::OFFSET),
        )))
    }

    /// `self + rhs` in the unit of `self`
    pub fn add(&self, rhs: &DynamicMeasurable) -> Result<Self> {
        self.additive(ArithmeticOp::Add, rhs)
    }

    /// `self - rhs` in the unit of `self`
    pub fn sub(&self, rhs: &DynamicMeasurable) -> Result<Self> {
        self.additive(ArithmeticOp::Sub, rhs)
    }

    fn additive(&self, op: ArithmeticOp, rhs: &DynamicMeasurable) -> Result<Self> {
        let amount = convert::additive(op, (self.amount, &*self.unit), (rhs.amount, &*rhs.unit))?;
        Ok(Self::new(amount, Arc::clone(&self.unit)))
    }

    pub fn multiply(&self, rhs: &DynamicMeasurable, registry: &UnitRegistry) -> Result<Self> {
        self.multiplicative(Composition::Product, rhs, registry)
    }

    pub fn divide(&self, rhs: &DynamicMeasurable, registry: &UnitRegistry) -> Result<Self> {
        self.multiplicative(Composition::Quotient, rhs, registry)
    }

    /// `self ÷ rhs` expressed in `unit`; `DimensionMismatch` when the quotient
    /// has another dimension.
    pub fn divide_into(
        &self,
        rhs: &DynamicMeasurable,
        unit: &Arc<UnitDescriptor>,
        registry: &UnitRegistry,
    ) -> Result<Self> {
        let dimension = self.dimension().quotient(&rhs.dimension());
        convert::require_same_dimension(unit.dimension(), dimension)?;
        self.divide(rhs, registry)?.in_unit(unit)
    }

    fn multiplicative(
        &self,
        composition: Composition,
        rhs: &DynamicMeasurable,
        registry: &UnitRegistry,
    ) -> Result<Self> {
        let (amount, unit) = convert::multiplicative(
            composition,
            (self.amount, &*self.unit),
            (rhs.amount, &*rhs.unit),
            registry,
        )?;
        Ok(Self::new(amount, unit))
    }

    /// Whether both amounts match within [`crate::TOLERANCE`] once `other` is
    /// expressed in this unit
    pub fn approx_eq(&self, other: &DynamicMeasurable) -> Result<bool> {
        let other = convert::convert(other.amount, &other.unit, &self.unit)?;
        Ok(convert::approx_eq(self.amount, other))
    }
}

impl<U: Unit> From<Measurable<U>> for DynamicMeasurable {
    fn from(measurable: Measurable<U>) -> Self {
        Self::from_typed(measurable)
    }
}

impl fmt::Display for DynamicMeasurable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.dimension().is_dimensionless() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::si::*;

    fn registry() -> UnitRegistry {
        UnitRegistry::si().unwrap()
    }

    fn of(registry: &UnitRegistry, amount: f64, symbol: &str) -> DynamicMeasurable {
        DynamicMeasurable::new(amount, Arc::clone(registry.lookup(symbol).unwrap()))
    }

    #[test]
    fn test_from_typed() {
        let dose: DynamicMeasurable = Measurable::<Centigray>::new(200.0).into();
        assert_eq!(dose.amount(), 200.0);
        assert_eq!(dose.unit().symbol(), "cGy");
        assert_eq!(dose.dimension(), Dimension::ABSORBED_DOSE);
    }

    #[test]
    fn test_in_unit() {
        let registry = registry();
        let temp = of(&registry, 288.65, "K");
        let celsius = temp.in_unit(registry.lookup("°C").unwrap()).unwrap();
        assert!((celsius.amount() - 15.5).abs() < 1e-9);
        assert!(temp.in_unit(registry.lookup("m").unwrap()).is_err());
    }

    #[test]
    fn test_add_mismatched_dimensions() {
        let registry = registry();
        let err = of(&registry, 1.0, "m")
            .add(&of(&registry, 1.0, "kg"))
            .unwrap_err();
        assert_eq!(err, UnitError::mismatch(Dimension::LENGTH, Dimension::MASS));
    }

    #[test]
    fn test_add_and_sub_keep_lhs_unit() {
        let registry = registry();
        let sum = of(&registry, 1.0, "h").add(&of(&registry, 30.0, "min")).unwrap();
        assert_eq!(sum.unit().symbol(), "h");
        assert!((sum.amount() - 1.5).abs() < 1e-12);

        let diff = of(&registry, 1.0, "L").sub(&of(&registry, 1.0, "dL")).unwrap();
        assert!((diff.amount() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_multiply_and_divide() {
        let registry = registry();
        let force = of(&registry, 2.0, "kg")
            .multiply(&of(&registry, 9.81, "m/s²"), &registry)
            .unwrap();
        assert_eq!(force.unit().symbol(), "N");
        assert!((force.amount() - 19.62).abs() < 1e-9);

        let speed = of(&registry, 36.0, "km")
            .divide(&of(&registry, 1.0, "h"), &registry)
            .unwrap();
        assert_eq!(speed.unit().symbol(), "m/s");
        assert!((speed.amount() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_divide_into() {
        let registry = registry();
        let area = of(&registry, 4.0, "L")
            .divide_into(&of(&registry, 2.0, "mm"), registry.lookup("cm²").unwrap(), &registry)
            .unwrap();
        assert!((area.amount() - 20_000.0).abs() < 1e-6);

        let err = of(&registry, 4.0, "L")
            .divide_into(&of(&registry, 2.0, "m²"), registry.lookup("m²").unwrap(), &registry)
            .unwrap_err();
        assert!(matches!(err, UnitError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_into_typed() {
        let registry = registry();
        let volume = of(&registry, 0.003, "m³");
        assert!(volume.clone().into_typed::<SquareMeter>().is_err());
        assert!((volume.into_typed::<Liter>().unwrap().amount() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_approx_eq_and_display() {
        let registry = registry();
        let a = of(&registry, 1.0, "km");
        assert!(a.approx_eq(&of(&registry, 1000.0, "m")).unwrap());
        assert!(a.approx_eq(&of(&registry, 1.0, "s")).is_err());
        assert_eq!(a.to_string(), "1 km");
        assert_eq!(of(&registry, 0.25, "1").to_string(), "0.25");
    }
}
