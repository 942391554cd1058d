//! SI Base Units
//!
//! The reference units of the 7 base dimensions, plus the unit of pure
//! numbers.

use crate::kind;
use crate::unit::Unit;

/// Meter (m) - SI base unit of length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Meter;

impl Unit for Meter {
    type Kind = kind::Length;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "m";
    const NAME: &'static str = "meter";
}

/// Kilogram (kg) - SI base unit of mass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Kilogram;

impl Unit for Kilogram {
    type Kind = kind::Mass;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "kg";
    const NAME: &'static str = "kilogram";
}

/// Second (s) - SI base unit of time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Second;

impl Unit for Second {
    type Kind = kind::Time;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "s";
    const NAME: &'static str = "second";
}

/// Ampere (A) - SI base unit of electric current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ampere;

impl Unit for Ampere {
    type Kind = kind::Current;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "A";
    const NAME: &'static str = "ampere";
}

/// Kelvin (K) - SI base unit of thermodynamic temperature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Kelvin;

impl Unit for Kelvin {
    type Kind = kind::Temperature;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "K";
    const NAME: &'static str = "kelvin";
}

/// Candela (cd) - SI base unit of luminous intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Candela;

impl Unit for Candela {
    type Kind = kind::Luminosity;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "cd";
    const NAME: &'static str = "candela";
}

/// Mole (mol) - SI base unit of amount of substance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mole;

impl Unit for Mole {
    type Kind = kind::Amount;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "mol";
    const NAME: &'static str = "mole";
}

/// Unity (1) - the unit of dimensionless ratios
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unity;

impl Unit for Unity {
    type Kind = kind::Dimensionless;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "1";
    const NAME: &'static str = "unity";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;

    #[test]
    fn test_si_base_dimensions() {
        assert!(Meter::DIMENSION.equals(&Dimension::LENGTH));
        assert!(Kilogram::DIMENSION.equals(&Dimension::MASS));
        assert!(Second::DIMENSION.equals(&Dimension::TIME));
        assert!(Ampere::DIMENSION.equals(&Dimension::CURRENT));
        assert!(Kelvin::DIMENSION.equals(&Dimension::TEMPERATURE));
        assert!(Candela::DIMENSION.equals(&Dimension::LUMINOSITY));
        assert!(Mole::DIMENSION.equals(&Dimension::AMOUNT));
        assert!(Unity::DIMENSION.is_dimensionless());
    }

    #[test]
    fn test_base_units_are_references() {
        assert!(Meter::descriptor().is_reference());
        assert!(Kilogram::descriptor().is_reference());
        assert!(Kelvin::descriptor().is_reference());
        assert!(Unity::descriptor().is_reference());
    }
}
