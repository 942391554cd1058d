//! Prefixed SI units
//!
//! The kilogram is the one base unit that already carries a prefix, so mass
//! multiples are derived from [`Gram`] instead of [`Kilogram`].

use super::base::{Ampere, Meter, Mole, Second};
use crate::kind;
use crate::prefix::Prefix;
use crate::unit::Unit;

/// Gram (g) - 1/1000 of the SI base unit of mass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gram;

impl Unit for Gram {
    type Kind = kind::Mass;
    const SCALE: f64 = 1e-3;
    const SYMBOL: &'static str = "g";
    const NAME: &'static str = "gram";
}

/// Metric ton (t) - 1000 kg
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MetricTon;

impl Unit for MetricTon {
    type Kind = kind::Mass;
    const SCALE: f64 = 1e3;
    const SYMBOL: &'static str = "t";
    const NAME: &'static str = "metric ton";
}

prefixed_units! {
    Milligram = Milli Gram, "mg", "milligram";
    Microgram = Micro Gram, "μg", "microgram";

    Kilometer = Kilo Meter, "km", "kilometer";
    Centimeter = Centi Meter, "cm", "centimeter";
    Millimeter = Milli Meter, "mm", "millimeter";
    Micrometer = Micro Meter, "μm", "micrometer";
    Nanometer = Nano Meter, "nm", "nanometer";

    Millisecond = Milli Second, "ms", "millisecond";
    Microsecond = Micro Second, "μs", "microsecond";
    Nanosecond = Nano Second, "ns", "nanosecond";

    Milliampere = Milli Ampere, "mA", "milliampere";

    Millimole = Milli Mole, "mmol", "millimole";
    Micromole = Micro Mole, "μmol", "micromole";
}
