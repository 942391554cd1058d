//! SI Derived Units
//!
//! Coherent derived units (m², N, J, Gy, ...), their common multiples, the
//! non-SI units accepted for use with SI (minute, liter, bar, ...) and the
//! affine temperature scales.

use crate::kind;
use crate::prefix::Prefix;
use crate::unit::Unit;

// =============================================================================
// Geometry
// =============================================================================

/// Square meter (m²) - SI unit of area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareMeter;

impl Unit for SquareMeter {
    type Kind = kind::Area;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "m²";
    const NAME: &'static str = "square meter";
}

/// Square centimeter (cm²)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareCentimeter;

impl Unit for SquareCentimeter {
    type Kind = kind::Area;
    const SCALE: f64 = 1e-4;
    const SYMBOL: &'static str = "cm²";
    const NAME: &'static str = "square centimeter";
}

/// Square kilometer (km²)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareKilometer;

impl Unit for SquareKilometer {
    type Kind = kind::Area;
    const SCALE: f64 = 1e6;
    const SYMBOL: &'static str = "km²";
    const NAME: &'static str = "square kilometer";
}

/// Hectare (ha) = 10⁴ m²
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hectare;

impl Unit for Hectare {
    type Kind = kind::Area;
    const SCALE: f64 = 1e4;
    const SYMBOL: &'static str = "ha";
    const NAME: &'static str = "hectare";
}

/// Cubic meter (m³) - SI unit of volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CubicMeter;

impl Unit for CubicMeter {
    type Kind = kind::Volume;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "m³";
    const NAME: &'static str = "cubic meter";
}

/// Cubic centimeter (cm³)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CubicCentimeter;

impl Unit for CubicCentimeter {
    type Kind = kind::Volume;
    const SCALE: f64 = 1e-6;
    const SYMBOL: &'static str = "cm³";
    const NAME: &'static str = "cubic centimeter";
}

/// Liter (L) = 10⁻³ m³
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Liter;

impl Unit for Liter {
    type Kind = kind::Volume;
    const SCALE: f64 = 1e-3;
    const SYMBOL: &'static str = "L";
    const NAME: &'static str = "liter";
}

// =============================================================================
// Time and motion
// =============================================================================

/// Minute (min)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Minute;

impl Unit for Minute {
    type Kind = kind::Time;
    const SCALE: f64 = 60.0;
    const SYMBOL: &'static str = "min";
    const NAME: &'static str = "minute";
}

/// Hour (h)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hour;

impl Unit for Hour {
    type Kind = kind::Time;
    const SCALE: f64 = 3600.0;
    const SYMBOL: &'static str = "h";
    const NAME: &'static str = "hour";
}

/// Day (d)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Day;

impl Unit for Day {
    type Kind = kind::Time;
    const SCALE: f64 = 86400.0;
    const SYMBOL: &'static str = "d";
    const NAME: &'static str = "day";
}

/// Meter per second (m/s) - SI unit of velocity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MeterPerSecond;

impl Unit for MeterPerSecond {
    type Kind = kind::Velocity;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "m/s";
    const NAME: &'static str = "meter per second";
}

/// Kilometer per hour (km/h)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KilometerPerHour;

impl Unit for KilometerPerHour {
    type Kind = kind::Velocity;
    const SCALE: f64 = 1000.0 / 3600.0;
    const SYMBOL: &'static str = "km/h";
    const NAME: &'static str = "kilometer per hour";
}

/// Meter per second squared (m/s²) - SI unit of acceleration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MeterPerSecondSquared;

impl Unit for MeterPerSecondSquared {
    type Kind = kind::Acceleration;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "m/s²";
    const NAME: &'static str = "meter per second squared";
}

/// Hertz (Hz) - SI derived unit of frequency [1/s]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hertz;

impl Unit for Hertz {
    type Kind = kind::Frequency;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "Hz";
    const NAME: &'static str = "hertz";
}

// =============================================================================
// Mechanical Units
// =============================================================================

/// Newton (N) - SI derived unit of force [kg·m/s²]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Newton;

impl Unit for Newton {
    type Kind = kind::Force;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "N";
    const NAME: &'static str = "newton";
}

/// Joule (J) - SI derived unit of energy [kg·m²/s²]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Joule;

impl Unit for Joule {
    type Kind = kind::Energy;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "J";
    const NAME: &'static str = "joule";
}

/// Thermochemical calorie (cal) = 4.184 J
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Calorie;

impl Unit for Calorie {
    type Kind = kind::Energy;
    const SCALE: f64 = 4.184;
    const SYMBOL: &'static str = "cal";
    const NAME: &'static str = "calorie";
}

/// Watt (W) - SI derived unit of power [kg·m²/s³]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Watt;

impl Unit for Watt {
    type Kind = kind::Power;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "W";
    const NAME: &'static str = "watt";
}

/// Pascal (Pa) - SI derived unit of pressure [kg/(m·s²)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pascal;

impl Unit for Pascal {
    type Kind = kind::Pressure;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "Pa";
    const NAME: &'static str = "pascal";
}

/// Bar (bar) = 10⁵ Pa
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bar;

impl Unit for Bar {
    type Kind = kind::Pressure;
    const SCALE: f64 = 1e5;
    const SYMBOL: &'static str = "bar";
    const NAME: &'static str = "bar";
}

/// Standard atmosphere (atm) = 101325 Pa
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Atmosphere;

impl Unit for Atmosphere {
    type Kind = kind::Pressure;
    const SCALE: f64 = 101_325.0;
    const SYMBOL: &'static str = "atm";
    const NAME: &'static str = "standard atmosphere";
}

/// Kilogram per cubic meter (kg/m³) - SI unit of density
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct KilogramPerCubicMeter;

impl Unit for KilogramPerCubicMeter {
    type Kind = kind::Density;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "kg/m³";
    const NAME: &'static str = "kilogram per cubic meter";
}

// =============================================================================
// Electromagnetic Units
// =============================================================================

/// Coulomb (C) - SI derived unit of electric charge [A·s]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coulomb;

impl Unit for Coulomb {
    type Kind = kind::Charge;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "C";
    const NAME: &'static str = "coulomb";
}

/// Volt (V) - SI derived unit of voltage [kg·m²/(A·s³)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Volt;

impl Unit for Volt {
    type Kind = kind::Voltage;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "V";
    const NAME: &'static str = "volt";
}

// =============================================================================
// Radiation
// =============================================================================

/// Gray (Gy) - SI derived unit of absorbed dose [J/kg = m²/s²]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gray;

impl Unit for Gray {
    type Kind = kind::AbsorbedDose;
    const SCALE: f64 = 1.0;
    const SYMBOL: &'static str = "Gy";
    const NAME: &'static str = "gray";
}

/// Rad (rad) = 0.01 Gy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rad;

impl Unit for Rad {
    type Kind = kind::AbsorbedDose;
    const SCALE: f64 = 1e-2;
    const SYMBOL: &'static str = "rad";
    const NAME: &'static str = "rad";
}

// =============================================================================
// Temperature scales
// =============================================================================

/// Degree Celsius (°C): K = °C + 273.15
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Celsius;

impl Unit for Celsius {
    type Kind = kind::Temperature;
    const SCALE: f64 = 1.0;
    const OFFSET: f64 = 273.15;
    const SYMBOL: &'static str = "°C";
    const NAME: &'static str = "degree Celsius";
}

/// Degree Fahrenheit (°F): K = (°F + 459.67) × 5/9
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fahrenheit;

impl Unit for Fahrenheit {
    type Kind = kind::Temperature;
    const SCALE: f64 = 5.0 / 9.0;
    const OFFSET: f64 = 459.67 * 5.0 / 9.0;
    const SYMBOL: &'static str = "°F";
    const NAME: &'static str = "degree Fahrenheit";
}

/// Degree Rankine (°R): absolute scale with Fahrenheit-sized degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rankine;

impl Unit for Rankine {
    type Kind = kind::Temperature;
    const SCALE: f64 = 5.0 / 9.0;
    const SYMBOL: &'static str = "°R";
    const NAME: &'static str = "degree Rankine";
}

// =============================================================================
// Prefixed multiples
// =============================================================================

prefixed_units! {
    Deciliter = Deci Liter, "dL", "deciliter";
    Milliliter = Milli Liter, "mL", "milliliter";
    Microliter = Micro Liter, "μL", "microliter";

    Kilohertz = Kilo Hertz, "kHz", "kilohertz";
    Megahertz = Mega Hertz, "MHz", "megahertz";

    Kilonewton = Kilo Newton, "kN", "kilonewton";
    Kilojoule = Kilo Joule, "kJ", "kilojoule";
    Kilowatt = Kilo Watt, "kW", "kilowatt";
    Kilopascal = Kilo Pascal, "kPa", "kilopascal";

    Millivolt = Milli Volt, "mV", "millivolt";

    /// Centigray (cGy), the customary unit of clinical dose prescriptions
    Centigray = Centi Gray, "cGy", "centigray";
    Milligray = Milli Gray, "mGy", "milligray";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::si::{Kelvin, Second};

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(Newton::DIMENSION, Dimension::FORCE);
        assert_eq!(Joule::DIMENSION, Dimension::ENERGY);
        assert_eq!(Gray::DIMENSION, Dimension::new(2, 0, -2, 0, 0, 0, 0));
        assert_eq!(Hertz::DIMENSION, Second::DIMENSION.negate());
        assert_eq!(Liter::DIMENSION, Dimension::VOLUME);
    }

    #[test]
    fn test_temperature_scales() {
        assert!((Celsius::to_reference(20.0) - 293.15).abs() < 1e-9);
        assert!((Fahrenheit::to_reference(32.0) - 273.15).abs() < 1e-9);
        assert!((Fahrenheit::to_reference(212.0) - 373.15).abs() < 1e-9);
        assert!((Rankine::to_reference(491.67) - 273.15).abs() < 1e-9);
        assert_eq!(Kelvin::from_reference(Celsius::to_reference(0.0)), 273.15);
    }

    #[test]
    fn test_accepted_units() {
        assert_eq!(Hour::to_reference(1.0), 3600.0);
        assert_eq!(Liter::from_reference(1.0), 1000.0);
        assert!((KilometerPerHour::to_reference(36.0) - 10.0).abs() < 1e-12);
        assert_eq!(Centigray::SCALE, Rad::SCALE);
    }
}
