//! SI units
//!
//! A compact catalog of compile-time unit tags: the 7 base units, common
//! prefixed units and a selection of derived, accepted non-SI and affine
//! units. [`register_si`] loads the whole catalog into a registry.

use crate::error::Result;
use crate::registry::RegistryBuilder;

/// Declares unit tags derived from another tag by an SI prefix.
///
/// The scale is computed from the base tag and [`crate::Prefix::factor`], the
/// kind and offset are inherited. Also generates a test-only `derivations()`
/// listing `(tag, prefix, base)` so the tags can be checked against
/// [`crate::UnitDescriptor::derive_with_prefix`].
macro_rules! prefixed_units {
    ($($(#[$meta:meta])* $name:ident = $prefix:ident $base:ident, $symbol:literal, $unit_name:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl Unit for $name {
                type Kind = <$base as Unit>::Kind;
                const SCALE: f64 = <$base as Unit>::SCALE * Prefix::$prefix.factor();
                const OFFSET: f64 = <$base as Unit>::OFFSET;
                const SYMBOL: &'static str = $symbol;
                const NAME: &'static str = $unit_name;
            }
        )*

        #[cfg(test)]
        pub(crate) fn derivations() -> Vec<(
            crate::descriptor::UnitDescriptor,
            Prefix,
            crate::descriptor::UnitDescriptor,
        )> {
            vec![$(($name::descriptor(), Prefix::$prefix, $base::descriptor())),*]
        }
    };
}

pub mod base;
pub mod derived;
pub mod prefixes;

pub use base::*;
pub use derived::*;
pub use prefixes::*;

macro_rules! register_all {
    ($builder:expr; $($unit:ty),* $(,)?) => {
        $( $builder.register_unit::<$unit>()?; )*
    };
}

/// Register every unit of this catalog.
///
/// Each dimension's coherent SI unit is registered before any other unit of
/// that dimension, so it becomes the canonical unit used to materialize
/// products and quotients.
pub fn register_si(builder: &mut RegistryBuilder) -> Result<()> {
    register_all!(builder;
        Unity, Meter, Kilogram, Second, Ampere, Kelvin, Candela, Mole,
        SquareMeter, CubicMeter, MeterPerSecond, MeterPerSecondSquared, Hertz,
        Newton, Joule, Watt, Pascal, Coulomb, Volt, KilogramPerCubicMeter, Gray,
    );

    register_all!(builder;
        Gram, Milligram, Microgram, MetricTon,
        Kilometer, Centimeter, Millimeter, Micrometer, Nanometer,
        Millisecond, Microsecond, Nanosecond, Minute, Hour, Day,
        Milliampere, Millimole, Micromole,
    );

    register_all!(builder;
        SquareCentimeter, SquareKilometer, Hectare,
        Liter, Deciliter, Milliliter, Microliter, CubicCentimeter,
        KilometerPerHour,
        Kilohertz, Megahertz,
        Kilonewton, Kilojoule, Calorie, Kilowatt,
        Kilopascal, Bar, Atmosphere,
        Millivolt,
        Centigray, Milligray, Rad,
        Celsius, Fahrenheit, Rankine,
    );

    tracing::debug!("SI catalog registered");
    Ok(())
}
