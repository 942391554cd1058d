//! Quantity kinds
//!
//! Uninhabited marker types, one per quantity family, used as
//! [`crate::Unit::Kind`].

use crate::dimension::Dimension;
use crate::unit::QuantityKind;

macro_rules! quantity_kinds {
    ($($(#[$meta:meta])* $kind:ident => $dim:ident, $name:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $kind {}

            impl QuantityKind for $kind {
                const DIMENSION: Dimension = Dimension::$dim;
                const NAME: &'static str = $name;
            }
        )*
    };
}

quantity_kinds! {
    /// Pure numbers
    Dimensionless => DIMENSIONLESS, "dimensionless";
    Length => LENGTH, "length";
    Mass => MASS, "mass";
    Time => TIME, "time";
    Current => CURRENT, "electric current";
    Temperature => TEMPERATURE, "temperature";
    Luminosity => LUMINOSITY, "luminous intensity";
    Amount => AMOUNT, "amount of substance";
    Area => AREA, "area";
    Volume => VOLUME, "volume";
    Velocity => VELOCITY, "velocity";
    Acceleration => ACCELERATION, "acceleration";
    Frequency => FREQUENCY, "frequency";
    Force => FORCE, "force";
    Energy => ENERGY, "energy";
    Power => POWER, "power";
    Pressure => PRESSURE, "pressure";
    Charge => CHARGE, "electric charge";
    Voltage => VOLTAGE, "voltage";
    Density => DENSITY, "density";
    /// Energy imparted per unit mass, L² T⁻²
    AbsorbedDose => ABSORBED_DOSE, "absorbed dose";
}
