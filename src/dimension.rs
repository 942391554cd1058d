//! Dimension vectors over the SI base quantities
//!
//! A physical dimension is the tuple of exponents of the 7 SI base
//! quantities. Two quantities belong to the same family iff all 7 exponents
//! are equal; multiplying quantities adds exponents, dividing subtracts them.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use serde::{Deserialize, Serialize};

/// Exponent vector over the 7 SI base quantities.
///
/// Component order is fixed and used everywhere in the crate, including
/// [`Dimension::new`] and configuration files:
///
/// | # | symbol | base quantity       | reference unit |
/// |---|--------|---------------------|----------------|
/// | 0 | L      | length              | meter          |
/// | 1 | M      | mass                | kilogram       |
/// | 2 | T      | time                | second         |
/// | 3 | I      | electric current    | ampere         |
/// | 4 | Θ      | temperature         | kelvin         |
/// | 5 | J      | luminous intensity  | candela        |
/// | 6 | N      | amount of substance | mole           |
///
/// Derived dimensions are products of powers, e.g. velocity = L T⁻¹ and
/// absorbed dose = L² T⁻².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dimension {
    /// Length exponent [L]
    pub length: i8,
    /// Mass exponent [M]
    pub mass: i8,
    /// Time exponent [T]
    pub time: i8,
    /// Electric current exponent [I]
    pub current: i8,
    /// Temperature exponent [Θ]
    pub temperature: i8,
    /// Luminous intensity exponent [J]
    pub luminosity: i8,
    /// Amount of substance exponent [N]
    pub amount: i8,
}

impl Dimension {
    // ==========================================================================
    // Base Dimensions
    // ==========================================================================

    /// Pure number, all exponents zero
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    pub const LUMINOSITY: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    // ==========================================================================
    // Derived Dimensions
    // ==========================================================================

    /// Area [L²]
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0);

    /// Volume [L³]
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0);

    /// Velocity [L T⁻¹]
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0, 0, 0, 0);

    /// Acceleration [L T⁻²]
    pub const ACCELERATION: Self = Self::new(1, 0, -2, 0, 0, 0, 0);

    /// Frequency [T⁻¹]
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);

    /// Force [L M T⁻²]
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);

    /// Energy [L² M T⁻²]
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0);

    /// Power [L² M T⁻³]
    pub const POWER: Self = Self::new(2, 1, -3, 0, 0, 0, 0);

    /// Pressure [L⁻¹ M T⁻²]
    pub const PRESSURE: Self = Self::new(-1, 1, -2, 0, 0, 0, 0);

    /// Electric charge [T I]
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0);

    /// Voltage [L² M T⁻³ I⁻¹]
    pub const VOLTAGE: Self = Self::new(2, 1, -3, -1, 0, 0, 0);

    /// Mass density [L⁻³ M]
    pub const DENSITY: Self = Self::new(-3, 1, 0, 0, 0, 0, 0);

    /// Absorbed dose [L² T⁻²] - energy per unit mass, gray
    pub const ABSORBED_DOSE: Self = Self::new(2, 0, -2, 0, 0, 0, 0);

    /// Create a dimension from its exponents, in the documented order
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        luminosity: i8,
        amount: i8,
    ) -> Self {
        Self {
            length,
            mass,
            time,
            current,
            temperature,
            luminosity,
            amount,
        }
    }

    /// Exponents as an array, in the documented order
    pub const fn exponents(&self) -> [i8; 7] {
        [
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.luminosity,
            self.amount,
        ]
    }

    const fn from_exponents(e: [i8; 7]) -> Self {
        Self::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6])
    }

    // ==========================================================================
    // Algebra
    // ==========================================================================

    /// Component-wise sum; the dimension of a product of two quantities.
    pub const fn combine(&self, other: &Dimension) -> Dimension {
        let a = self.exponents();
        let b = other.exponents();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = a[i] + b[i];
            i += 1;
        }
        Self::from_exponents(out)
    }

    /// Component-wise negation; the dimension of a reciprocal.
    pub const fn negate(&self) -> Dimension {
        self.pow(-1)
    }

    /// Dimension of a quotient: `combine(self, negate(other))`
    pub const fn quotient(&self, other: &Dimension) -> Dimension {
        self.combine(&other.negate())
    }

    /// Raise to an integer power (multiply every exponent by `n`)
    pub const fn pow(&self, n: i8) -> Dimension {
        let e = self.exponents();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = e[i] * n;
            i += 1;
        }
        Self::from_exponents(out)
    }

    /// n-th root; `None` if some exponent is not divisible by `n`
    pub const fn root(&self, n: i8) -> Option<Dimension> {
        if n == 0 {
            return None;
        }
        let e = self.exponents();
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            if e[i] % n != 0 {
                return None;
            }
            out[i] = e[i] / n;
            i += 1;
        }
        Some(Self::from_exponents(out))
    }

    /// Square root, e.g. sqrt(L²) = L
    pub const fn sqrt(&self) -> Option<Dimension> {
        self.root(2)
    }

    /// Cube root, e.g. cbrt(L³) = L
    pub const fn cbrt(&self) -> Option<Dimension> {
        self.root(3)
    }

    // ==========================================================================
    // Predicates
    // ==========================================================================

    /// Exact equality of all 7 exponents.
    ///
    /// This is the only compatibility test used by the engine: conversion,
    /// addition, subtraction and comparison all require it.
    pub const fn equals(&self, other: &Dimension) -> bool {
        let a = self.exponents();
        let b = other.exponents();
        let mut i = 0;
        while i < 7 {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equals(&Self::DIMENSIONLESS)
    }

    // ==========================================================================
    // Named Dimensions
    // ==========================================================================

    /// Human name of this dimension if it is one of the named constants
    pub fn name(&self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(_, dim)| dim.equals(self))
            .map(|(name, _)| *name)
    }

    /// Inverse of [`Dimension::name`].
    ///
    /// Case-insensitive; `_` and `-` are accepted in place of spaces, so
    /// `"absorbed_dose"` and `"Absorbed Dose"` both resolve.
    pub fn from_name(name: &str) -> Option<Dimension> {
        let wanted = name.trim().to_lowercase().replace(['_', '-'], " ");
        NAMED
            .iter()
            .find(|(known, _)| *known == wanted)
            .map(|(_, dim)| *dim)
    }
}

/// Named dimensions. Exponent vectors are pairwise distinct.
const NAMED: &[(&str, Dimension)] = &[
    ("dimensionless", Dimension::DIMENSIONLESS),
    ("length", Dimension::LENGTH),
    ("mass", Dimension::MASS),
    ("time", Dimension::TIME),
    ("electric current", Dimension::CURRENT),
    ("temperature", Dimension::TEMPERATURE),
    ("luminous intensity", Dimension::LUMINOSITY),
    ("amount of substance", Dimension::AMOUNT),
    ("area", Dimension::AREA),
    ("volume", Dimension::VOLUME),
    ("velocity", Dimension::VELOCITY),
    ("acceleration", Dimension::ACCELERATION),
    ("frequency", Dimension::FREQUENCY),
    ("force", Dimension::FORCE),
    ("energy", Dimension::ENERGY),
    ("power", Dimension::POWER),
    ("pressure", Dimension::PRESSURE),
    ("electric charge", Dimension::CHARGE),
    ("voltage", Dimension::VOLTAGE),
    ("density", Dimension::DENSITY),
    ("absorbed dose", Dimension::ABSORBED_DOSE),
];

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.combine(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.quotient(&rhs)
    }
}

impl Neg for Dimension {
    type Output = Dimension;

    fn neg(self) -> Dimension {
        self.negate()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }

        const SYMBOLS: [&str; 7] = ["L", "M", "T", "I", "Θ", "J", "N"];

        let mut num: Vec<String> = Vec::new();
        let mut den: Vec<String> = Vec::new();

        for (symbol, exp) in SYMBOLS.iter().zip(self.exponents()) {
            let side = match exp.signum() {
                1 => &mut num,
                -1 => &mut den,
                _ => continue,
            };
            let magnitude = exp.unsigned_abs();
            if magnitude == 1 {
                side.push((*symbol).to_string());
            } else {
                side.push(format!("{}{}", symbol, superscript(magnitude)));
            }
        }

        let num_str = if num.is_empty() {
            "1".to_string()
        } else {
            num.join(" ")
        };

        if den.is_empty() {
            write!(f, "{}", num_str)
        } else {
            write!(f, "{} / {}", num_str, den.join(" "))
        }
    }
}

fn superscript(n: u8) -> String {
    n.to_string()
        .chars()
        .map(|d| match d {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            '9' => '⁹',
            other => other,
        })
        .collect()
}
