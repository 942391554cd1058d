//! The Measurable Type: an Amount with a Compile-Time Unit
//!
//! `Measurable<U>` is an `f64` amount bound to the unit tag `U`. Same-kind
//! operations (conversion, `+`, `-`, comparison) are checked by the type
//! system; the `try_*` variants accept any tag and check dimensions at
//! runtime. Multiplication and division change the dimension, so they go
//! through a [`UnitRegistry`] to find the unit of the result.
//!
//! ```
//! use mensura::prelude::*;
//! use mensura::si::{Centimeter, Liter, SquareMeter};
//!
//! let registry = UnitRegistry::si().unwrap();
//! let depth = Measurable::<Centimeter>::new(15.0);
//! let base = Measurable::<SquareMeter>::new(0.02);
//! let volume = depth.multiply_into::<Liter>(base, &registry).unwrap();
//! assert!((volume.amount() - 3.0).abs() < 1e-9);
//! ```
//!
//! Adding quantities of different kinds does not compile:
//!
//! ```compile_fail
//! use mensura::{Measurable, si::{Kilogram, Meter}};
//!
//! let _ = Measurable::<Meter>::new(1.0) + Measurable::<Kilogram>::new(1.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::convert::{self, ArithmeticOp, Composition};
use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::dynamic::DynamicMeasurable;
use crate::error::Result;
use crate::registry::UnitRegistry;
use crate::unit::Unit;

/// An amount with compile-time unit checking
///
/// The unit tag never changes; conversions return a new `Measurable`.
#[derive(Clone, Copy)]
pub struct Measurable<U: Unit> {
    amount: f64,
    _unit: PhantomData<U>,
}

impl<U: Unit> Measurable<U> {
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Self {
            amount,
            _unit: PhantomData,
        }
    }

    /// The raw amount, expressed in `U`
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Runtime descriptor of `U`
    pub fn unit() -> UnitDescriptor {
        U::descriptor()
    }

    #[inline]
    pub fn symbol() -> &'static str {
        U::SYMBOL
    }

    #[inline]
    pub fn dimension() -> Dimension {
        U::DIMENSION
    }

    // -------------------------------------------------------------------------
    // Conversion
    // -------------------------------------------------------------------------

    /// Express this amount in another unit of the same kind
    #[inline]
    pub fn in_unit<V: Unit<Kind = U::Kind>>(self) -> Measurable<V> {
        Measurable::new(convert::transform(
            self.amount,
            (U::SCALE, U::OFFSET),
            (V::SCALE, V::OFFSET),
        ))
    }

    /// Express this amount in any unit `V`, checking the dimension at runtime
    pub fn try_in_unit<V: Unit>(self) -> Result<Measurable<V>> {
        convert::require_same_dimension(V::DIMENSION, U::DIMENSION)?;
        Ok(Measurable::new(convert::transform(
            self.amount,
            (U::SCALE, U::OFFSET),
            (V::SCALE, V::OFFSET),
        )))
    }

    /// Runtime counterpart carrying its unit as a descriptor
    pub fn to_dynamic(self) -> DynamicMeasurable {
        DynamicMeasurable::from_typed(self)
    }

    // -------------------------------------------------------------------------
    // Additive arithmetic
    // -------------------------------------------------------------------------

    /// `self + rhs`, with `rhs` converted into `U` first
    #[inline]
    pub fn add<V: Unit<Kind = U::Kind>>(self, rhs: Measurable<V>) -> Self {
        Self::new(self.amount + rhs.in_unit::<U>().amount)
    }

    /// `self - rhs`, with `rhs` converted into `U` first
    #[inline]
    pub fn sub<V: Unit<Kind = U::Kind>>(self, rhs: Measurable<V>) -> Self {
        Self::new(self.amount - rhs.in_unit::<U>().amount)
    }

    /// Like [`Measurable::add`], for tags whose dimensions are only known to
    /// match at runtime. Fails with `DimensionMismatch` otherwise.
    pub fn try_add<V: Unit>(self, rhs: Measurable<V>) -> Result<Self> {
        self.additive(ArithmeticOp::Add, rhs)
    }

    pub fn try_sub<V: Unit>(self, rhs: Measurable<V>) -> Result<Self> {
        self.additive(ArithmeticOp::Sub, rhs)
    }

    fn additive<V: Unit>(self, op: ArithmeticOp, rhs: Measurable<V>) -> Result<Self> {
        convert::additive(
            op,
            (self.amount, &U::descriptor()),
            (rhs.amount, &V::descriptor()),
        )
        .map(Self::new)
    }

    // -------------------------------------------------------------------------
    // Multiplicative arithmetic
    // -------------------------------------------------------------------------

    /// `self × rhs`, expressed in the registry's unit for the product
    /// dimension.
    ///
    /// Fails with `NonMultiplicativeUnit` if either unit is affine and with
    /// `UnresolvedDimension` if no unit is registered for the product.
    pub fn multiply<V: Unit>(
        self,
        rhs: Measurable<V>,
        registry: &UnitRegistry,
    ) -> Result<DynamicMeasurable> {
        self.multiplicative(Composition::Product, rhs, registry)
    }

    /// `self ÷ rhs`, expressed in the registry's unit for the quotient
    /// dimension. Division by a zero amount follows IEEE 754.
    pub fn divide<V: Unit>(
        self,
        rhs: Measurable<V>,
        registry: &UnitRegistry,
    ) -> Result<DynamicMeasurable> {
        self.multiplicative(Composition::Quotient, rhs, registry)
    }

    /// `self × rhs` expressed in the caller's unit `W`.
    ///
    /// Fails with `DimensionMismatch` when the product does not have `W`'s
    /// dimension, rather than returning the registry's natural unit.
    pub fn multiply_into<W: Unit>(
        self,
        rhs: Measurable<impl Unit>,
        registry: &UnitRegistry,
    ) -> Result<Measurable<W>> {
        let dimension = U::DIMENSION.combine(&rhs_dimension(&rhs));
        convert::require_same_dimension(W::DIMENSION, dimension)?;
        self.multiply(rhs, registry)?.into_typed::<W>()
    }

    /// `self ÷ rhs` expressed in the caller's unit `W`; see
    /// [`Measurable::multiply_into`].
    pub fn divide_into<W: Unit>(
        self,
        rhs: Measurable<impl Unit>,
        registry: &UnitRegistry,
    ) -> Result<Measurable<W>> {
        let dimension = U::DIMENSION.quotient(&rhs_dimension(&rhs));
        convert::require_same_dimension(W::DIMENSION, dimension)?;
        self.divide(rhs, registry)?.into_typed::<W>()
    }

    fn multiplicative<V: Unit>(
        self,
        composition: Composition,
        rhs: Measurable<V>,
        registry: &UnitRegistry,
    ) -> Result<DynamicMeasurable> {
        let (amount, unit) = convert::multiplicative(
            composition,
            (self.amount, &U::descriptor()),
            (rhs.amount, &V::descriptor()),
            registry,
        )?;
        Ok(DynamicMeasurable::new(amount, unit))
    }

    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    /// Whether both amounts match within [`crate::TOLERANCE`] once `other`
    /// is expressed in `U`. Fails with `DimensionMismatch` across dimensions.
    pub fn approx_eq<V: Unit>(&self, other: &Measurable<V>) -> Result<bool> {
        let other = other.try_in_unit::<U>()?;
        Ok(convert::approx_eq(self.amount, other.amount))
    }
}

fn rhs_dimension<V: Unit>(_: &Measurable<V>) -> Dimension {
    V::DIMENSION
}

// =============================================================================
// Float Operations
// =============================================================================

impl<U: Unit> Measurable<U> {
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.amount.abs())
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.amount.min(other.amount))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.amount.max(other.amount))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.amount.is_finite()
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<U: Unit, V: Unit<Kind = U::Kind>> Add<Measurable<V>> for Measurable<U> {
    type Output = Measurable<U>;

    #[inline]
    fn add(self, rhs: Measurable<V>) -> Self::Output {
        Measurable::add(self, rhs)
    }
}

impl<U: Unit, V: Unit<Kind = U::Kind>> Sub<Measurable<V>> for Measurable<U> {
    type Output = Measurable<U>;

    #[inline]
    fn sub(self, rhs: Measurable<V>) -> Self::Output {
        Measurable::sub(self, rhs)
    }
}

impl<U: Unit> Neg for Measurable<U> {
    type Output = Measurable<U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Measurable::new(-self.amount)
    }
}

/// Multiplication by scalar (right)
impl<U: Unit> Mul<f64> for Measurable<U> {
    type Output = Measurable<U>;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Measurable::new(self.amount * rhs)
    }
}

/// Multiplication by scalar (left)
impl<U: Unit> Mul<Measurable<U>> for f64 {
    type Output = Measurable<U>;

    #[inline]
    fn mul(self, rhs: Measurable<U>) -> Self::Output {
        Measurable::new(self * rhs.amount)
    }
}

/// Division by scalar
impl<U: Unit> Div<f64> for Measurable<U> {
    type Output = Measurable<U>;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Measurable::new(self.amount / rhs)
    }
}

// =============================================================================
// Comparison
// =============================================================================

/// Equal within tolerance after converting `other` into `U`
impl<U: Unit, V: Unit<Kind = U::Kind>> PartialEq<Measurable<V>> for Measurable<U> {
    fn eq(&self, other: &Measurable<V>) -> bool {
        convert::approx_eq(self.amount, other.in_unit::<U>().amount)
    }
}

impl<U: Unit, V: Unit<Kind = U::Kind>> PartialOrd<Measurable<V>> for Measurable<U> {
    fn partial_cmp(&self, other: &Measurable<V>) -> Option<Ordering> {
        let other = other.in_unit::<U>().amount;
        if convert::approx_eq(self.amount, other) {
            return Some(Ordering::Equal);
        }
        self.amount.partial_cmp(&other)
    }
}

// =============================================================================
// Display and Debug
// =============================================================================

impl<U: Unit> fmt::Display for Measurable<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if U::DIMENSION.is_dimensionless() {
            write!(f, "{}", self.amount)
        } else {
            write!(f, "{} {}", self.amount, U::SYMBOL)
        }
    }
}

impl<U: Unit> fmt::Debug for Measurable<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measurable")
            .field("amount", &self.amount)
            .field("unit", &U::SYMBOL)
            .field("dimension", &U::DIMENSION)
            .finish()
    }
}

impl<U: Unit> Default for Measurable<U> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

// =============================================================================
// Extension Trait for Creating Measurables
// =============================================================================

/// Extension trait for binding plain numbers to a unit
///
/// ```
/// use mensura::prelude::*;
/// use mensura::si::Milligram;
///
/// let dose = 500.0_f64.with_unit::<Milligram>();
/// assert_eq!(dose.to_string(), "500 mg");
/// ```
pub trait WithUnit: Sized {
    fn with_unit<U: Unit>(self) -> Measurable<U>;
}

impl WithUnit for f64 {
    #[inline]
    fn with_unit<U: Unit>(self) -> Measurable<U> {
        Measurable::new(self)
    }
}

impl WithUnit for f32 {
    #[inline]
    fn with_unit<U: Unit>(self) -> Measurable<U> {
        Measurable::new(f64::from(self))
    }
}

impl WithUnit for i32 {
    #[inline]
    fn with_unit<U: Unit>(self) -> Measurable<U> {
        Measurable::new(f64::from(self))
    }
}
