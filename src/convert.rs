//! Unit Conversion Engine
//!
//! Every conversion goes through the reference unit of the dimension:
//!
//! ```text
//! reference = amount * from.scale + from.offset
//! result    = (reference - to.offset) / to.scale
//! ```
//!
//! The same two steps handle ratio units (length, mass) and affine units
//! (temperature) without special cases.

use std::sync::Arc;

use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::error::{Result, UnitError};
use crate::registry::UnitRegistry;

/// Fixed comparison tolerance for amounts.
///
/// Two amounts `a`, `b` match when `|a - b| <= TOLERANCE * max(1, |a|, |b|)`:
/// absolute near zero, relative for large magnitudes.
pub const TOLERANCE: f64 = 1e-9;

/// Arithmetic operations for dimension checking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert `amount` from one unit to another of the same dimension.
///
/// Fails with [`UnitError::DimensionMismatch`] when the dimensions differ.
/// Converting between units with identical transforms (in particular a unit
/// to itself) returns `amount` unchanged, bit for bit.
///
/// # Example
/// ```
/// use mensura::{convert, si::{Celsius, Kelvin}, Unit};
///
/// let k = convert(20.0, &Celsius::descriptor(), &Kelvin::descriptor()).unwrap();
/// assert!((k - 293.15).abs() < 1e-9);
/// ```
pub fn convert(amount: f64, from: &UnitDescriptor, to: &UnitDescriptor) -> Result<f64> {
    require_same_dimension(to.dimension(), from.dimension())?;
    Ok(transform(
        amount,
        (from.scale(), from.offset()),
        (to.scale(), to.offset()),
    ))
}

/// The two-step transform on raw `(scale, offset)` pairs; the caller has
/// already established that both sides share a dimension.
#[inline]
pub(crate) fn transform(amount: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    if from.0.to_bits() == to.0.to_bits() && from.1.to_bits() == to.1.to_bits() {
        return amount;
    }
    let reference = amount * from.0 + from.1;
    (reference - to.1) / to.0
}

/// Ratio between two non-affine units, such that
/// `amount_to = amount_from * factor`.
pub fn conversion_factor(from: &UnitDescriptor, to: &UnitDescriptor) -> Result<f64> {
    require_same_dimension(to.dimension(), from.dimension())?;
    require_multiplicative(from)?;
    require_multiplicative(to)?;
    Ok(from.scale() / to.scale())
}

// ============================================================================
// COMPATIBILITY CHECKING
// ============================================================================

pub(crate) fn require_same_dimension(expected: Dimension, found: Dimension) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(UnitError::mismatch(expected, found))
    }
}

/// Fail with [`UnitError::NonMultiplicativeUnit`] if `unit` has an offset
pub fn require_multiplicative(unit: &UnitDescriptor) -> Result<()> {
    if unit.is_affine() {
        return Err(UnitError::NonMultiplicativeUnit {
            symbol: unit.symbol().to_string(),
            offset: unit.offset(),
        });
    }
    Ok(())
}

/// Dimension of `left op right`.
///
/// Additive operations need equal dimensions; multiplicative ones combine
/// them.
pub fn check_operation_compatibility(
    left: Dimension,
    right: Dimension,
    op: ArithmeticOp,
) -> Result<Dimension> {
    match op {
        ArithmeticOp::Add | ArithmeticOp::Sub => {
            require_same_dimension(left, right)?;
            Ok(left)
        }
        ArithmeticOp::Mul => Ok(left.combine(&right)),
        ArithmeticOp::Div => Ok(left.quotient(&right)),
    }
}

/// Whether two amounts match within [`TOLERANCE`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let magnitude = 1f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= TOLERANCE * magnitude
}

// ============================================================================
// ARITHMETIC CORE
// ============================================================================
//
// Shared by `Measurable<U>` and `DynamicMeasurable`.

/// `lhs ± rhs` expressed in the unit of `lhs`
pub(crate) fn additive(
    op: ArithmeticOp,
    (lhs, lhs_unit): (f64, &UnitDescriptor),
    (rhs, rhs_unit): (f64, &UnitDescriptor),
) -> Result<f64> {
    check_operation_compatibility(lhs_unit.dimension(), rhs_unit.dimension(), op)?;
    let rhs = convert(rhs, rhs_unit, lhs_unit)?;
    Ok(match op {
        ArithmeticOp::Sub => lhs - rhs,
        _ => lhs + rhs,
    })
}

/// Multiplicative operations resolved through the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Composition {
    Product,
    Quotient,
}

/// `lhs × rhs` or `lhs ÷ rhs`, materialized in the registry's unit for the
/// resulting dimension.
///
/// Both operands are taken to reference space (which requires ratio units),
/// combined there, and brought back through the resolved unit's transform.
pub(crate) fn multiplicative(
    composition: Composition,
    (lhs, lhs_unit): (f64, &UnitDescriptor),
    (rhs, rhs_unit): (f64, &UnitDescriptor),
    registry: &UnitRegistry,
) -> Result<(f64, Arc<UnitDescriptor>)> {
    require_multiplicative(lhs_unit)?;
    require_multiplicative(rhs_unit)?;

    let lhs = lhs_unit.to_reference(lhs);
    let rhs = rhs_unit.to_reference(rhs);
    let (target, raw) = match composition {
        Composition::Product => (
            registry.resolve_product(lhs_unit.dimension(), rhs_unit.dimension())?,
            lhs * rhs,
        ),
        Composition::Quotient => (
            registry.resolve_quotient(lhs_unit.dimension(), rhs_unit.dimension())?,
            lhs / rhs,
        ),
    };

    Ok((target.from_reference(raw), Arc::clone(target)))
}
