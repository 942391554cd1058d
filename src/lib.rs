//! Dimensional analysis and unit conversion
//!
//! Physical quantities as amounts bound to units, with dimension checking on
//! every operation.
//!
//! # Key Features
//!
//! - **Dimension vectors**: exponents over the 7 SI base quantities
//!   (L, M, T, I, Θ, J, N)
//! - **Affine units**: every unit is `amount * scale + offset` relative to the
//!   reference unit of its dimension, so temperature scales convert through
//!   the same path as lengths
//! - **Compile-time tags**: `Measurable<Meter> + Measurable<Kilogram>` is a
//!   type error; same-kind arithmetic converts automatically
//! - **Closed-world registry**: products and quotients resolve to a registered
//!   unit or fail, never to a synthetic one
//!
//! # Example
//!
//! ```
//! use mensura::prelude::*;
//! use mensura::si::{Centimeter, Liter, Millimeter, SquareMeter};
//!
//! let registry = UnitRegistry::si()?;
//!
//! let width = Measurable::<Meter>::new(1.0) + Measurable::<Centimeter>::new(50.0);
//! assert!((width.amount() - 1.5).abs() < 1e-12);
//!
//! let area = Measurable::<Liter>::new(4.0)
//!     .divide_into::<SquareMeter>(Measurable::<Millimeter>::new(2.0), &registry)?;
//! assert!((area.amount() - 2.0).abs() < 1e-9);
//! # Ok::<(), mensura::UnitError>(())
//! ```

pub mod config;
pub mod convert;
pub mod descriptor;
pub mod dimension;
pub mod dynamic;
pub mod error;
pub mod kind;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod si;
pub mod unit;

// Re-exports
pub use config::{DimensionSpec, RegistryConfig, UnitDefinition};
pub use convert::{
    ArithmeticOp, TOLERANCE, approx_eq, check_operation_compatibility, conversion_factor, convert,
};
pub use descriptor::UnitDescriptor;
pub use dimension::Dimension;
pub use dynamic::DynamicMeasurable;
pub use error::{ConfigError, UnitError};
pub use prefix::Prefix;
pub use quantity::{Measurable, WithUnit};
pub use registry::{RegistryBuilder, UnitRegistry};
pub use unit::{QuantityKind, Unit};

/// Prelude for common imports
pub mod prelude {
    pub use crate::descriptor::UnitDescriptor;
    pub use crate::dimension::Dimension;
    pub use crate::dynamic::DynamicMeasurable;
    pub use crate::error::UnitError;
    pub use crate::quantity::{Measurable, WithUnit};
    pub use crate::registry::UnitRegistry;
    pub use crate::unit::{QuantityKind, Unit};

    // SI base units
    pub use crate::si::base::{
        Ampere, Candela, Kelvin, Kilogram, Meter, Mole, Second, Unity,
    };
}
