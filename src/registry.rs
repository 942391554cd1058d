//! Unit Registry
//!
//! Index of every known unit, built once during initialization and then
//! frozen. A [`RegistryBuilder`] accepts registrations; [`RegistryBuilder::build`]
//! turns it into an immutable [`UnitRegistry`] that is `Send + Sync` and is
//! normally shared as `Arc<UnitRegistry>`.
//!
//! Besides plain lookups the registry answers "which concrete unit represents
//! dimension D", used to materialize the result of a multiplication or
//! division. Resolution is closed-world: a dimension without a registered
//! canonical unit is an error, never a synthetic unit.
//!
//! # Sharing one registry process-wide
//!
//! ```
//! use std::sync::{Arc, OnceLock};
//! use mensura::UnitRegistry;
//!
//! static REGISTRY: OnceLock<Arc<UnitRegistry>> = OnceLock::new();
//!
//! fn registry() -> &'static Arc<UnitRegistry> {
//!     REGISTRY.get_or_init(|| Arc::new(UnitRegistry::si().expect("SI catalog is valid")))
//! }
//!
//! assert!(registry().lookup("m").is_ok());
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::descriptor::UnitDescriptor;
use crate::dimension::Dimension;
use crate::error::{Result, UnitError};
use crate::prefix::Prefix;
use crate::unit::Unit;

// ============================================================================
// INDEX
// ============================================================================

/// Lookup tables shared by the builder and the frozen registry
#[derive(Debug, Clone, Default)]
struct Index {
    /// Units per dimension, in registration order
    by_dimension: FxHashMap<Dimension, Vec<Arc<UnitDescriptor>>>,
    /// Units per symbol, in registration order; a symbol may be reused
    /// across dimensions
    by_symbol: FxHashMap<String, Vec<Arc<UnitDescriptor>>>,
    /// Unit used to materialize results of dimension D
    canonical: FxHashMap<Dimension, Arc<UnitDescriptor>>,
    /// Dimensions in first-registration order
    dimensions: Vec<Dimension>,
    len: usize,
}

impl Index {
    fn find(&self, symbol: &str, dimension: Dimension) -> Option<&Arc<UnitDescriptor>> {
        self.by_symbol
            .get(symbol)?
            .iter()
            .find(|unit| unit.dimension() == dimension)
    }

    fn lookup(&self, symbol: &str) -> Result<&Arc<UnitDescriptor>> {
        self.by_symbol
            .get(symbol)
            .and_then(|units| units.first())
            .ok_or_else(|| UnitError::UnknownUnit {
                symbol: symbol.to_string(),
            })
    }

    fn insert(&mut self, unit: UnitDescriptor) -> Result<Arc<UnitDescriptor>> {
        unit.validate()?;

        if let Some(existing) = self.find(unit.symbol(), unit.dimension()) {
            if existing.same_transform(&unit) {
                tracing::warn!(
                    symbol = unit.symbol(),
                    dimension = %unit.dimension(),
                    "unit already registered, ignoring duplicate"
                );
                return Ok(Arc::clone(existing));
            }
            return Err(UnitError::invalid(
                unit.symbol(),
                format!(
                    "already registered for dimension {} with scale {} and offset {}, \
                     refusing to redefine it with scale {} and offset {}",
                    existing.dimension(),
                    existing.scale(),
                    existing.offset(),
                    unit.scale(),
                    unit.offset()
                ),
            ));
        }

        let unit = Arc::new(unit);
        let dimension = unit.dimension();

        let siblings = self.by_dimension.entry(dimension).or_default();
        if siblings.is_empty() {
            self.dimensions.push(dimension);
        }
        siblings.push(Arc::clone(&unit));
        self.by_symbol
            .entry(unit.symbol().to_string())
            .or_default()
            .push(Arc::clone(&unit));
        self.len += 1;

        if unit.is_reference() && !self.canonical.contains_key(&dimension) {
            tracing::debug!(
                symbol = unit.symbol(),
                dimension = %dimension,
                "canonical unit selected"
            );
            self.canonical.insert(dimension, Arc::clone(&unit));
        }

        tracing::debug!(
            symbol = unit.symbol(),
            dimension = %dimension,
            scale = unit.scale(),
            offset = unit.offset(),
            "registered unit"
        );
        Ok(unit)
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Mutable registration phase of a [`UnitRegistry`]
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    index: Index,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a unit.
    ///
    /// Registering the same symbol and dimension again with an identical
    /// transform is a no-op returning the existing entry. A conflicting
    /// transform fails with [`UnitError::InvalidUnitDefinition`]; nothing is
    /// ever overwritten.
    ///
    /// The first reference unit (scale 1, offset 0) registered for a
    /// dimension becomes its canonical unit.
    pub fn register(&mut self, unit: UnitDescriptor) -> Result<Arc<UnitDescriptor>> {
        self.index.insert(unit)
    }

    /// Register a compile-time unit tag
    pub fn register_unit<U: Unit>(&mut self) -> Result<Arc<UnitDescriptor>> {
        self.register(U::descriptor())
    }

    /// Derive `prefix` + the unit `base_symbol` of `dimension`, and register
    /// the result.
    pub fn register_prefixed(
        &mut self,
        base_symbol: &str,
        dimension: Dimension,
        prefix: Prefix,
    ) -> Result<Arc<UnitDescriptor>> {
        let base = self
            .index
            .find(base_symbol, dimension)
            .ok_or_else(|| UnitError::UnknownUnit {
                symbol: base_symbol.to_string(),
            })?;
        let derived = base.derive_with_prefix(prefix)?;
        self.register(derived)
    }

    /// Make an already registered ratio unit the canonical unit of its
    /// dimension, replacing the default choice.
    pub fn prefer(&mut self, symbol: &str, dimension: Dimension) -> Result<()> {
        let unit = self
            .index
            .find(symbol, dimension)
            .ok_or_else(|| UnitError::UnknownUnit {
                symbol: symbol.to_string(),
            })?;
        if unit.is_affine() {
            return Err(UnitError::NonMultiplicativeUnit {
                symbol: unit.symbol().to_string(),
                offset: unit.offset(),
            });
        }
        let unit = Arc::clone(unit);
        tracing::debug!(symbol, dimension = %dimension, "canonical unit overridden");
        self.index.canonical.insert(dimension, unit);
        Ok(())
    }

    pub fn find(&self, symbol: &str, dimension: Dimension) -> Option<&Arc<UnitDescriptor>> {
        self.index.find(symbol, dimension)
    }

    pub fn lookup(&self, symbol: &str) -> Result<&Arc<UnitDescriptor>> {
        self.index.lookup(symbol)
    }

    /// Freeze the registry
    pub fn build(self) -> UnitRegistry {
        tracing::debug!(
            units = self.index.len,
            dimensions = self.index.dimensions.len(),
            "unit registry built"
        );
        UnitRegistry { index: self.index }
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Immutable index of all known units
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    index: Index,
}

impl UnitRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry holding the SI catalog shipped in [`crate::si`]
    pub fn si() -> Result<Self> {
        let mut builder = RegistryBuilder::new();
        crate::si::register_si(&mut builder)?;
        Ok(builder.build())
    }

    /// All registered units of `dimension`, in registration order
    pub fn supported_units(
        &self,
        dimension: Dimension,
    ) -> impl Iterator<Item = &Arc<UnitDescriptor>> + '_ {
        self.index
            .by_dimension
            .get(&dimension)
            .into_iter()
            .flatten()
    }

    /// The canonical unit of `dimension`
    pub fn resolve(&self, dimension: Dimension) -> Result<&Arc<UnitDescriptor>> {
        self.index
            .canonical
            .get(&dimension)
            .ok_or(UnitError::UnresolvedDimension { dimension })
    }

    /// Canonical unit for `combine(a, b)`, the dimension of a product
    pub fn resolve_product(&self, a: Dimension, b: Dimension) -> Result<&Arc<UnitDescriptor>> {
        let dimension = a.combine(&b);
        tracing::trace!(lhs = %a, rhs = %b, result = %dimension, "resolving product");
        self.resolve(dimension)
    }

    /// Canonical unit for `combine(a, negate(b))`, the dimension of a quotient
    pub fn resolve_quotient(&self, a: Dimension, b: Dimension) -> Result<&Arc<UnitDescriptor>> {
        let dimension = a.combine(&b.negate());
        tracing::trace!(lhs = %a, rhs = %b, result = %dimension, "resolving quotient");
        self.resolve(dimension)
    }

    /// First registered unit with this symbol
    pub fn lookup(&self, symbol: &str) -> Result<&Arc<UnitDescriptor>> {
        self.index.lookup(symbol)
    }

    pub fn find(&self, symbol: &str, dimension: Dimension) -> Option<&Arc<UnitDescriptor>> {
        self.index.find(symbol, dimension)
    }

    /// The shared registry entry for a compile-time tag
    pub fn descriptor_of<U: Unit>(&self) -> Result<&Arc<UnitDescriptor>> {
        let unit = self
            .find(U::SYMBOL, U::DIMENSION)
            .ok_or_else(|| UnitError::UnknownUnit {
                symbol: U::SYMBOL.to_string(),
            })?;
        if !unit.same_transform(&U::descriptor()) {
            return Err(UnitError::invalid(
                U::SYMBOL,
                "registered transform differs from the compile-time unit",
            ));
        }
        Ok(unit)
    }

    /// Whether a unit with the same symbol, dimension and transform is
    /// registered
    pub fn contains(&self, unit: &UnitDescriptor) -> bool {
        self.find(unit.symbol(), unit.dimension())
            .is_some_and(|known| known.same_transform(unit))
    }

    /// Every dimension with at least one unit, in first-registration order
    pub fn dimensions(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.index.dimensions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.index.len
    }

    pub fn is_empty(&self) -> bool {
        self.index.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> UnitDescriptor {
        UnitDescriptor::reference("m", "meter", Dimension::LENGTH).unwrap()
    }

    fn small_registry() -> UnitRegistry {
        let mut builder = UnitRegistry::builder();
        builder.register(meter()).unwrap();
        builder
            .register_prefixed("m", Dimension::LENGTH, Prefix::Milli)
            .unwrap();
        builder
            .register(UnitDescriptor::reference("m²", "square meter", Dimension::AREA).unwrap())
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_supported_units() {
        let registry = small_registry();
        let symbols: Vec<&str> = registry
            .supported_units(Dimension::LENGTH)
            .map(|u| u.symbol())
            .collect();
        assert_eq!(symbols, ["m", "mm"]);
        assert_eq!(registry.supported_units(Dimension::TIME).count(), 0);
    }

    #[test]
    fn test_duplicate_registration_is_noop() {
        let mut builder = UnitRegistry::builder();
        let first = builder.register(meter()).unwrap();
        let second = builder.register(meter()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(builder.build().len(), 1);
    }

    #[test]
    fn test_conflicting_registration_fails() {
        let mut builder = UnitRegistry::builder();
        builder.register(meter()).unwrap();
        let impostor = UnitDescriptor::new("m", "mile", Dimension::LENGTH, 1609.344, 0.0).unwrap();
        let err = builder.register(impostor).unwrap_err();
        assert!(matches!(err, UnitError::InvalidUnitDefinition { .. }));

        let registry = builder.build();
        assert_eq!(registry.lookup("m").unwrap().scale(), 1.0);
    }

    #[test]
    fn test_same_symbol_other_dimension() {
        let mut builder = UnitRegistry::builder();
        builder.register(meter()).unwrap();
        let molar = UnitDescriptor::new("M", "molar", Dimension::new(-3, 0, 0, 0, 0, 0, 1), 1e3, 0.0)
            .unwrap();
        builder.register(molar).unwrap();
        let minute = UnitDescriptor::new("m", "minute (ambiguous)", Dimension::TIME, 60.0, 0.0).unwrap();
        builder.register(minute).unwrap();

        let registry = builder.build();
        assert_eq!(registry.lookup("m").unwrap().dimension(), Dimension::LENGTH);
        assert_eq!(registry.find("m", Dimension::TIME).unwrap().scale(), 60.0);
    }

    #[test]
    fn test_resolution() {
        let registry = small_registry();
        let area = registry
            .resolve_product(Dimension::LENGTH, Dimension::LENGTH)
            .unwrap();
        assert_eq!(area.symbol(), "m²");

        let length = registry
            .resolve_quotient(Dimension::AREA, Dimension::LENGTH)
            .unwrap();
        assert_eq!(length.symbol(), "m");

        let err = registry
            .resolve_product(Dimension::AREA, Dimension::AREA)
            .unwrap_err();
        assert_eq!(
            err,
            UnitError::UnresolvedDimension {
                dimension: Dimension::new(4, 0, 0, 0, 0, 0, 0)
            }
        );
    }

    #[test]
    fn test_prefer_overrides_canonical_unit() {
        let mut builder = UnitRegistry::builder();
        builder.register(meter()).unwrap();
        builder
            .register_prefixed("m", Dimension::LENGTH, Prefix::Kilo)
            .unwrap();
        builder.prefer("km", Dimension::LENGTH).unwrap();
        assert!(builder.prefer("ft", Dimension::LENGTH).is_err());

        let registry = builder.build();
        assert_eq!(registry.resolve(Dimension::LENGTH).unwrap().symbol(), "km");
    }

    #[test]
    fn test_prefer_rejects_affine_unit() {
        let mut builder = UnitRegistry::builder();
        let kelvin = builder
            .register(UnitDescriptor::reference("K", "kelvin", Dimension::TEMPERATURE).unwrap())
            .unwrap();
        builder
            .register(UnitDescriptor::affine("°C", "degree Celsius", &kelvin, 1.0, 273.15).unwrap())
            .unwrap();
        let err = builder.prefer("°C", Dimension::TEMPERATURE).unwrap_err();
        assert!(matches!(err, UnitError::NonMultiplicativeUnit { .. }));
    }

    #[test]
    fn test_affine_unit_is_never_canonical() {
        let mut builder = UnitRegistry::builder();
        let celsius_first = UnitDescriptor::new("°C", "degree Celsius", Dimension::TEMPERATURE, 1.0, 273.15)
            .unwrap();
        builder.register(celsius_first).unwrap();
        let registry = builder.build();
        assert!(matches!(
            registry.resolve(Dimension::TEMPERATURE),
            Err(UnitError::UnresolvedDimension { .. })
        ));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitRegistry>();
        assert_send_sync::<Arc<UnitDescriptor>>();
    }

    #[test]
    fn test_dimensions_in_registration_order() {
        let registry = small_registry();
        let dims: Vec<Dimension> = registry.dimensions().collect();
        assert_eq!(dims, [Dimension::LENGTH, Dimension::AREA]);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(registry.contains(&meter()));
    }
}
