//! End-to-end arithmetic and registry scenarios

use std::sync::{Arc, OnceLock};
use std::thread;

use mensura::prelude::*;
use mensura::si::*;
use mensura::{Prefix, RegistryBuilder, convert};

fn shared() -> &'static Arc<UnitRegistry> {
    static REGISTRY: OnceLock<Arc<UnitRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Arc::new(UnitRegistry::si().unwrap()))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn prefix_scaling() {
    let cm = Centimeter::descriptor();
    let m = Meter::descriptor();
    assert_eq!(convert(1.0, &cm, &m).unwrap(), 0.01);
    assert_eq!(convert(100.0, &m, &cm).unwrap(), 10000.0);
}

#[test]
fn affine_conversion() {
    assert!(close(Measurable::<Celsius>::new(20.0).in_unit::<Kelvin>().amount(), 293.15));
    assert!(close(Measurable::<Kelvin>::new(288.65).in_unit::<Celsius>().amount(), 15.5));
}

#[test]
fn dimension_algebra() {
    let length = Dimension::LENGTH;
    assert_eq!(length.combine(&length), Dimension::AREA);
    assert!(length.combine(&length.negate()).is_dimensionless());
    assert_eq!(Dimension::ENERGY.quotient(&Dimension::MASS), Dimension::ABSORBED_DOSE);
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn length_times_area_in_liters() {
    let volume = Measurable::<Centimeter>::new(15.0)
        .multiply_into::<Liter>(Measurable::<SquareMeter>::new(0.02), shared())
        .unwrap();
    assert!(close(volume.amount(), 3.0));
}

#[test]
fn volume_over_length_is_area() {
    let area = Measurable::<Liter>::new(4.0)
        .divide_into::<SquareMeter>(Measurable::<Millimeter>::new(2.0), shared())
        .unwrap();
    assert!(close(area.amount(), 2.0));
}

#[test]
fn volume_over_area_demanded_as_area_fails() {
    let err = Measurable::<Liter>::new(4.0)
        .divide_into::<SquareMeter>(Measurable::<SquareMeter>::new(2.0), shared())
        .unwrap_err();
    assert_eq!(
        err,
        UnitError::DimensionMismatch {
            expected: Dimension::AREA,
            found: Dimension::LENGTH,
        }
    );
}

#[test]
fn length_plus_mass_fails_at_runtime() {
    let err = Measurable::<Meter>::new(1.0)
        .try_add(Measurable::<Kilogram>::new(1.0))
        .unwrap_err();
    assert!(matches!(err, UnitError::DimensionMismatch { .. }));

    let dynamic = Measurable::<Meter>::new(1.0)
        .to_dynamic()
        .add(&Measurable::<Kilogram>::new(1.0).to_dynamic());
    assert!(matches!(dynamic, Err(UnitError::DimensionMismatch { .. })));
}

#[test]
fn temperatures_cannot_be_multiplied() {
    let err = Measurable::<Celsius>::new(20.0)
        .multiply(Measurable::<Celsius>::new(2.0), shared())
        .unwrap_err();
    assert!(matches!(err, UnitError::NonMultiplicativeUnit { .. }));

    let kelvin = Measurable::<Kelvin>::new(300.0)
        .divide(Measurable::<Kelvin>::new(150.0), shared())
        .unwrap();
    assert!(close(kelvin.amount(), 2.0));
}

#[test]
fn unresolved_dimension_is_reported() {
    let err = Measurable::<Second>::new(2.0)
        .multiply(Measurable::<Kelvin>::new(3.0), shared())
        .unwrap_err();
    assert_eq!(
        err,
        UnitError::UnresolvedDimension {
            dimension: Dimension::TIME.combine(&Dimension::TEMPERATURE),
        }
    );
}

#[test]
fn dose_prescription_in_centigray() {
    let per_fraction = Measurable::<Centigray>::new(180.0);
    let total = per_fraction * 28.0;
    assert!(close(total.in_unit::<Gray>().amount(), 50.4));
    assert!(total > Measurable::<Gray>::new(50.0));
}

#[test]
fn energy_per_mass_is_absorbed_dose() {
    let dose = Measurable::<Joule>::new(3.0)
        .divide(Measurable::<Kilogram>::new(1.5), shared())
        .unwrap();
    assert_eq!(dose.unit().symbol(), "Gy");
    assert!(close(dose.into_typed::<Centigray>().unwrap().amount(), 200.0));
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn registry_completeness() {
    let registry = shared();
    let lengths: Vec<&str> = registry
        .supported_units(Dimension::LENGTH)
        .map(|u| u.symbol())
        .collect();
    assert!(lengths.contains(&"m"));
    assert!(lengths.contains(&"mm"));

    assert!(
        !registry
            .supported_units(Dimension::AREA)
            .any(|u| u.symbol() == "cm")
    );
}

#[test]
fn prefix_derivation_matches_registered_tags() {
    let registry = shared();
    let meter = registry.descriptor_of::<Meter>().unwrap();
    let derived = meter.derive_with_prefix(Prefix::Centi).unwrap();
    assert!(registry.contains(&derived));
    assert_eq!(derived, Centimeter::descriptor());
}

#[test]
fn custom_registry_with_preferred_unit() {
    let mut builder = RegistryBuilder::new();
    builder.register_unit::<Meter>().unwrap();
    builder.register_unit::<Centimeter>().unwrap();
    builder.register_unit::<SquareMeter>().unwrap();
    builder.register_unit::<SquareCentimeter>().unwrap();
    builder.prefer("cm²", Dimension::AREA).unwrap();
    let registry = builder.build();

    let area = Measurable::<Centimeter>::new(10.0)
        .multiply(Measurable::<Centimeter>::new(10.0), &registry)
        .unwrap();
    assert_eq!(area.unit().symbol(), "cm²");
    assert!(close(area.amount(), 100.0));
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..8u32)
        .map(|i| {
            let registry = Arc::clone(shared());
            thread::spawn(move || {
                let amount = f64::from(i);
                let area = Measurable::<Meter>::new(amount)
                    .multiply(Measurable::<Meter>::new(2.0), &registry)
                    .unwrap();
                area.amount()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let area = handle.join().unwrap();
        assert!(close(area, 2.0 * i as f64));
    }
}
