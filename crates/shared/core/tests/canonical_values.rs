//! Canonical Value Integration Tests
//!
//! Exercises every value domain through the public API:
//! - Named constants survive a name round trip
//! - Bounds are rejected identically by lookup and construction
//! - Ordering agrees with measures, missing values sort last
//! - Serde accepts names and measures

use std::cmp::Ordering;

use hermes_core::{
    CanonicalValue, LineBreakLookback, PriceRange, RegistryError, TickBarSize, ValueDomain,
    compare,
};

fn assert_named_round_trip<D: ValueDomain>() {
    for value in CanonicalValue::<D>::named() {
        let name = value.name();
        assert_eq!(
            CanonicalValue::<D>::from_token(&name),
            Some(value),
            "{} did not round trip",
            name
        );
        assert_eq!(name.parse::<CanonicalValue<D>>(), Ok(value));
    }
}

fn assert_bounds<D: ValueDomain>() {
    assert!(CanonicalValue::<D>::from_measure(D::MIN - 1).is_none());
    assert!(CanonicalValue::<D>::from_measure(D::MAX + 1).is_none());
    assert!(CanonicalValue::<D>::from_measure(D::MIN).is_some());
    assert!(CanonicalValue::<D>::from_measure(D::MAX).is_some());

    assert!(matches!(
        CanonicalValue::<D>::new(D::MAX + 1),
        Err(RegistryError::OutOfBounds { .. })
    ));
}

fn assert_sequence<D: ValueDomain>() {
    let values: Vec<_> = CanonicalValue::<D>::all().collect();
    assert_eq!(values.len() as u32, D::MAX - D::MIN + 1);
    assert!(values.windows(2).all(|w| w[0] < w[1]));

    // restartable: a fresh iterator yields the same sequence
    assert!(CanonicalValue::<D>::all().eq(values.iter().copied()));

    for value in &values {
        assert_eq!(CanonicalValue::<D>::from_measure(value.measure()), Some(*value));
    }
}

#[test]
fn test_named_constants_round_trip() {
    let _ = env_logger::try_init();
    assert_named_round_trip::<hermes_core::Pips>();
    assert_named_round_trip::<hermes_core::Ticks>();
    assert_named_round_trip::<hermes_core::Lines>();
}

#[test]
fn test_bounds_rejected_in_every_domain() {
    assert_bounds::<hermes_core::Pips>();
    assert_bounds::<hermes_core::Ticks>();
    assert_bounds::<hermes_core::Lines>();
    assert!(PriceRange::from_measure(0).is_none());
    assert!(TickBarSize::from_measure(0).is_none());
}

#[test]
fn test_every_domain_enumerates_in_order() {
    assert_sequence::<hermes_core::Pips>();
    assert_sequence::<hermes_core::Ticks>();
    assert_sequence::<hermes_core::Lines>();
}

#[test]
fn test_identity_stability() {
    for measure in [1, 6, 7, 999, 10_000] {
        let a = PriceRange::from_measure(measure).unwrap();
        let b = PriceRange::from_measure(measure).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.name(), b.name());
    }
}

#[test]
fn test_prefix_and_numeric_fallback() {
    assert_eq!(PriceRange::from_token("two"), Some(PriceRange::TWO_PIPS));
    assert_eq!(PriceRange::from_token("TW"), Some(PriceRange::TWO_PIPS));

    let seven = PriceRange::from_token("7").unwrap();
    assert_eq!(seven.measure(), 7);
    assert_eq!(seven.name(), "7_PIPS");

    assert!(PriceRange::from_token("").is_none());
    assert!(PriceRange::from_token("lots").is_none());
    assert!(TickBarSize::from_token("-1").is_none());
}

#[test]
fn test_ordering_is_antisymmetric() {
    let small = PriceRange::from_measure(3);
    let large = PriceRange::from_measure(300);
    let missing = PriceRange::from_token("nope");

    let cases = [
        (small.as_ref(), large.as_ref()),
        (small.as_ref(), missing.as_ref()),
        (large.as_ref(), missing.as_ref()),
        (missing.as_ref(), missing.as_ref()),
        (small.as_ref(), small.as_ref()),
    ];
    for (a, b) in cases {
        assert_eq!(compare(a, b), compare(b, a).reverse());
    }

    assert_eq!(compare(small.as_ref(), large.as_ref()), Ordering::Less);
    assert_eq!(compare(large.as_ref(), missing.as_ref()), Ordering::Less);
    assert_eq!(compare(missing.as_ref(), small.as_ref()), Ordering::Greater);
}

#[test]
fn test_lookup_misses_become_errors_only_on_parse() {
    let err = "nine".parse::<LineBreakLookback>().unwrap_err();
    assert_eq!(
        err,
        RegistryError::NotFound {
            domain: "LineBreakLookback",
            token: "nine".to_string()
        }
    );
    assert_eq!(err.to_string(), "No LineBreakLookback value matches 'nine'");
}

#[test]
fn test_serde_names_and_measures() {
    let json = serde_json::to_string(&PriceRange::TWO_PIPS).unwrap();
    assert_eq!(json, "\"TWO_PIPS\"");

    let by_name: PriceRange = serde_json::from_str("\"two\"").unwrap();
    let by_measure: PriceRange = serde_json::from_str("2").unwrap();
    assert_eq!(by_name, PriceRange::TWO_PIPS);
    assert_eq!(by_measure, PriceRange::TWO_PIPS);

    let tail: TickBarSize = serde_json::from_str("\"250\"").unwrap();
    assert_eq!(serde_json::to_string(&tail).unwrap(), "\"250_TICKS\"");

    assert!(serde_json::from_str::<TickBarSize>("0").is_err());
    assert!(serde_json::from_str::<TickBarSize>("-4").is_err());
    assert!(serde_json::from_str::<LineBreakLookback>("\"eleven\"").is_err());
}
