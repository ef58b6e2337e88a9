//! Hermes Core Domain
//!
//! Canonical value types for the Hermes trading SDK.
//! This crate contains no async, no I/O, and is 100% unit testable.
//!
//! - `registry`: interning of small bounded value domains with token lookup
//! - `ranges`: price ranges, tick bar sizes, line break lookbacks
//! - `currency`: interned currency identities and currency pairs

pub mod currency;
pub mod ranges;
pub mod registry;
pub mod values;

// Re-export commonly used types at crate root
pub use currency::{Currency, CurrencyCache, CurrencyPair, IsoCurrency};
pub use ranges::{LineBreakLookback, Lines, Pips, PriceRange, TickBarSize, Ticks};
pub use registry::{
    CanonicalValue, Registry, RegistryError, RegistryResult, ValueDomain, Values, compare,
};
pub use values::{Amount, Measure, Price};
