use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::currency::CurrencyPair;
use crate::registry::{CanonicalValue, Registry, ValueDomain};
use crate::values::{Measure, Price};

/// Pip count domain: 1..=10000 pips
///
/// Partial names are resolved with multipliers 1 and 10. Partial tokens
/// always end their numeric segment with `_`, and `{10n}_PIPS` never starts
/// with `{n}_`, so with this naming only the multiplier 1 ever matches.
/// The x10 branch resolves only in domains whose synthesized names put the
/// scaled measure behind a short prefix.
pub struct Pips;

impl ValueDomain for Pips {
    const NAME: &'static str = "PriceRange";
    const MIN: Measure = 1;
    const MAX: Measure = 10_000;
    const UNIT: &'static str = "PIPS";
    const NAMED: &'static [(Measure, &'static str)] = &[
        (1, "ONE_PIP"),
        (2, "TWO_PIPS"),
        (3, "THREE_PIPS"),
        (4, "FOUR_PIPS"),
        (5, "FIVE_PIPS"),
        (6, "SIX_PIPS"),
    ];
    const PREFIX_MULTIPLIERS: &'static [Measure] = &[1, 10];

    fn registry() -> &'static Registry<Self> {
        static REGISTRY: OnceLock<Registry<Pips>> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }
}

/// Price range measured in pips (range bars, renko brick sizes)
pub type PriceRange = CanonicalValue<Pips>;

impl CanonicalValue<Pips> {
    pub const ONE_PIP: Self = Self::raw(1);
    pub const TWO_PIPS: Self = Self::raw(2);
    pub const THREE_PIPS: Self = Self::raw(3);
    pub const FOUR_PIPS: Self = Self::raw(4);
    pub const FIVE_PIPS: Self = Self::raw(5);
    pub const SIX_PIPS: Self = Self::raw(6);

    pub fn pips(&self) -> Measure {
        self.measure()
    }

    /// Price distance this range spans on `pair`
    pub fn to_price_delta(&self, pair: &CurrencyPair) -> Price {
        Decimal::from(self.pips()) * pair.pip_size()
    }

    /// Range nearest to a price distance on `pair`
    ///
    /// Returns `None` when the rounded pip count falls outside the domain.
    pub fn from_price_delta(delta: Price, pair: &CurrencyPair) -> Option<Self> {
        let pips = delta.abs().checked_div(pair.pip_size())?.round();
        pips.to_u32().and_then(Self::from_measure)
    }
}
