use std::sync::OnceLock;

use crate::registry::{CanonicalValue, Registry, ValueDomain};
use crate::values::Measure;

/// Line count domain: 2..=10 lines of lookback
pub struct Lines;

impl ValueDomain for Lines {
    const NAME: &'static str = "LineBreakLookback";
    const MIN: Measure = 2;
    const MAX: Measure = 10;
    const UNIT: &'static str = "LINES";
    const NAMED: &'static [(Measure, &'static str)] =
        &[(2, "TWO_LINES"), (3, "THREE_LINES"), (4, "FOUR_LINES")];

    fn registry() -> &'static Registry<Self> {
        static REGISTRY: OnceLock<Registry<Lines>> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }
}

/// How many previous lines a line break chart compares a close against
pub type LineBreakLookback = CanonicalValue<Lines>;

impl CanonicalValue<Lines> {
    pub const TWO_LINES: Self = Self::raw(2);
    pub const THREE_LINES: Self = Self::raw(3);
    pub const FOUR_LINES: Self = Self::raw(4);

    pub fn lines(&self) -> Measure {
        self.measure()
    }
}
