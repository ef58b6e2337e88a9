use std::sync::OnceLock;

use crate::registry::{CanonicalValue, Registry, ValueDomain};
use crate::values::Measure;

/// Tick count domain: 1..=1000 ticks per bar
pub struct Ticks;

impl ValueDomain for Ticks {
    const NAME: &'static str = "TickBarSize";
    const MIN: Measure = 1;
    const MAX: Measure = 1000;
    const UNIT: &'static str = "TICKS";
    const NAMED: &'static [(Measure, &'static str)] = &[
        (1, "ONE_TICK"),
        (2, "TWO_TICKS"),
        (3, "THREE_TICKS"),
        (4, "FOUR_TICKS"),
        (5, "FIVE_TICKS"),
    ];

    fn registry() -> &'static Registry<Self> {
        static REGISTRY: OnceLock<Registry<Ticks>> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }
}

/// Number of ticks aggregated into one tick bar
pub type TickBarSize = CanonicalValue<Ticks>;

impl CanonicalValue<Ticks> {
    pub const ONE_TICK: Self = Self::raw(1);
    pub const TWO_TICKS: Self = Self::raw(2);
    pub const THREE_TICKS: Self = Self::raw(3);
    pub const FOUR_TICKS: Self = Self::raw(4);
    pub const FIVE_TICKS: Self = Self::raw(5);

    /// Number of ticks per bar
    pub fn ticks(&self) -> Measure {
        self.measure()
    }

    /// Number of complete bars `tick_count` ticks produce
    pub fn bars_for(&self, tick_count: u64) -> u64 {
        tick_count / u64::from(self.ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryError;

    #[test]
    fn test_named_constants() {
        assert_eq!(TickBarSize::ONE_TICK.name(), "ONE_TICK");
        assert_eq!(TickBarSize::FIVE_TICKS.ticks(), 5);
        assert_eq!(TickBarSize::named().count(), 5);
    }

    #[test]
    fn test_synthesized_name() {
        let size = TickBarSize::from_measure(50).unwrap();
        assert_eq!(size.name(), "50_TICKS");
        assert_eq!(size.to_string(), "50_TICKS");
    }

    #[test]
    fn test_construction_fault() {
        assert!(matches!(
            TickBarSize::new(1001),
            Err(RegistryError::OutOfBounds { max: 1000, .. })
        ));
        assert!(matches!(
            TickBarSize::new(0),
            Err(RegistryError::OutOfBounds { min: 1, .. })
        ));
    }

    #[test]
    fn test_no_partial_name_lookup() {
        // only the pip domain expands partial names
        assert!(TickBarSize::from_token("50_T").is_none());
        assert_eq!(TickBarSize::from_token("50").unwrap().ticks(), 50);
    }

    #[test]
    fn test_bars_for() {
        let size = TickBarSize::from_measure(10).unwrap();
        assert_eq!(size.bars_for(105), 10);
        assert_eq!(TickBarSize::ONE_TICK.bars_for(7), 7);
    }
}
