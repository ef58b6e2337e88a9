use super::Registry;
use crate::values::Measure;

/// Description of a bounded domain of named small values
///
/// A domain fixes the inclusive measure bounds, the named constants (in
/// registration order, which decides ambiguous prefix lookups) and how
/// values without a label are named.
pub trait ValueDomain: Sized + 'static {
    /// Domain name used in errors and debug output (e.g. "PriceRange")
    const NAME: &'static str;

    /// Smallest valid measure
    const MIN: Measure;

    /// Largest valid measure
    const MAX: Measure;

    /// Unit suffix of synthesized names (e.g. "PIPS" gives "7_PIPS")
    const UNIT: &'static str;

    /// Named constants as (measure, label), earliest registered first
    const NAMED: &'static [(Measure, &'static str)];

    /// Multipliers tried against the leading numeric segment of a partial
    /// token such as "12_p". Empty disables that lookup step.
    const PREFIX_MULTIPLIERS: &'static [Measure] = &[];

    /// The process-wide registry for this domain
    fn registry() -> &'static Registry<Self>;

    /// Name of a measure that has no registered label
    fn synthesized_name(measure: Measure) -> String {
        format!("{}_{}", measure, Self::UNIT)
    }

    /// Label of the named constant registered for `measure`, if any
    fn label(measure: Measure) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(m, _)| *m == measure)
            .map(|(_, label)| *label)
    }

    /// Whether `measure` lies inside `[MIN, MAX]`
    fn contains(measure: Measure) -> bool {
        (Self::MIN..=Self::MAX).contains(&measure)
    }
}
