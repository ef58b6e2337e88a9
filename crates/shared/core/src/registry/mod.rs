//! Canonical value registry
//!
//! Maps identifying tokens (integers or strings) onto canonical values of a
//! bounded domain. Each domain owns one `Registry`, built on first use and
//! immutable afterwards:
//!
//! ```text
//! by_token("tw") ──► label prefix ──► integer literal ──► partial name ──► None
//!                         │                 │                   │
//!                         └────────────► by_measure ◄───────────┘
//! ```

mod domain;
mod error;
mod value;

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Range;

use log::debug;

pub use domain::ValueDomain;
pub use error::{RegistryError, RegistryResult};
pub use value::CanonicalValue;

use crate::values::Measure;

/// Lookup tables for one value domain
pub struct Registry<D> {
    /// Case-folded labels in registration order
    labels: Vec<(String, CanonicalValue<D>)>,
}

impl<D: ValueDomain> Registry<D> {
    /// Build the registry from the domain's named constants
    pub fn new() -> Self {
        let labels: Vec<_> = D::NAMED
            .iter()
            .filter(|(measure, _)| D::contains(*measure))
            .map(|(measure, label)| (label.to_lowercase(), CanonicalValue::raw(*measure)))
            .collect();

        debug!(
            "{} registry initialized: {} named constants, measures {}..={}",
            D::NAME,
            labels.len(),
            D::MIN,
            D::MAX
        );

        Self { labels }
    }

    /// Exact lookup; `None` outside `[MIN, MAX]`
    pub fn by_measure(&self, measure: Measure) -> Option<CanonicalValue<D>> {
        D::contains(measure).then(|| CanonicalValue::raw(measure))
    }

    /// Token lookup
    ///
    /// Tried in order: case-insensitive prefix of a named constant's label
    /// (earliest registered wins), integer literal, then the leading numeric
    /// segment scaled by each of the domain's prefix multipliers as long as
    /// the resolved canonical name still starts with the token.
    pub fn by_token(&self, token: &str) -> Option<CanonicalValue<D>> {
        if token.is_empty() {
            return None;
        }
        let folded = token.to_lowercase();

        if let Some((_, value)) = self.labels.iter().find(|(label, _)| label.starts_with(&folded)) {
            return Some(*value);
        }

        if let Some(value) = token
            .parse::<Measure>()
            .ok()
            .and_then(|measure| self.by_measure(measure))
        {
            return Some(value);
        }

        self.by_partial_name(&folded)
    }

    fn by_partial_name(&self, folded: &str) -> Option<CanonicalValue<D>> {
        if D::PREFIX_MULTIPLIERS.is_empty() {
            return None;
        }
        let lead = folded.split('_').next()?;
        if lead.is_empty() || !lead.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let base: Measure = lead.parse().ok()?;

        D::PREFIX_MULTIPLIERS
            .iter()
            .filter_map(|k| base.checked_mul(*k))
            .filter_map(|measure| self.by_measure(measure))
            .find(|value| value.name().to_lowercase().starts_with(folded))
    }

    /// Lazy ascending sequence of every value in the domain
    pub fn values(&self) -> Values<D> {
        Values::new()
    }

    /// Named constants in registration order
    pub fn named(&self) -> impl Iterator<Item = CanonicalValue<D>> + '_ {
        self.labels.iter().map(|(_, value)| *value)
    }
}

impl<D: ValueDomain> Default for Registry<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Total order over lookup results
///
/// Values compare by measure; a missing value (`None`) sorts after every
/// concrete value, on either side, and two missing values are equal.
pub fn compare<D>(a: Option<&CanonicalValue<D>>, b: Option<&CanonicalValue<D>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Iterator over `[MIN, MAX]` of a domain
///
/// Restart by asking the registry for a new one.
pub struct Values<D> {
    range: Range<Measure>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: ValueDomain> Values<D> {
    fn new() -> Self {
        Self {
            range: D::MIN..D::MAX.saturating_add(1),
            _domain: PhantomData,
        }
    }
}

impl<D: ValueDomain> Iterator for Values<D> {
    type Item = CanonicalValue<D>;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(CanonicalValue::raw)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<D: ValueDomain> DoubleEndedIterator for Values<D> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(CanonicalValue::raw)
    }
}

impl<D: ValueDomain> ExactSizeIterator for Values<D> {}

impl<D: ValueDomain> FusedIterator for Values<D> {}
