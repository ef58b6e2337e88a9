use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{RegistryError, RegistryResult, ValueDomain, Values};
use crate::values::Measure;

/// One point of a bounded value domain (e.g. "a price range of 7 pips")
///
/// Values are small immutable `Copy` handles. Equality, hashing and
/// ordering all go through `measure`; the name is derived from it.
/// Callers obtain values only through the lookups below.
pub struct CanonicalValue<D> {
    measure: Measure,
    _domain: PhantomData<fn() -> D>,
}

impl<D> CanonicalValue<D> {
    /// Unchecked construction, reserved for named constants and the registry
    pub(crate) const fn raw(measure: Measure) -> Self {
        Self {
            measure,
            _domain: PhantomData,
        }
    }

    /// The underlying magnitude
    pub const fn measure(&self) -> Measure {
        self.measure
    }
}

impl<D: ValueDomain> CanonicalValue<D> {
    /// Validated construction
    ///
    /// Unlike `from_measure`, an out-of-range measure is a construction
    /// fault reported as `RegistryError::OutOfBounds`.
    pub fn new(measure: Measure) -> RegistryResult<Self> {
        Self::from_measure(measure).ok_or(RegistryError::OutOfBounds {
            domain: D::NAME,
            measure,
            min: D::MIN,
            max: D::MAX,
        })
    }

    /// Lookup by exact measure
    pub fn from_measure(measure: Measure) -> Option<Self> {
        D::registry().by_measure(measure)
    }

    /// Lookup by label prefix, integer literal or partial canonical name
    pub fn from_token(token: &str) -> Option<Self> {
        D::registry().by_token(token)
    }

    /// Every value of the domain in ascending order
    pub fn all() -> Values<D> {
        D::registry().values()
    }

    /// The registered named constants, earliest registered first
    pub fn named() -> impl Iterator<Item = Self> {
        D::registry().named()
    }

    /// Canonical name: the registered label if any, else the synthesized one
    pub fn name(&self) -> Cow<'static, str> {
        match D::label(self.measure) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(D::synthesized_name(self.measure)),
        }
    }

    /// True for pre-registered named constants
    pub fn is_named(&self) -> bool {
        D::label(self.measure).is_some()
    }

    /// Value at `MIN`
    pub fn lowest() -> Self {
        Self::raw(D::MIN)
    }

    /// Value at `MAX`
    pub fn highest() -> Self {
        Self::raw(D::MAX)
    }
}

impl<D> Clone for CanonicalValue<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CanonicalValue<D> {}

impl<D> PartialEq for CanonicalValue<D> {
    fn eq(&self, other: &Self) -> bool {
        self.measure == other.measure
    }
}

impl<D> Eq for CanonicalValue<D> {}

impl<D> Hash for CanonicalValue<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.measure.hash(state);
    }
}

impl<D> PartialOrd for CanonicalValue<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D> Ord for CanonicalValue<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.measure.cmp(&other.measure)
    }
}

impl<D: ValueDomain> fmt::Debug for CanonicalValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", D::NAME, self.name())
    }
}

impl<D: ValueDomain> fmt::Display for CanonicalValue<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl<D: ValueDomain> FromStr for CanonicalValue<D> {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| RegistryError::NotFound {
            domain: D::NAME,
            token: s.to_string(),
        })
    }
}

impl<D: ValueDomain> Serialize for CanonicalValue<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name())
    }
}

impl<'de, D: ValueDomain> Deserialize<'de> for CanonicalValue<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        deserializer.deserialize_any(TokenVisitor(PhantomData))
    }
}

/// Accepts either a string token or an integer measure
struct TokenVisitor<D>(PhantomData<fn() -> D>);

impl<D: ValueDomain> TokenVisitor<D> {
    fn not_found<E: de::Error>(token: impl ToString) -> E {
        E::custom(RegistryError::NotFound {
            domain: D::NAME,
            token: token.to_string(),
        })
    }
}

impl<'de, D: ValueDomain> Visitor<'de> for TokenVisitor<D> {
    type Value = CanonicalValue<D>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} name or measure", D::NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        CanonicalValue::from_token(v).ok_or_else(|| Self::not_found(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Measure::try_from(v)
            .ok()
            .and_then(CanonicalValue::from_measure)
            .ok_or_else(|| Self::not_found(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Measure::try_from(v)
            .ok()
            .and_then(CanonicalValue::from_measure)
            .ok_or_else(|| Self::not_found(v))
    }
}
