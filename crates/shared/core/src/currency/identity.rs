use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{CurrencyCache, IsoCurrency};
use crate::values::Amount;

#[derive(Debug)]
struct CurrencyData {
    code: String,
    iso: Option<&'static IsoCurrency>,
}

/// Interned currency identity
///
/// A cheap handle to a shared instance owned by a `CurrencyCache`. Equality,
/// hashing and ordering use the code only; `ptr_eq` tells whether two
/// handles point at the same interned instance.
#[derive(Clone)]
pub struct Currency(Arc<CurrencyData>);

impl Currency {
    /// Resolve a code through the process-wide cache
    ///
    /// Never fails: unknown codes become non-ISO currencies with an empty
    /// symbol.
    pub fn get_instance(code: &str) -> Currency {
        CurrencyCache::global().get_instance(code)
    }

    pub(super) fn new(code: &str, iso: Option<&'static IsoCurrency>) -> Self {
        Self(Arc::new(CurrencyData {
            code: code.to_string(),
            iso,
        }))
    }

    pub fn code(&self) -> &str {
        &self.0.code
    }

    /// Display symbol, empty for non-ISO codes
    pub fn symbol(&self) -> &str {
        self.0.iso.map_or("", |iso| iso.symbol)
    }

    /// Linked standard metadata, if the code is ISO 4217
    pub fn iso(&self) -> Option<&'static IsoCurrency> {
        self.0.iso
    }

    pub fn is_iso(&self) -> bool {
        self.0.iso.is_some()
    }

    pub fn numeric_code(&self) -> Option<u16> {
        self.0.iso.map(|iso| iso.numeric)
    }

    /// Default fraction digits (2 for EUR, 0 for JPY, none for metals)
    pub fn fraction_digits(&self) -> Option<u32> {
        self.0.iso.and_then(|iso| iso.minor_units).map(u32::from)
    }

    /// True when both handles share one interned instance
    pub fn ptr_eq(a: &Currency, b: &Currency) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Round an amount to the currency's fraction digits, half away from zero
    ///
    /// Amounts in currencies without a minor unit are returned unchanged.
    pub fn round(&self, amount: Amount) -> Amount {
        match self.fraction_digits() {
            Some(dp) => amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
            None => amount,
        }
    }

    /// Render an amount as "<symbol> <amount>", falling back to the code
    pub fn format_amount(&self, amount: Amount) -> String {
        let mut rounded = self.round(amount);
        if let Some(dp) = self.fraction_digits() {
            rounded.rescale(dp);
        }
        let label = match self.symbol() {
            "" => self.code(),
            symbol => symbol,
        };
        format!("{} {}", label, rounded)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(other.code())
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Currency")
            .field("code", &self.0.code)
            .field("iso", &self.is_iso())
            .finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::get_instance(code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::get_instance(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_iso_accessors() {
        let eur = Currency::get_instance("EUR");
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.symbol(), "€");
        assert_eq!(eur.numeric_code(), Some(978));
        assert_eq!(eur.fraction_digits(), Some(2));
        assert!(eur.is_iso());
    }

    #[test]
    fn test_non_iso_currency() {
        let odd = Currency::get_instance("XYZ_NOT_REAL");
        assert_eq!(odd.code(), "XYZ_NOT_REAL");
        assert_eq!(odd.symbol(), "");
        assert!(odd.iso().is_none());
        assert!(odd.fraction_digits().is_none());
    }

    #[test]
    fn test_equality_is_by_code_and_case_sensitive() {
        assert_eq!(Currency::get_instance("USD"), Currency::from("USD"));
        assert_ne!(Currency::get_instance("usd"), Currency::get_instance("USD"));
        assert!(!Currency::get_instance("usd").is_iso());
    }

    #[test]
    fn test_round() {
        let eur = Currency::get_instance("EUR");
        assert_eq!(eur.round(dec!(1.005)), dec!(1.01));
        assert_eq!(eur.round(dec!(-1.005)), dec!(-1.01));

        let jpy = Currency::get_instance("JPY");
        assert_eq!(jpy.round(dec!(1234.5)), dec!(1235));

        let gold = Currency::get_instance("XAU");
        assert_eq!(gold.round(dec!(1.23456)), dec!(1.23456));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(Currency::get_instance("EUR").format_amount(dec!(1.5)), "€ 1.50");
        assert_eq!(Currency::get_instance("JPY").format_amount(dec!(1234.5)), "¥ 1235");
        assert_eq!(Currency::get_instance("KWD").format_amount(dec!(2)), "KWD 2.000");
        assert_eq!(
            Currency::get_instance("BTC").format_amount(dec!(0.12345678)),
            "BTC 0.12345678"
        );
    }

    #[test]
    fn test_serde_as_code() {
        let chf = Currency::get_instance("CHF");
        let json = serde_json::to_string(&chf).unwrap();
        assert_eq!(json, "\"CHF\"");

        let back: Currency = serde_json::from_str(&json).unwrap();
        assert!(Currency::ptr_eq(&chf, &back));
    }
}
