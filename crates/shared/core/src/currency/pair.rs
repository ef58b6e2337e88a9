use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Currency;
use crate::registry::{RegistryError, RegistryResult};
use crate::values::Price;

/// A currency pair such as EUR/USD
///
/// Both legs are interned currencies. The primary is the currency being
/// priced, the secondary the one it is quoted in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    primary: Currency,
    secondary: Currency,
}

impl CurrencyPair {
    /// Create a pair from two currency codes
    pub fn new(primary: &str, secondary: &str) -> RegistryResult<Self> {
        if primary.is_empty() || secondary.is_empty() || primary == secondary {
            return Err(RegistryError::InvalidCurrencyPair(format!(
                "{}/{}",
                primary, secondary
            )));
        }
        Ok(Self {
            primary: Currency::get_instance(primary),
            secondary: Currency::get_instance(secondary),
        })
    }

    /// Common pairs
    pub fn eur_usd() -> Self {
        Self::from_currencies(Currency::get_instance("EUR"), Currency::get_instance("USD"))
    }

    pub fn usd_jpy() -> Self {
        Self::from_currencies(Currency::get_instance("USD"), Currency::get_instance("JPY"))
    }

    fn from_currencies(primary: Currency, secondary: Currency) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &Currency {
        &self.primary
    }

    pub fn secondary(&self) -> &Currency {
        &self.secondary
    }

    /// Decimal places of one pip: 2 for JPY-quoted pairs, otherwise 4
    pub fn pip_scale(&self) -> u32 {
        if self.secondary.code() == "JPY" { 2 } else { 4 }
    }

    /// Size of one pip in price units (0.0001, or 0.01 for JPY)
    pub fn pip_size(&self) -> Price {
        Decimal::new(1, self.pip_scale())
    }

    /// The same pair quoted the other way round
    pub fn inverse(&self) -> Self {
        Self::from_currencies(self.secondary.clone(), self.primary.clone())
    }
}

impl FromStr for CurrencyPair {
    type Err = RegistryError;

    /// Accepts "EUR/USD" or the compact six-letter "EURUSD"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((primary, secondary)) = s.split_once('/') {
            return Self::new(primary.trim(), secondary.trim());
        }
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            let (primary, secondary) = s.split_at(3);
            return Self::new(primary, secondary);
        }
        Err(RegistryError::InvalidCurrencyPair(s.to_string()))
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.primary, self.secondary)
    }
}
