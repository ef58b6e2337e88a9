//! Currency identities
//!
//! Currencies are interned by code: every lookup of "EUR" yields the same
//! shared instance, linked to its ISO 4217 metadata. Codes outside ISO 4217
//! (crypto assets, broker-specific codes) are interned too, without metadata.

mod cache;
mod identity;
mod iso;
mod pair;

pub use cache::CurrencyCache;
pub use identity::Currency;
pub use iso::IsoCurrency;
pub use pair::CurrencyPair;
