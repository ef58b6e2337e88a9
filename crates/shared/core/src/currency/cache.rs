use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use log::debug;

use super::{Currency, IsoCurrency};

/// Process-lifetime intern table for currencies
///
/// ISO and non-ISO codes live in disjoint maps. Inserts go through the
/// map's entry API, so concurrent first lookups of one code construct a
/// single instance and every caller receives that instance. Entries are
/// never evicted.
pub struct CurrencyCache {
    iso: DashMap<String, Currency>,
    other: DashMap<String, Currency>,
    constructions: AtomicUsize,
}

impl CurrencyCache {
    pub fn new() -> Self {
        Self {
            iso: DashMap::new(),
            other: DashMap::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// The cache behind `Currency::get_instance`
    pub fn global() -> &'static CurrencyCache {
        static CACHE: OnceLock<CurrencyCache> = OnceLock::new();
        CACHE.get_or_init(CurrencyCache::new)
    }

    /// Resolve a code to its interned currency, creating it on first use
    pub fn get_instance(&self, code: &str) -> Currency {
        if let Some(existing) = self.other.get(code) {
            return existing.value().clone();
        }

        match IsoCurrency::find(code) {
            Some(iso) => {
                if let Some(existing) = self.iso.get(code) {
                    return existing.value().clone();
                }
                self.intern(&self.iso, code, Some(iso))
            }
            None => self.intern(&self.other, code, None),
        }
    }

    fn intern(
        &self,
        map: &DashMap<String, Currency>,
        code: &str,
        iso: Option<&'static IsoCurrency>,
    ) -> Currency {
        map.entry(code.to_string())
            .or_insert_with(|| {
                self.constructions.fetch_add(1, Ordering::Relaxed);
                debug!(
                    "Interned {} currency {:?}",
                    if iso.is_some() { "ISO" } else { "non-ISO" },
                    code
                );
                Currency::new(code, iso)
            })
            .value()
            .clone()
    }

    /// Number of currency instances this cache has constructed
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::Relaxed)
    }

    /// Number of interned currencies
    pub fn len(&self) -> usize {
        self.iso.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `code` has already been interned
    pub fn contains(&self, code: &str) -> bool {
        self.iso.contains_key(code) || self.other.contains_key(code)
    }
}

impl Default for CurrencyCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_code_same_instance() {
        let cache = CurrencyCache::new();
        let a = cache.get_instance("EUR");
        let b = cache.get_instance("EUR");

        assert!(Currency::ptr_eq(&a, &b));
        assert_eq!(cache.constructions(), 1);
    }

    #[test]
    fn test_iso_and_non_iso_partition() {
        let cache = CurrencyCache::new();
        cache.get_instance("USD");
        cache.get_instance("BTC");
        cache.get_instance("BTC");

        assert_eq!(cache.iso.len(), 1);
        assert_eq!(cache.other.len(), 1);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("BTC"));
        assert!(!cache.contains("GBP"));
    }

    #[test]
    fn test_separate_caches_are_independent() {
        let first = CurrencyCache::new();
        let second = CurrencyCache::new();
        let a = first.get_instance("JPY");
        let b = second.get_instance("JPY");

        assert_eq!(a, b);
        assert!(!Currency::ptr_eq(&a, &b));
    }

    #[test]
    fn test_concurrent_first_lookup_constructs_once() {
        let cache = CurrencyCache::new();

        let results: Vec<Currency> = thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| cache.get_instance("EUR")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.len(), 16);
        assert!(results.iter().all(|c| Currency::ptr_eq(c, &results[0])));
        assert_eq!(cache.constructions(), 1);
    }
}
