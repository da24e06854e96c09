use std::collections::BTreeMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace};

use super::collection::Currencies;
use super::currency::{Currency, CurrencyBuilder, normalize_code};
use super::error::CurrencyError;
use super::infer::{CurrencySource, infer_currency};
use super::table::seed_currencies;

static REGISTRY: LazyLock<CurrencyRegistry> = LazyLock::new(CurrencyRegistry::new);

/// The process-wide registry, seeded with the ISO 4217 table on first use.
pub fn registry() -> &'static CurrencyRegistry {
    &REGISTRY
}

/// Resolve a code against the global registry.
///
/// Never fails: an unknown code yields a synthetic currency whose grapheme is
/// the code exactly as passed in.
///
/// ```
/// use waehrung::core::resolve;
///
/// assert_eq!(resolve("eur").code(), "EUR");
/// assert_eq!(resolve("Doubloon").grapheme(), "Doubloon");
/// ```
pub fn resolve(code: &str) -> Currency {
    REGISTRY.resolve(code)
}

/// Look up a code in the global registry.
pub fn get_currency(code: &str) -> Option<Currency> {
    REGISTRY.get(code)
}

/// Register or overwrite a currency in the global registry.
pub fn add_currency(
    code: &str,
    grapheme: &str,
    template: &str,
    decimal: &str,
    thousand: &str,
    fraction: u32,
) {
    REGISTRY.add_currency(code, grapheme, template, decimal, thousand, fraction);
}

/// Infer the currency of a formatted money string from the global registry.
///
/// ```
/// use waehrung::core::infer_currency_from_str;
///
/// assert_eq!(infer_currency_from_str("GBP 1.00").unwrap().code(), "GBP");
/// assert!(infer_currency_from_str("1.00").is_err());
/// ```
pub fn infer_currency_from_str(text: &str) -> Result<Currency, CurrencyError> {
    REGISTRY.infer(text)
}

/// Currency table keyed by upper-case code.
///
/// Reads share a lock; registration takes it exclusively. Entries are only
/// ever inserted or overwritten. Iteration follows ascending code order.
#[derive(Debug)]
pub struct CurrencyRegistry {
    currencies: RwLock<BTreeMap<String, Currency>>,
}

impl CurrencyRegistry {
    /// Registry seeded with the built-in ISO 4217 table.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.extend(seed_currencies());
        registry
    }

    /// Registry without any currencies.
    pub fn empty() -> Self {
        Self {
            currencies: RwLock::new(BTreeMap::new()),
        }
    }

    // Registration never panics mid-write, so a poisoned map is still whole.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Currency>> {
        self.currencies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Currency>> {
        self.currencies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register or overwrite a currency from its display fields.
    pub fn add_currency(
        &self,
        code: &str,
        grapheme: &str,
        template: &str,
        decimal: &str,
        thousand: &str,
        fraction: u32,
    ) {
        self.register(
            CurrencyBuilder::new(code)
                .grapheme(grapheme)
                .template(template)
                .decimal(decimal)
                .thousand(thousand)
                .fraction(fraction)
                .build(),
        );
    }

    /// Register or overwrite a fully built currency.
    pub fn register(&self, currency: Currency) {
        debug!(code = currency.code(), "registering currency");
        self.write().insert(currency.code().to_string(), currency);
    }

    /// Register a batch of currencies under a single write lock.
    pub fn extend(&self, currencies: impl IntoIterator<Item = Currency>) {
        let mut map = self.write();
        for currency in currencies {
            map.insert(currency.code().to_string(), currency);
        }
        debug!(total = map.len(), "extended currency registry");
    }

    /// Look up a code, case-insensitively.
    pub fn get(&self, code: &str) -> Option<Currency> {
        self.read().get(&normalize_code(code)).cloned()
    }

    /// Like [`get`](Self::get), but absence is an error.
    pub fn require(&self, code: &str) -> Result<Currency, CurrencyError> {
        self.get(code).ok_or_else(|| CurrencyError::NotFound(code.to_string()))
    }

    /// Look up a code, synthesizing a currency when it is unknown.
    pub fn resolve(&self, code: &str) -> Currency {
        self.get(code).unwrap_or_else(|| {
            trace!(code, "unknown currency code, using synthetic currency");
            Currency::synthetic(code)
        })
    }

    /// Infer the currency of a formatted money string.
    pub fn infer(&self, text: &str) -> Result<Currency, CurrencyError> {
        infer_currency(self, text)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.read().contains_key(&normalize_code(code))
    }

    /// Registered codes in ascending order.
    pub fn codes(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Copy the current contents into an independent collection.
    pub fn snapshot(&self) -> Currencies {
        self.read().values().cloned().collect()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencySource for CurrencyRegistry {
    fn find(&self, code: &str) -> Option<Currency> {
        self.get(code)
    }

    fn visit(&self, visitor: &mut dyn FnMut(&Currency)) {
        for currency in self.read().values() {
            visitor(currency);
        }
    }
}
