use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use super::currency::{Currency, normalize_code};
use super::infer::CurrencySource;

/// Caller-owned set of currencies, indexed by code and numeric code.
///
/// [`add`](Self::add) returns a new collection and leaves the receiver as it
/// was, so clones can be handed out freely without locking.
///
/// ```
/// use waehrung::core::*;
///
/// let base = Currencies::new();
/// let extended = base.add(CurrencyBuilder::new("FOO").numeric_code("1234").build());
///
/// assert!(base.is_empty());
/// assert_eq!(extended.currency_by_numeric_code("1234").unwrap().code(), "FOO");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Currencies {
    by_code: Arc<BTreeMap<String, Currency>>,
    // numeric code -> code
    by_numeric_code: Arc<HashMap<String, String>>,
}

impl Currencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a collection holding every entry of `self` plus `currency`.
    ///
    /// An entry with the same code is replaced.
    #[must_use]
    pub fn add(&self, currency: Currency) -> Self {
        let mut next = self.clone();
        insert(
            Arc::make_mut(&mut next.by_code),
            Arc::make_mut(&mut next.by_numeric_code),
            currency,
        );
        next
    }

    /// Look up a currency by alphabetic code, case-insensitively.
    pub fn currency_by_code(&self, code: &str) -> Option<Currency> {
        self.by_code.get(&normalize_code(code)).cloned()
    }

    /// Look up a currency by ISO numeric code.
    pub fn currency_by_numeric_code(&self, numeric_code: &str) -> Option<Currency> {
        self.by_numeric_code
            .get(numeric_code)
            .and_then(|code| self.by_code.get(code))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Currencies in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.by_code.values()
    }
}

impl FromIterator<Currency> for Currencies {
    fn from_iter<I: IntoIterator<Item = Currency>>(iter: I) -> Self {
        let mut by_code = BTreeMap::new();
        let mut by_numeric_code = HashMap::new();
        for currency in iter {
            insert(&mut by_code, &mut by_numeric_code, currency);
        }
        Self {
            by_code: Arc::new(by_code),
            by_numeric_code: Arc::new(by_numeric_code),
        }
    }
}

fn insert(
    by_code: &mut BTreeMap<String, Currency>,
    by_numeric_code: &mut HashMap<String, String>,
    currency: Currency,
) {
    if let Some(previous) = by_code.get(currency.code()) {
        let stale = previous.numeric_code();
        if by_numeric_code.get(stale).map(String::as_str) == Some(currency.code()) {
            by_numeric_code.remove(stale);
        }
    }
    if !currency.numeric_code().is_empty() {
        by_numeric_code.insert(
            currency.numeric_code().to_string(),
            currency.code().to_string(),
        );
    }
    by_code.insert(currency.code().to_string(), currency);
}

impl CurrencySource for Currencies {
    fn find(&self, code: &str) -> Option<Currency> {
        self.currency_by_code(code)
    }

    fn visit(&self, visitor: &mut dyn FnMut(&Currency)) {
        for currency in self.iter() {
            visitor(currency);
        }
    }
}
