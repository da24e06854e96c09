use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// Template used for currencies synthesized from unknown codes.
pub(crate) const FALLBACK_TEMPLATE: &str = "1 $";

/// Upper-case a currency code into its canonical registry key.
pub(crate) fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

/// Where the grapheme sits relative to the amount in a currency template.
///
/// Templates mark the amount with `1` and the grapheme with `$`, so `"$1"`
/// renders `$10.00` and `"1 $"` renders `10,00 kr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphemePlacement {
    /// Grapheme precedes the amount.
    Before,
    /// Grapheme follows the amount.
    After,
    /// Template has no grapheme slot.
    Absent,
}

impl GraphemePlacement {
    /// Derive the placement from a template string.
    pub fn of_template(template: &str) -> Self {
        match (template.find('$'), template.find('1')) {
            (None, _) => Self::Absent,
            (Some(grapheme), Some(amount)) if grapheme > amount => Self::After,
            (Some(_), _) => Self::Before,
        }
    }
}

/// A currency definition: ISO 4217 style code plus display rules.
///
/// Equality, hashing and ordering consider the code only. The code is
/// upper-cased on construction and on deserialization.
///
/// ```
/// use waehrung::core::*;
///
/// let gold = CurrencyBuilder::new("gold").template("1 $").grapheme("oz").build();
/// assert_eq!(gold.code(), "GOLD");
/// assert_eq!(gold, Currency::new("Gold"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    #[serde(deserialize_with = "deserialize_code")]
    code: String,
    #[serde(default)]
    numeric_code: String,
    #[serde(default)]
    fraction: u32,
    #[serde(default)]
    grapheme: String,
    #[serde(default)]
    template: String,
    #[serde(default)]
    decimal: String,
    #[serde(default)]
    thousand: String,
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|code| normalize_code(&code))
}

impl Currency {
    /// Create a currency with only a code; every other field is empty.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            code: normalize_code(code.as_ref()),
            numeric_code: String::new(),
            fraction: 0,
            grapheme: String::new(),
            template: String::new(),
            decimal: String::new(),
            thousand: String::new(),
        }
    }

    /// Stand-in for a code missing from the registry. The grapheme keeps the
    /// caller's spelling so the code still renders as it was written.
    pub(crate) fn synthetic(raw_code: &str) -> Self {
        CurrencyBuilder::new(raw_code)
            .grapheme(raw_code)
            .template(FALLBACK_TEMPLATE)
            .build()
    }

    /// Alphabetic code, always upper-case (e.g. "USD").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// ISO 4217 numeric code (e.g. "840"); empty when unknown.
    pub fn numeric_code(&self) -> &str {
        &self.numeric_code
    }

    /// Number of minor-unit digits (2 for cents).
    pub fn fraction(&self) -> u32 {
        self.fraction
    }

    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn decimal(&self) -> &str {
        &self.decimal
    }

    pub fn thousand(&self) -> &str {
        &self.thousand
    }

    /// Placement of the grapheme according to the template.
    pub fn placement(&self) -> GraphemePlacement {
        GraphemePlacement::of_template(&self.template)
    }

    /// Case-insensitive code comparison against a raw string.
    pub fn has_code(&self, code: &str) -> bool {
        self.code == normalize_code(code)
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Builder for [`Currency`] definitions.
pub struct CurrencyBuilder {
    currency: Currency,
}

impl CurrencyBuilder {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self {
            currency: Currency::new(code),
        }
    }

    pub fn numeric_code(mut self, numeric_code: impl Into<String>) -> Self {
        self.currency.numeric_code = numeric_code.into();
        self
    }

    pub fn fraction(mut self, fraction: u32) -> Self {
        self.currency.fraction = fraction;
        self
    }

    pub fn grapheme(mut self, grapheme: impl Into<String>) -> Self {
        self.currency.grapheme = grapheme.into();
        self
    }

    /// Placement template, `1` for the amount and `$` for the grapheme.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.currency.template = template.into();
        self
    }

    pub fn decimal(mut self, decimal: impl Into<String>) -> Self {
        self.currency.decimal = decimal.into();
        self
    }

    pub fn thousand(mut self, thousand: impl Into<String>) -> Self {
        self.currency.thousand = thousand.into();
        self
    }

    pub fn build(self) -> Currency {
        self.currency
    }
}
