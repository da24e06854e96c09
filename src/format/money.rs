use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{
    Currency, CurrencyError, CurrencySource, GraphemePlacement, grapheme_candidates,
    marked_currency, registry, resolve,
};

/// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// An amount in integer minor units of a currency.
///
/// Equality compares the amount and the currency code.
///
/// ```
/// use waehrung::format::Money;
///
/// let price = Money::new(1000, "GBP");
/// assert_eq!(price.display(), "£10.00");
/// assert_eq!(price.display_with_code(), "£10.00 GBP");
///
/// let parsed: Money = "£10.00 GBP".parse().unwrap();
/// assert_eq!(parsed, price);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl Money {
    /// Create money in the currency registered under `code`. Unknown codes
    /// get a synthetic currency, see [`resolve`].
    pub fn new(amount: i64, code: &str) -> Self {
        Self::with_currency(amount, resolve(code))
    }

    pub fn with_currency(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Convert a major-unit decimal, rounding half away from zero to the
    /// currency's fraction.
    pub fn from_decimal(value: Decimal, code: &str) -> Result<Self, CurrencyError> {
        let currency = resolve(code);
        let fraction = currency.fraction();
        if fraction > MAX_DECIMAL_SCALE {
            return Err(CurrencyError::InvalidAmount(format!(
                "{value}: {fraction} minor digits exceed decimal precision"
            )));
        }
        let mut scaled =
            value.round_dp_with_strategy(fraction, RoundingStrategy::MidpointAwayFromZero);
        scaled.rescale(fraction);
        let amount = i64::try_from(scaled.mantissa())
            .map_err(|_| CurrencyError::InvalidAmount(format!("{value} is out of range")))?;
        Ok(Self { amount, currency })
    }

    /// Parse a formatted money string, inferring its currency from `source`.
    ///
    /// Accepts what [`display`](Self::display) and
    /// [`display_with_code`](Self::display_with_code) produce: an optional
    /// sign, the code and/or grapheme, and a number using the currency's
    /// separators. Without a code, the currencies sharing the matched
    /// grapheme are tried in code order and the first whose separators fit
    /// the number wins, so `"$1,000.00"` parses as `AUD` although inference
    /// alone yields `ARS`.
    pub fn parse_with<S>(source: &S, text: &str) -> Result<Self, CurrencyError>
    where
        S: CurrencySource + ?Sized,
    {
        let candidates = match marked_currency(source, text) {
            Some(currency) => vec![currency],
            None => grapheme_candidates(source, text),
        };
        if candidates.is_empty() {
            return Err(CurrencyError::NoCurrencyFound(text.to_string()));
        }

        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let body = body.trim();

        candidates
            .into_iter()
            .find_map(|currency| {
                let magnitude = minor_units(strip_markers(body, &currency), &currency)?;
                let signed = if negative { -magnitude } else { magnitude };
                let amount = i64::try_from(signed).ok()?;
                Some(Self { amount, currency })
            })
            .ok_or_else(|| CurrencyError::InvalidAmount(text.to_string()))
    }

    /// Amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Amount in major units, `None` when the fraction exceeds what a
    /// `Decimal` can represent.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::try_new(self.amount, self.currency.fraction()).ok()
    }

    /// Render with the currency's grapheme and separators.
    pub fn display(&self) -> String {
        self.currency.formatter().format(self.amount)
    }

    /// Render like [`display`](Self::display), followed by the currency code.
    pub fn display_with_code(&self) -> String {
        format!("{} {}", self.display(), self.currency.code())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Money {
    type Err = CurrencyError;

    /// Parse against the global registry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(registry(), s)
    }
}

/// Remove the code (either end, any case) and the grapheme (where the
/// template puts it) around the number.
fn strip_markers<'a>(body: &'a str, currency: &Currency) -> &'a str {
    let mut body = body;
    if let Some(rest) = strip_code_prefix(body, currency) {
        body = rest.trim_start();
    }
    if let Some(rest) = strip_code_suffix(body, currency) {
        body = rest.trim_end();
    }

    let grapheme = currency.grapheme();
    if grapheme.is_empty() {
        return body;
    }
    match currency.placement() {
        GraphemePlacement::Before => body.strip_prefix(grapheme).map_or(body, str::trim_start),
        GraphemePlacement::After => body.strip_suffix(grapheme).map_or(body, str::trim_end),
        GraphemePlacement::Absent => body,
    }
}

fn strip_code_prefix<'a>(body: &'a str, currency: &Currency) -> Option<&'a str> {
    let len = currency.code().chars().count();
    if len == 0 {
        return None;
    }
    let end = body.char_indices().nth(len).map_or(body.len(), |(i, _)| i);
    let head = &body[..end];
    (head.chars().count() == len && currency.has_code(head)).then(|| &body[end..])
}

fn strip_code_suffix<'a>(body: &'a str, currency: &Currency) -> Option<&'a str> {
    let len = currency.code().chars().count();
    if len == 0 {
        return None;
    }
    let (start, _) = body.char_indices().rev().nth(len - 1)?;
    currency.has_code(&body[start..]).then(|| &body[..start])
}

/// Turn `1,234.56`-style text into minor units using the currency's
/// separators. `None` on anything but digits and separators, and for
/// currencies with minor units but no decimal separator.
fn minor_units(body: &str, currency: &Currency) -> Option<i128> {
    let fraction = currency.fraction() as usize;
    let decimal = currency.decimal();
    let (int_part, frac_part) = match (fraction, decimal) {
        (0, _) => (body, ""),
        (_, "") => return None,
        _ => body.rsplit_once(decimal).unwrap_or((body, "")),
    };

    let int_digits = match currency.thousand() {
        "" => int_part.to_string(),
        thousand => int_part.replace(thousand, ""),
    };
    if int_digits.is_empty() && frac_part.is_empty() {
        return None;
    }
    if frac_part.len() > fraction
        || !int_digits.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut value: i128 = 0;
    for digit in int_digits.bytes().chain(frac_part.bytes()) {
        value = value.checked_mul(10)?.checked_add(i128::from(digit - b'0'))?;
    }
    if value == 0 {
        return Some(0);
    }
    let padding = u32::try_from(fraction - frac_part.len()).ok()?;
    value.checked_mul(10i128.checked_pow(padding)?)
}
