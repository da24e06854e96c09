//! Currency inference from formatted money strings.
//!
//! Given text such as `"GBP 1.00"`, `"£10.00 GBP"` or `"10,00 kr"`, find the
//! currency that produced it. Resolution order:
//!
//! 1. the leading marker (text before the first digit or whitespace), upper-cased,
//!    as a currency code;
//! 2. the trailing marker (text after the last digit or whitespace), upper-cased,
//!    as a currency code;
//! 3. a grapheme placed where the currency's template puts it, directly next
//!    to the amount (whitespace allowed). Longer graphemes win over shorter
//!    ones (`R$` over `R`), then the lowest code wins (`$1.00` is `ARS`
//!    in the seed table, the first `$` prefix currency in code order).
//!
//! A leading `-` or `+` sign is ignored. Text without any marker fails with
//! [`CurrencyError::NoCurrencyFound`].

use tracing::debug;

use super::currency::{Currency, GraphemePlacement};
use super::error::CurrencyError;

/// A set of currencies that inference can search.
pub trait CurrencySource {
    /// Look up a code, case-insensitively.
    fn find(&self, code: &str) -> Option<Currency>;

    /// Call `visitor` for every currency in ascending code order.
    fn visit(&self, visitor: &mut dyn FnMut(&Currency));
}

/// Infer the currency of `text` from the currencies in `source`.
pub fn infer_currency<S>(source: &S, text: &str) -> Result<Currency, CurrencyError>
where
    S: CurrencySource + ?Sized,
{
    if let Some(currency) = marked_currency(source, text) {
        debug!(text, code = currency.code(), "inferred currency from code");
        return Ok(currency);
    }

    match grapheme_candidates(source, text).into_iter().next() {
        Some(currency) => {
            debug!(text, code = currency.code(), "inferred currency from grapheme");
            Ok(currency)
        }
        None => {
            debug!(text, "no currency marker found");
            Err(CurrencyError::NoCurrencyFound(text.to_string()))
        }
    }
}

/// Currency named by the leading, then the trailing code marker.
pub(crate) fn marked_currency<S>(source: &S, text: &str) -> Option<Currency>
where
    S: CurrencySource + ?Sized,
{
    let body = strip_sign(text.trim());
    [leading_marker(body), trailing_marker(body)]
        .into_iter()
        .filter(|marker| !marker.is_empty())
        .find_map(|marker| source.find(marker))
}

/// Every currency whose grapheme matches `text` with the longest grapheme
/// length, in ascending code order.
pub(crate) fn grapheme_candidates<S>(source: &S, text: &str) -> Vec<Currency>
where
    S: CurrencySource + ?Sized,
{
    let body = strip_sign(text.trim());
    let mut best_len = 0;
    let mut candidates = Vec::new();
    source.visit(&mut |currency| {
        if !grapheme_matches(currency, body) {
            return;
        }
        let len = currency.grapheme().chars().count();
        if len > best_len {
            best_len = len;
            candidates.clear();
        }
        if len == best_len {
            candidates.push(currency.clone());
        }
    });
    candidates
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['-', '+']).map_or(text, str::trim_start)
}

fn is_boundary(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace()
}

fn leading_marker(body: &str) -> &str {
    body.find(is_boundary).map_or(body, |end| &body[..end])
}

fn trailing_marker(body: &str) -> &str {
    body.rfind(is_boundary).map_or(body, |start| {
        // Boundary chars are all single `char`s; skip past the one found.
        let width = body[start..].chars().next().map_or(0, char::len_utf8);
        &body[start + width..]
    })
}

fn grapheme_matches(currency: &Currency, body: &str) -> bool {
    let grapheme = currency.grapheme();
    if grapheme.is_empty() {
        return false;
    }
    match currency.placement() {
        GraphemePlacement::Before => body
            .strip_prefix(grapheme)
            .and_then(|rest| rest.trim_start().chars().next())
            .is_some_and(|c| c.is_ascii_digit()),
        GraphemePlacement::After => body
            .strip_suffix(grapheme)
            .and_then(|rest| rest.trim_end().chars().next_back())
            .is_some_and(|c| c.is_ascii_digit()),
        GraphemePlacement::Absent => false,
    }
}
