//! Currency inference against the seeded global registry and isolated sets.

use waehrung::core::*;

fn infer(text: &str) -> Result<String, CurrencyError> {
    infer_currency_from_str(text).map(|c| c.code().to_string())
}

// --- Code markers ---

#[test]
fn leading_code() {
    assert_eq!(infer_currency_from_str("GBP 1.00").unwrap(), resolve("GBP"));
    assert_eq!(infer_currency_from_str("USD 1.00").unwrap(), resolve("USD"));
}

#[test]
fn inferred_currency_carries_registry_fields() {
    let gbp = infer_currency_from_str("GBP 1.00").unwrap();
    assert_eq!(gbp.numeric_code(), "826");
    assert_eq!(gbp.grapheme(), "£");
    assert_eq!(gbp.fraction(), 2);
}

#[test]
fn trailing_code() {
    assert_eq!(infer("£10.00 GBP").unwrap(), "GBP");
    assert_eq!(infer("1 234,56 kr SEK").unwrap(), "SEK");
    assert_eq!(infer("10.00 CHF").unwrap(), "CHF");
}

#[test]
fn code_case_is_ignored() {
    assert_eq!(infer("gbp 1.00").unwrap(), "GBP");
    assert_eq!(infer("1.00 Usd").unwrap(), "USD");
}

#[test]
fn negative_amounts() {
    assert_eq!(infer("-£10.00 GBP").unwrap(), "GBP");
    assert_eq!(infer("-€5.00").unwrap(), "EUR");
    assert_eq!(infer("- USD 5").unwrap(), "USD");
}

// --- Grapheme markers ---

#[test]
fn unique_graphemes() {
    assert_eq!(infer("€1,000.00").unwrap(), "EUR");
    assert_eq!(infer("¥1,000").unwrap(), "JPY");
    assert_eq!(infer("₹250.00").unwrap(), "INR");
    assert_eq!(infer("10,00 zł").unwrap(), "PLN");
    assert_eq!(infer("1.000,00 ₽").unwrap(), "RUB");
}

#[test]
fn longer_grapheme_beats_shorter() {
    assert_eq!(infer("R$ 10,00").unwrap(), "BRL");
    assert_eq!(infer("RM10.00").unwrap(), "MYR");
    assert_eq!(infer("R10.00").unwrap(), "ZAR");
    assert_eq!(infer("NT$100").unwrap(), "TWD");
}

#[test]
fn shared_grapheme_picks_lowest_code() {
    // "$" prefixes ARS, AUD, ..., USD, XCD: the lowest code wins.
    assert_eq!(infer("$1,000.00").unwrap(), "ARS");
    // "£" prefixes EGP, FKP, GBP, ...
    assert_eq!(infer("£10.00").unwrap(), "EGP");
    // "kr" follows the amount for DKK, ISK, NOK and SEK.
    assert_eq!(infer("10,00 kr").unwrap(), "DKK");
}

#[test]
fn grapheme_position_follows_template() {
    // SYP places "£" after the amount, every other "£" currency before it.
    assert_eq!(infer("10.00 £").unwrap(), "SYP");
    assert!(infer("kr 10,00").is_err());
}

#[test]
fn code_match_beats_grapheme_match() {
    assert_eq!(infer("$1.00 USD").unwrap(), "USD");
    assert_eq!(infer("£1.00 GIP").unwrap(), "GIP");
}

// --- Failures ---

#[test]
fn plain_number_has_no_currency() {
    assert_eq!(
        infer_currency_from_str("1.00"),
        Err(CurrencyError::NoCurrencyFound("1.00".into()))
    );
}

#[test]
fn unknown_markers_fail() {
    assert!(infer("XYZ 1.00").is_err());
    assert!(infer("1.00 dollars").is_err());
    assert!(infer("").is_err());
    assert!(infer("€").is_err());
}

// --- Isolated sources ---

#[test]
fn isolated_registry_has_its_own_graphemes() {
    let local = CurrencyRegistry::empty();
    local.add_currency("USD", "$", "$1", ".", ",", 2);
    local.add_currency("CAD", "$", "$1", ".", ",", 2);
    assert_eq!(local.infer("$5.00").unwrap().code(), "CAD");
    assert!(local.infer("€5.00").is_err());
}

#[test]
fn collection_as_source() {
    let cs = Currencies::new()
        .add(CurrencyBuilder::new("USD").grapheme("$").template("$1").build())
        .add(CurrencyBuilder::new("EUR").grapheme("€").template("1 $").build());
    assert_eq!(infer_currency(&cs, "5 €").unwrap().code(), "EUR");
    assert_eq!(infer_currency(&cs, "$5").unwrap().code(), "USD");
    assert_eq!(infer_currency(&cs, "eur 5").unwrap().code(), "EUR");
    assert!(infer_currency(&cs, "£5").is_err());
}

#[test]
fn registered_currency_becomes_inferable() {
    let local = CurrencyRegistry::new();
    assert!(local.infer("10 ☼").is_err());
    local.add_currency("SUN", "☼", "1 $", ".", ",", 0);
    assert_eq!(local.infer("10 ☼").unwrap().code(), "SUN");
}

#[test]
fn empty_grapheme_never_matches() {
    let local = CurrencyRegistry::empty();
    local.add_currency("GOLD", "", "1$", "", "", 0);
    assert!(local.infer("100").is_err());
    assert_eq!(local.infer("100 GOLD").unwrap().code(), "GOLD");
}
