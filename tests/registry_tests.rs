use std::thread;

use waehrung::core::*;

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[test]
fn resolve_is_case_insensitive() {
    for (code, expected) in [(codes::EUR, "EUR"), ("EUR", "EUR"), ("Eur", "EUR"), ("eur", "EUR")] {
        assert_eq!(resolve(code).code(), expected);
    }
}

#[test]
fn resolve_equality_across_case() {
    for (code, other) in [(codes::EUR, "EUR"), ("EUR", "EUR"), ("Eur", "EUR"), ("usd", "USD")] {
        assert_eq!(resolve(code), resolve(other));
    }
}

#[test]
fn resolve_returns_registry_fields() {
    let usd = resolve("usd");
    assert_eq!(usd.numeric_code(), "840");
    assert_eq!(usd.fraction(), 2);
    assert_eq!(usd.grapheme(), "$");
    assert_eq!(usd.template(), "$1");
    assert_eq!(usd.decimal(), ".");
    assert_eq!(usd.thousand(), ",");
}

#[test]
fn resolve_unknown_keeps_raw_code_as_grapheme() {
    let c = resolve("RANDOM");
    assert_eq!(c.grapheme(), "RANDOM");

    let c = resolve("Doubloon");
    assert_eq!(c.code(), "DOUBLOON");
    assert_eq!(c.grapheme(), "Doubloon");
    assert_eq!(c.fraction(), 0);
    assert_eq!(c.decimal(), "");
    assert_eq!(c.thousand(), "");
    assert_eq!(c.numeric_code(), "");
}

#[test]
fn resolve_unknown_does_not_register() {
    resolve("NEVERREGISTERED");
    assert!(get_currency("NEVERREGISTERED").is_none());
}

#[test]
fn resolved_values_are_detached_copies() {
    let local = CurrencyRegistry::new();
    let before = local.resolve("GBP");
    local.add_currency("GBP", "GB£", "$1", ".", ",", 2);
    assert_eq!(before.grapheme(), "£");
    assert_eq!(local.resolve("GBP").grapheme(), "GB£");
}

// ---------------------------------------------------------------------------
// Registration and lookup
// ---------------------------------------------------------------------------

#[test]
fn add_currency_template() {
    add_currency("GOLD", "", "1$", "", "", 0);
    assert_eq!(resolve("GOLD").template(), "1$");
    assert_eq!(resolve("gold").template(), "1$");
}

#[test]
fn get_currency_after_registration() {
    add_currency("KLINGONDOLLAR", "$", "$1", ".", ",", 2);
    let c = get_currency("KLINGONDOLLAR").unwrap();
    assert_eq!(c.code(), "KLINGONDOLLAR");
    assert_eq!(c.grapheme(), "$");
    assert_eq!(c.template(), "$1");
    assert_eq!(c.decimal(), ".");
    assert_eq!(c.thousand(), ",");
    assert_eq!(c.fraction(), 2);
    assert_eq!(c.numeric_code(), "");
}

#[test]
fn registration_normalizes_code() {
    add_currency("schilling", "S", "1 $", ",", ".", 2);
    assert_eq!(get_currency("SCHILLING").unwrap().code(), "SCHILLING");
    assert!(registry().codes().contains(&"SCHILLING".to_string()));
}

#[test]
fn get_currency_missing() {
    assert!(get_currency("NOT-A-CODE").is_none());
    assert!(get_currency("I*am*Not*a*Currency").is_none());
    assert_eq!(
        registry().require("NOT-A-CODE"),
        Err(CurrencyError::NotFound("NOT-A-CODE".into()))
    );
}

#[test]
fn every_code_constant_is_registered() {
    for code in codes::ALL_CODES {
        let c = get_currency(code).unwrap_or_else(|| panic!("{code} missing"));
        assert_eq!(c.code(), *code);
        assert_eq!(c.numeric_code().len(), 3);
    }
}

// ---------------------------------------------------------------------------
// Isolated registries
// ---------------------------------------------------------------------------

#[test]
fn isolated_registry_does_not_leak() {
    let local = CurrencyRegistry::new();
    local.add_currency("LOCALONLY", "L", "$1", ".", ",", 2);
    assert!(local.get("localonly").is_some());
    assert!(get_currency("LOCALONLY").is_none());
}

#[test]
fn register_keeps_numeric_code() {
    let local = CurrencyRegistry::empty();
    local.register(
        CurrencyBuilder::new("xts")
            .numeric_code("963")
            .fraction(0)
            .build(),
    );
    assert_eq!(local.get("XTS").unwrap().numeric_code(), "963");
    assert_eq!(
        local.snapshot().currency_by_numeric_code("963").unwrap().code(),
        "XTS"
    );
}

#[test]
fn overwrite_replaces_every_field() {
    let local = CurrencyRegistry::new();
    local.add_currency("usd", "US$", "1 $", ",", ".", 3);
    let usd = local.get("USD").unwrap();
    assert_eq!(usd.grapheme(), "US$");
    assert_eq!(usd.fraction(), 3);
    assert_eq!(usd.numeric_code(), "");
}

#[test]
fn concurrent_reads_during_registration() {
    let local = CurrencyRegistry::new();
    let before = local.len();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                local.add_currency(&format!("T{i:04}"), "", "1", "", "", 0);
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..500 {
                    assert_eq!(local.resolve("gbp").grapheme(), "£");
                    assert_eq!(local.infer("USD 1.00").unwrap().code(), "USD");
                }
            });
        }
    });

    assert_eq!(local.len(), before + 500);
    assert!(local.contains("T0499"));
}

#[test]
fn concurrent_reads_during_overwrite() {
    let local = CurrencyRegistry::new();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                let grapheme = if i % 2 == 0 { "GB£" } else { "£" };
                local.add_currency("GBP", grapheme, "$1", ".", ",", 2);
            }
        });
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..500 {
                    let gbp = local.resolve("gbp");
                    assert!(matches!(gbp.grapheme(), "£" | "GB£"), "{}", gbp.grapheme());
                    assert_eq!(gbp.code(), "GBP");
                    assert_eq!(gbp.template(), "$1");
                    assert_eq!(gbp.decimal(), ".");
                    assert_eq!(gbp.thousand(), ",");
                    assert_eq!(gbp.fraction(), 2);
                }
            });
        }
    });

    assert_eq!(local.resolve("GBP").grapheme(), "£");
}

// ---------------------------------------------------------------------------
// Loading definitions through serde
// ---------------------------------------------------------------------------

#[test]
fn extend_from_json_definitions() {
    let json = r#"[
        {"code": "btc", "numeric_code": "", "fraction": 8, "grapheme": "₿", "template": "$1", "decimal": ".", "thousand": ","},
        {"code": "Sat"}
    ]"#;
    let defs: Vec<Currency> = serde_json::from_str(json).unwrap();
    assert_eq!(defs[0].code(), "BTC");
    assert_eq!(defs[1].code(), "SAT");
    assert_eq!(defs[1].template(), "");

    let local = CurrencyRegistry::new();
    local.extend(defs);
    assert_eq!(local.get("btc").unwrap().fraction(), 8);
    assert_eq!(local.infer("₿0.5").unwrap().code(), "BTC");
    assert_eq!(local.infer("12 sat").unwrap().code(), "SAT");
}

#[test]
fn serialize_round_trip() {
    let eur = resolve("EUR");
    let json = serde_json::to_string(&eur).unwrap();
    let back: Currency = serde_json::from_str(&json).unwrap();
    assert_eq!(back, eur);
    assert_eq!(back.grapheme(), "€");
    assert_eq!(back.numeric_code(), "978");
}
