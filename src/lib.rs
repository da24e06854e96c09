//! # waehrung
//!
//! Currency registry, lookup, and currency inference from formatted money
//! strings.
//!
//! Amounts are integer minor units, never floating point. Currencies carry
//! their ISO 4217 codes together with the display rules (grapheme, template,
//! separators) needed to render and recognise them.
//!
//! ## Quick Start
//!
//! ```rust
//! use waehrung::core::*;
//!
//! // Lookups are case-insensitive.
//! assert_eq!(resolve("usd"), resolve("USD"));
//!
//! // Unknown codes still resolve, keeping the caller's spelling as grapheme.
//! assert_eq!(resolve("Doubloon").grapheme(), "Doubloon");
//!
//! // Registration is visible to every later lookup.
//! add_currency("KLINGONDOLLAR", "$", "$1", ".", ",", 2);
//! assert_eq!(get_currency("klingondollar").unwrap().fraction(), 2);
//!
//! // Inference recovers the currency of a formatted string.
//! assert_eq!(infer_currency_from_str("GBP 1.00").unwrap().code(), "GBP");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Currency type, registry, collections, inference |
//! | `format` | `Money` rendering and parsing |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "format")]
pub mod format;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
