//! Currency definitions, the currency registry, and currency inference.
//!
//! This module provides the [`Currency`] type, the process-wide registry
//! seeded with ISO 4217 currencies, caller-owned [`Currencies`] collections,
//! and inference of a currency from a formatted money string.

pub mod codes;
mod collection;
mod currency;
mod error;
mod infer;
mod registry;
mod table;

pub use collection::*;
pub use currency::*;
pub use error::*;
pub use infer::*;
pub use registry::*;

pub(crate) use infer::{grapheme_candidates, marked_currency};
