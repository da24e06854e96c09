//! Rendering and parsing of money amounts.
//!
//! A [`Money`] value is an integer count of minor units plus a
//! [`Currency`](crate::core::Currency). [`Formatter`] renders it through the
//! currency's template and separators; parsing reverses that rendering for
//! any string whose currency can be inferred.
//!
//! # Example
//!
//! ```
//! use waehrung::core::infer_currency_from_str;
//! use waehrung::format::Money;
//!
//! let rendered = Money::new(1000, "GBP").display_with_code();
//! assert_eq!(infer_currency_from_str(&rendered).unwrap().code(), "GBP");
//! ```

mod formatter;
mod money;

pub use formatter::Formatter;
pub use money::Money;
