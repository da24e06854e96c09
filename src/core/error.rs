use thiserror::Error;

/// Errors that can occur during currency lookup, inference or money parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CurrencyError {
    /// The code is not present in the registry.
    #[error("currency not found: {0}")]
    NotFound(String),

    /// No registered code or grapheme could be matched in the input text.
    #[error("no currency found in {0:?}")]
    NoCurrencyFound(String),

    /// A money string or decimal value could not be turned into minor units.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
