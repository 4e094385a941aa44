//! Error types for constant resolution.

use thiserror::Error;

/// Error type for a literal that looks numeric but cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// No digits after the sign or radix prefix.
    #[error("missing digits")]
    MissingDigits,

    /// A character that is not a digit in the literal's radix.
    #[error("invalid digit {digit:?} for base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// Value does not fit in 64 bits.
    #[error("value does not fit in 64 bits")]
    OutOfRange,
}

/// Error type for resolving definitions to integers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An alias names a key that does not exist, or names a string constant.
    #[error("can't resolve: {key} = {value}")]
    UnresolvableAlias { key: String, value: String },

    /// A chain of aliases loops back onto itself.
    #[error("alias cycle: {}", chain.join(" -> "))]
    CyclicAlias { chain: Vec<String> },

    /// A numeric-looking value that is not a valid integer.
    #[error("invalid literal: {key} = {value}: {source}")]
    InvalidLiteral {
        key: String,
        value: String,
        #[source]
        source: LiteralError,
    },
}

impl ResolveError {
    /// Creates a new UnresolvableAlias error.
    pub fn unresolvable(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnresolvableAlias {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Key of the definition that failed to resolve.
    pub fn key(&self) -> &str {
        match self {
            Self::UnresolvableAlias { key, .. } | Self::InvalidLiteral { key, .. } => key,
            Self::CyclicAlias { chain } => chain.first().map(String::as_str).unwrap_or(""),
        }
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
