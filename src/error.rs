use std::num::ParseIntError;
use thiserror::Error;

/// Everything that can go wrong while reading a `Fraction` from text
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseFractionError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),
    #[error("denominator is 0")]
    ZeroDenominator,
    #[error("no digits to parse")]
    Empty,
    #[error("invalid digit {0:?} for radix {1}")]
    InvalidDigit(char, u32),
    #[error("value does not fit in a 64-bit fraction")]
    Overflow
}
