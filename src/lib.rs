//! Exact fractions and a Stern-Brocot search for the extremal fraction with
//! bounded numerator and denominator that satisfies a monotone predicate.

mod error;
mod fraction;
mod search;

pub use self::error::*;
pub use self::fraction::*;
pub use self::search::*;
