use crate::ParseFractionError;

use num_traits::{Num, One, Signed, Zero};
use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr
};

/// Find the greatest common divisor of two numbers
pub fn gcd(mut x: u64, mut y: u64) -> u64 {
    // https://en.wikipedia.org/wiki/Binary_GCD_algorithm
    let mut common = 0;

    // Otherwise this will loop forever since 0/2 is also even
    if x == 0 {
        return y;
    }
    if y == 0 {
        return x;
    }

    // gcd(4, 6) = gcd(2, 3) * 2
    while x % 2 == 0 && y % 2 == 0 {
        x /= 2;
        y /= 2;
        common += 1;
    }

    // gcd(2, 3) = gcd(1, 3)
    while x % 2 == 0 {
        x /= 2;
    }

    loop {
        while y % 2 == 0 {
            y /= 2;
        }

        // Keep x <= y so the subtraction below never underflows
        if x > y {
            mem::swap(&mut x, &mut y);
        }

        y -= x;

        if y == 0 {
            break;
        }
    }

    x << common
}
/// Abs function that returns an unsigned integer and correctly handles overflowing
fn abs(i: i64) -> u64 {
    i.wrapping_abs() as u64
}

/// An exact rational number p/q stored as two `i64`s.
///
/// Nothing is normalized unless asked for: `Fraction::new(2, 4)` keeps its
/// parts, while `Fraction::new_reduced(2, 4)` stores 1/2. Comparisons work on
/// the value (2/4 == 1/2) by cross-multiplying, which is only meaningful while
/// denominators are positive. A zero denominator is never rejected; 1/0 is
/// used as a symbolic infinity by the mediant search.
#[derive(Clone, Copy)]
pub struct Fraction {
    numerator: i64,
    denominator: i64
}
impl Default for Fraction {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
impl Fraction {
    /// 0/1
    pub const ZERO: Self = Self { numerator: 0, denominator: 1 };
    /// 1/1
    pub const ONE: Self = Self { numerator: 1, denominator: 1 };
    /// 1/0, greater than every fraction with a positive denominator
    pub const INFINITY: Self = Self { numerator: 1, denominator: 0 };

    /// Construct a fraction from its parts, as given
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self { numerator, denominator }
    }
    /// Construct a fraction in lowest terms, with the sign on the numerator
    pub fn new_reduced(numerator: i64, denominator: i64) -> Self {
        Self::new(numerator, denominator).reduce()
    }
    /// Construct a new fraction instance by parsing a decimal string such as
    /// `-12.375` in the given radix. The result is in lowest terms.
    ///
    /// ## Panics
    /// Panics if the radix is not in `2..=36`, like `i64::from_str_radix`
    pub fn from_str_radix(input: &str, radix: u32) -> Result<Self, ParseFractionError> {
        assert!((2..=36).contains(&radix), "radix must be in 2..=36, got {}", radix);

        let mut input = input.chars().peekable();

        let negative = input.peek() == Some(&'-');
        if negative {
            input.next();
        }

        let radix_fraction = Self::from(radix);
        let mut result = Self::ZERO;
        let mut digits = 0;

        while let Some(&c) = input.peek() {
            if c == '.' {
                break;
            }
            let digit = c.to_digit(radix).ok_or(ParseFractionError::InvalidDigit(c, radix))?;
            input.next();
            digits += 1;
            result = result.checked_mul(radix_fraction)
                .and_then(|r| r.checked_add(Self::from(digit)))
                .ok_or(ParseFractionError::Overflow)?;
        }

        if input.peek() == Some(&'.') {
            input.next();

            let mut place = Self::ONE;

            for c in input {
                let digit = c.to_digit(radix).ok_or(ParseFractionError::InvalidDigit(c, radix))?;
                digits += 1;
                place = place.checked_div(radix_fraction).ok_or(ParseFractionError::Overflow)?;
                result = place.checked_mul(Self::from(digit))
                    .and_then(|d| result.checked_add(d))
                    .ok_or(ParseFractionError::Overflow)?;
            }
        }

        if digits == 0 {
            return Err(ParseFractionError::Empty);
        }
        if negative {
            result.numerator = result.numerator.checked_neg().ok_or(ParseFractionError::Overflow)?;
        }
        Ok(result)
    }
    /// Rebuild a fraction from its continued fraction terms [a0; a1, a2, ...].
    /// No terms at all gives 1/0.
    pub fn from_continued_fraction(terms: &[i64]) -> Self {
        // Convergent recurrence h(n) = a(n) * h(n-1) + h(n-2), same for k
        let (mut h, mut h_prev) = (1, 0);
        let (mut k, mut k_prev) = (0, 1);
        for &a in terms {
            let next_h = a * h + h_prev;
            let next_k = a * k + k_prev;
            h_prev = mem::replace(&mut h, next_h);
            k_prev = mem::replace(&mut k, next_k);
        }
        Self::new(h, k)
    }
    /// Return the numerator
    pub fn numerator(self) -> i64 {
        self.numerator
    }
    /// Return the denominator
    pub fn denominator(self) -> i64 {
        self.denominator
    }
    /// Returns true if both parts are stored exactly the same. Unlike `==`,
    /// 1/2 is not identical to 2/4.
    pub fn is_identical(self, other: Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
    /// Find the lowest possible denominator for this fraction and make sure
    /// the denominator is not negative. 0/0 stays 0/0.
    pub fn reduce(self) -> Self {
        let gcd = gcd(abs(self.numerator), abs(self.denominator)) as i64;
        if gcd == 0 {
            return self;
        }
        let mut reduced = Self {
            numerator: self.numerator / gcd,
            denominator: self.denominator / gcd
        };
        if reduced.denominator < 0 {
            reduced.numerator = -reduced.numerator;
            reduced.denominator = -reduced.denominator;
        }
        reduced
    }
    /// Swap numerator and denominator. The reciprocal of 0/1 is 1/0.
    pub fn recip(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }
    /// The mediant (a+c)/(b+d) of a/b and c/d. It always lies strictly between
    /// the two when they differ and both denominators are positive.
    pub fn mediant(self, other: Self) -> Self {
        Self::new(self.numerator + other.numerator, self.denominator + other.denominator)
    }
    /// Returns true if this fraction is 0. This differs from comparison with
    /// 0/1 in that there is no need to cross-multiply.
    pub fn is_zero(self) -> bool {
        self.numerator == 0 && self.denominator != 0
    }
    /// Returns true if this fraction is 1
    pub fn is_one(self) -> bool {
        self.numerator == self.denominator && self.denominator != 0
    }
    /// Returns true for n/0 with a nonzero n
    pub fn is_infinite(self) -> bool {
        self.denominator == 0 && self.numerator != 0
    }
    /// Calculates the (lossy) decimal result of this fraction
    pub fn decimal(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
    /// Largest integer not greater than this fraction
    pub fn floor(self) -> i64 {
        if self.denominator < 0 {
            (-self.numerator).div_euclid(-self.denominator)
        } else {
            self.numerator.div_euclid(self.denominator)
        }
    }
    /// Continued fraction terms of this fraction, using Euclid's algorithm.
    /// The first term is the floor and may be negative, the rest are positive.
    pub fn continued_fraction(self) -> SmallVec<[i64; 16]> {
        let mut terms = SmallVec::new();
        let Self { mut numerator, mut denominator } = self;
        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }
        while denominator != 0 {
            let term = numerator.div_euclid(denominator);
            terms.push(term);
            let rest = numerator - term * denominator;
            numerator = mem::replace(&mut denominator, rest);
        }
        terms
    }

    /// Adds another integer without reducing: (n + x*d)/d
    pub fn add_int(self, x: i64) -> Self {
        Self::new(self.numerator + x * self.denominator, self.denominator)
    }
    /// Subtracts another integer without reducing: (n - x*d)/d
    pub fn sub_int(self, x: i64) -> Self {
        Self::new(self.numerator - x * self.denominator, self.denominator)
    }
    /// Multiplies by an integer and reduces
    pub fn mul_int(self, x: i64) -> Self {
        Self::new_reduced(self.numerator * x, self.denominator)
    }
    /// Divides by an integer. If x divides the numerator the quotient is taken
    /// directly and the denominator is kept, otherwise the denominator is
    /// scaled and the result reduced.
    pub fn div_int(self, x: i64) -> Self {
        if x != 0 && self.numerator % x == 0 {
            Self::new(self.numerator / x, self.denominator)
        } else {
            Self::new_reduced(self.numerator, self.denominator * x)
        }
    }

    /// Calculates addition, but returns None on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(other.denominator)?;
        let right = other.numerator.checked_mul(self.denominator)?;
        Some(Self::new_reduced(left.checked_add(right)?, self.denominator.checked_mul(other.denominator)?))
    }
    /// Calculates subtraction, but returns None on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(other.denominator)?;
        let right = other.numerator.checked_mul(self.denominator)?;
        Some(Self::new_reduced(left.checked_sub(right)?, self.denominator.checked_mul(other.denominator)?))
    }
    /// Calculates multiplication, but returns None on overflow
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        Some(Self::new_reduced(
            self.numerator.checked_mul(other.numerator)?,
            self.denominator.checked_mul(other.denominator)?
        ))
    }
    /// Calculates division, but returns None on overflow or if other is 0
    pub fn checked_div(self, other: Self) -> Option<Self> {
        if other.numerator == 0 {
            return None;
        }
        Some(Self::new_reduced(
            self.numerator.checked_mul(other.denominator)?,
            self.denominator.checked_mul(other.numerator)?
        ))
    }
    /// Calculates remainder, but returns None on overflow or if other is 0
    pub fn checked_rem(self, other: Self) -> Option<Self> {
        let left = self.numerator.checked_mul(other.denominator)?;
        let right = other.numerator.checked_mul(self.denominator)?;
        Some(Self::new_reduced(left.checked_rem(right)?, self.denominator.checked_mul(other.denominator)?))
    }

    fn cross(self, other: Self) -> (i128, i128) {
        (
            self.numerator as i128 * other.denominator as i128,
            other.numerator as i128 * self.denominator as i128
        )
    }
}
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        let (left, right) = self.cross(*other);
        left == right
    }
}
impl Eq for Fraction {}
impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = self.cross(*other);
        left.cmp(&right)
    }
}
impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        *self == Self::from(*other)
    }
}
impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.partial_cmp(&Self::from(*other))
    }
}
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values must hash equally, so hash the canonical form
        let reduced = self.reduce();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reduced = self.reduce();
        if reduced.denominator == 1 {
            write!(f, "{}", reduced.numerator)
        } else {
            write!(f, "{}/{}", reduced.numerator, reduced.denominator)
        }
    }
}
impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
impl Neg for Fraction {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if let Some(numerator) = self.numerator.checked_neg() {
            self.numerator = numerator;
        } else if let Some(denominator) = self.denominator.checked_neg() {
            self.denominator = denominator;
        } else {
            // Both parts are i64::MIN, and -MIN/MIN == -1/1
            self.numerator = -1;
            self.denominator = 1;
        }
        self
    }
}
macro_rules! impl_from {
    ($($int:ident),*) => {
        $(impl From<$int> for Fraction {
            fn from(i: $int) -> Self {
                Self {
                    numerator: i as _,
                    denominator: 1
                }
            }
        })*
    }
}
impl_from!(u8, u16, u32, i8, i16, i32, i64);

impl From<(i64, i64)> for Fraction {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

// Between two fractions the operators always reduce. Overflow is not checked,
// so it behaves like the primitive operators: a panic in debug builds and
// wrapping in release builds. Use the checked_* methods to catch it.
macro_rules! impl_op {
    ($($trait:ident $fn:ident = $int_fn:ident, $compute:expr),*; $($trait_assign:ident $fn_assign:ident = ($op_assign:tt)),*) => {
        $(impl $trait for Fraction {
            type Output = Self;
            fn $fn(self, other: Self) -> Self {
                let compute: fn(Self, Self) -> Self = $compute;
                compute(self, other)
            }
        }
        impl $trait<i64> for Fraction {
            type Output = Self;
            fn $fn(self, other: i64) -> Self {
                self.$int_fn(other)
            }
        })*
        $(impl $trait_assign for Fraction {
            fn $fn_assign(&mut self, other: Self) {
                *self = *self $op_assign other;
            }
        }
        impl $trait_assign<i64> for Fraction {
            fn $fn_assign(&mut self, other: i64) {
                *self = *self $op_assign other;
            }
        })*
    }
}
impl_op! {
    Add add = add_int, |a, b| Fraction::new_reduced(a.numerator * b.denominator + a.denominator * b.numerator, a.denominator * b.denominator),
    Sub sub = sub_int, |a, b| Fraction::new_reduced(a.numerator * b.denominator - a.denominator * b.numerator, a.denominator * b.denominator),
    Mul mul = mul_int, |a, b| Fraction::new_reduced(a.numerator * b.numerator, a.denominator * b.denominator),
    Div div = div_int, |a, b| Fraction::new_reduced(a.numerator * b.denominator, a.denominator * b.numerator);
    AddAssign add_assign = (+),
    SubAssign sub_assign = (-),
    MulAssign mul_assign = (*),
    DivAssign div_assign = (/)
}
impl Rem for Fraction {
    type Output = Self;
    fn rem(self, other: Self) -> Self {
        self.checked_rem(other).expect("integer overflow or division by zero")
    }
}
impl RemAssign for Fraction {
    fn rem_assign(&mut self, other: Self) {
        *self = *self % other;
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::ZERO
    }
    fn is_zero(&self) -> bool {
        Fraction::is_zero(*self)
    }
}
impl One for Fraction {
    fn one() -> Self {
        Self::ONE
    }
}
impl Num for Fraction {
    type FromStrRadixErr = ParseFractionError;

    fn from_str_radix(input: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Fraction::from_str_radix(input, radix)
    }
}
impl Signed for Fraction {
    fn abs(&self) -> Self {
        Self::new(self.numerator.abs(), self.denominator.abs())
    }
    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::ZERO
        } else {
            *self - *other
        }
    }
    fn signum(&self) -> Self {
        match self.cmp(&Self::ZERO) {
            Ordering::Less => Self::from(-1),
            Ordering::Equal => Self::ZERO,
            Ordering::Greater => Self::ONE
        }
    }
    fn is_positive(&self) -> bool {
        *self > Self::ZERO
    }
    fn is_negative(&self) -> bool {
        *self < Self::ZERO
    }
}

impl FromStr for Fraction {
    type Err = ParseFractionError;

    /// Parses `n/d` as given, without reducing. Anything else is read as a
    /// decimal number.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.splitn(2, '/');
        let numerator = parts.next().unwrap_or_default();
        match parts.next() {
            Some(denominator) => {
                let numerator = numerator.parse()?;
                let denominator = denominator.parse()?;
                if denominator == 0 {
                    return Err(ParseFractionError::ZeroDenominator);
                }
                Ok(Self::new(numerator, denominator))
            },
            None => Self::from_str_radix(numerator, 10)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(12, 0), 12);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(81, 54), 27);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(1 << 40, 1 << 20), 1 << 20);
    }

    #[test]
    fn add() {
        assert!((Fraction::new(3, 5) + Fraction::new(4, 10)).is_identical(Fraction::new(1, 1)));
        assert!((Fraction::new(1, 6) + Fraction::new(1, 3)).is_identical(Fraction::new(1, 2)));
        // scalar addition keeps the denominator as is
        assert!((Fraction::new(2, 4) + 1i64).is_identical(Fraction::new(6, 4)));
    }

    #[test]
    fn sub() {
        assert!((Fraction::new(3, 5) - Fraction::new(4, 10)).is_identical(Fraction::new(1, 5)));
        assert!((Fraction::new(-1, 2) - Fraction::new(-1, 4)).is_identical(Fraction::new(-1, 4)));
        assert!(Fraction::new(2, 4).sub_int(1).is_identical(Fraction::new(-2, 4)));
    }

    #[test]
    fn mul() {
        assert!((Fraction::new(3, 5) * Fraction::new(4, 10)).is_identical(Fraction::new(6, 25)));
        assert!((Fraction::new(10, 3) * 3i64).is_identical(Fraction::new(10, 1)));
        assert!(Fraction::new(2, 8).mul_int(2).is_identical(Fraction::new(1, 2)));
    }

    #[test]
    fn div() {
        assert!((Fraction::new(3, 5) / Fraction::new(2, 10)).is_identical(Fraction::new(3, 1)));
        // exact quotient keeps the denominator
        assert!(Fraction::new(6, 8).div_int(3).is_identical(Fraction::new(2, 8)));
        // otherwise the denominator is scaled and reduced
        assert!(Fraction::new(3, 4).div_int(6).is_identical(Fraction::new(1, 8)));
        assert!(Fraction::new(5, 7).div_int(-2).is_identical(Fraction::new(-5, 14)));
    }

    #[test]
    fn rem() {
        assert_eq!(Fraction::new(7, 2) % Fraction::new(1, 1), Fraction::new(1, 2));
        assert_eq!(Fraction::new(1, 2).checked_rem(Fraction::ZERO), None);
    }

    #[test]
    fn checked() {
        let big = Fraction::new(i64::MAX, 1);
        assert_eq!(big.checked_add(Fraction::ONE), None);
        assert_eq!(big.checked_mul(Fraction::from(2)), None);
        assert_eq!(Fraction::ONE.checked_div(Fraction::ZERO), None);
        assert_eq!(Fraction::new(1, 3).checked_add(Fraction::new(1, 6)), Some(Fraction::new(1, 2)));
    }

    #[test]
    fn reduce() {
        assert!(Fraction::new(81, 54).reduce().is_identical(Fraction::new(3, 2)));
        assert!(Fraction::new(9, 27).reduce().is_identical(Fraction::new(1, 3)));
        assert!(Fraction::new(-200, 400).reduce().is_identical(Fraction::new(-1, 2)));
        assert!(Fraction::new(200, -400).reduce().is_identical(Fraction::new(-1, 2)));
        assert!(Fraction::new(0, 5).reduce().is_identical(Fraction::new(0, 1)));
        assert!(Fraction::new(7, 0).reduce().is_identical(Fraction::INFINITY));
        assert!(Fraction::new_reduced(6, 4).is_identical(Fraction::new(3, 2)));
        // construction alone never reduces
        assert!(!Fraction::new(6, 4).is_identical(Fraction::new(3, 2)));
    }

    #[test]
    fn ordering() {
        assert!(Fraction::new(1, 2) > Fraction::new(1, 3));
        assert!(Fraction::new(-12, 3) < Fraction::new(6, 2));
        assert_eq!(Fraction::new(2, 4), Fraction::new(1, 2));
        assert!(Fraction::new(7, 2) > 3i64);
        assert!(Fraction::new(5, 2) < 3i64);
        assert!(Fraction::new(6, 2) == 3i64);
        assert!(Fraction::INFINITY > Fraction::new(i64::MAX, 1));
        // cross-multiplication is done in 128 bits
        assert!(Fraction::new(i64::MAX, i64::MAX - 1) < Fraction::new(i64::MAX - 1, i64::MAX - 2));
        assert!(Fraction::new(i64::MAX - 1, i64::MAX) < Fraction::ONE);
    }

    #[test]
    fn hash_follows_eq() {
        use std::collections::HashSet;
        let set: HashSet<Fraction> = vec![Fraction::new(1, 2), Fraction::new(2, 4), Fraction::new(-3, -6)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn mediant() {
        assert!(Fraction::new(1, 2).mediant(Fraction::new(1, 3)).is_identical(Fraction::new(2, 5)));
        assert!(Fraction::ZERO.mediant(Fraction::INFINITY).is_identical(Fraction::ONE));
    }

    #[test]
    fn continued_fraction() {
        assert_eq!(&Fraction::new(415, 93).continued_fraction()[..], &[4, 2, 6, 7]);
        assert_eq!(&Fraction::new(-7, 2).continued_fraction()[..], &[-4, 2]);
        assert_eq!(&Fraction::new(3, 1).continued_fraction()[..], &[3]);
        assert!(Fraction::from_continued_fraction(&[4, 2, 6, 7]).is_identical(Fraction::new(415, 93)));
        assert!(Fraction::from_continued_fraction(&[]).is_identical(Fraction::INFINITY));
    }

    #[test]
    fn floor() {
        assert_eq!(Fraction::new(7, 2).floor(), 3);
        assert_eq!(Fraction::new(-7, 2).floor(), -4);
        assert_eq!(Fraction::new(-7, -2).floor(), 3);
    }

    #[test]
    fn signed() {
        assert_eq!(Signed::abs(&Fraction::new(-1, 2)), Fraction::new(1, 2));
        assert_eq!(Fraction::new(-3, 4).signum(), Fraction::from(-1));
        assert_eq!(Fraction::new(1, 2).abs_sub(&Fraction::new(3, 4)), Fraction::ZERO);
        assert!((-Fraction::new(1, 2)).is_negative());
        assert!((-Fraction::new(i64::MIN, i64::MIN)).is_identical(Fraction::new(-1, 1)));
    }

    #[test]
    fn parse() {
        assert_eq!(Fraction::from_str_radix("1.23456", 10), Ok(Fraction::new(3858, 3125)));
        assert_eq!(Fraction::from_str_radix("1.01", 2), Ok(Fraction::new(5, 4)));
        assert_eq!(Fraction::from_str_radix("-12.3", 10), Ok(Fraction::new(-123, 10)));
        assert_eq!(Fraction::from_str_radix("ff", 16), Ok(Fraction::from(255)));
        assert_eq!(Fraction::from_str_radix("", 10), Err(ParseFractionError::Empty));
        assert_eq!(Fraction::from_str_radix("1.2x", 10), Err(ParseFractionError::InvalidDigit('x', 10)));
        assert_eq!(Fraction::from_str_radix("99999999999999999999", 10), Err(ParseFractionError::Overflow));

        assert!("2/4".parse::<Fraction>().unwrap().is_identical(Fraction::new(2, 4)));
        assert!("-3/7".parse::<Fraction>().unwrap().is_identical(Fraction::new(-3, 7)));
        assert_eq!("0.5".parse::<Fraction>(), Ok(Fraction::new(1, 2)));
        assert_eq!("1/0".parse::<Fraction>(), Err(ParseFractionError::ZeroDenominator));
        assert!(matches!("a/2".parse::<Fraction>(), Err(ParseFractionError::Int(_))));
    }

    #[test]
    fn format() {
        assert_eq!(format!("{}", Fraction::new(2, 4)), "1/2");
        assert_eq!(format!("{}", Fraction::new(6, -3)), "-2");
        assert_eq!(format!("{:?}", Fraction::new(2, 4)), "2/4");
        assert_eq!(format!("{:?}", Fraction::INFINITY), "1/0");
        assert_eq!(ParseFractionError::ZeroDenominator.to_string(), "denominator is 0");
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (-10_000i64..10_000, 1i64..10_000).prop_map(|(n, d)| Fraction::new(n, d))
    }

    proptest! {
        #[test]
        fn add_then_sub(a in fraction(), b in fraction()) {
            prop_assert_eq!((a + b) - b, a);
        }

        #[test]
        fn mul_then_div(a in fraction(), b in fraction()) {
            prop_assume!(b.numerator() != 0);
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn reduced_is_coprime(n in -1_000_000i64..1_000_000, d in 1i64..1_000_000) {
            let f = Fraction::new_reduced(n, d);
            prop_assert_eq!(gcd(abs(f.numerator()), abs(f.denominator())), 1);
            prop_assert!(f.denominator() > 0);
            prop_assert_eq!(f, Fraction::new(n, d));
        }

        #[test]
        fn continued_fraction_rebuilds(a in fraction()) {
            let rebuilt = Fraction::from_continued_fraction(&a.continued_fraction());
            prop_assert!(rebuilt.is_identical(a.reduce()));
        }

        #[test]
        fn order_matches_decimal(a in fraction(), b in fraction()) {
            prop_assume!(a != b);
            prop_assert_eq!(a < b, a.decimal() < b.decimal());
        }
    }
}
