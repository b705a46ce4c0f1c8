//! Extremal fraction search over the Stern-Brocot tree.
//!
//! Given a predicate that is monotone over the fractions in the search domain,
//! [`search`] finds the smallest (or largest) fraction p/q with |p|, q <= N
//! for which it holds. Each outer round of the search descends one run of the
//! Stern-Brocot path, which is one continued fraction term, and the length of
//! that run is found by doubling and then halving a step. That keeps the
//! number of predicate calls at O(log N).
//!
//! ```
//! use mediant::{search, Fraction};
//!
//! // Smallest p/q >= 1/3 with p, q <= 10
//! let found = search(|x: Fraction| 3 * x.numerator() >= x.denominator(), 10, true);
//! assert_eq!(found, Fraction::new(1, 3));
//! ```

use crate::Fraction;

use smallvec::SmallVec;
use std::mem;
use tracing::{debug, trace};

/// Which end of the predicate's transition the search returns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The smallest fraction for which the predicate holds. The predicate
    /// must be false below some threshold and true from there on.
    Smallest,
    /// The largest fraction for which the predicate holds. The predicate
    /// must be true up to some threshold and false after it.
    Largest
}
impl Default for Direction {
    fn default() -> Self {
        Direction::Smallest
    }
}

/// The range of fractions the search walks through
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// [0, 1], bracketed by 0/1 and 1/1
    Unit,
    /// [0, N], bracketed by 0/1 and the symbolic 1/0. The predicate will be
    /// called with `Fraction::INFINITY` at least once, so it has to handle it.
    Positive
}
impl Default for Domain {
    fn default() -> Self {
        Domain::Unit
    }
}
impl Domain {
    fn upper(self) -> Fraction {
        match self {
            Domain::Unit => Fraction::ONE,
            Domain::Positive => Fraction::INFINITY
        }
    }
}

/// What a predicate says about one candidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Holds,
    Fails,
    /// The candidate is exactly the answer. The search stops right away.
    Exact(Fraction)
}
impl Verdict {
    fn holds(self) -> bool {
        self == Verdict::Holds
    }
}
impl From<bool> for Verdict {
    fn from(holds: bool) -> Self {
        if holds { Verdict::Holds } else { Verdict::Fails }
    }
}

/// How a search finished
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The extremal fraction within the bound
    Bound(Fraction),
    /// The predicate reported an exact match
    Exact(Fraction)
}
impl Outcome {
    /// The fraction found, however the search ended
    pub fn fraction(self) -> Fraction {
        match self {
            Outcome::Bound(fraction) | Outcome::Exact(fraction) => fraction
        }
    }
    /// Returns true if the search was cut short by an exact match
    pub fn is_exact(self) -> bool {
        match self {
            Outcome::Exact(_) => true,
            Outcome::Bound(_) => false
        }
    }
}

/// A finished search together with how it got there
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    pub outcome: Outcome,
    /// Number of times the predicate was called
    pub evaluations: usize,
    /// The advance committed by each half-round, alternating between the two
    /// bounds. Non-zero entries are the run lengths of the Stern-Brocot path.
    pub advances: SmallVec<[i64; 16]>
}

/// A configured mediant search. `Search::new(n)` looks for the smallest
/// fraction in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    bound: i64,
    direction: Direction,
    domain: Domain
}
impl Search {
    /// Search fractions whose numerator and denominator are at most `bound`
    ///
    /// ## Panics
    /// Panics if the bound is not positive
    pub fn new(bound: i64) -> Self {
        assert!(bound > 0, "search bound must be positive, got {}", bound);
        Self {
            bound,
            direction: Direction::default(),
            domain: Domain::default()
        }
    }
    /// Change the bound on numerator and denominator
    pub fn bound(mut self, bound: i64) -> Self {
        assert!(bound > 0, "search bound must be positive, got {}", bound);
        self.bound = bound;
        self
    }
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Run the search and return the fraction it settles on
    pub fn run<F, V>(&self, predicate: F) -> Fraction
        where F: FnMut(Fraction) -> V,
              V: Into<Verdict>
    {
        self.run_traced(predicate).outcome.fraction()
    }
    /// Run the search, telling an exact match apart from a bounded result
    pub fn run_verdict<F, V>(&self, predicate: F) -> Outcome
        where F: FnMut(Fraction) -> V,
              V: Into<Verdict>
    {
        self.run_traced(predicate).outcome
    }
    /// Run the search and keep a record of its progress
    ///
    /// ## Panics
    /// Panics if the predicate does not hold at the far end of the domain
    /// (the upper bound when searching for the smallest fraction, 0/1 when
    /// searching for the largest). That means it isn't monotone there.
    pub fn run_traced<F, V>(&self, mut predicate: F) -> Trace
        where F: FnMut(Fraction) -> V,
              V: Into<Verdict>
    {
        let mut record = Trace {
            outcome: Outcome::Bound(Fraction::ZERO),
            evaluations: 0,
            advances: SmallVec::new()
        };
        let mut evaluate = |candidate: Fraction, evaluations: &mut usize| -> Verdict {
            *evaluations += 1;
            let verdict: Verdict = predicate(candidate).into();
            trace!(%candidate, ?verdict, "probe");
            verdict
        };

        let smallest = self.direction == Direction::Smallest;
        let mut lo = Fraction::ZERO;
        let mut hi = self.domain.upper();

        // The near end is returned right away if it holds, the far end must hold
        let (near, far) = if smallest { (lo, hi) } else { (hi, lo) };
        match evaluate(near, &mut record.evaluations) {
            Verdict::Exact(fraction) => return record.finish(Outcome::Exact(fraction)),
            Verdict::Holds => return record.finish(Outcome::Bound(near)),
            Verdict::Fails => ()
        }
        match evaluate(far, &mut record.evaluations) {
            Verdict::Exact(fraction) => return record.finish(Outcome::Exact(fraction)),
            Verdict::Holds => (),
            Verdict::Fails => panic!(
                "predicate is false at both {} and {}, it must hold at {} to search for the {:?} fraction",
                near, far, far, self.direction
            )
        }

        // `hi` is always the bound moved towards `lo`. While `dir` is set it is
        // the side where the predicate holds, otherwise `lo` is. Every
        // half-round flips `dir` and swaps the bounds.
        let mut dir = smallest;
        let (mut a, mut b) = (true, true);
        while a || b {
            let mut adv: i64 = 0;
            let mut step: i64 = 1;
            let mut halving = false;
            while step > 0 {
                let accepted = match adv.checked_add(step).and_then(|next| self.candidate(lo, hi, next)) {
                    Some(mid) => match evaluate(mid, &mut record.evaluations) {
                        Verdict::Exact(fraction) => return record.finish(Outcome::Exact(fraction)),
                        verdict => verdict.holds() == dir
                    },
                    None => false
                };
                if accepted {
                    adv += step;
                } else {
                    halving = true;
                }
                step = match step.checked_mul(2) {
                    Some(doubled) if !halving => doubled,
                    _ => {
                        halving = true;
                        step / 2
                    }
                };
            }

            hi = Fraction::new(hi.numerator() + lo.numerator() * adv, hi.denominator() + lo.denominator() * adv);
            debug!(adv, lo = %lo, hi = %hi, "advanced bound");
            record.advances.push(adv);

            dir = !dir;
            mem::swap(&mut lo, &mut hi);
            a = b;
            b = adv != 0;
        }

        let found = if dir { hi } else { lo };
        debug!(%found, evaluations = record.evaluations, "search finished");
        record.finish(Outcome::Bound(found))
    }

    /// The fraction `adv` steps from `hi` towards `lo`, if it fits the bound
    fn candidate(&self, lo: Fraction, hi: Fraction, adv: i64) -> Option<Fraction> {
        let numerator = lo.numerator().checked_mul(adv)?.checked_add(hi.numerator())?;
        let denominator = lo.denominator().checked_mul(adv)?.checked_add(hi.denominator())?;
        if numerator.checked_abs()? > self.bound || denominator > self.bound {
            return None;
        }
        Some(Fraction::new(numerator, denominator))
    }
}
impl Trace {
    fn finish(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }
}

/// Find the extremal fraction p/q in [0, 1] with p, q <= n for which the
/// predicate holds: the smallest if `smallest` is set, otherwise the largest.
///
/// ## Panics
/// Panics if `n` is not positive, or if the predicate is false at 1/1 (for
/// the smallest) or at 0/1 (for the largest) after failing at the other end.
pub fn search<F>(predicate: F, n: i64, smallest: bool) -> Fraction
    where F: FnMut(Fraction) -> bool
{
    let direction = if smallest { Direction::Smallest } else { Direction::Largest };
    Search::new(n).direction(direction).run(predicate)
}

/// Search [0, 1] for the smallest fraction without any bound, relying on the
/// predicate to stop the search with `Verdict::Exact`. If it never does, the
/// result is bounded by `i64::MAX` as usual.
pub fn search_exact<F, V>(predicate: F) -> Outcome
    where F: FnMut(Fraction) -> V,
          V: Into<Verdict>
{
    Search::new(i64::MAX).run_verdict(predicate)
}
