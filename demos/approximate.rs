extern crate mediant;

use mediant::{Direction, Domain, Fraction, Search};

use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let bound = match env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 1000
    };

    println!("Best approximations with numerator and denominator up to {}", bound);
    println!();

    // x >= sqrt(2) <=> p^2 >= 2q^2, with 1/0 counting as above everything
    let sqrt2 = |x: Fraction| {
        let (p, q) = (x.numerator() as i128, x.denominator() as i128);
        p * p >= 2 * q * q
    };
    let search = Search::new(bound).domain(Domain::Positive);
    let above = search.run(sqrt2);
    let below = search.direction(Direction::Largest).run(|x: Fraction| !sqrt2(x));
    println!("sqrt(2):");
    println!("  {} <= sqrt(2) <= {}", below, above);
    println!("  {:.12} <= {:.12} <= {:.12}", below.decimal(), 2f64.sqrt(), above.decimal());
    println!("  continued fraction of {}: {:?}", above, &above.continued_fraction()[..]);
    println!();

    // 1/phi is the root of x^2 + x = 1 in [0, 1]
    let phi = |x: Fraction| {
        let (p, q) = (x.numerator() as i128, x.denominator() as i128);
        p * p + p * q >= q * q
    };
    let trace = Search::new(bound).run_traced(phi);
    let above = trace.outcome.fraction();
    println!("1/phi:");
    println!("  smallest above: {} ({:.12})", above, above.decimal());
    println!("  {} predicate calls, runs {:?}", trace.evaluations, &trace.advances[..]);

    Ok(())
}
