use num::{BigUint, ToPrimitive};

use crate::{Error, Result};

/// `n!` as a float. Negative input is taken by absolute value.
#[must_use]
pub fn factorial(n: i32) -> f64 {
    (1..=n.unsigned_abs()).fold(1.0, |acc, x| acc * f64::from(x))
}

/// `ln(n!)`, summed term by term so it never overflows.
#[must_use]
pub fn ln_factorial(n: u32) -> f64 {
    (1..=n).fold(0.0, |acc, x| acc + f64::from(x).ln())
}

/// `ln(k!)` for every `k` in `0..=n`, summed in the same order as
/// [`ln_factorial`].
pub(crate) fn ln_factorials(n: u32) -> Vec<f64> {
    let mut acc = 0.0;
    let mut table = Vec::with_capacity(n as usize + 1);
    table.push(acc);
    for x in 1..=n {
        acc += f64::from(x).ln();
        table.push(acc);
    }
    table
}

/// Number of unordered `k`-subsets of an `n`-set.
///
/// The coefficient is computed exactly and only converted to a float at the
/// end, so `n` past `170` (where `n!` stops fitting an `f64`) still works as
/// long as the coefficient itself fits.
pub fn binomial_coefficient(n: u32, k: u32) -> Result<f64> {
    if k > n {
        return Err(Error::SuccessesOutOfRange {
            trials: n,
            successes: k,
        });
    }
    num::integer::binomial(BigUint::from(n), BigUint::from(k))
        .to_f64()
        .filter(|x| x.is_finite())
        .ok_or(Error::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_of_zero_is_one() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
    }

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
    }

    #[test]
    fn factorial_uses_absolute_value() {
        assert_eq!(factorial(-4), 24.0);
    }

    #[test]
    fn coefficient_matches_factorial_ratio() {
        for n in 0..20 {
            for k in 0..=n {
                let expected =
                    factorial(n as i32) / (factorial(k as i32) * factorial((n - k) as i32));
                let actual = binomial_coefficient(n, k).unwrap();
                assert!((actual - expected).abs() < 1e-6 * expected, "C({n},{k})");
            }
        }
    }

    #[test]
    fn ln_factorial_matches_factorial() {
        for n in 0..30u32 {
            let expected = factorial(n as i32).ln();
            assert!((ln_factorial(n) - expected).abs() < 1e-9, "{n}");
        }
    }

    #[test]
    fn ln_factorial_table_matches_single_values() {
        let table = ln_factorials(200);
        assert_eq!(table.len(), 201);
        assert_eq!(table[0], 0.0);
        for n in [1, 17, 170, 200] {
            assert_eq!(table[n as usize], ln_factorial(n));
        }
    }

    #[test]
    fn coefficient_edges() {
        assert_eq!(binomial_coefficient(0, 0), Ok(1.0));
        assert_eq!(binomial_coefficient(7, 0), Ok(1.0));
        assert_eq!(binomial_coefficient(7, 7), Ok(1.0));
        assert_eq!(binomial_coefficient(10, 3), Ok(120.0));
    }

    #[test]
    fn coefficient_past_factorial_range() {
        let c = binomial_coefficient(200, 2).unwrap();
        assert_eq!(c, 19_900.0);
    }

    #[test]
    fn coefficient_rejects_k_above_n() {
        assert_eq!(
            binomial_coefficient(3, 4),
            Err(Error::SuccessesOutOfRange {
                trials: 3,
                successes: 4
            })
        );
    }

    #[test]
    fn coefficient_overflow() {
        assert_eq!(binomial_coefficient(2000, 1000), Err(Error::Overflow));
    }
}
