//! Lagrange interpolation over `GF(p)`.

use crate::{Result, Share};
use shamir_math::zq::Modulus;

/// Evaluate at `x = 0` the unique polynomial of degree `shares.len() - 1`
/// passing through `shares`, which recovers the secret.
///
/// Fails with a division by zero when two shares have the same index.
pub fn value_at_zero(shares: &[Share], modulus: &Modulus) -> Result<u64> {
    value_at(shares, 0, modulus)
}

/// Evaluate at `x` the unique polynomial of degree `shares.len() - 1` passing
/// through `shares`.
///
/// For each share `i` the basis polynomial is
/// `L_i(x) = Π_{j≠i} (x - x_j) / (x_i - x_j)`, and the result is
/// `Σ y_i · L_i(x)`. Fails with a division by zero when two shares have the
/// same index. An empty slice evaluates to 0.
pub fn value_at(shares: &[Share], x: u64, modulus: &Modulus) -> Result<u64> {
    let mut result = 0;
    for (i, share_i) in shares.iter().enumerate() {
        let mut numerator = 1;
        let mut denominator = 1;
        for (j, share_j) in shares.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = modulus.mul(numerator, modulus.sub(x, share_j.x));
            denominator = modulus.mul(denominator, modulus.sub(share_i.x, share_j.x));
        }
        let basis = modulus.mul(numerator, modulus.inv(denominator)?);
        result = modulus.add(result, modulus.mul(share_i.y, basis));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{value_at, value_at_zero};
    use crate::{Modulus, Share};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Horner evaluation of the polynomial with the given coefficients,
    /// constant term first.
    fn eval(coefficients: &[u64], x: u64, q: &Modulus) -> u64 {
        coefficients
            .iter()
            .rev()
            .fold(0, |acc, c| q.add(q.mul(acc, x), *c))
    }

    fn shares_of(coefficients: &[u64], xs: &[u64], q: &Modulus) -> Vec<Share> {
        xs.iter()
            .map(|x| Share::new(*x, eval(coefficients, *x, q), q))
            .collect()
    }

    #[test]
    fn linear() -> Result<(), Box<dyn std::error::Error>> {
        let q = Modulus::default();
        // f(x) = 5 + 3x
        let shares = shares_of(&[5, 3], &[1, 2], &q);
        assert_eq!(value_at_zero(&shares, &q)?, 5);
        assert_eq!(value_at(&shares, 10, &q)?, 35);
        Ok(())
    }

    #[test]
    fn quadratic_wraps_around() -> Result<(), Box<dyn std::error::Error>> {
        let q = Modulus::default();
        // f(x) = 2000 + 1000x + 7x^2 exceeds the modulus at every x.
        let coefficients = [2000, 1000, 7];
        let shares = shares_of(&coefficients, &[3, 8, 2088], &q);
        assert_eq!(value_at_zero(&shares, &q)?, 2000);
        for x in [0, 1, 5, 100, 2088] {
            assert_eq!(value_at(&shares, x, &q)?, eval(&coefficients, x, &q));
        }
        Ok(())
    }

    #[test]
    fn single_share_is_constant() -> Result<(), Box<dyn std::error::Error>> {
        let q = Modulus::default();
        let shares = [Share::from((7, 42))];
        assert_eq!(value_at_zero(&shares, &q)?, 42);
        assert_eq!(value_at(&shares, 1000, &q)?, 42);
        assert_eq!(value_at_zero(&[], &q)?, 0);
        Ok(())
    }

    #[test]
    fn duplicate_index() {
        let q = Modulus::default();
        let shares = [Share::from((1, 6)), Share::from((2, 11)), Share::from((1, 7))];
        assert!(value_at_zero(&shares, &q).unwrap_err().is_division_by_zero());
        assert!(value_at(&shares, 5, &q).unwrap_err().is_division_by_zero());

        // Equal y does not make a duplicate index acceptable.
        let shares = [Share::from((1, 6)), Share::from((1, 6))];
        assert!(value_at_zero(&shares, &q).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn held_out_point() -> Result<(), Box<dyn std::error::Error>> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let q = Modulus::new(4611686018326724609)?;
        for k in 1..8 {
            let coefficients = (0..k).map(|_| rng.gen_range(0..q.modulus())).collect::<Vec<_>>();
            let xs = (1..=k as u64 + 1).collect::<Vec<_>>();
            let shares = shares_of(&coefficients, &xs, &q);
            let (known, held_out) = shares.split_at(k);
            assert_eq!(value_at(known, held_out[0].x, &q)?, held_out[0].y);
            assert_eq!(value_at_zero(known, &q)?, coefficients[0]);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn zero_is_value_at_zero(
            coefficients in prop::collection::vec(0u64..2089, 1..6),
            offset in 1u64..1000,
        ) {
            let q = Modulus::default();
            let xs = (0..coefficients.len() as u64).map(|i| offset + i).collect::<Vec<_>>();
            let shares = shares_of(&coefficients, &xs, &q);
            prop_assert_eq!(value_at_zero(&shares, &q).unwrap(), value_at(&shares, 0, &q).unwrap());
            prop_assert_eq!(value_at_zero(&shares, &q).unwrap(), coefficients[0]);
        }

        #[test]
        fn round_trip(
            coefficients in prop::collection::vec(0u64..2089, 1..6),
            x in 0u64..2089,
        ) {
            let q = Modulus::default();
            let xs = (1..=coefficients.len() as u64).map(|i| 2089 - i).collect::<Vec<_>>();
            let shares = shares_of(&coefficients, &xs, &q);
            prop_assert_eq!(value_at(&shares, x, &q).unwrap(), eval(&coefficients, x, &q));
        }
    }
}
