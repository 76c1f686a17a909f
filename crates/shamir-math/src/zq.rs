//! Arithmetic in the prime field `Z_p`.

use crate::{Error, Result};
use shamir_util::is_prime;

/// Prime of the reference field, `GF(2089)`.
pub const DEFAULT_PRIME: u64 = 2089;

/// Structure encapsulating a prime modulus up to 62 bits.
///
/// Every method accepts arbitrary `u64` operands and returns a value in
/// `[0, p)`. Products are computed over `u128` before reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modulus {
    p: u64,
}

impl Default for Modulus {
    fn default() -> Self {
        Self { p: DEFAULT_PRIME }
    }
}

impl Modulus {
    /// Create a modulus from a prime number of at most 62 bits.
    pub fn new(p: u64) -> Result<Self> {
        if p < 2 || (p >> 62) != 0 || !is_prime(p) {
            Err(Error::InvalidModulus(p))
        } else {
            Ok(Self { p })
        }
    }

    /// Returns the value of the modulus.
    pub const fn modulus(&self) -> u64 {
        self.p
    }

    /// Reduce `a` into `[0, p)`.
    pub const fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    /// Modular addition.
    pub const fn add(&self, a: u64, b: u64) -> u64 {
        // Both reduced operands are below 2^62, so the sum cannot overflow.
        (self.reduce(a) + self.reduce(b)) % self.p
    }

    /// Modular subtraction.
    ///
    /// `p` is added before the final reduction so that the intermediate value
    /// is never negative.
    pub const fn sub(&self, a: u64, b: u64) -> u64 {
        (self.reduce(a) + self.p - self.reduce(b)) % self.p
    }

    /// Modular negation.
    pub const fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    /// Modular multiplication.
    pub const fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.p as u128) as u64
    }

    /// Modular exponentiation by square-and-multiply.
    pub const fn pow(&self, a: u64, n: u64) -> u64 {
        let mut result = 1 % self.p;
        let mut base = self.reduce(a);
        let mut n = n;
        while n > 0 {
            if n & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            n >>= 1;
        }
        result
    }

    /// Multiplicative inverse of `a`, computed as `a^(p-2)`.
    ///
    /// Returns [`Error::DivisionByZero`] when `a` is a multiple of `p`.
    pub fn inv(&self, a: u64) -> Result<u64> {
        let a = self.reduce(a);
        if a == 0 {
            return Err(Error::DivisionByZero(a, self.p));
        }
        Ok(self.pow(a, self.p - 2))
    }

    /// Modular division `a / b`.
    pub fn div(&self, a: u64, b: u64) -> Result<u64> {
        Ok(self.mul(a, self.inv(b)?))
    }
}
