#![crate_name = "shamir_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for the shamir crate.

mod combinations;

pub use combinations::{binomial, unrank_combination, Combinations};

use num_bigint_dig::{prime::probably_prime, BigUint};

/// Returns whether the modulus p is prime; this function is 100% accurate.
pub fn is_prime(p: u64) -> bool {
    probably_prime(&BigUint::from(p), 0)
}
