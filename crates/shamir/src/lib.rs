#![crate_name = "shamir"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Reconstruction of a Shamir-shared secret from a collection of shares of
//! which some may be corrupted.
//!
//! The shares are decoded into points of `GF(p)`, and every subset of
//! `threshold` points is tried in lexicographic order until one induces a
//! polynomial that passes through *every* share. The constant term of that
//! polynomial is the secret.

mod consensus;
mod errors;
mod input;
mod interpolation;
mod share;

pub use consensus::{search, ConsensusSearch, Reconstruction, SearchOptions, Strategy};
pub use errors::{Error, Result};
pub use input::ShareFile;
pub use interpolation::{value_at, value_at_zero};
pub use share::{RawShare, Share};
pub use shamir_math::zq::{Modulus, DEFAULT_PRIME};

/// Decode every raw share and run the consensus search over the result.
///
/// A share that fails to decode aborts the reconstruction before the search
/// starts.
pub fn reconstruct(
    raw_shares: &[RawShare],
    threshold: usize,
    modulus: &Modulus,
    options: SearchOptions,
) -> Result<Reconstruction> {
    let shares = raw_shares
        .iter()
        .map(|raw| raw.decode(modulus))
        .collect::<Result<Vec<_>>>()?;
    ConsensusSearch::new(&shares, threshold, modulus)
        .with_options(options)
        .run()
}

#[cfg(doctest)]
doc_comment::doctest!("../../../README.md");

#[cfg(test)]
mod tests {
    use crate::{reconstruct, Error, Modulus, RawShare, SearchOptions};
    use shamir_math::Error as MathError;

    fn raw(x: u64, base: u32, value: &str) -> RawShare {
        RawShare::new(x, base, value)
    }

    #[test]
    fn decodes_then_searches() -> Result<(), Box<dyn std::error::Error>> {
        // f(x) = 3 + 2x + x^2 over GF(2089): f(1) = 6, f(2) = 11, f(3) = 18, f(4) = 27.
        let shares = [
            raw(1, 2, "110"),
            raw(2, 16, "b"),
            raw(3, 10, "18"),
            raw(4, 3, "1000"),
        ];
        let reconstruction =
            reconstruct(&shares, 3, &Modulus::default(), SearchOptions::default())?;
        assert_eq!(reconstruction.secret, 3);
        assert_eq!(reconstruction.subset, vec![0, 1, 2]);
        Ok(())
    }

    #[test]
    fn parse_failure_stops_before_search() {
        let shares = [raw(1, 10, "6"), raw(2, 10, "1x"), raw(3, 10, "18")];
        assert_eq!(
            reconstruct(&shares, 2, &Modulus::default(), SearchOptions::default()).err(),
            Some(Error::MathError(MathError::DigitOutOfRange {
                character: 'x',
                digit: 33,
                base: 10
            }))
        );
    }
}
