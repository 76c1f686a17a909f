//! Shares as points of the secret polynomial.

use crate::Result;
use serde::{Deserialize, Serialize};
use shamir_math::{decode, zq::Modulus};
use zeroize::DefaultIsZeroes;

/// A decoded share: the point `(x, y)` of the secret polynomial, with both
/// coordinates reduced into the field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Share {
    /// Share index.
    pub x: u64,
    /// Secret fragment.
    pub y: u64,
}

impl DefaultIsZeroes for Share {}

impl Share {
    /// Create a share from its coordinates, reducing them into the field.
    pub fn new(x: u64, y: u64, modulus: &Modulus) -> Self {
        Self {
            x: modulus.reduce(x),
            y: modulus.reduce(y),
        }
    }
}

/// Takes the coordinates as given; the search reduces them on use.
impl From<(u64, u64)> for Share {
    fn from((x, y): (u64, u64)) -> Self {
        Self { x, y }
    }
}

/// A share as handed over by the input reader: an index and a numeral of the
/// fragment in some base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShare {
    /// Share index.
    pub x: u64,
    /// Base of `value`, between 2 and 36.
    pub base: u32,
    /// Numeral of the secret fragment.
    pub value: String,
}

impl RawShare {
    /// Create a raw share.
    pub fn new<S: Into<String>>(x: u64, base: u32, value: S) -> Self {
        Self {
            x,
            base,
            value: value.into(),
        }
    }

    /// Decode the fragment into a field element.
    pub fn decode(&self, modulus: &Modulus) -> Result<Share> {
        let y = decode(&self.value, self.base, modulus)?;
        Ok(Share::new(self.x, y, modulus))
    }
}
