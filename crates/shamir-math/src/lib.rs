#![crate_name = "shamir_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Mathematical utilities for the shamir crate: arithmetic in a prime field
//! and decoding of arbitrary-base numerals into field elements.

mod decode;
mod errors;
pub mod zq;

pub use decode::decode;
pub use errors::{Error, Result};
