use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates an invalid modulus.
    #[error("Invalid modulus: modulus {0} should be a prime between 2 and 2^62")]
    InvalidModulus(u64),

    /// Indicates that an element without inverse was inverted.
    #[error("Division by zero: {0} has no inverse modulo {1}")]
    DivisionByZero(u64, u64),

    /// Indicates a numeral base outside of [2, 36].
    #[error("Invalid base: {0} is not between 2 and 36")]
    InvalidBase(u32),

    /// Indicates a character which is neither a decimal digit nor an ASCII letter.
    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Its position in the numeral, in characters.
        position: usize,
    },

    /// Indicates a digit whose value is not smaller than the base.
    #[error("Digit {character:?} has value {digit}, out of range for base {base}")]
    DigitOutOfRange {
        /// The offending character.
        character: char,
        /// Its numeric value.
        digit: u32,
        /// The base of the numeral.
        base: u32,
    },
}
