use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Indicates an error from the underlying field arithmetic or decoding.
    #[error("{0}")]
    MathError(#[from] shamir_math::Error),

    /// Indicates a threshold that cannot define a polynomial.
    #[error("Invalid threshold: {0}, must be at least 1")]
    InvalidThreshold(usize),

    /// Indicates that fewer shares than the threshold were provided.
    #[error("Too few shares provided: {0} is below threshold {1}")]
    InsufficientShares(usize, usize),

    /// Indicates that every subset was examined and none is consistent with
    /// all the shares.
    #[error("No consistent subset: {examined} combinations of shares examined")]
    NotFound {
        /// Number of subsets examined.
        examined: u64,
    },

    /// Indicates that the search deadline passed before a consistent subset
    /// was found.
    #[error("Search timed out after examining {examined} combinations of shares")]
    Timeout {
        /// Number of subsets examined before the deadline.
        examined: u64,
    },

    /// Indicates malformed input to the share file reader.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Helper functions to create the errors raised during reconstruction.
impl Error {
    /// Create an insufficient shares error.
    pub fn insufficient_shares(provided: usize, required: usize) -> Self {
        Self::InsufficientShares(provided, required)
    }

    /// Create an invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid share error, naming the share index.
    pub fn invalid_share<S: Into<String>>(x: &str, msg: S) -> Self {
        Self::InvalidInput(format!("Share {:?}: {}", x, msg.into()))
    }

    /// Returns whether the error was caused by two shares with the same index.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(
            self,
            Self::MathError(shamir_math::Error::DivisionByZero(..))
        )
    }

    /// Returns whether the error was caused by a share that could not be decoded.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::MathError(
                    shamir_math::Error::InvalidBase(_)
                        | shamir_math::Error::InvalidDigit { .. }
                        | shamir_math::Error::DigitOutOfRange { .. }
                )
        )
    }
}
