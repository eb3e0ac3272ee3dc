use std::fmt;

/// Error conditions raised at the public boundary of this crate.
///
/// Every other operation is total on well-typed input; see the crate
/// documentation for the exact boundary each variant guards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// `get`/`set` (or an internal invariant walk) found an index outside
    /// `[0, length)` after negative-index wrapping.
    IndexOutOfBounds { index: isize, length: usize },
    /// `make`/`init`/`from_fn` was asked for a negative length, or
    /// `validate` found a structural invariant violated.
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IndexOutOfBounds { index, length } => {
                write!(f, "index {} out of bounds for length {}", index, length)
            }
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
