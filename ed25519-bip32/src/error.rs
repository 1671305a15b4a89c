use crate::derivation::DerivationIndex;
use crate::hex;
use std::{error, fmt, result};

/// Errors raised while building keys from caller input or while deriving
/// public keys.
///
/// Once a key is built, private derivation, signing and `XPrv::public`
/// cannot fail.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// the given buffer (seed, key or signature) is of invalid size.
    ///
    /// For a seed `expected` is the minimum size, see `SEED_MIN_SIZE`.
    InvalidLength { expected: usize, received: usize },
    /// the given extended private key does not have the expected clamped
    /// bits. This is not a problem of the size, see `Error::InvalidLength`
    InvalidKeyEncoding(&'static str),
    /// a hardened index was given to a derivation which only has the
    /// public key.
    NotSoftDerivable(DerivationIndex),
    /// the public key of an `XPub` is not a valid curve point
    InvalidPoint,
    InvalidHexadecimal(hex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidLength { expected, received } => write!(
                f,
                "Invalid length, expected {} bytes, but received {} bytes.",
                expected, received
            ),
            Error::InvalidKeyEncoding(err) => write!(f, "Invalid XPrv: {}", err),
            Error::NotSoftDerivable(index) => write!(
                f,
                "expected soft derivation, but received hardened index 0x{:08x}",
                index
            ),
            Error::InvalidPoint => f.write_str("public key is not a valid curve point"),
            Error::InvalidHexadecimal(err) => write!(f, "Invalid hexadecimal: {}.", err),
        }
    }
}
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::InvalidHexadecimal(err) => Some(err),
            _ => None,
        }
    }
}
impl From<hex::Error> for Error {
    fn from(e: hex::Error) -> Error {
        Error::InvalidHexadecimal(e)
    }
}

pub type Result<T> = result::Result<T, Error>;
