//! Error types.

use core::fmt;

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;

/// Signature encoding and decoding errors.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input is not a DER `SEQUENCE` of two unsigned `INTEGER`s.
    Asn1(der::Error),

    /// `SEQUENCE` content length exceeds [`MAX_CONTENT_LEN`](crate::MAX_CONTENT_LEN).
    LengthOverflow {
        /// Content length the signature would need.
        len: usize,
    },

    /// Input is not valid hexadecimal.
    Hex(hex::FromHexError),

    /// Scalar does not fit the requested fixed-width serialization.
    FieldWidth {
        /// Offending length in bytes.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asn1(err) => write!(f, "malformed DER signature: {err}"),
            Error::LengthOverflow { len } => write!(
                f,
                "signature content length {len} exceeds {} bytes",
                crate::MAX_CONTENT_LEN
            ),
            Error::Hex(err) => write!(f, "invalid hex signature: {err}"),
            Error::FieldWidth { len } => {
                write!(f, "invalid fixed-width signature length: {len}")
            }
        }
    }
}

impl core::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(err: der::Error) -> Error {
        Error::Asn1(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Error {
        Error::Hex(err)
    }
}
