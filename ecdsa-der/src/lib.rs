#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod signature;
mod uint;

pub use crate::{
    error::{Error, Result},
    signature::Signature,
};

pub use der;
pub use num_bigint::{self, BigUint};

use alloc::string::String;

/// Maximum length in bytes of the `SEQUENCE` content, i.e. both encoded
/// `INTEGER`s including their tags and lengths.
pub const MAX_CONTENT_LEN: usize = 255;

/// Encode the signature scalars `r` and `s` as DER, rendered as lowercase hex.
///
/// Fails with [`Error::LengthOverflow`] if the encoded scalars would exceed
/// [`MAX_CONTENT_LEN`].
pub fn encode(r: &BigUint, s: &BigUint) -> Result<String> {
    signature::encode_der(r, s).map(hex::encode)
}

/// Decode the `r` and `s` scalars from a DER-encoded signature.
///
/// `der` is the raw binary encoding, not hex.
pub fn decode(der: &[u8]) -> Result<(BigUint, BigUint)> {
    Signature::from_der(der).map(Signature::into_parts)
}
