//! Builds `ecdsa-der` without `std` to catch accidental `std` usage.

#![no_std]

extern crate alloc;

use alloc::string::String;
use ecdsa_der::{BigUint, Result, decode, encode};

/// Re-encode a DER signature as hex.
pub fn reencode(der: &[u8]) -> Result<String> {
    let (r, s): (BigUint, BigUint) = decode(der)?;
    encode(&r, &s)
}
