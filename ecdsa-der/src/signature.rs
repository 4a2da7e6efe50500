//! ECDSA signature scalars and their ASN.1 DER encoding.
//!
//! The encoding is the `Ecdsa-Sig-Value` structure from RFC 3279 § 2.2.3:
//!
//! ```text
//! Ecdsa-Sig-Value  ::=  SEQUENCE  {
//!      r     INTEGER,
//!      s     INTEGER  }
//! ```

use alloc::{string::String, vec::Vec};
use core::str::FromStr;

use der::{Decode, Encode, Sequence, asn1::UintRef};
use num_bigint::BigUint;

use crate::{Error, MAX_CONTENT_LEN, Result, uint};

#[cfg(feature = "serde")]
use serdect::serde::{Deserialize, Serialize, de, ser};

/// Borrowed view of an `Ecdsa-Sig-Value`.
#[derive(Sequence)]
struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// ECDSA signature: a pair of non-negative integers `(r, s)`.
///
/// The scalars are arbitrary precision. No curve order is assumed, so the
/// same type carries secp256k1, P-256 or P-521 signatures alike.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its `r` and `s` components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Get the `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Parse a DER-encoded signature (raw bytes, not hex).
    ///
    /// The input must be exactly one `SEQUENCE` holding two minimally
    /// encoded, non-negative `INTEGER`s with nothing trailing.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let sig = SignatureRef::from_der(bytes)?;
        let (r, s) = (sig.r.as_bytes(), sig.s.as_bytes());
        check_content_len(uint::sequence_content_len(r, s))?;

        Ok(Self::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s)))
    }

    /// Parse a hex-encoded DER signature, as produced by [`Signature::to_der_hex`].
    ///
    /// Both upper and lower case digits are accepted.
    pub fn from_der_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded)?;
        Self::from_der(&bytes)
    }

    /// Serialize as DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        encode_der(&self.r, &self.s)
    }

    /// Serialize as DER, rendered as lowercase hex.
    pub fn to_der_hex(&self) -> Result<String> {
        self.to_der().map(hex::encode)
    }

    /// Parse a fixed-width `r || s` byte string, with both halves the same size.
    pub fn from_fixed_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(Error::FieldWidth { len: bytes.len() });
        }

        let (r, s) = bytes.split_at(bytes.len() / 2);
        Ok(Self::new(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s)))
    }

    /// Serialize as `r || s`, with each scalar left-padded to `width` bytes.
    ///
    /// This is the fixed-size form used by curve implementations, e.g. a
    /// `width` of 32 yields the 64-byte secp256k1/P-256 signature format.
    pub fn to_fixed_bytes(&self, width: usize) -> Result<Vec<u8>> {
        if width == 0 || width > MAX_CONTENT_LEN {
            return Err(Error::FieldWidth { len: width });
        }

        let mut bytes = Vec::with_capacity(width * 2);

        for scalar in [&self.r, &self.s] {
            let magnitude = scalar.to_bytes_be();
            let padding = width
                .checked_sub(magnitude.len())
                .ok_or(Error::FieldWidth {
                    len: magnitude.len(),
                })?;

            bytes.resize(bytes.len() + padding, 0);
            bytes.extend_from_slice(&magnitude);
        }

        Ok(bytes)
    }
}

/// Encode `r` and `s` as an `Ecdsa-Sig-Value`.
pub(crate) fn encode_der(r: &BigUint, s: &BigUint) -> Result<Vec<u8>> {
    let r = r.to_bytes_be();
    let s = s.to_bytes_be();
    check_content_len(uint::sequence_content_len(&r, &s))?;

    // `UintRef` adds the leading zero for scalars with the high bit set
    let sig = SignatureRef {
        r: UintRef::new(&r)?,
        s: UintRef::new(&s)?,
    };

    Ok(sig.to_der()?)
}

fn check_content_len(len: usize) -> Result<()> {
    if len > MAX_CONTENT_LEN {
        Err(Error::LengthOverflow { len })
    } else {
        Ok(())
    }
}

impl From<(BigUint, BigUint)> for Signature {
    fn from((r, s): (BigUint, BigUint)) -> Signature {
        Signature::new(r, s)
    }
}

impl From<Signature> for (BigUint, BigUint) {
    fn from(signature: Signature) -> (BigUint, BigUint) {
        signature.into_parts()
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(der: &[u8]) -> Result<Self> {
        Self::from_der(der)
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(encoded: &str) -> Result<Self> {
        Self::from_der_hex(encoded)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let der = self.to_der().map_err(ser::Error::custom)?;
        serdect::slice::serialize_hex_lower_or_bin(&der, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let der = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Self::from_der(&der).map_err(de::Error::custom)
    }
}
