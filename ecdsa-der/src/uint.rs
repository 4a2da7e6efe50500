//! Length arithmetic for unsigned DER `INTEGER`s.

/// Number of value octets needed to encode a minimal big-endian magnitude as
/// an unsigned `INTEGER`.
///
/// A set high bit requires a leading `0x00` so the value is not read as
/// negative. An empty magnitude is zero, which encodes as a single `0x00`.
pub(crate) fn value_len(magnitude: &[u8]) -> usize {
    match magnitude.first() {
        Some(byte) if byte & 0x80 != 0 => magnitude.len().saturating_add(1),
        Some(_) => magnitude.len(),
        None => 1,
    }
}

/// Number of octets in the DER definite length field for `len`.
fn length_field_len(len: usize) -> usize {
    if len < 0x80 {
        1
    } else {
        let significant_bits = (usize::BITS - len.leading_zeros()) as usize;
        1 + significant_bits.div_ceil(8)
    }
}

/// Total size of a tag-length-value triple with `len` value octets.
pub(crate) fn tlv_len(len: usize) -> usize {
    1usize
        .saturating_add(length_field_len(len))
        .saturating_add(len)
}

/// Content length of `SEQUENCE { r INTEGER, s INTEGER }`.
pub(crate) fn sequence_content_len(r: &[u8], s: &[u8]) -> usize {
    tlv_len(value_len(r)).saturating_add(tlv_len(value_len(s)))
}

#[cfg(test)]
mod tests {
    use super::{length_field_len, sequence_content_len, tlv_len, value_len};

    #[test]
    fn value_len_pads_high_bit() {
        assert_eq!(value_len(&[0x7f]), 1);
        assert_eq!(value_len(&[0x80]), 2);
        assert_eq!(value_len(&[0xff, 0x00]), 3);
    }

    #[test]
    fn value_len_of_zero() {
        assert_eq!(value_len(&[]), 1);
        assert_eq!(value_len(&[0x00]), 1);
    }

    #[test]
    fn length_field_forms() {
        assert_eq!(length_field_len(0), 1);
        assert_eq!(length_field_len(0x7f), 1);
        assert_eq!(length_field_len(0x80), 2);
        assert_eq!(length_field_len(0xff), 2);
        assert_eq!(length_field_len(0x100), 3);
    }

    #[test]
    fn secp256k1_sized_content() {
        assert_eq!(tlv_len(32), 34);
        assert_eq!(sequence_content_len(&[0x78; 32], &[0xf9; 32]), 69);
    }
}
