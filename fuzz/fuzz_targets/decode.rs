#![no_main]
// Any input either fails to decode or is canonical DER that re-encodes to itself
use ecdsa_der::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok((r, s)) = decode(data) {
        let der = encode(&r, &s).expect("decoded signature must re-encode");
        assert_eq!(der, hex::encode(data));
    }
});
