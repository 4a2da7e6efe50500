#![no_main]
// Split the input into two magnitudes and check the encode/decode round trip
use ecdsa_der::{BigUint, Error, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&split, data)) = data.split_first() else {
        return;
    };
    let (r, s) = data.split_at(usize::from(split).min(data.len()));
    let (r, s) = (BigUint::from_bytes_be(r), BigUint::from_bytes_be(s));

    match encode(&r, &s) {
        Ok(hex) => {
            let der = hex::decode(hex).expect("encoder emits valid hex");
            assert_eq!(decode(&der).expect("encoded signature must decode"), (r, s));
        }
        Err(Error::LengthOverflow { .. }) => {}
        Err(err) => panic!("unexpected encode error: {err}"),
    }
});
