#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(bits) = xrb_crypto::address::decode_bits(s) {
        assert_eq!(bits.len(), s.len() * 5);
        assert_eq!(xrb_crypto::address::encode_bits(&bits).unwrap(), s);
    }
    let _ = xrb_crypto::binary::to_binary(s);
    let _ = xrb_crypto::binary::binary_to_bytes(s);
});
