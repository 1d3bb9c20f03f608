#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary strings must never panic, and anything accepted
    // must re-encode to the exact same address.
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(key) = xrb_crypto::to_public_key(s) {
        assert_eq!(xrb_crypto::to_address(&key).as_str(), s);
    }
});
