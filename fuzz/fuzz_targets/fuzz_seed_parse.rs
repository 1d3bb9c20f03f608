#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(seed) = xrb_types::Seed::from_hex(s) {
        assert_eq!(seed.to_hex(), s);
    }
    let _ = xrb_crypto::create_address_str(s, 0);
});
