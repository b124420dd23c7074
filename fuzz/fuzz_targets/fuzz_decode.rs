#![no_main]

use libfuzzer_sys::fuzz_target;

// Decoding arbitrary input must never panic, and anything that decodes must
// survive a re-encode.
fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(addr) = ss58_codec::decode(input) {
        assert!(addr.has_valid_prefix());
        let reencoded = ss58_codec::encode(&addr);
        let again = ss58_codec::decode(&reencoded).expect("re-encoded address must decode");
        assert_eq!(again, addr);
    }
});
