#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ss58_types::Address;

#[derive(Debug, Arbitrary)]
struct Input {
    prefix: u16,
    bytes: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let addr = Address {
        prefix: input.prefix,
        bytes: input.bytes,
    };

    match ss58_codec::try_encode(&addr) {
        Ok(encoded) => {
            let decoded = ss58_codec::decode(&encoded).expect("encoded address must decode");
            assert_eq!(decoded, addr);
        }
        Err(_) => assert!(!addr.has_valid_prefix()),
    }
});
