//! Fuzz testing for the configuration reader.
//!
//! Arbitrary bytes must never panic the reader, and every key a
//! successful parse yields must be reachable through lookup.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut src = data;
    if let Ok(map) = gledger::read_config(&mut src) {
        for (key, _value) in map.iter() {
            if let Ok(key_str) = std::str::from_utf8(key.as_bytes()) {
                assert!(map.get(key_str).is_some(), "iterated key must be reachable");
            }
        }
    }
});
