#![no_main]
use libfuzzer_sys::fuzz_target;
use hezini::{Error, KeyCase, Options, parse_bytes};

fuzz_target!(|data: &[u8]| {
    let opts = Options {
        key_case: KeyCase::Insensitive,
        strict: true,
    };
    match parse_bytes(data, &opts) {
        Ok(_) => {}
        Err(Error::Syntax { line, .. }) => assert!(line >= 1),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
