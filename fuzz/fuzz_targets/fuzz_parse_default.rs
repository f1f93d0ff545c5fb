#![no_main]
use libfuzzer_sys::fuzz_target;
use hezini::{Options, parse_bytes};

fuzz_target!(|data: &[u8]| {
    // non-strict parsing is total
    let doc = parse_bytes(data, &Options::default()).unwrap();
    for (name, section) in &doc {
        assert_eq!(doc.position(name).map(|p| doc.entries()[p].key()), Some(name));
        for (key, _) in section {
            assert!(section.contains_key(key));
        }
    }
});
