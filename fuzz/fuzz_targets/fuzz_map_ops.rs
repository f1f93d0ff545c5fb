#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use hezini::{KeyCase, OrderedMap};

#[derive(Arbitrary, Debug)]
enum Op {
    Set(String, u16),
    Remove(String),
    Default(String),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    insensitive: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let case = if input.insensitive { KeyCase::Insensitive } else { KeyCase::Sensitive };
    let mut map = OrderedMap::with_case(case);
    // reference model: plain vector searched linearly
    let mut model: Vec<(String, u16)> = Vec::new();

    for op in input.ops {
        match op {
            Op::Set(key, value) => {
                let norm = case.normalize(&key).into_owned();
                map.set(&key, value);
                match model.iter_mut().find(|(k, _)| *k == norm) {
                    Some(slot) => slot.1 = value,
                    None => model.push((norm, value)),
                }
            }
            Op::Remove(key) => {
                let norm = case.normalize(&key).into_owned();
                let expected = model.iter().position(|(k, _)| *k == norm);
                assert_eq!(map.remove(&key), expected.is_some());
                if let Some(pos) = expected {
                    model.remove(pos);
                }
            }
            Op::Default(key) => {
                let norm = case.normalize(&key).into_owned();
                *map.get_or_insert_default(&key) += 0;
                if !model.iter().any(|(k, _)| *k == norm) {
                    model.push((norm, 0));
                }
            }
            Op::Clear => {
                map.clear();
                model.clear();
            }
        }

        assert_eq!(map.len(), model.len());
        for (pos, ((key, value), (mk, mv))) in map.iter().zip(&model).enumerate() {
            assert_eq!(key, mk);
            assert_eq!(value, mv);
            assert_eq!(map.position(key), Some(pos));
        }
    }
});
