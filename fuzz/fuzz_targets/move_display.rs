#![no_main]

use libfuzzer_sys::fuzz_target;
use movetext::Move;

fuzz_target!(|m: Move| {
    let roundtripped: Move = m.to_string().parse().expect("every move can be written and read");
    assert_eq!(m, roundtripped);
});
