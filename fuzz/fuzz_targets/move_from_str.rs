#![no_main]

use libfuzzer_sys::fuzz_target;
use movetext::Move;

fuzz_target!(|data: &str| {
    if let Ok(m) = data.parse::<Move>() {
        let roundtripped: Move = m.to_string().parse().expect("roundtrip");
        assert_eq!(m, roundtripped);
    }
});
