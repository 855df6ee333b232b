#![no_main]

use libfuzzer_sys::fuzz_target;
use movetext::Game;

fuzz_target!(|data: &str| {
    match data.parse::<Game>() {
        Ok(game) => {
            let canonical = game.to_string();
            let reparsed: Game = canonical.parse().expect("canonical form parses");
            assert_eq!(game, reparsed);
        }
        Err(err) => {
            assert!(err.offset() <= data.len());
            let _ = err.diagnostic(data).to_string();
        }
    }
});
