#![no_main]

use libfuzzer_sys::fuzz_target;
use movetext::{scanner::tokenize, TokenKind};

fuzz_target!(|data: &str| {
    if let Ok(tokens) = tokenize(data) {
        let concatenated: String = tokens.iter().map(|t| t.literal.as_str()).collect();
        assert_eq!(concatenated, data);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }
});
