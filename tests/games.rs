use std::num::NonZeroUsize;

use movetext::{
    parse_game, parse_games,
    san::{Disambiguation, San},
    tokenize,
    writer::{Config, DrawNotation, Writer},
    Color, Game, Outcome, ParseError, Parser, Square, TokenKind, TokenKinds,
};

const IMMORTAL: &str = r#"[Event "London"]
[Site "London ENG"]
[Date "1851.06.21"]
[White "Adolf Anderssen"]
[Black "Lionel Adalbert Bagration Felix Kieseritzky"]
[Result "1-0"]

1. e4 e5 2. f4 exf4 3. Bc4 Qh4+ 4. Kf1 b5 5. Bxb5 Nf6 6. Nf3 Qh6 7. d3 Nh5
8. Nh4 Qg5 9. Nf5 c6 10. g4 Nf6 11. Rg1! cxb5 12. h4! Qg6 13. h5 Qg5 14. Qf3
Ng8 15. Bxf4 Qf6 16. Nc3! Bc5 17. Nd5 Qxb2 18. Bd6!! Bxg1 {It is from this move
that the game gets its name.} 19. e5!! Qxa1+ 20. Ke2 Na6 21. Nxg7+ Kd8 22. Qf6+!!
Nxf6 23. Be7# 1-0"#;

fn parse(input: &str) -> Result<Game, ParseError> {
    input.parse()
}

#[test]
fn test_immortal_game() {
    let game = parse(IMMORTAL).expect("valid game");
    assert_eq!(game.tags.len(), 6);
    assert_eq!(game.tag("Date"), Some("1851.06.21"));
    assert_eq!(game.rounds.len(), 23);
    assert_eq!(game.ply_count(), 45);
    assert_eq!(game.result, Some(Outcome::Decisive { winner: Color::White }));

    let last = game.moves().last().expect("moves");
    assert!(last.is_checkmate());
    assert_eq!(last.to_string(), "Be7#");
}

#[test]
fn test_canonical_form_is_idempotent() {
    for input in [
        IMMORTAL,
        "",
        "[Event \"Only tags\"]",
        "1-0",
        "1.e4 {comment} e5 ;comment\n 2.Nf3",
        "5. O-O-O++ O-O#!! 6. exd8Q Rd1d5?! ½–½",
        "[Annotator \"\\\"quoted\\\" and \\\\slashed\\\\\"]\n1. a4",
    ] {
        let game = parse(input).expect("valid game");
        let canonical = game.to_string();
        let reparsed = parse(&canonical).expect("canonical form parses");
        assert_eq!(reparsed, game, "{canonical}");
        assert_eq!(reparsed.to_string(), canonical);
    }
}

#[test]
fn test_canonical_form() {
    let game = parse("[Event \"x\"] 1.e4 {c} e5 2.Nf3 ½-½").expect("valid game");
    assert_eq!(game.to_string(), "[Event \"x\"]\n\n1. e4 e5 2. Nf3 1/2-1/2\n");

    let mut writer = Writer::with_config(
        Vec::new(),
        Config {
            draw: DrawNotation::Unicode,
            blank_line_after_tags: false,
            max_line_width: None,
        },
    );
    writer.write_game(&game).expect("io");
    assert_eq!(
        String::from_utf8(writer.into_inner()).expect("utf-8"),
        "[Event \"x\"]\n1. e4 e5 2. Nf3 ½-½\n"
    );
}

#[test]
fn test_canonical_lines_are_wrapped() {
    let game = parse(IMMORTAL).expect("valid game");
    let canonical = game.to_string();
    assert!(canonical.lines().all(|line| line.chars().count() <= 80));

    let narrow = {
        let mut writer = Writer::new(Vec::new());
        writer.config_mut().max_line_width = NonZeroUsize::new(20);
        writer.write_game(&game).expect("io");
        String::from_utf8(writer.into_inner()).expect("utf-8")
    };
    let movetext = narrow.split("\n\n").nth(1).expect("movetext");
    assert!(movetext.lines().all(|line| line.chars().count() <= 20));
    assert_eq!(parse(&narrow), Ok(game));
}

#[test]
fn test_incomplete_capture() {
    assert_eq!(parse("1. e5x"), Err(ParseError::IncompleteGame { offset: 6 }));
}

#[test]
fn test_incomplete_round() {
    assert_eq!(parse("1."), Err(ParseError::IncompleteGame { offset: 2 }));
    assert_eq!(parse("1. e4 e5 2. "), Err(ParseError::IncompleteGame { offset: 12 }));
}

#[test]
fn test_move_number_glued_to_rank() {
    // Move numbers are scanned before ranks, so "52." is one token.
    let tokens = tokenize("1. e4 e52. d4").expect("valid tokens");
    assert_eq!(tokens[6].kind, TokenKind::MoveNumber);
    assert_eq!(tokens[6].literal, "52.");

    assert_eq!(
        parse("1. e4 e52. d4"),
        Err(ParseError::UnexpectedToken {
            offset: 7,
            found: TokenKind::MoveNumber,
            expected: TokenKinds::FILE | TokenKinds::RANK | TokenKinds::CAPTURE,
        })
    );
}

#[test]
fn test_full_square_disambiguation() {
    let game = parse("1. Rd1d5").expect("valid game");
    assert_eq!(
        game.rounds[0].white.san,
        San::Normal {
            piece: Some(movetext::Piece::Rook),
            disambiguation: Some(Disambiguation::Square("d1".parse().expect("square"))),
            capture: false,
            to: "d5".parse::<Square>().expect("square"),
            promotion: None,
        }
    );
    assert_eq!(
        game.rounds[0].white.san.to().map(|sq| sq.indices()),
        Some((4, 3))
    );
}

#[test]
fn test_non_monotonic_move_number() {
    assert_eq!(
        parse("1. e4 e5 3. Nf3 Nc6 2. Bc4"),
        Err(ParseError::NonMonotonicMoveNumber {
            offset: 20,
            previous: 3,
            found: 2,
        })
    );
    assert!(matches!(
        parse("1. e4 e5 1. Nf3"),
        Err(ParseError::NonMonotonicMoveNumber { offset: 9, .. })
    ));
}

#[test]
fn test_trailing_content() {
    assert_eq!(
        parse("1. e4 e5 1-0 2. Nf3"),
        Err(ParseError::TrailingContent { offset: 13 })
    );
    assert_eq!(
        parse("1-0 0-1"),
        Err(ParseError::TrailingContent { offset: 4 })
    );
}

#[test]
fn test_annotation_outside_move() {
    assert_eq!(
        parse("1. e4 e5 1-0 !"),
        Err(ParseError::TrailingContent { offset: 13 })
    );
    assert_eq!(
        parse("!? 1. e4"),
        Err(ParseError::UnexpectedToken {
            offset: 0,
            found: TokenKind::Annotation,
            expected: TokenKinds::TAG
                | TokenKinds::MOVE_NUMBER
                | TokenKinds::RESULT
                | TokenKinds::EOF,
        })
    );
}

#[test]
fn test_unknown_annotation() {
    let input = "1. e4 e5\n2. Nf3 Nc6?!!";
    let err = parse(input).expect_err("unknown annotation");
    assert_eq!(
        err,
        ParseError::UnknownAnnotation {
            offset: 19,
            glyphs: "?!!".to_owned(),
        }
    );
    let diagnostic = err.diagnostic(input);
    assert_eq!((diagnostic.line, diagnostic.column), (2, 11));
    assert_eq!(diagnostic.source_line, "2. Nf3 Nc6?!!");
}

#[test]
fn test_malformed_tag() {
    assert_eq!(
        parse("[Event \"Casual\"\n1. e4"),
        Err(ParseError::InvalidToken { offset: 0 })
    );
}

#[test]
fn test_comments_are_kept_aside() {
    let tokens = tokenize("1. e4 {first} e5 ; second\n2. Nf3 {third}").expect("valid");
    let mut parser = Parser::new(tokens);
    let game = parser.parse_game().expect("valid game");
    assert_eq!(game.ply_count(), 3);

    let comments: Vec<(usize, &str)> = parser.comments().map(|c| (c.offset, c.text())).collect();
    assert_eq!(comments, [(6, "first"), (17, "second"), (33, "third")]);
}

#[test]
fn test_free_functions() {
    let game = parse_game(tokenize("1. d4 Nf6 2. c4 e6 0-1").expect("valid")).expect("valid");
    assert_eq!(game.result.and_then(Outcome::winner), Some(Color::Black));

    let games = parse_games(tokenize("1. e4 1-0\n1. d4 0-1\n1. c4").expect("valid")).expect("valid");
    assert_eq!(games.len(), 3);
    assert_eq!(games[2].result, None);
}

#[test]
fn test_concurrent_parses() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse(IMMORTAL).map(|game| game.ply_count())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), Ok(45));
    }
}
