use movetext::{Move, ParseError};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

#[test]
fn test_moves() {
    #[serde_as]
    #[derive(Deserialize)]
    struct Record {
        input: String,
        #[serde_as(as = "DisplayFromStr")]
        expected: Move,
    }

    let mut reader = csv::Reader::from_path("tests/moves.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let m: Move = record.input.parse().expect("valid move");
        assert_eq!(m, record.expected, "line {}", i + 2);

        let canonical = m.to_string();
        assert_eq!(canonical.parse::<Move>(), Ok(m), "line {}", i + 2);
    }
}

#[test]
fn test_invalid_moves() {
    #[derive(Deserialize)]
    struct Record {
        input: String,
        offset: usize,
        error: String,
    }

    let mut reader = csv::Reader::from_path("tests/invalid_moves.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let err = record
            .input
            .parse::<Move>()
            .expect_err("invalid move");
        assert_eq!(err.offset(), record.offset, "line {}: {err}", i + 2);

        let matches = match record.error.as_str() {
            "incomplete" => matches!(err, ParseError::IncompleteGame { .. }),
            "unexpected" => matches!(err, ParseError::UnexpectedToken { .. }),
            "invalid" => matches!(err, ParseError::InvalidToken { .. }),
            "annotation" => matches!(err, ParseError::UnknownAnnotation { .. }),
            other => panic!("unknown error kind {other}"),
        };
        assert!(matches, "line {}: {err:?}", i + 2);
    }
}
