//! A library for scanning and parsing chess movetext.
//!
//! # Examples
//!
//! Split movetext into tokens. Every byte of the input belongs to exactly
//! one token:
//!
//! ```
//! use movetext::{scanner::tokenize, TokenKind};
//!
//! let input = "1. e4 {King's pawn} e5";
//! let tokens = tokenize(input)?;
//!
//! assert_eq!(tokens[5].kind, TokenKind::BracedComment);
//! assert_eq!(tokens[5].offset, 6);
//! assert_eq!(tokens.iter().map(|t| t.literal.as_str()).collect::<String>(), input);
//! # Ok::<_, movetext::ParseError>(())
//! ```
//!
//! Parse a game:
//!
//! ```
//! use movetext::{Game, Outcome};
//!
//! let game: Game = "[Event \"Casual\"]\n\n1. f3 e5 2. g4 Qh4# 0-1".parse()?;
//!
//! assert_eq!(game.tag("Event"), Some("Casual"));
//! assert_eq!(game.rounds.len(), 2);
//! assert_eq!(game.result, Some(Outcome::Decisive { winner: movetext::Color::Black }));
//! # Ok::<_, movetext::ParseError>(())
//! ```
//!
//! Locate errors:
//!
//! ```
//! use movetext::{Game, ParseError};
//!
//! let err = "1. e5x".parse::<Game>().unwrap_err();
//! assert_eq!(err, ParseError::IncompleteGame { offset: 6 });
//! ```
//!
//! Games are written back in [canonical form](writer), which parses to an
//! equal game.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   the vocabulary and game types. Moves, squares, annotations and results
//!   use their notation as string representation.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for the move types, for fuzzing.

#![doc(html_root_url = "https://docs.rs/movetext/0.1.0")]
#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

mod annotation;
mod castling_side;
mod color;
mod comment;
mod errors;
mod game;
mod outcome;
mod piece;
mod square;
mod tag;

pub mod parser;
pub mod san;
pub mod scanner;
pub mod token;
pub mod writer;

pub use annotation::{Annotation, InvalidAnnotation};
pub use castling_side::CastlingSide;
pub use color::Color;
pub use comment::{Comment, CommentKind};
pub use errors::{Diagnostic, ParseError};
pub use game::{Game, Round};
pub use outcome::{Outcome, ParseOutcomeError};
pub use parser::{parse_game, parse_games, Parser};
pub use piece::{ParsePieceError, Piece};
pub use san::{Disambiguation, Move, San, Suffix};
pub use scanner::{tokenize, Scanner};
pub use square::{File, ParseSquareError, Rank, Square};
pub use tag::{ParseTagError, Tag};
pub use token::{Token, TokenKind, TokenKinds};
