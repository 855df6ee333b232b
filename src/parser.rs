// This file is part of the movetext library.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Build [`Game`]s from scanned tokens.
//!
//! The grammar, over tokens with whitespace and comments removed:
//!
//! ```text
//! game           = tag* round* result? EOF
//! round          = MOVE_NUMBER move move?
//! move           = (castle | normal) suffix? annotation?
//! normal         = piece? disambiguation? "x"? file rank ("="? piece)?
//! disambiguation = file | rank | file rank
//! ```
//!
//! Only the last round may lack a black move. The parts of a move must be
//! written without anything in between, and a move must be followed by
//! whitespace, a comment or the end of input. An annotation may be
//! separated from its move.
//!
//! # Examples
//!
//! ```
//! use movetext::{parser::Parser, scanner::tokenize, Outcome};
//!
//! let tokens = tokenize("1. e4 {best by test} e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0")?;
//! let mut parser = Parser::new(tokens);
//! let game = parser.parse_game()?;
//!
//! assert_eq!(game.rounds.len(), 4);
//! assert_eq!(game.result, Some(Outcome::Decisive { winner: movetext::Color::White }));
//! assert_eq!(parser.comments().next().map(|c| c.text()), Some("best by test"));
//! # Ok::<_, movetext::ParseError>(())
//! ```

use tracing::debug;

use crate::{
    annotation::Annotation,
    comment::Comment,
    errors::ParseError,
    game::{Game, Round},
    outcome::Outcome,
    san::{Disambiguation, Move, San, Suffix},
    scanner::tokenize,
    tag::Tag,
    token::{Token, TokenKind, TokenKinds},
    CastlingSide, File, Piece, Rank, Square,
};

/// A structural token, with a note on what came before it.
#[derive(Debug, Clone)]
struct Lexeme {
    token: Token,
    /// Kind and offset of the first whitespace or comment token between the
    /// previous structural token and this one, if any. The start of input
    /// counts as a separator.
    separator: Option<(TokenKind, usize)>,
}

impl Lexeme {
    fn is_separated(&self) -> bool {
        self.separator.is_some()
    }
}

/// A recursive descent parser over a token sequence.
///
/// Whitespace and comments are set aside when the parser is created. They
/// stay available through [`Parser::trivia()`] and [`Parser::comments()`].
#[derive(Debug, Clone)]
pub struct Parser {
    lexemes: Vec<Lexeme>,
    trivia: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Prepares a token sequence, typically from
    /// [`tokenize()`](crate::scanner::tokenize).
    ///
    /// Tokens after the first end-of-input token are ignored. If there is
    /// none, one is added after the last token.
    pub fn new<I>(tokens: I) -> Parser
    where
        I: IntoIterator<Item = Token>,
    {
        let mut lexemes = Vec::new();
        let mut trivia = Vec::new();
        let mut separator = Some((TokenKind::Whitespace, 0));
        let mut end = 0;

        for token in tokens {
            end = token.end();
            if token.is_trivia() {
                separator = separator.or(Some((token.kind, token.offset)));
                trivia.push(token);
                continue;
            }
            let eof = token.kind == TokenKind::Eof;
            lexemes.push(Lexeme { token, separator });
            separator = None;
            if eof {
                break;
            }
        }

        if lexemes.last().map_or(true, |l| l.token.kind != TokenKind::Eof) {
            lexemes.push(Lexeme {
                token: Token::new(TokenKind::Eof, "", end),
                separator,
            });
        }

        Parser {
            lexemes,
            trivia,
            pos: 0,
        }
    }

    /// Whitespace and comment tokens, in input order.
    pub fn trivia(&self) -> &[Token] {
        &self.trivia
    }

    /// Comments, in input order.
    pub fn comments(&self) -> impl Iterator<Item = Comment<'_>> {
        self.trivia.iter().filter_map(Comment::from_token)
    }

    /// Byte offset of the next structural token.
    pub fn offset(&self) -> usize {
        self.peek().token.offset
    }

    fn peek(&self) -> &Lexeme {
        // The last lexeme is always end of input, and bump() never moves
        // past it.
        &self.lexemes[self.pos]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().token.kind
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().token.clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consumes the next token if it has the given kind. Unless `lead` is
    /// set, it must also directly follow the previous token.
    fn eat(&mut self, kind: TokenKind, lead: bool) -> Option<Token> {
        let next = self.peek();
        if next.token.kind == kind && (lead || !next.is_separated()) {
            Some(self.bump())
        } else {
            None
        }
    }

    fn is_attached(&self, kinds: TokenKinds) -> bool {
        let next = self.peek();
        kinds.contains_kind(next.token.kind) && !next.is_separated()
    }

    /// The next token is not one of `expected`.
    fn unexpected(&self, expected: TokenKinds) -> ParseError {
        let next = &self.peek().token;
        if next.kind == TokenKind::Eof {
            ParseError::IncompleteGame {
                offset: next.offset,
            }
        } else {
            ParseError::UnexpectedToken {
                offset: next.offset,
                found: next.kind,
                expected,
            }
        }
    }

    /// A part of a move is missing. Blames the separator, if any, since the
    /// part must be attached.
    fn missing(&self, expected: TokenKinds) -> ParseError {
        let next = self.peek();
        match next.separator {
            Some((found, offset)) if next.token.kind != TokenKind::Eof => {
                ParseError::UnexpectedToken {
                    offset,
                    found,
                    expected,
                }
            }
            _ => self.unexpected(expected),
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        let next = &self.peek().token;
        if next.kind == TokenKind::Eof {
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                offset: next.offset,
                found: next.kind,
                expected: TokenKinds::EOF,
            })
        }
    }

    /// Parses one move at the current position.
    ///
    /// # Errors
    ///
    /// Fails if no complete move starts here, if the move is not followed by
    /// a separator or the end of input, or if its annotation is unknown.
    pub fn parse_move(&mut self) -> Result<Move, ParseError> {
        let san = match self.peek_kind() {
            TokenKind::QueenSideCastle => {
                self.bump();
                San::Castle(CastlingSide::QueenSide)
            }
            TokenKind::KingSideCastle => {
                self.bump();
                San::Castle(CastlingSide::KingSide)
            }
            TokenKind::Piece | TokenKind::File | TokenKind::Rank | TokenKind::Capture => {
                self.parse_normal()?
            }
            _ => return Err(self.unexpected(TokenKinds::MOVE_START)),
        };

        let suffix = if self.is_attached(TokenKinds::SUFFIX) {
            Suffix::from_token_kind(self.bump().kind)
        } else {
            None
        };

        let annotation = if self.peek_kind() == TokenKind::Annotation {
            let token = self.bump();
            match Annotation::from_ascii(token.literal.as_bytes()) {
                Ok(annotation) => Some(annotation),
                Err(_) => {
                    return Err(ParseError::UnknownAnnotation {
                        offset: token.offset,
                        glyphs: token.literal,
                    })
                }
            }
        } else {
            None
        };

        let next = self.peek();
        if !next.is_separated() && next.token.kind != TokenKind::Eof {
            let mut expected = TokenKinds::WHITESPACE | TokenKinds::EOF;
            if annotation.is_none() {
                expected |= TokenKinds::ANNOTATION;
                if suffix.is_none() {
                    expected |= TokenKinds::SUFFIX;
                }
            }
            return Err(ParseError::UnexpectedToken {
                offset: next.token.offset,
                found: next.token.kind,
                expected,
            });
        }

        Ok(Move {
            san,
            suffix,
            annotation,
        })
    }

    fn parse_normal(&mut self) -> Result<San, ParseError> {
        let mut lead = true;

        let piece = match self.eat(TokenKind::Piece, lead) {
            Some(token) => {
                lead = false;
                Some(piece_of(&token)?)
            }
            None => None,
        };
        let file = match self.eat(TokenKind::File, lead) {
            Some(token) => {
                lead = false;
                Some(file_of(&token)?)
            }
            None => None,
        };
        let rank = match self.eat(TokenKind::Rank, lead) {
            Some(token) => {
                lead = false;
                Some(rank_of(&token)?)
            }
            None => None,
        };

        let capture = self.eat(TokenKind::Capture, lead).is_some();
        let (disambiguation, to) = if capture || self.is_attached(TokenKinds::FILE) {
            (Disambiguation::from_parts(file, rank), self.parse_square()?)
        } else {
            match (file, rank) {
                (Some(file), Some(rank)) => (None, Square::from_coords(file, rank)),
                (_, None) => {
                    return Err(self.missing(
                        TokenKinds::FILE | TokenKinds::RANK | TokenKinds::CAPTURE,
                    ))
                }
                (None, Some(_)) => {
                    return Err(self.missing(TokenKinds::FILE | TokenKinds::CAPTURE))
                }
            }
        };

        let promotion = if self.eat(TokenKind::Promotion, false).is_some() {
            let token = self
                .eat(TokenKind::Piece, false)
                .ok_or_else(|| self.missing(TokenKinds::PIECE))?;
            Some(piece_of(&token)?)
        } else if let Some(token) = self.eat(TokenKind::Piece, false) {
            Some(piece_of(&token)?)
        } else {
            None
        };

        Ok(San::Normal {
            piece,
            disambiguation,
            capture,
            to,
            promotion,
        })
    }

    fn parse_square(&mut self) -> Result<Square, ParseError> {
        let file = self
            .eat(TokenKind::File, false)
            .ok_or_else(|| self.missing(TokenKinds::FILE))?;
        let rank = self
            .eat(TokenKind::Rank, false)
            .ok_or_else(|| self.missing(TokenKinds::RANK))?;
        Ok(Square::from_coords(file_of(&file)?, rank_of(&rank)?))
    }

    /// Parses a move number and one or two moves.
    ///
    /// # Errors
    ///
    /// Besides malformed moves, fails if the number is not greater than
    /// `previous`.
    pub fn parse_round(&mut self, previous: Option<u32>) -> Result<Round, ParseError> {
        if self.peek_kind() != TokenKind::MoveNumber {
            return Err(self.unexpected(TokenKinds::MOVE_NUMBER));
        }
        let token = self.bump();
        let number = move_number(&token)?;
        if let Some(previous) = previous {
            if number <= previous {
                return Err(ParseError::NonMonotonicMoveNumber {
                    offset: token.offset,
                    previous,
                    found: number,
                });
            }
        }

        let white = self.parse_move()?;
        let black = if TokenKinds::MOVE_START.contains_kind(self.peek_kind()) {
            Some(self.parse_move()?)
        } else {
            None
        };

        Ok(Round {
            number,
            white,
            black,
        })
    }

    /// Parses tags, rounds and an optional result, stopping at the first
    /// token that cannot continue the game.
    fn parse_game_body(&mut self) -> Result<Game, ParseError> {
        let mut game = Game::default();

        while self.peek_kind() == TokenKind::Tag {
            let token = self.bump();
            let tag = Tag::from_literal(&token.literal).map_err(|_| ParseError::InvalidToken {
                offset: token.offset,
            })?;
            game.tags.push(tag);
        }

        while self.peek_kind() == TokenKind::MoveNumber {
            let previous = match game.rounds.last() {
                Some(Round { black: None, .. }) => {
                    return Err(self.unexpected(expected_after(&game)))
                }
                Some(round) => Some(round.number),
                None => None,
            };
            let round = self.parse_round(previous)?;
            game.rounds.push(round);
        }

        if self.peek_kind().is_result() {
            game.result = Outcome::from_token_kind(self.bump().kind);
        }

        Ok(game)
    }

    /// Parses a complete game, which must extend to the end of input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`]. Content after the result is
    /// [`ParseError::TrailingContent`].
    pub fn parse_game(&mut self) -> Result<Game, ParseError> {
        let game = self.parse_game_body()?;

        let next = &self.peek().token;
        if next.kind == TokenKind::Eof {
            debug!(
                tags = game.tags.len(),
                rounds = game.rounds.len(),
                "parsed game"
            );
            Ok(game)
        } else if game.result.is_some() {
            Err(ParseError::TrailingContent {
                offset: next.offset,
            })
        } else {
            Err(self.unexpected(expected_after(&game)))
        }
    }

    /// Parses any number of consecutive games. Every game but the last must
    /// end with a result.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`].
    pub fn parse_games(&mut self) -> Result<Vec<Game>, ParseError> {
        let mut games = Vec::new();

        while self.peek_kind() != TokenKind::Eof {
            let game = self.parse_game_body()?;
            if game.result.is_none() && self.peek_kind() != TokenKind::Eof {
                return Err(self.unexpected(expected_after(&game)));
            }
            games.push(game);
        }

        debug!(games = games.len(), "parsed games");
        Ok(games)
    }
}

/// What may follow a game body that ended without a result.
fn expected_after(game: &Game) -> TokenKinds {
    let continuation = match game.rounds.last() {
        None => TokenKinds::TAG | TokenKinds::MOVE_NUMBER,
        Some(Round { black: None, .. }) => TokenKinds::MOVE_START,
        Some(_) => TokenKinds::MOVE_NUMBER,
    };
    continuation | TokenKinds::RESULT | TokenKinds::EOF
}

fn move_number(token: &Token) -> Result<u32, ParseError> {
    let digits = token.literal.strip_suffix('.').unwrap_or(&token.literal);
    btoi::btou(digits.as_bytes()).map_err(|_| ParseError::InvalidMoveNumber {
        offset: token.offset,
    })
}

fn single_char(token: &Token) -> Option<char> {
    let mut chars = token.literal.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn piece_of(token: &Token) -> Result<Piece, ParseError> {
    single_char(token)
        .and_then(Piece::from_char)
        .ok_or(ParseError::InvalidToken {
            offset: token.offset,
        })
}

fn file_of(token: &Token) -> Result<File, ParseError> {
    single_char(token)
        .and_then(File::from_char)
        .ok_or(ParseError::InvalidToken {
            offset: token.offset,
        })
}

fn rank_of(token: &Token) -> Result<Rank, ParseError> {
    single_char(token)
        .and_then(Rank::from_char)
        .ok_or(ParseError::InvalidToken {
            offset: token.offset,
        })
}

/// Parses a complete game from tokens.
///
/// # Errors
///
/// See [`Parser::parse_game()`].
pub fn parse_game<I>(tokens: I) -> Result<Game, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_game()
}

/// Parses consecutive games from tokens.
///
/// # Errors
///
/// See [`Parser::parse_games()`].
pub fn parse_games<I>(tokens: I) -> Result<Vec<Game>, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_games()
}

/// Scans and parses a single move, with nothing but whitespace and comments
/// around it.
pub(crate) fn parse_move(s: &str) -> Result<Move, ParseError> {
    let mut parser = Parser::new(tokenize(s)?);
    let m = parser.parse_move()?;
    parser.expect_eof()?;
    Ok(m)
}
