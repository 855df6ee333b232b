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

//! Split movetext into [`Token`]s.
//!
//! # Examples
//!
//! ```
//! use movetext::{scanner::tokenize, TokenKind};
//!
//! let tokens = tokenize("1. O-O-O++")?;
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//!
//! assert_eq!(kinds, [
//!     TokenKind::MoveNumber,
//!     TokenKind::Whitespace,
//!     TokenKind::QueenSideCastle,
//!     TokenKind::DoubleCheck,
//!     TokenKind::Eof,
//! ]);
//! # Ok::<_, movetext::ParseError>(())
//! ```

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{
    errors::ParseError,
    token::{patterns, Token},
};

/// Matches a single token starting exactly at `cursor`.
///
/// Returns the token and the cursor advanced past it. The token kinds are
/// tried in [priority order](crate::TokenKind::PRIORITY) and the first one
/// that matches wins, regardless of match length.
///
/// # Errors
///
/// Returns [`ParseError::InvalidToken`] if no kind matches at `cursor`, or if
/// `cursor` is not a char boundary of `input`.
pub fn scan_at(input: &str, cursor: usize) -> Result<(Token, usize), ParseError> {
    let rest = input
        .get(cursor..)
        .ok_or(ParseError::InvalidToken { offset: cursor })?;

    for (kind, regex) in patterns() {
        if let Some(m) = regex.find(rest) {
            debug_assert_eq!(m.start(), 0);
            let token = Token::new(*kind, m.as_str(), cursor);
            trace!(kind = ?token.kind, offset = cursor, literal = m.as_str(), "scanned token");
            return Ok((token, cursor + m.end()));
        }
    }

    Err(ParseError::InvalidToken { offset: cursor })
}

/// A cursor over fully buffered movetext.
///
/// Yields tokens until (and including) the [`Eof`](crate::TokenKind::Eof)
/// token. Scanning is fail-fast: after the first error, the scanner yields
/// nothing more.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Scanner<'a> {
        Scanner {
            input,
            cursor: 0,
            done: false,
        }
    }

    /// The input being scanned.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Byte offset of the next token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the end-of-input token or an error has been produced.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Scans the token at the cursor and advances past it.
    ///
    /// Once the end-of-input token has been produced, keeps returning it.
    /// After an error, keeps returning the same error.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidToken`] if no token matches at the
    /// cursor.
    pub fn scan_next(&mut self) -> Result<Token, ParseError> {
        match scan_at(self.input, self.cursor) {
            Ok((token, cursor)) => {
                self.cursor = cursor;
                if token.kind == crate::TokenKind::Eof {
                    self.done = true;
                }
                Ok(token)
            }
            Err(err) => {
                debug!(%err, "scan failed");
                self.done = true;
                Err(err)
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            None
        } else {
            Some(self.scan_next())
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans all of `input`. The last token is always the end-of-input token.
///
/// # Errors
///
/// Returns the first [`ParseError::InvalidToken`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Scanner::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("valid movetext")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_scan_at_is_anchored() {
        // A knight letter further ahead must not be found from a space.
        let (token, cursor) = scan_at("  N", 0).expect("whitespace");
        assert_eq!(token, Token::new(TokenKind::Whitespace, "  ", 0));
        assert_eq!(cursor, 2);

        assert_eq!(scan_at("$1", 0), Err(ParseError::InvalidToken { offset: 0 }));
    }

    #[test]
    fn test_scan_at_rejects_split_char() {
        assert_eq!(
            scan_at("½-½", 1),
            Err(ParseError::InvalidToken { offset: 1 })
        );
    }

    #[test]
    fn test_ambiguous_prefixes() {
        assert_eq!(
            kinds("O-O-O O-O"),
            [
                TokenKind::QueenSideCastle,
                TokenKind::Whitespace,
                TokenKind::KingSideCastle,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("++ +"),
            [
                TokenKind::DoubleCheck,
                TokenKind::Whitespace,
                TokenKind::Check,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_results() {
        for (input, kind) in [
            ("1-0", TokenKind::WhiteWins),
            ("0-1", TokenKind::BlackWins),
            ("1/2-1/2", TokenKind::Draw),
            ("½-½", TokenKind::Draw),
            ("½–½", TokenKind::Draw),
        ] {
            assert_eq!(kinds(input), [kind, TokenKind::Eof], "{input}");
        }
    }

    #[test]
    fn test_comments() {
        let tokens = tokenize("{ a\nb } e4 ; rest of line\n").expect("valid");
        assert_eq!(tokens[0], Token::new(TokenKind::BracedComment, "{ a\nb }", 0));
        assert_eq!(tokens[5], Token::new(TokenKind::LineComment, "; rest of line", 11));
        assert_eq!(tokens[6], Token::new(TokenKind::Whitespace, "\n", 25));
        assert_eq!(tokens[7].kind, TokenKind::Eof);
    }

    #[test]
    fn test_braced_comment_is_not_greedy() {
        assert_eq!(
            kinds("{a} e4 {b}"),
            [
                TokenKind::BracedComment,
                TokenKind::Whitespace,
                TokenKind::File,
                TokenKind::Rank,
                TokenKind::Whitespace,
                TokenKind::BracedComment,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_scan_next_repeats_last_result() {
        let mut scanner = Scanner::new("%");
        assert_eq!(scanner.scan_next(), Err(ParseError::InvalidToken { offset: 0 }));
        assert!(scanner.is_done());
        assert_eq!(scanner.scan_next(), Err(ParseError::InvalidToken { offset: 0 }));
        assert_eq!(scanner.next(), None);

        let mut scanner = Scanner::new("e4");
        assert_eq!(scanner.by_ref().count(), 3);
        assert_eq!(scanner.scan_next(), Ok(Token::new(TokenKind::Eof, "", 2)));
        assert_eq!(scanner.scan_next(), Ok(Token::new(TokenKind::Eof, "", 2)));
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            tokenize("1. e4 {never closed"),
            Err(ParseError::InvalidToken { offset: 6 })
        );
        assert_eq!(
            tokenize("[Event \"open"),
            Err(ParseError::InvalidToken { offset: 0 })
        );
    }

    #[test]
    fn test_fused_after_error() {
        let mut scanner = Scanner::new("e4 %");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert_eq!(
            scanner.next(),
            Some(Err(ParseError::InvalidToken { offset: 3 }))
        );
        assert_eq!(scanner.next(), None);
        assert!(scanner.is_done());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            tokenize(""),
            Ok(vec![Token::new(TokenKind::Eof, "", 0)])
        );
    }
}
