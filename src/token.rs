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

//! The lexical vocabulary of movetext.
//!
//! Every [`TokenKind`] has a pattern. The [scanner](crate::scanner) tries
//! the patterns in [`TokenKind::PRIORITY`] order at the cursor and takes the
//! first one that matches. Several patterns match prefixes of others
//! (`O-O` and `O-O-O`, `+` and `++`), so the order is significant.

use std::fmt;

use bitflags::bitflags;
use once_cell::sync::Lazy;
use regex::Regex;

/// The kind of a [`Token`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum TokenKind {
    Whitespace,
    Eof,
    MoveNumber,
    KingSideCastle,
    QueenSideCastle,
    Piece,
    Rank,
    File,
    Capture,
    Promotion,
    Check,
    DoubleCheck,
    Checkmate,
    Annotation,
    WhiteWins,
    BlackWins,
    Draw,
    Tag,
    LineComment,
    BracedComment,
}

impl TokenKind {
    /// All token kinds, in the order the scanner tries them.
    ///
    /// Invariants of this order:
    ///
    /// * `QueenSideCastle` before `KingSideCastle` and `DoubleCheck` before
    ///   `Check`, because the latter match a prefix of the former.
    /// * Comments and tags before any move token.
    /// * Results before `Rank`, because `1-0` and `1/2-1/2` start with a
    ///   rank digit.
    /// * `Eof` last. It only matches the empty string at the end of input.
    pub const PRIORITY: [TokenKind; 20] = [
        TokenKind::Whitespace,
        TokenKind::LineComment,
        TokenKind::BracedComment,
        TokenKind::Tag,
        TokenKind::MoveNumber,
        TokenKind::WhiteWins,
        TokenKind::BlackWins,
        TokenKind::Draw,
        TokenKind::QueenSideCastle,
        TokenKind::KingSideCastle,
        TokenKind::Piece,
        TokenKind::Rank,
        TokenKind::File,
        TokenKind::Capture,
        TokenKind::Promotion,
        TokenKind::DoubleCheck,
        TokenKind::Check,
        TokenKind::Checkmate,
        TokenKind::Annotation,
        TokenKind::Eof,
    ];

    /// The regular expression recognizing this kind, without anchor.
    pub const fn pattern(self) -> &'static str {
        match self {
            TokenKind::Whitespace => r"\s+",
            TokenKind::Eof => r"\z",
            TokenKind::MoveNumber => r"[0-9]+\.",
            TokenKind::KingSideCastle => r"O-O",
            TokenKind::QueenSideCastle => r"O-O-O",
            TokenKind::Piece => r"[QKBNR]",
            TokenKind::Rank => r"[1-8]",
            TokenKind::File => r"[a-h]",
            TokenKind::Capture => r"x",
            TokenKind::Promotion => r"=",
            TokenKind::Check => r"\+",
            TokenKind::DoubleCheck => r"\+\+",
            TokenKind::Checkmate => r"#",
            TokenKind::Annotation => r"[!?]+",
            TokenKind::WhiteWins => r"1-0",
            TokenKind::BlackWins => r"0-1",
            TokenKind::Draw => r"1/2-1/2|½[-–]½",
            TokenKind::Tag => r#"\[[A-Za-z0-9_]+\s+"(?:[^"\\\n]|\\.)*"\]"#,
            TokenKind::LineComment => r";[^\n]*",
            TokenKind::BracedComment => r"\{[^}]*\}",
        }
    }

    /// Whitespace and comments. These never reach the grammar.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BracedComment
        )
    }

    pub const fn is_result(self) -> bool {
        matches!(
            self,
            TokenKind::WhiteWins | TokenKind::BlackWins | TokenKind::Draw
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Eof => "end of input",
            TokenKind::MoveNumber => "move number",
            TokenKind::KingSideCastle => "king-side castle",
            TokenKind::QueenSideCastle => "queen-side castle",
            TokenKind::Piece => "piece",
            TokenKind::Rank => "rank",
            TokenKind::File => "file",
            TokenKind::Capture => "capture",
            TokenKind::Promotion => "promotion",
            TokenKind::Check => "check",
            TokenKind::DoubleCheck => "double check",
            TokenKind::Checkmate => "checkmate",
            TokenKind::Annotation => "annotation",
            TokenKind::WhiteWins => "white win",
            TokenKind::BlackWins => "black win",
            TokenKind::Draw => "draw",
            TokenKind::Tag => "tag",
            TokenKind::LineComment => "comment",
            TokenKind::BracedComment => "braced comment",
        }
    }

    pub const fn flag(self) -> TokenKinds {
        match self {
            TokenKind::Whitespace => TokenKinds::WHITESPACE,
            TokenKind::Eof => TokenKinds::EOF,
            TokenKind::MoveNumber => TokenKinds::MOVE_NUMBER,
            TokenKind::KingSideCastle => TokenKinds::KING_SIDE_CASTLE,
            TokenKind::QueenSideCastle => TokenKinds::QUEEN_SIDE_CASTLE,
            TokenKind::Piece => TokenKinds::PIECE,
            TokenKind::Rank => TokenKinds::RANK,
            TokenKind::File => TokenKinds::FILE,
            TokenKind::Capture => TokenKinds::CAPTURE,
            TokenKind::Promotion => TokenKinds::PROMOTION,
            TokenKind::Check => TokenKinds::CHECK,
            TokenKind::DoubleCheck => TokenKinds::DOUBLE_CHECK,
            TokenKind::Checkmate => TokenKinds::CHECKMATE,
            TokenKind::Annotation => TokenKinds::ANNOTATION,
            TokenKind::WhiteWins => TokenKinds::WHITE_WINS,
            TokenKind::BlackWins => TokenKinds::BLACK_WINS,
            TokenKind::Draw => TokenKinds::DRAW,
            TokenKind::Tag => TokenKinds::TAG,
            TokenKind::LineComment => TokenKinds::LINE_COMMENT,
            TokenKind::BracedComment => TokenKinds::BRACED_COMMENT,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of [`TokenKind`]s, used to report what the grammar expected.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct TokenKinds: u32 {
        const WHITESPACE = 1 << 0;
        const EOF = 1 << 1;
        const MOVE_NUMBER = 1 << 2;
        const KING_SIDE_CASTLE = 1 << 3;
        const QUEEN_SIDE_CASTLE = 1 << 4;
        const PIECE = 1 << 5;
        const RANK = 1 << 6;
        const FILE = 1 << 7;
        const CAPTURE = 1 << 8;
        const PROMOTION = 1 << 9;
        const CHECK = 1 << 10;
        const DOUBLE_CHECK = 1 << 11;
        const CHECKMATE = 1 << 12;
        const ANNOTATION = 1 << 13;
        const WHITE_WINS = 1 << 14;
        const BLACK_WINS = 1 << 15;
        const DRAW = 1 << 16;
        const TAG = 1 << 17;
        const LINE_COMMENT = 1 << 18;
        const BRACED_COMMENT = 1 << 19;
    }
}

impl TokenKinds {
    /// Tokens that can start a move.
    pub const MOVE_START: TokenKinds = TokenKinds::KING_SIDE_CASTLE
        .union(TokenKinds::QUEEN_SIDE_CASTLE)
        .union(TokenKinds::PIECE)
        .union(TokenKinds::FILE)
        .union(TokenKinds::RANK)
        .union(TokenKinds::CAPTURE);

    pub const RESULT: TokenKinds = TokenKinds::WHITE_WINS
        .union(TokenKinds::BLACK_WINS)
        .union(TokenKinds::DRAW);

    pub const SUFFIX: TokenKinds = TokenKinds::CHECK
        .union(TokenKinds::DOUBLE_CHECK)
        .union(TokenKinds::CHECKMATE);

    pub fn contains_kind(self, kind: TokenKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterates over the kinds in the set, in priority order.
    pub fn kinds(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::PRIORITY
            .into_iter()
            .filter(move |kind| self.contains_kind(*kind))
    }
}

impl From<TokenKind> for TokenKinds {
    fn from(kind: TokenKind) -> TokenKinds {
        kind.flag()
    }
}

impl fmt::Display for TokenKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.kinds().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

/// A classified piece of input.
///
/// Concatenating the literals of all tokens of a scan, in order, reproduces
/// the input exactly.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched text.
    pub literal: String,
    /// Byte offset of the first byte of `literal` in the input.
    pub offset: usize,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, literal: S, offset: usize) -> Token {
        Token {
            kind,
            literal: literal.into(),
            offset,
        }
    }

    /// Byte offset just past the end of the literal.
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.literal.len()
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}

static PATTERNS: Lazy<[(TokenKind, Regex); 20]> = Lazy::new(|| {
    TokenKind::PRIORITY.map(|kind| {
        let anchored = format!("^(?:{})", kind.pattern());
        (kind, Regex::new(&anchored).expect("valid token pattern"))
    })
});

/// The compiled pattern table, in priority order.
pub(crate) fn patterns() -> &'static [(TokenKind, Regex)] {
    &PATTERNS[..]
}
