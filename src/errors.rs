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

use std::{fmt, iter};

use crate::token::{TokenKind, TokenKinds};

/// Error when scanning or parsing movetext.
///
/// Every variant carries the byte offset of the offending input, so that
/// [`ParseError::diagnostic()`] can point at it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// No token pattern matches at the offset.
    #[error("invalid token at offset {offset}")]
    InvalidToken { offset: usize },
    /// A token appeared where the grammar does not allow it.
    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: TokenKind,
        expected: TokenKinds,
    },
    /// The input ended in the middle of a round or move.
    #[error("incomplete game, input ends at offset {offset}")]
    IncompleteGame { offset: usize },
    /// A round is numbered lower than or equal to its predecessor.
    #[error("move number {found} at offset {offset} does not follow {previous}")]
    NonMonotonicMoveNumber {
        offset: usize,
        previous: u32,
        found: u32,
    },
    /// A move number does not fit into `u32`.
    #[error("move number out of range at offset {offset}")]
    InvalidMoveNumber { offset: usize },
    /// A run of `?` and `!` that is not a known annotation.
    #[error("unknown annotation {glyphs:?} at offset {offset}")]
    UnknownAnnotation { offset: usize, glyphs: String },
    /// Tokens after the result marker.
    #[error("trailing content after result at offset {offset}")]
    TrailingContent { offset: usize },
}

impl ParseError {
    /// Byte offset of the error in the input.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::InvalidToken { offset }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::IncompleteGame { offset }
            | ParseError::NonMonotonicMoveNumber { offset, .. }
            | ParseError::InvalidMoveNumber { offset }
            | ParseError::UnknownAnnotation { offset, .. }
            | ParseError::TrailingContent { offset } => offset,
        }
    }

    /// Locates the error in `input`, the text that was parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use movetext::Game;
    ///
    /// let input = "1. e4 e5\n2. Nf3 Nc6?!!";
    /// let err = input.parse::<Game>().unwrap_err();
    ///
    /// assert_eq!(err.diagnostic(input).to_string(), concat!(
    ///     "error: unknown annotation \"?!!\" at offset 19\n",
    ///     " --> 2:11\n",
    ///     "  |\n",
    ///     "2 | 2. Nf3 Nc6?!!\n",
    ///     "  |           ^\n",
    /// ));
    /// ```
    pub fn diagnostic(&self, input: &str) -> Diagnostic {
        Diagnostic::new(input, self.offset(), self.to_string())
    }
}

/// A parse error located in its input, rendered with a caret under the
/// offending column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    /// The line containing the error, without line terminator.
    pub source_line: String,
    pub message: String,
}

impl Diagnostic {
    fn new(input: &str, offset: usize, message: String) -> Diagnostic {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_start = input[..offset].rfind('\n').map_or(0, |nl| nl + 1);
        let line_end = input[offset..]
            .find('\n')
            .map_or(input.len(), |nl| offset + nl);
        Diagnostic {
            line: input[..line_start].matches('\n').count() + 1,
            column: input[line_start..offset].chars().count() + 1,
            source_line: input[line_start..line_end].trim_end_matches('\r').to_owned(),
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gutter = self.line.to_string().len();
        writeln!(f, "error: {}", self.message)?;
        writeln!(f, "{:gutter$}--> {}:{}", "", self.line, self.column)?;
        writeln!(f, "{:gutter$} |", "")?;
        writeln!(f, "{} | {}", self.line, self.source_line)?;
        // Tabs are copied so the caret lines up with the source line.
        let padding: String = self
            .source_line
            .chars()
            .chain(iter::repeat(' '))
            .take(self.column.saturating_sub(1))
            .map(|ch| if ch == '\t' { '\t' } else { ' ' })
            .collect();
        writeln!(f, "{:gutter$} | {padding}^", "")
    }
}
