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

use std::fmt;

use crate::token::{Token, TokenKind};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CommentKind {
    /// `; until end of line`
    Line,
    /// `{ possibly spanning lines }`
    Braced,
}

/// A comment, excluding its delimiters.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Comment<'a> {
    pub kind: CommentKind,
    /// Byte offset of the opening delimiter.
    pub offset: usize,
    text: &'a str,
}

impl<'a> Comment<'a> {
    /// Views a comment token. Returns `None` for any other kind of token.
    pub fn from_token(token: &'a Token) -> Option<Comment<'a>> {
        let (kind, text) = match token.kind {
            TokenKind::LineComment => (CommentKind::Line, token.literal.strip_prefix(';')?),
            TokenKind::BracedComment => (
                CommentKind::Braced,
                token.literal.strip_prefix('{')?.strip_suffix('}')?,
            ),
            _ => return None,
        };
        Some(Comment {
            kind,
            offset: token.offset,
            text,
        })
    }

    /// The text between the delimiters, as written.
    pub fn raw(&self) -> &'a str {
        self.text
    }

    /// The text between the delimiters, without surrounding whitespace.
    pub fn text(&self) -> &'a str {
        self.text.trim()
    }
}

impl fmt::Debug for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} {:?}", self.kind, self.offset, self.text)
    }
}

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CommentKind::Line => write!(f, ";{}", self.text),
            CommentKind::Braced => write!(f, "{{{}}}", self.text),
        }
    }
}
