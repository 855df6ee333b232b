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

use std::{borrow::Cow, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\[([A-Za-z0-9_]+)\s+"((?:[^"\\\n]|\\.)*)"\]$"#).expect("valid tag pattern")
});

/// Error when parsing a malformed tag pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
#[error("invalid tag pair")]
pub struct ParseTagError;

/// A tag pair like `[Event "Casual game"]`.
///
/// The value is stored decoded. [Backslash
/// escapes](http://www.saremba.de/chessgml/standards/pgn/pgn-complete.htm#c7)
/// are removed when parsing and added back when writing:
///
/// > A quote inside a string is represented by the backslash immediately
/// > followed by a quote. A backslash inside a string is represented by
/// > two adjacent backslashes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Tag {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Parses the literal of a [`TokenKind::Tag`](crate::TokenKind::Tag)
    /// token.
    ///
    /// # Examples
    ///
    /// ```
    /// use movetext::Tag;
    ///
    /// let tag = Tag::from_literal(r#"[White "Deep \"Blue\""]"#)?;
    /// assert_eq!(tag.key, "White");
    /// assert_eq!(tag.value, "Deep \"Blue\"");
    /// # Ok::<_, movetext::ParseTagError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseTagError`] if `literal` is not exactly one tag pair.
    pub fn from_literal(literal: &str) -> Result<Tag, ParseTagError> {
        let caps = TAG_PARTS.captures(literal).ok_or(ParseTagError)?;
        match (caps.get(1), caps.get(2)) {
            (Some(key), Some(value)) => Ok(Tag::new(key.as_str(), unescape(value.as_str()))),
            _ => Err(ParseTagError),
        }
    }
}

/// Drops the backslash of `\\` and `\"`. Any other backslash is kept.
/// Allocates only when there is something to drop.
fn unescape(raw: &str) -> Cow<'_, str> {
    let bytes = raw.as_bytes();
    let mut head = 0;
    let mut decoded = String::new();
    let mut escapes = raw.match_indices('\\').map(|(i, _)| i);
    while let Some(escape) = escapes.next() {
        if matches!(bytes.get(escape + 1), Some(b'\\' | b'"')) {
            decoded.push_str(&raw[head..escape]);
            head = escape + 1;
            if bytes[escape + 1] == b'\\' {
                escapes.next();
            }
        }
    }
    if head == 0 {
        Cow::Borrowed(raw)
    } else {
        decoded.push_str(&raw[head..]);
        Cow::Owned(decoded)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Tag, ParseTagError> {
        Tag::from_literal(s.trim())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} \"", self.key)?;
        for ch in self.value.chars() {
            if ch == '\\' || ch == '"' {
                f.write_str("\\")?;
            }
            write!(f, "{ch}")?;
        }
        f.write_str("\"]")
    }
}
