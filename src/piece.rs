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

use std::{fmt, str::FromStr};

/// Error when parsing an invalid piece letter.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid piece letter")]
pub struct ParsePieceError;

/// Piece letters that can appear in movetext: `Q`, `K`, `B`, `N`, `R`.
///
/// This is a syntactic category. Pawn moves are written without a piece
/// letter, so there is no `Pawn` variant.
///
/// # Examples
///
/// ```
/// use movetext::Piece;
///
/// assert_eq!(Piece::from_char('N'), Some(Piece::Knight));
/// assert_eq!(Piece::Knight.char(), 'N');
///
/// // Only uppercase letters name pieces, lowercase letters are files.
/// assert_eq!(Piece::from_char('b'), None);
/// ```
#[allow(missing_docs)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Piece {
    Queen,
    King,
    Bishop,
    Knight,
    Rook,
}

impl Piece {
    pub const fn from_char(ch: char) -> Option<Piece> {
        match ch {
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            'B' => Some(Piece::Bishop),
            'N' => Some(Piece::Knight),
            'R' => Some(Piece::Rook),
            _ => None,
        }
    }

    pub const fn char(self) -> char {
        match self {
            Piece::Queen => 'Q',
            Piece::King => 'K',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Rook => 'R',
        }
    }

    /// `Queen`, `King`, `Bishop`, `Knight`, and `Rook`, in this order.
    pub const ALL: [Piece; 5] = [
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Piece, ParsePieceError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Piece::from_char(ch).ok_or(ParsePieceError),
            _ => Err(ParsePieceError),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_chars() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_char(piece.char()), Some(piece));
            assert_eq!(piece.to_string().parse::<Piece>(), Ok(piece));
        }
        assert_eq!("P".parse::<Piece>(), Err(ParsePieceError));
        assert_eq!("QQ".parse::<Piece>(), Err(ParsePieceError));
    }
}
