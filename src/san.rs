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

//! Moves in Standard Algebraic Notation.
//!
//! # Examples
//!
//! Parse and write moves:
//!
//! ```
//! use movetext::{san::{Disambiguation, Move, San, Suffix}, File, Piece, Rank, Square};
//!
//! let m: Move = "Rd1xd5+!".parse()?;
//!
//! assert_eq!(m.san, San::Normal {
//!     piece: Some(Piece::Rook),
//!     disambiguation: Some(Disambiguation::Square(Square::from_coords(File::D, Rank::First))),
//!     capture: true,
//!     to: Square::from_coords(File::D, Rank::Fifth),
//!     promotion: None,
//! });
//! assert_eq!(m.suffix, Some(Suffix::Check));
//! assert_eq!(m.to_string(), "Rd1xd5+!");
//! # Ok::<_, movetext::ParseError>(())
//! ```

use std::{fmt, str::FromStr};

use crate::{
    annotation::Annotation, parser, token::TokenKind, CastlingSide, File, ParseError, Piece,
    Rank, Square,
};

/// Tells apart pieces of the same kind that can reach the same square.
///
/// Which piece is meant is up to whoever applies the move to a board. The
/// notation only fixes the shape.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Disambiguation {
    File(File),
    Rank(Rank),
    Square(Square),
}

impl Disambiguation {
    pub const fn from_parts(file: Option<File>, rank: Option<Rank>) -> Option<Disambiguation> {
        match (file, rank) {
            (Some(file), Some(rank)) => Some(Disambiguation::Square(Square::from_coords(file, rank))),
            (Some(file), None) => Some(Disambiguation::File(file)),
            (None, Some(rank)) => Some(Disambiguation::Rank(rank)),
            (None, None) => None,
        }
    }

    pub const fn file(self) -> Option<File> {
        match self {
            Disambiguation::File(file) => Some(file),
            Disambiguation::Square(square) => Some(square.file()),
            Disambiguation::Rank(_) => None,
        }
    }

    pub const fn rank(self) -> Option<Rank> {
        match self {
            Disambiguation::Rank(rank) => Some(rank),
            Disambiguation::Square(square) => Some(square.rank()),
            Disambiguation::File(_) => None,
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Disambiguation::File(file) => write!(f, "{file}"),
            Disambiguation::Rank(rank) => write!(f, "{rank}"),
            Disambiguation::Square(square) => write!(f, "{square}"),
        }
    }
}

/// The body of a move: a castle, or a piece (or pawn) going to a square.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum San {
    Normal {
        /// `None` for pawn moves.
        piece: Option<Piece>,
        disambiguation: Option<Disambiguation>,
        capture: bool,
        to: Square,
        promotion: Option<Piece>,
    },
    Castle(CastlingSide),
}

impl San {
    /// The destination square, `None` for castles.
    pub const fn to(&self) -> Option<Square> {
        match *self {
            San::Normal { to, .. } => Some(to),
            San::Castle(_) => None,
        }
    }

    pub const fn is_capture(&self) -> bool {
        matches!(*self, San::Normal { capture: true, .. })
    }

    pub const fn is_pawn_move(&self) -> bool {
        matches!(*self, San::Normal { piece: None, .. })
    }

    pub const fn is_promotion(&self) -> bool {
        matches!(
            *self,
            San::Normal {
                promotion: Some(_),
                ..
            }
        )
    }

    pub const fn castling_side(&self) -> Option<CastlingSide> {
        match *self {
            San::Castle(side) => Some(side),
            San::Normal { .. } => None,
        }
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            San::Normal {
                piece,
                disambiguation,
                capture,
                to,
                promotion,
            } => {
                if let Some(piece) = piece {
                    write!(f, "{piece}")?;
                }
                if let Some(disambiguation) = disambiguation {
                    write!(f, "{disambiguation}")?;
                }
                if capture {
                    f.write_str("x")?;
                }
                write!(f, "{to}")?;
                if let Some(promotion) = promotion {
                    write!(f, "={promotion}")?;
                }
                Ok(())
            }
            San::Castle(side) => f.write_str(side.as_str()),
        }
    }
}

/// Check (`+`), double check (`++`), or checkmate (`#`) suffix.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Suffix {
    Check,
    DoubleCheck,
    Checkmate,
}

impl Suffix {
    pub const fn as_str(self) -> &'static str {
        match self {
            Suffix::Check => "+",
            Suffix::DoubleCheck => "++",
            Suffix::Checkmate => "#",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<Suffix> {
        match kind {
            TokenKind::Check => Some(Suffix::Check),
            TokenKind::DoubleCheck => Some(Suffix::DoubleCheck),
            TokenKind::Checkmate => Some(Suffix::Checkmate),
            _ => None,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete move as written in movetext: [`San`], optional [`Suffix`] and
/// optional [`Annotation`].
///
/// `Display` writes the canonical form: piece, disambiguation, capture,
/// destination, promotion, suffix, annotation.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    pub san: San,
    pub suffix: Option<Suffix>,
    pub annotation: Option<Annotation>,
}

impl Move {
    pub const fn new(san: San) -> Move {
        Move {
            san,
            suffix: None,
            annotation: None,
        }
    }

    pub const fn is_checkmate(&self) -> bool {
        matches!(self.suffix, Some(Suffix::Checkmate))
    }
}

impl From<San> for Move {
    fn from(san: San) -> Move {
        Move::new(san)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses a single move. Surrounding whitespace and comments are
    /// allowed.
    fn from_str(s: &str) -> Result<Move, ParseError> {
        parser::parse_move(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san)?;
        if let Some(suffix) = self.suffix {
            write!(f, "{suffix}")?;
        }
        if let Some(annotation) = self.annotation {
            write!(f, "{annotation}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MoveVisitor;

        impl serde::de::Visitor<'_> for MoveVisitor {
            type Value = Move;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("SAN string with suffix and annotation")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(MoveVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKinds;

    fn square(name: &str) -> Square {
        name.parse().expect("valid square")
    }

    #[test]
    fn test_read_write() {
        for san in [
            "a1", "a8", "h1", "h8", "e4", "b6", "e8=Q", "f1=N#", "hxg7", "bxc1", "axe4", "bxc1+",
            "bxa8=R+", "Nf3", "Ba5", "Qh8", "Kh1", "Bba5", "N2c4", "Red3", "Ra1a8", "Qh4xe1#",
            "O-O", "O-O-O+", "O-O#", "Nf3!", "e4!?", "Qxf7#??", "Kd2++", "6h8", "exd6?!",
        ] {
            let result = san
                .parse::<Move>()
                .map_err(|err| (san, err))
                .expect("valid move")
                .to_string();
            assert_eq!(san, result, "read {san} write {result}");
        }
    }

    #[test]
    fn test_disambiguation_shapes() {
        let rook = |disambiguation| San::Normal {
            piece: Some(Piece::Rook),
            disambiguation,
            capture: false,
            to: square("d5"),
            promotion: None,
        };
        assert_eq!("Rd5".parse::<Move>().map(|m| m.san), Ok(rook(None)));
        assert_eq!(
            "Rdd5".parse::<Move>().map(|m| m.san),
            Ok(rook(Some(Disambiguation::File(File::D))))
        );
        assert_eq!(
            "R1d5".parse::<Move>().map(|m| m.san),
            Ok(rook(Some(Disambiguation::Rank(Rank::First))))
        );
        assert_eq!(
            "Rd1d5".parse::<Move>().map(|m| m.san),
            Ok(rook(Some(Disambiguation::Square(square("d1")))))
        );
    }

    #[test]
    fn test_pawn_moves() {
        assert_eq!(
            "exd8=N+".parse::<Move>(),
            Ok(Move {
                san: San::Normal {
                    piece: None,
                    disambiguation: Some(Disambiguation::File(File::E)),
                    capture: true,
                    to: square("d8"),
                    promotion: Some(Piece::Knight),
                },
                suffix: Some(Suffix::Check),
                annotation: None,
            })
        );
    }

    #[test]
    fn test_castle_with_suffix_and_annotation() {
        let m = "O-O-O#!!".parse::<Move>().expect("valid move");
        assert_eq!(m.san, San::Castle(CastlingSide::QueenSide));
        assert!(m.is_checkmate());
        assert_eq!(m.annotation, Some(Annotation::Brilliant));
    }

    #[test]
    fn test_missing_destination() {
        assert_eq!(
            "Nx".parse::<Move>(),
            Err(ParseError::IncompleteGame { offset: 2 })
        );
        assert_eq!(
            "N".parse::<Move>(),
            Err(ParseError::IncompleteGame { offset: 1 })
        );
        assert_eq!(
            "e8=".parse::<Move>(),
            Err(ParseError::IncompleteGame { offset: 3 })
        );
    }

    #[test]
    fn test_parts_must_be_contiguous() {
        assert_eq!(
            "N f3".parse::<Move>(),
            Err(ParseError::UnexpectedToken {
                offset: 1,
                found: TokenKind::Whitespace,
                expected: TokenKinds::FILE | TokenKinds::RANK | TokenKinds::CAPTURE,
            })
        );
    }

    #[test]
    fn test_marker_before_castle() {
        assert_eq!(
            "+O-O".parse::<Move>(),
            Err(ParseError::UnexpectedToken {
                offset: 0,
                found: TokenKind::Check,
                expected: TokenKinds::MOVE_START,
            })
        );
    }

    #[test]
    fn test_promotion_without_equals_sign() {
        let m: Move = "e8Q".parse().expect("valid move");
        assert!(m.san.is_promotion());
        assert_eq!(m.to_string(), "e8=Q");
        assert_eq!("e8Q".parse::<Move>(), "e8=Q".parse::<Move>());
    }

    #[test]
    fn test_unknown_annotation() {
        assert_eq!(
            "e4!!!".parse::<Move>(),
            Err(ParseError::UnknownAnnotation {
                offset: 2,
                glyphs: "!!!".to_owned(),
            })
        );
    }
}
