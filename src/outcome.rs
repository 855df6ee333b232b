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

use crate::{token::TokenKind, Color};

/// Error when parsing an invalid result marker.
#[derive(Clone, Debug, thiserror::Error)]
#[error("invalid outcome")]
pub struct ParseOutcomeError;

/// The result marker of a game.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    Decisive { winner: Color },
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Decisive { winner } => Some(winner),
            Outcome::Draw => None,
        }
    }

    pub const fn from_winner(winner: Option<Color>) -> Outcome {
        match winner {
            Some(winner) => Outcome::Decisive { winner },
            None => Outcome::Draw,
        }
    }

    /// The canonical marker: `1-0`, `0-1` or `1/2-1/2`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Outcome::Decisive {
                winner: Color::White,
            } => "1-0",
            Outcome::Decisive {
                winner: Color::Black,
            } => "0-1",
            Outcome::Draw => "1/2-1/2",
        }
    }

    pub const fn from_token_kind(kind: TokenKind) -> Option<Outcome> {
        match kind {
            TokenKind::WhiteWins => Some(Outcome::Decisive {
                winner: Color::White,
            }),
            TokenKind::BlackWins => Some(Outcome::Decisive {
                winner: Color::Black,
            }),
            TokenKind::Draw => Some(Outcome::Draw),
            _ => None,
        }
    }

    /// Parses a result marker, including the Unicode draw spellings `½-½`
    /// and `½–½`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseOutcomeError`] for anything else.
    pub fn from_ascii(bytes: &[u8]) -> Result<Outcome, ParseOutcomeError> {
        match bytes {
            b"1-0" => Ok(Outcome::Decisive {
                winner: Color::White,
            }),
            b"0-1" => Ok(Outcome::Decisive {
                winner: Color::Black,
            }),
            b"1/2-1/2" => Ok(Outcome::Draw),
            _ => match std::str::from_utf8(bytes) {
                Ok("½-½" | "½–½") => Ok(Outcome::Draw),
                _ => Err(ParseOutcomeError),
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Outcome, ParseOutcomeError> {
        Outcome::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Outcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct OutcomeVisitor;

        impl serde::de::Visitor<'_> for OutcomeVisitor {
            type Value = Outcome;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("game result")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(OutcomeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        for outcome in [
            Outcome::from_winner(Some(Color::White)),
            Outcome::from_winner(Some(Color::Black)),
            Outcome::Draw,
        ] {
            assert_eq!(outcome.as_str().parse::<Outcome>().ok(), Some(outcome));
        }
        assert_eq!("½–½".parse::<Outcome>().ok(), Some(Outcome::Draw));
        assert!("*".parse::<Outcome>().is_err());
        assert!("1-1".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_from_token_kind() {
        assert_eq!(
            Outcome::from_token_kind(TokenKind::WhiteWins).and_then(Outcome::winner),
            Some(Color::White)
        );
        assert_eq!(Outcome::from_token_kind(TokenKind::Rank), None);
    }
}
