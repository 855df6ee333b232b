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

use crate::{
    parser::Parser, san::Move, scanner::tokenize, tag::Tag, writer, Color, Outcome, ParseError,
};

/// A move number with the white move and, unless the game ends before it,
/// the black reply.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct Round {
    pub number: u32,
    pub white: Move,
    pub black: Option<Move>,
}

impl Round {
    pub fn get(&self, color: Color) -> Option<&Move> {
        match color {
            Color::White => Some(&self.white),
            Color::Black => self.black.as_ref(),
        }
    }

    /// The one or two moves of the round, white first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        std::iter::once(&self.white).chain(self.black.as_ref())
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number, self.white)?;
        if let Some(ref black) = self.black {
            write!(f, " {black}")?;
        }
        Ok(())
    }
}

/// A parsed game: tag pairs, rounds and an optional result.
///
/// # Examples
///
/// ```
/// use movetext::{Color, Game};
///
/// let game: Game = r#"
///     [White "Morphy"]
///     [Black "Duke Karl / Count Isouard"]
///
///     1. e4 e5 2. Nf3 d6 3. d4 Bg4 {This is a weak move already.}
///     4. dxe5 Bxf3 5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7
///     8. Nc3 c6 9. Bg5 {Black is in what's like a zugzwang position here.} b5
///     10. Nxb5 cxb5 11. Bxb5+ Nbd7 12. O-O-O Rd8
///     13. Rxd7 Rxd7 14. Rd1 Qe6 15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8# 1-0
/// "#.parse()?;
///
/// assert_eq!(game.tag("White"), Some("Morphy"));
/// assert_eq!(game.ply_count(), 33);
/// assert_eq!(game.result.and_then(|outcome| outcome.winner()), Some(Color::White));
/// assert!(game.moves().last().is_some_and(|m| m.is_checkmate()));
/// # Ok::<_, movetext::ParseError>(())
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default)]
pub struct Game {
    pub tags: Vec<Tag>,
    pub rounds: Vec<Round>,
    pub result: Option<Outcome>,
}

impl Game {
    /// The value of the first tag pair with the given key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == key)
            .map(|tag| tag.value.as_str())
    }

    /// All moves in order of play.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.rounds.iter().flat_map(Round::moves)
    }

    /// Number of half-moves.
    pub fn ply_count(&self) -> usize {
        self.rounds
            .iter()
            .map(|round| if round.black.is_some() { 2 } else { 1 })
            .sum()
    }

    /// The side to move after the last move.
    pub fn turn(&self) -> Color {
        Color::from_white(self.ply_count() % 2 == 0)
    }
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Game, ParseError> {
        Parser::new(tokenize(s)?).parse_game()
    }
}

/// Writes the canonical form with the default
/// [`Config`](crate::writer::Config).
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_game(f, self, &writer::Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        let game: Game = "3. Bb5 a6 4. Ba4".parse().expect("valid");
        assert_eq!(game.rounds[0].to_string(), "3. Bb5 a6");
        assert_eq!(game.rounds[1].to_string(), "4. Ba4");
        assert_eq!(game.rounds[1].get(Color::Black), None);
        assert_eq!(game.rounds[0].moves().count(), 2);
        assert_eq!(game.ply_count(), 3);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_empty_game() {
        let game: Game = "  { nothing here } ".parse().expect("valid");
        assert_eq!(game, Game::default());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.to_string(), "");
    }

    #[test]
    fn test_duplicate_tags() {
        let game: Game = "[Event \"a\"] [Event \"b\"]".parse().expect("valid");
        assert_eq!(game.tags.len(), 2);
        assert_eq!(game.tag("Event"), Some("a"));
        assert_eq!(game.tag("Site"), None);
    }
}
