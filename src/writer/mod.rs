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

//! Write [`Game`]s in canonical form.
//!
//! The canonical form is one tag pair per line, an empty line, then the
//! rounds separated by single spaces and wrapped at a maximum line width,
//! then the result. Parsing canonical output gives back an equal game.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use movetext::{writer::{Config, DrawNotation, Writer}, Game};
//!
//! let game: Game = "1. d4 d5 2. c4 c6 ½-½".parse()?;
//! assert_eq!(game.to_string(), "1. d4 d5 2. c4 c6 1/2-1/2\n");
//!
//! let mut writer = Writer::new(Vec::new());
//! *writer.config_mut() = Config {
//!     draw: DrawNotation::Unicode,
//!     max_line_width: NonZeroUsize::new(12),
//!     ..Config::default()
//! };
//! writer.write_game(&game)?;
//! assert_eq!(writer.writer, "1. d4 d5 2.\nc4 c6 ½-½\n".as_bytes());
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod config;

use std::{fmt, io};

pub use config::{Config, DrawNotation};

use crate::{Game, Outcome};

/// Writes games to an [`io::Write`].
#[derive(Debug)]
pub struct Writer<W> {
    pub writer: W,
    config: Config,
    buffer: String,
    total_bytes_written: usize,
}

impl<W> Writer<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, Config::default())
    }

    pub fn with_config(writer: W, config: Config) -> Self {
        Self {
            writer,
            config,
            buffer: String::with_capacity(256),
            total_bytes_written: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Gets the total amount of bytes written.
    pub fn total_bytes_written(&self) -> usize {
        self.total_bytes_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: io::Write> Writer<W> {
    /// Writes a game. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Errors if the underlying writer fails.
    pub fn write_game(&mut self, game: &Game) -> io::Result<usize> {
        self.buffer.clear();
        write_game(&mut self.buffer, game, &self.config)
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "formatter error"))?;
        self.writer.write_all(self.buffer.as_bytes())?;
        self.total_bytes_written += self.buffer.len();
        Ok(self.buffer.len())
    }

    /// Writes games separated by empty lines. Returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Errors if the underlying writer fails.
    pub fn write_games<'a, I>(&mut self, games: I) -> io::Result<usize>
    where
        I: IntoIterator<Item = &'a Game>,
    {
        let mut bytes_written = 0;
        for (i, game) in games.into_iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b"\n")?;
                self.total_bytes_written += 1;
                bytes_written += 1;
            }
            bytes_written += self.write_game(game)?;
        }
        Ok(bytes_written)
    }
}

/// Places space separated words on lines of limited width.
struct Wrap<'w, F> {
    f: &'w mut F,
    width: Option<usize>,
    column: usize,
}

impl<F: fmt::Write> Wrap<'_, F> {
    fn word(&mut self, word: &str) -> fmt::Result {
        let len = word.chars().count();
        if self.column > 0 {
            if self.width.map_or(false, |width| self.column + 1 + len > width) {
                self.f.write_char('\n')?;
                self.column = 0;
            } else {
                self.f.write_char(' ')?;
                self.column += 1;
            }
        }
        self.f.write_str(word)?;
        self.column += len;
        Ok(())
    }

    fn finish(self) -> fmt::Result {
        if self.column > 0 {
            self.f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Formats `game` in canonical form, as configured.
///
/// # Errors
///
/// Errors only if `f` does.
pub fn write_game<F: fmt::Write>(f: &mut F, game: &Game, config: &Config) -> fmt::Result {
    for tag in &game.tags {
        writeln!(f, "{tag}")?;
    }

    let has_movetext = !game.rounds.is_empty() || game.result.is_some();
    if !game.tags.is_empty() && has_movetext && config.blank_line_after_tags {
        f.write_char('\n')?;
    }

    let mut wrap = Wrap {
        f,
        width: config.max_line_width.map(|width| width.get()),
        column: 0,
    };
    for round in &game.rounds {
        wrap.word(&format!("{}.", round.number))?;
        wrap.word(&round.white.to_string())?;
        if let Some(black) = &round.black {
            wrap.word(&black.to_string())?;
        }
    }
    match game.result {
        Some(Outcome::Draw) => wrap.word(config.draw.as_str())?,
        Some(outcome) => wrap.word(outcome.as_str())?,
        None => (),
    }
    wrap.finish()
}
