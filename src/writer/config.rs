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

use std::num::NonZeroUsize;

/// How to spell a drawn result.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DrawNotation {
    /// `1/2-1/2`
    #[default]
    Ascii,
    /// `½-½`
    Unicode,
}

impl DrawNotation {
    pub const fn as_str(self) -> &'static str {
        match self {
            DrawNotation::Ascii => "1/2-1/2",
            DrawNotation::Unicode => "½-½",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// Defaults to [`DrawNotation::Ascii`].
    pub draw: DrawNotation,
    /// Whether to put an empty line between the tag section and the
    /// movetext, if both are present.
    ///
    /// Defaults to `true`.
    pub blank_line_after_tags: bool,
    /// Wrap movetext before a token would extend a line beyond this many
    /// characters. A single token longer than the limit still gets a line of
    /// its own. `None` keeps all movetext on one line.
    ///
    /// Defaults to `80`.
    pub max_line_width: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            draw: DrawNotation::default(),
            blank_line_after_tags: true,
            max_line_width: NonZeroUsize::new(80),
        }
    }
}
