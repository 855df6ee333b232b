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

/// Error when parsing a glyph run that is not a known annotation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, thiserror::Error)]
#[error("invalid annotation")]
pub struct InvalidAnnotation;

/// A move quality judgement like `?` or `!!`.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Annotation {
    /// `?`
    Mistake,
    /// `??`
    Blunder,
    /// `?!`
    Dubious,
    /// `!?`
    Interesting,
    /// `!`
    Good,
    /// `!!`
    Brilliant,
}

impl Annotation {
    /// Classifies a run of `?` and `!` glyphs.
    ///
    /// # Examples
    ///
    /// ```
    /// use movetext::Annotation;
    ///
    /// assert_eq!(Annotation::from_ascii(b"?!"), Ok(Annotation::Dubious));
    /// assert!(Annotation::from_ascii(b"!!!").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAnnotation`] unless the input is exactly one of the
    /// six known glyph runs.
    pub fn from_ascii(s: &[u8]) -> Result<Annotation, InvalidAnnotation> {
        Ok(match s {
            b"?" => Annotation::Mistake,
            b"??" => Annotation::Blunder,
            b"?!" => Annotation::Dubious,
            b"!?" => Annotation::Interesting,
            b"!" => Annotation::Good,
            b"!!" => Annotation::Brilliant,
            _ => return Err(InvalidAnnotation),
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Annotation::Mistake => "?",
            Annotation::Blunder => "??",
            Annotation::Dubious => "?!",
            Annotation::Interesting => "!?",
            Annotation::Good => "!",
            Annotation::Brilliant => "!!",
        }
    }

    /// The equivalent numeric annotation glyph, as in `$1` for `!`.
    pub const fn nag(self) -> u8 {
        match self {
            Annotation::Good => 1,
            Annotation::Mistake => 2,
            Annotation::Brilliant => 3,
            Annotation::Blunder => 4,
            Annotation::Interesting => 5,
            Annotation::Dubious => 6,
        }
    }

    pub const fn from_nag(nag: u8) -> Option<Annotation> {
        Some(match nag {
            1 => Annotation::Good,
            2 => Annotation::Mistake,
            3 => Annotation::Brilliant,
            4 => Annotation::Blunder,
            5 => Annotation::Interesting,
            6 => Annotation::Dubious,
            _ => return None,
        })
    }

    pub const ALL: [Annotation; 6] = [
        Annotation::Mistake,
        Annotation::Blunder,
        Annotation::Dubious,
        Annotation::Interesting,
        Annotation::Good,
        Annotation::Brilliant,
    ];
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Annotation {
    type Err = InvalidAnnotation;

    fn from_str(s: &str) -> Result<Annotation, InvalidAnnotation> {
        Annotation::from_ascii(s.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Annotation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Annotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct AnnotationVisitor;

        impl serde::de::Visitor<'_> for AnnotationVisitor {
            type Value = Annotation;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("annotation glyphs")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(AnnotationVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation() {
        for annotation in Annotation::ALL {
            assert_eq!(annotation.as_str().parse(), Ok(annotation));
            assert_eq!(Annotation::from_nag(annotation.nag()), Some(annotation));
        }
        assert_eq!(Annotation::from_nag(0), None);
    }

    #[test]
    fn test_unknown_glyph_runs() {
        for glyphs in ["", "???", "!!!", "?!?", "!?!", "$1"] {
            assert_eq!(glyphs.parse::<Annotation>(), Err(InvalidAnnotation));
        }
    }
}
