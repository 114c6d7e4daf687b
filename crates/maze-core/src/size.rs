//! Fixed maze size classes.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// The three maze sizes a client may request.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeClass {
    #[default]
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Grid dimensions as `(width, height)`.
    pub const fn dims(self) -> Point {
        match self {
            SizeClass::Small => Point::new(7, 7),
            SizeClass::Medium => Point::new(15, 15),
            SizeClass::Large => Point::new(25, 25),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown size class name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSizeError(pub String);

impl fmt::Display for ParseSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid maze size \u{201c}{}\u{201d}: choose small, medium or large",
            self.0
        )
    }
}

impl std::error::Error for ParseSizeError {}

impl FromStr for SizeClass {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeClass::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_table() {
        assert_eq!(SizeClass::Small.dims(), Point::new(7, 7));
        assert_eq!(SizeClass::Medium.dims(), Point::new(15, 15));
        assert_eq!(SizeClass::Large.dims(), Point::new(25, 25));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("small".parse(), Ok(SizeClass::Small));
        assert_eq!("Medium".parse(), Ok(SizeClass::Medium));
        assert_eq!("LARGE".parse(), Ok(SizeClass::Large));
        assert_eq!(
            "huge".parse::<SizeClass>(),
            Err(ParseSizeError("huge".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for c in SizeClass::ALL {
            assert_eq!(c.to_string().parse(), Ok(c));
        }
    }
}
