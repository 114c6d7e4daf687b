//! Generator settings and the maze layout families.

use std::fmt;
use std::str::FromStr;

use maze_core::cell::{MAX_COST, MIN_COST};

/// Shape of a generated maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layout {
    /// Open cells of random cost with obstructions scattered at a fixed
    /// density. Endpoints anywhere.
    #[default]
    Scatter,
    /// Cost-1 corridors carved out of solid wall by a randomized
    /// backtracker. Start in the top row, end in the bottom row.
    Carved,
    /// Like [`Layout::Carved`], with each corridor segment weighted and a
    /// cost-1 spine running down from the start.
    Weighted,
    /// No obstructions; every cell has a random cost.
    Open,
}

impl Layout {
    pub const ALL: [Layout; 4] = [Layout::Scatter, Layout::Carved, Layout::Weighted, Layout::Open];

    pub const fn name(self) -> &'static str {
        match self {
            Layout::Scatter => "scatter",
            Layout::Carved => "carved",
            Layout::Weighted => "weighted",
            Layout::Open => "open",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unknown layout name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLayoutError(pub String);

impl fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown layout \u{201c}{}\u{201d}: choose scatter, carved, weighted or open",
            self.0
        )
    }
}

impl std::error::Error for ParseLayoutError {}

impl FromStr for Layout {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLayoutError(s.to_string()))
    }
}

/// Tunables of the generator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenConfig {
    /// Share of the cells turned into obstructions by [`Layout::Scatter`],
    /// in `[0, 1)`.
    pub obstruction_density: f64,
    /// Smallest random cell cost.
    pub cost_min: u8,
    /// Largest random cell cost.
    pub cost_max: u8,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            obstruction_density: 0.25,
            cost_min: MIN_COST,
            cost_max: MAX_COST,
        }
    }
}

impl GenConfig {
    /// Check that the density and the cost range are usable.
    pub fn validate(&self) -> Result<(), GenConfigError> {
        if !(0.0..1.0).contains(&self.obstruction_density) {
            return Err(GenConfigError::Density(self.obstruction_density));
        }
        if self.cost_min < MIN_COST || self.cost_max > MAX_COST || self.cost_min > self.cost_max {
            return Err(GenConfigError::CostRange {
                min: self.cost_min,
                max: self.cost_max,
            });
        }
        Ok(())
    }
}

/// Errors from [`GenConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum GenConfigError {
    Density(f64),
    CostRange { min: u8, max: u8 },
}

impl fmt::Display for GenConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenConfigError::Density(d) => {
                write!(f, "obstruction density {d} outside [0, 1)")
            }
            GenConfigError::CostRange { min, max } => write!(
                f,
                "cost range {min}..={max} must be non-empty and within {MIN_COST}..={MAX_COST}"
            ),
        }
    }
}

impl std::error::Error for GenConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GenConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_density() {
        for d in [-0.1, 1.0, 1.5, f64::NAN] {
            let c = GenConfig {
                obstruction_density: d,
                ..GenConfig::default()
            };
            assert!(matches!(c.validate(), Err(GenConfigError::Density(_))), "{d}");
        }
    }

    #[test]
    fn rejects_bad_cost_range() {
        for (min, max) in [(0, 5), (3, 10), (6, 2)] {
            let c = GenConfig {
                cost_min: min,
                cost_max: max,
                ..GenConfig::default()
            };
            assert_eq!(c.validate(), Err(GenConfigError::CostRange { min, max }));
        }
        let single = GenConfig {
            cost_min: 4,
            cost_max: 4,
            ..GenConfig::default()
        };
        assert_eq!(single.validate(), Ok(()));
    }

    #[test]
    fn parse_layout_names() {
        assert_eq!("Carved".parse(), Ok(Layout::Carved));
        assert_eq!(" open ".parse(), Ok(Layout::Open));
        assert_eq!(
            "spiral".parse::<Layout>(),
            Err(ParseLayoutError("spiral".to_string()))
        );
        for l in Layout::ALL {
            assert_eq!(l.to_string().parse(), Ok(l));
        }
    }
}
