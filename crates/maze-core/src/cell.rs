//! The [`Cell`] type: one square of a maze.

/// Smallest cost a passable cell may carry.
pub const MIN_COST: u8 = 1;
/// Largest cost a passable cell may carry. Costs render as a single digit.
pub const MAX_COST: u8 = 9;

/// Marker distinguishing the two special cells of a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Normal,
    Start,
    End,
}

/// A maze cell: either an obstruction or a passable square with the cost of
/// entering it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub obstruction: bool,
    pub cost: u8,
    pub role: Role,
}

impl Cell {
    /// A passable cell with the given entry cost.
    #[inline]
    pub const fn open(cost: u8) -> Self {
        Self {
            obstruction: false,
            cost,
            role: Role::Normal,
        }
    }

    /// An obstruction. Its cost is never read.
    #[inline]
    pub const fn wall() -> Self {
        Self {
            obstruction: true,
            cost: MIN_COST,
            role: Role::Normal,
        }
    }

    /// Set the role (builder).
    #[inline]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Whether a search may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.obstruction
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::open(MIN_COST)
    }
}
