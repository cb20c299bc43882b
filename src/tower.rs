use crate::MAX_PLAYERS;
use std::fmt;

/// Describes the color of a [`Tower`]. Each player owns the towers of exactly one color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TowerColor {
    /// `0`.
    White = 0,
    /// `1`.
    Black = 1,
    /// `2`.
    Grey = 2,
    /// `3`.
    Brown = 3,
}

impl TowerColor {
    /// # Returns
    ///
    /// An array of all [`TowerColor`] variants in the order they are handed out to players.
    #[inline]
    pub fn tower_colors() -> [TowerColor; MAX_PLAYERS] {
        [
            TowerColor::White,
            TowerColor::Black,
            TowerColor::Grey,
            TowerColor::Brown,
        ]
    }
}

impl fmt::Display for TowerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TowerColor::White => "white",
            TowerColor::Black => "black",
            TowerColor::Grey => "grey",
            TowerColor::Brown => "brown",
        };
        f.write_str(name)
    }
}

/// A tower either waits on its owner's school board or marks an island tile as conquered.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Tower {
    color: TowerColor,
}

impl Tower {
    /// A new tower of `color`.
    #[inline]
    pub fn new(color: TowerColor) -> Tower {
        Tower { color }
    }

    /// The color of the tower.
    #[inline]
    pub fn color(&self) -> TowerColor {
        self.color
    }
}
