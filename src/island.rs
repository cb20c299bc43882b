use crate::{Color, Student, Tiles, Tower, TowerColor};
use smallvec::smallvec;

/// The smallest piece of an island. It holds any number of students and at most one
/// [tower](Tower).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct IslandTile {
    students: Vec<Student>,
    tower: Option<Tower>,
}

impl IslandTile {
    /// The students on the tile.
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The tower on the tile if the tile has been conquered.
    #[inline]
    pub fn tower(&self) -> Option<&Tower> {
        self.tower.as_ref()
    }
}

/// A never empty group of merged [island tiles](IslandTile).
///
/// Every tower on an island has the same [color](TowerColor). Islands only grow by
/// [merging](Island::merge) and are never split.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Island {
    tiles: Tiles,
    no_entry_tiles: usize,
}

impl Default for Island {
    fn default() -> Self {
        Island::new()
    }
}

impl Island {
    /// An island made of one empty tile.
    pub fn new() -> Island {
        Island {
            tiles: smallvec![IslandTile::default()],
            no_entry_tiles: 0,
        }
    }

    /// The merged tiles of the island.
    #[inline]
    pub fn tiles(&self) -> &[IslandTile] {
        &self.tiles
    }

    /// The number of merged tiles.
    #[inline]
    pub fn tiles_len(&self) -> usize {
        self.tiles.len()
    }

    /// Every student on every tile of the island.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.tiles.iter().flat_map(|tile| tile.students.iter())
    }

    /// The number of students of `color` on the island.
    pub fn count(&self, color: Color) -> usize {
        self.students()
            .filter(|student| student.color() == color)
            .count()
    }

    /// Puts `student` onto the last tile of the island.
    pub fn add_student(&mut self, student: Student) {
        if let Some(tile) = self.tiles.last_mut() {
            tile.students.push(student);
        }
    }

    /// The color of the towers on the island, or [None] when it has never been conquered.
    pub fn tower_color(&self) -> Option<TowerColor> {
        self.tiles
            .iter()
            .find_map(|tile| tile.tower.as_ref().map(Tower::color))
    }

    /// The number of towers on the island.
    pub fn towers_len(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.tower.is_some()).count()
    }

    /// Removes every tower from the island.
    pub fn take_towers(&mut self) -> Vec<Tower> {
        self.tiles
            .iter_mut()
            .filter_map(|tile| tile.tower.take())
            .collect()
    }

    /// Puts one tower onto each tile without a tower, in tile order, until either the tiles or
    /// `towers` run out.
    ///
    /// # Returns
    ///
    /// The towers that did not fit.
    pub fn place_towers(&mut self, towers: impl IntoIterator<Item = Tower>) -> Vec<Tower> {
        let mut towers = towers.into_iter();
        for tile in self.tiles.iter_mut().filter(|tile| tile.tower.is_none()) {
            match towers.next() {
                Some(tower) => tile.tower = Some(tower),
                None => break,
            }
        }
        towers.collect()
    }

    /// The number of no entry tiles on the island.
    #[inline]
    pub fn no_entry_tiles(&self) -> usize {
        self.no_entry_tiles
    }

    /// Puts a no entry tile onto the island.
    #[inline]
    pub fn add_no_entry_tile(&mut self) {
        self.no_entry_tiles += 1;
    }

    /// Removes one no entry tile.
    ///
    /// # Returns
    ///
    /// Whether a tile was removed.
    pub fn take_no_entry_tile(&mut self) -> bool {
        if self.no_entry_tiles == 0 {
            return false;
        }
        self.no_entry_tiles -= 1;
        true
    }

    /// Whether both islands hold towers of the same color.
    pub fn can_merge(&self, other: &Island) -> bool {
        matches!(
            (self.tower_color(), other.tower_color()),
            (Some(color), Some(other_color)) if color == other_color
        )
    }

    /// Appends the tiles and no entry tiles of `other` to the island.
    ///
    /// # Errors
    ///
    /// Returns `other` unchanged when the islands [cannot be merged](Island::can_merge).
    pub fn merge(&mut self, other: Island) -> Result<(), Island> {
        if !self.can_merge(&other) {
            return Err(other);
        }
        self.tiles.extend(other.tiles);
        self.no_entry_tiles += other.no_entry_tiles;
        Ok(())
    }
}
