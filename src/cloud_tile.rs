use crate::Student;

/// A tile refilled with students from the bag at the start of each round and emptied into one
/// player's entrance at the end of their turn.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CloudTile {
    students: Vec<Student>,
    capacity: usize,
}

impl CloudTile {
    /// An empty cloud tile holding up to `capacity` students.
    pub fn new(capacity: usize) -> CloudTile {
        CloudTile {
            students: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The students on the tile.
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The number of students the tile is filled with.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the tile has been taken this round or could not be filled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The number of students missing before the tile is full.
    #[inline]
    pub fn missing(&self) -> usize {
        self.capacity.saturating_sub(self.students.len())
    }

    /// Adds `students` to the tile, dropping none. The caller draws at most
    /// [missing](CloudTile::missing) students.
    pub fn fill(&mut self, students: impl IntoIterator<Item = Student>) {
        self.students.extend(students);
    }

    /// Removes every student from the tile at once.
    pub fn drain(&mut self) -> Vec<Student> {
        std::mem::take(&mut self.students)
    }
}
