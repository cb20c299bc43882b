use crate::{
    Color, Container, Entrance, GameError, Professor, Professors, Resource, Student, Tower,
    TowerColor, Towers, COIN_POSITION, DINING_CAPACITY,
};
use itertools::Itertools;

/// The school board of one player: an entrance, a dining room with one table per
/// [color](Color), the [professors](Professor) the player controls, the [towers](Tower) not
/// placed on islands yet and the coins of an expert match.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SchoolBoard {
    entrance: Entrance,
    entrance_capacity: usize,
    dining: [Vec<Student>; Color::COLORS_LEN],
    professors: Professors,
    towers: Towers,
    tower_color: TowerColor,
    coins: usize,
}

impl SchoolBoard {
    /// # Arguments
    ///
    /// * `entrance_capacity`: The number of students the entrance holds.
    /// * `tower_color`: The color of the towers owned by the player.
    /// * `towers_len`: The number of towers put on the board.
    ///
    /// # Returns
    ///
    /// A board with an empty entrance, an empty dining room, no professors and no coins.
    pub fn new(
        entrance_capacity: usize,
        tower_color: TowerColor,
        towers_len: usize,
    ) -> SchoolBoard {
        SchoolBoard {
            entrance: Entrance::with_capacity(entrance_capacity),
            entrance_capacity,
            dining: Default::default(),
            professors: Professors::new(),
            towers: (0..towers_len).map(|_| Tower::new(tower_color)).collect(),
            tower_color,
            coins: 0,
        }
    }

    /// The students waiting in the entrance.
    #[inline]
    pub fn entrance(&self) -> &[Student] {
        &self.entrance
    }

    /// The number of students the entrance holds when full.
    #[inline]
    pub fn entrance_capacity(&self) -> usize {
        self.entrance_capacity
    }

    /// The number of free seats in the entrance.
    #[inline]
    pub fn entrance_missing(&self) -> usize {
        self.entrance_capacity.saturating_sub(self.entrance.len())
    }

    /// Puts `students` into the entrance.
    ///
    /// # Errors
    ///
    /// * [Container::Entrance] When the students do not fit. Nothing is added.
    pub fn fill_entrance(&mut self, students: Vec<Student>) -> Result<(), GameError> {
        if students.len() > self.entrance_missing() {
            return Err(GameError::CapacityExceeded {
                container: Container::Entrance,
                count: self.entrance.len(),
            });
        }
        self.entrance.extend(students);
        Ok(())
    }

    /// Removes the first student of `color` from the entrance.
    ///
    /// # Errors
    ///
    /// * [Resource::EntranceStudent] When no student of `color` is in the entrance.
    pub fn pick_from_entrance(&mut self, color: Color) -> Result<Student, GameError> {
        let index = self
            .entrance
            .iter()
            .position(|student| student.color() == color)
            .ok_or(GameError::InsufficientResource(Resource::EntranceStudent(
                color,
            )))?;
        Ok(self.entrance.remove(index))
    }

    /// The students sitting at the table of `color`.
    #[inline]
    pub fn dining(&self, color: Color) -> &[Student] {
        &self.dining[color as usize]
    }

    /// The number of students sitting at the table of `color`.
    #[inline]
    pub fn dining_count(&self, color: Color) -> usize {
        self.dining[color as usize].len()
    }

    /// Checks that one more student of `color` fits into the dining room.
    ///
    /// # Errors
    ///
    /// * [Container::DiningRoom] When the table of `color` is full.
    pub fn check_dining(&self, color: Color) -> Result<(), GameError> {
        let count = self.dining_count(color);
        if count >= DINING_CAPACITY {
            return Err(GameError::CapacityExceeded {
                container: Container::DiningRoom(color),
                count,
            });
        }
        Ok(())
    }

    /// Seats `student` at the table of its color.
    ///
    /// # Errors
    ///
    /// * [Container::DiningRoom] When the table is full. The student is handed back.
    ///
    /// # Returns
    ///
    /// Whether the student took a seat which earns a coin.
    pub fn add_to_dining(&mut self, student: Student) -> Result<bool, (Student, GameError)> {
        if let Err(error) = self.check_dining(student.color()) {
            return Err((student, error));
        }
        let table = &mut self.dining[student.color() as usize];
        table.push(student);
        Ok(table.len() % COIN_POSITION == 0)
    }

    /// Removes one student from the table of `color`.
    ///
    /// # Errors
    ///
    /// * [Resource::DiningStudent] When the table of `color` is empty.
    pub fn remove_from_dining(&mut self, color: Color) -> Result<Student, GameError> {
        self.dining[color as usize]
            .pop()
            .ok_or(GameError::InsufficientResource(Resource::DiningStudent(
                color,
            )))
    }

    /// Removes up to `len` students from the table of `color`.
    pub fn take_from_dining(&mut self, color: Color, len: usize) -> Vec<Student> {
        let table = &mut self.dining[color as usize];
        let start = table.len().saturating_sub(len);
        table.drain(start..).collect()
    }

    /// The professors controlled by the player.
    #[inline]
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// Whether the player controls the professor of `color`.
    pub fn has_professor(&self, color: Color) -> bool {
        self.professors
            .iter()
            .any(|professor| professor.color() == color)
    }

    /// Gives the player control of `professor`.
    pub fn add_professor(&mut self, professor: Professor) {
        self.professors.push(professor);
    }

    /// Removes the professor of `color` from the board if the player controls it.
    pub fn remove_professor(&mut self, color: Color) -> Option<Professor> {
        let index = self
            .professors
            .iter()
            .position(|professor| professor.color() == color)?;
        Some(self.professors.remove(index))
    }

    /// The color of the towers owned by the player.
    #[inline]
    pub fn tower_color(&self) -> TowerColor {
        self.tower_color
    }

    /// The number of towers still on the board.
    #[inline]
    pub fn towers_len(&self) -> usize {
        self.towers.len()
    }

    /// Removes up to `len` towers from the board.
    pub fn take_towers(&mut self, len: usize) -> Vec<Tower> {
        let start = self.towers.len().saturating_sub(len);
        self.towers.drain(start..).collect_vec()
    }

    /// Puts `towers` back onto the board.
    pub fn return_towers(&mut self, towers: impl IntoIterator<Item = Tower>) {
        self.towers.extend(towers);
    }

    /// The coins held by the player.
    #[inline]
    pub fn coins(&self) -> usize {
        self.coins
    }

    /// Gives the player `coins`.
    #[inline]
    pub fn add_coins(&mut self, coins: usize) {
        self.coins += coins;
    }

    /// Takes `cost` coins from the player.
    ///
    /// # Errors
    ///
    /// * [Resource::Coins] When the player holds fewer than `cost` coins. Nothing is paid.
    pub fn pay(&mut self, cost: usize) -> Result<(), GameError> {
        if self.coins < cost {
            return Err(GameError::InsufficientResource(Resource::Coins {
                required: cost,
                available: self.coins,
            }));
        }
        self.coins -= cost;
        Ok(())
    }
}
