use crate::{Color, GameError, Resource, Student};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;

/// This is a bag of all the students that are not on the table yet.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Bag {
    students: Vec<Student>,
}

impl Bag {
    /// An empty bag.
    pub fn new() -> Bag {
        Bag::default()
    }

    /// Adds `per_color` students of every [color](Color) and shuffles the whole bag.
    pub fn fill<R: Rng + ?Sized>(&mut self, rng: &mut R, per_color: usize) {
        self.students.reserve(per_color * Color::COLORS_LEN);
        for color in Color::colors() {
            self.students.extend((0..per_color).map(|_| Student::new(color)));
        }
        self.students.shuffle(rng);
    }

    /// The number of students in the bag.
    #[inline]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the bag has run out of students.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The students in the bag in drawing order, last first.
    #[inline]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Draws one student or [None] when the bag is empty.
    #[inline]
    pub fn draw(&mut self) -> Option<Student> {
        self.students.pop()
    }

    /// Draws exactly `len` students.
    ///
    /// # Errors
    ///
    /// * [Resource::Students] When fewer than `len` students are left. Nothing is drawn.
    pub fn draw_exactly(&mut self, len: usize) -> Result<Vec<Student>, GameError> {
        let available = self.students.len();
        if len > available {
            return Err(GameError::InsufficientResource(Resource::Students {
                requested: len,
                available,
            }));
        }
        Ok(self.students.drain(available - len..).collect())
    }

    /// Draws `len` students or every student left when the bag holds fewer.
    pub fn draw_up_to(&mut self, len: usize) -> Vec<Student> {
        // when the bag is empty, no more students will be drained
        self.students
            .drain(self.students.len().saturating_sub(len)..)
            .collect()
    }

    /// Returns `students` into random positions of the bag.
    pub fn put_back<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        students: impl IntoIterator<Item = Student>,
    ) {
        // shuffle students into bag, but in place and without O(n log n) shuffle operation
        let start = self.students.len();
        self.students.extend(students);
        let end = self.students.len();
        if start == end {
            return;
        }
        let possible_indexes = Uniform::from(0..end);
        for index in start..end {
            self.students.swap(index, possible_indexes.sample(rng));
        }
    }
}
