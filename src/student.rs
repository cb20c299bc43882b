use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

/// Describes the color of a [`Student`] or a [`Professor`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum Color {
    /// `0`.
    Yellow = 0,
    /// `1`.
    Blue = 1,
    /// `2`.
    Green = 2,
    /// `3`.
    Red = 3,
    /// `4`.
    Pink = 4,
}

impl Color {
    /// The number of [`Color`] variants. 5 colors.
    pub const COLORS_LEN: usize = 5;

    /// # Returns
    ///
    /// An array of all [`Color`] variants in order.
    #[inline]
    pub fn colors() -> [Color; Color::COLORS_LEN] {
        [
            Color::Yellow,
            Color::Blue,
            Color::Green,
            Color::Red,
            Color::Pink,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Pink => "pink",
        };
        f.write_str(name)
    }
}

impl Distribution<Color> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        let index = rng.gen_range(0..Color::COLORS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since colors cover all indexes \
                in range 0..Color::COLORS_LEN (0..{:?}).",
                index,
                Color::COLORS_LEN
            );
        })
    }
}

/// A student moved between the bag, the islands, the entrances, the dining rooms and the
/// character cards holding students.
///
/// A student is not [`Copy`], so it leaves one container when it is put into another.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Student {
    color: Color,
}

impl Student {
    /// A new student of `color`.
    #[inline]
    pub fn new(color: Color) -> Student {
        Student { color }
    }

    /// The color of the student.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Distribution<Student> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Student {
        Student::new(rng.gen())
    }
}

/// One professor exists for each [`Color`]. It is either unclaimed and held by the
/// [table](crate::Table) or held by exactly one school board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Professor {
    color: Color,
}

impl Professor {
    /// A new professor of `color`.
    #[inline]
    pub fn new(color: Color) -> Professor {
        Professor { color }
    }

    /// The color of the professor.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

/// # Returns
///
/// The number of each [`Color`] in `colors`, indexed by `color as usize`.
pub fn count_colors(colors: impl IntoIterator<Item = Color>) -> [usize; Color::COLORS_LEN] {
    let mut counts = [0; Color::COLORS_LEN];
    for color in colors {
        counts[color as usize] += 1;
    }
    counts
}
