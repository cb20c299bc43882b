use crate::{Color, Table, DINING_CAPACITY};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Counts of students per player and [color](Color), indexed by player then by color.
pub type Counts = Vec<[usize; Color::COLORS_LEN]>;

/// Seats a random, small number of students of every [color](Color) in the dining room of
/// every player. No coins are paid.
///
/// # Returns
///
/// The number of additional students per player and color.
pub fn random_dining<R: Rng + ?Sized>(rng: &mut R, table: &mut Table) -> Counts {
    let possible_counts = Uniform::from(0..=DINING_CAPACITY / 2);
    (0..table.players_len())
        .map(|player| {
            let mut counts = [0; Color::COLORS_LEN];
            for color in Color::colors() {
                let len = possible_counts.sample(rng);
                table.put_in_dining(player, color, len);
                counts[color as usize] = len;
            }
            counts
        })
        .collect()
}

/// Puts a random, small number of students of every [color](Color) onto `island`.
///
/// # Returns
///
/// The number of additional students per color.
pub fn random_island<R: Rng + ?Sized>(
    rng: &mut R,
    table: &mut Table,
    island: usize,
) -> [usize; Color::COLORS_LEN] {
    let possible_counts = Uniform::from(0..4);
    let mut counts = [0; Color::COLORS_LEN];
    for color in Color::colors() {
        let len = possible_counts.sample(rng);
        table.put_on_island(island, color, len);
        counts[color as usize] = len;
    }
    counts
}

/// Hands every professor to a random player or leaves it unclaimed.
///
/// # Returns
///
/// The index of the player holding each professor, indexed by color.
pub fn random_professors<R: Rng + ?Sized>(
    rng: &mut R,
    table: &mut Table,
) -> [Option<usize>; Color::COLORS_LEN] {
    let mut holders = [None; Color::COLORS_LEN];
    for color in Color::colors() {
        let holder = rng.gen_range(0..=table.players_len());
        if holder < table.players_len() {
            table.give_professor(holder, color);
            holders[color as usize] = Some(holder);
        }
    }
    holders
}

/// A random [color](Color) which is not `color`.
pub fn random_different_color<R: Rng + ?Sized>(rng: &mut R, color: Color) -> Color {
    let possible_indexes = Uniform::from(0..Color::COLORS_LEN - 1);
    let random_index = possible_indexes.sample(rng);
    // skipping the color at its own index
    let random_different_index = random_index + if random_index < color as usize { 0 } else { 1 };
    Color::colors()[random_different_index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_PLAYERS;

    #[test]
    fn random_dining_empty() {
        let mut table = Table::empty_table(MAX_PLAYERS, false);

        let counts = random_dining(&mut rand::thread_rng(), &mut table);

        assert_eq!(MAX_PLAYERS, counts.len());
        for (player, counts) in counts.iter().enumerate() {
            for color in Color::colors() {
                assert_eq!(
                    counts[color as usize],
                    table.players()[player].board().dining_count(color)
                );
            }
        }
    }

    #[test]
    fn random_island_empty() {
        let mut table = Table::empty_table(2, false);

        let counts = random_island(&mut rand::thread_rng(), &mut table, 5);

        for color in Color::colors() {
            assert_eq!(counts[color as usize], table.islands()[5].count(color));
        }
    }

    #[test]
    fn random_professors_unclaimed() {
        let mut table = Table::empty_table(3, false);

        let holders = random_professors(&mut rand::thread_rng(), &mut table);

        for color in Color::colors() {
            match holders[color as usize] {
                Some(holder) => assert!(table.players()[holder].board().has_professor(color)),
                None => assert!(table
                    .professors()
                    .iter()
                    .any(|professor| professor.color() == color)),
            }
        }
    }

    #[test]
    fn random_different_color_single_sample() {
        let mut rng = rand::thread_rng();
        let color = rng.gen();

        assert_ne!(color, random_different_color(&mut rng, color));
    }
}
