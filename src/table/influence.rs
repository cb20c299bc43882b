use crate::{Color, GameError, Professor, Table};
use itertools::Itertools;

/// Rule changes a character card applies while it is active. The default value yields the
/// printed rules.
///
/// # See Also
///
/// * [CharacterCard::overrides](crate::CharacterCard::overrides)
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Overrides {
    /// The player who takes a professor on a tie for the most students of its color.
    pub professor_ties_to: Option<usize>,
    /// A player and the influence they gain on every island.
    pub influence_bonus: Option<(usize, usize)>,
    /// The color whose students do not count for influence.
    pub ignored_color: Option<Color>,
    /// The steps mother nature may move beyond the step budget of the assistant card.
    pub extra_steps: usize,
}

impl Table {
    /// Hands every professor to the player with the most students of its color in their dining
    /// room.
    ///
    /// * An unclaimed professor goes to the only player with the most students, when that
    /// number is not `0`.
    /// * A controlled professor only moves to a player holding strictly more students than
    /// every other player, including the current holder.
    /// * With [Overrides::professor_ties_to], that player also takes a professor when tying
    /// for the most students.
    ///
    /// Calling this twice in a row changes nothing the second time.
    pub fn conquer_professors(&mut self, overrides: &Overrides) {
        for color in Color::colors() {
            let counts = self
                .players
                .iter()
                .map(|player| player.board().dining_count(color))
                .collect_vec();
            let Some(&max) = counts.iter().max() else {
                return;
            };
            if max == 0 {
                continue;
            }
            let holder = self
                .players
                .iter()
                .position(|player| player.board().has_professor(color));
            let leaders = counts.iter().positions(|count| *count == max).collect_vec();

            let winner = match overrides.professor_ties_to {
                Some(player) if counts.get(player) == Some(&max) => player,
                _ if holder.map_or(false, |holder| counts[holder] == max) => continue,
                _ if leaders.len() == 1 => leaders[0],
                _ => continue,
            };
            if holder == Some(winner) {
                continue;
            }

            let professor = match holder {
                Some(holder) => self.players[holder].board_mut().remove_professor(color),
                None => self.take_unclaimed_professor(color),
            };
            if let Some(professor) = professor {
                log::debug!("player {} conquered the {} professor", winner, color);
                self.players[winner].board_mut().add_professor(professor);
            }
        }
    }

    pub(crate) fn take_unclaimed_professor(&mut self, color: Color) -> Option<Professor> {
        let index = self
            .professors
            .iter()
            .position(|professor| professor.color() == color)?;
        Some(self.professors.remove(index))
    }

    /// The influence of `player` on `island`: one point for every student on the island whose
    /// professor the player controls, one point for every tower of the player on the island
    /// and the bonus of `overrides` when it names the player.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When `player` or `island` does not exist.
    pub fn compute_player_influence(
        &self,
        player: usize,
        island: usize,
        overrides: &Overrides,
    ) -> Result<usize, GameError> {
        let board = self.player(player)?.board();
        let island = self.island(island)?;
        let students: usize = board
            .professors()
            .iter()
            .map(Professor::color)
            .filter(|color| overrides.ignored_color != Some(*color))
            .map(|color| island.count(color))
            .sum();
        let towers = if island.tower_color() == Some(board.tower_color()) {
            island.towers_len()
        } else {
            0
        };
        let bonus = match overrides.influence_bonus {
            Some((bonus_player, bonus)) if bonus_player == player => bonus,
            _ => 0,
        };
        Ok(students + towers + bonus)
    }

    /// Resolves `island`. The only player with the strictly highest influence conquers it: every
    /// tower on the island returns to its owner and the winner puts one tower onto each tile.
    /// A tie changes nothing.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When `island` does not exist.
    ///
    /// # Returns
    ///
    /// The index of the winner, or [None] on a tie.
    pub fn compute_influence(
        &mut self,
        island: usize,
        overrides: &Overrides,
    ) -> Result<Option<usize>, GameError> {
        self.island(island)?;
        let influences = (0..self.players.len())
            .map(|player| self.compute_player_influence(player, island, overrides))
            .collect::<Result<Vec<_>, _>>()?;
        let Some(&max) = influences.iter().max() else {
            return Ok(None);
        };
        let leaders = influences
            .iter()
            .positions(|influence| *influence == max)
            .collect_vec();
        let &[winner] = leaders.as_slice() else {
            log::debug!("island {} is tied at {} influence", island, max);
            return Ok(None);
        };

        let tiles_len = self.islands[island].tiles_len();
        for tower in self.islands[island].take_towers() {
            match self.tower_owners.get_by_right(&tower.color()) {
                Some(&owner) => self.players[owner].board_mut().return_towers([tower]),
                None => unreachable!("every tower color should have an owner"),
            }
        }
        let towers = self.players[winner].board_mut().take_towers(tiles_len);
        let rest = self.islands[island].place_towers(towers);
        self.players[winner].board_mut().return_towers(rest);

        log::info!(
            "player {} controls island {} with {} influence",
            winner,
            island,
            max
        );
        Ok(Some(winner))
    }

    /// Merges the island at `index` with each neighbor holding towers of the same color until
    /// no neighbor matches. Mother nature stays on the merged island when it stood on any of
    /// its parts.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When `index` does not exist.
    ///
    /// # Returns
    ///
    /// The index of the merged island.
    pub fn merge_islands(&mut self, index: usize) -> Result<usize, GameError> {
        self.island(index)?;
        let mut index = index;
        loop {
            let len = self.islands.len();
            if len < 2 {
                break;
            }
            let next = (index + 1) % len;
            let previous = (index + len - 1) % len;
            let neighbor = if self.islands[index].can_merge(&self.islands[next]) {
                next
            } else if self.islands[index].can_merge(&self.islands[previous]) {
                previous
            } else {
                break;
            };

            let island = self.islands.remove(neighbor);
            if neighbor < index {
                index -= 1;
            }
            if self.mother_nature == neighbor {
                self.mother_nature = index;
            } else if self.mother_nature > neighbor {
                self.mother_nature -= 1;
            }
            if self.islands[index].merge(island).is_err() {
                unreachable!("neighbors with the same tower color should merge");
            }
            log::debug!("merged island {} into island {}", neighbor, index);
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{random_dining, random_island, random_professors, Tower, ISLANDS_LEN};
    use itertools::{iproduct, Itertools};

    #[test]
    fn unclaimed_professor_goes_to_the_only_leader() {
        let mut table = Table::empty_table(3, false);
        table.put_in_dining(0, Color::Green, 2);
        table.put_in_dining(1, Color::Green, 1);
        table.put_in_dining(1, Color::Red, 1);
        table.put_in_dining(2, Color::Red, 1);

        table.conquer_professors(&Overrides::default());

        assert!(table.players()[0].board().has_professor(Color::Green));
        assert!(table
            .players()
            .iter()
            .all(|player| !player.board().has_professor(Color::Red)));
        assert_eq!(Color::COLORS_LEN - 1, table.professors().len());
    }

    #[test]
    fn tie_keeps_the_holder() {
        let mut table = Table::empty_table(2, false);
        table.give_professor(0, Color::Blue);
        table.put_in_dining(0, Color::Blue, 3);
        table.put_in_dining(1, Color::Blue, 3);

        table.conquer_professors(&Overrides::default());

        assert!(table.players()[0].board().has_professor(Color::Blue));
        assert!(!table.players()[1].board().has_professor(Color::Blue));

        table.put_in_dining(1, Color::Blue, 1);
        table.conquer_professors(&Overrides::default());

        assert!(!table.players()[0].board().has_professor(Color::Blue));
        assert!(table.players()[1].board().has_professor(Color::Blue));
    }

    #[test]
    fn tie_goes_to_the_favored_player() {
        let mut table = Table::empty_table(2, false);
        table.give_professor(0, Color::Pink);
        table.put_in_dining(0, Color::Pink, 2);
        table.put_in_dining(1, Color::Pink, 2);
        let overrides = Overrides {
            professor_ties_to: Some(1),
            ..Overrides::default()
        };

        table.conquer_professors(&overrides);

        assert!(table.players()[1].board().has_professor(Color::Pink));

        table.conquer_professors(&overrides);

        assert!(table.players()[1].board().has_professor(Color::Pink));
        assert!(!table.players()[0].board().has_professor(Color::Pink));
    }

    #[test]
    fn conquer_professors_is_idempotent() {
        let mut table = Table::empty_table(4, false);
        for (player, color, len) in iproduct!(0..4, Color::colors(), 0..2) {
            table.put_in_dining(player, color, (player * 3 + color as usize + len) % 5);
        }
        table.conquer_professors(&Overrides::default());
        let once = table.players().to_vec();

        table.conquer_professors(&Overrides::default());

        assert_eq!(once, table.players().to_vec());
    }

    #[test]
    fn influence_counts_students_towers_and_bonus() {
        let mut table = Table::empty_table(2, false);
        table.give_professor(0, Color::Red);
        table.give_professor(1, Color::Blue);
        table.put_on_island(3, Color::Red, 2);
        table.put_on_island(3, Color::Blue, 1);
        table.put_on_island(3, Color::Yellow, 4);
        table.conquer_island(3, 1);

        assert_eq!(2, table.compute_player_influence(0, 3, &Overrides::default()).unwrap());
        assert_eq!(2, table.compute_player_influence(1, 3, &Overrides::default()).unwrap());
        let knight = Overrides {
            influence_bonus: Some((0, 2)),
            ..Overrides::default()
        };
        assert_eq!(4, table.compute_player_influence(0, 3, &knight).unwrap());
        assert_eq!(2, table.compute_player_influence(1, 3, &knight).unwrap());
        let mushroom_man = Overrides {
            ignored_color: Some(Color::Red),
            ..Overrides::default()
        };
        assert_eq!(0, table.compute_player_influence(0, 3, &mushroom_man).unwrap());
    }

    #[test]
    fn tie_leaves_the_island_unchanged() {
        let mut table = Table::empty_table(2, false);
        table.give_professor(0, Color::Red);
        table.give_professor(1, Color::Blue);
        table.put_on_island(5, Color::Red, 1);
        table.put_on_island(5, Color::Blue, 1);
        let before = table.islands().to_vec();

        assert_eq!(None, table.compute_influence(5, &Overrides::default()).unwrap());
        assert_eq!(before, table.islands().to_vec());
        assert_eq!(8, table.players()[0].board().towers_len());
        assert_eq!(8, table.players()[1].board().towers_len());
    }

    #[test]
    fn empty_island_is_a_tie() {
        let mut table = Table::empty_table(3, false);

        assert_eq!(None, table.compute_influence(0, &Overrides::default()).unwrap());
    }

    #[test]
    fn conquering_swaps_towers() {
        let mut table = Table::empty_table(2, false);
        table.give_professor(0, Color::Green);
        table.put_on_island(2, Color::Green, 3);
        table.conquer_island(2, 1);

        assert_eq!(Some(0), table.compute_influence(2, &Overrides::default()).unwrap());

        let island = &table.islands()[2];
        assert_eq!(Some(table.players()[0].board().tower_color()), island.tower_color());
        assert_eq!(1, island.towers_len());
        assert_eq!(7, table.players()[0].board().towers_len());
        assert_eq!(8, table.players()[1].board().towers_len());
    }

    #[test]
    fn compute_influence_out_of_range() {
        let mut table = Table::empty_table(2, false);

        assert_eq!(
            GameError::OutOfRange {
                index: ISLANDS_LEN,
                len: ISLANDS_LEN
            },
            table
                .compute_influence(ISLANDS_LEN, &Overrides::default())
                .unwrap_err()
        );
    }

    #[test]
    fn merge_with_both_neighbors() {
        let mut table = Table::empty_table(2, false);
        for island in [3, 4, 5] {
            table.conquer_island(island, 0);
        }
        table.conquer_island(6, 1);
        *table.mut_mother_nature() = 5;

        let index = table.merge_islands(4).unwrap();

        assert_eq!(3, index);
        assert_eq!(ISLANDS_LEN - 2, table.islands().len());
        assert_eq!(3, table.islands()[3].tiles_len());
        assert_eq!(3, table.islands()[3].towers_len());
        assert_eq!(3, table.mother_nature());
        assert_eq!(1, table.islands()[4].tiles_len());
    }

    #[test]
    fn merge_keeps_mother_nature_on_the_same_island() {
        let mut table = Table::empty_table(2, false);
        table.conquer_island(0, 1);
        table.conquer_island(ISLANDS_LEN - 1, 1);
        *table.mut_mother_nature() = 7;

        let index = table.merge_islands(0).unwrap();

        assert_eq!(0, index);
        assert_eq!(ISLANDS_LEN - 1, table.islands().len());
        assert_eq!(2, table.islands()[0].tiles_len());
        assert_eq!(7, table.mother_nature());
    }

    #[test]
    fn merge_different_colors() {
        let mut table = Table::empty_table(2, false);
        table.conquer_island(1, 0);
        table.conquer_island(2, 1);

        assert_eq!(1, table.merge_islands(1).unwrap());
        assert_eq!(ISLANDS_LEN, table.islands().len());
    }

    #[test]
    fn merged_island_places_one_tower_per_tile() {
        let mut table = Table::empty_table(2, false);
        table.conquer_island(8, 1);
        table.conquer_island(9, 1);
        table.merge_islands(8).unwrap();
        table.give_professor(0, Color::Yellow);
        table.put_on_island(8, Color::Yellow, 5);

        assert_eq!(Some(0), table.compute_influence(8, &Overrides::default()).unwrap());

        let island = &table.islands()[8];
        assert_eq!(2, island.towers_len());
        assert!(island
            .tiles()
            .iter()
            .filter_map(|tile| tile.tower())
            .all(|tower| *tower == Tower::new(table.players()[0].board().tower_color())));
        assert_eq!(8, table.players()[1].board().towers_len());
    }

    #[test]
    fn random_professors_follow_strict_leaders() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut table = Table::empty_table(3, false);
            let counts = random_dining(&mut rng, &mut table);

            table.conquer_professors(&Overrides::default());

            for color in Color::colors() {
                let max = counts.iter().map(|counts| counts[color as usize]).max();
                let leaders = counts
                    .iter()
                    .positions(|counts| Some(counts[color as usize]) == max)
                    .collect_vec();
                let holder =
                    (0..3).find(|player| table.players()[*player].board().has_professor(color));
                match leaders.as_slice() {
                    [leader] if max > Some(0) => assert_eq!(Some(*leader), holder),
                    _ => assert_eq!(None, holder),
                }
            }
        }
    }

    #[test]
    fn random_influence_needs_a_strict_majority() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut table = Table::empty_table(4, false);
            let holders = random_professors(&mut rng, &mut table);
            let counts = random_island(&mut rng, &mut table, 0);
            let influences = (0..4)
                .map(|player| {
                    Color::colors()
                        .into_iter()
                        .filter(|color| holders[*color as usize] == Some(player))
                        .map(|color| counts[color as usize])
                        .sum::<usize>()
                })
                .collect_vec();

            let winner = table.compute_influence(0, &Overrides::default()).unwrap();

            let max = influences.iter().max().copied().unwrap_or(0);
            let leaders = influences
                .iter()
                .positions(|influence| *influence == max)
                .collect_vec();
            match leaders.as_slice() {
                [leader] if max > 0 => {
                    assert_eq!(Some(*leader), winner);
                    assert_eq!(
                        Some(table.players()[*leader].board().tower_color()),
                        table.islands()[0].tower_color()
                    );
                }
                _ => {
                    assert_eq!(None, winner);
                    assert_eq!(None, table.islands()[0].tower_color());
                }
            }
        }
    }
}
