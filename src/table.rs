use crate::{
    Action, Bag, CloudTile, GameError, Island, Player, Players, Professor, Professors, Selection,
    Student, TowerColor, TowerOwners,
};
use rand::rngs::StdRng;

pub use influence::*;
pub use turn::*;

mod influence;
mod setup;
#[cfg(test)]
mod test_setup;
mod turn;

/// Owns the state of one match and implements the base rules. Created from [Table::new] and
/// completed by [Table::setup].
///
/// The base rules know nothing about character cards. Every algorithm a character card can
/// bend takes [Overrides], and [Overrides::default] yields the printed rules.
#[derive(Debug)]
pub struct Table {
    /// The number of players the match was created for.
    players_len: usize,
    /// Whether coins and character cards are in play.
    expert: bool,
    /// The nicknames of the players who joined before setup.
    nicknames: Vec<String>,
    /// A vector of players in the order they joined. Empty before setup.
    players: Players,
    /// A bimap of player indexes to the color of their towers.
    tower_owners: TowerOwners,
    /// The islands in clockwise order.
    islands: Vec<Island>,
    /// One cloud tile per player.
    cloud_tiles: Vec<CloudTile>,
    /// This is a bag of all the students that are not on the table yet.
    bag: Bag,
    /// The professors no player controls yet.
    professors: Professors,
    /// The coins not held by any player.
    bank: usize,
    /// The index of the island with mother nature.
    mother_nature: usize,
    /// The index of the player whose selections the next operation reads.
    selected_player: Option<usize>,
    /// Player indexes and turn orders of the assistant cards played this round, in play order.
    played_turn_orders: Vec<(usize, usize)>,
    /// The progress of the current turn.
    turn: Turn,
    /// Whether [Table::setup] has completed.
    set_up: bool,
    /// Whether the bag ran out while refilling the cloud tiles.
    last_round: bool,
    /// Whether the round after the bag ran out has ended.
    last_round_played: bool,
    /// Every random decision of the match is drawn from here.
    rng: StdRng,
}

/// The progress of the current turn, reset by [Table::end_turn].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
struct Turn {
    /// The last base action applied this turn.
    last_action: Option<Action>,
    /// The number of students moved out of the entrance this turn.
    moved_students: usize,
    /// Whether mother nature has moved this turn.
    mother_nature_moved: bool,
}

impl Table {
    /// The number of players the match was created for.
    #[inline]
    pub fn players_len(&self) -> usize {
        self.players_len
    }

    /// Whether coins and character cards are in play.
    #[inline]
    pub fn is_expert(&self) -> bool {
        self.expert
    }

    /// Whether [Table::setup] has completed.
    #[inline]
    pub fn is_set_up(&self) -> bool {
        self.set_up
    }

    /// The players in the order they joined. Empty before setup.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player at `index`.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When no player sits at `index`.
    pub fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.players.get(index).ok_or(GameError::OutOfRange {
            index,
            len: self.players.len(),
        })
    }

    /// The islands in clockwise order.
    #[inline]
    pub fn islands(&self) -> &[Island] {
        &self.islands
    }

    /// The island at `index`.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When no island is at `index`.
    pub fn island(&self, index: usize) -> Result<&Island, GameError> {
        self.islands.get(index).ok_or(GameError::OutOfRange {
            index,
            len: self.islands.len(),
        })
    }

    /// The cloud tiles, one per player.
    #[inline]
    pub fn cloud_tiles(&self) -> &[CloudTile] {
        &self.cloud_tiles
    }

    /// The student bag.
    #[inline]
    pub fn bag(&self) -> &Bag {
        &self.bag
    }

    /// The professors no player controls yet.
    #[inline]
    pub fn professors(&self) -> &[Professor] {
        &self.professors
    }

    /// The coins not held by any player.
    #[inline]
    pub fn bank(&self) -> usize {
        self.bank
    }

    /// The index of the island with mother nature.
    #[inline]
    pub fn mother_nature(&self) -> usize {
        self.mother_nature
    }

    /// The index of the selected player.
    #[inline]
    pub fn selected_player(&self) -> Option<usize> {
        self.selected_player
    }

    /// The last base action applied this turn.
    #[inline]
    pub fn last_action(&self) -> Option<Action> {
        self.turn.last_action
    }

    /// The number of students moved out of the entrance this turn.
    #[inline]
    pub fn moved_students(&self) -> usize {
        self.turn.moved_students
    }

    /// Whether mother nature has moved this turn.
    #[inline]
    pub fn mother_nature_moved(&self) -> bool {
        self.turn.mother_nature_moved
    }

    /// Whether the bag ran out while refilling the cloud tiles.
    #[inline]
    pub fn is_last_round(&self) -> bool {
        self.last_round
    }

    /// Whether the round after the bag ran out has ended.
    #[inline]
    pub fn is_last_round_played(&self) -> bool {
        self.last_round_played
    }

    /// The index of the player owning the towers of `color`.
    pub fn tower_owner(&self, color: TowerColor) -> Option<usize> {
        self.tower_owners.get_by_right(&color).copied()
    }

    /// The index of the selected player, required.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn required_player(&self) -> Result<usize, GameError> {
        self.selected_player
            .ok_or(GameError::MissingSelection(Selection::Player))
    }

    pub(crate) fn player_mut(&mut self, index: usize) -> Result<&mut Player, GameError> {
        let len = self.players.len();
        self.players
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })
    }

    pub(crate) fn island_mut(&mut self, index: usize) -> Result<&mut Island, GameError> {
        let len = self.islands.len();
        self.islands
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })
    }

    pub(crate) fn bag_and_rng_mut(&mut self) -> (&mut Bag, &mut StdRng) {
        (&mut self.bag, &mut self.rng)
    }

    /// Returns `students` to the bag, or discards them once the last round has started.
    pub(crate) fn return_to_bag(&mut self, students: Vec<Student>) {
        if self.last_round {
            log::debug!("discarding {} students during the last round", students.len());
            return;
        }
        self.bag.put_back(&mut self.rng, students);
    }

    pub(crate) fn pay_to_bank(&mut self, coins: usize) {
        self.bank += coins;
    }

    /// Seats `student` in the dining room of `player` and pays a coin from the bank when the
    /// seat earns one in an expert match.
    ///
    /// The caller checks [SchoolBoard::check_dining](crate::SchoolBoard::check_dining) first.
    pub(crate) fn seat_in_dining(
        &mut self,
        player: usize,
        student: Student,
    ) -> Result<(), GameError> {
        let pays = self.expert && self.bank > 0;
        let board = self.player_mut(player)?.board_mut();
        match board.add_to_dining(student) {
            Ok(true) if pays => {
                board.add_coins(1);
                self.bank -= 1;
                Ok(())
            }
            Ok(_) => Ok(()),
            Err((_, error)) => unreachable!(
                "dining capacity should be checked before seating a student: {}",
                error
            ),
        }
    }
}
