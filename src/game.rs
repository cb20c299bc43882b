use crate::{
    draft, CharacterCard, Characters, Color, GameError, NewError, Notification, Observer,
    Overrides, Player, Table, Transition,
};
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::fmt;

pub use game_end::*;
pub use game_view::*;

mod game_end;
mod game_play;
mod game_view;
#[cfg(test)]
mod test_setup;

/// Owns a [table](Table), the character cards drafted for an expert match and the observers
/// notified after each change. Created from [Game::new].
///
/// Every operation first asks the active character card, if any, and otherwise falls back to
/// the base rules of the table.
pub struct Game {
    /// The base rules and every entity of the match.
    table: Table,
    /// The character cards drafted during setup. Empty in a classic match.
    characters: Characters,
    /// The index of the active character card.
    active_character: Option<usize>,
    /// Notified with every changed school board and character card.
    observers: Vec<Box<dyn Observer>>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("table", &self.table)
            .field("characters", &self.characters)
            .field("active_character", &self.active_character)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Game {
    /// Creates a match for `players_len` players which draws its random decisions from an
    /// entropy seeded generator.
    ///
    /// # Errors
    ///
    /// * [NewError::TooFewPlayers] Attempting to start with fewer than
    /// [MIN_PLAYERS](crate::MIN_PLAYERS) players.
    /// * [NewError::TooManyPlayers] Attempting to start with more than
    /// [MAX_PLAYERS](crate::MAX_PLAYERS) players.
    ///
    /// # See Also
    ///
    /// * [Game::with_seed]
    pub fn new(players_len: usize, expert: bool) -> Result<Game, HashSet<NewError>> {
        Game::with_rng(players_len, expert, StdRng::from_entropy())
    }

    /// Creates a match like [Game::new] where every random decision follows from `seed`.
    ///
    /// # Errors
    ///
    /// * Same as [Game::new].
    pub fn with_seed(
        players_len: usize,
        expert: bool,
        seed: u64,
    ) -> Result<Game, HashSet<NewError>> {
        Game::with_rng(players_len, expert, StdRng::seed_from_u64(seed))
    }

    fn with_rng(players_len: usize, expert: bool, rng: StdRng) -> Result<Game, HashSet<NewError>> {
        Ok(Game {
            table: Table::new(players_len, expert, rng)?,
            characters: Characters::new(),
            active_character: None,
            observers: Vec::new(),
        })
    }

    /// Seats a player with `nickname`.
    ///
    /// # Errors
    ///
    /// * Same as [Table::add_player].
    ///
    /// # Returns
    ///
    /// The index of the new player.
    pub fn add_player(&mut self, nickname: impl Into<String>) -> Result<usize, GameError> {
        self.table.add_player(nickname)
    }

    /// [Sets up the table](Table::setup) and, in an expert match, drafts the
    /// character cards.
    ///
    /// # Errors
    ///
    /// * Same as [Table::setup].
    pub fn setup_game(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            game.table.setup()?;
            if game.table.is_expert() {
                let (bag, rng) = game.table.bag_and_rng_mut();
                game.characters = draft(rng, bag)?;
                log::info!(
                    "drafted {}",
                    game.characters.iter().map(CharacterCard::kind).join(", ")
                );
            }
            Ok(())
        })
    }

    /// Registers `observer`. It is notified after every later change.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The table with every entity of the match.
    #[inline]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The character cards drafted for the match.
    #[inline]
    pub fn characters(&self) -> &[CharacterCard] {
        &self.characters
    }

    /// The index of the active character card.
    #[inline]
    pub fn active_character(&self) -> Option<usize> {
        self.active_character
    }

    /// The active character card.
    pub fn active_card(&self) -> Option<&CharacterCard> {
        self.active_character
            .and_then(|index| self.characters.get(index))
    }

    /// The player at `index`.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When no player sits at `index`.
    pub fn player(&self, index: usize) -> Result<&Player, GameError> {
        self.table.player(index)
    }

    /// Selects the player whose selections the next operation reads.
    ///
    /// # Errors
    ///
    /// * Same as [Table::select_player].
    pub fn select_player(&mut self, index: usize) -> Result<(), GameError> {
        self.table.select_player(index)
    }

    /// Selects the assistant card with `turn_order` for the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::select_assistant_card].
    pub fn select_assistant_card(&mut self, turn_order: usize) -> Result<(), GameError> {
        self.table.select_assistant_card(turn_order)
    }

    /// Selects the island at `index` for the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::select_island].
    pub fn select_island(&mut self, index: usize) -> Result<(), GameError> {
        self.table.select_island(index)
    }

    /// Adds `color` to the colors of the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::select_color].
    pub fn select_color(&mut self, color: Color) -> Result<(), GameError> {
        self.table.select_color(color)
    }

    /// Selects the cloud tile at `index` for the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::select_cloud_tile].
    pub fn select_cloud_tile(&mut self, index: usize) -> Result<(), GameError> {
        self.table.select_cloud_tile(index)
    }

    /// Selects the character card at `index` for the selected player.
    ///
    /// # Errors
    ///
    /// * [Transition::ClassicMode] Attempting to select a card in a classic match.
    /// * [GameError::OutOfRange] When no card is at `index`.
    /// * [Selection::Player](crate::Selection::Player) When no player is selected.
    pub fn select_character_card(&mut self, index: usize) -> Result<(), GameError> {
        if !self.table.is_expert() {
            return Err(GameError::IllegalTransition(Transition::ClassicMode));
        }
        let len = self.characters.len();
        if index >= len {
            return Err(GameError::OutOfRange { index, len });
        }
        self.table.selected_mut()?.select_character_card(index);
        Ok(())
    }

    /// Forgets the island, the colors and the cloud tile of the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::clear_selections].
    pub fn clear_selections(&mut self) -> Result<(), GameError> {
        self.table.clear_selections()
    }

    /// Forgets every selection of the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::clear_selections_end_turn].
    pub fn clear_selections_end_turn(&mut self) -> Result<(), GameError> {
        self.table.clear_selections_end_turn()
    }

    /// The rule changes of the active character card.
    pub fn overrides(&self) -> Overrides {
        self.active_card()
            .map_or_else(Overrides::default, |card| card.overrides(&self.table))
    }

    /// Deactivates the active character card when `closes` holds for it.
    fn close_active_if(&mut self, closes: fn(&CharacterCard) -> bool) {
        let Some(index) = self.active_character else {
            return;
        };
        if let Some(card) = self.characters.get_mut(index) {
            if !card.is_activated() || closes(card) {
                card.deactivate();
                self.active_character = None;
            }
        }
    }

    /// Runs `operation` and then notifies every observer of each school board and character
    /// card which changed, even when `operation` failed halfway.
    fn observed<T>(
        &mut self,
        operation: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        if self.observers.is_empty() {
            return operation(self);
        }
        let boards = self
            .table
            .players()
            .iter()
            .map(|player| player.board().clone())
            .collect_vec();
        let characters = self.characters.clone();

        let result = operation(self);

        let board_notifications = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(player, current)| boards.get(*player) != Some(current.board()))
            .map(|(player, current)| Notification::SchoolBoard {
                player,
                board: current.board().clone(),
            });
        let character_notifications = self
            .characters
            .iter()
            .enumerate()
            .filter(|(character, card)| characters.get(*character) != Some(*card))
            .map(|(character, card)| Notification::CharacterCard {
                character,
                card: card.clone(),
            });
        let notifications = board_notifications
            .chain(character_notifications)
            .collect_vec();
        for notification in &notifications {
            for observer in self.observers.iter_mut() {
                observer.notify(notification);
            }
        }
        result
    }
}
