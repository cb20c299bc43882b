use super::Turn;
use crate::{
    students_per_turn, Action, Color, Container, GameError, Overrides, Player, Resource,
    Selection, Student, Table, Transition,
};
use either::Either;
use itertools::Itertools;

/// Marks that the bag ran out while refilling the cloud tiles, so the current round is the
/// last one.
///
/// # See Also
///
/// * [Table::refill_cloud_tiles]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LastRound;

impl Table {
    /// Whether `action` is the next legal base action of the selected player.
    ///
    /// 1. [Action::PlayAssistantCard] opens a turn. It is legal before any other action of the
    /// turn and only when the player has not played an assistant card this round.
    /// 2. [Action::MoveStudentToIsland] and [Action::MoveStudentToDining] are legal after an
    /// assistant card was played, before mother nature moved, until the students of the turn
    /// are moved.
    /// 3. [Action::MoveMotherNature] is legal once every student of the turn moved.
    /// 4. [Action::SelectCloudTile] is legal right after mother nature moved.
    /// 5. [Action::PlayCharacterCard] is legal in an expert match after an assistant card was
    /// played, until a cloud tile is taken.
    ///
    /// Character card actions are never legal here. No state is changed.
    ///
    /// # See Also
    ///
    /// * [Game::is_valid_action](crate::Game::is_valid_action)
    pub fn is_valid_action(&self, action: Action) -> bool {
        if !self.set_up {
            return false;
        }
        let Some(player) = self.selected_player.and_then(|index| self.players.get(index)) else {
            return false;
        };
        let played = player.played_card().is_some();
        let students_per_turn = students_per_turn(self.players_len);
        let turn = &self.turn;
        match action {
            Action::PlayAssistantCard => turn.last_action.is_none() && !played,
            Action::MoveStudentToIsland | Action::MoveStudentToDining => {
                played && !turn.mother_nature_moved && turn.moved_students < students_per_turn
            }
            Action::MoveMotherNature => {
                played && !turn.mother_nature_moved && turn.moved_students == students_per_turn
            }
            Action::SelectCloudTile => turn.last_action == Some(Action::MoveMotherNature),
            Action::PlayCharacterCard => {
                self.expert && played && turn.last_action != Some(Action::SelectCloudTile)
            }
            _ => false,
        }
    }

    /// Selects the player whose selections the next operation reads.
    ///
    /// # Errors
    ///
    /// * [Transition::NotSetUp] Attempting to select a player before setup.
    /// * [GameError::OutOfRange] When no player sits at `index`.
    pub fn select_player(&mut self, index: usize) -> Result<(), GameError> {
        if !self.set_up {
            return Err(GameError::IllegalTransition(Transition::NotSetUp));
        }
        self.player(index)?;
        self.selected_player = Some(index);
        Ok(())
    }

    /// Selects the assistant card with `turn_order` for the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn select_assistant_card(&mut self, turn_order: usize) -> Result<(), GameError> {
        self.selected_mut()?.select_assistant_card(turn_order);
        Ok(())
    }

    /// Selects the island at `index` for the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    /// * [GameError::OutOfRange] When no island is at `index`.
    pub fn select_island(&mut self, index: usize) -> Result<(), GameError> {
        self.island(index)?;
        self.selected_mut()?.select_island(index);
        Ok(())
    }

    /// Adds `color` to the colors of the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn select_color(&mut self, color: Color) -> Result<(), GameError> {
        self.selected_mut()?.select_color(color);
        Ok(())
    }

    /// Selects the cloud tile at `index` for the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    /// * [GameError::OutOfRange] When no cloud tile is at `index`.
    pub fn select_cloud_tile(&mut self, index: usize) -> Result<(), GameError> {
        let len = self.cloud_tiles.len();
        if index >= len {
            return Err(GameError::OutOfRange { index, len });
        }
        self.selected_mut()?.select_cloud_tile(index);
        Ok(())
    }

    /// Forgets the island, the colors and the cloud tile of the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn clear_selections(&mut self) -> Result<(), GameError> {
        self.selected_mut()?.clear_selections();
        Ok(())
    }

    /// Forgets every selection of the selected player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn clear_selections_end_turn(&mut self) -> Result<(), GameError> {
        self.selected_mut()?.clear_selections_end_turn();
        Ok(())
    }

    pub(crate) fn selected_mut(&mut self) -> Result<&mut Player, GameError> {
        let index = self.required_player()?;
        self.player_mut(index)
    }

    /// Plays the selected assistant card of the selected player.
    ///
    /// A card with the same turn order as a card another player played this round is only
    /// allowed when every card left in the player's hand was already played by others.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    /// * [Selection::AssistantCard] When no assistant card is
    /// selected.
    /// * [Transition::AssistantCardTaken] When another player played the same turn order and
    /// the player could play something else.
    /// * [Resource::AssistantCard] When the card is not in the player's hand.
    pub fn play_assistant_card(&mut self) -> Result<(), GameError> {
        let index = self.required_player()?;
        let taken = self
            .played_turn_orders
            .iter()
            .filter(|(player, _)| *player != index)
            .map(|(_, turn_order)| *turn_order)
            .collect_vec();
        let player = self.player_mut(index)?;
        let turn_order = player
            .selections()
            .assistant_card()
            .ok_or(GameError::MissingSelection(Selection::AssistantCard))?;
        if taken.contains(&turn_order) && !player.only_holds(&taken) {
            return Err(GameError::IllegalTransition(
                Transition::AssistantCardTaken { turn_order },
            ));
        }
        player.play_assistant_card()?;
        self.played_turn_orders.push((index, turn_order));
        self.turn.last_action = Some(Action::PlayAssistantCard);
        log::debug!("player {} played turn order {}", index, turn_order);
        Ok(())
    }

    /// The players who played an assistant card this round, lowest turn order first. Ties keep
    /// the order in which the cards were played.
    pub fn players_by_turn_order(&self) -> Vec<usize> {
        self.played_turn_orders
            .iter()
            .sorted_by_key(|(_, turn_order)| *turn_order)
            .map(|(player, _)| *player)
            .collect()
    }

    /// Removes the first student of the first selected color from the entrance of the selected
    /// player.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    /// * [Selection::Color] When no color is selected.
    /// * [Resource::EntranceStudent] When no student of the color is in the entrance.
    pub fn pick_student_from_entrance(&mut self) -> Result<Student, GameError> {
        let player = self.selected_mut()?;
        let color = player.selections().required_color(0)?;
        player.board_mut().pick_from_entrance(color)
    }

    /// Moves a student of the selected color from the entrance of the selected player onto the
    /// selected island.
    ///
    /// # Errors
    ///
    /// * [Selection::Island] When no island is selected.
    /// * [GameError::OutOfRange] When the selected island does not exist anymore.
    /// * Any error of [Table::pick_student_from_entrance].
    pub fn put_student_to_island(&mut self) -> Result<(), GameError> {
        let island = self.selected_mut()?.selections().required_island()?;
        self.island(island)?;
        let student = self.pick_student_from_entrance()?;
        self.island_mut(island)?.add_student(student);
        self.turn.moved_students += 1;
        self.turn.last_action = Some(Action::MoveStudentToIsland);
        Ok(())
    }

    /// Moves a student of the selected color from the entrance of the selected player into
    /// their dining room, pays a coin for every third seat in an expert match and then
    /// [conquers professors](Table::conquer_professors).
    ///
    /// # Errors
    ///
    /// * [Container::DiningRoom] When the table of the color is full. Nothing moves.
    /// * Any error of [Table::pick_student_from_entrance].
    pub fn put_student_to_dining(&mut self, overrides: &Overrides) -> Result<(), GameError> {
        let index = self.required_player()?;
        let player = self.player(index)?;
        let color = player.selections().required_color(0)?;
        player.board().check_dining(color)?;
        let student = self.pick_student_from_entrance()?;
        self.seat_in_dining(index, student)?;
        self.turn.moved_students += 1;
        self.turn.last_action = Some(Action::MoveStudentToDining);
        self.conquer_professors(overrides);
        Ok(())
    }

    /// The number of steps mother nature may move during the turn of the selected player: the
    /// step budget of their assistant card plus any extra steps of `overrides`.
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    /// * [Transition::Action] When the player has not played an assistant card.
    pub fn mother_nature_budget(&self, overrides: &Overrides) -> Result<usize, GameError> {
        let player = self.player(self.required_player()?)?;
        let card = player
            .played_card()
            .ok_or(GameError::IllegalTransition(Transition::Action(
                Action::MoveMotherNature,
            )))?;
        Ok(card.steps() + overrides.extra_steps)
    }

    /// Moves mother nature `steps` islands clockwise. Influence is not resolved here.
    ///
    /// # Returns
    ///
    /// The index of the island mother nature moved to.
    pub fn move_mother_nature(&mut self, steps: usize) -> usize {
        self.mother_nature = (self.mother_nature + steps) % self.islands.len().max(1);
        self.turn.mother_nature_moved = true;
        self.turn.last_action = Some(Action::MoveMotherNature);
        log::debug!("mother nature moved to island {}", self.mother_nature);
        self.mother_nature
    }

    /// Moves every student of the selected cloud tile into the entrance of the selected
    /// player.
    ///
    /// # Errors
    ///
    /// * [Selection::CloudTile] When no cloud tile is selected.
    /// * [GameError::OutOfRange] When no cloud tile is at the selected index.
    /// * [Resource::CloudTile] When the cloud tile was already taken this round.
    /// * [Container::Entrance] When the students do not fit into the entrance. Nothing moves.
    pub fn move_students_from_cloud_tile(&mut self) -> Result<(), GameError> {
        let index = self.required_player()?;
        let cloud_tile = self.player(index)?.selections().required_cloud_tile()?;
        let len = self.cloud_tiles.len();
        let cloud = self
            .cloud_tiles
            .get_mut(cloud_tile)
            .ok_or(GameError::OutOfRange {
                index: cloud_tile,
                len,
            })?;
        if cloud.is_empty() {
            return Err(GameError::InsufficientResource(Resource::CloudTile {
                cloud_tile,
            }));
        }
        let board = self.players[index].board_mut();
        if cloud.students().len() > board.entrance_missing() {
            return Err(GameError::CapacityExceeded {
                container: Container::Entrance,
                count: board.entrance().len(),
            });
        }
        board.fill_entrance(cloud.drain())?;
        self.turn.last_action = Some(Action::SelectCloudTile);
        Ok(())
    }

    /// Tops up every cloud tile from the bag.
    ///
    /// # Returns
    ///
    /// [LastRound] when the bag ran out, otherwise nothing. Once the bag ran out, the current
    /// round is the last one and students returned to the bag are discarded.
    pub fn refill_cloud_tiles(&mut self) -> Either<(), LastRound> {
        for cloud_tile in self.cloud_tiles.iter_mut() {
            let missing = cloud_tile.missing();
            let students = self.bag.draw_up_to(missing);
            if students.len() < missing {
                self.last_round = true;
            }
            cloud_tile.fill(students);
        }
        if self.bag.is_empty() {
            self.last_round = true;
        }
        if self.last_round {
            log::info!("the bag ran out, this is the last round");
            return Either::Right(LastRound);
        }
        Either::Left(())
    }

    /// Ends the turn of the selected player: forgets every selection and resets the progress
    /// of the turn. The assistant card stays played until [Table::end_round].
    ///
    /// # Errors
    ///
    /// * [Selection::Player] When no player is selected.
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.clear_selections_end_turn()?;
        self.turn = Turn::default();
        Ok(())
    }

    /// Ends the round: every played assistant card is discarded and the turn order is
    /// forgotten. Ending the last round ends the match.
    pub fn end_round(&mut self) {
        for player in self.players.iter_mut() {
            player.clear_played_card();
        }
        self.played_turn_orders.clear();
        self.turn = Turn::default();
        if self.last_round {
            self.last_round_played = true;
        }
    }
}
