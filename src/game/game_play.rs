use crate::{
    Action, Applied, CharacterCard, Game, GameError, LastRound, Transition,
};
use either::Either;

impl Game {
    /// Whether `action` is legal for the selected player. The active character card decides
    /// when there is one, otherwise [the table](crate::Table::is_valid_action) decides.
    /// [Action::PlayCharacterCard] additionally needs a selected card which
    /// [is playable](CharacterCard::is_playable). No state is changed.
    pub fn is_valid_action(&self, action: Action) -> bool {
        if let Some(card) = self.active_card() {
            return card.is_valid_action(action, &self.table);
        }
        match action {
            Action::PlayCharacterCard => {
                self.table.is_valid_action(action)
                    && self
                        .selected_character()
                        .map_or(false, |card| card.is_playable(&self.table))
            }
            _ => self.table.is_valid_action(action),
        }
    }

    fn selected_character(&self) -> Option<&CharacterCard> {
        let player = self.table.player(self.table.selected_player()?).ok()?;
        self.characters.get(player.selections().character_card()?)
    }

    /// Whether mother nature may move `steps` islands for the selected player: at least `1`
    /// and at most the step budget of their assistant card plus any extra steps of the active
    /// character card.
    pub fn is_valid_mother_nature_steps(&self, steps: usize) -> bool {
        self.table
            .mother_nature_budget(&self.overrides())
            .map_or(false, |budget| (1..=budget).contains(&steps))
    }

    /// Plays the selected assistant card of the selected player.
    ///
    /// # Errors
    ///
    /// * Same as [Table::play_assistant_card](crate::Table::play_assistant_card).
    pub fn play_assistant_card(&mut self) -> Result<(), GameError> {
        self.observed(|game| game.table.play_assistant_card())
    }

    /// Moves a student of the selected color from the entrance onto the selected island.
    ///
    /// # Errors
    ///
    /// * Same as [Table::put_student_to_island](crate::Table::put_student_to_island).
    pub fn put_student_to_island(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            game.table.put_student_to_island()?;
            game.close_active_if(CharacterCard::closes_after_base_action);
            Ok(())
        })
    }

    /// Moves a student of the selected color from the entrance into the dining room and
    /// conquers professors under the rules of the active character card.
    ///
    /// # Errors
    ///
    /// * Same as [Table::put_student_to_dining](crate::Table::put_student_to_dining).
    pub fn put_student_to_dining(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            let overrides = game.overrides();
            game.table.put_student_to_dining(&overrides)?;
            game.close_active_if(CharacterCard::closes_after_base_action);
            Ok(())
        })
    }

    /// Conquers professors under the rules of the active character card. The result only
    /// reports back like every other operation and is always [Ok].
    pub fn conquer_professors(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            let overrides = game.overrides();
            game.table.conquer_professors(&overrides);
            Ok(())
        })
    }

    /// Moves mother nature `steps` islands clockwise and resolves the island she lands on.
    /// Character cards active for the mother nature move stop afterwards.
    ///
    /// # Errors
    ///
    /// * [Transition::Action] When [the steps are not valid](Game::is_valid_mother_nature_steps).
    ///
    /// # Returns
    ///
    /// The player who won the island, or [None] on a tie or a blocked resolution.
    pub fn move_mother_nature(&mut self, steps: usize) -> Result<Option<usize>, GameError> {
        self.observed(|game| {
            if !game.is_valid_mother_nature_steps(steps) {
                return Err(GameError::IllegalTransition(Transition::Action(
                    Action::MoveMotherNature,
                )));
            }
            let island = game.table.move_mother_nature(steps);
            game.close_active_if(CharacterCard::closes_after_base_action);
            let winner = game.resolve_island(island)?;
            game.close_active_if(CharacterCard::closes_after_mother_nature);
            Ok(winner)
        })
    }

    /// Resolves `island` under the rules of the active character card. A no entry tile on the
    /// island blocks the resolution and returns to its card.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When `island` does not exist.
    ///
    /// # Returns
    ///
    /// The player who won the island, or [None] on a tie or a blocked resolution.
    pub fn compute_influence(&mut self, island: usize) -> Result<Option<usize>, GameError> {
        self.observed(|game| game.resolve_island(island))
    }

    fn resolve_island(&mut self, island: usize) -> Result<Option<usize>, GameError> {
        self.table.island(island)?;
        let mut blocked = false;
        for card in self.characters.iter_mut() {
            if card.block_resolution(&mut self.table, island)? {
                blocked = true;
                break;
            }
        }
        let winner = if blocked {
            None
        } else {
            let overrides = self.overrides();
            self.table.compute_influence(island, &overrides)?
        };
        self.close_active_if(CharacterCard::closes_after_resolution);
        Ok(winner)
    }

    /// Merges the island at `index` with its neighbors of the same tower color.
    ///
    /// # Errors
    ///
    /// * Same as [Table::merge_islands](crate::Table::merge_islands).
    ///
    /// # Returns
    ///
    /// The index of the merged island.
    pub fn merge_islands(&mut self, index: usize) -> Result<usize, GameError> {
        self.table.merge_islands(index)
    }

    /// Moves every student of the selected cloud tile into the entrance of the selected
    /// player.
    ///
    /// # Errors
    ///
    /// * Same as
    /// [Table::move_students_from_cloud_tile](crate::Table::move_students_from_cloud_tile).
    pub fn move_students_from_cloud_tile(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            game.table.move_students_from_cloud_tile()?;
            game.close_active_if(CharacterCard::closes_after_base_action);
            Ok(())
        })
    }

    /// Tops up every cloud tile from the bag.
    ///
    /// # Returns
    ///
    /// Same as [Table::refill_cloud_tiles](crate::Table::refill_cloud_tiles).
    pub fn refill_cloud_tiles(&mut self) -> Either<(), LastRound> {
        self.table.refill_cloud_tiles()
    }

    /// Pays for and activates the selected character card of the selected player. A
    /// [Shaman](crate::CharacterKind::Shaman) conquers professors right away.
    ///
    /// # Errors
    ///
    /// * [Transition::ClassicMode] Attempting to play a card in a classic match.
    /// * [Transition::Action] When a card is already active or the selected card is not
    /// [playable](CharacterCard::is_playable).
    /// * [Selection::CharacterCard](crate::Selection::CharacterCard) When no character card is
    /// selected.
    /// * Same as [CharacterCard::activate].
    pub fn play_character_card(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            if !game.table.is_expert() {
                return Err(GameError::IllegalTransition(Transition::ClassicMode));
            }
            if game.active_character.is_some() {
                return Err(GameError::IllegalTransition(Transition::Action(
                    Action::PlayCharacterCard,
                )));
            }
            let player = game.table.required_player()?;
            let index = game
                .table
                .player(player)?
                .selections()
                .required_character_card()?;
            let len = game.characters.len();
            let card = game
                .characters
                .get_mut(index)
                .ok_or(GameError::OutOfRange { index, len })?;
            if !card.is_playable(&game.table) {
                return Err(GameError::IllegalTransition(Transition::Action(
                    Action::PlayCharacterCard,
                )));
            }
            card.activate(&mut game.table)?;
            game.active_character = Some(index);
            let overrides = card.overrides(&game.table);
            if overrides.professor_ties_to.is_some() {
                game.table.conquer_professors(&overrides);
            }
            Ok(())
        })
    }

    /// Applies the claimed action of the active character card and resolves an island when
    /// the card asks for it.
    ///
    /// # Errors
    ///
    /// * [Transition::NoActiveCharacter] When no character card is active.
    /// * Same as [CharacterCard::apply_action].
    pub fn apply_character_action(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            let index = game
                .active_character
                .ok_or(GameError::IllegalTransition(Transition::NoActiveCharacter))?;
            let len = game.characters.len();
            let card = game
                .characters
                .get_mut(index)
                .ok_or(GameError::OutOfRange { index, len })?;
            let applied = card.apply_action(&mut game.table)?;
            if !card.is_activated() {
                game.active_character = None;
            }
            if let Applied::ResolveIsland(island) = applied {
                game.resolve_island(island)?;
            }
            Ok(())
        })
    }

    /// Ends the turn of the selected player. The active character card stops.
    ///
    /// # Errors
    ///
    /// * Same as [Table::end_turn](crate::Table::end_turn).
    pub fn end_turn(&mut self) -> Result<(), GameError> {
        self.observed(|game| {
            game.close_active_if(|_| true);
            game.table.end_turn()
        })
    }

    /// Ends the round.
    pub fn end_round(&mut self) {
        self.table.end_round();
    }
}

#[cfg(test)]
#[allow(deprecated)]
mod tests {
    use crate::{
        Action, CharacterKind, Color, Game, GameError, Notification, Resource, Selection,
        Transition, KNIGHT_BONUS,
    };
    use futures::channel::mpsc;
    use std::collections::HashSet;

    const ACTIONS: [Action; 13] = [
        Action::PlayAssistantCard,
        Action::MoveStudentToIsland,
        Action::MoveStudentToDining,
        Action::MoveMotherNature,
        Action::SelectCloudTile,
        Action::PlayCharacterCard,
        Action::MoveStudentFromCardToIsland,
        Action::SelectIsland,
        Action::MoveNoEntryToIsland,
        Action::SwapStudentCardToEntrance,
        Action::SelectColor,
        Action::SwapStudentEntranceToDining,
        Action::MoveStudentFromCardToDining,
    ];

    fn valid_actions(game: &Game) -> HashSet<Action> {
        ACTIONS
            .into_iter()
            .filter(|action| game.is_valid_action(*action))
            .collect()
    }

    #[test]
    fn two_player_round() {
        let mut game = Game::with_seed(2, false, 17).unwrap();
        game.add_player("a").unwrap();
        game.add_player("b").unwrap();
        game.setup_game().unwrap();
        assert!(game.refill_cloud_tiles().is_left());

        game.select_player(0).unwrap();
        game.select_assistant_card(10).unwrap();
        game.play_assistant_card().unwrap();
        game.end_turn().unwrap();
        game.select_player(1).unwrap();
        game.select_assistant_card(1).unwrap();
        game.play_assistant_card().unwrap();
        game.end_turn().unwrap();

        assert_eq!(vec![1, 0], game.table().players_by_turn_order());

        game.select_player(0).unwrap();
        for _ in 0..3 {
            let color = game.player(0).unwrap().board().entrance()[0].color();
            game.select_color(color).unwrap();
            game.select_island(0).unwrap();
            assert!(game.is_valid_action(Action::MoveStudentToIsland));
            game.put_student_to_island().unwrap();
            game.clear_selections().unwrap();
        }

        assert!(game.is_valid_mother_nature_steps(5));
        assert!(!game.is_valid_mother_nature_steps(6));
        assert!(!game.is_valid_mother_nature_steps(0));
        assert_eq!(
            GameError::IllegalTransition(Transition::Action(Action::MoveMotherNature)),
            game.move_mother_nature(6).unwrap_err()
        );

        let start = game.table().mother_nature();
        game.move_mother_nature(5).unwrap();

        assert_eq!((start + 5) % 12, game.table().mother_nature());
        assert_eq!(
            [Action::SelectCloudTile].into_iter().collect::<HashSet<_>>(),
            valid_actions(&game)
        );
        game.select_cloud_tile(1).unwrap();
        game.move_students_from_cloud_tile().unwrap();

        assert_eq!(7, game.player(0).unwrap().board().entrance().len());
        assert!(valid_actions(&game).is_empty());
    }

    #[test]
    fn classic_match_rejects_character_cards() {
        let mut game = Game::empty_game(2, false, &[]);
        game.select_player(0).unwrap();

        assert_eq!(
            GameError::IllegalTransition(Transition::ClassicMode),
            game.select_character_card(0).unwrap_err()
        );
        assert_eq!(
            GameError::IllegalTransition(Transition::ClassicMode),
            game.play_character_card().unwrap_err()
        );
        assert_eq!(
            GameError::IllegalTransition(Transition::NoActiveCharacter),
            game.apply_character_action().unwrap_err()
        );
    }

    #[test]
    fn play_character_card_needs_a_selection() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Knight]);
        game.table.play_card_for(0, 5);

        assert!(!game.is_valid_action(Action::PlayCharacterCard));
        assert_eq!(
            GameError::MissingSelection(Selection::CharacterCard),
            game.play_character_card().unwrap_err()
        );
        game.select_character_card(0).unwrap();
        assert!(game.is_valid_action(Action::PlayCharacterCard));
    }

    #[test]
    fn only_one_active_card() {
        let mut game = Game::empty_game(
            2,
            true,
            &[CharacterKind::Postman, CharacterKind::Minstrel],
        );
        game.table.play_card_for(0, 5);
        game.table.mut_player(0).board_mut().add_coins(5);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();
        game.select_character_card(1).unwrap();

        assert!(!game.is_valid_action(Action::PlayCharacterCard));
        assert_eq!(
            GameError::IllegalTransition(Transition::Action(Action::PlayCharacterCard)),
            game.play_character_card().unwrap_err()
        );
        assert_eq!(Some(0), game.active_character());
    }

    #[test]
    fn postman_extends_the_move_until_mother_nature_moved() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Postman]);
        game.table.play_card_for(0, 1);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();

        assert!(game.is_valid_mother_nature_steps(3));
        assert!(!game.is_valid_mother_nature_steps(4));

        game.move_mother_nature(3).unwrap();

        assert_eq!(3, game.table().mother_nature());
        assert!(game.active_character().is_none());
        assert!(!game.characters()[0].is_activated());
    }

    #[test]
    fn knight_wins_a_close_island_once() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Knight]);
        game.table.give_professor(1, Color::Red);
        game.table.put_on_island(4, Color::Red, KNIGHT_BONUS - 1);
        game.table.play_card_for(0, 6);
        game.table.mut_player(0).board_mut().add_coins(1);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();

        assert_eq!(Some(0), game.compute_influence(4).unwrap());
        assert!(game.active_character().is_none());
        assert_eq!(None, game.compute_influence(4).unwrap());
    }

    #[test]
    fn conquer_professors_notifies_the_new_holder() {
        let mut game = Game::empty_game(2, false, &[]);
        let (sender, mut receiver) = mpsc::unbounded();
        game.subscribe(sender);
        game.table.put_in_dining(1, Color::Green, 1);

        assert_eq!(Ok(()), game.conquer_professors());

        assert!(game.player(1).unwrap().board().has_professor(Color::Green));
        assert!(matches!(
            receiver.try_next(),
            Ok(Some(Notification::SchoolBoard { player: 1, .. }))
        ));
    }

    #[test]
    fn move_cards_rejected_after_mother_nature_moved() {
        let kinds = [
            CharacterKind::Shaman,
            CharacterKind::Postman,
            CharacterKind::Knight,
            CharacterKind::MushroomMan,
        ];
        for kind in kinds {
            let mut game = Game::empty_game(2, true, &[kind]);
            game.table.play_card_for(0, 4);
            game.table.mut_player(0).board_mut().add_coins(3);
            game.move_mother_nature(1).unwrap();
            game.select_character_card(0).unwrap();
            let coins = game.player(0).unwrap().board().coins();

            assert!(!game.is_valid_action(Action::PlayCharacterCard));
            assert_eq!(
                GameError::IllegalTransition(Transition::Action(Action::PlayCharacterCard)),
                game.play_character_card().unwrap_err()
            );
            assert_eq!(coins, game.player(0).unwrap().board().coins());
            assert!(game.active_character().is_none());
        }
    }

    #[test]
    fn knight_stops_when_a_no_entry_tile_blocks_the_move() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Knight]);
        game.table.give_professor(1, Color::Red);
        game.table.put_on_island(1, Color::Red, KNIGHT_BONUS - 1);
        game.table.put_on_island(2, Color::Red, KNIGHT_BONUS);
        game.table.mut_islands()[1].add_no_entry_tile();
        game.table.play_card_for(0, 4);
        game.table.mut_player(0).board_mut().add_coins(1);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();

        assert_eq!(None, game.move_mother_nature(1).unwrap());

        assert!(game.active_character().is_none());
        assert_eq!(Some(1), game.compute_influence(2).unwrap());
    }

    #[test]
    fn herald_resolves_the_selected_island() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Herald]);
        game.table.give_professor(1, Color::Yellow);
        game.table.put_on_island(7, Color::Yellow, 2);
        game.table.play_card_for(1, 6);
        game.table.mut_player(1).board_mut().add_coins(2);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();

        assert_eq!(
            [Action::SelectIsland].into_iter().collect::<HashSet<_>>(),
            valid_actions(&game)
        );
        game.select_island(7).unwrap();
        game.apply_character_action().unwrap();

        let tower_color = game.player(1).unwrap().board().tower_color();
        assert_eq!(Some(tower_color), game.table().islands()[7].tower_color());
        assert!(game.active_character().is_none());
        assert!(game.is_valid_action(Action::MoveStudentToIsland));
    }

    #[test]
    fn no_entry_tile_blocks_the_next_resolution() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::GrandmaHerbs]);
        game.table.give_professor(0, Color::Blue);
        game.table.put_on_island(3, Color::Blue, 1);
        game.table.play_card_for(0, 4);
        game.table.mut_player(0).board_mut().add_coins(1);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();
        game.select_island(3).unwrap();
        game.apply_character_action().unwrap();

        assert_eq!(None, game.compute_influence(3).unwrap());
        assert!(game.table().islands()[3].tower_color().is_none());
        assert_eq!(4, game.characters()[0].no_entry_tiles());

        assert_eq!(Some(0), game.compute_influence(3).unwrap());
    }

    #[test]
    fn shaman_takes_tied_professors_on_activation() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Shaman]);
        game.table.give_professor(1, Color::Pink);
        game.table.put_in_dining(0, Color::Pink, 2);
        game.table.put_in_dining(1, Color::Pink, 2);
        game.table.play_card_for(0, 4);
        game.table.mut_player(0).board_mut().add_coins(1);
        game.select_character_card(0).unwrap();

        game.play_character_card().unwrap();

        assert!(game.player(0).unwrap().board().has_professor(Color::Pink));
        assert!(!game.player(1).unwrap().board().has_professor(Color::Pink));
    }

    #[test]
    fn joker_stops_at_the_next_base_action() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Joker]);
        game.table.put_in_entrance(0, &[Color::Green, Color::Blue]);
        game.table.play_card_for(0, 4);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();
        let card_color = game.characters()[0].students()[0].color();
        game.select_color(card_color).unwrap();
        game.select_color(Color::Green).unwrap();
        game.apply_character_action().unwrap();

        assert!(game.is_valid_action(Action::SwapStudentCardToEntrance));
        assert!(game.is_valid_action(Action::MoveStudentToIsland));

        game.clear_selections().unwrap();
        game.select_color(Color::Blue).unwrap();
        game.select_island(0).unwrap();
        game.put_student_to_island().unwrap();

        assert!(game.active_character().is_none());
        assert!(!game.is_valid_action(Action::SwapStudentCardToEntrance));
    }

    #[test]
    fn end_turn_stops_the_active_card() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::MushroomMan]);
        game.table.play_card_for(0, 4);
        game.table.mut_player(0).board_mut().add_coins(2);
        game.select_character_card(0).unwrap();
        game.play_character_card().unwrap();

        game.end_turn().unwrap();

        assert!(game.active_character().is_none());
        assert!(!game.characters()[0].is_activated());
    }

    #[test]
    fn observers_see_changed_boards_and_cards() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Knight]);
        let (sender, mut receiver) = mpsc::unbounded();
        game.subscribe(sender);
        game.table.play_card_for(1, 4);
        game.table.mut_player(1).board_mut().add_coins(1);
        game.select_character_card(0).unwrap();

        game.play_character_card().unwrap();

        let Some(Notification::SchoolBoard { player, board }) = receiver.try_next().unwrap()
        else {
            panic!("expected a school board first");
        };
        assert_eq!(1, player);
        assert_eq!(0, board.coins());
        let Some(Notification::CharacterCard { character, card }) =
            receiver.try_next().unwrap()
        else {
            panic!("expected a character card second");
        };
        assert_eq!(0, character);
        assert!(card.is_activated());
        assert_eq!(3, card.cost());
        assert!(receiver.try_next().is_err());
    }

    #[test]
    fn failed_activation_notifies_nothing() {
        let mut game = Game::empty_game(2, true, &[CharacterKind::Thief]);
        let (sender, mut receiver) = mpsc::unbounded();
        game.subscribe(sender);
        game.table.play_card_for(0, 4);
        game.select_character_card(0).unwrap();

        assert_eq!(
            GameError::InsufficientResource(Resource::Coins {
                required: 3,
                available: 1
            }),
            game.play_character_card().unwrap_err()
        );
        assert!(receiver.try_next().is_err());
    }
}
