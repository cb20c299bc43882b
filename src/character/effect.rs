use crate::{
    Action, CardEffect, CardStudents, CharacterCard, CharacterKind, Color, GameError, Overrides,
    Resource, Student, Table, Transition, JOKER_SWAPS_LEN, KNIGHT_BONUS, MINSTREL_SWAPS_LEN,
    POSTMAN_BONUS, THIEF_STUDENTS_LEN,
};

/// What the [game](crate::Game) still has to do after
/// [a character card was applied](CharacterCard::apply_action).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Applied {
    /// Nothing.
    Done,
    /// Resolve the island at the index as if mother nature ended her move there.
    ResolveIsland(usize),
}

impl CharacterCard {
    /// Whether the card can be activated now. The cost is checked by
    /// [CharacterCard::activate].
    ///
    /// An active card, a card without students and [GrandmaHerbs](CharacterKind::GrandmaHerbs)
    /// without no entry tiles are not playable. A [Minstrel](CharacterKind::Minstrel) needs a
    /// student in the dining room of the selected player. [Shaman](CharacterKind::Shaman),
    /// [Postman](CharacterKind::Postman), [Knight](CharacterKind::Knight) and
    /// [MushroomMan](CharacterKind::MushroomMan) change the mother nature move and are only
    /// playable before it.
    pub fn is_playable(&self, table: &Table) -> bool {
        if self.activated {
            return false;
        }
        match &self.effect {
            CardEffect::Monk { students }
            | CardEffect::Joker { students, .. }
            | CardEffect::Princess { students } => !students.is_empty(),
            CardEffect::GrandmaHerbs { no_entry_tiles } => *no_entry_tiles > 0,
            CardEffect::Minstrel { .. } => table
                .selected_player()
                .and_then(|index| table.players().get(index))
                .map_or(false, |player| {
                    Color::colors()
                        .into_iter()
                        .any(|color| player.board().dining_count(color) > 0)
                }),
            CardEffect::Shaman
            | CardEffect::Postman
            | CardEffect::Knight
            | CardEffect::MushroomMan { .. } => !table.mother_nature_moved(),
            CardEffect::Herald | CardEffect::Thief => true,
        }
    }

    /// The selected player pays the cost of the card to the bank and the card becomes active.
    /// The cost rises by one coin after the first activation only.
    ///
    /// # Errors
    ///
    /// * [Selection::Player](crate::Selection::Player) When no player is selected.
    /// * [Transition::Action] When the card is already active.
    /// * [Resource::Coins] When the player cannot pay. Nothing changes.
    pub fn activate(&mut self, table: &mut Table) -> Result<(), GameError> {
        if self.activated {
            return Err(GameError::IllegalTransition(Transition::Action(
                Action::PlayCharacterCard,
            )));
        }
        let player = table.required_player()?;
        table.player_mut(player)?.board_mut().pay(self.cost)?;
        table.pay_to_bank(self.cost);
        log::info!(
            "player {} activated the {} for {} coins",
            player,
            self.kind(),
            self.cost
        );
        if !self.cost_increased {
            self.cost += 1;
            self.cost_increased = true;
        }
        match &mut self.effect {
            CardEffect::Joker { swaps, .. } | CardEffect::Minstrel { swaps } => *swaps = 0,
            CardEffect::MushroomMan { color } => *color = None,
            _ => {}
        }
        self.activated = true;
        Ok(())
    }

    /// Ends the effect of the card. The payload stays on the card.
    pub fn deactivate(&mut self) {
        if self.activated {
            log::debug!("the {} is no longer active", self.kind());
        }
        self.activated = false;
    }

    /// The rule changes of the card while it is active, for the selected player.
    pub fn overrides(&self, table: &Table) -> Overrides {
        if !self.activated {
            return Overrides::default();
        }
        let player = table.selected_player();
        match &self.effect {
            CardEffect::Shaman => Overrides {
                professor_ties_to: player,
                ..Overrides::default()
            },
            CardEffect::Knight => Overrides {
                influence_bonus: player.map(|player| (player, KNIGHT_BONUS)),
                ..Overrides::default()
            },
            CardEffect::MushroomMan { color } => Overrides {
                ignored_color: *color,
                ..Overrides::default()
            },
            CardEffect::Postman => Overrides {
                extra_steps: POSTMAN_BONUS,
                ..Overrides::default()
            },
            _ => Overrides::default(),
        }
    }

    /// Whether `action` is legal while the card is active. An inactive card defers to
    /// [Table::is_valid_action].
    ///
    /// * The claimed action of the card is legal while the card has uses left.
    /// * [Monk](CharacterKind::Monk), [Herald](CharacterKind::Herald),
    /// [GrandmaHerbs](CharacterKind::GrandmaHerbs), [Princess](CharacterKind::Princess) and
    /// [Thief](CharacterKind::Thief) allow nothing else until they are applied.
    /// * [MushroomMan](CharacterKind::MushroomMan) allows nothing else until a color is chosen.
    /// * Other cards allow the base actions [the table](Table::is_valid_action) allows.
    /// * No other character card action and no second character card is legal.
    pub fn is_valid_action(&self, action: Action, table: &Table) -> bool {
        if !self.activated {
            return table.is_valid_action(action);
        }
        if table.selected_player().is_none() {
            return false;
        }
        if self.kind().claimed_action() == Some(action) {
            return match &self.effect {
                CardEffect::Joker { swaps, .. } => *swaps < JOKER_SWAPS_LEN,
                CardEffect::Minstrel { swaps } => *swaps < MINSTREL_SWAPS_LEN,
                CardEffect::MushroomMan { color } => color.is_none(),
                CardEffect::GrandmaHerbs { no_entry_tiles } => *no_entry_tiles > 0,
                _ => true,
            };
        }
        if !action.is_base() {
            return false;
        }
        match &self.effect {
            CardEffect::MushroomMan { color: None }
            | CardEffect::Monk { .. }
            | CardEffect::Herald
            | CardEffect::GrandmaHerbs { .. }
            | CardEffect::Princess { .. }
            | CardEffect::Thief => false,
            _ => table.is_valid_action(action),
        }
    }

    /// Applies the claimed action of the card with the selections of the selected player. Does
    /// nothing while the card is inactive or for cards which only change rules.
    ///
    /// * [Monk](CharacterKind::Monk): moves a card student of the first selected color onto
    /// the selected island and refills the card from the bag.
    /// * [Herald](CharacterKind::Herald): asks for the selected island to be resolved.
    /// * [GrandmaHerbs](CharacterKind::GrandmaHerbs): puts a no entry tile onto the selected
    /// island.
    /// * [Joker](CharacterKind::Joker): swaps a card student of the first selected color with
    /// an entrance student of the second selected color.
    /// * [MushroomMan](CharacterKind::MushroomMan): ignores the first selected color.
    /// * [Minstrel](CharacterKind::Minstrel): swaps an entrance student of the first selected
    /// color with a dining room student of the second selected color.
    /// * [Princess](CharacterKind::Princess): seats a card student of the first selected color
    /// in the dining room and refills the card from the bag.
    /// * [Thief](CharacterKind::Thief): every player returns up to [THIEF_STUDENTS_LEN] dining
    /// room students of the first selected color to the bag.
    ///
    /// One use cards deactivate once applied. [Joker](CharacterKind::Joker) and
    /// [Minstrel](CharacterKind::Minstrel) deactivate when their swaps run out.
    ///
    /// # Errors
    ///
    /// * [GameError::MissingSelection] When a selection the card reads has not been made.
    /// * [GameError::OutOfRange] When the selected island does not exist.
    /// * [Transition::Action] When the card has no uses left during this activation.
    /// * [GameError::InsufficientResource] When a student or a no entry tile to move is
    /// missing. Nothing moves.
    /// * [GameError::CapacityExceeded] When a dining room table is full. Nothing moves.
    pub fn apply_action(&mut self, table: &mut Table) -> Result<Applied, GameError> {
        if !self.activated {
            return Ok(Applied::Done);
        }
        let player = table.required_player()?;
        let selections = table.player(player)?.selections().clone();
        match &mut self.effect {
            CardEffect::Monk { students } => {
                let island = selections.required_island()?;
                let color = selections.required_color(0)?;
                table.island(island)?;
                let student = take_card_student(students, color)?;
                table.island_mut(island)?.add_student(student);
                refill_card(students, table);
                self.activated = false;
            }
            CardEffect::Herald => {
                let island = selections.required_island()?;
                table.island(island)?;
                self.activated = false;
                return Ok(Applied::ResolveIsland(island));
            }
            CardEffect::GrandmaHerbs { no_entry_tiles } => {
                let island = selections.required_island()?;
                table.island(island)?;
                if *no_entry_tiles == 0 {
                    return Err(GameError::InsufficientResource(Resource::NoEntryTiles));
                }
                table.island_mut(island)?.add_no_entry_tile();
                *no_entry_tiles -= 1;
                self.activated = false;
            }
            CardEffect::Joker { students, swaps } => {
                if *swaps >= JOKER_SWAPS_LEN {
                    return Err(GameError::IllegalTransition(Transition::Action(
                        Action::SwapStudentCardToEntrance,
                    )));
                }
                let card_color = selections.required_color(0)?;
                let entrance_color = selections.required_color(1)?;
                let position = card_student_position(students, card_color)?;
                let board = table.player_mut(player)?.board_mut();
                let entrance_student = board.pick_from_entrance(entrance_color)?;
                let card_student = students.remove(position);
                students.push(entrance_student);
                board.fill_entrance(vec![card_student])?;
                *swaps += 1;
                if *swaps == JOKER_SWAPS_LEN {
                    self.activated = false;
                }
            }
            CardEffect::MushroomMan { color } => {
                if color.is_some() {
                    return Err(GameError::IllegalTransition(Transition::Action(
                        Action::SelectColor,
                    )));
                }
                *color = Some(selections.required_color(0)?);
            }
            CardEffect::Minstrel { swaps } => {
                if *swaps >= MINSTREL_SWAPS_LEN {
                    return Err(GameError::IllegalTransition(Transition::Action(
                        Action::SwapStudentEntranceToDining,
                    )));
                }
                let entrance_color = selections.required_color(0)?;
                let dining_color = selections.required_color(1)?;
                let board = table.player(player)?.board();
                if !board
                    .entrance()
                    .iter()
                    .any(|student| student.color() == entrance_color)
                {
                    return Err(GameError::InsufficientResource(Resource::EntranceStudent(
                        entrance_color,
                    )));
                }
                if board.dining_count(dining_color) == 0 {
                    return Err(GameError::InsufficientResource(Resource::DiningStudent(
                        dining_color,
                    )));
                }
                if entrance_color != dining_color {
                    board.check_dining(entrance_color)?;
                }
                let board = table.player_mut(player)?.board_mut();
                let dining_student = board.remove_from_dining(dining_color)?;
                let entrance_student = board.pick_from_entrance(entrance_color)?;
                board.fill_entrance(vec![dining_student])?;
                table.seat_in_dining(player, entrance_student)?;
                table.conquer_professors(&Overrides::default());
                *swaps += 1;
                if *swaps == MINSTREL_SWAPS_LEN {
                    self.activated = false;
                }
            }
            CardEffect::Princess { students } => {
                let color = selections.required_color(0)?;
                let position = card_student_position(students, color)?;
                table.player(player)?.board().check_dining(color)?;
                let student = students.remove(position);
                table.seat_in_dining(player, student)?;
                refill_card(students, table);
                table.conquer_professors(&Overrides::default());
                self.activated = false;
            }
            CardEffect::Thief => {
                let color = selections.required_color(0)?;
                for index in 0..table.players().len() {
                    let students = table
                        .player_mut(index)?
                        .board_mut()
                        .take_from_dining(color, THIEF_STUDENTS_LEN);
                    table.return_to_bag(students);
                }
                table.conquer_professors(&Overrides::default());
                self.activated = false;
            }
            CardEffect::Shaman | CardEffect::Postman | CardEffect::Knight => {}
        }
        Ok(Applied::Done)
    }

    /// Blocks the resolution of `island` when it holds a no entry tile. The tile returns to
    /// the card. Only [GrandmaHerbs](CharacterKind::GrandmaHerbs) blocks, active or not.
    ///
    /// # Errors
    ///
    /// * [GameError::OutOfRange] When `island` does not exist.
    ///
    /// # Returns
    ///
    /// Whether the resolution was blocked.
    pub fn block_resolution(
        &mut self,
        table: &mut Table,
        island: usize,
    ) -> Result<bool, GameError> {
        let CardEffect::GrandmaHerbs { no_entry_tiles } = &mut self.effect else {
            return Ok(false);
        };
        if !table.island_mut(island)?.take_no_entry_tile() {
            return Ok(false);
        }
        *no_entry_tiles += 1;
        log::debug!("a no entry tile blocked island {}", island);
        Ok(true)
    }

    /// Whether the card stops at the end of the mother nature move.
    pub(crate) fn closes_after_mother_nature(&self) -> bool {
        matches!(
            self.kind(),
            CharacterKind::Shaman
                | CharacterKind::Postman
                | CharacterKind::Knight
                | CharacterKind::MushroomMan
        )
    }

    /// Whether the card stops after one island was resolved.
    pub(crate) fn closes_after_resolution(&self) -> bool {
        self.kind() == CharacterKind::Knight
    }

    /// Whether the card stops once a base action is taken.
    pub(crate) fn closes_after_base_action(&self) -> bool {
        matches!(self.kind(), CharacterKind::Joker | CharacterKind::Minstrel)
    }
}

fn card_student_position(students: &CardStudents, color: Color) -> Result<usize, GameError> {
    students
        .iter()
        .position(|student| student.color() == color)
        .ok_or(GameError::InsufficientResource(Resource::CardStudent(color)))
}

fn take_card_student(students: &mut CardStudents, color: Color) -> Result<Student, GameError> {
    let position = card_student_position(students, color)?;
    Ok(students.remove(position))
}

fn refill_card(students: &mut CardStudents, table: &mut Table) {
    let (bag, _) = table.bag_and_rng_mut();
    if let Some(student) = bag.draw() {
        students.push(student);
    }
}
