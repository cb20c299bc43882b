use crate::{
    AssistantCard, Color, Colors, Deck, GameError, Resource, SchoolBoard, Selection, Wizard,
};

/// The transient choices of a player which the next operation reads.
///
/// [clear](Selections::clear) forgets the choices of one action, and
/// [clear_end_turn](Selections::clear_end_turn) forgets every choice once the turn is over.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Selections {
    assistant_card: Option<usize>,
    island: Option<usize>,
    colors: Colors,
    cloud_tile: Option<usize>,
    character_card: Option<usize>,
}

impl Selections {
    /// The turn order of the selected [assistant card](AssistantCard).
    #[inline]
    pub fn assistant_card(&self) -> Option<usize> {
        self.assistant_card
    }

    /// The index of the selected island.
    #[inline]
    pub fn island(&self) -> Option<usize> {
        self.island
    }

    /// The selected colors, oldest first.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The index of the selected cloud tile.
    #[inline]
    pub fn cloud_tile(&self) -> Option<usize> {
        self.cloud_tile
    }

    /// The index of the selected character card.
    #[inline]
    pub fn character_card(&self) -> Option<usize> {
        self.character_card
    }

    /// The island selection, required.
    ///
    /// # Errors
    ///
    /// * [Selection::Island] When no island is selected.
    pub fn required_island(&self) -> Result<usize, GameError> {
        self.island
            .ok_or(GameError::MissingSelection(Selection::Island))
    }

    /// The color selected at `position`, oldest first, required.
    ///
    /// # Errors
    ///
    /// * [Selection::Color] When fewer than `position + 1` colors are selected.
    pub fn required_color(&self, position: usize) -> Result<Color, GameError> {
        self.colors
            .get(position)
            .copied()
            .ok_or(GameError::MissingSelection(Selection::Color))
    }

    /// The cloud tile selection, required.
    ///
    /// # Errors
    ///
    /// * [Selection::CloudTile] When no cloud tile is selected.
    pub fn required_cloud_tile(&self) -> Result<usize, GameError> {
        self.cloud_tile
            .ok_or(GameError::MissingSelection(Selection::CloudTile))
    }

    /// The character card selection, required.
    ///
    /// # Errors
    ///
    /// * [Selection::CharacterCard] When no character card is selected.
    pub fn required_character_card(&self) -> Result<usize, GameError> {
        self.character_card
            .ok_or(GameError::MissingSelection(Selection::CharacterCard))
    }

    /// Forgets the island, the colors and the cloud tile.
    pub fn clear(&mut self) {
        self.island = None;
        self.colors.clear();
        self.cloud_tile = None;
    }

    /// Forgets every selection.
    pub fn clear_end_turn(&mut self) {
        self.clear();
        self.assistant_card = None;
        self.character_card = None;
    }
}

/// A seat at the table: the nickname, the [school board](SchoolBoard), the remaining
/// [assistant cards](AssistantCard) and the current [selections](Selections).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Player {
    nickname: String,
    wizard: Wizard,
    board: SchoolBoard,
    deck: Deck,
    played_card: Option<AssistantCard>,
    selections: Selections,
}

impl Player {
    /// A player holding the full `deck`.
    pub fn new(nickname: String, wizard: Wizard, board: SchoolBoard, deck: Deck) -> Player {
        Player {
            nickname,
            wizard,
            board,
            deck,
            played_card: None,
            selections: Selections::default(),
        }
    }

    /// The nickname the player joined with.
    #[inline]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// The wizard of the player's deck.
    #[inline]
    pub fn wizard(&self) -> Wizard {
        self.wizard
    }

    /// The school board of the player.
    #[inline]
    pub fn board(&self) -> &SchoolBoard {
        &self.board
    }

    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut SchoolBoard {
        &mut self.board
    }

    /// The assistant cards still in the player's hand.
    #[inline]
    pub fn deck(&self) -> &[AssistantCard] {
        &self.deck
    }

    /// The assistant card played this round.
    #[inline]
    pub fn played_card(&self) -> Option<&AssistantCard> {
        self.played_card.as_ref()
    }

    /// The current selections of the player.
    #[inline]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Selects the assistant card with `turn_order`.
    pub fn select_assistant_card(&mut self, turn_order: usize) {
        self.selections.assistant_card = Some(turn_order);
    }

    /// Selects the island at `index`.
    pub fn select_island(&mut self, index: usize) {
        self.selections.island = Some(index);
    }

    /// Adds `color` to the selected colors. Only the `2` most recent colors are kept.
    pub fn select_color(&mut self, color: Color) {
        if self.selections.colors.len() == self.selections.colors.inline_size() {
            self.selections.colors.remove(0);
        }
        self.selections.colors.push(color);
    }

    /// Selects the cloud tile at `index`.
    pub fn select_cloud_tile(&mut self, index: usize) {
        self.selections.cloud_tile = Some(index);
    }

    /// Selects the character card at `index`.
    pub fn select_character_card(&mut self, index: usize) {
        self.selections.character_card = Some(index);
    }

    /// Forgets the island, the colors and the cloud tile.
    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }

    /// Forgets every selection.
    pub fn clear_selections_end_turn(&mut self) {
        self.selections.clear_end_turn();
    }

    /// Whether every card left in the player's hand has one of `turn_orders`.
    pub fn only_holds(&self, turn_orders: &[usize]) -> bool {
        self.deck
            .iter()
            .all(|card| turn_orders.contains(&card.turn_order()))
    }

    /// Removes the selected assistant card from the player's hand and marks it as played for
    /// this round.
    ///
    /// # Errors
    ///
    /// * [Selection::AssistantCard] When no assistant card is selected.
    /// * [Resource::AssistantCard] When no card with the selected turn order is in the hand.
    pub fn play_assistant_card(&mut self) -> Result<&AssistantCard, GameError> {
        let turn_order = self
            .selections
            .assistant_card
            .ok_or(GameError::MissingSelection(Selection::AssistantCard))?;
        let index = self
            .deck
            .iter()
            .position(|card| card.turn_order() == turn_order)
            .ok_or(GameError::InsufficientResource(Resource::AssistantCard {
                turn_order,
            }))?;
        let mut card = self.deck.remove(index);
        card.mark_used();
        Ok(self.played_card.insert(card))
    }

    /// Forgets the assistant card played this round.
    pub fn clear_played_card(&mut self) {
        self.played_card = None;
    }
}
