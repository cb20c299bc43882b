use crate::{
    AssistantCard, CharacterCard, CloudTile, Game, HandLens, Island, Professor, SchoolBoard,
    PLAYER_CAPACITY,
};
use smallvec::SmallVec;

/// Immutably borrows the public state of a [`Game`]. The hands of the players are replaced
/// by their lengths.
#[derive(Debug)]
pub struct GameView<'a> {
    /// The nickname of each player in the order they joined.
    pub nicknames: SmallVec<[&'a str; PLAYER_CAPACITY]>,
    /// The school board of each player.
    pub boards: SmallVec<[&'a SchoolBoard; PLAYER_CAPACITY]>,
    /// The assistant card each player played this round.
    pub played_cards: SmallVec<[Option<&'a AssistantCard>; PLAYER_CAPACITY]>,
    /// The number of assistant cards left in each hand.
    pub hand_lens: HandLens,
    /// The islands in clockwise order.
    pub islands: &'a [Island],
    /// The cloud tiles.
    pub cloud_tiles: &'a [CloudTile],
    /// The professors nobody has claimed yet.
    pub professors: &'a [Professor],
    /// The drafted character cards. Empty in a classic match.
    pub characters: &'a [CharacterCard],
    /// The number of students left in the bag.
    pub bag_len: usize,
    /// The coins left in the bank.
    pub bank: usize,
    /// The index of the island with mother nature.
    pub mother_nature: usize,
    /// The index of the selected player.
    pub selected_player: Option<usize>,
    /// The index of the active character card.
    pub active_character: Option<usize>,
}

impl<'a> Game {
    /// # Returns
    ///
    /// A new [`GameView`] struct, which immutably borrows the state of the [`Game`], but with
    /// `bag` replaced by `bag.len()` and every hand replaced by its length.
    pub fn view(&'a self) -> GameView<'a> {
        let players = self.table.players();
        GameView {
            nicknames: players.iter().map(|player| player.nickname()).collect(),
            boards: players.iter().map(|player| player.board()).collect(),
            played_cards: players.iter().map(|player| player.played_card()).collect(),
            hand_lens: players.iter().map(|player| player.deck().len()).collect(),
            islands: self.table.islands(),
            cloud_tiles: self.table.cloud_tiles(),
            professors: self.table.professors(),
            characters: &self.characters,
            bag_len: self.table.bag().len(),
            bank: self.table.bank(),
            mother_nature: self.table.mother_nature(),
            selected_player: self.table.selected_player(),
            active_character: self.active_character,
        }
    }

    /// # Returns
    ///
    /// The assistant cards held by the requesting player or `None` if out of bounds.
    pub fn get_hand(&self, index: usize) -> Option<&[AssistantCard]> {
        self.table.players().get(index).map(|player| player.deck())
    }
}
