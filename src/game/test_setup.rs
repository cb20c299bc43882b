use crate::{CharacterCard, CharacterKind, Game, Table};

impl Game {
    /// Generates a [Game] around [an empty table](Table::empty_table) holding a card of
    /// every kind in `kinds`. Cards holding students draw them from a bag with `4` students of
    /// every color. The rest of those students stay in the bag.
    pub fn empty_game(players_len: usize, expert: bool, kinds: &[CharacterKind]) -> Game {
        let mut table = Table::empty_table(players_len, expert);
        table.fill_bag(4);
        let characters = kinds
            .iter()
            .map(|kind| {
                let (bag, _) = table.bag_and_rng_mut();
                CharacterCard::new(*kind, bag).unwrap()
            })
            .collect();
        Game {
            table,
            characters,
            active_character: None,
            observers: Vec::new(),
        }
    }
}
