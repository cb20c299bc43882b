use crate::{
    Bag, CardEffect, CardStudents, CharacterCard, CharacterKind, Characters, GameError,
    DRAFTED_CHARACTERS_LEN, JOKER_STUDENTS_LEN, MONK_STUDENTS_LEN, NO_ENTRY_TILES_LEN,
    PRINCESS_STUDENTS_LEN,
};
use rand::seq::SliceRandom;
use rand::Rng;

impl CharacterCard {
    /// Creates an inactive card of `kind` at its base cost. Cards holding students draw them
    /// from `bag`.
    ///
    /// # Errors
    ///
    /// * [Resource::Students](crate::Resource::Students) When the bag cannot fill the card.
    /// Nothing is drawn.
    pub fn new(kind: CharacterKind, bag: &mut Bag) -> Result<CharacterCard, GameError> {
        let mut draw = |len: usize| -> Result<CardStudents, GameError> {
            Ok(bag.draw_exactly(len)?.into_iter().collect())
        };
        let effect = match kind {
            CharacterKind::Monk => CardEffect::Monk {
                students: draw(MONK_STUDENTS_LEN)?,
            },
            CharacterKind::Shaman => CardEffect::Shaman,
            CharacterKind::Herald => CardEffect::Herald,
            CharacterKind::Postman => CardEffect::Postman,
            CharacterKind::GrandmaHerbs => CardEffect::GrandmaHerbs {
                no_entry_tiles: NO_ENTRY_TILES_LEN,
            },
            CharacterKind::Joker => CardEffect::Joker {
                students: draw(JOKER_STUDENTS_LEN)?,
                swaps: 0,
            },
            CharacterKind::Knight => CardEffect::Knight,
            CharacterKind::MushroomMan => CardEffect::MushroomMan { color: None },
            CharacterKind::Minstrel => CardEffect::Minstrel { swaps: 0 },
            CharacterKind::Princess => CardEffect::Princess {
                students: draw(PRINCESS_STUDENTS_LEN)?,
            },
            CharacterKind::Thief => CardEffect::Thief,
        };
        Ok(CharacterCard {
            effect,
            cost: kind.base_cost(),
            cost_increased: false,
            activated: false,
        })
    }
}

/// Draws [DRAFTED_CHARACTERS_LEN] distinct kinds at random and creates their cards in the
/// drawn order.
///
/// # Errors
///
/// * [Resource::Students](crate::Resource::Students) When the bag cannot fill a card.
pub fn draft<R: Rng + ?Sized>(rng: &mut R, bag: &mut Bag) -> Result<Characters, GameError> {
    CharacterKind::kinds()
        .choose_multiple(rng, DRAFTED_CHARACTERS_LEN)
        .map(|kind| CharacterCard::new(*kind, bag))
        .collect()
}
