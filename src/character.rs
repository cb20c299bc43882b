use crate::{Action, CardStudents, Color, Student};
use num_derive::FromPrimitive;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

pub use effect::*;
pub use factory::*;

mod effect;
mod factory;

/// Describes one of the character cards of an expert match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, FromPrimitive)]
pub enum CharacterKind {
    /// Holds `4` students. Moves one of them onto an island.
    Monk = 0,
    /// The player takes professors on ties for the rest of the turn.
    Shaman,
    /// Resolves an island as if mother nature ended her move there.
    Herald,
    /// Mother nature may move `2` extra steps this turn.
    Postman,
    /// Holds `4` no entry tiles. Blocks the next resolution of an island.
    GrandmaHerbs,
    /// Holds `6` students. Swaps up to `3` of them with entrance students.
    Joker,
    /// The player gains `2` influence during the next resolution.
    Knight,
    /// A chosen color does not count for influence this turn.
    MushroomMan,
    /// Swaps up to `2` entrance students with dining room students.
    Minstrel,
    /// Holds `4` students. Moves one of them into the dining room.
    Princess,
    /// Every player returns up to `3` dining room students of a chosen color to the bag.
    Thief,
}

impl CharacterKind {
    /// The number of character kinds. `11` kinds.
    pub const KINDS_LEN: usize = 11;

    /// # Returns
    ///
    /// An array of all [`CharacterKind`] variants.
    #[inline]
    pub fn kinds() -> [CharacterKind; CharacterKind::KINDS_LEN] {
        [
            CharacterKind::Monk,
            CharacterKind::Shaman,
            CharacterKind::Herald,
            CharacterKind::Postman,
            CharacterKind::GrandmaHerbs,
            CharacterKind::Joker,
            CharacterKind::Knight,
            CharacterKind::MushroomMan,
            CharacterKind::Minstrel,
            CharacterKind::Princess,
            CharacterKind::Thief,
        ]
    }

    /// The coins needed to activate the card the first time.
    pub fn base_cost(self) -> usize {
        match self {
            CharacterKind::Monk
            | CharacterKind::Postman
            | CharacterKind::Joker
            | CharacterKind::Minstrel => 1,
            CharacterKind::Shaman
            | CharacterKind::GrandmaHerbs
            | CharacterKind::Knight
            | CharacterKind::Princess => 2,
            CharacterKind::Herald | CharacterKind::MushroomMan | CharacterKind::Thief => 3,
        }
    }

    /// The action the card claims while it is active, or [None] for cards which only change
    /// rules.
    pub fn claimed_action(self) -> Option<Action> {
        match self {
            CharacterKind::Monk => Some(Action::MoveStudentFromCardToIsland),
            CharacterKind::Herald => Some(Action::SelectIsland),
            CharacterKind::GrandmaHerbs => Some(Action::MoveNoEntryToIsland),
            CharacterKind::Joker => Some(Action::SwapStudentCardToEntrance),
            CharacterKind::MushroomMan | CharacterKind::Thief => Some(Action::SelectColor),
            CharacterKind::Minstrel => Some(Action::SwapStudentEntranceToDining),
            CharacterKind::Princess => Some(Action::MoveStudentFromCardToDining),
            CharacterKind::Shaman | CharacterKind::Postman | CharacterKind::Knight => None,
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Distribution<CharacterKind> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CharacterKind {
        let index = rng.gen_range(0..CharacterKind::KINDS_LEN);
        num::FromPrimitive::from_usize(index).unwrap_or_else(|| {
            unreachable!(
                "index ({:?}) should be matched since kinds cover all indexes \
                in range 0..CharacterKind::KINDS_LEN (0..{:?}).",
                index,
                CharacterKind::KINDS_LEN
            );
        })
    }
}

/// The payload a card carries between activations.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum CardEffect {
    /// The students waiting on a [Monk](CharacterKind::Monk).
    Monk {
        /// Refilled from the bag after each use.
        students: CardStudents,
    },
    /// [Shaman](CharacterKind::Shaman).
    Shaman,
    /// [Herald](CharacterKind::Herald).
    Herald,
    /// [Postman](CharacterKind::Postman).
    Postman,
    /// The no entry tiles left on [GrandmaHerbs](CharacterKind::GrandmaHerbs).
    GrandmaHerbs {
        /// Returned to the card when an island blocks a resolution.
        no_entry_tiles: usize,
    },
    /// The students waiting on a [Joker](CharacterKind::Joker).
    Joker {
        /// Swapped with entrance students, never refilled.
        students: CardStudents,
        /// The swaps done during the current activation.
        swaps: usize,
    },
    /// [Knight](CharacterKind::Knight).
    Knight,
    /// The color ignored by a [MushroomMan](CharacterKind::MushroomMan).
    MushroomMan {
        /// Chosen once per activation.
        color: Option<Color>,
    },
    /// The swaps of a [Minstrel](CharacterKind::Minstrel).
    Minstrel {
        /// The swaps done during the current activation.
        swaps: usize,
    },
    /// The students waiting on a [Princess](CharacterKind::Princess).
    Princess {
        /// Refilled from the bag after each use.
        students: CardStudents,
    },
    /// [Thief](CharacterKind::Thief).
    Thief,
}

/// A drafted character card: its effect, its current cost and whether it is active.
///
/// The cost rises by one coin after the first activation and stays there.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CharacterCard {
    effect: CardEffect,
    cost: usize,
    cost_increased: bool,
    activated: bool,
}

impl CharacterCard {
    /// The kind of the card.
    pub fn kind(&self) -> CharacterKind {
        match self.effect {
            CardEffect::Monk { .. } => CharacterKind::Monk,
            CardEffect::Shaman => CharacterKind::Shaman,
            CardEffect::Herald => CharacterKind::Herald,
            CardEffect::Postman => CharacterKind::Postman,
            CardEffect::GrandmaHerbs { .. } => CharacterKind::GrandmaHerbs,
            CardEffect::Joker { .. } => CharacterKind::Joker,
            CardEffect::Knight => CharacterKind::Knight,
            CardEffect::MushroomMan { .. } => CharacterKind::MushroomMan,
            CardEffect::Minstrel { .. } => CharacterKind::Minstrel,
            CardEffect::Princess { .. } => CharacterKind::Princess,
            CardEffect::Thief => CharacterKind::Thief,
        }
    }

    /// The effect and its payload.
    #[inline]
    pub fn effect(&self) -> &CardEffect {
        &self.effect
    }

    /// The coins needed to activate the card.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Whether the card has been activated at least once.
    #[inline]
    pub fn is_cost_increased(&self) -> bool {
        self.cost_increased
    }

    /// Whether the card is currently active.
    #[inline]
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// The students held by the card. Empty for cards which hold none.
    pub fn students(&self) -> &[Student] {
        match &self.effect {
            CardEffect::Monk { students }
            | CardEffect::Joker { students, .. }
            | CardEffect::Princess { students } => students,
            _ => &[],
        }
    }

    /// The no entry tiles held by the card. `0` for cards which hold none.
    pub fn no_entry_tiles(&self) -> usize {
        match self.effect {
            CardEffect::GrandmaHerbs { no_entry_tiles } => no_entry_tiles,
            _ => 0,
        }
    }
}
