use crate::{Deck, ASSISTANT_CARDS_LEN, MAX_PLAYERS};

/// Describes the wizard printed on the back of an [`AssistantCard`]. Each player is dealt
/// the deck of exactly one wizard.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Wizard {
    /// `0`.
    Sage = 0,
    /// `1`.
    King = 1,
    /// `2`.
    Witch = 2,
    /// `3`.
    Monk = 3,
}

impl Wizard {
    /// # Returns
    ///
    /// An array of all [`Wizard`] variants in the order they are handed out to players.
    #[inline]
    pub fn wizards() -> [Wizard; MAX_PLAYERS] {
        [Wizard::Sage, Wizard::King, Wizard::Witch, Wizard::Monk]
    }
}

/// A card played at the start of each round. The lowest turn order acts first, and the step
/// budget bounds how far mother nature may move during the player's turn.
///
/// Turn order and step budget are linked so that `2 * steps - turn_order` is either `0` or `1`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AssistantCard {
    wizard: Wizard,
    turn_order: usize,
    steps: usize,
    used: bool,
}

impl AssistantCard {
    /// A new unused card where the step budget is derived from `turn_order`.
    ///
    /// # Returns
    ///
    /// [None] when `turn_order` is not in `1..=`[ASSISTANT_CARDS_LEN].
    pub fn new(wizard: Wizard, turn_order: usize) -> Option<AssistantCard> {
        if !(1..=ASSISTANT_CARDS_LEN).contains(&turn_order) {
            return None;
        }
        Some(AssistantCard {
            wizard,
            turn_order,
            steps: (turn_order + 1) / 2,
            used: false,
        })
    }

    /// The wizard of the deck this card belongs to.
    #[inline]
    pub fn wizard(&self) -> Wizard {
        self.wizard
    }

    /// The value deciding who acts first; lower acts earlier. In range `1..=10`.
    #[inline]
    pub fn turn_order(&self) -> usize {
        self.turn_order
    }

    /// The maximum number of steps mother nature may move. In range `1..=5`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the card has been played.
    #[inline]
    pub fn is_used(&self) -> bool {
        self.used
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}

/// # Returns
///
/// The full deck of `wizard` sorted by turn order.
pub fn deck(wizard: Wizard) -> Deck {
    (1..=ASSISTANT_CARDS_LEN)
        .filter_map(|turn_order| AssistantCard::new(wizard, turn_order))
        .collect()
}
