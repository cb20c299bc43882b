use crate::{Action, Color, MAX_PLAYERS, MIN_PLAYERS};
use std::error::Error;
use std::fmt;

/// Describes the reason why an operation on the [table](crate::Table) or the
/// [game](crate::Game) could not be executed.
///
/// Every error is deterministic: the same state and the same inputs always produce the same
/// error, and no operation is retried internally.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum GameError {
    /// The operation reads a selection that has not been made yet.
    MissingSelection(Selection),
    /// An island, player, cloud tile or character card index is outside of its bounds.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The number of indexable items.
        len: usize,
    },
    /// The operation is not allowed in the current state of the match.
    IllegalTransition(Transition),
    /// The operation needs more of some resource than is available.
    InsufficientResource(Resource),
    /// The operation would put more items into a container than it holds.
    CapacityExceeded {
        /// The full container.
        container: Container,
        /// The number of items already in the container.
        count: usize,
    },
}

/// Describes which selection was missing for a [GameError::MissingSelection].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Selection {
    /// No player is selected.
    Player,
    /// The selected player has not chosen an [assistant card](crate::AssistantCard).
    AssistantCard,
    /// The selected player has not chosen an island.
    Island,
    /// The selected player has not chosen enough [colors](Color).
    Color,
    /// The selected player has not chosen a [cloud tile](crate::CloudTile).
    CloudTile,
    /// The selected player has not chosen a [character card](crate::CharacterCard).
    CharacterCard,
}

/// Describes which resource ran out for a [GameError::InsufficientResource].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Resource {
    /// Not enough coins to pay for a character card.
    Coins {
        /// The cost of the card.
        required: usize,
        /// The coins held by the player.
        available: usize,
    },
    /// No card with the selected turn order is left in the player's hand.
    AssistantCard {
        /// The selected turn order.
        turn_order: usize,
    },
    /// A mandatory draw asked for more students than the bag holds.
    Students {
        /// The number of students requested.
        requested: usize,
        /// The number of students in the bag.
        available: usize,
    },
    /// No student of the color is waiting in the entrance.
    EntranceStudent(Color),
    /// No student of the color is sitting in the dining room.
    DiningStudent(Color),
    /// No student of the color is held by the character card.
    CardStudent(Color),
    /// The selected cloud tile has already been taken this round.
    CloudTile {
        /// The index of the empty cloud tile.
        cloud_tile: usize,
    },
    /// The character card holds no more no entry tiles.
    NoEntryTiles,
}

/// Describes which container overflowed for a [GameError::CapacityExceeded].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Container {
    /// Every seat of the match is taken.
    Players,
    /// The dining room table of the color is full.
    DiningRoom(Color),
    /// The entrance is full.
    Entrance,
}

/// Describes which rule was broken for a [GameError::IllegalTransition].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Transition {
    /// Attempting to set up the match before every player joined.
    PlayersMissing {
        /// The number of players who joined.
        joined: usize,
        /// The number of players the match was created for.
        expected: usize,
    },
    /// Attempting to set up the match twice.
    AlreadySetUp,
    /// Attempting to play before the match has been set up.
    NotSetUp,
    /// Attempting an action which is not valid after the previous action.
    Action(Action),
    /// Attempting to play an assistant card another player already played this round.
    AssistantCardTaken {
        /// The turn order of the taken card.
        turn_order: usize,
    },
    /// Attempting to apply a character card while none is active.
    NoActiveCharacter,
    /// Attempting to use character cards in a classic match.
    ClassicMode,
}

/// Describes the reason why a [Game](crate::Game) could not be created.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum NewError {
    /// Attempting to start with fewer than [MIN_PLAYERS] players.
    TooFewPlayers {
        /// The requested number of players.
        players_len: usize,
    },
    /// Attempting to start with more than [MAX_PLAYERS] players.
    TooManyPlayers {
        /// The requested number of players.
        players_len: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingSelection(selection) => write!(f, "missing selection: {selection}"),
            GameError::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range 0..{len}")
            }
            GameError::IllegalTransition(transition) => {
                write!(f, "illegal transition: {transition}")
            }
            GameError::InsufficientResource(resource) => {
                write!(f, "insufficient resource: {resource}")
            }
            GameError::CapacityExceeded { container, count } => {
                write!(f, "{container} is full with {count} items")
            }
        }
    }
}

impl Error for GameError {}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Selection::Player => "player",
            Selection::AssistantCard => "assistant card",
            Selection::Island => "island",
            Selection::Color => "color",
            Selection::CloudTile => "cloud tile",
            Selection::CharacterCard => "character card",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Coins {
                required,
                available,
            } => write!(f, "{required} coins required but {available} held"),
            Resource::AssistantCard { turn_order } => {
                write!(f, "no assistant card with turn order {turn_order}")
            }
            Resource::Students {
                requested,
                available,
            } => write!(f, "{requested} students requested but {available} in the bag"),
            Resource::EntranceStudent(color) => write!(f, "no {color} student in the entrance"),
            Resource::DiningStudent(color) => write!(f, "no {color} student in the dining room"),
            Resource::CardStudent(color) => write!(f, "no {color} student on the card"),
            Resource::CloudTile { cloud_tile } => write!(f, "cloud tile {cloud_tile} is empty"),
            Resource::NoEntryTiles => f.write_str("no entry tiles left on the card"),
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Players => f.write_str("the match"),
            Container::DiningRoom(color) => write!(f, "the {color} dining table"),
            Container::Entrance => f.write_str("the entrance"),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::PlayersMissing { joined, expected } => {
                write!(f, "{joined} of {expected} players joined")
            }
            Transition::AlreadySetUp => f.write_str("the match is already set up"),
            Transition::NotSetUp => f.write_str("the match is not set up"),
            Transition::Action(action) => write!(f, "{action:?} is not valid now"),
            Transition::AssistantCardTaken { turn_order } => {
                write!(f, "assistant card {turn_order} was already played this round")
            }
            Transition::NoActiveCharacter => f.write_str("no character card is active"),
            Transition::ClassicMode => f.write_str("character cards need an expert match"),
        }
    }
}

impl fmt::Display for NewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewError::TooFewPlayers { players_len } => {
                write!(f, "{players_len} players is fewer than {MIN_PLAYERS}")
            }
            NewError::TooManyPlayers { players_len } => {
                write!(f, "{players_len} players is more than {MAX_PLAYERS}")
            }
        }
    }
}

impl Error for NewError {}
