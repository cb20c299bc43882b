use crate::{
    AssistantCard, CharacterCard, Color, IslandTile, Player, Professor, Student, Tower,
    TowerColor, ASSISTANT_CARDS_LEN, DRAFTED_CHARACTERS_LEN, PLAYER_CAPACITY,
};
use bimap::BiBTreeMap;
use smallvec::SmallVec;

/// The largest entrance of any player count. `9` students with `3` players.
///
/// # See Also
///
/// * [entrance_capacity](crate::entrance_capacity)
pub const ENTRANCE_CAPACITY: usize = 9;
/// The largest number of towers held by one school board. `8` towers with `2` or `4` players.
///
/// # See Also
///
/// * [towers_len](crate::towers_len)
pub const TOWERS_CAPACITY: usize = 8;
/// The most students a character card holds. `6` students on a
/// [Joker](crate::CharacterKind::Joker).
pub const CARD_STUDENTS_CAPACITY: usize = 6;

/// A vector of players in the order they joined.
///
/// # See Also
///
/// * [PLAYER_CAPACITY]
/// * [Table](crate::Table)
pub type Players = SmallVec<[Player; PLAYER_CAPACITY]>;
/// A vector of [assistant cards](AssistantCard) still in a player's hand.
///
/// # See Also
///
/// * [deck](crate::deck)
pub type Deck = SmallVec<[AssistantCard; ASSISTANT_CARDS_LEN]>;
/// A vector of the students waiting in an entrance.
///
/// # See Also
///
/// * [SchoolBoard](crate::SchoolBoard)
pub type Entrance = SmallVec<[Student; ENTRANCE_CAPACITY]>;
/// A vector of the students held by a character card.
///
/// # See Also
///
/// * [CardEffect](crate::CardEffect)
pub type CardStudents = SmallVec<[Student; CARD_STUDENTS_CAPACITY]>;
/// A vector of the [towers](Tower) waiting on a school board.
pub type Towers = SmallVec<[Tower; TOWERS_CAPACITY]>;
/// A vector of the [professors](Professor) held by a school board or still unclaimed.
pub type Professors = SmallVec<[Professor; Color::COLORS_LEN]>;
/// A vector of the merged [island tiles](IslandTile) of one island.
pub type Tiles = SmallVec<[IslandTile; 1]>;
/// The colors selected by a player, oldest first. At most `2` are kept.
///
/// # See Also
///
/// * [Selections](crate::Selections)
pub type Colors = SmallVec<[Color; 2]>;
/// A vector of the character cards drafted for an expert match.
///
/// # See Also
///
/// * [DRAFTED_CHARACTERS_LEN]
/// * [Game](crate::Game)
pub type Characters = SmallVec<[CharacterCard; DRAFTED_CHARACTERS_LEN]>;
/// A bimap of player indexes to the [color](TowerColor) of the towers they own.
///
/// # See Also
///
/// * [Table::tower_owner](crate::Table::tower_owner)
pub type TowerOwners = BiBTreeMap<usize, TowerColor>;
/// A vector of the number of [assistant cards](AssistantCard) left in each hand.
///
/// # See Also
///
/// * [GameView](crate::GameView)
pub type HandLens = SmallVec<[usize; PLAYER_CAPACITY]>;
