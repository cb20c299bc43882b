use crate::Color;
use konst::primitive::parse_usize;
use konst::{option, result};

/// The minimum number of players in a match. `2` players.
///
/// # See Also
///
/// * [Game::new](crate::Game::new)
pub const MIN_PLAYERS: usize = 2;
/// The maximum number of players in a match. `4` players.
///
/// # See Also
///
/// * [Game::new](crate::Game::new)
/// * [PLAYER_CAPACITY]
pub const MAX_PLAYERS: usize = 4;
/// All small, dynamically allocated structs which store player data will be stored on the stack
/// until the number of players becomes greater than `PLAYER_CAPACITY`. If the environment
/// variable named `PLAYER_CAPACITY` is present at compile time and is able to be parsed into
/// a `usize`, set to the value of the environment variable. Otherwise, it is set to
/// [MAX_PLAYERS].
///
/// # See Also
///
/// * [Players](crate::Players)
/// * [MAX_PLAYERS]
pub const PLAYER_CAPACITY: usize = option::unwrap_or!(
    option::and_then!(option_env!("PLAYER_CAPACITY"), |str| result::ok!(
        parse_usize(str)
    )),
    MAX_PLAYERS
);
/// The number of [island tiles](crate::IslandTile) placed in a ring during setup. `12` tiles.
///
/// # See Also
///
/// * [Table::setup](crate::Table::setup)
pub const ISLANDS_LEN: usize = 12;
/// The number of coins in the bank of an expert match before players take their first coin.
/// If the environment variable named `COINS_LEN` is present at compile time and is able to be
/// parsed into a `usize`, set to the value of the environment variable. Otherwise, it is set
/// to `20`.
///
/// # Panics
///
/// * When the given value cannot give [INITIAL_COINS] to [MAX_PLAYERS] players
pub const COINS_LEN: usize = option::unwrap_or!(
    option::and_then!(option_env!("COINS_LEN"), |str| result::ok!(parse_usize(
        str
    ))),
    20
);
const _: () = assert!(COINS_LEN >= INITIAL_COINS * MAX_PLAYERS);
/// The number of coins each player starts an expert match with. `1` coin.
pub const INITIAL_COINS: usize = 1;
/// The number of students of each [color](Color) set aside to seed the islands. `2` of each,
/// `10` in total.
pub const STARTER_STUDENTS_PER_COLOR: usize = 2;
/// The number of students in the starter set. One for every island except the island with
/// mother nature and the island opposite.
pub const STARTER_STUDENTS_LEN: usize = STARTER_STUDENTS_PER_COLOR * Color::COLORS_LEN;
const _: () = assert!(STARTER_STUDENTS_LEN == ISLANDS_LEN - 2);
/// The number of students of each [color](Color) put into the bag after the islands are
/// seeded. `24` of each.
pub const BAG_STUDENTS_PER_COLOR: usize = 24;
/// The maximum number of students of one [color](Color) in a dining room. `10` students.
pub const DINING_CAPACITY: usize = 10;
/// A student placed at a multiple of this position in a dining room earns a coin. Every
/// `3`rd student.
pub const COIN_POSITION: usize = 3;
/// The number of [assistant cards](crate::AssistantCard) dealt to each player. `10` cards.
pub const ASSISTANT_CARDS_LEN: usize = 10;
/// The number of [character cards](crate::CharacterCard) drafted for an expert match.
/// `3` cards.
pub const DRAFTED_CHARACTERS_LEN: usize = 3;
/// The number of no entry tiles held by a
/// [GrandmaHerbs](crate::CharacterKind::GrandmaHerbs) card. `4` tiles.
pub const NO_ENTRY_TILES_LEN: usize = 4;
/// The number of students held by a [Monk](crate::CharacterKind::Monk). `4` students.
pub const MONK_STUDENTS_LEN: usize = 4;
/// The number of students held by a [Princess](crate::CharacterKind::Princess). `4` students.
pub const PRINCESS_STUDENTS_LEN: usize = 4;
/// The number of students held by a [Joker](crate::CharacterKind::Joker). `6` students.
pub const JOKER_STUDENTS_LEN: usize = 6;
/// The maximum number of swaps during one activation of a
/// [Joker](crate::CharacterKind::Joker). `3` swaps.
pub const JOKER_SWAPS_LEN: usize = 3;
/// The maximum number of swaps during one activation of a
/// [Minstrel](crate::CharacterKind::Minstrel). `2` swaps.
pub const MINSTREL_SWAPS_LEN: usize = 2;
/// The additional influence granted by an active [Knight](crate::CharacterKind::Knight).
/// `2` points.
pub const KNIGHT_BONUS: usize = 2;
/// The additional mother nature steps granted by an active
/// [Postman](crate::CharacterKind::Postman). `2` steps.
pub const POSTMAN_BONUS: usize = 2;
/// The maximum number of students of one [color](Color) each player returns to the bag
/// when a [Thief](crate::CharacterKind::Thief) is applied. `3` students.
pub const THIEF_STUDENTS_LEN: usize = 3;
/// The number of islands at which the match ends. `3` islands.
pub const FINAL_ISLANDS_LEN: usize = 3;

/// # Returns
///
/// The number of students held in each entrance. `9` with `3` players and `7` otherwise.
#[inline]
pub const fn entrance_capacity(players_len: usize) -> usize {
    if players_len == 3 {
        9
    } else {
        7
    }
}

/// # Returns
///
/// The number of [towers](crate::Tower) on each school board at setup. `6` with `3` players
/// and `8` otherwise.
#[inline]
pub const fn towers_len(players_len: usize) -> usize {
    if players_len == 3 {
        6
    } else {
        8
    }
}

/// # Returns
///
/// The number of students each player moves out of their entrance during a turn, which is also
/// the number of students put on each [cloud tile](crate::CloudTile). `4` with `3` players and
/// `3` otherwise.
#[inline]
pub const fn students_per_turn(players_len: usize) -> usize {
    if players_len == 3 {
        4
    } else {
        3
    }
}
