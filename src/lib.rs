//! Concrete structs to represent and protect the state of a match of Eriantys with methods to
//! progress through the rounds of the match.
//!
//! ## Summary
//!
//! Two to four players each own a [school board](SchoolBoard) and a hand of
//! [assistant cards](AssistantCard). Every round the players refill the
//! [cloud tiles](CloudTile), play an assistant card to decide the turn order and then, one turn
//! each, move [students](Student) out of their entrance, move mother nature around a ring of
//! [islands](Island) and take the students of a cloud tile. Holding the most students of a
//! [color](Color) in a dining room earns its [professor](Professor). Professors earn
//! influence on islands, and the player with the most influence on the island mother nature
//! ends her move on places their [towers](Tower) there. In an expert match three
//! [character cards](CharacterCard) bend those rules for a price in coins.
//!
//! ## How is the match created?
//!
//! [Game] offers the only public endpoint to create a match. [Game::new] and
//! [Game::with_seed] create the match, [Game::add_player] seats the players and
//! [Game::setup_game] seeds the islands, fills the bag and entrances, deals the assistant
//! cards and, in an expert match, drafts the character cards.
//!
//! ## How is the match advanced?
//!
//! Every operation acts on behalf of the [selected player](Game::select_player) and reads the
//! [selections](Selections) of that player, so a controller first selects what an operation
//! needs and then calls it. [Game::is_valid_action] tells which [action](Action) is legal
//! next without changing anything:
//!
//! * [PlayAssistantCard](Action::PlayAssistantCard) once per round.
//! * [MoveStudentToIsland](Action::MoveStudentToIsland) and
//! [MoveStudentToDining](Action::MoveStudentToDining) until the students of the turn moved.
//! * [MoveMotherNature](Action::MoveMotherNature) by up to the steps of the played card.
//! * [SelectCloudTile](Action::SelectCloudTile) to end the turn.
//! * [PlayCharacterCard](Action::PlayCharacterCard) at any point of the turn in an expert
//! match, while no other card is active.
//!
//! ### How do character cards change the rules?
//!
//! A [card](CharacterCard) carries its [effect](CardEffect) and the payload the effect needs.
//! While a card is active, [Game] asks it first whether an action is legal, and the
//! [overrides](Overrides) it yields change how professors are conquered, how influence is
//! counted and how far mother nature moves. Without an active card the [table](Table) applies
//! the printed rules.
//!
//! ## How is the match viewed?
//!
//! [Game::view] returns an immutable [GameView] of everything visible to all players.
//! [Game::get_hand] shares the private hand of each individual player. A controller which
//! wants to be told about changes [subscribes](Game::subscribe) an [Observer].
//!
//! ## How is the match ended?
//!
//! The match ends when a player places their last tower, when three islands are left or after
//! the round during which the bag ran out. [Game::end_condition] tells which happened and
//! [Game::leaders] who won.
//!
//! ## How are game states tested when properties are private?
//!
//! The `test` build configuration adds many required methods for testing. [Table] and [Game]
//! implement methods to get mutable references to their properties and to set properties for
//! common scenarios, and helper functions add random students and professors.

// Document!
#![forbid(
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]
// Don't leave a build in a half finished state!
#![deny(
    warnings,
    future_incompatible,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused,
    single_use_lifetimes,
    unreachable_pub,
    missing_debug_implementations,
    unsafe_code
)]

pub use action::*;
pub use assistant::*;
pub use bag::*;
pub use character::*;
pub use cloud_tile::*;
pub use consts::*;
pub use error::*;
pub use game::*;
pub use island::*;
pub use observer::*;
pub use player::*;
#[cfg(test)]
pub use random::*;
pub use school_board::*;
pub use student::*;
pub use table::*;
pub use tower::*;
pub use types::*;

mod action;
mod assistant;
mod bag;
mod character;
mod cloud_tile;
mod consts;
mod error;
mod game;
mod island;
mod observer;
mod player;
#[cfg(test)]
mod random;
mod school_board;
mod student;
mod table;
mod tower;
mod types;
