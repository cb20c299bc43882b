use crate::{Game, FINAL_ISLANDS_LEN};
use itertools::Itertools;
use std::cmp::Reverse;

/// Why a match is over.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EndCondition {
    /// A player placed their last tower.
    NoTowersLeft {
        /// The index of the player.
        player: usize,
    },
    /// Merging left [FINAL_ISLANDS_LEN] islands or fewer.
    ThreeIslandsLeft,
    /// The round announced by [LastRound](crate::LastRound) was played.
    LastRoundPlayed,
}

impl Game {
    /// # Returns
    ///
    /// Why the match is over or [None] while it goes on. A player without towers takes
    /// precedence over the island count, which takes precedence over the last round.
    pub fn end_condition(&self) -> Option<EndCondition> {
        let table = self.table();
        if !table.is_set_up() {
            return None;
        }
        if let Some(player) = table
            .players()
            .iter()
            .position(|player| player.board().towers_len() == 0)
        {
            return Some(EndCondition::NoTowersLeft { player });
        }
        if table.islands().len() <= FINAL_ISLANDS_LEN {
            return Some(EndCondition::ThreeIslandsLeft);
        }
        if table.is_last_round_played() {
            return Some(EndCondition::LastRoundPlayed);
        }
        None
    }

    /// # Returns
    ///
    /// The players with the fewest towers left on their school board. Among those, the players
    /// holding the most professors. More than one index means a draw.
    pub fn leaders(&self) -> Vec<usize> {
        self.table()
            .players()
            .iter()
            .enumerate()
            .min_set_by_key(|(_, player)| {
                (
                    player.board().towers_len(),
                    Reverse(player.board().professors().len()),
                )
            })
            .into_iter()
            .map(|(index, _)| index)
            .collect()
    }
}
