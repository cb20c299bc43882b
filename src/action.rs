/// Describes an action a player can attempt during their turn.
///
/// The base actions form a fixed order per turn:
/// [PlayAssistantCard](Action::PlayAssistantCard), any number of
/// [MoveStudentToIsland](Action::MoveStudentToIsland) and
/// [MoveStudentToDining](Action::MoveStudentToDining),
/// [MoveMotherNature](Action::MoveMotherNature) and finally
/// [SelectCloudTile](Action::SelectCloudTile).
/// [PlayCharacterCard](Action::PlayCharacterCard) may be interleaved anywhere while no character
/// card is active. The remaining actions are only claimed by an active character card.
///
/// # See Also
///
/// * [Table::is_valid_action](crate::Table::is_valid_action)
/// * [Game::is_valid_action](crate::Game::is_valid_action)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Play the selected assistant card.
    PlayAssistantCard,
    /// Move the selected entrance student onto the selected island.
    MoveStudentToIsland,
    /// Move the selected entrance student into the dining room.
    MoveStudentToDining,
    /// Move mother nature clockwise.
    MoveMotherNature,
    /// Take every student from the selected cloud tile.
    SelectCloudTile,
    /// Pay for and activate the selected character card.
    PlayCharacterCard,
    /// Move a student held by a [Monk](crate::CharacterKind::Monk) onto the selected island.
    MoveStudentFromCardToIsland,
    /// Resolve the selected island with a [Herald](crate::CharacterKind::Herald).
    SelectIsland,
    /// Put a no entry tile of [GrandmaHerbs](crate::CharacterKind::GrandmaHerbs) onto the
    /// selected island.
    MoveNoEntryToIsland,
    /// Swap a student held by a [Joker](crate::CharacterKind::Joker) with an entrance student.
    SwapStudentCardToEntrance,
    /// Choose the color for a [MushroomMan](crate::CharacterKind::MushroomMan) or a
    /// [Thief](crate::CharacterKind::Thief).
    SelectColor,
    /// Swap an entrance student with a dining room student with a
    /// [Minstrel](crate::CharacterKind::Minstrel).
    SwapStudentEntranceToDining,
    /// Move a student held by a [Princess](crate::CharacterKind::Princess) into the dining room.
    MoveStudentFromCardToDining,
}

impl Action {
    /// Whether the action belongs to the base turn order rather than to a character card.
    #[inline]
    pub fn is_base(self) -> bool {
        matches!(
            self,
            Action::PlayAssistantCard
                | Action::MoveStudentToIsland
                | Action::MoveStudentToDining
                | Action::MoveMotherNature
                | Action::SelectCloudTile
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_actions_are_not_base() {
        assert!(!Action::PlayCharacterCard.is_base());
        assert!(!Action::SelectColor.is_base());
        assert!(Action::MoveMotherNature.is_base());
    }
}
