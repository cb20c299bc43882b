use crate::{CharacterCard, SchoolBoard};
use futures::channel::mpsc::UnboundedSender;

/// A change pushed to every [observer](Observer) after a mutation of the
/// [game](crate::Game).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Notification {
    /// The school board of a player changed.
    SchoolBoard {
        /// The index of the player owning the board.
        player: usize,
        /// A copy of the board after the change.
        board: SchoolBoard,
    },
    /// The payload of a character card changed.
    CharacterCard {
        /// The index of the drafted card.
        character: usize,
        /// A copy of the card after the change.
        card: CharacterCard,
    },
}

/// Receives [notifications](Notification) from a [game](crate::Game).
///
/// How notifications travel further is up to the implementor. A closed receiver must not
/// interrupt the game, so `notify` does not return errors.
pub trait Observer {
    /// Called once for every change in the order the changes happened.
    fn notify(&mut self, notification: &Notification);
}

impl Observer for UnboundedSender<Notification> {
    fn notify(&mut self, notification: &Notification) {
        if self.unbounded_send(notification.clone()).is_err() {
            log::debug!("dropping notification for a closed channel");
        }
    }
}
