mod host;
pub use host::*;

use clueless::{GameState, PlayerError, Positions, TurnResponse, UpdateResponse};

/// A trait to simplify writing computer players.
///
/// One value of the implementing type plays one seat. Seating is done by the
/// [`Host`], which hands out new players through a constructor closure.
pub trait Bot {
    /// Take the dealt hand. Nothing may be recorded if the hand is rejected.
    fn receive_cards(&mut self, cards: &[String]) -> Result<(), PlayerError>;

    fn take_turn(&mut self, positions: &Positions) -> TurnResponse;

    fn update(&mut self, game_state: &GameState) -> UpdateResponse;
}
