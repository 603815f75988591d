use crate::{PlayerError, PlayerId, Suspect};

/// The most computer players one game can seat.
pub const MAX_COMPUTER_PLAYERS: usize = 5;
pub const MIN_HAND_SIZE: usize = 3;
pub const MAX_HAND_SIZE: usize = 6;

/// The computer-controlled seats of one game.
///
/// Whoever hosts the computer players owns the roster, so the seat limit
/// applies per game and not per process.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    seats: Vec<(PlayerId, Suspect)>,
}

impl Roster {
    pub fn new() -> Self {
        Self { seats: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn ensure_vacancy(&self) -> Result<(), PlayerError> {
        if self.seats.len() >= MAX_COMPUTER_PLAYERS {
            Err(PlayerError::PlayerLimitExceeded)
        } else {
            Ok(())
        }
    }

    pub fn is_seated(&self, player_id: &PlayerId) -> bool {
        self.seats.iter().any(|(id, _)| id == player_id)
    }

    /// Whether a computer player already picked this suspect.
    pub fn is_claimed(&self, suspect: Suspect) -> bool {
        self.seats.iter().any(|&(_, claimed)| claimed == suspect)
    }

    pub fn register(&mut self, player_id: PlayerId, suspect: Suspect) -> Result<(), PlayerError> {
        self.ensure_vacancy()?;
        if self.is_seated(&player_id) {
            return Err(PlayerError::AlreadySeated { player_id });
        }
        self.seats.push((player_id, suspect));
        Ok(())
    }
}
