use crate::PlayerId;

/// The error type for seating a computer player and dealing it cards.
#[derive(Debug, PartialEq, Eq)]
pub enum PlayerError {
    PlayerLimitExceeded,
    AlreadySeated { player_id: PlayerId },
    NoSuspectAvailable,
    InvalidHandSize { count: usize },
    UnrecognizedCard { name: String },
    UnknownSeat { player_id: PlayerId },
}

impl std::error::Error for PlayerError {}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::PlayerLimitExceeded => write!(
                f,
                "No more than {} computer players are allowed",
                crate::MAX_COMPUTER_PLAYERS
            ),
            PlayerError::AlreadySeated { player_id } => {
                write!(f, "Player {} already has a seat", player_id)
            }
            PlayerError::NoSuspectAvailable => {
                write!(f, "Every available suspect has already been claimed")
            }
            PlayerError::InvalidHandSize { count } => write!(
                f,
                "The number of distinct cards dealt must be between {} and {}, but was {}",
                crate::MIN_HAND_SIZE,
                crate::MAX_HAND_SIZE,
                count
            ),
            PlayerError::UnrecognizedCard { name } => write!(f, "The card {} is not valid", name),
            PlayerError::UnknownSeat { player_id } => {
                write!(f, "There is no computer player seated as {}", player_id)
            }
        }
    }
}
