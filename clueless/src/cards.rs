use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of cards in the deck: six suspects, six weapons and nine rooms.
pub const CARD_COUNT: usize = 21;

/// A card in the Clue-Less deck.
///
/// Serialized as its bare name, e.g. `"Mustard"`, `"Rope"` or `"Study"`.
/// The derived ordering is the deck order: suspects, then weapons, then rooms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Card {
    Suspect(Suspect),
    Weapon(Weapon),
    Room(Room),
}

/// One of the six playable characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suspect {
    Mustard,
    Scarlet,
    White,
    Plum,
    Green,
    Peacock,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weapon {
    Knife,
    Wrench,
    Revolver,
    Pipe,
    Rope,
    Candlestick,
}

/// The rooms double as [locations](crate::Location) on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Room {
    Study,
    Hall,
    Lounge,
    Library,
    Billiard,
    Dining,
    Conservatory,
    Ballroom,
    Kitchen,
}

pub static SUSPECTS: [Suspect; 6] = [
    Suspect::Mustard,
    Suspect::Scarlet,
    Suspect::White,
    Suspect::Plum,
    Suspect::Green,
    Suspect::Peacock,
];

pub static WEAPONS: [Weapon; 6] = [
    Weapon::Knife,
    Weapon::Wrench,
    Weapon::Revolver,
    Weapon::Pipe,
    Weapon::Rope,
    Weapon::Candlestick,
];

pub static ROOMS: [Room; 9] = [
    Room::Study,
    Room::Hall,
    Room::Lounge,
    Room::Library,
    Room::Billiard,
    Room::Dining,
    Room::Conservatory,
    Room::Ballroom,
    Room::Kitchen,
];

/// The whole deck, in the order of [`Card::to_index`].
pub static ALL_CARDS: [Card; CARD_COUNT] = [
    Card::Suspect(Suspect::Mustard),
    Card::Suspect(Suspect::Scarlet),
    Card::Suspect(Suspect::White),
    Card::Suspect(Suspect::Plum),
    Card::Suspect(Suspect::Green),
    Card::Suspect(Suspect::Peacock),
    Card::Weapon(Weapon::Knife),
    Card::Weapon(Weapon::Wrench),
    Card::Weapon(Weapon::Revolver),
    Card::Weapon(Weapon::Pipe),
    Card::Weapon(Weapon::Rope),
    Card::Weapon(Weapon::Candlestick),
    Card::Room(Room::Study),
    Card::Room(Room::Hall),
    Card::Room(Room::Lounge),
    Card::Room(Room::Library),
    Card::Room(Room::Billiard),
    Card::Room(Room::Dining),
    Card::Room(Room::Conservatory),
    Card::Room(Room::Ballroom),
    Card::Room(Room::Kitchen),
];

impl Suspect {
    pub fn name(self) -> &'static str {
        match self {
            Suspect::Mustard => "Mustard",
            Suspect::Scarlet => "Scarlet",
            Suspect::White => "White",
            Suspect::Plum => "Plum",
            Suspect::Green => "Green",
            Suspect::Peacock => "Peacock",
        }
    }
}

impl Weapon {
    pub fn name(self) -> &'static str {
        match self {
            Weapon::Knife => "Knife",
            Weapon::Wrench => "Wrench",
            Weapon::Revolver => "Revolver",
            Weapon::Pipe => "Pipe",
            Weapon::Rope => "Rope",
            Weapon::Candlestick => "Candlestick",
        }
    }
}

impl Room {
    pub fn name(self) -> &'static str {
        match self {
            Room::Study => "Study",
            Room::Hall => "Hall",
            Room::Lounge => "Lounge",
            Room::Library => "Library",
            Room::Billiard => "Billiard",
            Room::Dining => "Dining",
            Room::Conservatory => "Conservatory",
            Room::Ballroom => "Ballroom",
            Room::Kitchen => "Kitchen",
        }
    }
}

impl Card {
    pub fn name(self) -> &'static str {
        match self {
            Card::Suspect(suspect) => suspect.name(),
            Card::Weapon(weapon) => weapon.name(),
            Card::Room(room) => room.name(),
        }
    }

    /// Position of this card in [`ALL_CARDS`].
    pub fn to_index(self) -> usize {
        match self {
            Card::Suspect(suspect) => suspect as usize,
            Card::Weapon(weapon) => SUSPECTS.len() + weapon as usize,
            Card::Room(room) => SUSPECTS.len() + WEAPONS.len() + room as usize,
        }
    }

    pub fn from_index(idx: usize) -> Option<Card> {
        ALL_CARDS.get(idx).copied()
    }
}

impl From<Suspect> for Card {
    fn from(suspect: Suspect) -> Self {
        Card::Suspect(suspect)
    }
}

impl From<Weapon> for Card {
    fn from(weapon: Weapon) -> Self {
        Card::Weapon(weapon)
    }
}

impl From<Room> for Card {
    fn from(room: Room) -> Self {
        Card::Room(room)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::fmt::Display for Suspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`Card`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFromStrErr {
    pub name: String,
}

impl std::error::Error for CardFromStrErr {}

impl std::fmt::Display for CardFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a card in this game", self.name)
    }
}

impl FromStr for Card {
    type Err = CardFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CARDS
            .iter()
            .find(|card| card.name() == s)
            .copied()
            .ok_or_else(|| CardFromStrErr {
                name: String::from(s),
            })
    }
}

/// Shorthand for creating cards from their name.
///
/// This macro is just calling the [`FromStr`] instance of [`Card`].
/// ```
/// # use clueless::{card, Card, Weapon};
/// assert_eq!(card!("Rope"), Card::Weapon(Weapon::Rope));
/// ```
#[macro_export]
macro_rules! card {
    ($name:literal) => {
        <$crate::Card as std::str::FromStr>::from_str($name)
            .expect("Invalid card name given to card! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use card;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_deck_order() {
        for (idx, card) in ALL_CARDS.iter().enumerate() {
            assert_eq!(card.to_index(), idx);
            assert_eq!(Card::from_index(idx), Some(*card));
        }
        assert_eq!(Card::from_index(CARD_COUNT), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!(card!("Plum"), Card::Suspect(Suspect::Plum));
        assert_eq!(card!("Kitchen"), Card::Room(Room::Kitchen));
        assert!("Lead Pipe".parse::<Card>().is_err());
        assert!("rope".parse::<Card>().is_err());
    }

    #[test]
    fn serialized_as_bare_name() {
        let json = serde_json::to_string(&card!("Candlestick")).unwrap();
        assert_eq!(json, "\"Candlestick\"");
        let card: Card = serde_json::from_str("\"Ballroom\"").unwrap();
        assert_eq!(card, Card::Room(Room::Ballroom));
        assert!(serde_json::from_str::<Card>("\"Attic\"").is_err());
    }
}
