use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Room, Suspect};

/// A place a character can stand on: one of the nine rooms or one of the
/// twelve hallway cells between them.
///
/// The rooms form a 3x3 grid:
///
/// ```text
/// Study        -01- Hall     -02- Lounge
///   03                04             05
/// Library      -06- Billiard -07- Dining
///   08                09             10
/// Conservatory -11- Ballroom -12- Kitchen
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Study,
    Hall,
    Lounge,
    Library,
    Billiard,
    Dining,
    Conservatory,
    Ballroom,
    Kitchen,
    #[serde(rename = "Hallway_01")]
    Hallway01,
    #[serde(rename = "Hallway_02")]
    Hallway02,
    #[serde(rename = "Hallway_03")]
    Hallway03,
    #[serde(rename = "Hallway_04")]
    Hallway04,
    #[serde(rename = "Hallway_05")]
    Hallway05,
    #[serde(rename = "Hallway_06")]
    Hallway06,
    #[serde(rename = "Hallway_07")]
    Hallway07,
    #[serde(rename = "Hallway_08")]
    Hallway08,
    #[serde(rename = "Hallway_09")]
    Hallway09,
    #[serde(rename = "Hallway_10")]
    Hallway10,
    #[serde(rename = "Hallway_11")]
    Hallway11,
    #[serde(rename = "Hallway_12")]
    Hallway12,
}

/// Each hallway connects exactly two rooms.
static HALLWAYS: [(Location, Room, Room); 12] = [
    (Location::Hallway01, Room::Study, Room::Hall),
    (Location::Hallway02, Room::Hall, Room::Lounge),
    (Location::Hallway03, Room::Study, Room::Library),
    (Location::Hallway04, Room::Hall, Room::Billiard),
    (Location::Hallway05, Room::Lounge, Room::Dining),
    (Location::Hallway06, Room::Library, Room::Billiard),
    (Location::Hallway07, Room::Billiard, Room::Dining),
    (Location::Hallway08, Room::Library, Room::Conservatory),
    (Location::Hallway09, Room::Billiard, Room::Ballroom),
    (Location::Hallway10, Room::Dining, Room::Kitchen),
    (Location::Hallway11, Room::Conservatory, Room::Ballroom),
    (Location::Hallway12, Room::Ballroom, Room::Kitchen),
];

static SECRET_PASSAGES: [(Room, Room); 2] = [
    (Room::Study, Room::Kitchen),
    (Room::Lounge, Room::Conservatory),
];

impl Location {
    /// The room this location is, if it is not a hallway.
    pub fn room(self) -> Option<Room> {
        match self {
            Location::Study => Some(Room::Study),
            Location::Hall => Some(Room::Hall),
            Location::Lounge => Some(Room::Lounge),
            Location::Library => Some(Room::Library),
            Location::Billiard => Some(Room::Billiard),
            Location::Dining => Some(Room::Dining),
            Location::Conservatory => Some(Room::Conservatory),
            Location::Ballroom => Some(Room::Ballroom),
            Location::Kitchen => Some(Room::Kitchen),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Location::Hallway01 => "Hallway_01",
            Location::Hallway02 => "Hallway_02",
            Location::Hallway03 => "Hallway_03",
            Location::Hallway04 => "Hallway_04",
            Location::Hallway05 => "Hallway_05",
            Location::Hallway06 => "Hallway_06",
            Location::Hallway07 => "Hallway_07",
            Location::Hallway08 => "Hallway_08",
            Location::Hallway09 => "Hallway_09",
            Location::Hallway10 => "Hallway_10",
            Location::Hallway11 => "Hallway_11",
            Location::Hallway12 => "Hallway_12",
            room => room.room().map(Room::name).unwrap_or_default(),
        }
    }
}

impl From<Room> for Location {
    fn from(room: Room) -> Self {
        match room {
            Room::Study => Location::Study,
            Room::Hall => Location::Hall,
            Room::Lounge => Location::Lounge,
            Room::Library => Location::Library,
            Room::Billiard => Location::Billiard,
            Room::Dining => Location::Dining,
            Room::Conservatory => Location::Conservatory,
            Room::Ballroom => Location::Ballroom,
            Room::Kitchen => Location::Kitchen,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The hallway cell a suspect starts the game on.
pub fn starting_location(suspect: Suspect) -> Location {
    match suspect {
        Suspect::Scarlet => Location::Hallway02,
        Suspect::Mustard => Location::Hallway03,
        Suspect::White => Location::Hallway05,
        Suspect::Green => Location::Hallway06,
        Suspect::Peacock => Location::Hallway07,
        Suspect::Plum => Location::Hallway08,
    }
}

/// Answers which locations can be reached from a location.
pub trait Topology {
    /// All locations reachable from `location` in at most `hops` steps,
    /// not including `location` itself.
    ///
    /// Must be deterministic for a given board.
    fn neighborhood(&self, location: Location, hops: usize) -> BTreeSet<Location>;
}

/// The standard Clue-Less board.
#[derive(Clone, Debug)]
pub struct Board {
    adjacency: BTreeMap<Location, BTreeSet<Location>>,
}

impl Board {
    pub fn new() -> Self {
        let mut adjacency: BTreeMap<Location, BTreeSet<Location>> = BTreeMap::new();
        let mut connect = |a: Location, b: Location| {
            adjacency.entry(a).or_default().insert(b);
            adjacency.entry(b).or_default().insert(a);
        };
        for &(hallway, room_a, room_b) in &HALLWAYS {
            connect(hallway, room_a.into());
            connect(hallway, room_b.into());
        }
        for &(room_a, room_b) in &SECRET_PASSAGES {
            connect(room_a.into(), room_b.into());
        }
        Self { adjacency }
    }

    /// All locations on the board.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology for Board {
    fn neighborhood(&self, location: Location, hops: usize) -> BTreeSet<Location> {
        let mut reached = BTreeSet::new();
        let mut frontier = vec![location];
        for _ in 0..hops {
            let mut next_frontier = Vec::new();
            for loc in frontier {
                for &neighbor in self.adjacency.get(&loc).into_iter().flatten() {
                    if neighbor != location && reached.insert(neighbor) {
                        next_frontier.push(neighbor);
                    }
                }
            }
            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
        }
        reached
    }
}
