use crate::{Card, Location, ALL_CARDS};

static LOCATIONS: [Location; 21] = [
    Location::Study,
    Location::Hall,
    Location::Lounge,
    Location::Library,
    Location::Billiard,
    Location::Dining,
    Location::Conservatory,
    Location::Ballroom,
    Location::Kitchen,
    Location::Hallway01,
    Location::Hallway02,
    Location::Hallway03,
    Location::Hallway04,
    Location::Hallway05,
    Location::Hallway06,
    Location::Hallway07,
    Location::Hallway08,
    Location::Hallway09,
    Location::Hallway10,
    Location::Hallway11,
    Location::Hallway12,
];

impl quickcheck::Arbitrary for Card {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&ALL_CARDS).unwrap()
    }
}

impl quickcheck::Arbitrary for Location {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&LOCATIONS).unwrap()
    }
}
