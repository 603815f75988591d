use clueless::{Board, Location};
use quickcheck::Arbitrary;

/// A position to move from, plus where everybody else stands and where the
/// mover has already been.
#[derive(Clone, Debug)]
pub struct TurnInput {
    pub me: Location,
    pub others: Vec<Location>,
    pub history: Vec<Location>,
}

impl Arbitrary for TurnInput {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let locations: Vec<Location> = Board::new().locations().collect();
        let pick = |g: &mut quickcheck::Gen, max: u8| -> Vec<Location> {
            (0..u8::arbitrary(g) % max)
                .map(|_| *g.choose(&locations).unwrap())
                .collect()
        };
        // At most five other players, as there are six suspects
        let others = pick(g, 6);
        let history = pick(g, 8);
        let me = *g.choose(&locations).unwrap();
        TurnInput {
            me,
            others,
            history,
        }
    }
}
