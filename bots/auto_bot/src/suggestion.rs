use clueless::{Card, CardsSet, Pad, PlayerId, PlayerTable, Room, SUSPECTS, WEAPONS};

use crate::deduction;

/// Decides what to suggest after moving into a room.
///
/// Closures of the matching signature are strategies too.
pub trait SuggestionStrategy {
    /// Returns one suspect, one weapon and `room`, or `None` to not suggest.
    fn suggest(&mut self, room: Room, pad: &Pad, me: &PlayerId) -> Option<[Card; 3]>;
}

impl<F> SuggestionStrategy for F
where
    F: FnMut(Room, &Pad, &PlayerId) -> Option<[Card; 3]>,
{
    fn suggest(&mut self, room: Room, pad: &Pad, me: &PlayerId) -> Option<[Card; 3]> {
        self(room, pad, me)
    }
}

/// Asks about the first suspect and weapon nobody is known to hold.
///
/// When every card of a category is accounted for, one of our own cards of
/// that category is named instead, which tells the others nothing new.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreferUnknown;

impl SuggestionStrategy for PreferUnknown {
    fn suggest(&mut self, room: Room, pad: &Pad, me: &PlayerId) -> Option<[Card; 3]> {
        let unknown = deduction::unknown_cards(pad);
        let own = pad.table(me).map(PlayerTable::confirmed).unwrap_or_default();
        let suspect = pick(&SUSPECTS.map(Card::from), unknown, own);
        let weapon = pick(&WEAPONS.map(Card::from), unknown, own);
        Some([suspect, weapon, room.into()])
    }
}

fn pick(category: &[Card], unknown: CardsSet, own: CardsSet) -> Card {
    category
        .iter()
        .copied()
        .find(|&card| unknown.contains(card))
        .or_else(|| category.iter().copied().find(|&card| own.contains(card)))
        .unwrap_or(category[0])
}
