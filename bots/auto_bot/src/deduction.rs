//! Rules for writing answers into the [`Pad`] and reading the solution off it.

use std::collections::BTreeSet;

use clueless::{Card, CardsSet, Pad, PlayerId, ALL_CARDS};
use tracing::{debug, warn};

/// Records that `responder` holds at least one of `cards` without knowing which.
///
/// All three cards get the same new round token in the responder's table, so
/// that later answers can be correlated with this one. The token is one more
/// than the number of distinct tokens already on the three cards.
pub fn record_vague_answer(pad: &mut Pad, responder: &PlayerId, cards: [Card; 3]) -> u32 {
    let table = pad.table_mut(responder);
    let seen: BTreeSet<u32> = cards
        .iter()
        .flat_map(|&card| table.rounds(card).iter().copied())
        .collect();
    let round = seen.len() as u32 + 1;
    for card in cards {
        table.add_round(card, round);
    }
    debug!(player = %responder, round, ?cards, "Holds one of the suggested cards");
    round
}

/// Records that `responder` showed `card`.
///
/// Once the holder of a card is known, the vague answers involving it say
/// nothing more about it, so its round tokens are cleared in every table.
pub fn record_reveal(pad: &mut Pad, responder: &PlayerId, card: Card) {
    if let Some((holder, _)) = pad
        .tables()
        .find(|&(id, table)| id != responder && table.has_card(card))
    {
        warn!(
            player = %responder,
            %holder,
            %card,
            "Shown card is already held by another player"
        );
    }
    pad.table_mut(responder).mark_has_card(card);
    for (_, table) in pad.tables_mut() {
        table.clear_rounds(card);
    }
    debug!(player = %responder, %card, "Holds card");
}

/// Cards that no tracked player is known to hold.
pub fn unknown_cards(pad: &Pad) -> CardsSet {
    ALL_CARDS
        .iter()
        .copied()
        .filter(|&card| pad.tables().all(|(_, table)| !table.has_card(card)))
        .collect()
}

/// The solution, once exactly three cards are left unaccounted for.
///
/// By the composition of the deck these are one suspect, one weapon and one room.
pub fn accusation(pad: &Pad) -> Option<[Card; 3]> {
    let unknown = unknown_cards(pad);
    if unknown.len() != 3 {
        return None;
    }
    let mut cards = unknown.into_iter();
    Some([cards.next()?, cards.next()?, cards.next()?])
}
