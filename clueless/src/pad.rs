use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Card, CardsSet, CARD_COUNT};

/// The identity the server assigns to a seat, e.g. `"p01"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: &str) -> Self {
        Self(String::from(id))
    }

    /// The identity of the `n`-th seat, counting from one: `p01`, `p02`, ...
    pub fn nth(n: usize) -> Self {
        Self(format!("p{:0>2}", n))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What one automaton has written down about one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerTable {
    /// Column 1: cards this player is known to hold.
    confirmed: CardsSet,
    /// Column 2: per card, the rounds in which this player said
    /// "I hold one of these three" without showing which.
    rounds: [BTreeSet<u32>; CARD_COUNT],
}

impl PlayerTable {
    pub fn new() -> Self {
        Self {
            confirmed: CardsSet::new(),
            rounds: std::array::from_fn(|_| BTreeSet::new()),
        }
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.confirmed.contains(card)
    }

    pub fn confirmed(&self) -> CardsSet {
        self.confirmed
    }

    pub fn mark_has_card(&mut self, card: Card) {
        self.confirmed = self.confirmed.insert(card);
    }

    pub fn rounds(&self, card: Card) -> &BTreeSet<u32> {
        &self.rounds[card.to_index()]
    }

    pub fn add_round(&mut self, card: Card, round: u32) {
        self.rounds[card.to_index()].insert(round);
    }

    pub fn clear_rounds(&mut self, card: Card) {
        self.rounds[card.to_index()].clear();
    }
}

impl Default for PlayerTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The tracking pad: one [`PlayerTable`] per observed player, the owner included.
#[derive(Clone, Debug, Default)]
pub struct Pad {
    tables: BTreeMap<PlayerId, PlayerTable>,
}

impl Pad {
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            tables: players
                .into_iter()
                .map(|id| (id, PlayerTable::new()))
                .collect(),
        }
    }

    /// A pad with empty tables for the seats `p01` up to `total_players`.
    pub fn for_players(total_players: usize) -> Self {
        Self::new((1..=total_players).map(PlayerId::nth))
    }

    /// The tracked players, in order of their identity.
    pub fn players(&self) -> impl Iterator<Item = &PlayerId> {
        self.tables.keys()
    }

    pub fn table(&self, player: &PlayerId) -> Option<&PlayerTable> {
        self.tables.get(player)
    }

    /// The table for `player`, which is created empty if it isn't tracked yet.
    pub fn table_mut(&mut self, player: &PlayerId) -> &mut PlayerTable {
        self.tables.entry(player.clone()).or_default()
    }

    pub fn tables(&self) -> impl Iterator<Item = (&PlayerId, &PlayerTable)> {
        self.tables.iter()
    }

    pub fn tables_mut(&mut self) -> impl Iterator<Item = (&PlayerId, &mut PlayerTable)> {
        self.tables.iter_mut()
    }

    /// Cards for which some tracked player has Column 1 set.
    pub fn confirmed_anywhere(&self) -> CardsSet {
        self.tables
            .values()
            .fold(CardsSet::new(), |acc, table| acc | table.confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card;

    #[test]
    fn seats_are_zero_padded() {
        let pad = Pad::for_players(3);
        let ids: Vec<String> = pad.players().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["p01", "p02", "p03"]);
        assert_eq!(PlayerId::nth(12).0, "p12");
    }

    #[test]
    fn unknown_player_gets_a_fresh_table() {
        let mut pad = Pad::for_players(2);
        let stranger = PlayerId::new("p07");
        assert!(pad.table(&stranger).is_none());
        pad.table_mut(&stranger).mark_has_card(card!("Knife"));
        assert!(pad.table(&stranger).unwrap().has_card(card!("Knife")));
        assert_eq!(pad.players().count(), 3);
    }

    #[test]
    fn columns_are_independent() {
        let mut table = PlayerTable::new();
        table.add_round(card!("Hall"), 1);
        table.add_round(card!("Hall"), 2);
        assert!(!table.has_card(card!("Hall")));
        assert_eq!(table.rounds(card!("Hall")), &BTreeSet::from([1, 2]));
        table.mark_has_card(card!("Hall"));
        table.clear_rounds(card!("Hall"));
        assert!(table.has_card(card!("Hall")));
        assert!(table.rounds(card!("Hall")).is_empty());
    }

    #[test]
    fn confirmed_anywhere_is_a_union() {
        let mut pad = Pad::for_players(2);
        pad.table_mut(&PlayerId::nth(1)).mark_has_card(card!("Rope"));
        pad.table_mut(&PlayerId::nth(2)).mark_has_card(card!("Study"));
        assert_eq!(
            pad.confirmed_anywhere(),
            CardsSet::from_iter([card!("Rope"), card!("Study")])
        );
    }
}
