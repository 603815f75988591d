use std::collections::BTreeSet;

use clueless::{
    starting_location, Accusation, AnswerMessage, Board, Card, CardsSet, GameState, Joined,
    Location, Pad, PlayerError, PlayerId, Positions, Roster, Suspect, SuggestionAnswer, Topology,
    TurnComplete, TurnResponse, UpdateResponse, FULL_DECK, MAX_HAND_SIZE, MIN_HAND_SIZE,
};
use clueless_bot_utils::Bot;
use rand::rngs::StdRng;
use rand::seq::{IteratorRandom, SliceRandom};
use tracing::{debug, info, trace, warn};

use crate::{deduction, PreferUnknown, SuggestionStrategy};

/// A computer player that deduces the solution from the answers it sees.
pub struct Automaton<T: Topology = Board> {
    player_id: PlayerId,
    suspect: Suspect,
    location: Location,
    /// Every location this player has stood on. Only grows.
    prior_moves: BTreeSet<Location>,
    /// The cards the pad has rows for.
    recognized_cards: CardsSet,
    pad: Pad,
    topology: T,
    rng: StdRng,
    strategy: Box<dyn SuggestionStrategy>,
}

impl Automaton<Board> {
    /// Seats a new computer player on the standard board.
    pub fn new(
        roster: &mut Roster,
        player_id: PlayerId,
        available_suspects: &[Suspect],
        total_players: usize,
        rng: StdRng,
    ) -> Result<Self, PlayerError> {
        Self::with_topology(
            roster,
            player_id,
            available_suspects,
            total_players,
            Board::new(),
            rng,
        )
    }
}

impl<T: Topology> Automaton<T> {
    /// Seats a new computer player.
    ///
    /// Fails if the roster is full, or if every suspect in `available_suspects`
    /// was already claimed by another computer player. The roster is only
    /// changed on success.
    pub fn with_topology(
        roster: &mut Roster,
        player_id: PlayerId,
        available_suspects: &[Suspect],
        total_players: usize,
        topology: T,
        mut rng: StdRng,
    ) -> Result<Self, PlayerError> {
        roster.ensure_vacancy()?;
        let unclaimed: Vec<Suspect> = available_suspects
            .iter()
            .copied()
            .filter(|&suspect| !roster.is_claimed(suspect))
            .collect();
        let suspect = *unclaimed
            .choose(&mut rng)
            .ok_or(PlayerError::NoSuspectAvailable)?;
        roster.register(player_id.clone(), suspect)?;

        let location = starting_location(suspect);
        let mut pad = Pad::for_players(total_players);
        // The server's identities need not follow the p01, p02, ... scheme
        pad.table_mut(&player_id);
        debug!(player = %player_id, %suspect, %location, "Created automaton");

        Ok(Self {
            player_id,
            suspect,
            location,
            prior_moves: BTreeSet::from([location]),
            recognized_cards: FULL_DECK,
            pad,
            topology,
            rng,
            strategy: Box::new(PreferUnknown),
        })
    }

    /// Replaces the default [`PreferUnknown`] suggestion strategy.
    pub fn with_strategy(mut self, strategy: impl SuggestionStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn player_id(&self) -> &PlayerId {
        &self.player_id
    }

    pub fn suspect(&self) -> Suspect {
        self.suspect
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn prior_moves(&self) -> &BTreeSet<Location> {
        &self.prior_moves
    }

    pub fn pad(&self) -> &Pad {
        &self.pad
    }

    pub fn joined(&self) -> Joined {
        Joined {
            suspect: self.suspect,
            location: self.location,
        }
    }

    /// Marks the dealt cards as held by this player.
    ///
    /// The whole hand is validated before anything is written to the pad.
    pub fn receive_cards<S: AsRef<str>>(&mut self, dealt: &[S]) -> Result<(), PlayerError> {
        if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&dealt.len()) {
            return Err(PlayerError::InvalidHandSize { count: dealt.len() });
        }
        let hand = dealt
            .iter()
            .map(|name| self.verify_card(name.as_ref()))
            .collect::<Result<CardsSet, PlayerError>>()?;
        // A repeated name doesn't count towards the hand
        if hand.len() as usize != dealt.len() {
            return Err(PlayerError::InvalidHandSize {
                count: hand.len() as usize,
            });
        }

        let table = self.pad.table_mut(&self.player_id);
        for card in hand {
            table.mark_has_card(card);
        }
        info!(player = %self.player_id, hand = ?Vec::from_iter(hand), "Received cards");
        Ok(())
    }

    fn verify_card(&self, name: &str) -> Result<Card, PlayerError> {
        name.parse::<Card>()
            .ok()
            .filter(|&card| self.recognized_cards.contains(card))
            .ok_or_else(|| PlayerError::UnrecognizedCard {
                name: String::from(name),
            })
    }

    /// Reacts to a change in the game.
    ///
    /// A suggestion directed at this player is answered. Otherwise an answer
    /// to a suggestion is written into the pad, after which the player may
    /// accuse. Anything else is ignored.
    pub fn update(&mut self, game_state: &GameState) -> UpdateResponse {
        if let Some(suggestion) = &game_state.suggestion {
            if suggestion.to_player.as_ref() == Some(&self.player_id) {
                return UpdateResponse::Answer(self.answer(&suggestion.cards));
            }
        }
        if let Some(answer) = &game_state.answer {
            return UpdateResponse::TurnComplete(self.record_answer(answer, game_state.cards));
        }
        // TODO: a failed move should make take_turn try the next candidate
        trace!(player = %self.player_id, "Ignoring update");
        UpdateResponse::Ignored
    }

    /// Moves to a neighboring location, and suggests if that is a room.
    pub fn take_turn(&mut self, positions: &Positions) -> TurnResponse {
        let candidates = self.filter_moves(positions);
        let destination = self.choose_move(&candidates);
        let suggestion = destination
            .and_then(Location::room)
            .and_then(|room| self.strategy.suggest(room, &self.pad, &self.player_id));
        if let Some(cards) = suggestion {
            debug!(player = %self.player_id, ?cards, "Suggesting");
        }
        TurnResponse {
            destination,
            suggestion,
        }
    }

    /// Unoccupied neighbors that haven't been visited yet.
    ///
    /// If there are none, one random unoccupied neighbor is returned instead,
    /// and if every neighbor is occupied, nothing.
    fn filter_moves(&mut self, positions: &Positions) -> BTreeSet<Location> {
        match positions.get(&self.player_id) {
            Some(&location) => {
                self.location = location;
                self.prior_moves.insert(location);
            }
            None => warn!(player = %self.player_id, "No position reported, staying at {}", self.location),
        }

        let next_moves = self.topology.neighborhood(self.location, 1);
        let occupied: BTreeSet<Location> = positions.values().copied().collect();
        let unoccupied: BTreeSet<Location> = next_moves.difference(&occupied).copied().collect();
        let mut available: BTreeSet<Location> =
            unoccupied.difference(&self.prior_moves).copied().collect();

        if available.is_empty() {
            if let Some(&pick) = unoccupied.iter().choose(&mut self.rng) {
                available.insert(pick);
            }
        }
        available
    }

    fn choose_move(&mut self, candidates: &BTreeSet<Location>) -> Option<Location> {
        let Some(&destination) = candidates.iter().next() else {
            debug!(player = %self.player_id, location = %self.location, "No move available");
            return None;
        };
        if self.prior_moves.insert(destination) {
            debug!(player = %self.player_id, %destination, "Moving somewhere new");
        } else {
            debug!(player = %self.player_id, %destination, "Moving back");
        }
        Some(destination)
    }

    /// Shows the first of the suggested cards this player holds.
    pub fn answer(&self, suggested: &[Card; 3]) -> SuggestionAnswer {
        let own = self
            .pad
            .table(&self.player_id)
            .map(|table| table.confirmed())
            .unwrap_or_default();
        let answer = suggested
            .iter()
            .copied()
            .find(|&card| own.contains(card))
            .map_or(SuggestionAnswer::NoMatch, SuggestionAnswer::Card);
        debug!(player = %self.player_id, ?answer, "Answering suggestion");
        answer
    }

    fn record_answer(&mut self, answer: &AnswerMessage, cards: Option<[Card; 3]>) -> TurnComplete {
        let responder = &answer.from_player;
        match (answer.card, answer.has_card) {
            (Some(card), _) => deduction::record_reveal(&mut self.pad, responder, card),
            (None, Some(true)) => match cards {
                Some(cards) => {
                    deduction::record_vague_answer(&mut self.pad, responder, cards);
                }
                None => warn!(player = %responder, "Answer without the suggested cards"),
            },
            (None, Some(false)) => {
                debug!(player = %responder, "Holds none of the suggested cards");
            }
            (None, None) => trace!(player = %responder, "Answer without information"),
        }

        let accusation = deduction::accusation(&self.pad).map(|cards| Accusation {
            from_player: self.player_id.clone(),
            cards,
        });
        if let Some(accusation) = &accusation {
            info!(player = %self.player_id, cards = ?accusation.cards, "Accusing");
        }
        TurnComplete::new(accusation)
    }
}

impl<T: Topology> Bot for Automaton<T> {
    fn receive_cards(&mut self, cards: &[String]) -> Result<(), PlayerError> {
        Automaton::receive_cards(self, cards)
    }

    fn take_turn(&mut self, positions: &Positions) -> TurnResponse {
        Automaton::take_turn(self, positions)
    }

    fn update(&mut self, game_state: &GameState) -> UpdateResponse {
        Automaton::update(self, game_state)
    }
}
