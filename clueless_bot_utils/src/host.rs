use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use clueless::{
    ErrorResponse, Joined, Okay, PlayerError, PlayerId, Request, Roster, Suspect, TurnResponse,
    UpdateResponse,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Bot;

/// A response to a single [`Request`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Joined(Joined),
    Okay(Okay),
    Turn(TurnResponse),
    Update(UpdateResponse),
    Error(ErrorResponse),
}

impl From<PlayerError> for Reply {
    fn from(err: PlayerError) -> Self {
        Reply::Error(ErrorResponse {
            error: err.to_string(),
        })
    }
}

/// Hosts the computer players of one game and routes requests to their seats.
pub struct Host<B, F>
where
    B: Bot,
    F: FnMut(&mut Roster, PlayerId, &[Suspect], usize) -> Result<(B, Joined), PlayerError>,
{
    roster: Roster,
    seats: BTreeMap<PlayerId, B>,
    join: F,
}

impl<B, F> Host<B, F>
where
    B: Bot,
    F: FnMut(&mut Roster, PlayerId, &[Suspect], usize) -> Result<(B, Joined), PlayerError>,
{
    /// `join` seats a new player. It is given the roster so that it can
    /// enforce the seat limit and avoid suspects other seats already claimed.
    pub fn new(join: F) -> Self {
        Self {
            roster: Roster::new(),
            seats: BTreeMap::new(),
            join,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Handles one request. Returns `None` when the host should shut down.
    pub fn handle(&mut self, req: Request) -> Option<Reply> {
        let reply = match req {
            Request::Join {
                player_id,
                available_suspects,
                total_players,
            } => match (self.join)(
                &mut self.roster,
                player_id.clone(),
                &available_suspects,
                total_players,
            ) {
                Ok((bot, joined)) => {
                    info!(player = %player_id, suspect = %joined.suspect, "Seated computer player");
                    self.seats.insert(player_id, bot);
                    Reply::Joined(joined)
                }
                Err(err) => {
                    warn!(player = %player_id, "Could not seat computer player: {}", err);
                    err.into()
                }
            },
            Request::DealCards { player_id, cards } => {
                match self.seat(&player_id).and_then(|bot| bot.receive_cards(&cards)) {
                    Ok(()) => Reply::Okay(Okay()),
                    Err(err) => {
                        warn!(player = %player_id, "Rejected dealt cards: {}", err);
                        err.into()
                    }
                }
            }
            Request::TakeTurn {
                player_id,
                positions,
            } => match self.seat(&player_id) {
                Ok(bot) => Reply::Turn(bot.take_turn(&positions)),
                Err(err) => err.into(),
            },
            Request::Update {
                player_id,
                game_state,
            } => match self.seat(&player_id) {
                Ok(bot) => Reply::Update(bot.update(&game_state)),
                Err(err) => err.into(),
            },
            Request::Bye => return None,
        };
        Some(reply)
    }

    fn seat(&mut self, player_id: &PlayerId) -> Result<&mut B, PlayerError> {
        self.seats
            .get_mut(player_id)
            .ok_or_else(|| PlayerError::UnknownSeat {
                player_id: player_id.clone(),
            })
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        self.serve(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// Answers each line of `input` with one line of `output`, until EOF or
    /// [`Request::Bye`].
    ///
    /// A line that isn't a valid request is answered with an error and
    /// otherwise skipped. Only I/O errors end the loop early.
    pub fn serve(&mut self, mut input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the server has exited.
                break Ok(());
            }
            let line = buf.trim_end();
            if line.is_empty() {
                continue;
            }
            debug!(request = line, "Received request");

            let reply = match serde_json::from_str::<Request>(line) {
                Ok(req) => match self.handle(req) {
                    Some(reply) => reply,
                    None => break Ok(()),
                },
                Err(err) => {
                    warn!(request = line, "Ignoring malformed request: {}", err);
                    Reply::Error(ErrorResponse {
                        error: format!("Malformed request: {}", err),
                    })
                }
            };
            serde_json::to_writer(&mut output, &reply)?;
            writeln!(output)?;
            output.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use clueless::{
        GameState, Location, Positions, SuggestionAnswer, MAX_COMPUTER_PLAYERS, SUSPECTS,
    };
    use serde_json::{json, Value};

    use super::*;

    /// Stands still, never holds a card, and remembers how many cards it got.
    struct IdleBot {
        dealt: usize,
    }

    impl Bot for IdleBot {
        fn receive_cards(&mut self, cards: &[String]) -> Result<(), PlayerError> {
            if cards.is_empty() {
                return Err(PlayerError::InvalidHandSize { count: 0 });
            }
            self.dealt = cards.len();
            Ok(())
        }

        fn take_turn(&mut self, _positions: &Positions) -> TurnResponse {
            TurnResponse {
                destination: None,
                suggestion: None,
            }
        }

        fn update(&mut self, _game_state: &GameState) -> UpdateResponse {
            UpdateResponse::Answer(SuggestionAnswer::NoMatch)
        }
    }

    fn idle_host() -> Host<
        IdleBot,
        impl FnMut(&mut Roster, PlayerId, &[Suspect], usize) -> Result<(IdleBot, Joined), PlayerError>,
    > {
        Host::new(|roster: &mut Roster, player_id: PlayerId, available: &[Suspect], _total: usize| {
            roster.ensure_vacancy()?;
            let suspect = *available
                .iter()
                .find(|&&s| !roster.is_claimed(s))
                .ok_or(PlayerError::NoSuspectAvailable)?;
            roster.register(player_id, suspect)?;
            Ok((
                IdleBot { dealt: 0 },
                Joined {
                    suspect,
                    location: Location::Hallway01,
                },
            ))
        })
    }

    fn join(player_id: PlayerId) -> Request {
        Request::Join {
            player_id,
            available_suspects: SUSPECTS.to_vec(),
            total_players: 6,
        }
    }

    #[test]
    fn seats_are_limited() {
        let mut host = idle_host();
        for n in 1..=MAX_COMPUTER_PLAYERS {
            assert!(matches!(
                host.handle(join(PlayerId::nth(n))),
                Some(Reply::Joined(_))
            ));
        }
        let reply = host.handle(join(PlayerId::nth(6))).unwrap();
        assert_eq!(reply, Reply::from(PlayerError::PlayerLimitExceeded));
        assert_eq!(host.roster().len(), MAX_COMPUTER_PLAYERS);
    }

    #[test]
    fn requests_are_routed_to_their_seat() {
        let mut host = idle_host();
        host.handle(join(PlayerId::nth(1)));
        let reply = host.handle(Request::DealCards {
            player_id: PlayerId::nth(1),
            cards: vec![String::from("Rope"); 3],
        });
        assert!(matches!(reply, Some(Reply::Okay(_))));
        assert_eq!(host.seats[&PlayerId::nth(1)].dealt, 3);

        let reply = host.handle(Request::DealCards {
            player_id: PlayerId::nth(1),
            cards: vec![],
        });
        assert_eq!(
            reply,
            Some(Reply::from(PlayerError::InvalidHandSize { count: 0 }))
        );
    }

    #[test]
    fn unknown_seat_is_reported() {
        let mut host = idle_host();
        let reply = host.handle(Request::Update {
            player_id: PlayerId::nth(4),
            game_state: GameState::default(),
        });
        assert_eq!(
            reply,
            Some(Reply::from(PlayerError::UnknownSeat {
                player_id: PlayerId::nth(4)
            }))
        );
    }

    #[test]
    fn bye_stops_the_host() {
        let mut host = idle_host();
        assert!(host.handle(Request::Bye).is_none());
    }

    #[test]
    fn replies_serialize_like_their_payload() {
        let reply = Reply::Turn(TurnResponse {
            destination: Some(Location::Kitchen),
            suggestion: None,
        });
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"move":"Kitchen"}"#
        );
        let reply = Reply::from(PlayerError::NoSuspectAvailable);
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"error":"Every available suspect has already been claimed"}"#
        );
    }

    #[test]
    fn malformed_lines_are_answered_with_an_error() {
        let mut host = idle_host();
        let input = [
            r#"{"type": "Join", "player_id": "p01", "available_suspects": ["Plum"], "total_players": 3}"#,
            // An unknown card name
            r#"{"type": "Update", "player_id": "p01", "game_state": {"answer": {"from_player": "p02", "has_card": true}, "cards": ["Plum", "Lead Pipe", "Hall"]}}"#,
            // A suggestion for someone else, with a card missing
            r#"{"type": "Update", "player_id": "p01", "game_state": {"suggestion": {"to_player": "p03", "cards": ["Plum", "Rope"]}}}"#,
            "",
            r#"{"type": "DealCards", "player_id": "p01", "cards": ["Rope", "Hall", "Plum"]}"#,
            r#"{"type": "Bye"}"#,
            r#"{"type": "DealCards", "player_id": "p01", "cards": ["Knife"]}"#,
        ]
        .join("\n");

        let mut output = Vec::new();
        host.serve(input.as_bytes(), &mut output).unwrap();

        let replies: Vec<Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(replies.len(), 4);
        assert_eq!(replies[0], json!({"suspect": "Plum", "location": "Hallway_01"}));
        for reply in &replies[1..3] {
            assert!(reply["error"]
                .as_str()
                .unwrap()
                .starts_with("Malformed request"));
        }
        assert_eq!(replies[3], json!([]));
        assert_eq!(host.seats[&PlayerId::nth(1)].dealt, 3);
    }
}
