use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Card, CardFromStrErr, Location, PlayerId, Suspect};

/// Where every character currently stands, keyed by player.
pub type Positions = BTreeMap<PlayerId, Location>;

/// Request from the game server to the computer-player host.
///
/// Every request except [`Bye`](Request::Bye) names the seat it is for.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Seat a new computer player.
    ///
    /// The response should be a [`Joined`].
    Join {
        player_id: PlayerId,
        /// The suspects no human player has taken.
        available_suspects: Vec<Suspect>,
        /// The number of players in the game, humans included.
        total_players: usize,
    },
    /// Deal the player its hand.
    ///
    /// The response should be an [`Okay`]. Card names are validated by the
    /// player, so unknown names are reported instead of failing to parse.
    DealCards {
        player_id: PlayerId,
        cards: Vec<String>,
    },
    /// Ask the player to move.
    ///
    /// The response should be a [`TurnResponse`].
    TakeTurn {
        player_id: PlayerId,
        positions: Positions,
    },
    /// Broadcast a change in the game to the player.
    ///
    /// The response should be an [`UpdateResponse`].
    Update {
        player_id: PlayerId,
        game_state: GameState,
    },
    /// The host should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Okay();

/// The character a newly seated player picked, and where it starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joined {
    pub suspect: Suspect,
    pub location: Location,
}

/// Sent instead of the regular response when a request can't be honored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The move a player makes, plus the suggestion it makes in the room it enters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResponse {
    /// Serialized as `""` when the player stays where it is.
    #[serde(rename = "move", with = "location_or_empty")]
    pub destination: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub suggestion: Option<[Card; 3]>,
}

/// The payload of an [`Update`](Request::Update).
///
/// Exactly one of the shapes is expected: a suggestion directed at one
/// player, or an answer to a suggestion (with the suggested `cards` when the
/// answer doesn't name a card).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub suggestion: Option<SuggestionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub answer: Option<AnswerMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub cards: Option<[Card; 3]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub from_player: Option<PlayerId>,
    /// The player who has to answer. Everyone else only listens.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub to_player: Option<PlayerId>,
    /// One suspect, one weapon, one room.
    pub cards: [Card; 3],
}

/// How a player answered a suggestion.
///
/// The suggesting player is told which card was shown (`card`), everyone
/// else only learns whether a card was shown (`has_card`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerMessage {
    pub from_player: PlayerId,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub has_card: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub card: Option<Card>,
}

/// The response to an [`Update`](Request::Update).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateResponse {
    /// The player was asked about a suggestion.
    Answer(SuggestionAnswer),
    /// The player recorded an answer, and possibly accuses.
    TurnComplete(TurnComplete),
    /// Nothing in the update concerned the player. Serialized as `null`.
    Ignored,
}

/// A card shown in response to a suggestion, or `"no match"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SuggestionAnswer {
    Card(Card),
    NoMatch,
}

pub const NO_MATCH: &str = "no match";

impl From<SuggestionAnswer> for String {
    fn from(answer: SuggestionAnswer) -> String {
        match answer {
            SuggestionAnswer::Card(card) => String::from(card.name()),
            SuggestionAnswer::NoMatch => String::from(NO_MATCH),
        }
    }
}

impl TryFrom<String> for SuggestionAnswer {
    type Error = CardFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == NO_MATCH {
            Ok(SuggestionAnswer::NoMatch)
        } else {
            s.parse().map(SuggestionAnswer::Card)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnComplete {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub accusation: Option<Accusation>,
    pub turn_complete: bool,
}

impl TurnComplete {
    pub fn new(accusation: Option<Accusation>) -> Self {
        Self {
            accusation,
            turn_complete: true,
        }
    }
}

/// The three cards a player claims are in the case file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accusation {
    pub from_player: PlayerId,
    pub cards: [Card; 3],
}

mod location_or_empty {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Location;

    pub fn serialize<S: Serializer>(
        location: &Option<Location>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match location {
            Some(location) => location.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Location>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Field {
            Location(Location),
            Other(String),
        }

        match Field::deserialize(deserializer)? {
            Field::Location(location) => Ok(Some(location)),
            Field::Other(s) if s.is_empty() => Ok(None),
            Field::Other(s) => Err(D::Error::custom(format!("unknown location '{}'", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::card;

    #[test]
    fn parse_directed_suggestion() {
        let state: GameState = serde_json::from_value(json!({
            "suggestion": {"to_player": "p02", "cards": ["Mustard", "Rope", "Study"]}
        }))
        .unwrap();
        let suggestion = state.suggestion.unwrap();
        assert_eq!(suggestion.to_player, Some(PlayerId::new("p02")));
        assert_eq!(
            suggestion.cards,
            [card!("Mustard"), card!("Rope"), card!("Study")]
        );
        assert!(state.answer.is_none());
    }

    #[test]
    fn parse_undirected_answer() {
        let state: GameState = serde_json::from_value(json!({
            "answer": {"from_player": "p02", "has_card": true},
            "cards": ["Plum", "Hall", "Candlestick"]
        }))
        .unwrap();
        let answer = state.answer.unwrap();
        assert_eq!(answer.has_card, Some(true));
        assert_eq!(answer.card, None);
        assert_eq!(
            state.cards,
            Some([card!("Plum"), card!("Hall"), card!("Candlestick")])
        );
    }

    #[test]
    fn parse_requests() {
        let req: Request = serde_json::from_value(json!({
            "type": "TakeTurn",
            "player_id": "p03",
            "positions": {"p03": "Hallway_02", "p01": "Lounge"}
        }))
        .unwrap();
        match req {
            Request::TakeTurn { player_id, positions } => {
                assert_eq!(player_id, PlayerId::new("p03"));
                assert_eq!(positions[&PlayerId::new("p01")], Location::Lounge);
            }
            other => panic!("unexpected request {:?}", other),
        }
        assert!(matches!(
            serde_json::from_str::<Request>(r#"{"type": "Bye"}"#).unwrap(),
            Request::Bye
        ));
    }

    #[test]
    fn empty_move_serializes_as_empty_string() {
        let stay = TurnResponse {
            destination: None,
            suggestion: None,
        };
        assert_eq!(serde_json::to_value(&stay).unwrap(), json!({"move": ""}));
        let go = TurnResponse {
            destination: Some(Location::Hallway11),
            suggestion: None,
        };
        assert_eq!(
            serde_json::to_value(&go).unwrap(),
            json!({"move": "Hallway_11"})
        );
        let back: TurnResponse = serde_json::from_value(json!({"move": ""})).unwrap();
        assert_eq!(back, stay);
        assert!(serde_json::from_value::<TurnResponse>(json!({"move": "Attic"})).is_err());
    }

    #[test]
    fn update_responses() {
        assert_eq!(
            serde_json::to_value(UpdateResponse::Answer(SuggestionAnswer::NoMatch)).unwrap(),
            json!("no match")
        );
        assert_eq!(
            serde_json::to_value(UpdateResponse::Answer(SuggestionAnswer::Card(card!("Rope"))))
                .unwrap(),
            json!("Rope")
        );
        assert_eq!(
            serde_json::to_value(UpdateResponse::TurnComplete(TurnComplete::new(None))).unwrap(),
            json!({"turn_complete": true})
        );
        let accusation = TurnComplete::new(Some(Accusation {
            from_player: PlayerId::new("p01"),
            cards: [card!("Plum"), card!("Wrench"), card!("Kitchen")],
        }));
        assert_eq!(
            serde_json::to_value(UpdateResponse::TurnComplete(accusation)).unwrap(),
            json!({
                "accusation": {"from_player": "p01", "cards": ["Plum", "Wrench", "Kitchen"]},
                "turn_complete": true
            })
        );
        assert_eq!(
            serde_json::to_value(UpdateResponse::Ignored).unwrap(),
            serde_json::Value::Null
        );
    }
}
