//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{Feedback, Hint};
use crate::evaluator::FeedbackRecord;
use crate::game::{Disclosure, GuessOutcome};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    NewGame {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    Guess {
        #[serde(rename = "gameId")]
        game_id: String,
        guess: String,
    },
    Quit {
        #[serde(rename = "gameId")]
        game_id: String,
    },
    Feedback {
        #[serde(rename = "gameId")]
        game_id: String,
    },
    Evaluate {
        concept: String,
        guess: i64,
        hint: String,
    },
    Hints {
        number: i64,
        #[serde(default)]
        filtered: bool,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Game {
        game: GameOut,
    },
    GuessResult {
        outcome: GuessOutcome,
    },
    Quit {
        secret: i64,
    },
    Feedback {
        records: Vec<FeedbackRecord>,
    },
    Evaluation {
        feedback: Feedback,
    },
    Hints {
        number: i64,
        hints: Vec<Hint>,
    },
    Error {
        message: String,
    },
}

/// DTO used by both WS and HTTP for a freshly started game.
#[derive(Debug, Serialize)]
pub struct GameOut {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub min: i64,
    pub max: i64,
    #[serde(rename = "maxGuesses")]
    pub max_guesses: usize,
    pub hint: Option<Disclosure>,
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize, Default)]
pub struct NewGameIn {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

#[derive(Deserialize)]
pub struct GuessIn {
    #[serde(rename = "gameId")]
    pub game_id: String,
    pub guess: String,
}

#[derive(Deserialize)]
pub struct GameIdIn {
    #[serde(rename = "gameId")]
    pub game_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GameQuery {
    #[serde(rename = "gameId")]
    pub game_id: String,
}

#[derive(Serialize)]
pub struct QuitOut {
    pub secret: i64,
}

#[derive(Deserialize)]
pub struct EvaluateIn {
    pub concept: String,
    pub guess: i64,
    pub hint: String,
}
#[derive(Serialize)]
pub struct EvaluateOut {
    pub feedback: Feedback,
}

#[derive(Debug, Deserialize)]
pub struct HintsQuery {
    pub number: i64,
    #[serde(default)]
    pub filtered: bool,
}
#[derive(Serialize)]
pub struct HintsOut {
    pub number: i64,
    pub hints: Vec<Hint>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
