//! Error types for the engine, the hint cache and game sessions.

use thiserror::Error;

use crate::domain::GameStatus;

/// A concept name outside the roster. Means the caller's vocabulary drifted
/// from `ConceptKind`; callers log it at error level rather than ignoring it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown concept: {0}")]
pub struct UnknownConcept(pub String);

#[derive(Error, Debug)]
pub enum CacheError {
  #[error("Hint cache I/O failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("Hint cache JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum GameError {
  #[error("Unknown game: {0}")]
  UnknownGame(String),

  #[error("Guess is not an integer: {0:?}")]
  NotAnInteger(String),

  #[error("Guess {guess} is outside the range {min}..={max}")]
  OutOfRange { guess: i64, min: i64, max: i64 },

  #[error("Game {id} is already over ({status:?})")]
  Finished { id: String, status: GameStatus },

  #[error("Invalid range {min}..={max}")]
  InvalidRange { min: i64, max: i64 },

  #[error("{number} is beyond the supported magnitude {bound}")]
  OutOfBounds { number: i64, bound: i64 },

  #[error(transparent)]
  UnknownConcept(#[from] UnknownConcept),
}
