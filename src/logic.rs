//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! This includes:
//!   - Starting games and playing guesses against a stored session
//!   - Quitting and reading accumulated feedback
//!   - Stateless engine access: hints for a number, evaluating a guess against a hint

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::config::GameSettings;
use crate::domain::{ConceptKind, Feedback, Hint};
use crate::error::GameError;
use crate::evaluator::FeedbackRecord;
use crate::game::{GameSession, GuessOutcome};
use crate::protocol::GameOut;
use crate::state::AppState;
use crate::util::trunc_for_log;
use std::collections::HashMap;

#[instrument(level = "info", skip(state))]
pub async fn start_game(state: &AppState, min: Option<i64>, max: Option<i64>) -> Result<GameOut, GameError> {
  let settings = GameSettings {
    min: min.unwrap_or(state.settings.min),
    max: max.unwrap_or(state.settings.max),
    ..state.settings.clone()
  };
  let id = Uuid::new_v4().to_string();
  let (session, hint) = GameSession::start(id.clone(), &state.registry, &settings, StdRng::from_entropy())?;
  let mut games = state.games.write().await;
  evict_finished(&mut games, &settings);
  games.insert(id.clone(), session);
  drop(games);
  Ok(GameOut { game_id: id, min: settings.min, max: settings.max, max_guesses: settings.max_guesses, hint })
}

/// Drop sessions that finished longer ago than the retention window. Returns how many went.
pub fn evict_finished(games: &mut HashMap<String, GameSession>, settings: &GameSettings) -> usize {
  let (now, retention) = (Instant::now(), settings.finished_retention());
  let before = games.len();
  games.retain(|_, session| !session.expired(now, retention));
  let evicted = before - games.len();
  if evicted > 0 {
    debug!(target: "game", evicted, live = games.len(), "Finished games evicted");
  }
  evicted
}

/// Render the guess's hint list into the cache before any game lock is taken,
/// so the session only reads it. Out-of-bound or unparsable input is left to the session.
async fn warm_guess_hints(state: &AppState, raw: &str) {
  let Ok(guess) = raw.trim().parse::<i64>() else { return };
  if !state.settings.within_bounds(guess) {
    return;
  }
  let registry = state.registry.clone();
  if let Err(e) = tokio::task::spawn_blocking(move || registry.unfiltered_hints(guess)).await {
    warn!(target: "hints", guess, error = %e, "Rendering guess hints failed; the session renders them itself");
  }
}

#[instrument(level = "info", skip(state, raw), fields(%game_id, raw = %trunc_for_log(raw, 32)))]
pub async fn submit_guess(state: &AppState, game_id: &str, raw: &str) -> Result<GuessOutcome, GameError> {
  warm_guess_hints(state, raw).await;
  let mut games = state.games.write().await;
  let session = games.get_mut(game_id).ok_or_else(|| GameError::UnknownGame(game_id.to_string()))?;
  let outcome = session.guess(&state.registry, raw)?;
  let pools = session.pools();
  info!(
    target: "game",
    %game_id,
    guess = outcome.guess,
    correct = outcome.correct,
    status = ?outcome.status,
    relevant = pools.relevant().len(),
    redundant = pools.redundant().len(),
    "Guess played"
  );
  Ok(outcome)
}

#[instrument(level = "info", skip(state))]
pub async fn quit_game(state: &AppState, game_id: &str) -> Result<i64, GameError> {
  let mut games = state.games.write().await;
  let session = games.get_mut(game_id).ok_or_else(|| GameError::UnknownGame(game_id.to_string()))?;
  let was = session.status();
  let secret = session.quit();
  info!(target: "game", %game_id, was = ?was, "Quit requested");
  Ok(secret)
}

#[instrument(level = "debug", skip(state))]
pub async fn game_feedback(state: &AppState, game_id: &str) -> Result<Vec<FeedbackRecord>, GameError> {
  let games = state.games.read().await;
  let session = games.get(game_id).ok_or_else(|| GameError::UnknownGame(game_id.to_string()))?;
  Ok(session.feedback().to_vec())
}

/// Judge `guess` against a hint text of the named concept.
/// An unknown concept name means the caller's vocabulary drifted; it is logged loudly.
#[instrument(level = "info", skip(state, hint), fields(hint_len = hint.len()))]
pub fn evaluate_hint(state: &AppState, concept: &str, guess: i64, hint: &str) -> Result<Feedback, GameError> {
  let kind: ConceptKind = concept.parse().map_err(|e| {
    error!(target: "hints", %concept, "Evaluation requested for an unknown concept");
    GameError::from(e)
  })?;
  check_bounds(state, guess)?;
  Ok(state.registry.evaluate_guess(kind, guess, hint))
}

fn check_bounds(state: &AppState, number: i64) -> Result<(), GameError> {
  if state.settings.within_bounds(number) {
    Ok(())
  } else {
    Err(GameError::OutOfBounds { number, bound: state.settings.max_magnitude })
  }
}

/// Hints for `number`: sampled like a game would see them, or the full unfiltered list.
#[instrument(level = "debug", skip(state))]
pub fn hints_for(state: &AppState, number: i64, filtered: bool) -> Result<Vec<Hint>, GameError> {
  check_bounds(state, number)?;
  Ok(if filtered {
    state.registry.generate_hints(number, true, &mut rand::thread_rng())
  } else {
    state.registry.unfiltered_hints(number)
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::{HintCache, MemoryHintCache};
  use crate::config::GameConfig;
  use crate::domain::GameStatus;
  use std::sync::Arc;

  fn state() -> AppState {
    AppState::from_parts(GameConfig::default(), Arc::new(MemoryHintCache::new()))
  }

  #[tokio::test]
  async fn full_round_through_the_store() {
    let state = state();
    let game = start_game(&state, Some(5), Some(5)).await.expect("start");
    assert!(game.hint.is_some());
    let outcome = submit_guess(&state, &game.game_id, "5").await.expect("guess");
    assert_eq!(outcome.status, GameStatus::Won);
    assert!(game_feedback(&state, &game.game_id).await.expect("feedback").is_empty());
  }

  #[tokio::test]
  async fn unknown_game_is_reported() {
    let state = state();
    assert!(matches!(submit_guess(&state, "nope", "3").await, Err(GameError::UnknownGame(_))));
    assert!(matches!(quit_game(&state, "nope").await, Err(GameError::UnknownGame(_))));
  }

  #[tokio::test]
  async fn quit_returns_secret_in_range() {
    let state = state();
    let game = start_game(&state, None, None).await.expect("start");
    let secret = quit_game(&state, &game.game_id).await.expect("quit");
    assert!((1..=100).contains(&secret));
  }

  #[test]
  fn evaluate_by_concept_name() {
    let state = state();
    assert_eq!(evaluate_hint(&state, "digit_length", 222, "It is a 3-digit number.").expect("known"), Feedback::Good);
    assert!(matches!(
      evaluate_hint(&state, "fibonacci", 5, "It is a prime number."),
      Err(GameError::UnknownConcept(_))
    ));
  }

  #[test]
  fn filtered_hints_are_a_subset_of_unfiltered() {
    let state = state();
    let all = hints_for(&state, 60, false).expect("in bounds");
    let some = hints_for(&state, 60, true).expect("in bounds");
    assert!(some.len() < all.len());
    assert!(some.iter().all(|h| all.contains(h)));
  }

  #[tokio::test]
  async fn finished_games_are_evicted_on_next_start() {
    let mut cfg = GameConfig::default();
    cfg.game.finished_retention_secs = 0;
    let state = AppState::from_parts(cfg, Arc::new(MemoryHintCache::new()));

    let done = start_game(&state, None, None).await.expect("start");
    quit_game(&state, &done.game_id).await.expect("quit");
    assert_eq!(state.games.read().await.len(), 1);

    let live = start_game(&state, None, None).await.expect("start");
    let games = state.games.read().await;
    assert_eq!(games.len(), 1);
    assert!(!games.contains_key(&done.game_id));
    assert!(games.contains_key(&live.game_id));
  }

  #[tokio::test]
  async fn finished_games_stay_readable_within_retention() {
    let state = state();
    let game = start_game(&state, Some(5), Some(5)).await.expect("start");
    submit_guess(&state, &game.game_id, "5").await.expect("guess");
    start_game(&state, None, None).await.expect("start");
    assert!(game_feedback(&state, &game.game_id).await.is_ok());
  }

  #[tokio::test]
  async fn oversized_inputs_are_refused() {
    let state = state();
    let bound = state.settings.max_magnitude;
    assert!(matches!(
      start_game(&state, Some(1), Some(i64::MAX)).await,
      Err(GameError::InvalidRange { .. })
    ));
    assert!(matches!(hints_for(&state, bound + 1, false), Err(GameError::OutOfBounds { .. })));
    assert!(matches!(
      evaluate_hint(&state, "prime", i64::MIN, "It is a prime number."),
      Err(GameError::OutOfBounds { .. })
    ));
    assert!(state.games.read().await.is_empty());
  }

  #[tokio::test]
  async fn guess_hints_are_rendered_before_the_session_runs() {
    let cache = Arc::new(MemoryHintCache::new());
    let state = AppState::from_parts(GameConfig::default(), cache.clone());
    warm_guess_hints(&state, " 42 ").await;
    assert!(cache.lookup(42).is_some());
    warm_guess_hints(&state, "9223372036854775807").await;
    assert!(cache.lookup(i64::MAX).is_none());
  }
}
