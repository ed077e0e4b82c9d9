//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use tracing::{info, instrument, warn};

use crate::error::GameError;
use crate::evaluator::FeedbackRecord;
use crate::game::GuessOutcome;
use crate::logic::*;
use crate::protocol::*;
use crate::state::AppState;

impl IntoResponse for GameError {
  fn into_response(self) -> Response {
    let status = match &self {
      GameError::UnknownGame(_) => StatusCode::NOT_FOUND,
      GameError::Finished { .. } => StatusCode::CONFLICT,
      GameError::NotAnInteger(_)
      | GameError::OutOfRange { .. }
      | GameError::InvalidRange { .. }
      | GameError::OutOfBounds { .. }
      | GameError::UnknownConcept(_) => StatusCode::BAD_REQUEST,
    };
    warn!(target: "game", %status, error = %self, "Request rejected");
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, body), fields(min = ?body.min, max = ?body.max))]
pub async fn http_post_game(
  State(state): State<Arc<AppState>>,
  Json(body): Json<NewGameIn>,
) -> Result<Json<GameOut>, GameError> {
  let game = start_game(&state, body.min, body.max).await?;
  info!(target: "game", id = %game.game_id, min = game.min, max = game.max, "HTTP game started");
  Ok(Json(game))
}

#[instrument(level = "info", skip(state, body), fields(%body.game_id))]
pub async fn http_post_guess(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GuessIn>,
) -> Result<Json<GuessOutcome>, GameError> {
  let outcome = submit_guess(&state, &body.game_id, &body.guess).await?;
  Ok(Json(outcome))
}

#[instrument(level = "info", skip(state, body), fields(%body.game_id))]
pub async fn http_post_quit(
  State(state): State<Arc<AppState>>,
  Json(body): Json<GameIdIn>,
) -> Result<Json<QuitOut>, GameError> {
  let secret = quit_game(&state, &body.game_id).await?;
  Ok(Json(QuitOut { secret }))
}

#[instrument(level = "info", skip(state), fields(%q.game_id))]
pub async fn http_get_feedback(
  State(state): State<Arc<AppState>>,
  Query(q): Query<GameQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, GameError> {
  Ok(Json(game_feedback(&state, &q.game_id).await?))
}

#[instrument(level = "info", skip(state, body), fields(concept = %body.concept, guess = body.guess))]
pub async fn http_post_evaluate(
  State(state): State<Arc<AppState>>,
  Json(body): Json<EvaluateIn>,
) -> Result<Json<EvaluateOut>, GameError> {
  let feedback = evaluate_hint(&state, &body.concept, body.guess, &body.hint)?;
  Ok(Json(EvaluateOut { feedback }))
}

#[instrument(level = "info", skip(state), fields(number = q.number, filtered = q.filtered))]
pub async fn http_get_hints(
  State(state): State<Arc<AppState>>,
  Query(q): Query<HintsQuery>,
) -> Result<Json<HintsOut>, GameError> {
  let hints = hints_for(&state, q.number, q.filtered)?;
  Ok(Json(HintsOut { number: q.number, hints }))
}
