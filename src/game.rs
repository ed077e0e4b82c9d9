//! One game: the secret, its hint pools, the guesses so far and their feedback.
//!
//! A session is synchronous; the async layer only looks it up and locks it.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::config::GameSettings;
use crate::domain::{ConceptKind, GameStatus, Hint};
use crate::error::GameError;
use crate::evaluator::{FeedbackRecord, GuessEvaluator};
use crate::pool::HintPoolManager;
use crate::registry::ConceptRegistry;

/// A hint shown to the player. `fallback` marks the greater/less comparison
/// served once both pools are empty; it never enters the given pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Disclosure {
  pub concept: ConceptKind,
  pub text: String,
  pub fallback: bool,
}

impl Disclosure {
  fn pooled(hint: Hint) -> Self {
    Self { concept: hint.concept, text: hint.text, fallback: false }
  }

  fn comparison(text: String) -> Self {
    Self { concept: ConceptKind::GreaterLess, text, fallback: true }
  }
}

#[derive(Clone, Debug, Serialize)]
pub struct GuessOutcome {
  pub guess: i64,
  pub correct: bool,
  pub status: GameStatus,
  pub feedback: Option<FeedbackRecord>,
  pub hint: Option<Disclosure>,
  pub guesses_left: usize,
  /// Revealed once the game is over.
  pub secret: Option<i64>,
}

pub struct GameSession {
  pub id: String,
  pub min: i64,
  pub max: i64,
  secret: i64,
  max_guesses: usize,
  status: GameStatus,
  guesses: Vec<i64>,
  pools: HintPoolManager,
  /// What the player saw last; the next wrong guess is judged against it.
  last_disclosure: Option<Disclosure>,
  feedback: Vec<FeedbackRecord>,
  finished_at: Option<Instant>,
  rng: StdRng,
}

/// Parse a raw guess and check it lies within `min..=max`.
pub fn parse_guess(raw: &str, min: i64, max: i64) -> Result<i64, GameError> {
  let guess: i64 = raw.trim().parse().map_err(|_| GameError::NotAnInteger(raw.to_string()))?;
  if !(min..=max).contains(&guess) {
    return Err(GameError::OutOfRange { guess, min, max });
  }
  Ok(guess)
}

impl GameSession {
  /// Draw a secret in the configured range, generate its hints and disclose the first one.
  #[instrument(level = "info", skip(registry, rng), fields(min = settings.min, max = settings.max))]
  pub fn start(
    id: String,
    registry: &ConceptRegistry,
    settings: &GameSettings,
    mut rng: StdRng,
  ) -> Result<(Self, Option<Disclosure>), GameError> {
    let (min, max) = (settings.min, settings.max);
    if min > max || !settings.within_bounds(min) || !settings.within_bounds(max) {
      return Err(GameError::InvalidRange { min, max });
    }
    let secret = rng.gen_range(min..=max);
    let hints = registry.generate_hints(secret, true, &mut rng);
    let mut pools = HintPoolManager::new(hints);
    let first = pools.next_hint(&mut rng).map(Disclosure::pooled);
    info!(target: "game", %id, hints = pools.relevant().len() + pools.given().len(), "Game started");
    let session = Self {
      id,
      min,
      max,
      secret,
      max_guesses: settings.max_guesses.max(1),
      status: GameStatus::InProgress,
      guesses: Vec::new(),
      pools,
      last_disclosure: first.clone(),
      feedback: Vec::new(),
      finished_at: None,
      rng,
    };
    Ok((session, first))
  }

  pub fn status(&self) -> GameStatus {
    self.status
  }

  pub fn feedback(&self) -> &[FeedbackRecord] {
    &self.feedback
  }

  pub fn pools(&self) -> &HintPoolManager {
    &self.pools
  }

  /// Finished longer than `retention` ago, as of `now`.
  pub fn expired(&self, now: Instant, retention: Duration) -> bool {
    self.finished_at.is_some_and(|at| now.saturating_duration_since(at) >= retention)
  }

  fn finish(&mut self, status: GameStatus) {
    self.status = status;
    self.finished_at = Some(Instant::now());
  }

  fn guesses_left(&self) -> usize {
    self.max_guesses.saturating_sub(self.guesses.len())
  }

  fn revealed_secret(&self) -> Option<i64> {
    (self.status != GameStatus::InProgress).then_some(self.secret)
  }

  /// Play one guess: judge it against the last hint, demote what it already
  /// satisfies and disclose the next hint.
  #[instrument(level = "info", skip(self, registry), fields(id = %self.id))]
  pub fn guess(&mut self, registry: &ConceptRegistry, raw: &str) -> Result<GuessOutcome, GameError> {
    if self.status != GameStatus::InProgress {
      return Err(GameError::Finished { id: self.id.clone(), status: self.status });
    }
    let guess = parse_guess(raw, self.min, self.max)?;
    self.guesses.push(guess);

    if guess == self.secret {
      self.finish(GameStatus::Won);
      info!(target: "game", id = %self.id, guesses = self.guesses.len(), "Game won");
      return Ok(self.outcome(guess, true, None, None));
    }

    // The greater/less fallback carries no feedback.
    let feedback = self
      .last_disclosure
      .as_ref()
      .filter(|shown| !shown.fallback)
      .and_then(|shown| {
        GuessEvaluator::new(registry).judge(&Hint::new(shown.concept, shown.text.clone()), guess)
      });
    if let Some(record) = &feedback {
      self.feedback.push(record.clone());
    }

    if self.guesses.len() >= self.max_guesses {
      self.finish(GameStatus::Lost);
      info!(target: "game", id = %self.id, guesses = self.guesses.len(), "Game lost");
      return Ok(self.outcome(guess, false, feedback, None));
    }

    self.pools.demote_satisfied(&registry.unfiltered_hints(guess));
    let hint = match self.pools.next_hint(&mut self.rng) {
      Some(h) => Disclosure::pooled(h),
      None => {
        debug!(target: "game", id = %self.id, "Pools exhausted; falling back to comparison");
        Disclosure::comparison(registry.check_greater_or_less(guess, self.secret))
      }
    };
    self.last_disclosure = Some(hint.clone());
    Ok(self.outcome(guess, false, feedback, Some(hint)))
  }

  /// End the game early. Returns the secret.
  pub fn quit(&mut self) -> i64 {
    if self.status == GameStatus::InProgress {
      self.finish(GameStatus::Quit);
      info!(target: "game", id = %self.id, guesses = self.guesses.len(), "Game quit");
    }
    self.secret
  }

  fn outcome(&self, guess: i64, correct: bool, feedback: Option<FeedbackRecord>, hint: Option<Disclosure>) -> GuessOutcome {
    GuessOutcome {
      guess,
      correct,
      status: self.status,
      feedback,
      hint,
      guesses_left: self.guesses_left(),
      secret: self.revealed_secret(),
    }
  }
}
