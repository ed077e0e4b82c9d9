//! Guess feedback: judges a wrong guess against the hint shown just before it.
//!
//! Records accumulate per game and are read by analytics/coaching consumers.
//! Concepts outside the feedback boundary are still evaluated elsewhere; they
//! just never produce a record here.

use serde::Serialize;
use tracing::debug;

use crate::domain::{ConceptKind, Feedback, Hint};
use crate::registry::ConceptRegistry;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
  pub concept: ConceptKind,
  pub hint: String,
  pub guess: i64,
  pub feedback: Feedback,
}

pub struct GuessEvaluator<'r> {
  registry: &'r ConceptRegistry,
}

impl<'r> GuessEvaluator<'r> {
  pub fn new(registry: &'r ConceptRegistry) -> Self {
    Self { registry }
  }

  /// Feedback for `guess` against `last_hint`, or `None` when the concept offers none.
  pub fn judge(&self, last_hint: &Hint, guess: i64) -> Option<FeedbackRecord> {
    if !last_hint.concept.offers_feedback() {
      debug!(target: "game", concept = %last_hint.concept, "Concept excluded from feedback");
      return None;
    }
    let feedback = self.registry.evaluate_guess(last_hint.concept, guess, &last_hint.text);
    debug!(target: "game", concept = %last_hint.concept, guess, ?feedback, "Guess judged against last hint");
    Some(FeedbackRecord { concept: last_hint.concept, hint: last_hint.text.clone(), guess, feedback })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::MemoryHintCache;
  use crate::templates::HintTemplates;
  use std::sync::Arc;

  fn registry() -> ConceptRegistry {
    ConceptRegistry::new(HintTemplates::default(), Arc::new(MemoryHintCache::new()))
  }

  #[test]
  fn good_and_bad_feedback() {
    let reg = registry();
    let eval = GuessEvaluator::new(&reg);
    let hint = Hint::new(ConceptKind::EvenOdd, "It is an even number.");
    assert_eq!(eval.judge(&hint, 8).map(|r| r.feedback), Some(Feedback::Good));
    let bad = eval.judge(&hint, 9).expect("record");
    assert_eq!(bad.feedback, Feedback::Bad);
    assert_eq!(bad.hint, "It is an even number.");
    assert_eq!(bad.guess, 9);
  }

  #[test]
  fn perfect_cube_hints_produce_no_record() {
    let reg = registry();
    let eval = GuessEvaluator::new(&reg);
    let hint = Hint::new(ConceptKind::PerfectCube, "It is a perfect cube.");
    assert!(eval.judge(&hint, 27).is_none());
    // Still evaluable through the registry.
    assert_eq!(reg.evaluate_guess(ConceptKind::PerfectCube, 27, &hint.text), Feedback::Good);
  }
}
