//! Concept registry: runs every concept over a number, consults the hint cache,
//! and dispatches guess evaluation to the concept that owns a hint.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::cache::HintCache;
use crate::concepts::compare::GreaterLess;
use crate::concepts::factor::Factor;
use crate::concepts::multiple::Multiple;
use crate::concepts::{pick_candidates, Concept, HintMode};
use crate::domain::{ConceptKind, Feedback, Hint};
use crate::templates::HintTemplates;

pub struct ConceptRegistry {
  templates: HintTemplates,
  cache: Arc<dyn HintCache>,
}

impl ConceptRegistry {
  pub fn new(templates: HintTemplates, cache: Arc<dyn HintCache>) -> Self {
    Self { templates, cache }
  }

  pub fn templates(&self) -> &HintTemplates {
    &self.templates
  }

  /// One concept per generating kind, built for `number`, in rendering order.
  pub fn concepts_for(&self, number: i64) -> Vec<Concept<'_>> {
    ConceptKind::GENERATION_ORDER
      .into_iter()
      .map(|kind| Concept::new(kind, number, &self.templates))
      .collect()
  }

  fn render_all(&self, number: i64) -> Vec<Hint> {
    // Unfiltered rendering never samples; the fixed seed only satisfies the signature.
    let mut rng = StdRng::seed_from_u64(0);
    let mut hints = Vec::new();
    for concept in self.concepts_for(number) {
      if !concept.include_concept() {
        continue;
      }
      let kind = concept.kind();
      hints.extend(
        concept
          .generate_hints(HintMode::Unfiltered, &mut rng)
          .into_iter()
          .map(|text| Hint::new(kind, text)),
      );
    }
    hints
  }

  /// Hints for the secret number, with multi-candidate concepts sampled down.
  ///
  /// With `check_cache` a cached entry is reused (only the sampling is redone).
  /// Otherwise, and on a miss, the full list is rendered and written back.
  #[instrument(level = "debug", skip(self, rng))]
  pub fn generate_hints<R: Rng + ?Sized>(&self, number: i64, check_cache: bool, rng: &mut R) -> Vec<Hint> {
    let cached = if check_cache { self.cache.lookup(number) } else { None };
    let full = match cached {
      Some(hit) => {
        debug!(target: "hints", number, hints = hit.len(), "Hint cache hit");
        hit
      }
      None => self.render_and_store(number),
    };
    self.cap_candidates(full, rng)
  }

  /// Every hint `number` satisfies, cache-backed. A guess is compared against this set.
  pub fn unfiltered_hints(&self, number: i64) -> Vec<Hint> {
    self.cache.lookup(number).unwrap_or_else(|| self.render_and_store(number))
  }

  fn render_and_store(&self, number: i64) -> Vec<Hint> {
    let hints = self.render_all(number);
    if let Err(e) = self.cache.store(number, &hints) {
      warn!(target: "hints", number, error = %e, "Failed to store hints in cache; continuing without it");
    }
    debug!(target: "hints", number, hints = hints.len(), "Hints rendered");
    hints
  }

  /// Sample Multiple entries and individual Factor entries down the same way the concepts do.
  fn cap_candidates<R: Rng + ?Sized>(&self, hints: Vec<Hint>, rng: &mut R) -> Vec<Hint> {
    let multiples = positions(&hints, |h| {
      h.concept == ConceptKind::Multiple && Multiple::is_multiple_hint(&self.templates.multiple, &h.text)
    });
    let factors = positions(&hints, |h| {
      h.concept == ConceptKind::Factor && Factor::is_individual_hint(&self.templates.factor, &h.text)
    });
    let mut keep = vec![true; hints.len()];
    for group in [multiples, factors] {
      let kept = pick_candidates(group.clone(), HintMode::Filtered, rng);
      for pos in group.into_iter().filter(|p| !kept.contains(p)) {
        keep[pos] = false;
      }
    }
    hints.into_iter().zip(keep).filter_map(|(h, k)| k.then_some(h)).collect()
  }

  /// Does `guess` conform to `hint_text`, a hint previously rendered by `kind`?
  pub fn evaluate_guess(&self, kind: ConceptKind, guess: i64, hint_text: &str) -> Feedback {
    Concept::new(kind, guess, &self.templates).evaluate_guess(hint_text)
  }

  /// Directional hint used once the pools are exhausted.
  pub fn check_greater_or_less(&self, guess: i64, number: i64) -> String {
    GreaterLess::describe(&self.templates.greater_less, guess, number)
  }

  /// Fill the cache for every number of `range` without an entry. Returns how many were generated.
  #[instrument(level = "info", skip(self))]
  pub fn precompute(&self, range: RangeInclusive<i64>) -> usize {
    let mut generated = 0;
    for number in range {
      if self.cache.lookup(number).is_none() {
        self.render_and_store(number);
        generated += 1;
      }
    }
    info!(target: "hints", generated, "Hint cache precompute finished");
    generated
  }
}

fn positions(hints: &[Hint], pred: impl Fn(&Hint) -> bool) -> Vec<usize> {
  hints.iter().enumerate().filter(|(_, h)| pred(h)).map(|(i, _)| i).collect()
}
