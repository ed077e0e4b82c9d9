//! Multiples: "V is a multiple." where V = k·n for a small k.

use std::ops::RangeInclusive;

use rand::Rng;

use super::{pick_candidates, HintMode, MathConcept};
use crate::codec;
use crate::templates::MultipleTemplates;

/// Multipliers used to build candidate multiples.
pub const MULTIPLIERS: RangeInclusive<i64> = 2..=10;

pub struct Multiple<'t> {
  number: i64,
  templates: &'t MultipleTemplates,
}

impl<'t> Multiple<'t> {
  pub fn new(number: i64, templates: &'t MultipleTemplates) -> Self {
    Self { number, templates }
  }

  fn candidates(&self) -> Vec<i64> {
    MULTIPLIERS.filter_map(|k| k.checked_mul(self.number)).collect()
  }

  pub fn is_multiple_hint(templates: &MultipleTemplates, text: &str) -> bool {
    codec::fits(&templates.individual, text)
  }
}

impl MathConcept for Multiple<'_> {
  /// Every number is a multiple of ±1 and nothing is a proper multiple of 0.
  fn include_concept(&self) -> bool {
    !matches!(self.number, -1..=1)
  }

  fn generate_hints<R: Rng + ?Sized>(&self, mode: HintMode, rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    pick_candidates(self.candidates(), mode, rng)
      .into_iter()
      .map(|m| codec::render(&self.templates.individual, Some(m)))
      .collect()
  }

  /// The hinted value must divide evenly by the guess, with a quotient among the multipliers.
  ///
  /// Divisibility alone is not enough: guess 12 against "12 is a multiple." is bad,
  /// because 12 never renders that hint for itself (quotient 1). Keeping the quotient
  /// check makes a guess conform exactly when its own Multiple hints carry the text.
  fn conforms(&self, hint_text: &str) -> Option<bool> {
    let value = codec::value_if_fits(&self.templates.individual, hint_text)?;
    Some(
      self.include_concept()
        && value % self.number == 0
        && MULTIPLIERS.contains(&(value / self.number)),
    )
  }
}
