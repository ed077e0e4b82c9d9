//! Greater / less comparison, the fallback once the pools run dry.

use std::cmp::Ordering;

use rand::Rng;

use super::{HintMode, MathConcept};
use crate::codec;
use crate::templates::ComparisonTemplates;

pub struct GreaterLess<'t> {
  number: i64,
  templates: &'t ComparisonTemplates,
}

impl<'t> GreaterLess<'t> {
  pub fn new(number: i64, templates: &'t ComparisonTemplates) -> Self {
    Self { number, templates }
  }

  /// Where `secret` lies relative to `guess`, e.g. "It is greater than 40."
  pub fn describe(templates: &ComparisonTemplates, guess: i64, secret: i64) -> String {
    let template = match secret.cmp(&guess) {
      Ordering::Greater => &templates.greater,
      Ordering::Less => &templates.less,
      Ordering::Equal => &templates.equal,
    };
    codec::render(template, Some(guess))
  }
}

impl MathConcept for GreaterLess<'_> {
  /// Never part of the generated hint list.
  fn include_concept(&self) -> bool {
    false
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    Vec::new()
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    let t = self.templates;
    if let Some(v) = codec::value_if_fits(&t.greater, hint_text) {
      Some(self.number > v)
    } else if let Some(v) = codec::value_if_fits(&t.less, hint_text) {
      Some(self.number < v)
    } else {
      codec::value_if_fits(&t.equal, hint_text).map(|v| self.number == v)
    }
  }
}
