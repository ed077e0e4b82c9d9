//! Primality: prime numbers, distinct prime factors of composites, prime digits.

use rand::Rng;

use super::{HintMode, MathConcept};
use crate::codec::{self, DigitScope};
use crate::math;
use crate::templates::PrimeTemplates;

pub struct Prime<'t> {
  number: i64,
  factor_count: usize,
  templates: &'t PrimeTemplates,
}

impl<'t> Prime<'t> {
  pub fn new(number: i64, templates: &'t PrimeTemplates) -> Self {
    Self { number, factor_count: math::factors(number).len(), templates }
  }

  fn is_prime(&self) -> bool {
    self.number > 1 && self.factor_count == 2
  }

  fn is_composite(&self) -> bool {
    self.factor_count > 2
  }

  fn digit_scope(&self) -> DigitScope {
    DigitScope::of(
      math::count_digits(self.number, math::is_prime_digit),
      math::digit_count(self.number),
    )
  }
}

impl MathConcept for Prime<'_> {
  fn include_concept(&self) -> bool {
    self.is_prime() || math::digit_count(self.number) >= 2
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    let mut hints = Vec::new();
    if self.is_prime() {
      hints.push(codec::render(&self.templates.overall, None));
    }
    if self.is_composite() {
      let count = math::distinct_prime_factor_count(self.number) as i64;
      hints.push(codec::render(&self.templates.prime_factor_count, Some(count)));
    }
    if math::digit_count(self.number) >= 2 {
      hints.push(codec::render_digits(&self.templates.digits, self.digit_scope()));
    }
    hints
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    if codec::fits(&self.templates.overall, hint_text) {
      return Some(self.is_prime());
    }
    if let Some(count) = codec::value_if_fits(&self.templates.prime_factor_count, hint_text) {
      return Some(self.is_composite() && math::distinct_prime_factor_count(self.number) as i64 == count);
    }
    codec::digit_scope(&self.templates.digits, hint_text).map(|scope| scope == self.digit_scope())
  }
}
