//! Factors: factor count, individual proper factors, digits that divide the number.

use rand::Rng;

use super::{pick_candidates, HintMode, MathConcept};
use crate::codec::{self, DigitScope};
use crate::math;
use crate::templates::FactorTemplates;

pub struct Factor<'t> {
  number: i64,
  factors: Vec<i64>,
  templates: &'t FactorTemplates,
}

impl<'t> Factor<'t> {
  pub fn new(number: i64, templates: &'t FactorTemplates) -> Self {
    Self { number, factors: math::factors(number), templates }
  }

  fn is_composite(&self) -> bool {
    self.factors.len() > 2
  }

  /// Factors other than 1 and the magnitude itself.
  fn proper_factors(&self) -> Vec<i64> {
    let magnitude = self.number.unsigned_abs() as i64;
    self.factors.iter().copied().filter(|f| *f != 1 && *f != magnitude).collect()
  }

  fn digit_scope(&self) -> DigitScope {
    let hits = math::count_digits(self.number, |d| math::is_digit_factor(self.number, d));
    DigitScope::of(hits, math::digit_count(self.number))
  }

  /// Whether `text` is an individual-factor hint (the capped form).
  pub fn is_individual_hint(templates: &FactorTemplates, text: &str) -> bool {
    codec::fits(&templates.individual, text)
  }
}

impl MathConcept for Factor<'_> {
  fn include_concept(&self) -> bool {
    self.is_composite()
  }

  fn generate_hints<R: Rng + ?Sized>(&self, mode: HintMode, rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    let mut hints = vec![codec::render(&self.templates.count, Some(self.factors.len() as i64))];
    for f in pick_candidates(self.proper_factors(), mode, rng) {
      hints.push(codec::render(&self.templates.individual, Some(f)));
    }
    if math::digit_count(self.number) >= 2 {
      hints.push(codec::render_digits(&self.templates.digits, self.digit_scope()));
    }
    hints
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    if let Some(count) = codec::value_if_fits(&self.templates.count, hint_text) {
      return Some(self.factors.len() as i64 == count);
    }
    if let Some(k) = codec::value_if_fits(&self.templates.individual, hint_text) {
      return Some(self.proper_factors().contains(&k));
    }
    codec::digit_scope(&self.templates.digits, hint_text).map(|scope| scope == self.digit_scope())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::templates::HintTemplates;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn twenty_four_hints() {
    let t = HintTemplates::default();
    let c = Factor::new(24, &t.factor);
    let mut rng = StdRng::seed_from_u64(1);

    let all = c.generate_hints(HintMode::Unfiltered, &mut rng);
    assert_eq!(all[0], "It has 8 factor(s).");
    let individual: Vec<&String> = all.iter().filter(|h| Factor::is_individual_hint(&t.factor, h)).collect();
    assert_eq!(individual, ["2 is a factor.", "3 is a factor.", "4 is a factor.", "6 is a factor.", "8 is a factor.", "12 is a factor."]);
    assert_eq!(all.last().map(String::as_str), Some("All of its digits are factors."));

    for _ in 0..20 {
      let filtered = c.generate_hints(HintMode::Filtered, &mut rng);
      let picked: Vec<i64> = filtered
        .iter()
        .filter(|h| Factor::is_individual_hint(&t.factor, h))
        .filter_map(|h| codec::extract_value(h))
        .collect();
      assert_eq!(picked.len(), 2);
      assert!(picked.iter().all(|f| [2, 3, 4, 6, 8, 12].contains(f)));
    }
  }

  #[test]
  fn primes_and_units_are_excluded() {
    let t = HintTemplates::default();
    assert!(!Factor::new(5, &t.factor).include_concept());
    assert!(!Factor::new(1, &t.factor).include_concept());
    assert!(!Factor::new(0, &t.factor).include_concept());
    assert!(Factor::new(-12, &t.factor).include_concept());
  }

  #[test]
  fn evaluation_against_other_numbers() {
    let t = HintTemplates::default();
    let guess = Factor::new(36, &t.factor);
    assert_eq!(guess.conforms("It has 9 factor(s)."), Some(true));
    assert_eq!(guess.conforms("It has 8 factor(s)."), Some(false));
    assert_eq!(guess.conforms("12 is a factor."), Some(true));
    assert_eq!(guess.conforms("8 is a factor."), Some(false));
    assert_eq!(guess.conforms("All of its digits are factors."), Some(true));
    assert_eq!(guess.conforms("It is a prime number."), None);

    let itself = Factor::new(12, &t.factor);
    assert_eq!(itself.conforms("12 is a factor."), Some(false));
  }
}
