//! Digit sum and digit count.

use rand::Rng;

use super::{HintMode, MathConcept};
use crate::codec;
use crate::math;

pub struct DigitSum<'t> {
  number: i64,
  template: &'t str,
}

impl<'t> DigitSum<'t> {
  pub fn new(number: i64, template: &'t str) -> Self {
    Self { number, template }
  }
}

impl MathConcept for DigitSum<'_> {
  fn include_concept(&self) -> bool {
    math::digit_count(self.number) >= 2
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    vec![codec::render(self.template, Some(math::digit_sum(self.number)))]
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    codec::value_if_fits(self.template, hint_text).map(|sum| math::digit_sum(self.number) == sum)
  }
}

pub struct DigitLength<'t> {
  number: i64,
  template: &'t str,
}

impl<'t> DigitLength<'t> {
  pub fn new(number: i64, template: &'t str) -> Self {
    Self { number, template }
  }
}

impl MathConcept for DigitLength<'_> {
  /// Below three digits the range itself already gives the length away.
  fn include_concept(&self) -> bool {
    math::digit_count(self.number) >= 3
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    vec![codec::render(self.template, Some(math::digit_count(self.number) as i64))]
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    codec::value_if_fits(self.template, hint_text).map(|len| math::digit_count(self.number) as i64 == len)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::templates::HintTemplates;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn digit_sum_needs_two_digits() {
    let t = HintTemplates::default();
    let mut rng = StdRng::seed_from_u64(0);
    assert!(DigitSum::new(7, &t.digit_sum).generate_hints(HintMode::Filtered, &mut rng).is_empty());
    assert_eq!(
      DigitSum::new(-58, &t.digit_sum).generate_hints(HintMode::Filtered, &mut rng),
      vec!["The sum of its digits is 13.".to_string()]
    );
    assert_eq!(DigitSum::new(94, &t.digit_sum).conforms("The sum of its digits is 13."), Some(true));
    assert_eq!(DigitSum::new(95, &t.digit_sum).conforms("The sum of its digits is 13."), Some(false));
  }

  #[test]
  fn digit_length_evaluation() {
    let t = HintTemplates::default();
    let mut rng = StdRng::seed_from_u64(0);
    let hint = DigitLength::new(512, &t.digit_length).generate_hints(HintMode::Filtered, &mut rng);
    assert_eq!(hint, vec!["It is a 3-digit number.".to_string()]);
    assert_eq!(DigitLength::new(2455, &t.digit_length).conforms(&hint[0]), Some(false));
    assert_eq!(DigitLength::new(222, &t.digit_length).conforms(&hint[0]), Some(true));
    assert!(!DigitLength::new(99, &t.digit_length).include_concept());
  }
}
