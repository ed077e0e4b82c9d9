//! Parity of the number and, when uniform, of all of its digits.

use rand::Rng;

use super::{HintMode, MathConcept};
use crate::codec;
use crate::math;
use crate::templates::ParityTemplates;

pub struct EvenOdd<'t> {
  number: i64,
  templates: &'t ParityTemplates,
}

impl<'t> EvenOdd<'t> {
  pub fn new(number: i64, templates: &'t ParityTemplates) -> Self {
    Self { number, templates }
  }

  fn is_even(&self) -> bool {
    self.number % 2 == 0
  }

  fn all_digits(&self, even: bool) -> bool {
    math::digits(self.number).iter().all(|d| (d % 2 == 0) == even)
  }
}

impl MathConcept for EvenOdd<'_> {
  fn include_concept(&self) -> bool {
    true
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    let t = self.templates;
    let mut hints = vec![if self.is_even() { t.even.clone() } else { t.odd.clone() }];
    if math::digit_count(self.number) >= 2 {
      if self.all_digits(true) {
        hints.push(t.all_digits_even.clone());
      } else if self.all_digits(false) {
        hints.push(t.all_digits_odd.clone());
      }
    }
    hints
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    let t = self.templates;
    if codec::fits(&t.even, hint_text) {
      Some(self.is_even())
    } else if codec::fits(&t.odd, hint_text) {
      Some(!self.is_even())
    } else if codec::fits(&t.all_digits_even, hint_text) {
      Some(self.all_digits(true))
    } else if codec::fits(&t.all_digits_odd, hint_text) {
      Some(self.all_digits(false))
    } else {
      None
    }
  }
}
