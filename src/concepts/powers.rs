//! Perfect squares and perfect cubes.
//!
//! Both share one shape: an overall hint when the number is a perfect power,
//! and a per-digit hint counting the digits that are themselves perfect powers.
//! Squares are undefined for negatives; cubes are not.

use rand::Rng;

use super::{HintMode, MathConcept};
use crate::codec::{self, DigitScope};
use crate::math;
use crate::templates::PowerTemplates;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Power {
  Square,
  Cube,
}

impl Power {
  fn holds(self, n: i64) -> bool {
    match self {
      Power::Square => math::is_perfect_square(n),
      Power::Cube => math::is_perfect_cube(n),
    }
  }

  fn digit_holds(self, d: u8) -> bool {
    match self {
      Power::Square => math::is_square_digit(d),
      Power::Cube => math::is_cube_digit(d),
    }
  }
}

pub struct PerfectPower<'t> {
  power: Power,
  number: i64,
  templates: &'t PowerTemplates,
}

impl<'t> PerfectPower<'t> {
  pub fn new(power: Power, number: i64, templates: &'t PowerTemplates) -> Self {
    Self { power, number, templates }
  }

  fn digit_scope(&self) -> DigitScope {
    DigitScope::of(
      math::count_digits(self.number, |d| self.power.digit_holds(d)),
      math::digit_count(self.number),
    )
  }
}

impl MathConcept for PerfectPower<'_> {
  fn include_concept(&self) -> bool {
    match self.power {
      Power::Square => self.number >= 0,
      Power::Cube => true,
    }
  }

  fn generate_hints<R: Rng + ?Sized>(&self, _mode: HintMode, _rng: &mut R) -> Vec<String> {
    if !self.include_concept() {
      return Vec::new();
    }
    let mut hints = Vec::new();
    if self.power.holds(self.number) {
      hints.push(codec::render(&self.templates.overall, None));
    }
    if math::digit_count(self.number) >= 2 {
      hints.push(codec::render_digits(&self.templates.digits, self.digit_scope()));
    }
    hints
  }

  fn conforms(&self, hint_text: &str) -> Option<bool> {
    if codec::fits(&self.templates.overall, hint_text) {
      return Some(self.power.holds(self.number));
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

  fn hints(power: Power, n: i64) -> Vec<String> {
    let t = HintTemplates::default();
    let templates = match power {
      Power::Square => &t.perfect_square,
      Power::Cube => &t.perfect_cube,
    };
    let mut rng = StdRng::seed_from_u64(0);
    PerfectPower::new(power, n, templates).generate_hints(HintMode::Unfiltered, &mut rng)
  }

  #[test]
  fn negatives_skip_squares_but_keep_cubes() {
    assert!(hints(Power::Square, -8).is_empty());
    assert_eq!(hints(Power::Cube, -8), vec!["It is a perfect cube.".to_string()]);
  }

  #[test]
  fn squares_with_digit_counts() {
    assert_eq!(hints(Power::Square, 49), vec![
      "It is a perfect square.".to_string(),
      "All of its digits are perfect squares.".to_string(),
    ]);
    assert_eq!(hints(Power::Square, 23), vec!["None of its digits are perfect squares.".to_string()]);
    assert_eq!(hints(Power::Cube, 1000), vec![
      "It is a perfect cube.".to_string(),
      "All of its digits are perfect cubes.".to_string(),
    ]);
    assert_eq!(hints(Power::Cube, 182), vec!["2 of its digits are perfect cubes.".to_string()]);
  }

  #[test]
  fn evaluation() {
    let t = HintTemplates::default();
    let square = |n| PerfectPower::new(Power::Square, n, &t.perfect_square);
    assert_eq!(square(64).conforms("It is a perfect square."), Some(true));
    assert_eq!(square(-4).conforms("It is a perfect square."), Some(false));
    assert_eq!(square(17).conforms("1 of its digits is a perfect square."), Some(true));
    assert_eq!(square(17).conforms("It is a perfect cube."), None);
  }
}
