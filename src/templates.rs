//! Hint text templates: the wording every concept renders and later re-parses.
//!
//! Templates carry at most one `{n}` slot. The only digits a template may hold
//! are the ones substituted into that slot, and the words "None" / "All" may
//! only appear as scope markers in the per-digit sets. Evaluation depends on it.
//!
//! Defaults are English; any subset can be overridden from the TOML config.

use serde::{Deserialize, Deserializer};

/// The four per-digit scope wordings of one concept.
///
/// Each concept has its own wording, so a config table for `digits` is read
/// as overrides on top of that concept's defaults (see `DigitOverrides`).
#[derive(Clone, Debug)]
pub struct DigitTemplates {
  pub none: String,
  pub one: String,
  pub some: String,
  pub all: String,
}

impl DigitTemplates {
  fn new(none: &str, one: &str, some: &str, all: &str) -> Self {
    Self { none: none.into(), one: one.into(), some: some.into(), all: all.into() }
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    [self.none.as_str(), self.one.as_str(), self.some.as_str(), self.all.as_str()].into_iter()
  }
}

/// A `digits` table from config; unset entries keep the concept's wording.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DigitOverrides {
  none: Option<String>,
  one: Option<String>,
  some: Option<String>,
  all: Option<String>,
}

impl DigitOverrides {
  fn apply(self, mut base: DigitTemplates) -> DigitTemplates {
    if let Some(v) = self.none {
      base.none = v;
    }
    if let Some(v) = self.one {
      base.one = v;
    }
    if let Some(v) = self.some {
      base.some = v;
    }
    if let Some(v) = self.all {
      base.all = v;
    }
    base
  }
}

/// A perfect square / perfect cube table from config.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PowerOverrides {
  overall: Option<String>,
  digits: DigitOverrides,
}

impl PowerOverrides {
  fn apply(self, base: PowerTemplates) -> PowerTemplates {
    PowerTemplates {
      overall: self.overall.unwrap_or(base.overall),
      digits: self.digits.apply(base.digits),
    }
  }
}

fn factor_digits<'de, D: Deserializer<'de>>(d: D) -> Result<DigitTemplates, D::Error> {
  Ok(DigitOverrides::deserialize(d)?.apply(FactorTemplates::default().digits))
}

fn prime_digits<'de, D: Deserializer<'de>>(d: D) -> Result<DigitTemplates, D::Error> {
  Ok(DigitOverrides::deserialize(d)?.apply(PrimeTemplates::default().digits))
}

fn square_templates<'de, D: Deserializer<'de>>(d: D) -> Result<PowerTemplates, D::Error> {
  Ok(PowerOverrides::deserialize(d)?.apply(PowerTemplates::squares()))
}

fn cube_templates<'de, D: Deserializer<'de>>(d: D) -> Result<PowerTemplates, D::Error> {
  Ok(PowerOverrides::deserialize(d)?.apply(PowerTemplates::cubes()))
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FactorTemplates {
  pub count: String,
  pub individual: String,
  #[serde(deserialize_with = "factor_digits")]
  pub digits: DigitTemplates,
}

impl Default for FactorTemplates {
  fn default() -> Self {
    Self {
      count: "It has {n} factor(s).".into(),
      individual: "{n} is a factor.".into(),
      digits: DigitTemplates::new(
        "None of its digits are factors.",
        "{n} of its digits is a factor.",
        "{n} of its digits are factors.",
        "All of its digits are factors.",
      ),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MultipleTemplates {
  pub individual: String,
}

impl Default for MultipleTemplates {
  fn default() -> Self {
    Self { individual: "{n} is a multiple.".into() }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PrimeTemplates {
  pub overall: String,
  pub prime_factor_count: String,
  #[serde(deserialize_with = "prime_digits")]
  pub digits: DigitTemplates,
}

impl Default for PrimeTemplates {
  fn default() -> Self {
    Self {
      overall: "It is a prime number.".into(),
      prime_factor_count: "It has {n} distinct prime factor(s).".into(),
      digits: DigitTemplates::new(
        "None of its digits are prime.",
        "{n} of its digits is prime.",
        "{n} of its digits are prime.",
        "All of its digits are prime.",
      ),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParityTemplates {
  pub even: String,
  pub odd: String,
  pub all_digits_even: String,
  pub all_digits_odd: String,
}

impl Default for ParityTemplates {
  fn default() -> Self {
    Self {
      even: "It is an even number.".into(),
      odd: "It is an odd number.".into(),
      all_digits_even: "All of its digits are even.".into(),
      all_digits_odd: "All of its digits are odd.".into(),
    }
  }
}

/// Shared shape of the perfect square / perfect cube wordings.
#[derive(Clone, Debug)]
pub struct PowerTemplates {
  pub overall: String,
  pub digits: DigitTemplates,
}

impl PowerTemplates {
  fn squares() -> Self {
    Self {
      overall: "It is a perfect square.".into(),
      digits: DigitTemplates::new(
        "None of its digits are perfect squares.",
        "{n} of its digits is a perfect square.",
        "{n} of its digits are perfect squares.",
        "All of its digits are perfect squares.",
      ),
    }
  }

  fn cubes() -> Self {
    Self {
      overall: "It is a perfect cube.".into(),
      digits: DigitTemplates::new(
        "None of its digits are perfect cubes.",
        "{n} of its digits is a perfect cube.",
        "{n} of its digits are perfect cubes.",
        "All of its digits are perfect cubes.",
      ),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ComparisonTemplates {
  pub greater: String,
  pub less: String,
  pub equal: String,
}

impl Default for ComparisonTemplates {
  fn default() -> Self {
    Self {
      greater: "It is greater than {n}.".into(),
      less: "It is less than {n}.".into(),
      equal: "It is equal to {n}.".into(),
    }
  }
}

/// Every wording used by the engine, grouped by concept.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HintTemplates {
  pub factor: FactorTemplates,
  pub multiple: MultipleTemplates,
  pub prime: PrimeTemplates,
  pub even_odd: ParityTemplates,
  #[serde(deserialize_with = "square_templates")]
  pub perfect_square: PowerTemplates,
  #[serde(deserialize_with = "cube_templates")]
  pub perfect_cube: PowerTemplates,
  pub digit_sum: String,
  pub digit_length: String,
  pub greater_less: ComparisonTemplates,
}

impl Default for HintTemplates {
  fn default() -> Self {
    Self {
      factor: FactorTemplates::default(),
      multiple: MultipleTemplates::default(),
      prime: PrimeTemplates::default(),
      even_odd: ParityTemplates::default(),
      perfect_square: PowerTemplates::squares(),
      perfect_cube: PowerTemplates::cubes(),
      digit_sum: "The sum of its digits is {n}.".into(),
      digit_length: "It is a {n}-digit number.".into(),
      greater_less: ComparisonTemplates::default(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_toml_keeps_remaining_defaults() {
    let src = r#"
      digit_sum = "Its digits add up to {n}."

      [factor]
      count = "It has exactly {n} divisors."
    "#;
    let t: HintTemplates = toml::from_str(src).expect("templates");
    assert_eq!(t.digit_sum, "Its digits add up to {n}.");
    assert_eq!(t.factor.count, "It has exactly {n} divisors.");
    assert_eq!(t.factor.individual, "{n} is a factor.");
    assert_eq!(t.perfect_cube.overall, "It is a perfect cube.");
  }

  #[test]
  fn partial_power_table_keeps_its_digit_wording() {
    let src = r#"
      [perfect_square]
      overall = "It is a square."
    "#;
    let t: HintTemplates = toml::from_str(src).expect("templates");
    assert_eq!(t.perfect_square.overall, "It is a square.");
    assert_eq!(t.perfect_square.digits.all, "All of its digits are perfect squares.");
    assert_eq!(t.perfect_cube.overall, "It is a perfect cube.");
  }

  #[test]
  fn partial_digit_table_keeps_the_concept_wording() {
    let src = r#"
      [prime.digits]
      none = "No digit is prime."

      [perfect_cube.digits]
      some = "{n} digits are cubes."
    "#;
    let t: HintTemplates = toml::from_str(src).expect("templates");
    assert_eq!(t.prime.digits.none, "No digit is prime.");
    assert_eq!(t.prime.digits.one, "{n} of its digits is prime.");
    assert_eq!(t.prime.overall, "It is a prime number.");
    assert_eq!(t.perfect_cube.digits.some, "{n} digits are cubes.");
    assert_eq!(t.perfect_cube.digits.none, "None of its digits are perfect cubes.");
    assert_eq!(t.factor.digits.all, "All of its digits are factors.");
  }

  #[test]
  fn default_templates_hold_no_stray_digits() {
    let t = HintTemplates::default();
    let all: Vec<&str> = [
      t.factor.count.as_str(), t.factor.individual.as_str(), t.multiple.individual.as_str(),
      t.prime.overall.as_str(), t.prime.prime_factor_count.as_str(),
      t.even_odd.even.as_str(), t.even_odd.odd.as_str(),
      t.perfect_square.overall.as_str(), t.perfect_cube.overall.as_str(),
      t.digit_sum.as_str(), t.digit_length.as_str(),
      t.greater_less.greater.as_str(), t.greater_less.less.as_str(), t.greater_less.equal.as_str(),
    ]
    .into_iter()
    .chain(t.factor.digits.iter())
    .chain(t.prime.digits.iter())
    .chain(t.perfect_square.digits.iter())
    .chain(t.perfect_cube.digits.iter())
    .collect();
    for tpl in all {
      assert!(!tpl.chars().any(|c| c.is_ascii_digit()), "digit in template: {tpl}");
    }
  }
}
