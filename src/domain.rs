//! Domain models: concept kinds, hints, feedback and game status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownConcept;

/// The closed roster of math concepts a hint can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
  Factor,
  Multiple,
  Prime,
  EvenOdd,
  PerfectSquare,
  PerfectCube,
  DigitSum,
  DigitLength,
  /// Only ever used as the fallback once the pools are empty.
  GreaterLess,
}

impl ConceptKind {
  /// Rendering order during hint generation.
  pub const GENERATION_ORDER: [ConceptKind; 8] = [
    ConceptKind::Factor,
    ConceptKind::Multiple,
    ConceptKind::Prime,
    ConceptKind::EvenOdd,
    ConceptKind::PerfectSquare,
    ConceptKind::PerfectCube,
    ConceptKind::DigitSum,
    ConceptKind::DigitLength,
  ];

  pub fn name(self) -> &'static str {
    match self {
      ConceptKind::Factor => "factor",
      ConceptKind::Multiple => "multiple",
      ConceptKind::Prime => "prime",
      ConceptKind::EvenOdd => "even_odd",
      ConceptKind::PerfectSquare => "perfect_square",
      ConceptKind::PerfectCube => "perfect_cube",
      ConceptKind::DigitSum => "digit_sum",
      ConceptKind::DigitLength => "digit_length",
      ConceptKind::GreaterLess => "greater_less",
    }
  }

  /// Whether guesses judged against this concept feed the player's coaching records.
  /// Perfect cubes are generated and evaluated but deliberately kept out.
  pub fn offers_feedback(self) -> bool {
    !matches!(self, ConceptKind::PerfectCube | ConceptKind::GreaterLess)
  }
}

impl fmt::Display for ConceptKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ConceptKind {
  type Err = UnknownConcept;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ConceptKind::GENERATION_ORDER
      .into_iter()
      .chain([ConceptKind::GreaterLess])
      .find(|k| k.name() == s)
      .ok_or_else(|| UnknownConcept(s.to_string()))
  }
}

/// A rendered hint. The text is the only record of what the hint says.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
  pub concept: ConceptKind,
  pub text: String,
}

impl Hint {
  pub fn new(concept: ConceptKind, text: impl Into<String>) -> Self {
    Self { concept, text: text.into() }
  }
}

/// Does a guess still conform to a hint?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
  Good,
  Bad,
}

impl Feedback {
  pub fn from_bool(conforms: bool) -> Self {
    if conforms { Feedback::Good } else { Feedback::Bad }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
  InProgress,
  Won,
  Lost,
  Quit,
}
