//! Math concepts: the closed set of properties hints are written about.
//!
//! Each concept is built for one number and answers three questions:
//!   - does the property mean anything for this number (`include_concept`)
//!   - which hint strings describe the number (`generate_hints`)
//!   - does this number conform to a hint rendered earlier for some other
//!     number (`evaluate_guess`), working only from the hint's text
//!
//! `Concept` is the tagged union the registry holds; the per-kind logic lives
//! in the submodules.

use rand::seq::index;
use rand::Rng;
use tracing::warn;

use crate::domain::{ConceptKind, Feedback};
use crate::templates::HintTemplates;

pub mod compare;
pub mod digits;
pub mod factor;
pub mod multiple;
pub mod parity;
pub mod powers;
pub mod prime;

use compare::GreaterLess;
use digits::{DigitLength, DigitSum};
use factor::Factor;
use multiple::Multiple;
use parity::EvenOdd;
use powers::{PerfectPower, Power};
use prime::Prime;

/// Upper bound on hints a multi-candidate concept discloses per number.
pub const MAX_CANDIDATE_HINTS: usize = 2;

/// How many candidates multi-valued concepts render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintMode {
  /// Random sample of at most `MAX_CANDIDATE_HINTS` candidates (game play).
  Filtered,
  /// Every candidate (cache entries, a guess's own hint set).
  Unfiltered,
}

/// Interface shared by every concept.
pub trait MathConcept {
  fn include_concept(&self) -> bool;

  fn generate_hints<R: Rng + ?Sized>(&self, mode: HintMode, rng: &mut R) -> Vec<String>;

  /// Whether the concept's number conforms to `hint_text`.
  /// `None` when the text is not one of this concept's forms.
  fn conforms(&self, hint_text: &str) -> Option<bool>;
}

/// Keep every candidate, or a uniform sample of `MAX_CANDIDATE_HINTS` in original order.
pub fn pick_candidates<T, R: Rng + ?Sized>(candidates: Vec<T>, mode: HintMode, rng: &mut R) -> Vec<T> {
  if mode == HintMode::Unfiltered || candidates.len() <= MAX_CANDIDATE_HINTS {
    return candidates;
  }
  let picked = index::sample(rng, candidates.len(), MAX_CANDIDATE_HINTS).into_vec();
  candidates
    .into_iter()
    .enumerate()
    .filter(|(i, _)| picked.contains(i))
    .map(|(_, c)| c)
    .collect()
}

pub enum Concept<'t> {
  Factor(Factor<'t>),
  Multiple(Multiple<'t>),
  Prime(Prime<'t>),
  EvenOdd(EvenOdd<'t>),
  PerfectSquare(PerfectPower<'t>),
  PerfectCube(PerfectPower<'t>),
  DigitSum(DigitSum<'t>),
  DigitLength(DigitLength<'t>),
  GreaterLess(GreaterLess<'t>),
}

macro_rules! dispatch {
  ($concept:expr, $inner:ident => $body:expr) => {
    match $concept {
      Concept::Factor($inner) => $body,
      Concept::Multiple($inner) => $body,
      Concept::Prime($inner) => $body,
      Concept::EvenOdd($inner) => $body,
      Concept::PerfectSquare($inner) => $body,
      Concept::PerfectCube($inner) => $body,
      Concept::DigitSum($inner) => $body,
      Concept::DigitLength($inner) => $body,
      Concept::GreaterLess($inner) => $body,
    }
  };
}

impl<'t> Concept<'t> {
  pub fn new(kind: ConceptKind, number: i64, templates: &'t HintTemplates) -> Self {
    match kind {
      ConceptKind::Factor => Concept::Factor(Factor::new(number, &templates.factor)),
      ConceptKind::Multiple => Concept::Multiple(Multiple::new(number, &templates.multiple)),
      ConceptKind::Prime => Concept::Prime(Prime::new(number, &templates.prime)),
      ConceptKind::EvenOdd => Concept::EvenOdd(EvenOdd::new(number, &templates.even_odd)),
      ConceptKind::PerfectSquare => {
        Concept::PerfectSquare(PerfectPower::new(Power::Square, number, &templates.perfect_square))
      }
      ConceptKind::PerfectCube => {
        Concept::PerfectCube(PerfectPower::new(Power::Cube, number, &templates.perfect_cube))
      }
      ConceptKind::DigitSum => Concept::DigitSum(DigitSum::new(number, &templates.digit_sum)),
      ConceptKind::DigitLength => Concept::DigitLength(DigitLength::new(number, &templates.digit_length)),
      ConceptKind::GreaterLess => Concept::GreaterLess(GreaterLess::new(number, &templates.greater_less)),
    }
  }

  pub fn kind(&self) -> ConceptKind {
    match self {
      Concept::Factor(_) => ConceptKind::Factor,
      Concept::Multiple(_) => ConceptKind::Multiple,
      Concept::Prime(_) => ConceptKind::Prime,
      Concept::EvenOdd(_) => ConceptKind::EvenOdd,
      Concept::PerfectSquare(_) => ConceptKind::PerfectSquare,
      Concept::PerfectCube(_) => ConceptKind::PerfectCube,
      Concept::DigitSum(_) => ConceptKind::DigitSum,
      Concept::DigitLength(_) => ConceptKind::DigitLength,
      Concept::GreaterLess(_) => ConceptKind::GreaterLess,
    }
  }

  pub fn include_concept(&self) -> bool {
    dispatch!(self, c => c.include_concept())
  }

  pub fn generate_hints<R: Rng + ?Sized>(&self, mode: HintMode, rng: &mut R) -> Vec<String> {
    dispatch!(self, c => c.generate_hints(mode, rng))
  }

  /// Judge the concept's number (the guess) against a hint rendered for another number.
  pub fn evaluate_guess(&self, hint_text: &str) -> Feedback {
    match dispatch!(self, c => c.conforms(hint_text)) {
      Some(ok) => Feedback::from_bool(ok),
      None => {
        warn!(target: "hints", concept = %self.kind(), hint = hint_text, "Hint text fits none of the concept's templates");
        Feedback::Bad
      }
    }
  }
}
