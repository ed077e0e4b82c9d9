//! Hint pools for one game: relevant, redundant and given.
//!
//! Hints only ever move forward: relevant → redundant, and either → given.
//! A guess demotes every relevant hint it already satisfies, since showing it
//! would not separate the secret from that guess.

use rand::Rng;
use tracing::debug;

use crate::domain::Hint;

#[derive(Debug, Default)]
pub struct HintPoolManager {
  relevant: Vec<Hint>,
  redundant: Vec<Hint>,
  given: Vec<Hint>,
}

impl HintPoolManager {
  /// Every generated hint starts out relevant.
  pub fn new(hints: Vec<Hint>) -> Self {
    let mut relevant: Vec<Hint> = Vec::with_capacity(hints.len());
    for h in hints {
      if !relevant.contains(&h) {
        relevant.push(h);
      }
    }
    Self { relevant, redundant: Vec::new(), given: Vec::new() }
  }

  pub fn relevant(&self) -> &[Hint] {
    &self.relevant
  }

  pub fn redundant(&self) -> &[Hint] {
    &self.redundant
  }

  /// Disclosed hints, oldest first.
  pub fn given(&self) -> &[Hint] {
    &self.given
  }

  pub fn last_given(&self) -> Option<&Hint> {
    self.given.last()
  }

  /// Move relevant hints whose text also appears in `guess_hints` to redundant.
  /// Returns how many moved.
  pub fn demote_satisfied(&mut self, guess_hints: &[Hint]) -> usize {
    let (satisfied, still_relevant): (Vec<Hint>, Vec<Hint>) = std::mem::take(&mut self.relevant)
      .into_iter()
      .partition(|h| guess_hints.iter().any(|g| g.text == h.text));
    self.relevant = still_relevant;
    let moved = satisfied.len();
    self.redundant.extend(satisfied);
    if moved > 0 {
      debug!(target: "game", moved, relevant = self.relevant.len(), redundant = self.redundant.len(), "Hints demoted");
    }
    moved
  }

  /// Draw the next hint: uniformly from relevant, else from redundant.
  /// `None` once both are empty; the caller falls back to a comparison.
  pub fn next_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Hint> {
    let pool = if !self.relevant.is_empty() {
      &mut self.relevant
    } else if !self.redundant.is_empty() {
      &mut self.redundant
    } else {
      return None;
    };
    let hint = pool.swap_remove(rng.gen_range(0..pool.len()));
    self.given.push(hint.clone());
    Some(hint)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ConceptKind;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn multiple(text: &str) -> Hint {
    Hint::new(ConceptKind::Multiple, text)
  }

  fn assert_disjoint(pools: &HintPoolManager) {
    for h in pools.relevant() {
      assert!(!pools.redundant().contains(h), "{h:?} in both pools");
    }
  }

  #[test]
  fn guess_demotes_hints_it_satisfies() {
    let mut pools = HintPoolManager::new(vec![multiple("12 is a multiple."), multiple("18 is a multiple.")]);
    let six_own = vec![multiple("12 is a multiple."), multiple("18 is a multiple."), multiple("24 is a multiple.")];
    assert_eq!(pools.demote_satisfied(&six_own), 2);
    assert!(pools.relevant().is_empty());
    assert_eq!(pools.redundant().len(), 2);
    assert_disjoint(&pools);
  }

  #[test]
  fn draws_relevant_then_redundant_then_none() {
    let mut rng = StdRng::seed_from_u64(11);
    let odd = Hint::new(ConceptKind::EvenOdd, "It is an odd number.");
    let prime = Hint::new(ConceptKind::Prime, "It is a prime number.");
    let mut pools = HintPoolManager::new(vec![odd.clone(), prime.clone()]);
    pools.demote_satisfied(&[odd.clone()]);

    assert_eq!(pools.next_hint(&mut rng), Some(prime.clone()));
    assert_eq!(pools.next_hint(&mut rng), Some(odd.clone()));
    assert_eq!(pools.next_hint(&mut rng), None);
    assert_eq!(pools.given(), &[prime, odd.clone()]);
    assert_eq!(pools.last_given(), Some(&odd));
  }

  #[test]
  fn given_only_grows_and_pools_stay_disjoint() {
    let mut rng = StdRng::seed_from_u64(2);
    let hints: Vec<Hint> = (2..=10).map(|k| multiple(&format!("{} is a multiple.", 7 * k))).collect();
    let mut pools = HintPoolManager::new(hints.clone());
    let mut seen = 0;
    for round in 0..hints.len() {
      pools.demote_satisfied(&hints[round..round + 1]);
      assert_disjoint(&pools);
      assert!(pools.next_hint(&mut rng).is_some());
      assert_eq!(pools.given().len(), seen + 1);
      seen += 1;
      assert_eq!(pools.relevant().len() + pools.redundant().len() + pools.given().len(), hints.len());
    }
  }
}
