//! Loading game configuration (range, cache, hint templates) from TOML.
//!
//! See `GameConfig` for the expected schema. Every section is optional.

use std::time::Duration;

use serde::Deserialize;
use tracing::{error, info};

use crate::templates::HintTemplates;

#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
  pub game: GameSettings,
  pub cache: CacheSettings,
  pub templates: HintTemplates,
}

/// Default range and guess allowance for new games.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameSettings {
  pub min: i64,
  pub max: i64,
  pub max_guesses: usize,
  /// Largest |n| accepted for a range bound, a hint lookup or an evaluated guess.
  /// Factoring is the dominant cost per number, so this caps it.
  pub max_magnitude: i64,
  /// How long a finished game stays readable (feedback, repeated quit) before eviction.
  pub finished_retention_secs: u64,
}

impl Default for GameSettings {
  fn default() -> Self {
    Self { min: 1, max: 100, max_guesses: 10, max_magnitude: 1_000_000, finished_retention_secs: 600 }
  }
}

impl GameSettings {
  pub fn within_bounds(&self, n: i64) -> bool {
    n.unsigned_abs() <= self.max_magnitude.unsigned_abs()
  }

  pub fn finished_retention(&self) -> Duration {
    Duration::from_secs(self.finished_retention_secs)
  }
}

/// Where hints are cached and which numbers are generated ahead of the first game.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
  /// JSON cache file; in-memory only when unset.
  pub path: Option<String>,
  pub precompute_min: i64,
  pub precompute_max: i64,
}

impl Default for CacheSettings {
  fn default() -> Self {
    Self { path: None, precompute_min: 1, precompute_max: 100 }
  }
}

/// Attempt to load `GameConfig` from GAME_CONFIG_PATH. Falls back to defaults on any error.
/// HINT_CACHE_PATH, when set, overrides `cache.path`.
pub fn load_game_config_from_env() -> GameConfig {
  let mut cfg = match std::env::var("GAME_CONFIG_PATH") {
    Ok(path) => load_game_config(&path).unwrap_or_default(),
    Err(_) => GameConfig::default(),
  };
  if let Ok(cache_path) = std::env::var("HINT_CACHE_PATH") {
    cfg.cache.path = Some(cache_path);
  }
  cfg
}

fn load_game_config(path: &str) -> Option<GameConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<GameConfig>(&s) {
      Ok(cfg) => {
        info!(target: "numguess_backend", %path, "Loaded game config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "numguess_backend", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "numguess_backend", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_config_uses_defaults() {
    let cfg: GameConfig = toml::from_str("").expect("config");
    assert_eq!(cfg.game.min, 1);
    assert_eq!(cfg.game.max, 100);
    assert_eq!(cfg.cache.precompute_max, 100);
    assert!(cfg.cache.path.is_none());
  }

  #[test]
  fn sections_override_independently() {
    let cfg: GameConfig = toml::from_str(
      r#"
        [game]
        max = 500

        [cache]
        path = "hints.json"

        [templates.prime]
        overall = "It is prime."
      "#,
    )
    .expect("config");
    assert_eq!(cfg.game.min, 1);
    assert_eq!(cfg.game.max, 500);
    assert_eq!(cfg.game.max_guesses, 10);
    assert_eq!(cfg.cache.path.as_deref(), Some("hints.json"));
    assert_eq!(cfg.templates.prime.overall, "It is prime.");
    assert_eq!(cfg.templates.prime.digits.all, "All of its digits are prime.");
  }

  #[test]
  fn partial_template_tables_keep_other_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("numguess.toml");
    std::fs::write(
      &path,
      r#"
        [game]
        max = 500

        [templates.perfect_square]
        overall = "It is a square."
      "#,
    )
    .expect("write");
    let cfg = load_game_config(path.to_str().expect("utf-8 path")).expect("parsed");
    assert_eq!(cfg.game.max, 500);
    assert_eq!(cfg.templates.perfect_square.overall, "It is a square.");
    assert_eq!(cfg.templates.perfect_square.digits.none, "None of its digits are perfect squares.");
  }

  #[test]
  fn magnitude_bound_is_symmetric() {
    let settings = GameSettings { max_magnitude: 1000, ..GameSettings::default() };
    assert!(settings.within_bounds(1000));
    assert!(settings.within_bounds(-1000));
    assert!(!settings.within_bounds(1001));
    assert!(!settings.within_bounds(i64::MIN));
  }

  #[test]
  fn unreadable_file_is_none() {
    assert!(load_game_config("/nonexistent/numguess.toml").is_none());
  }
}
