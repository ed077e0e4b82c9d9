//! Application state: the concept registry with its hint cache, and the game store.
//!
//! This module owns:
//!   - the registry (templates + injected hint cache)
//!   - live game sessions by id
//!   - default game settings (from TOML or defaults)
//!
//! The cache is a JSON file when configured, otherwise in memory. Either way the
//! configured range is precomputed at startup so the first games skip generation.

use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::cache::{FileHintCache, HintCache, MemoryHintCache};
use crate::config::{load_game_config_from_env, GameConfig, GameSettings};
use crate::game::GameSession;
use crate::registry::ConceptRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ConceptRegistry>,
    pub games: Arc<RwLock<HashMap<String, GameSession>>>,
    pub settings: GameSettings,
}

impl AppState {
    /// Build state from env: load config, open the hint cache, precompute its range.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_game_config_from_env();

        let cache: Arc<dyn HintCache> = match &cfg.cache.path {
            Some(path) => match FileHintCache::open(path) {
                Ok(c) => Arc::new(c),
                Err(e) => {
                    error!(target: "numguess_backend", %path, error = %e, "Cannot open hint cache file; using in-memory cache");
                    Arc::new(MemoryHintCache::new())
                }
            },
            None => {
                info!(target: "numguess_backend", "No hint cache file configured; using in-memory cache");
                Arc::new(MemoryHintCache::new())
            }
        };

        let state = Self::from_parts(cfg.clone(), cache);
        let generated = state
            .registry
            .precompute(cfg.cache.precompute_min..=cfg.cache.precompute_max);
        info!(
            target: "numguess_backend",
            min = cfg.game.min,
            max = cfg.game.max,
            max_guesses = cfg.game.max_guesses,
            precomputed = generated,
            "Game engine ready"
        );
        state
    }

    /// Assemble state around an existing cache without touching the environment.
    pub fn from_parts(cfg: GameConfig, cache: Arc<dyn HintCache>) -> Self {
        Self {
            registry: Arc::new(ConceptRegistry::new(cfg.templates, cache)),
            games: Arc::new(RwLock::new(HashMap::new())),
            settings: cfg.game,
        }
    }
}
