//! Number guessing backend
//!
//! - Hint engine: math concepts render natural-language hints for a secret
//!   number and judge guesses against them
//! - Game sessions with a hint pool that demotes hints a guess already satisfies
//! - Axum HTTP + WebSocket API
//!
//! Important env variables:
//!   PORT             : u16 (default 3000)
//!   GAME_CONFIG_PATH : path to TOML config ([game], [cache], [templates])
//!   HINT_CACHE_PATH  : JSON hint cache file (overrides [cache].path)
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

mod telemetry;
mod util;
mod math;
mod templates;
mod codec;
mod domain;
mod error;
mod concepts;
mod cache;
mod registry;
mod pool;
mod evaluator;
mod game;
mod config;
mod state;
mod protocol;
mod logic;
mod routes;

use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::routes::build_router;
use crate::state::AppState;

#[instrument(level = "info", skip_all)]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  // Config load, cache open and precompute touch the disk; keep them off the runtime threads.
  let state = Arc::new(tokio::task::spawn_blocking(AppState::new).await?);

  let app = build_router(state.clone());

  let addr: SocketAddr = std::env::var("PORT")
    .ok()
    .and_then(|p| p.parse::<u16>().ok())
    .map(|port| SocketAddr::from(([0, 0, 0, 0], port)))
    .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

  let listener = TcpListener::bind(addr).await?;
  info!(target: "numguess_backend", %addr, "HTTP server listening");
  axum::serve(listener, app).await?;
  Ok(())
}
