//! WebSocket upgrade + message loop. Each client message is parsed as JSON and
//! forwarded to core logic. We reply with a single JSON message per request.

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument, warn};

use crate::logic::*;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::state::AppState;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "numguess_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "numguess_backend", "WebSocket connected");
  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "numguess_backend", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &state).await
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "numguess_backend", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(target: "numguess_backend", "WebSocket disconnected");
}

#[instrument(level = "info", skip(state))]
async fn handle_client_ws(msg: ClientWsMessage, state: &AppState) -> ServerWsMessage {
  let reply = match msg {
    ClientWsMessage::Ping => Ok(ServerWsMessage::Pong),

    ClientWsMessage::NewGame { min, max } => start_game(state, min, max).await.map(|game| {
      info!(target: "game", id = %game.game_id, "WS new_game served");
      ServerWsMessage::Game { game }
    }),

    ClientWsMessage::Guess { game_id, guess } => submit_guess(state, &game_id, &guess)
      .await
      .map(|outcome| ServerWsMessage::GuessResult { outcome }),

    ClientWsMessage::Quit { game_id } => quit_game(state, &game_id)
      .await
      .map(|secret| ServerWsMessage::Quit { secret }),

    ClientWsMessage::Feedback { game_id } => game_feedback(state, &game_id)
      .await
      .map(|records| ServerWsMessage::Feedback { records }),

    ClientWsMessage::Evaluate { concept, guess, hint } => evaluate_hint(state, &concept, guess, &hint)
      .map(|feedback| ServerWsMessage::Evaluation { feedback }),

    ClientWsMessage::Hints { number, filtered } => {
      hints_for(state, number, filtered).map(|hints| ServerWsMessage::Hints { number, hints })
    }
  };

  reply.unwrap_or_else(|e| {
    warn!(target: "game", error = %e, "WS request rejected");
    ServerWsMessage::Error { message: e.to_string() }
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::MemoryHintCache;
  use crate::config::GameConfig;

  fn state() -> AppState {
    AppState::from_parts(GameConfig::default(), Arc::new(MemoryHintCache::new()))
  }

  #[tokio::test]
  async fn ping_and_errors() {
    let state = state();
    assert!(matches!(handle_client_ws(ClientWsMessage::Ping, &state).await, ServerWsMessage::Pong));
    let reply = handle_client_ws(ClientWsMessage::Quit { game_id: "gone".into() }, &state).await;
    assert!(matches!(reply, ServerWsMessage::Error { .. }));
  }

  #[tokio::test]
  async fn message_shapes_parse() {
    let msg: ClientWsMessage =
      serde_json::from_str(r#"{"type":"guess","gameId":"abc","guess":"12"}"#).expect("parse");
    assert!(matches!(msg, ClientWsMessage::Guess { ref game_id, .. } if game_id == "abc"));

    let state = state();
    let reply = handle_client_ws(ClientWsMessage::NewGame { min: Some(3), max: Some(3) }, &state).await;
    let json = serde_json::to_value(&reply).expect("serialize");
    assert_eq!(json["type"], "game");
    assert_eq!(json["game"]["min"], 3);
  }
}
