//! WebSocket upgrade handler for leave notifications.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{debug, info, warn};

use crate::state::AppState;

/// GET /ws
///
/// Listeners are anonymous. Inbound text frames are ignored.
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_listener(state, socket))
}

/// Drives one listener from `Open` until the socket or the bus closes it.
async fn handle_listener(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = state.bus.connect();
    let listener_id = handle.id;
    handle.mark_open();
    drop(handle);

    info!(listener_id = %listener_id, "Listener connected");

    let mut outbound_task = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            if ws_tx.send(Message::Text(frame.into())).await.is_err() {
                return;
            }
        }
        // The bus dropped our sender: shutdown or explicit disconnect.
        let _ = ws_tx.send(Message::Close(None)).await;
    });

    let mut inbound_task = tokio::spawn(async move {
        while let Some(result) = ws_rx.next().await {
            match result {
                Ok(Message::Close(_)) => break,
                Ok(Message::Text(text)) => {
                    debug!(
                        listener_id = %listener_id,
                        len = text.as_str().len(),
                        "Ignoring client frame"
                    );
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(listener_id = %listener_id, error = %e, "WebSocket error");
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut outbound_task => inbound_task.abort(),
        _ = &mut inbound_task => outbound_task.abort(),
    }

    state.bus.disconnect(&listener_id);

    info!(listener_id = %listener_id, "Listener disconnected");
}
