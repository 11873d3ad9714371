//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ChatSession, ConnectionId, SessionCommand},
    infrastructure::dto::conversion::decode_frame,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives lines from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: lines fanned out by the listener
/// (via the registry's sender) are written to this client's WebSocket connection,
/// one text frame per line.
///
/// # Arguments
///
/// * `rx` - Channel receiver fed by the connection registry
/// * `sender` - WebSocket sink to send lines to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(line) = rx.recv().await {
            if sender.send(Message::Text(line.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive fanned-out lines
    let (tx, rx) = mpsc::unbounded_channel();

    // Registered unbound; the init frame binds the identity later
    let connection_id = state.connect_client_usecase.execute(tx).await;
    tracing::info!("Connection '{}' opened", connection_id);

    let state_clone = state.clone();

    // Spawn a task to receive frames from this client
    let mut recv_task = tokio::spawn(async move {
        let mut session = ChatSession::new();

        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_frame(&state_clone, &connection_id, &mut session, text.as_str()).await;
                }
                Message::Binary(bytes) => match std::str::from_utf8(&bytes) {
                    Ok(text) => {
                        handle_frame(&state_clone, &connection_id, &mut session, text).await;
                    }
                    Err(e) => {
                        tracing::warn!("Discarding non UTF-8 frame from '{}': {}", connection_id, e);
                    }
                },
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", connection_id);
                    break;
                }
                _ => {}
            }
        }

        session.close();
    });

    // Spawn a task to push fanned-out lines to this client
    let mut send_task = pusher_loop(rx, sender);

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    if state.disconnect_client_usecase.execute(&connection_id).await {
        tracing::info!("Connection '{}' closed and unregistered", connection_id);
    } else {
        tracing::debug!(
            "Connection '{}' closed, already pruned by fan-out",
            connection_id
        );
    }
}

/// Decode one inbound frame and act on it according to the session state.
async fn handle_frame(
    state: &AppState,
    connection_id: &ConnectionId,
    session: &mut ChatSession,
    payload: &str,
) {
    let frame = match decode_frame(payload) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Discarding malformed frame from '{}': {}", connection_id, e);
            return;
        }
    };

    match session.handle(frame) {
        SessionCommand::Bind {
            identity_token,
            claimed_name,
        } => {
            match state
                .bind_identity_usecase
                .execute(connection_id, identity_token.clone(), &claimed_name)
                .await
            {
                Ok(display_name) => {
                    tracing::info!(
                        "Connection '{}' bound to user '{}' as '{}'",
                        connection_id,
                        identity_token.as_str(),
                        display_name
                    );
                    session.bind(identity_token, display_name);
                }
                Err(e) => {
                    tracing::warn!("Failed to bind identity on '{}': {}", connection_id, e);
                }
            }
        }
        SessionCommand::Publish(line) => {
            tracing::debug!("Chat from '{}': {}", connection_id, line);
            state.send_chat_usecase.execute(&line).await;
        }
        SessionCommand::Ignore => {
            tracing::debug!(
                "Ignoring frame from '{}' in state {:?}",
                connection_id,
                session.state()
            );
        }
    }
}
