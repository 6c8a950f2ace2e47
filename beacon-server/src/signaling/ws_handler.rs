use crate::signaling::{ClientSession, SessionAction, SignalingService};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::info;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, service))
}

async fn handle_socket(socket: WebSocket, service: SignalingService) {
    info!("New WebSocket connection");

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut session = ClientSession::new(service.registry().clone(), tx);

    // Frames are handled strictly in arrival order, so a register is always
    // applied before any later payload from the same connection is relayed.
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Close(_) => break,
            Message::Ping(_) | Message::Pong(_) => {}
            msg => {
                if session.handle_frame(msg) == SessionAction::Close {
                    break;
                }
            }
        }
    }

    session.disconnect();
    send_task.abort();
    info!("WebSocket disconnected");
}
