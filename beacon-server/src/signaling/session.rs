use crate::registry::{ClientSender, RoomRegistry};
use axum::extract::ws::Message;
use beacon_core::{ClientCommand, ClientId, EnvelopeError, RoomId};
use tracing::{debug, info, warn};

/// What the socket task should do after a frame has been handled.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    /// Fail closed: terminate the connection.
    Close,
}

enum SessionState {
    /// Connection accepted, no room/client association yet.
    Unbound,
    /// Registered; both ids are fixed for the rest of the connection.
    Bound { room_id: RoomId, client_id: ClientId },
    /// Terminal; cleanup has already run.
    Closed,
}

/// Per-connection signaling state machine.
///
/// Owns the connection's protocol state and drives the registry; the socket
/// task feeds it frames and honors the returned action. Separate from the
/// WebSocket plumbing so tests can drive it over plain channels.
pub struct ClientSession {
    registry: RoomRegistry,
    tx: ClientSender,
    state: SessionState,
}

impl ClientSession {
    pub fn new(registry: RoomRegistry, tx: ClientSender) -> Self {
        Self {
            registry,
            tx,
            state: SessionState::Unbound,
        }
    }

    pub fn handle_frame(&mut self, msg: Message) -> SessionAction {
        match &msg {
            Message::Text(text) => match ClientCommand::parse(text.as_str()) {
                Ok(ClientCommand::Register { room_id, client_id }) => {
                    self.handle_register(&room_id, &client_id)
                }
                Ok(ClientCommand::Signal) => self.relay(&msg),
                // An incomplete register is a protocol violation, not noise:
                // fail closed no matter the session state.
                Err(e @ EnvelopeError::MissingField(_)) => {
                    warn!("Rejecting incomplete register command: {}", e);
                    SessionAction::Close
                }
                Err(e) => match &self.state {
                    // The one soft-fail: a bad frame must not kill an
                    // already-registered channel.
                    SessionState::Bound { client_id, .. } => {
                        warn!("Dropping malformed frame from {}: {}", client_id, e);
                        SessionAction::Continue
                    }
                    _ => {
                        debug!("Dropping unparseable frame from unregistered connection: {}", e);
                        SessionAction::Continue
                    }
                },
            },
            // Binary payloads are opaque like any non-register message.
            Message::Binary(_) => self.relay(&msg),
            _ => SessionAction::Continue,
        }
    }

    fn handle_register(&mut self, raw_room: &str, raw_client: &str) -> SessionAction {
        match &self.state {
            SessionState::Unbound => {}
            SessionState::Bound { client_id, .. } => {
                warn!("Client {} attempted to re-register", client_id);
                return SessionAction::Close;
            }
            SessionState::Closed => return SessionAction::Close,
        }

        let Ok(room_id) = RoomId::parse(raw_room) else {
            warn!("Rejecting registration with empty room id");
            return SessionAction::Close;
        };
        let client_id = ClientId::from(raw_client);

        match self.registry.register(&room_id, &client_id, self.tx.clone()) {
            Ok(()) => {
                info!("Client {} bound to room {}", client_id, room_id);
                self.state = SessionState::Bound { room_id, client_id };
                SessionAction::Continue
            }
            Err(e) => {
                warn!(
                    "Rejecting registration for room {} / client {}: {}",
                    room_id, client_id, e
                );
                SessionAction::Close
            }
        }
    }

    fn relay(&self, msg: &Message) -> SessionAction {
        match &self.state {
            SessionState::Bound { room_id, client_id } => {
                self.registry.relay(room_id, client_id, msg);
            }
            _ => {
                debug!("Dropping message from unregistered connection");
            }
        }
        SessionAction::Continue
    }

    /// Cleanup coordinator hook: unbinds the connection and lets the
    /// registry drop the room once empty. Idempotent — the state is taken
    /// on the first call, and `Drop` routes through here as well.
    pub fn disconnect(&mut self) {
        if let SessionState::Bound { room_id, client_id } =
            std::mem::replace(&mut self.state, SessionState::Closed)
        {
            self.registry.disconnect(&room_id, &client_id);
            info!("Client {} left room {}", client_id, room_id);
        }
    }
}

impl Drop for ClientSession {
    fn drop(&mut self) {
        self.disconnect();
    }
}
