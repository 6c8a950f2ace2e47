use axum::extract::ws::Message;
use beacon_core::ClientId;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Outbound handle of a live connection. The registry references these; the
/// socket task owns the receiving end and the connection itself.
pub type ClientSender = mpsc::UnboundedSender<Message>;

/// A join ticket that has been issued but not yet redeemed by a `register`
/// on the signaling channel.
#[derive(Debug)]
pub struct PendingJoin {
    pub is_initiator: bool,
    pub created_at: Instant,
}

/// Per-room state: pending joins plus the active connections relaying for
/// this room. The registry drops the room as soon as both are empty.
#[derive(Default)]
pub struct Room {
    pending: HashMap<ClientId, PendingJoin>,
    clients: HashMap<ClientId, ClientSender>,
}

impl Room {
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.clients.is_empty()
    }

    /// Pending and active participants together; this is what the capacity
    /// check counts, so an unredeemed ticket still holds its slot.
    pub fn occupancy(&self) -> usize {
        self.pending.len() + self.clients.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn active_count(&self) -> usize {
        self.clients.len()
    }

    /// Issues a fresh pending join, regenerating the id until it collides
    /// with nothing currently in this room.
    pub fn insert_pending(&mut self, is_initiator: bool) -> ClientId {
        loop {
            let client_id = ClientId::generate();
            if self.pending.contains_key(&client_id) || self.clients.contains_key(&client_id) {
                continue;
            }
            self.pending.insert(
                client_id.clone(),
                PendingJoin {
                    is_initiator,
                    created_at: Instant::now(),
                },
            );
            return client_id;
        }
    }

    pub fn take_pending(&mut self, client_id: &ClientId) -> Option<PendingJoin> {
        self.pending.remove(client_id)
    }

    pub fn bind(&mut self, client_id: ClientId, tx: ClientSender) {
        self.clients.insert(client_id, tx);
    }

    pub fn unbind(&mut self, client_id: &ClientId) {
        self.clients.remove(client_id);
    }

    /// Forwards `msg` to every active connection except the sender.
    /// Returns the number of recipients the message was queued for.
    pub fn relay_from(&self, sender: &ClientId, msg: &Message) -> usize {
        let mut delivered = 0;
        for (client_id, tx) in &self.clients {
            if client_id == sender {
                continue;
            }
            if tx.send(msg.clone()).is_ok() {
                delivered += 1;
            }
        }
        delivered
    }

    /// Drops pending joins older than `ttl`. Returns how many were removed.
    pub fn sweep_pending(&mut self, ttl: Duration, now: Instant) -> usize {
        let before = self.pending.len();
        self.pending
            .retain(|_, pending| now.duration_since(pending.created_at) < ttl);
        before - self.pending.len()
    }
}
