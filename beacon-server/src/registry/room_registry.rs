use crate::error::{JoinError, RegisterError};
use crate::registry::{ClientSender, Room};
use axum::extract::ws::Message;
use beacon_core::{ClientId, RoomId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a successful join negotiation.
#[derive(Debug, Clone)]
pub struct JoinTicket {
    pub client_id: ClientId,
    pub is_initiator: bool,
}

/// Two-party rooms. A third join is rejected rather than silently handed a
/// colliding initiator role.
const ROOM_CAPACITY: usize = 2;

/// Process-wide room registry.
///
/// Cloneable handle over shared state, owned by whoever builds the service.
/// Invariant: a room id is present in the map iff the room has at least one
/// pending join or active connection; every mutation that can empty a room
/// removes it in the same call.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, Room>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a client identity and a pending slot in `room_id`.
    ///
    /// The first client into a room (the entry is vacant) is not the
    /// initiator; anyone joining an existing room is. The rule looks only at
    /// room existence, which is equivalent to "first" because empty rooms
    /// never linger in the map.
    pub fn join(&self, room_id: &RoomId) -> Result<JoinTicket, JoinError> {
        match self.rooms.entry(room_id.clone()) {
            Entry::Occupied(mut entry) => {
                let room = entry.get_mut();
                if room.occupancy() >= ROOM_CAPACITY {
                    return Err(JoinError::RoomFull);
                }
                let client_id = room.insert_pending(true);
                Ok(JoinTicket {
                    client_id,
                    is_initiator: true,
                })
            }
            Entry::Vacant(entry) => {
                let mut room = Room::default();
                let client_id = room.insert_pending(false);
                entry.insert(room);
                info!("Created room {}", room_id);
                Ok(JoinTicket {
                    client_id,
                    is_initiator: false,
                })
            }
        }
    }

    /// Redeems a pending join, binding `tx` as the client's connection.
    ///
    /// The pending record is consumed; a replay of the same id (or an id
    /// that was never issued) is rejected and the caller must close the
    /// offending connection.
    pub fn register(
        &self,
        room_id: &RoomId,
        client_id: &ClientId,
        tx: ClientSender,
    ) -> Result<(), RegisterError> {
        let Some(mut room) = self.rooms.get_mut(room_id) else {
            return Err(RegisterError::UnknownRoom);
        };
        if room.take_pending(client_id).is_none() {
            return Err(RegisterError::UnknownClient);
        }
        room.bind(client_id.clone(), tx);
        Ok(())
    }

    /// Forwards `msg` unmodified to every other active connection in the
    /// sender's room.
    pub fn relay(&self, room_id: &RoomId, sender: &ClientId, msg: &Message) {
        let Some(room) = self.rooms.get(room_id) else {
            debug!("Dropping relay for vanished room {}", room_id);
            return;
        };
        let delivered = room.relay_from(sender, msg);
        debug!(
            "Relayed message from {} to {} peer(s) in room {}",
            sender, delivered, room_id
        );
    }

    /// Removes a connection from its room, deleting the room once it holds
    /// neither pending joins nor active connections. Safe to call when the
    /// room is already gone.
    pub fn disconnect(&self, room_id: &RoomId, client_id: &ClientId) {
        if let Some(mut room) = self.rooms.get_mut(room_id) {
            room.unbind(client_id);
        }
        // Re-checked under the entry lock: a join racing in between keeps
        // the room alive.
        if self.rooms.remove_if(room_id, |_, room| room.is_empty()).is_some() {
            info!("Removed empty room {}", room_id);
        }
    }

    /// Drops pending joins older than `ttl` and any rooms emptied by that.
    pub fn sweep_expired(&self, ttl: Duration) {
        let now = Instant::now();
        self.rooms.retain(|room_id, room| {
            let expired = room.sweep_pending(ttl, now);
            if expired > 0 {
                info!("Expired {} stale pending join(s) in room {}", expired, room_id);
            }
            !room.is_empty()
        });
    }

    pub fn contains_room(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn pending_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map_or(0, |r| r.pending_count())
    }

    pub fn active_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map_or(0, |r| r.active_count())
    }
}
