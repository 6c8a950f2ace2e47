use crate::config::ServerConfig;
use crate::error::JoinError;
use crate::registry::RoomRegistry;
use beacon_core::{IceServerList, JoinParams, RoomId};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::info;

struct SignalingInner {
    registry: RoomRegistry,
    ice_servers: IceServerList,
    fallback_host: String,
    pending_ttl: Duration,
}

/// Application-facing facade over the room registry: join negotiation, ICE
/// configuration, and the pending-join sweeper. Cheap to clone; all clones
/// share the same registry.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new(config: &ServerConfig) -> Self {
        let fallback_host = config
            .public_host
            .clone()
            .unwrap_or_else(|| format!("localhost:{}", config.port));

        Self {
            inner: Arc::new(SignalingInner {
                registry: RoomRegistry::new(),
                ice_servers: IceServerList {
                    ice_servers: config.ice_servers.clone(),
                },
                fallback_host,
                pending_ttl: config.pending_ttl,
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    pub fn get_ice_servers(&self) -> IceServerList {
        self.inner.ice_servers.clone()
    }

    /// Negotiates a join: allocates a client identity and pending slot, and
    /// builds the connection endpoints from the requesting host.
    pub fn join(&self, room_id: &RoomId, request_host: Option<&str>) -> Result<JoinParams, JoinError> {
        let ticket = self.inner.registry.join(room_id)?;
        let host = request_host.unwrap_or(&self.inner.fallback_host);

        info!(
            "Client {} joined room {} (initiator: {})",
            ticket.client_id, room_id, ticket.is_initiator
        );

        Ok(JoinParams::new(
            ticket.client_id.to_string(),
            ticket.is_initiator,
            room_id.to_string(),
            host,
        ))
    }

    /// Spawns the background sweep for join tickets that never registered a
    /// connection.
    pub fn spawn_sweeper(&self) -> JoinHandle<()> {
        let registry = self.inner.registry.clone();
        let ttl = self.inner.pending_ttl;
        let period = (ttl / 2).max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                registry.sweep_expired(ttl);
            }
        })
    }
}
