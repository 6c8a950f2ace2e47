use beacon_core::IceServerConfig;
use std::env;
use std::time::Duration;

pub const DEFAULT_STUN_URL: &str = "stun:stun.l.google.com:19302";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PENDING_TTL_SECS: u64 = 300;

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port (`PORT`, default 8080).
    pub port: u16,
    /// External host used for callback URLs when a request carries no
    /// usable Host header (`BEACON_PUBLIC_HOST`).
    pub public_host: Option<String>,
    /// ICE servers returned by `/ice`. Always starts with a public STUN
    /// entry; a TURN entry is appended when `TURN_URL` is set.
    pub ice_servers: Vec<IceServerConfig>,
    /// Expiry for join tickets that never register a connection
    /// (`BEACON_PENDING_TTL_SECS`, default 300).
    pub pending_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            public_host: None,
            ice_servers: vec![IceServerConfig::stun(DEFAULT_STUN_URL)],
            pending_ttl: Duration::from_secs(DEFAULT_PENDING_TTL_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.port = port;
        }

        config.public_host = env::var("BEACON_PUBLIC_HOST").ok();

        if let Ok(turn_url) = env::var("TURN_URL") {
            config.ice_servers.push(IceServerConfig {
                urls: vec![turn_url],
                username: env::var("TURN_USERNAME").ok(),
                credential: env::var("TURN_CREDENTIAL").ok(),
            });
        }

        if let Some(secs) = env::var("BEACON_PENDING_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.pending_ttl = Duration::from_secs(secs);
        }

        config
    }
}
