use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

impl IceServerConfig {
    /// A public STUN entry with no credentials.
    pub fn stun(url: &str) -> Self {
        Self {
            urls: vec![url.to_string()],
            username: None,
            credential: None,
        }
    }
}

/// Response document for ICE server discovery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceServerList {
    #[serde(rename = "iceServers")]
    pub ice_servers: Vec<IceServerConfig>,
}
