use serde::{Deserialize, Serialize};

/// Body of a successful `/join` response.
///
/// `is_initiator` is serialized as the literal strings `"true"`/`"false"`,
/// which is what existing clients expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinParams {
    pub client_id: String,
    pub is_initiator: String,
    pub room_id: String,
    pub wss_url: String,
    pub wss_post_url: String,
    pub ice_server_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinResponse {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<JoinParams>,
}

impl JoinResponse {
    pub fn success(params: JoinParams) -> Self {
        Self {
            result: "SUCCESS".to_string(),
            params: Some(params),
        }
    }

    pub fn error(result: &str) -> Self {
        Self {
            result: result.to_string(),
            params: None,
        }
    }
}

impl JoinParams {
    pub fn new(client_id: String, is_initiator: bool, room_id: String, host: &str) -> Self {
        Self {
            client_id,
            is_initiator: is_initiator.to_string(),
            room_id,
            wss_url: format!("wss://{host}/ws"),
            wss_post_url: format!("https://{host}"),
            ice_server_url: format!("https://{host}/ice"),
        }
    }
}
