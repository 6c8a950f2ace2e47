use serde::Deserialize;
use thiserror::Error;

/// Outcome of sniffing the outer envelope of a client text frame.
///
/// The relay only ever looks deep enough to tell a `register` control frame
/// apart from everything else. Anything that is valid JSON but not a
/// register command is an opaque signal and is forwarded byte-for-byte.
#[derive(Debug, PartialEq, Eq)]
pub enum ClientCommand {
    Register { room_id: String, client_id: String },
    Signal,
}

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("register command missing field `{0}`")]
    MissingField(&'static str),
}

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    cmd: Option<String>,
    #[serde(default)]
    roomid: Option<String>,
    #[serde(default)]
    clientid: Option<String>,
}

impl ClientCommand {
    pub fn parse(text: &str) -> Result<Self, EnvelopeError> {
        let raw: RawEnvelope = serde_json::from_str(text)?;

        match raw.cmd.as_deref() {
            Some("register") => {
                let room_id = raw.roomid.ok_or(EnvelopeError::MissingField("roomid"))?;
                let client_id = raw
                    .clientid
                    .ok_or(EnvelopeError::MissingField("clientid"))?;
                Ok(ClientCommand::Register { room_id, client_id })
            }
            _ => Ok(ClientCommand::Signal),
        }
    }
}
