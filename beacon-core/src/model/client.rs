use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Client identifier handed out by the join negotiator.
///
/// A short random token: 8 hex chars drawn from a v4 UUID. Uniqueness within
/// a room is guaranteed by the registry, which regenerates on the (rare)
/// collision with an id already present in that room.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct ClientId(String);

const TOKEN_LEN: usize = 8;

impl ClientId {
    pub fn generate() -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self(token[..TOKEN_LEN].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
