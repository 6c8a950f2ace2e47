use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Room identifier, supplied by the joining client.
///
/// The value is opaque to the relay; the only boundary rule is that it must
/// not be empty (or whitespace only), enforced before any registry state is
/// created for it.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq)]
pub struct RoomId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomIdError {
    #[error("room identifier is empty")]
    Empty,
}

impl RoomId {
    pub fn parse(raw: &str) -> Result<Self, RoomIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RoomIdError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
