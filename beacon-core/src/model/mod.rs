mod client;
mod envelope;
mod ice;
mod join;
mod room;

pub use client::ClientId;
pub use envelope::{ClientCommand, EnvelopeError};
pub use ice::{IceServerConfig, IceServerList};
pub use join::{JoinParams, JoinResponse};
pub use room::{RoomId, RoomIdError};
