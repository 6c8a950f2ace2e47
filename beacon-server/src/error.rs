use thiserror::Error;

/// Failures of the join negotiation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoinError {
    /// The room already holds two participants (pending or active).
    #[error("room is full")]
    RoomFull,
}

/// Failures of the `register` handshake. All of these fail closed: the
/// connection that sent the offending register is terminated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("unknown room")]
    UnknownRoom,

    /// No pending join for this client id — either it was never issued, or
    /// it has already been consumed by an earlier registration.
    #[error("unknown or already-consumed client id")]
    UnknownClient,
}
