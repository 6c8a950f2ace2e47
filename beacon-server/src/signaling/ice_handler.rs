use crate::signaling::SignalingService;
use axum::Json;
use axum::extract::State;
use beacon_core::IceServerList;

/// `POST /ice` — static ICE server discovery. Configuration only; the relay
/// itself never touches STUN/TURN.
pub async fn ice_handler(State(service): State<SignalingService>) -> Json<IceServerList> {
    Json(service.get_ice_servers())
}
