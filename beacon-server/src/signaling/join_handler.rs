use crate::error::JoinError;
use crate::signaling::SignalingService;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use beacon_core::{JoinResponse, RoomId};
use tracing::warn;

/// `POST /join/{room_id}` — the out-of-band join negotiation.
pub async fn join_handler(
    Path(room_id): Path<String>,
    State(service): State<SignalingService>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let room_id = match RoomId::parse(&room_id) {
        Ok(room_id) => room_id,
        Err(e) => {
            warn!("Rejecting join with invalid room id: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(JoinResponse::error("INVALID_ROOM")),
            );
        }
    };

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok());

    match service.join(&room_id, host) {
        Ok(params) => (StatusCode::OK, Json(JoinResponse::success(params))),
        Err(JoinError::RoomFull) => {
            warn!("Rejecting join, room {} is full", room_id);
            (StatusCode::OK, Json(JoinResponse::error("FULL")))
        }
    }
}
