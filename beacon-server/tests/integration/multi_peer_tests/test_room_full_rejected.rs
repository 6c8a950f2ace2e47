use beacon_core::RoomId;
use beacon_server::JoinError;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TEST_HOST;

// Two-party rooms: the third join is rejected outright instead of being
// handed a colliding initiator role.
#[tokio::test]
async fn test_room_full_rejected() {
    init_tracing();

    let service = create_test_service();
    let room_id = RoomId::parse("abc").unwrap();

    service.join(&room_id, Some(TEST_HOST)).expect("first join");
    service.join(&room_id, Some(TEST_HOST)).expect("second join");

    let third = service.join(&room_id, Some(TEST_HOST));
    assert_eq!(third.unwrap_err(), JoinError::RoomFull);

    // The rejected join left no trace.
    assert_eq!(service.registry().pending_count(&room_id), 2);
}
