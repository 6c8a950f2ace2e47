use beacon_core::RoomId;
use beacon_server::SessionAction;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestPeer;

#[tokio::test]
async fn test_register_with_unknown_client_rejected() {
    init_tracing();

    let service = create_test_service();
    let room_id = RoomId::parse("abc").unwrap();

    let (_peer, _) = TestPeer::join(&service, "abc");

    // A clientid that was never issued for this room: connection is closed,
    // room state unchanged.
    let mut intruder = TestPeer::connect(&service);
    assert_eq!(
        intruder.register_as("abc", "deadbeef"),
        SessionAction::Close
    );
    assert_eq!(service.registry().pending_count(&room_id), 1);
    assert_eq!(service.registry().active_count(&room_id), 0);
}

#[tokio::test]
async fn test_register_with_unknown_room_rejected() {
    init_tracing();

    let service = create_test_service();

    let mut stranger = TestPeer::connect(&service);
    assert_eq!(
        stranger.register_as("never-created", "deadbeef"),
        SessionAction::Close
    );
    assert!(!service.registry().contains_room(&RoomId::parse("never-created").unwrap()));
}

#[tokio::test]
async fn test_register_with_missing_fields_fails_closed() {
    init_tracing();

    let service = create_test_service();

    let mut stranger = TestPeer::connect(&service);
    assert_eq!(
        stranger.send_text(r#"{"cmd":"register","roomid":"abc"}"#),
        SessionAction::Close
    );

    // Same on an already-bound connection: an incomplete register is a
    // protocol violation, not a droppable bad frame.
    let (mut bound, _) = TestPeer::join(&service, "abc");
    assert_eq!(bound.register("abc"), SessionAction::Continue);
    assert_eq!(
        bound.send_text(r#"{"cmd":"register","clientid":"deadbeef"}"#),
        SessionAction::Close
    );
}

#[tokio::test]
async fn test_register_with_blank_room_id_fails_closed() {
    init_tracing();

    let service = create_test_service();

    let mut stranger = TestPeer::connect(&service);
    assert_eq!(
        stranger.register_as("  ", "deadbeef"),
        SessionAction::Close
    );
}
