use beacon_server::SessionAction;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestPeer;

// A relayed payload reaches every other bound connection in the same room
// and nobody outside it.
#[tokio::test]
async fn test_relay_isolated_per_room() {
    init_tracing();

    let service = create_test_service();

    let (mut alice, _) = TestPeer::join(&service, "room-one");
    let (mut bob, _) = TestPeer::join(&service, "room-one");
    let (mut carol, _) = TestPeer::join(&service, "room-two");
    let (mut dave, _) = TestPeer::join(&service, "room-two");

    for (peer, room) in [
        (&mut alice, "room-one"),
        (&mut bob, "room-one"),
        (&mut carol, "room-two"),
        (&mut dave, "room-two"),
    ] {
        assert_eq!(peer.register(room), SessionAction::Continue);
    }

    let payload = r#"{"type":"offer","sdp":"only for room-one"}"#;
    alice.send_text(payload);

    assert_eq!(bob.recv_text(), payload);
    assert!(alice.try_recv().is_none());
    assert!(carol.try_recv().is_none());
    assert!(dave.try_recv().is_none());
}
