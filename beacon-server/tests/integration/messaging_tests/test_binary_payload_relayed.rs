use beacon_server::SessionAction;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestPeer;

// Binary frames are opaque payloads like any other non-register message and
// pass through byte-for-byte.
#[tokio::test]
async fn test_binary_payload_relayed() {
    init_tracing();

    let service = create_test_service();

    let (mut alice, _) = TestPeer::join(&service, "abc");
    let (mut bob, _) = TestPeer::join(&service, "abc");
    assert_eq!(alice.register("abc"), SessionAction::Continue);
    assert_eq!(bob.register("abc"), SessionAction::Continue);

    let payload = [0u8, 159, 146, 150, 255];
    assert_eq!(alice.send_binary(&payload), SessionAction::Continue);
    assert_eq!(bob.recv_binary(), payload);
}
