use beacon_server::SessionAction;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::TestPeer;

// Non-register traffic before registration is silently dropped and the
// connection stays open.
#[tokio::test]
async fn test_unregistered_message_dropped() {
    init_tracing();

    let service = create_test_service();

    let (mut listener, _) = TestPeer::join(&service, "abc");
    assert_eq!(listener.register("abc"), SessionAction::Continue);

    let mut stranger = TestPeer::connect(&service);

    // A well-formed signal from an unbound connection goes nowhere.
    assert_eq!(
        stranger.send_text(r#"{"type":"offer","sdp":"v=0..."}"#),
        SessionAction::Continue
    );
    assert!(listener.try_recv().is_none());

    // Same for unparseable noise and binary data.
    assert_eq!(stranger.send_text("not json"), SessionAction::Continue);
    assert_eq!(stranger.send_binary(b"\x01\x02"), SessionAction::Continue);
    assert!(listener.try_recv().is_none());
}
