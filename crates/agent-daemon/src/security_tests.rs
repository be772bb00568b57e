// SPDX-License-Identifier: MIT

use tokio::net::UnixStream;

use super::verify_peer;

#[tokio::test]
async fn peer_connecting_from_the_same_process_is_accepted() {
    let (a, _b) = UnixStream::pair().unwrap();
    assert!(verify_peer(&a).is_ok());
}

#[test]
fn setup_does_not_panic() {
    super::setup();
}
