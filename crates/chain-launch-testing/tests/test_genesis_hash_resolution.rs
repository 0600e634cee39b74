use chain_launch::{
    with_custom_genesis, with_no_check, CancellationToken, NetworkError, PublishError,
};
use chain_launch_client::{genesis_hash, GenesisError};
use chain_launch_testing::{MsgKind, TestChain, TestFixture, TEST_GENESIS, TEST_GENESIS_URL};

/// Unchecked custom genesis: fetched once, its hash goes into the launch record.
#[tokio::test]
async fn test_no_check_custom_genesis_is_hashed() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(
            &cancel,
            &TestChain::new("mychain-1"),
            [with_no_check(), with_custom_genesis(TEST_GENESIS_URL)],
        )
        .await
        .expect("publish should succeed");

    assert_eq!(test.genesis.fetches(), vec![TEST_GENESIS_URL.to_string()]);

    let msg = &test.chain.submitted_chains()[0];
    assert_eq!(msg.genesis_url, TEST_GENESIS_URL);
    assert_eq!(msg.genesis_hash, genesis_hash(TEST_GENESIS));
}

/// Checked publish (the default) never fetches, even with a custom genesis URL.
#[tokio::test]
async fn test_checked_publish_does_not_fetch_genesis() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(
            &cancel,
            &TestChain::new("mychain-1"),
            [with_custom_genesis(TEST_GENESIS_URL)],
        )
        .await
        .expect("publish should succeed");

    assert!(test.genesis.fetches().is_empty());

    let msg = &test.chain.submitted_chains()[0];
    assert_eq!(msg.genesis_url, TEST_GENESIS_URL);
    assert_eq!(msg.genesis_hash, "");
}

#[tokio::test]
async fn test_no_check_without_genesis_url_does_not_fetch() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(&cancel, &TestChain::new("mychain-1"), [with_no_check()])
        .await
        .expect("publish should succeed");

    assert!(test.genesis.fetches().is_empty());
    assert_eq!(test.chain.submitted_chains()[0].genesis_hash, "");
}

/// A failed fetch aborts before anything is queried, announced or submitted.
#[tokio::test]
async fn test_genesis_fetch_failure_aborts_first() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    let err = test
        .network
        .publish(
            &cancel,
            &TestChain::new("mychain-1"),
            [
                with_no_check(),
                with_custom_genesis("https://example.com/missing.json"),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PublishError::Aborted(NetworkError::Genesis(GenesisError::Status { status: 404, .. }))
    ));
    assert!(test.chain.coordinator_queries().is_empty());
    assert!(test.chain.submitted().is_empty());
    assert!(test.events.events().is_empty());
    assert_eq!(test.chain.submitted_count(MsgKind::CreateChain), 0);
}

#[tokio::test]
async fn test_invalid_genesis_content_aborts() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();
    test.genesis
        .serve("https://example.com/broken.json", b"<html>oops</html>");

    let err = test
        .network
        .publish(
            &cancel,
            &TestChain::new("mychain-1"),
            [
                with_no_check(),
                with_custom_genesis("https://example.com/broken.json"),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.network_error(),
        NetworkError::Genesis(GenesisError::Parse(_))
    ));
    assert!(test.chain.submitted().is_empty());
}
