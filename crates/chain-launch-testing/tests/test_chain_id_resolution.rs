use chain_launch::{with_chain_id, CancellationToken, NetworkError};
use chain_launch_testing::{TestChain, TestFixture};

#[tokio::test]
async fn test_underivable_chain_id_aborts_before_any_remote_call() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    let err = test
        .network
        .publish(&cancel, &TestChain::without_id("no config.yml"), [])
        .await
        .unwrap_err();

    assert!(matches!(err.network_error(), NetworkError::ChainId(e) if e.0 == "no config.yml"));
    assert!(test.chain.coordinator_queries().is_empty());
    assert!(test.chain.submitted().is_empty());
    assert!(test.events.events().is_empty());
}

/// A configured chain id means the descriptor is never asked for one.
#[tokio::test]
async fn test_configured_chain_id_skips_derivation() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(
            &cancel,
            &TestChain::without_id("no config.yml"),
            [with_chain_id("mychain-1")],
        )
        .await
        .expect("publish should succeed");

    assert_eq!(test.chain.submitted_chains()[0].genesis_chain_id, "mychain-1");
}
