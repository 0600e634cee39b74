use chain_launch::{CancellationToken, NetworkError, PublishError};
use chain_launch_client::{QueryError, QueryErrorKind};
use chain_launch_testing::{MsgKind, TestChain, TestFixture};

#[tokio::test]
async fn test_absent_coordinator_is_created_once() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(&cancel, &TestChain::new("mychain-1"), [])
        .await
        .expect("publish should succeed");

    assert_eq!(test.chain.submitted_count(MsgKind::CreateCoordinator), 1);
    assert_eq!(
        test.chain.coordinator_queries(),
        vec![test.coordinator_address()]
    );
}

#[tokio::test]
async fn test_existing_coordinator_is_not_recreated() {
    let test = TestFixture::new().with_coordinator();
    let cancel = CancellationToken::new();

    test.network
        .publish(&cancel, &TestChain::new("mychain-1"), [])
        .await
        .expect("publish should succeed");

    assert_eq!(test.chain.submitted_count(MsgKind::CreateCoordinator), 0);
    assert_eq!(test.chain.submitted_count(MsgKind::CreateChain), 1);
}

/// A second publish from the same account finds the coordinator created by the first.
#[tokio::test]
async fn test_repeated_publish_reuses_coordinator() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();
    let chain = TestChain::new("mychain-1");

    test.network.publish(&cancel, &chain, []).await.unwrap();
    test.network.publish(&cancel, &chain, []).await.unwrap();

    assert_eq!(test.chain.submitted_count(MsgKind::CreateCoordinator), 1);
}

/// Only "not found" leads to creation; any other query failure aborts.
#[tokio::test]
async fn test_other_query_errors_abort_before_any_transaction() {
    for error in [
        QueryError::unavailable("connection refused"),
        QueryError::invalid_argument("bad address"),
        QueryError::new(QueryErrorKind::Internal, "store corrupted"),
    ] {
        let test = TestFixture::new();
        let cancel = CancellationToken::new();
        test.chain.fail_coordinator_query(error.clone());

        let err = test
            .network
            .publish(&cancel, &TestChain::new("mychain-1"), [])
            .await
            .unwrap_err();

        assert!(err.launched().is_none());
        assert!(matches!(
            err,
            PublishError::Aborted(NetworkError::Query(ref e)) if *e == error
        ));
        assert!(test.chain.submitted().is_empty());
    }
}

#[tokio::test]
async fn test_coordinator_creation_failure_aborts() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();
    test.chain.fail_broadcast(
        MsgKind::CreateCoordinator,
        chain_launch_client::BroadcastError::Transport("node down".to_string()),
    );

    let err = test
        .network
        .publish(&cancel, &TestChain::new("mychain-1"), [])
        .await
        .unwrap_err();

    assert!(matches!(
        err.network_error(),
        NetworkError::Broadcast(_)
    ));
    assert_eq!(test.chain.submitted_count(MsgKind::CreateCampaign), 0);
    assert_eq!(test.chain.submitted_count(MsgKind::CreateChain), 0);
}
