use chain_launch::{with_campaign, with_chain_id, CancellationToken, NetworkError, PublishError};
use chain_launch_client::QueryError;
use chain_launch_testing::{MsgKind, TestChain, TestFixture};

/// Configured campaign 7 exists: no campaign is created and the launch points at 7.
#[tokio::test]
async fn test_existing_campaign_is_reused() {
    let test = TestFixture::new().with_coordinator();
    let cancel = CancellationToken::new();
    for n in 1..=7 {
        test.chain
            .add_campaign(&test.coordinator_address(), &format!("campaign-{n}"));
    }

    let published = test
        .network
        .publish(
            &cancel,
            &TestChain::new("derived-1"),
            [with_chain_id("mychain-1"), with_campaign(7)],
        )
        .await
        .expect("publish should succeed");

    assert_eq!(published.campaign_id, 7);
    assert_eq!(test.chain.campaign_queries(), vec![7]);
    assert_eq!(test.chain.submitted_count(MsgKind::CreateCampaign), 0);

    let chains = test.chain.submitted_chains();
    assert_eq!(chains.len(), 1);
    assert_eq!(chains[0].campaign_id, 7);
    assert!(chains[0].has_campaign);
}

/// Configured campaign 7 does not exist: abort with the query error, create nothing.
#[tokio::test]
async fn test_missing_configured_campaign_aborts() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    let err = test
        .network
        .publish(
            &cancel,
            &TestChain::new("mychain-1"),
            [with_chain_id("mychain-1"), with_campaign(7)],
        )
        .await
        .unwrap_err();

    assert!(err.launched().is_none());
    assert!(matches!(
        err,
        PublishError::Aborted(NetworkError::Query(ref e)) if e.is_not_found()
    ));
    assert_eq!(test.chain.submitted_count(MsgKind::CreateCampaign), 0);
    assert_eq!(test.chain.submitted_count(MsgKind::CreateChain), 0);
}

#[tokio::test]
async fn test_campaign_query_failure_aborts() {
    let test = TestFixture::new().with_coordinator();
    let cancel = CancellationToken::new();
    let campaign_id = test.chain.add_campaign(&test.coordinator_address(), "mine");
    test.chain
        .fail_campaign_query(QueryError::unavailable("timeout"));

    let err = test
        .network
        .publish(&cancel, &TestChain::new("mychain-1"), [with_campaign(campaign_id)])
        .await
        .unwrap_err();

    assert!(matches!(err.network_error(), NetworkError::Query(e) if !e.is_not_found()));
    assert!(test.chain.submitted().is_empty());
}

/// The coordinator is still ensured before the campaign check fails.
#[tokio::test]
async fn test_coordinator_created_before_campaign_check_is_kept() {
    let test = TestFixture::new();
    let cancel = CancellationToken::new();

    test.network
        .publish(&cancel, &TestChain::new("mychain-1"), [with_campaign(42)])
        .await
        .unwrap_err();

    assert_eq!(test.chain.submitted_count(MsgKind::CreateCoordinator), 1);
    assert!(test.chain.coordinator(&test.coordinator_address()).is_some());
}

/// Without a configured id, the decoded id of the new campaign goes into the launch.
#[tokio::test]
async fn test_new_campaign_id_is_carried_into_launch() {
    let test = TestFixture::new().with_coordinator();
    let cancel = CancellationToken::new();
    test.chain.add_campaign(&test.coordinator_address(), "older");

    let published = test
        .network
        .publish(&cancel, &TestChain::new("mychain-1"), [])
        .await
        .expect("publish should succeed");

    assert_eq!(published.campaign_id, 2);
    assert_eq!(test.chain.submitted_count(MsgKind::CreateCampaign), 1);
    assert_eq!(test.chain.submitted_chains()[0].campaign_id, 2);
    assert!(test.chain.campaign_queries().is_empty());
}
