mod fixtures;
mod mock_chain;

pub use fixtures::{RecordingEventSink, StaticGenesisFetcher, TestAccount, TestChain};
pub use mock_chain::{MockCoordinationChain, MsgKind, SubmittedTx};

use chain_launch::{Network, SPN_PREFIX};
use std::sync::Arc;

pub const TEST_ACCOUNT_NAME: &str = "alice";
pub const TEST_ACCOUNT_SUFFIX: &str = "qqqqqqalice";
pub const TEST_GENESIS_URL: &str = "https://example.com/genesis.json";
pub const TEST_GENESIS: &[u8] = br#"{"chain_id":"mychain-1","initial_height":"1"}"#;

/// A [`Network`] wired to in-memory collaborators that tests can inspect.
pub struct TestFixture {
    pub chain: Arc<MockCoordinationChain>,
    pub genesis: Arc<StaticGenesisFetcher>,
    pub events: Arc<RecordingEventSink>,
    pub account: Arc<TestAccount>,
    pub network: Network,
}

impl TestFixture {
    /// Empty coordination chain; [`TEST_GENESIS_URL`] serves [`TEST_GENESIS`].
    pub fn new() -> Self {
        let chain = Arc::new(MockCoordinationChain::new());
        let genesis = Arc::new(StaticGenesisFetcher::new());
        let events = Arc::new(RecordingEventSink::new());
        let account = Arc::new(TestAccount::new(TEST_ACCOUNT_NAME, TEST_ACCOUNT_SUFFIX));

        genesis.serve(TEST_GENESIS_URL, TEST_GENESIS);

        let network = Network::new(
            account.clone(),
            chain.clone(),
            chain.clone(),
            genesis.clone(),
            events.clone(),
        );

        Self {
            chain,
            genesis,
            events,
            account,
            network,
        }
    }

    /// Coordination-chain address of the publishing account.
    pub fn coordinator_address(&self) -> String {
        format!("{SPN_PREFIX}1{TEST_ACCOUNT_SUFFIX}")
    }

    /// Register the publishing account as coordinator ahead of the test.
    pub fn with_coordinator(self) -> Self {
        self.chain.add_coordinator(&self.coordinator_address());
        self
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
