use crate::{error::NetworkError, events::EventSink};
use chain_launch_client::{AccountResolver, CoordinationQuery, GenesisFetcher, TxBroadcaster};
use chain_launch_types::SPN_PREFIX;
use std::{future::Future, sync::Arc};
use tokio_util::sync::CancellationToken;

/// Ids returned by a successful launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Published {
    pub launch_id: u64,
    pub campaign_id: u64,
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Bech32 prefix of the coordination chain's addresses.
    pub address_prefix: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            address_prefix: SPN_PREFIX.to_string(),
        }
    }
}

/// Handle on the coordination network for one publishing account.
///
/// Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct Network {
    pub(crate) config: NetworkConfig,
    pub(crate) account: Arc<dyn AccountResolver>,
    pub(crate) cosmos: Arc<dyn TxBroadcaster>,
    pub(crate) query: Arc<dyn CoordinationQuery>,
    pub(crate) genesis: Arc<dyn GenesisFetcher>,
    pub(crate) ev: Arc<dyn EventSink>,
}

impl Network {
    /// Create a network handle with the default (SPN) configuration
    pub fn new(
        account: Arc<dyn AccountResolver>,
        cosmos: Arc<dyn TxBroadcaster>,
        query: Arc<dyn CoordinationQuery>,
        genesis: Arc<dyn GenesisFetcher>,
        ev: Arc<dyn EventSink>,
    ) -> Self {
        Self::with_config(NetworkConfig::default(), account, cosmos, query, genesis, ev)
    }

    pub fn with_config(
        config: NetworkConfig,
        account: Arc<dyn AccountResolver>,
        cosmos: Arc<dyn TxBroadcaster>,
        query: Arc<dyn CoordinationQuery>,
        genesis: Arc<dyn GenesisFetcher>,
        ev: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            config,
            account,
            cosmos,
            query,
            genesis,
            ev,
        }
    }

    /// The publishing account's address on the coordination chain.
    pub fn account_address(&self) -> String {
        self.account.address(&self.config.address_prefix)
    }
}

/// Await a remote call unless `cancel` fires first.
pub(crate) async fn remote<T, E>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, E>>,
) -> Result<T, NetworkError>
where
    NetworkError: From<E>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(NetworkError::Cancelled),
        result = call => result.map_err(NetworkError::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_launch_client::QueryError;
    use std::time::Duration;

    #[tokio::test]
    async fn test_remote_passes_through_results() {
        let cancel = CancellationToken::new();

        let ok = remote(&cancel, async { Ok::<_, QueryError>(5) }).await.unwrap();
        assert_eq!(ok, 5);

        let err = remote(&cancel, async {
            Err::<u8, _>(QueryError::not_found("campaign 7"))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, NetworkError::Query(e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn test_remote_prefers_cancellation() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = remote(&cancel, async { Ok::<_, QueryError>(5) })
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_remote_cancelled_while_pending() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.cancel();
        });

        let err = remote(&cancel, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, QueryError>(())
        })
        .await
        .unwrap_err();
        assert!(err.is_cancelled());
    }
}
