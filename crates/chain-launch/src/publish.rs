/*!
# Publish

Announces a chain on the coordination network. The steps run strictly in order,
each gated on the previous one:

1. resolve the genesis hash (only for unchecked custom genesis)
2. resolve the chain id
3. make sure the publishing account is a coordinator
4. make sure the campaign exists, creating one when no id was given
5. create the launch record
6. allocate the initial shares, if any

Nothing is rolled back: a coordinator or campaign created before a later failure
stays on chain, and a retried publish will find the coordinator and skip it.
*/

use crate::{
    chain::ChainDescriptor,
    error::{NetworkError, NetworkResult, PublishError},
    events::Event,
    network::{remote, Network, Published},
    options::{PublishOption, PublishOptions},
};
use chain_launch_types::{
    MsgCreateCampaign, MsgCreateCampaignResponse, MsgCreateChain, MsgCreateChainResponse,
    MsgCreateCoordinator, MsgCreateCoordinatorResponse,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

impl Network {
    /// Submit a chain to the coordination network to announce a new launch.
    ///
    /// On [`PublishError::SharesNotAdded`] the chain *was* launched; see
    /// [`PublishError::launched`].
    pub async fn publish(
        &self,
        cancel: &CancellationToken,
        chain: &(impl ChainDescriptor + ?Sized),
        options: impl IntoIterator<Item = PublishOption>,
    ) -> Result<Published, PublishError> {
        let o = PublishOptions::from_options(options);

        let launched = self
            .launch(cancel, chain, &o)
            .await
            .inspect_err(|e| warn!(error = %e, "Publish aborted"))?;

        if !o.shares().is_empty() {
            let coordinator_address = self.account_address();
            if let Err(source) = self
                .add_shares(cancel, launched.campaign_id, &coordinator_address, o.shares())
                .await
            {
                warn!(
                    launch_id = launched.launch_id,
                    campaign_id = launched.campaign_id,
                    error = %source,
                    "Chain launched but initial shares were not added"
                );
                return Err(PublishError::SharesNotAdded { launched, source });
            }
        }

        Ok(launched)
    }

    /// Steps 1 to 5: everything up to and including the launch record.
    async fn launch(
        &self,
        cancel: &CancellationToken,
        chain: &(impl ChainDescriptor + ?Sized),
        o: &PublishOptions,
    ) -> NetworkResult<Published> {
        // With a custom genesis and no checks, the genesis is only fetched for its hash.
        let mut genesis_hash = String::new();
        if o.no_check() && !o.genesis_url().is_empty() {
            let genesis = remote(cancel, self.genesis.fetch(o.genesis_url())).await?;
            debug!(url = o.genesis_url(), hash = %genesis.hash, "Resolved genesis hash");
            genesis_hash = genesis.hash;
        }

        let chain_id = if o.chain_id().is_empty() {
            chain.id()?
        } else {
            o.chain_id().to_string()
        };

        let coordinator_address = self.account_address();

        self.ev.send(Event::ongoing("Publishing the network"));

        self.ensure_coordinator(cancel, &coordinator_address).await?;

        let campaign_id = self
            .ensure_campaign(cancel, &coordinator_address, chain.name(), o.campaign_id())
            .await?;

        let msg = MsgCreateChain::new(
            coordinator_address.as_str(),
            chain_id.as_str(),
            chain.source_url(),
            chain.source_hash(),
            o.genesis_url(),
            genesis_hash,
            true,
            campaign_id,
        );
        let res = remote(cancel, self.cosmos.broadcast_tx(self.account.name(), msg.into())).await?;
        let created: MsgCreateChainResponse = res.decode()?;

        info!(
            launch_id = created.launch_id,
            campaign_id,
            chain_id = %chain_id,
            tx_hash = %res.tx_hash,
            "Chain created"
        );

        Ok(Published {
            launch_id: created.launch_id,
            campaign_id,
        })
    }

    /// Register `address` as a coordinator unless it already is one.
    async fn ensure_coordinator(
        &self,
        cancel: &CancellationToken,
        address: &str,
    ) -> NetworkResult<()> {
        match remote(cancel, self.query.coordinator_by_address(address)).await {
            Ok(coordinator) => {
                debug!(
                    address,
                    coordinator_id = coordinator.coordinator_id,
                    "Coordinator already exists, skipping..."
                );
                Ok(())
            }
            Err(NetworkError::Query(e)) if e.is_not_found() => {
                let msg = MsgCreateCoordinator::new(address, "", "", "");
                let res =
                    remote(cancel, self.cosmos.broadcast_tx(self.account.name(), msg.into()))
                        .await?;
                let created: MsgCreateCoordinatorResponse = res.decode()?;
                info!(
                    address,
                    coordinator_id = created.coordinator_id,
                    tx_hash = %res.tx_hash,
                    "Coordinator created"
                );
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Verify the configured campaign, or create a new one when `campaign_id` is 0.
    ///
    /// A configured id is an assertion that the campaign exists; it is never
    /// created here, even when the lookup says it is missing.
    async fn ensure_campaign(
        &self,
        cancel: &CancellationToken,
        coordinator_address: &str,
        campaign_name: &str,
        campaign_id: u64,
    ) -> NetworkResult<u64> {
        if campaign_id != 0 {
            let campaign = remote(cancel, self.query.campaign(campaign_id)).await?;
            debug!(
                campaign_id,
                campaign_name = %campaign.campaign_name,
                "Using existing campaign"
            );
            return Ok(campaign_id);
        }

        let msg = MsgCreateCampaign::new(coordinator_address, campaign_name, Vec::new());
        let res = remote(cancel, self.cosmos.broadcast_tx(self.account.name(), msg.into())).await?;
        let created: MsgCreateCampaignResponse = res.decode()?;

        info!(
            campaign_id = created.campaign_id,
            campaign_name,
            tx_hash = %res.tx_hash,
            "Campaign created"
        );
        Ok(created.campaign_id)
    }
}
