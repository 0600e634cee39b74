use crate::{
    error::NetworkResult,
    events::Event,
    network::{remote, Network},
};
use chain_launch_types::{MsgAddShares, MsgAddSharesResponse, Shares};
use tokio_util::sync::CancellationToken;
use tracing::info;

impl Network {
    /// Allocate `shares` of campaign `campaign_id` to `address`.
    ///
    /// Runs even when `shares` is empty; deciding whether an allocation is wanted
    /// is up to the caller. Not retried on failure.
    pub async fn add_shares(
        &self,
        cancel: &CancellationToken,
        campaign_id: u64,
        address: &str,
        shares: &Shares,
    ) -> NetworkResult<()> {
        self.ev.send(Event::ongoing(format!(
            "Adding shares {shares} to account {address} for campaign {campaign_id}"
        )));

        let msg = MsgAddShares::new(campaign_id, self.account_address(), address, shares.clone());
        let res = remote(cancel, self.cosmos.broadcast_tx(self.account.name(), msg.into())).await?;
        let _: MsgAddSharesResponse = res.decode()?;

        info!(campaign_id, address, shares = %shares, tx_hash = %res.tx_hash, "Shares added");

        self.ev.send(Event::done(format!(
            "Added {shares} for address {address} in the campaign {campaign_id}"
        )));
        Ok(())
    }
}
