/*!
# Chain Launch

Publishes a locally described chain to the coordination network so validators
can find and join it.

## Architecture

[`Network`] bundles the collaborators of one publishing account: transaction
broadcaster, query service, genesis fetcher, account resolver and event sink.
Two operations run against it:

- [`Network::publish`]: coordinator, campaign and launch record, then the
  optional initial share allocation
- [`Network::add_shares`]: allocate campaign shares to an address

Every remote call races a caller-owned [`CancellationToken`]. There is no
retry and no rollback inside this crate: the first failing step ends the call,
and side effects already committed on chain stay there.

## Usage

```rust,ignore
use chain_launch::{with_campaign, with_chain_id, Network, PublishError};
use tokio_util::sync::CancellationToken;

let cancel = CancellationToken::new();
match network.publish(&cancel, &chain, [with_chain_id("mychain-1"), with_campaign(7)]).await {
    Ok(published) => println!("launch {} in campaign {}", published.launch_id, published.campaign_id),
    Err(e @ PublishError::SharesNotAdded { .. }) => {
        let launched = e.launched().expect("launched before shares failed");
        // retry network.add_shares(...) for launched.campaign_id
    }
    Err(e) => return Err(e.into()),
}
```
*/

mod chain;
mod error;
mod events;
mod network;
mod options;
mod publish;
mod shares;

pub use chain::{ChainDescriptor, ChainIdError};
pub use error::{NetworkError, NetworkResult, PublishError};
pub use events::{ChannelEventSink, Event, EventSink, EventStatus, TracingEventSink};
pub use network::{Network, NetworkConfig, Published};
pub use options::{
    with_campaign, with_chain_id, with_custom_genesis, with_no_check, with_shares,
    PublishOption, PublishOptions,
};

// Re-export the types callers need to drive a launch
pub use chain_launch_client::{
    AccountResolver, CoordinationQuery, GenesisFetcher, HttpGenesisFetcher, TxBroadcaster,
};
pub use chain_launch_types::{Shares, SPN_PREFIX};
pub use tokio_util::sync::CancellationToken;
