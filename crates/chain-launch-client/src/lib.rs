/*!
# Chain Launch Client

Contracts for everything a chain launch talks to: the coordination chain's query
service and transaction broadcaster, the genesis fetcher, and the publishing
account.

Query errors are classified ([`QueryErrorKind`]) so that "resource absent" can be
matched without looking at message text. Broadcast and decode failures are
separate error types: a transaction can be confirmed on chain and still fail to
decode.

## Usage

```rust,no_run
use chain_launch_client::{GenesisFetcher, HttpGenesisFetcher};

# async fn example() -> Result<(), chain_launch_client::GenesisError> {
let fetcher = HttpGenesisFetcher::new()?;
let genesis = fetcher.fetch("https://example.com/genesis.json").await?;
println!("genesis hash: {}", genesis.hash);
# Ok(())
# }
```
*/

mod account;
mod broadcast;
mod genesis;
mod query;

pub use account::AccountResolver;
pub use broadcast::{BroadcastError, DecodeError, TxBroadcaster, TxResponse};
pub use genesis::{
    genesis_hash, Genesis, GenesisError, GenesisFetcher, GenesisFetcherConfig,
    HttpGenesisFetcher,
};
pub use query::{CoordinationQuery, QueryError, QueryErrorKind};
