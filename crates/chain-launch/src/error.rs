use crate::{chain::ChainIdError, network::Published};
use chain_launch_client::{BroadcastError, DecodeError, GenesisError, QueryError};
use thiserror::Error;

pub type NetworkResult<T> = Result<T, NetworkError>;

/// A failed remote step. Every variant is terminal for the current call.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("Genesis error: {0}")]
    Genesis(#[from] GenesisError),

    #[error(transparent)]
    ChainId(#[from] ChainIdError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Broadcast failed: {0}")]
    Broadcast(#[from] BroadcastError),

    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl NetworkError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NetworkError::Cancelled)
    }
}

/// Failure of [`Network::publish`](crate::Network::publish).
///
/// `SharesNotAdded` is a partial success: the chain was launched (and the ids in
/// `launched` are real) but the initial share allocation failed. Callers can retry
/// [`Network::add_shares`](crate::Network::add_shares) on its own.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Publish aborted: {0}")]
    Aborted(#[from] NetworkError),

    #[error(
        "Launch {} created in campaign {} but shares were not added: {source}",
        .launched.launch_id,
        .launched.campaign_id
    )]
    SharesNotAdded {
        launched: Published,
        #[source]
        source: NetworkError,
    },
}

impl PublishError {
    /// Ids of the launched chain, if it was launched before the failure.
    pub fn launched(&self) -> Option<Published> {
        match self {
            PublishError::Aborted(_) => None,
            PublishError::SharesNotAdded { launched, .. } => Some(*launched),
        }
    }

    /// The underlying step failure.
    pub fn network_error(&self) -> &NetworkError {
        match self {
            PublishError::Aborted(err) => err,
            PublishError::SharesNotAdded { source, .. } => source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.network_error().is_cancelled()
    }
}
