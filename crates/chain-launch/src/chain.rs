use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot derive chain id: {0}")]
pub struct ChainIdError(pub String);

/// The chain being launched, as described locally.
pub trait ChainDescriptor: Send + Sync {
    /// Chain id, usually read from the chain's home or config.
    fn id(&self) -> Result<String, ChainIdError>;

    /// Name used for a newly created campaign.
    fn name(&self) -> &str;

    /// Where validators fetch the chain source.
    fn source_url(&self) -> &str;

    /// Hash (commit) of the source at `source_url`.
    fn source_hash(&self) -> &str;
}
