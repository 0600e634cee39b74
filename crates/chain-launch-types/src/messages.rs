/*!
# Coordination Chain Messages

Messages submitted to the coordination chain during a launch, and the responses
the chain returns for them. Every message kind has exactly one response kind,
linked through [`Msg::response_type_url`] and [`MsgResponse::TYPE_URL`].
*/

use crate::Shares;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const MSG_CREATE_COORDINATOR_TYPE_URL: &str = "/tendermint.spn.profile.MsgCreateCoordinator";
pub const MSG_CREATE_CAMPAIGN_TYPE_URL: &str = "/tendermint.spn.campaign.MsgCreateCampaign";
pub const MSG_CREATE_CHAIN_TYPE_URL: &str = "/tendermint.spn.launch.MsgCreateChain";
pub const MSG_ADD_SHARES_TYPE_URL: &str = "/tendermint.spn.campaign.MsgAddShares";

/// Optional public profile of a coordinator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatorDescription {
    pub identity: String,
    pub website: String,
    pub details: String,
}

/// Register an account as a campaign coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateCoordinator {
    pub address: String,
    pub description: CoordinatorDescription,
}

impl MsgCreateCoordinator {
    pub fn new(
        address: impl Into<String>,
        identity: impl Into<String>,
        website: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            description: CoordinatorDescription {
                identity: identity.into(),
                website: website.into(),
                details: details.into(),
            },
        }
    }
}

/// Create a campaign owned by the coordinator at `coordinator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateCampaign {
    pub coordinator: String,
    pub campaign_name: String,
    pub metadata: Vec<u8>,
}

impl MsgCreateCampaign {
    pub fn new(
        coordinator: impl Into<String>,
        campaign_name: impl Into<String>,
        metadata: Vec<u8>,
    ) -> Self {
        Self {
            coordinator: coordinator.into(),
            campaign_name: campaign_name.into(),
            metadata,
        }
    }
}

/// Register a chain launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateChain {
    pub coordinator: String,
    pub genesis_chain_id: String,
    pub source_url: String,
    pub source_hash: String,
    pub genesis_url: String,
    pub genesis_hash: String,
    pub has_campaign: bool,
    pub campaign_id: u64,
}

impl MsgCreateChain {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coordinator: impl Into<String>,
        genesis_chain_id: impl Into<String>,
        source_url: impl Into<String>,
        source_hash: impl Into<String>,
        genesis_url: impl Into<String>,
        genesis_hash: impl Into<String>,
        has_campaign: bool,
        campaign_id: u64,
    ) -> Self {
        Self {
            coordinator: coordinator.into(),
            genesis_chain_id: genesis_chain_id.into(),
            source_url: source_url.into(),
            source_hash: source_hash.into(),
            genesis_url: genesis_url.into(),
            genesis_hash: genesis_hash.into(),
            has_campaign,
            campaign_id,
        }
    }
}

/// Allocate campaign shares to `address`, signed by the campaign coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAddShares {
    pub campaign_id: u64,
    pub coordinator: String,
    pub address: String,
    pub shares: Shares,
}

impl MsgAddShares {
    pub fn new(
        campaign_id: u64,
        coordinator: impl Into<String>,
        address: impl Into<String>,
        shares: Shares,
    ) -> Self {
        Self {
            campaign_id,
            coordinator: coordinator.into(),
            address: address.into(),
            shares,
        }
    }
}

/// Any message this workspace submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type", content = "value")]
pub enum Msg {
    CreateCoordinator(MsgCreateCoordinator),
    CreateCampaign(MsgCreateCampaign),
    CreateChain(MsgCreateChain),
    AddShares(MsgAddShares),
}

impl Msg {
    pub fn type_url(&self) -> &'static str {
        match self {
            Msg::CreateCoordinator(_) => MSG_CREATE_COORDINATOR_TYPE_URL,
            Msg::CreateCampaign(_) => MSG_CREATE_CAMPAIGN_TYPE_URL,
            Msg::CreateChain(_) => MSG_CREATE_CHAIN_TYPE_URL,
            Msg::AddShares(_) => MSG_ADD_SHARES_TYPE_URL,
        }
    }

    /// Type URL of the response the chain returns for this message.
    pub fn response_type_url(&self) -> &'static str {
        match self {
            Msg::CreateCoordinator(_) => MsgCreateCoordinatorResponse::TYPE_URL,
            Msg::CreateCampaign(_) => MsgCreateCampaignResponse::TYPE_URL,
            Msg::CreateChain(_) => MsgCreateChainResponse::TYPE_URL,
            Msg::AddShares(_) => MsgAddSharesResponse::TYPE_URL,
        }
    }
}

impl From<MsgCreateCoordinator> for Msg {
    fn from(msg: MsgCreateCoordinator) -> Self {
        Msg::CreateCoordinator(msg)
    }
}

impl From<MsgCreateCampaign> for Msg {
    fn from(msg: MsgCreateCampaign) -> Self {
        Msg::CreateCampaign(msg)
    }
}

impl From<MsgCreateChain> for Msg {
    fn from(msg: MsgCreateChain) -> Self {
        Msg::CreateChain(msg)
    }
}

impl From<MsgAddShares> for Msg {
    fn from(msg: MsgAddShares) -> Self {
        Msg::AddShares(msg)
    }
}

/// A strongly-typed response body, identified on the wire by its type URL.
pub trait MsgResponse: Serialize + DeserializeOwned {
    const TYPE_URL: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateCoordinatorResponse {
    pub coordinator_id: u64,
}

impl MsgResponse for MsgCreateCoordinatorResponse {
    const TYPE_URL: &'static str = "/tendermint.spn.profile.MsgCreateCoordinatorResponse";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateCampaignResponse {
    pub campaign_id: u64,
}

impl MsgResponse for MsgCreateCampaignResponse {
    const TYPE_URL: &'static str = "/tendermint.spn.campaign.MsgCreateCampaignResponse";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateChainResponse {
    pub launch_id: u64,
}

impl MsgResponse for MsgCreateChainResponse {
    const TYPE_URL: &'static str = "/tendermint.spn.launch.MsgCreateChainResponse";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgAddSharesResponse {}

impl MsgResponse for MsgAddSharesResponse {
    const TYPE_URL: &'static str = "/tendermint.spn.campaign.MsgAddSharesResponse";
}
