use async_trait::async_trait;
use chain_launch::CancellationToken;
use chain_launch_client::{BroadcastError, CoordinationQuery, QueryError, TxBroadcaster, TxResponse};
use chain_launch_types::{
    Campaign, Coordinator, CoordinatorDescription, Msg, MsgAddShares, MsgAddSharesResponse,
    MsgCreateCampaign, MsgCreateCampaignResponse, MsgCreateChain, MsgCreateChainResponse,
    MsgCreateCoordinator, MsgCreateCoordinatorResponse, MsgResponse, Shares,
};
use std::{
    collections::{BTreeMap, HashMap, HashSet},
    sync::{Mutex, MutexGuard},
};

/// Message kinds, for counting submissions and injecting failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MsgKind {
    CreateCoordinator,
    CreateCampaign,
    CreateChain,
    AddShares,
}

impl MsgKind {
    pub fn of(msg: &Msg) -> Self {
        match msg {
            Msg::CreateCoordinator(_) => MsgKind::CreateCoordinator,
            Msg::CreateCampaign(_) => MsgKind::CreateCampaign,
            Msg::CreateChain(_) => MsgKind::CreateChain,
            Msg::AddShares(_) => MsgKind::AddShares,
        }
    }
}

/// A message the mock accepted for broadcast, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTx {
    pub signer: String,
    pub msg: Msg,
}

#[derive(Default)]
struct MockState {
    coordinators: HashMap<String, Coordinator>,
    campaigns: BTreeMap<u64, Campaign>,
    launches: BTreeMap<u64, MsgCreateChain>,
    submitted: Vec<SubmittedTx>,
    coordinator_queries: Vec<String>,
    campaign_queries: Vec<u64>,

    next_coordinator_id: u64,
    next_campaign_id: u64,
    next_launch_id: u64,
    tx_counter: u64,

    broadcast_failures: HashMap<MsgKind, BroadcastError>,
    mismatched_responses: HashSet<MsgKind>,
    coordinator_query_error: Option<QueryError>,
    campaign_query_error: Option<QueryError>,
    cancel_after: Option<(MsgKind, CancellationToken)>,
}

/// In-memory coordination chain implementing both the query service and the
/// transaction broadcaster.
///
/// Enforces the same preconditions as the real chain (duplicate coordinators are
/// rejected, campaigns need a coordinator, launches need an existing campaign) and
/// hands out sequential ids starting at 1.
pub struct MockCoordinationChain {
    state: Mutex<MockState>,
}

impl Default for MockCoordinationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCoordinationChain {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_coordinator_id: 1,
                next_campaign_id: 1,
                next_launch_id: 1,
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|e| panic!("Mock chain state poisoned: {e}"))
    }

    // ================================================================================================
    // Seeding
    // ================================================================================================

    /// Register `address` as a coordinator without going through a transaction.
    pub fn add_coordinator(&self, address: &str) -> u64 {
        let mut state = self.state();
        state.insert_coordinator(address, CoordinatorDescription::default())
    }

    /// Create a campaign owned by an existing coordinator without a transaction.
    pub fn add_campaign(&self, coordinator_address: &str, campaign_name: &str) -> u64 {
        let mut state = self.state();
        let coordinator_id = state
            .coordinators
            .get(coordinator_address)
            .map(|c| c.coordinator_id)
            .unwrap_or_else(|| panic!("No coordinator for {coordinator_address}"));
        state.insert_campaign(coordinator_id, campaign_name, Vec::new())
    }

    // ================================================================================================
    // Failure injection
    // ================================================================================================

    /// Reject every broadcast of `kind` with `error`.
    pub fn fail_broadcast(&self, kind: MsgKind, error: BroadcastError) {
        self.state().broadcast_failures.insert(kind, error);
    }

    /// Commit `kind` messages but answer with the wrong response type.
    pub fn mismatch_response(&self, kind: MsgKind) {
        self.state().mismatched_responses.insert(kind);
    }

    pub fn fail_coordinator_query(&self, error: QueryError) {
        self.state().coordinator_query_error = Some(error);
    }

    pub fn fail_campaign_query(&self, error: QueryError) {
        self.state().campaign_query_error = Some(error);
    }

    /// Drop all injected failures and mismatches.
    pub fn clear_failures(&self) {
        let mut state = self.state();
        state.broadcast_failures.clear();
        state.mismatched_responses.clear();
        state.coordinator_query_error = None;
        state.campaign_query_error = None;
    }

    /// Cancel `token` right after the first `kind` message is committed.
    pub fn cancel_after(&self, kind: MsgKind, token: CancellationToken) {
        self.state().cancel_after = Some((kind, token));
    }

    // ================================================================================================
    // Inspection
    // ================================================================================================

    pub fn submitted(&self) -> Vec<SubmittedTx> {
        self.state().submitted.clone()
    }

    pub fn submitted_count(&self, kind: MsgKind) -> usize {
        self.state()
            .submitted
            .iter()
            .filter(|tx| MsgKind::of(&tx.msg) == kind)
            .count()
    }

    /// Every submitted chain-creation message, in order.
    pub fn submitted_chains(&self) -> Vec<MsgCreateChain> {
        self.state()
            .submitted
            .iter()
            .filter_map(|tx| match &tx.msg {
                Msg::CreateChain(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn submitted_shares(&self) -> Vec<MsgAddShares> {
        self.state()
            .submitted
            .iter()
            .filter_map(|tx| match &tx.msg {
                Msg::AddShares(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn coordinator(&self, address: &str) -> Option<Coordinator> {
        self.state().coordinators.get(address).cloned()
    }

    pub fn campaign_state(&self, campaign_id: u64) -> Option<Campaign> {
        self.state().campaigns.get(&campaign_id).cloned()
    }

    pub fn launch(&self, launch_id: u64) -> Option<MsgCreateChain> {
        self.state().launches.get(&launch_id).cloned()
    }

    pub fn coordinator_queries(&self) -> Vec<String> {
        self.state().coordinator_queries.clone()
    }

    pub fn campaign_queries(&self) -> Vec<u64> {
        self.state().campaign_queries.clone()
    }
}

impl MockState {
    fn insert_coordinator(&mut self, address: &str, description: CoordinatorDescription) -> u64 {
        let coordinator_id = self.next_coordinator_id;
        self.next_coordinator_id += 1;
        self.coordinators.insert(
            address.to_string(),
            Coordinator {
                coordinator_id,
                address: address.to_string(),
                description,
            },
        );
        coordinator_id
    }

    fn insert_campaign(&mut self, coordinator_id: u64, campaign_name: &str, metadata: Vec<u8>) -> u64 {
        let campaign_id = self.next_campaign_id;
        self.next_campaign_id += 1;
        self.campaigns.insert(
            campaign_id,
            Campaign {
                campaign_id,
                campaign_name: campaign_name.to_string(),
                coordinator_id,
                allocated_shares: Shares::new(),
                metadata,
            },
        );
        campaign_id
    }

    fn coordinator_id(&self, address: &str) -> Result<u64, BroadcastError> {
        self.coordinators
            .get(address)
            .map(|c| c.coordinator_id)
            .ok_or_else(|| rejected(4, format!("coordinator address not found: {address}")))
    }

    fn execute(&mut self, msg: Msg) -> Result<TxResponse, BroadcastError> {
        match msg {
            Msg::CreateCoordinator(MsgCreateCoordinator {
                address,
                description,
            }) => {
                if let Some(existing) = self.coordinators.get(&address) {
                    return Err(rejected(
                        2,
                        format!("coordinator already exists: {}", existing.coordinator_id),
                    ));
                }
                let coordinator_id = self.insert_coordinator(&address, description);
                respond(&MsgCreateCoordinatorResponse { coordinator_id })
            }
            Msg::CreateCampaign(MsgCreateCampaign {
                coordinator,
                campaign_name,
                metadata,
            }) => {
                let coordinator_id = self.coordinator_id(&coordinator)?;
                let campaign_id = self.insert_campaign(coordinator_id, &campaign_name, metadata);
                respond(&MsgCreateCampaignResponse { campaign_id })
            }
            Msg::CreateChain(msg) => {
                self.coordinator_id(&msg.coordinator)?;
                if msg.has_campaign && !self.campaigns.contains_key(&msg.campaign_id) {
                    return Err(rejected(
                        5,
                        format!("campaign not found: {}", msg.campaign_id),
                    ));
                }
                let launch_id = self.next_launch_id;
                self.next_launch_id += 1;
                self.launches.insert(launch_id, msg);
                respond(&MsgCreateChainResponse { launch_id })
            }
            Msg::AddShares(MsgAddShares {
                campaign_id,
                coordinator,
                shares,
                ..
            }) => {
                let coordinator_id = self.coordinator_id(&coordinator)?;
                let campaign = self
                    .campaigns
                    .get_mut(&campaign_id)
                    .ok_or_else(|| rejected(5, format!("campaign not found: {campaign_id}")))?;
                if campaign.coordinator_id != coordinator_id {
                    return Err(rejected(
                        6,
                        format!("coordinator of campaign {campaign_id} is {}", campaign.coordinator_id),
                    ));
                }
                let merged = campaign
                    .allocated_shares
                    .iter()
                    .chain(shares.iter())
                    .cloned();
                campaign.allocated_shares = Shares::from_coins(merged)
                    .map_err(|e| rejected(7, e.to_string()))?;
                respond(&MsgAddSharesResponse {})
            }
        }
    }
}

fn rejected(code: u32, log: impl Into<String>) -> BroadcastError {
    BroadcastError::Rejected {
        code,
        log: log.into(),
    }
}

fn respond<R: MsgResponse>(response: &R) -> Result<TxResponse, BroadcastError> {
    TxResponse::encode(String::new(), response)
        .map_err(|e| BroadcastError::Transport(e.to_string()))
}

#[async_trait]
impl TxBroadcaster for MockCoordinationChain {
    async fn broadcast_tx(&self, signer: &str, msg: Msg) -> Result<TxResponse, BroadcastError> {
        let mut state = self.state();
        let kind = MsgKind::of(&msg);

        state.submitted.push(SubmittedTx {
            signer: signer.to_string(),
            msg: msg.clone(),
        });

        if let Some(error) = state.broadcast_failures.get(&kind) {
            return Err(error.clone());
        }

        let (type_url, response_type_url) = (msg.type_url(), msg.response_type_url());
        let mut res = state.execute(msg)?;
        if res.type_url != response_type_url {
            return Err(BroadcastError::Rejected {
                code: 1,
                log: format!("{type_url} answered with {}", res.type_url),
            });
        }

        state.tx_counter += 1;
        res.tx_hash = format!("{:064X}", state.tx_counter);

        if matches!(&state.cancel_after, Some((after, _)) if *after == kind) {
            if let Some((_, token)) = state.cancel_after.take() {
                token.cancel();
            }
        }

        if state.mismatched_responses.contains(&kind) {
            res.type_url = "/tendermint.spn.Unexpected".to_string();
        }

        Ok(res)
    }
}

#[async_trait]
impl CoordinationQuery for MockCoordinationChain {
    async fn coordinator_by_address(&self, address: &str) -> Result<Coordinator, QueryError> {
        let mut state = self.state();
        state.coordinator_queries.push(address.to_string());

        if let Some(error) = &state.coordinator_query_error {
            return Err(error.clone());
        }
        state
            .coordinators
            .get(address)
            .cloned()
            .ok_or_else(|| QueryError::not_found(format!("coordinator by address {address}")))
    }

    async fn campaign(&self, campaign_id: u64) -> Result<Campaign, QueryError> {
        let mut state = self.state();
        state.campaign_queries.push(campaign_id);

        if let Some(error) = &state.campaign_query_error {
            return Err(error.clone());
        }
        state
            .campaigns
            .get(&campaign_id)
            .cloned()
            .ok_or_else(|| QueryError::not_found(format!("campaign {campaign_id}")))
    }
}
