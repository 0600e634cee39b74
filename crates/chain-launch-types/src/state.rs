use crate::{CoordinatorDescription, Shares};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinator {
    /// Sequential id assigned by the profile module.
    pub coordinator_id: u64,

    /// Account address that registered as coordinator.
    pub address: String,

    pub description: CoordinatorDescription,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: u64,

    pub campaign_name: String,

    /// Owning coordinator.
    pub coordinator_id: u64,

    /// Shares allocated so far, summed across all holders.
    pub allocated_shares: Shares,

    pub metadata: Vec<u8>,
}
