mod messages;
mod shares;
mod state;

pub use messages::*;
pub use shares::{Coin, Shares, SharesError, SHARE_DENOM_PREFIX};
pub use state::{Campaign, Coordinator};

/// Address prefix of accounts on the coordination chain.
pub const SPN_PREFIX: &str = "spn";
