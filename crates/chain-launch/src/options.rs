use chain_launch_types::Shares;

/// Parameters of a single publish call.
///
/// Built from [`PublishOptions::default`] by applying [`PublishOption`]s; every
/// option sets exactly one field, so options touching different fields commute
/// and reapplying an option is harmless (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    genesis_url: String,
    chain_id: String,
    campaign_id: u64,
    no_check: bool,
    shares: Shares,
}

/// A single field setter for [`PublishOptions`], built with the `with_*` functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOption {
    ChainId(String),
    Campaign(u64),
    NoCheck,
    CustomGenesis(String),
    Shares(Shares),
}

/// Use a custom chain id instead of the one derived from the chain.
pub fn with_chain_id(chain_id: impl Into<String>) -> PublishOption {
    PublishOption::ChainId(chain_id.into())
}

/// Attach the launch to an existing campaign. The campaign must already exist;
/// it is never created under a given id.
pub fn with_campaign(campaign_id: u64) -> PublishOption {
    PublishOption::Campaign(campaign_id)
}

/// Skip chain integrity checks. Combined with [`with_custom_genesis`], the
/// genesis is fetched to compute its hash.
pub fn with_no_check() -> PublishOption {
    PublishOption::NoCheck
}

/// Use a custom genesis file.
pub fn with_custom_genesis(url: impl Into<String>) -> PublishOption {
    PublishOption::CustomGenesis(url.into())
}

/// Initial shares to allocate to the coordinator once the chain is launched.
pub fn with_shares(shares: Shares) -> PublishOption {
    PublishOption::Shares(shares)
}

impl PublishOptions {
    pub fn from_options(options: impl IntoIterator<Item = PublishOption>) -> Self {
        let mut o = Self::default();
        for option in options {
            o.apply(option);
        }
        o
    }

    pub fn apply(&mut self, option: PublishOption) {
        match option {
            PublishOption::ChainId(chain_id) => self.chain_id = chain_id,
            PublishOption::Campaign(campaign_id) => self.campaign_id = campaign_id,
            PublishOption::NoCheck => self.no_check = true,
            PublishOption::CustomGenesis(url) => self.genesis_url = url,
            PublishOption::Shares(shares) => self.shares = shares,
        }
    }

    /// Custom genesis URL; empty when none was given.
    pub fn genesis_url(&self) -> &str {
        &self.genesis_url
    }

    /// Custom chain id; empty when the chain's own id should be used.
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Existing campaign id; 0 when a new campaign should be created.
    pub fn campaign_id(&self) -> u64 {
        self.campaign_id
    }

    pub fn no_check(&self) -> bool {
        self.no_check
    }

    pub fn shares(&self) -> &Shares {
        &self.shares
    }
}
