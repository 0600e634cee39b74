use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// Prefix carried by every share denomination on the coordination chain.
pub const SHARE_DENOM_PREFIX: &str = "s/";

const MIN_DENOM_LEN: usize = 3;
const MAX_DENOM_LEN: usize = 128;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharesError {
    #[error("Invalid coin expression: {0:?}")]
    InvalidCoin(String),

    #[error("Invalid denomination: {0:?}")]
    InvalidDenom(String),

    #[error("Share amount overflow for denomination {0}")]
    Overflow(String),
}

/// A single-denomination amount.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = SharesError;

    /// Parses `<amount><denom>`, e.g. `1000stake` or `25s/foo`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| SharesError::InvalidCoin(s.to_string()))?;
        if split == 0 {
            return Err(SharesError::InvalidCoin(s.to_string()));
        }

        let (amount, denom) = s.split_at(split);
        let amount = amount
            .parse::<u128>()
            .map_err(|_| SharesError::InvalidCoin(s.to_string()))?;
        validate_denom(denom)?;

        Ok(Coin::new(denom, amount))
    }
}

/// Ownership shares of a campaign.
///
/// Always normalized: denominations carry [`SHARE_DENOM_PREFIX`], are sorted and
/// unique, and zero amounts are dropped. An empty set is valid and means "no
/// allocation".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coin>", into = "Vec<Coin>")]
pub struct Shares(Vec<Coin>);

impl Shares {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build shares from plain coins, adding the share prefix where missing and
    /// summing duplicate denominations.
    pub fn from_coins(coins: impl IntoIterator<Item = Coin>) -> Result<Self, SharesError> {
        let mut merged: BTreeMap<String, u128> = BTreeMap::new();

        for coin in coins {
            validate_denom(&coin.denom)?;
            // The prefixed form is what goes on the wire and must stay in bounds too.
            let denom = share_denom(&coin.denom);
            validate_denom(&denom)?;
            let entry = merged.entry(denom.clone()).or_default();
            *entry = entry
                .checked_add(coin.amount)
                .ok_or(SharesError::Overflow(denom))?;
        }

        Ok(Self(
            merged
                .into_iter()
                .filter(|(_, amount)| *amount > 0)
                .map(|(denom, amount)| Coin { denom, amount })
                .collect(),
        ))
    }

    /// Parse the comma-separated form, e.g. `1000foo,500s/bar`.
    pub fn parse(s: &str) -> Result<Self, SharesError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::new());
        }

        let coins = s
            .split(',')
            .map(Coin::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_coins(coins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    /// Amount held for `denom`, which may be given with or without the share prefix.
    pub fn amount_of(&self, denom: &str) -> u128 {
        let denom = share_denom(denom);
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or(0)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coin) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}

impl FromStr for Shares {
    type Err = SharesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shares::parse(s)
    }
}

impl TryFrom<Vec<Coin>> for Shares {
    type Error = SharesError;

    fn try_from(coins: Vec<Coin>) -> Result<Self, Self::Error> {
        Shares::from_coins(coins)
    }
}

impl From<Shares> for Vec<Coin> {
    fn from(shares: Shares) -> Self {
        shares.0
    }
}

fn share_denom(denom: &str) -> String {
    if denom.starts_with(SHARE_DENOM_PREFIX) {
        denom.to_string()
    } else {
        format!("{SHARE_DENOM_PREFIX}{denom}")
    }
}

fn validate_denom(denom: &str) -> Result<(), SharesError> {
    let valid_len = (MIN_DENOM_LEN..=MAX_DENOM_LEN).contains(&denom.len());
    let mut chars = denom.chars();
    let valid_first = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

    if valid_len && valid_first && valid_rest {
        Ok(())
    } else {
        Err(SharesError::InvalidDenom(denom.to_string()))
    }
}
