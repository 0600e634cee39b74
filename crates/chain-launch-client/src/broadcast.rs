use async_trait::async_trait;
use chain_launch_types::{Msg, MsgResponse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from submitting a transaction. Never retried by callers in this workspace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    #[error("Transaction rejected with code {code}: {log}")]
    Rejected { code: u32, log: String },

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors from decoding a confirmed transaction's response.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Response type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Malformed {type_url} response: {source}")]
    Malformed {
        type_url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The opaque result of a confirmed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxResponse {
    pub tx_hash: String,

    /// Type URL of the encoded response body.
    pub type_url: String,

    /// JSON-encoded response body.
    pub data: Vec<u8>,
}

impl TxResponse {
    /// Encode a typed response, as a broadcaster does after confirmation.
    pub fn encode<R: MsgResponse>(
        tx_hash: impl Into<String>,
        response: &R,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            tx_hash: tx_hash.into(),
            type_url: R::TYPE_URL.to_string(),
            data: serde_json::to_vec(response)?,
        })
    }

    pub fn decode<R: MsgResponse>(&self) -> Result<R, DecodeError> {
        if self.type_url != R::TYPE_URL {
            return Err(DecodeError::TypeMismatch {
                expected: R::TYPE_URL,
                found: self.type_url.clone(),
            });
        }

        serde_json::from_slice(&self.data).map_err(|source| DecodeError::Malformed {
            type_url: self.type_url.clone(),
            source,
        })
    }
}

/// Signs, submits and confirms a single message on the coordination chain.
#[async_trait]
pub trait TxBroadcaster: Send + Sync {
    /// `signer` is the account name used to look up signing keys.
    async fn broadcast_tx(&self, signer: &str, msg: Msg) -> Result<TxResponse, BroadcastError>;
}
