use async_trait::async_trait;
use chain_launch_types::{Campaign, Coordinator};
use std::fmt;
use thiserror::Error;

/// Classification of a failed query.
///
/// `NotFound` is the one kind callers branch on; everything else is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryErrorKind {
    /// The requested resource does not exist on chain.
    NotFound,
    /// The request itself was malformed (bad address, zero id, ...).
    InvalidArgument,
    /// The node could not be reached or timed out.
    Unavailable,
    Internal,
}

impl fmt::Display for QueryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            QueryErrorKind::NotFound => "not found",
            QueryErrorKind::InvalidArgument => "invalid argument",
            QueryErrorKind::Unavailable => "unavailable",
            QueryErrorKind::Internal => "internal error",
        };
        f.write_str(kind)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Query {kind}: {message}")]
pub struct QueryError {
    pub kind: QueryErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: QueryErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::NotFound, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::InvalidArgument, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(QueryErrorKind::Unavailable, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == QueryErrorKind::NotFound
    }
}

/// Read access to coordination-chain state.
#[async_trait]
pub trait CoordinationQuery: Send + Sync {
    /// Look up the coordinator registered for `address`.
    async fn coordinator_by_address(&self, address: &str) -> Result<Coordinator, QueryError>;

    async fn campaign(&self, campaign_id: u64) -> Result<Campaign, QueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_classified_by_kind_not_message() {
        let err = QueryError::new(QueryErrorKind::NotFound, "key spn1abc");
        assert!(err.is_not_found());

        let err = QueryError::unavailable("coordinator not found in cache");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = QueryError::invalid_argument("campaign id 0");
        assert_eq!(err.to_string(), "Query invalid argument: campaign id 0");
    }
}
