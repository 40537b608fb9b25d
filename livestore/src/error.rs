use thiserror::Error;

/// Failures surfaced by a live store.
///
/// There is no retry logic at this level; if the store rejects a query the
/// error is delivered once and the subscription is dead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store refused the query (permissions or unknown field path).
    #[error("access to collection `{collection}` was denied")]
    Denied { collection: String },

    /// The live connection dropped and will not recover on its own.
    #[error("live connection lost: {reason}")]
    ConnectionLost { reason: String },

    /// The store could not open the query at all.
    #[error("failed to open live query: {reason}")]
    Backend { reason: String },
}
