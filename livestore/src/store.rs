//! The contract an external real-time document store must satisfy.

use crate::document::Document;
use crate::error::StoreError;
use crate::query::CollectionQuery;

/// Store-issued token identifying one open live query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// A full, ordered, current result set. Stores always push the complete
/// matching set, never a diff.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub docs: Vec<Document>,
}

/// What flows through the snapshot channel: either a fresh snapshot or a
/// store-side failure (denied query, dead connection).
pub type SnapshotResult = Result<Snapshot, StoreError>;

/// A real-time document store that can hold open queries.
///
/// Callbacks are invoked on the UI event loop; implementations are not
/// required to be `Send`. Snapshots for one subscription arrive in the order
/// the store produced them. After [`LiveStore::cancel`] returns, the
/// callback for that id must not fire again.
pub trait LiveStore {
    /// Open a live query and start delivering snapshots. Implementations
    /// deliver the initial snapshot as soon as it is available; they may do
    /// so synchronously, before this call returns.
    fn open_query(
        &self,
        query: CollectionQuery,
        on_snapshot: Box<dyn Fn(SnapshotResult)>,
    ) -> Result<SubscriptionId, StoreError>;

    /// Release the listener for `id`. Unknown or already-cancelled ids are
    /// ignored.
    fn cancel(&self, id: SubscriptionId);
}
