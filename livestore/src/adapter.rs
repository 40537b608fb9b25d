//! Typed subscribe adapter: turns a [`CollectionQuery`] into decoded result
//! sets delivered through a caller-supplied callback, with a cancellation
//! guard owning the underlying listener.

use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;
use crate::query::CollectionQuery;
use crate::store::{LiveStore, Snapshot, SubscriptionId};

/// One delivery on the typed channel: the full decoded result set, or a
/// store-side failure.
pub type LiveUpdate<T> = Result<Vec<T>, StoreError>;

/// Owns one live subscription. Cancelling (or dropping) the guard releases
/// the store listener; after `cancel()` returns no further updates are
/// delivered. Cancelling twice is a no-op.
pub struct SubscriptionGuard {
    store: Option<Rc<dyn LiveStore>>,
    id: Cell<Option<SubscriptionId>>,
}

impl SubscriptionGuard {
    /// Guard for a short-circuited subscription that never touched the store.
    fn inert() -> Self {
        Self {
            store: None,
            id: Cell::new(None),
        }
    }

    fn live(store: Rc<dyn LiveStore>, id: SubscriptionId) -> Self {
        Self {
            store: Some(store),
            id: Cell::new(Some(id)),
        }
    }

    /// Stop the subscription. Idempotent.
    pub fn cancel(&self) {
        if let (Some(store), Some(id)) = (&self.store, self.id.take()) {
            store.cancel(id);
        }
    }

    /// True while the store-side listener is still open.
    pub fn is_live(&self) -> bool {
        self.id.get().is_some()
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Open a live query and deliver decoded updates to `on_update`.
///
/// An unkeyed query (no document id, no filter value — the parent record is
/// still loading) never contacts the store: one empty update is delivered
/// synchronously and the returned guard is inert. Otherwise the first update
/// arrives with the store's initial snapshot, and again after every matching
/// change, always carrying the full ordered result set.
///
/// A query that the store rejects surfaces as a single `Err` on the channel.
pub fn subscribe<T, F>(
    store: Rc<dyn LiveStore>,
    query: CollectionQuery,
    on_update: F,
) -> SubscriptionGuard
where
    T: DeserializeOwned + 'static,
    F: Fn(LiveUpdate<T>) + 'static,
{
    if query.is_unkeyed() {
        tracing::debug!(
            collection = %query.collection,
            "parent key not yet known; resolving to an empty result set"
        );
        on_update(Ok(Vec::new()));
        return SubscriptionGuard::inert();
    }

    let on_update = Rc::new(on_update);
    let collection = query.collection.clone();

    let callback = {
        let on_update = on_update.clone();
        Box::new(move |result: crate::store::SnapshotResult| match result {
            Ok(snapshot) => {
                on_update(Ok(decode_snapshot::<T>(&collection, snapshot)))
            }
            Err(err) => on_update(Err(err)),
        })
    };

    match store.open_query(query, callback) {
        Ok(id) => SubscriptionGuard::live(store, id),
        Err(err) => {
            on_update(Err(err));
            SubscriptionGuard::inert()
        }
    }
}

/// Decode every document in a snapshot. The store keeps the document id
/// outside the body, so it is spliced in under `"id"` before decoding,
/// unless the body already carries one. Documents that fail to decode are
/// logged and skipped.
fn decode_snapshot<T: DeserializeOwned>(
    collection: &str,
    snapshot: Snapshot,
) -> Vec<T> {
    let mut out = Vec::with_capacity(snapshot.docs.len());
    for doc in snapshot.docs {
        let Document { id, mut data } = doc;
        if let Some(body) = data.as_object_mut() {
            body.entry("id".to_string())
                .or_insert_with(|| Value::String(id.clone()));
        }
        match serde_json::from_value(data) {
            Ok(decoded) => out.push(decoded),
            Err(err) => tracing::warn!(
                collection,
                doc_id = %id,
                %err,
                "skipping document that failed to decode"
            ),
        }
    }
    out
}
