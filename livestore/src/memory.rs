//! In-memory [`LiveStore`] used by tests and local development.
//!
//! Single-threaded by construction (`Rc<RefCell<_>>`), matching the UI event
//! loop the rest of the stack runs on. Mutations synchronously re-deliver
//! full snapshots to every open subscription on the touched collection.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use serde_json::Value;

use crate::document::{Document, sort_documents};
use crate::error::StoreError;
use crate::query::CollectionQuery;
use crate::store::{LiveStore, Snapshot, SnapshotResult, SubscriptionId};

type Callback = Rc<dyn Fn(SnapshotResult)>;

struct QuerySub {
    query: CollectionQuery,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<String, BTreeMap<String, Value>>,
    subs: HashMap<SubscriptionId, QuerySub>,
    denied: HashSet<String>,
    next_id: u64,
}

impl Inner {
    fn evaluate(&self, query: &CollectionQuery) -> Snapshot {
        let mut docs: Vec<Document> = self
            .collections
            .get(&query.collection)
            .map(|coll| {
                coll.iter()
                    .map(|(id, data)| Document {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .filter(|doc| query.selects(doc))
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order_by {
            sort_documents(&mut docs, order);
        }
        Snapshot { docs }
    }
}

/// Cloning shares the same underlying store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document, waking matching subscriptions.
    pub fn put(&self, collection: &str, id: &str, data: Value) {
        {
            let mut inner = self.inner.borrow_mut();
            inner
                .collections
                .entry(collection.to_string())
                .or_default()
                .insert(id.to_string(), data);
        }
        self.notify(collection);
    }

    /// Delete a document, waking matching subscriptions.
    pub fn remove(&self, collection: &str, id: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(coll) = inner.collections.get_mut(collection) {
                coll.remove(id);
            }
        }
        self.notify(collection);
    }

    /// Mark a collection as denied: later `open_query` calls against it
    /// fail with [`StoreError::Denied`].
    pub fn deny(&self, collection: &str) {
        self.inner
            .borrow_mut()
            .denied
            .insert(collection.to_string());
    }

    /// Number of currently open subscriptions.
    pub fn open_subscriptions(&self) -> usize {
        self.inner.borrow().subs.len()
    }

    /// Re-evaluate and deliver snapshots for every subscription on the
    /// collection. Callbacks run after all borrows are released, so a
    /// callback may mutate the store again without panicking.
    fn notify(&self, collection: &str) {
        let pending: Vec<(Callback, Snapshot)> = {
            let inner = self.inner.borrow();
            inner
                .subs
                .values()
                .filter(|sub| sub.query.collection == collection)
                .map(|sub| (sub.callback.clone(), inner.evaluate(&sub.query)))
                .collect()
        };
        for (callback, snapshot) in pending {
            callback(Ok(snapshot));
        }
    }
}

impl LiveStore for MemoryStore {
    fn open_query(
        &self,
        query: CollectionQuery,
        on_snapshot: Box<dyn Fn(SnapshotResult)>,
    ) -> Result<SubscriptionId, StoreError> {
        let callback: Callback = Rc::from(on_snapshot);
        let (id, initial) = {
            let mut inner = self.inner.borrow_mut();
            if inner.denied.contains(&query.collection) {
                tracing::debug!(collection = %query.collection, "query denied");
                return Err(StoreError::Denied {
                    collection: query.collection,
                });
            }

            let initial = inner.evaluate(&query);
            inner.next_id += 1;
            let id = SubscriptionId(inner.next_id);
            inner.subs.insert(
                id,
                QuerySub {
                    query,
                    callback: callback.clone(),
                },
            );
            (id, initial)
        };

        callback(Ok(initial));
        Ok(id)
    }

    fn cancel(&self, id: SubscriptionId) {
        self.inner.borrow_mut().subs.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::query::OrderBy;

    fn snapshots() -> (Rc<RefCell<Vec<Snapshot>>>, Box<dyn Fn(SnapshotResult)>)
    {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (
            log,
            Box::new(move |result| sink.borrow_mut().push(result.unwrap())),
        )
    }

    #[test]
    fn initial_snapshot_is_delivered_before_open_query_returns() {
        let store = MemoryStore::new();
        store.put("appointments", "a1", json!({"itineraryId": "i1"}));

        let (log, callback) = snapshots();
        store
            .open_query(
                CollectionQuery::new("appointments")
                    .filter("itineraryId", json!("i1")),
                callback,
            )
            .unwrap();

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].docs.len(), 1);
    }

    #[test]
    fn snapshots_are_ordered_by_the_query() {
        let store = MemoryStore::new();
        store.put(
            "appointments",
            "late",
            json!({"itineraryId": "i1", "startsAt": "2026-05-02"}),
        );
        store.put(
            "appointments",
            "early",
            json!({"itineraryId": "i1", "startsAt": "2026-05-01"}),
        );

        let (log, callback) = snapshots();
        store
            .open_query(
                CollectionQuery::new("appointments")
                    .filter("itineraryId", json!("i1"))
                    .order_by(OrderBy::asc("startsAt")),
                callback,
            )
            .unwrap();

        let ids: Vec<_> =
            log.borrow()[0].docs.iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, ["early", "late"]);
    }

    #[test]
    fn cancel_unknown_id_is_a_noop() {
        let store = MemoryStore::new();
        store.cancel(SubscriptionId(42));
    }

    #[test]
    fn cancelled_subscription_is_released() {
        let store = MemoryStore::new();
        let (log, callback) = snapshots();
        let id = store
            .open_query(
                CollectionQuery::new("doctorNotes")
                    .filter("appointmentId", json!("A1")),
                callback,
            )
            .unwrap();
        assert_eq!(store.open_subscriptions(), 1);

        store.cancel(id);
        store.cancel(id);
        assert_eq!(store.open_subscriptions(), 0);

        store.put("doctorNotes", "n1", json!({"appointmentId": "A1"}));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn mutations_on_other_collections_do_not_wake_subscription() {
        let store = MemoryStore::new();
        let (log, callback) = snapshots();
        store
            .open_query(
                CollectionQuery::new("doctorNotes")
                    .filter("appointmentId", json!("A1")),
                callback,
            )
            .unwrap();

        store.put("prescriptions", "p1", json!({"appointmentId": "A1"}));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn non_matching_change_still_redelivers_the_current_set() {
        // The store invalidates per collection, so a write that does not
        // match the filter re-delivers the same (correct) set.
        let store = MemoryStore::new();
        let (log, callback) = snapshots();
        store
            .open_query(
                CollectionQuery::new("doctorNotes")
                    .filter("appointmentId", json!("A1")),
                callback,
            )
            .unwrap();

        store.put("doctorNotes", "other", json!({"appointmentId": "A2"}));
        assert_eq!(log.borrow().len(), 2);
        assert!(log.borrow()[1].docs.is_empty());
    }

    #[test]
    fn callback_may_mutate_the_store_reentrantly() {
        let store = MemoryStore::new();
        let inner_store = store.clone();
        let wrote = Rc::new(RefCell::new(false));
        let wrote_flag = wrote.clone();

        store
            .open_query(
                CollectionQuery::new("doctorNotes")
                    .filter("appointmentId", json!("A1")),
                Box::new(move |result| {
                    let snapshot = result.unwrap();
                    if snapshot.docs.len() == 1 && !*wrote_flag.borrow() {
                        *wrote_flag.borrow_mut() = true;
                        inner_store.put(
                            "audit",
                            "seen",
                            json!({"count": 1}),
                        );
                    }
                }),
            )
            .unwrap();

        store.put("doctorNotes", "n1", json!({"appointmentId": "A1"}));
        assert!(*wrote.borrow());
    }
}
