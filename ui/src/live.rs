//! Wiring to the external live document store.
//!
//! [`StoreHandle`] is what components and hooks see: an injected
//! `Rc<dyn LiveStore>` provided through Yew context, compared by identity so
//! it is cheap to use as a hook dependency. [`EventSourceStore`] is the
//! production implementation, speaking the store gateway's server-sent-event
//! protocol: one `EventSource` per open query, each message carrying the
//! full current result set as JSON.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use livestore::{
    CollectionQuery, Document, LiveStore, Snapshot, SnapshotResult,
    StoreError, SubscriptionId,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{EventSource, MessageEvent};

/// Context handle for the live store. Equality is identity, so hook
/// dependency tuples stay stable across renders.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn LiveStore>);

impl StoreHandle {
    pub fn new(store: Rc<dyn LiveStore>) -> Self {
        Self(store)
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

struct LiveStream {
    source: EventSource,
    // Kept alive for as long as the browser may call them.
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

/// [`LiveStore`] backed by the store gateway's SSE endpoint.
pub struct EventSourceStore {
    base_url: String,
    streams: RefCell<HashMap<SubscriptionId, LiveStream>>,
    next_id: Cell<u64>,
}

impl EventSourceStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            streams: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Gateway address from the build environment, falling back to the
    /// page's own origin.
    pub fn from_window_origin() -> Self {
        let base = option_env!("STORE_URL")
            .map(|url| url.to_string())
            .unwrap_or_else(|| {
                let window = web_sys::window().unwrap();
                window.location().origin().unwrap()
            });
        Self::new(base)
    }

    fn stream_url(&self, query: &CollectionQuery) -> String {
        let mut params = Vec::new();
        if let Some(id) = &query.doc_id {
            params.push(format!("doc={}", uri_encode(id)));
        } else if let Some(filter) = &query.filter {
            params.push(format!("field={}", uri_encode(&filter.field)));
            params.push(format!(
                "value={}",
                uri_encode(&filter.value.to_string())
            ));
        }
        if let Some(order) = &query.order_by {
            params.push(format!("order={}", uri_encode(&order.field)));
            params.push(format!("dir={}", order.direction.as_str()));
        }

        let mut url =
            format!("{}/live/{}", self.base_url, query.collection);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }
}

fn uri_encode(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

impl LiveStore for EventSourceStore {
    fn open_query(
        &self,
        query: CollectionQuery,
        on_snapshot: Box<dyn Fn(SnapshotResult)>,
    ) -> Result<SubscriptionId, StoreError> {
        let url = self.stream_url(&query);
        let source = EventSource::new(&url).map_err(|err| {
            StoreError::Backend {
                reason: format!("{err:?}"),
            }
        })?;

        let on_snapshot: Rc<dyn Fn(SnapshotResult)> = Rc::from(on_snapshot);
        let collection = query.collection.clone();

        let on_message = {
            let on_snapshot = on_snapshot.clone();
            let collection = collection.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(
                move |event: MessageEvent| {
                    let Some(text) = event.data().as_string() else {
                        return;
                    };
                    match serde_json::from_str::<Vec<Document>>(&text) {
                        Ok(docs) => on_snapshot(Ok(Snapshot { docs })),
                        Err(err) => tracing::warn!(
                            %collection,
                            %err,
                            "dropping malformed snapshot frame"
                        ),
                    }
                },
            )
        };

        // EventSource reconnects on its own; only a CLOSED stream is fatal.
        let on_error = {
            let on_snapshot = on_snapshot.clone();
            let source = source.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(
                move |_event: web_sys::Event| {
                    if source.ready_state() == EventSource::CLOSED {
                        on_snapshot(Err(StoreError::ConnectionLost {
                            reason: format!(
                                "stream for `{collection}` closed"
                            ),
                        }));
                    }
                },
            )
        };

        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        self.next_id.set(self.next_id.get() + 1);
        let id = SubscriptionId(self.next_id.get());
        self.streams.borrow_mut().insert(
            id,
            LiveStream {
                source,
                _on_message: on_message,
                _on_error: on_error,
            },
        );
        tracing::debug!(%url, ?id, "opened live query stream");
        Ok(id)
    }

    fn cancel(&self, id: SubscriptionId) {
        if let Some(stream) = self.streams.borrow_mut().remove(&id) {
            stream.source.set_onmessage(None);
            stream.source.set_onerror(None);
            stream.source.close();
            tracing::debug!(?id, "closed live query stream");
        }
    }
}
