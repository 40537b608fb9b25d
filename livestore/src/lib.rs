//! Live subscriptions over an external real-time document store.
//!
//! The store itself is an external collaborator reached through the
//! [`LiveStore`] trait: it accepts a [`CollectionQuery`] and pushes full,
//! ordered [`Snapshot`]s whenever matching data changes. This crate owns the
//! client-side half of that contract:
//!
//! - the query and document model ([`CollectionQuery`], [`Document`]),
//! - the typed [`subscribe`] adapter, which decodes snapshots and hands the
//!   caller a cancellation guard,
//! - [`MemoryStore`], a single-threaded in-memory implementation used by
//!   tests and local development.
//!
//! Everything here assumes the single-threaded UI event loop: callbacks are
//! not `Send`, and a subscription lives until its guard is cancelled or
//! dropped.

pub mod adapter;
pub mod document;
pub mod error;
pub mod memory;
pub mod query;
pub mod store;

pub use adapter::{LiveUpdate, SubscriptionGuard, subscribe};
pub use document::{Document, compare_values, field_value, sort_documents};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use query::{CollectionQuery, FieldFilter, OrderBy, OrderDirection};
pub use store::{LiveStore, Snapshot, SnapshotResult, SubscriptionId};
