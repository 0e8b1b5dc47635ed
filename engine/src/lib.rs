//! # Roster Engine
//!
//! Client-side synchronization for a single remote collection of user
//! records.
//!
//! The engine fetches the collection, proxies create/update/delete calls to
//! the remote, and keeps an in-memory view that always mirrors the last
//! successful list response.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine only sees the remote through [`RemoteCollection`]
//! - **Refetch-on-mutate**: every successful write is followed by a full
//!   list fetch; local state is never patched incrementally
//! - **Errors stop at the controller**: failures become one dismissible
//!   message and the controller stays usable
//!
//! ## Core Concepts
//!
//! - [`UserRecord`] / [`UserFields`] - the record and its editable fields
//! - [`shape::decode_list`] - rejects list payloads that are not arrays
//! - [`CollectionState`] - items, edit target, loading flag, error message
//! - [`SyncController`] - refresh, save, remove, edit, dismiss
//! - [`Confirm`] - synchronous yes/no gate consulted before a delete
//!
//! ## Quick Start
//!
//! ```rust
//! use roster_engine::shape;
//! use serde_json::json;
//!
//! let records = shape::decode_list(json!([{"id": "1", "name": "Ann"}])).unwrap();
//! assert_eq!(records[0].name, "Ann");
//!
//! assert!(shape::decode_list(json!({})).is_err());
//! ```

pub mod confirm;
pub mod controller;
pub mod error;
pub mod record;
pub mod remote;
pub mod shape;
pub mod state;

// Re-export main types at crate root
pub use confirm::Confirm;
pub use controller::{Intent, SyncController, DELETE_PROMPT};
pub use error::Error;
pub use record::{UserFields, UserRecord};
pub use remote::RemoteCollection;
pub use state::{CollectionState, FormMode, Phase};

/// Type aliases for clarity
pub type RecordId = String;
pub type Timestamp = String;
