//! Remote collection abstraction.
//!
//! The controller talks to the remote service only through
//! [`RemoteCollection`], which allows:
//! - an HTTP implementation in the client binary
//! - in-memory fakes for tests

use futures::future::BoxFuture;

use crate::{error::Result, UserFields, UserRecord};

/// The four verbs supported against one fixed collection endpoint.
///
/// Implementations never retry. A list implementation must run its payload
/// through [`crate::shape::decode_list`] before returning records.
pub trait RemoteCollection: Send + Sync {
    /// Fetch every record, in server order.
    fn list(&self) -> BoxFuture<'_, Result<Vec<UserRecord>>>;

    /// Create a record; the remote assigns its id.
    fn create<'a>(&'a self, fields: &'a UserFields) -> BoxFuture<'a, Result<()>>;

    /// Replace the fields of record `id`.
    fn update<'a>(&'a self, id: &'a str, fields: &'a UserFields) -> BoxFuture<'a, Result<()>>;

    /// Remove record `id`.
    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<()>>;
}
