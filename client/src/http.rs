//! HTTP implementation of the remote collection.
//!
//! GET lists, POST creates, PUT `/{id}` updates, DELETE `/{id}` removes.
//! Any non-2xx status is a transport failure carrying the code.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, RequestBuilder, Url};
use roster_engine::error::Result;
use roster_engine::{shape, Error, RemoteCollection, UserFields, UserRecord};
use tracing::debug;

/// Client for one fixed collection URL.
#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: Client,
    base_url: Url,
}

impl HttpCollection {
    /// Build a collection client whose requests are bounded by `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// URL of a single record: the id appended as one encoded path segment.
    pub fn item_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    async fn fetch_list(&self) -> Result<Vec<UserRecord>> {
        debug!(url = %self.base_url, "Fetching users");
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        shape::decode_list_bytes(&body)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), "Write completed");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::status(status.as_u16()))
        }
    }
}

impl RemoteCollection for HttpCollection {
    fn list(&self) -> BoxFuture<'_, Result<Vec<UserRecord>>> {
        self.fetch_list().boxed()
    }

    fn create<'a>(&'a self, fields: &'a UserFields) -> BoxFuture<'a, Result<()>> {
        debug!(url = %self.base_url, "Creating user");
        let request = self.client.post(self.base_url.clone()).json(fields);
        self.execute(request).boxed()
    }

    fn update<'a>(&'a self, id: &'a str, fields: &'a UserFields) -> BoxFuture<'a, Result<()>> {
        let url = self.item_url(id);
        debug!(%url, "Updating user");
        let request = self.client.put(url).json(fields);
        self.execute(request).boxed()
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<()>> {
        let url = self.item_url(id);
        debug!(%url, "Deleting user");
        let request = self.client.delete(url);
        self.execute(request).boxed()
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    match err.status() {
        Some(status) => Error::status(status.as_u16()),
        None if err.is_timeout() => Error::network("request timed out"),
        None => Error::network(err.to_string()),
    }
}
