//! Sync controller - orchestrates remote calls over the collection state.
//!
//! Every successful mutation is followed by a full list refetch; the
//! controller never merges a create, update, or delete into `items` locally.
//! Failures stop here: they become the single user-visible error message and
//! the controller stays usable.

use tracing::{debug, warn};

use crate::{
    CollectionState, Confirm, Error, RecordId, RemoteCollection, UserFields, UserRecord,
};

/// Prompt shown by the confirmation gate before a delete.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this user?";

const LOAD_FAILED: &str = "Failed to load users";
const SAVE_FAILED: &str = "Failed to save user";
const DELETE_FAILED: &str = "Failed to delete user";

/// A user intent relayed by the presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Edit(UserRecord),
    Delete(RecordId),
    Submit(UserFields),
    CancelEdit,
    Refresh,
    DismissError,
}

/// Owns the [`CollectionState`] and drives a [`RemoteCollection`].
#[derive(Debug)]
pub struct SyncController<R, C> {
    remote: R,
    confirm: C,
    state: CollectionState,
}

impl<R: RemoteCollection, C: Confirm> SyncController<R, C> {
    /// Create a controller in the initial `Idle` state.
    pub fn new(remote: R, confirm: C) -> Self {
        Self {
            remote,
            confirm,
            state: CollectionState::new(),
        }
    }

    /// Current render inputs.
    pub fn state(&self) -> &CollectionState {
        &self.state
    }

    /// Reload the whole collection.
    ///
    /// On failure `items` is cleared rather than left stale.
    pub async fn refresh(&mut self) {
        self.state.loading = true;
        self.state.error_message = None;

        match self.remote.list().await {
            Ok(items) => {
                debug!(count = items.len(), "Collection loaded");
                self.state.items = items;
            }
            Err(e) => {
                self.state.items.clear();
                self.fail(LOAD_FAILED, &e);
            }
        }

        self.state.loading = false;
    }

    /// Create a record, or update the edit target if one is set.
    ///
    /// Returns whether the remote accepted the write. On failure the edit
    /// target is kept so the user can retry.
    pub async fn save(&mut self, fields: UserFields) -> bool {
        self.state.error_message = None;

        let result = match &self.state.edit_target {
            Some(target) => self.remote.update(&target.id, &fields).await,
            None => self.remote.create(&fields).await,
        };

        match result {
            Ok(()) => {
                self.state.edit_target = None;
                self.refresh().await;
                true
            }
            Err(e) => {
                self.fail(SAVE_FAILED, &e);
                false
            }
        }
    }

    /// Delete a record after the confirmation gate approves.
    ///
    /// Returns `false` if the user declined; nothing is sent in that case.
    pub async fn remove(&mut self, id: &str) -> bool {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(id, "Delete declined");
            return false;
        }

        self.state.error_message = None;
        match self.remote.delete(id).await {
            Ok(()) => self.refresh().await,
            Err(e) => self.fail(DELETE_FAILED, &e),
        }
        true
    }

    pub fn begin_edit(&mut self, record: UserRecord) {
        self.state.edit_target = Some(record);
    }

    pub fn cancel_edit(&mut self) {
        self.state.edit_target = None;
    }

    pub fn dismiss_error(&mut self) {
        self.state.error_message = None;
    }

    /// Route a presentation intent to its operation.
    pub async fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Edit(record) => self.begin_edit(record),
            Intent::Delete(id) => {
                self.remove(&id).await;
            }
            Intent::Submit(fields) => {
                self.save(fields).await;
            }
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Refresh => self.refresh().await,
            Intent::DismissError => self.dismiss_error(),
        }
    }

    fn fail(&mut self, prefix: &str, err: &Error) {
        warn!(status = ?err.status_code(), "{}: {}", prefix, err);
        self.state.error_message = Some(format!("{prefix}: {err}"));
    }
}
