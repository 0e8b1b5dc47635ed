//! Collection state - what the presentation renders.

use crate::UserRecord;

/// Coarse controller state derived from [`CollectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase<'a> {
    Idle,
    /// A list fetch is outstanding
    Loading,
    /// An error message is waiting to be dismissed
    Error(&'a str),
}

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// In-memory state owned by a single [`crate::SyncController`].
///
/// `items` is only ever replaced wholesale by a successful list fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    pub(crate) items: Vec<UserRecord>,
    pub(crate) edit_target: Option<UserRecord>,
    pub(crate) loading: bool,
    pub(crate) error_message: Option<String>,
}

impl CollectionState {
    /// Empty state: no items, no edit target, not loading, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records from the last successful fetch, in server order.
    pub fn items(&self) -> &[UserRecord] {
        &self.items
    }

    /// The record being edited, if any.
    pub fn edit_target(&self) -> Option<&UserRecord> {
        self.edit_target.as_ref()
    }

    /// True while a list fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The active error message, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Look up a displayed record by id.
    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.items.iter().find(|r| r.id == id)
    }

    pub fn phase(&self) -> Phase<'_> {
        if self.loading {
            Phase::Loading
        } else if let Some(msg) = &self.error_message {
            Phase::Error(msg)
        } else {
            Phase::Idle
        }
    }

    pub fn form_mode(&self) -> FormMode {
        match self.edit_target {
            Some(_) => FormMode::Edit,
            None => FormMode::Create,
        }
    }
}
