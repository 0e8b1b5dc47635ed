//! User record types exchanged with the remote collection.

use crate::{RecordId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// A user as stored by the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Identifier assigned by the remote on creation
    #[serde(deserialize_with = "deserialize_id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub department: String,
    /// Creation time as reported by the remote, passed through verbatim
    #[serde(default, deserialize_with = "deserialize_text")]
    pub created_at: Timestamp,
}

impl UserRecord {
    /// The editable fields of this record.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
        }
    }
}

/// Editable record fields, sent as the body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
}

impl UserFields {
    /// Create a field set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            department: department.into(),
        }
    }
}

/// Ids are opaque strings, but some services emit them as JSON numbers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Text fields tolerate `null` (read as empty) and non-string scalars such
/// as epoch-second timestamps (read as their JSON text).
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
