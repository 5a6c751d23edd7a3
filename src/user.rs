//! User record and its document layout.
//!
//! A user is a flat, task-like record: a name, an optional body of text and a
//! completion flag. Documents are stored under the field names below so that
//! collections written by other clients decode without migration.

use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Seconds from the Unix epoch back to 0001-01-01T00:00:00Z.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

/// A single record in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default = "zero_time", with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "zero_time", with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl User {
    /// Build a fresh, not yet persisted user with a new id.
    ///
    /// Timestamps are left at the zero time and `completed` is false.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(User {
            id: ObjectId::new(),
            name,
            created_at: zero_time(),
            updated_at: zero_time(),
            text: String::new(),
            completed: false,
        })
    }
}

/// Reject names that cannot be stored.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    Ok(())
}

/// The "unset" timestamp: 0001-01-01T00:00:00Z.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ZERO_TIME_SECS, 0).unwrap_or_default()
}
