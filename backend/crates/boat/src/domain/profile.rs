//! Profile Entity
//!
//! The site owner's public profile. Rendered into every view under the
//! `profile` key.

use chrono::{DateTime, Utc};
use kernel::id::ProfileId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: ProfileId::new(),
            name: name.into(),
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
