use serde::{Deserialize, Serialize};

use crate::shared::MemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: Option<String>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Roster entry whose display name was never filled in.
    pub fn unnamed(id: MemberId) -> Self {
        Self { id, name: None }
    }

    pub fn id(&self) -> &MemberId {
        &self.id
    }

    /// Trimmed display name, `None` when absent or blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
