//! Wire types for the todo service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned row identifier. Strictly increasing, never reused.
pub type TodoId = i64;

/// A single persisted todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Body accepted by `POST /todos` and `PATCH /todos/{id}`.
///
/// `text` is optional at the serde level so a missing field reaches the
/// handler and is rejected as a validation error rather than a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct TextBody {
    #[serde(default)]
    pub text: Option<String>,
}

impl TextBody {
    /// The raw text if it is present and not blank. Never trims the value.
    pub fn into_valid_text(self) -> Option<String> {
        self.text.filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Summary {
    pub summary: String,
}
