//! Persistence capability for todo items.
//!
//! # Design
//! Handlers only see `dyn TodoStore`. Any backend that can list, insert,
//! update and delete rows by id can sit behind it: `MemoryStore` for tests
//! and local runs, `PostgrestStore` for the hosted table.

mod memory;
mod postgrest;

pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Todo, TodoId};

/// Column a listing is sorted on. Always ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListOrder {
    ById,
    ByCreatedAt,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("store returned an unexpected payload: {0}")]
    Decode(String),

    #[error("no ids left to assign")]
    IdsExhausted,
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self, order: ListOrder) -> Result<Vec<Todo>, StoreError>;

    /// Insert a row; the store assigns `id` and `created_at`.
    async fn insert(&self, text: &str) -> Result<Todo, StoreError>;

    /// Replace the text of row `id`. `None` when no row matches.
    async fn update(&self, id: TodoId, text: &str) -> Result<Option<Todo>, StoreError>;

    /// Remove row `id`. `false` when no row matches.
    async fn delete(&self, id: TodoId) -> Result<bool, StoreError>;
}
