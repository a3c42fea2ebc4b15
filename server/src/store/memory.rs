use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ListOrder, StoreError, TodoStore};
use crate::model::{Todo, TodoId};

#[derive(Debug, Default)]
struct Table {
    last_id: TodoId,
    rows: BTreeMap<TodoId, Todo>,
}

/// In-process table. Clones share the same rows.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the table with existing rows. Ids handed out afterwards continue
    /// past the largest seeded id.
    pub fn with_rows(rows: impl IntoIterator<Item = Todo>) -> Self {
        let mut table = Table::default();
        for row in rows {
            table.last_id = table.last_id.max(row.id);
            table.rows.insert(row.id, row);
        }
        Self {
            table: Arc::new(RwLock::new(table)),
        }
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self, order: ListOrder) -> Result<Vec<Todo>, StoreError> {
        let table = self.table.read().await;
        let mut rows: Vec<Todo> = table.rows.values().cloned().collect();
        if order == ListOrder::ByCreatedAt {
            // stable: equal timestamps keep id order
            rows.sort_by_key(|todo| todo.created_at);
        }
        Ok(rows)
    }

    async fn insert(&self, text: &str) -> Result<Todo, StoreError> {
        let mut table = self.table.write().await;
        let id = table.last_id.checked_add(1).ok_or(StoreError::IdsExhausted)?;
        table.last_id = id;
        let todo = Todo {
            id,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        table.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: TodoId, text: &str) -> Result<Option<Todo>, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|todo| {
            todo.text = text.to_string();
            todo.clone()
        }))
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}
