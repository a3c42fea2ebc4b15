//! `TodoStore` over a hosted PostgREST endpoint (the Supabase REST surface).
//!
//! Every write asks for `return=representation` so the affected rows come
//! back in the response. An empty array on update/delete means no row
//! matched the `id=eq.<id>` filter.

use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};

use super::{ListOrder, StoreError, TodoStore};
use crate::model::{Todo, TodoId};

const DEFAULT_TABLE: &str = "todos";

#[derive(Clone, Debug)]
pub struct PostgrestStore {
    http: Client,
    table_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct TextRow<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PostgrestError {
    message: String,
}

impl PostgrestStore {
    /// `base_url` is the project URL, e.g. `https://abc.supabase.co`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self::with_table(base_url, api_key, DEFAULT_TABLE)
    }

    pub fn with_table(base_url: &str, api_key: &str, table: &str) -> Self {
        Self {
            http: Client::new(),
            table_url: format!("{}/rest/v1/{table}", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    fn list_url(&self, order: ListOrder) -> String {
        let column = match order {
            ListOrder::ById => "id",
            ListOrder::ByCreatedAt => "created_at",
        };
        format!("{}?select=*&order={column}.asc", self.table_url)
    }

    fn row_url(&self, id: TodoId) -> String {
        format!("{}?id=eq.{id}", self.table_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    fn returning(&self, builder: RequestBuilder) -> RequestBuilder {
        self.authorized(builder)
            .header("Prefer", "return=representation")
    }

    async fn rows(response: Response) -> Result<Vec<Todo>, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// PostgREST reports errors as `{"message": ...}`; fall back to the raw body.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<PostgrestError>(body)
        .map(|err| err.message)
        .unwrap_or_else(|_| body.to_string())
}

#[async_trait]
impl TodoStore for PostgrestStore {
    async fn list(&self, order: ListOrder) -> Result<Vec<Todo>, StoreError> {
        let response = self
            .authorized(self.http.get(self.list_url(order)))
            .send()
            .await?;
        Self::rows(response).await
    }

    async fn insert(&self, text: &str) -> Result<Todo, StoreError> {
        let response = self
            .returning(self.http.post(&self.table_url))
            .json(&[TextRow { text }])
            .send()
            .await?;
        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("insert returned no rows".to_string()))
    }

    async fn update(&self, id: TodoId, text: &str) -> Result<Option<Todo>, StoreError> {
        let response = self
            .returning(self.http.patch(self.row_url(id)))
            .json(&TextRow { text })
            .send()
            .await?;
        Ok(Self::rows(response).await?.into_iter().next())
    }

    async fn delete(&self, id: TodoId) -> Result<bool, StoreError> {
        let response = self
            .returning(self.http.delete(self.row_url(id)))
            .send()
            .await?;
        Ok(!Self::rows(response).await?.is_empty())
    }
}
