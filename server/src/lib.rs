//! HTTP service for a single shared todo list.
//!
//! # Overview
//! Axum router exposing CRUD over todo items plus an AI summary of the whole
//! list. Persistence and text generation sit behind the `TodoStore` and
//! `Summarizer` traits, so handlers never name a concrete backend.
//!
//! # Design
//! - `AppState` is cheap to clone: two `Arc<dyn …>` handles.
//! - Errors flow through `AppError`, which owns the status mapping and the
//!   "log the cause, send a generic message" rule for dependency failures.
//! - Panics are caught at the router edge and rendered as a plain 500.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod summarizer;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    response::Response,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub use error::{AppError, ErrorBody};
pub use model::{Message, Summary, Todo, TodoId};
pub use store::{ListOrder, MemoryStore, PostgrestStore, StoreError, TodoStore};
pub use summarizer::{OpenAiConfig, OpenAiSummarizer, SummarizeError, Summarizer};

pub const JSON_UTF8: &str = "application/json; charset=utf-8";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static, summarizer: impl Summarizer + 'static) -> Self {
        Self {
            store: Arc::new(store),
            summarizer: Arc::new(summarizer),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/todos", get(routes::list_todos).post(routes::create_todo))
        .route(
            "/todos/{id}",
            patch(routes::update_todo).delete(routes::delete_todo),
        )
        .route("/summarize", post(routes::summarize))
        .layer(CatchPanicLayer::custom(routes::handle_panic))
        .layer(middleware::map_response(json_charset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Allow a single browser origin, the four verbs the API uses, and
/// `Content-Type`.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, header::InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(origin)?)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn json_charset(mut response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == b"application/json");
    if is_json {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8));
    }
    response
}
