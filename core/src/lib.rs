//! Client-side core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), tracks what a todo UI shows
//! as an immutable `ViewState`, and computes a local word-frequency summary
//! that needs no server.
//!
//! # Design
//! - `TodoClient` is stateless: it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `ViewState::apply` maps discrete actions to the next state; the host
//!   dispatches actions as user input and responses arrive.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod summary;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{Action, Alert, EditMode, Submission, ViewState};
pub use summary::{heuristic_summary, top_keywords, LocalSummarizer, PendingSummary};
pub use types::{CreateTodo, Message, Summary, Todo, TodoId, UpdateTodo};
