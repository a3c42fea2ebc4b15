//! Text-completion capability used by `POST /summarize`.

mod openai;

pub use openai::{
    OpenAiConfig, OpenAiSummarizer, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
};

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Todo;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("completion API returned no content")]
    Empty,
}

/// Turns a prompt into generated text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError>;
}

/// Number the items in the given order under a fixed instruction line.
pub fn build_prompt(todos: &[Todo]) -> String {
    let lines: Vec<String> = todos
        .iter()
        .enumerate()
        .map(|(i, todo)| format!("{}. {}", i + 1, todo.text))
        .collect();
    format!(
        "Please summarize the following to-do list:\n{}",
        lines.join("\n")
    )
}
