//! Process configuration: flags with environment-variable fallbacks.

use std::net::SocketAddr;

use clap::Parser;

use crate::summarizer::{OpenAiConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Debug, Parser)]
#[command(name = "todo-server", version, about = "Todo list API with AI summaries")]
pub struct Config {
    /// Hosted database project URL. Without it rows live in memory.
    #[arg(long, env = "SUPABASE_URL")]
    pub database_url: Option<String>,

    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub database_key: Option<String>,

    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub completion_api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub completion_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    pub completion_model: String,

    /// Token cap for each generated summary.
    #[arg(long, env = "SUMMARY_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The only browser origin allowed by CORS.
    #[arg(long, env = "CORS_ORIGIN", default_value = DEFAULT_CORS_ORIGIN)]
    pub cors_origin: String,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn completion(&self) -> OpenAiConfig {
        OpenAiConfig {
            base_url: self.completion_base_url.clone(),
            api_key: self.completion_api_key.clone().unwrap_or_default(),
            model: self.completion_model.clone(),
            max_tokens: self.max_tokens,
        }
    }

    /// Log what was loaded without printing any credential.
    pub fn log_summary(&self) {
        tracing::info!(
            database_url = self.database_url.as_deref().unwrap_or("<in-memory>"),
            database_key = present(&self.database_key),
            completion_key = present(&self.completion_api_key),
            model = %self.completion_model,
            max_tokens = self.max_tokens,
            "configuration loaded"
        );
        if self.database_url.is_none() {
            tracing::warn!("SUPABASE_URL is not set; todos will not survive a restart");
        }
        if self.completion_api_key.is_none() {
            tracing::warn!("OPENAI_API_KEY is not set; /summarize will fail");
        }
    }
}

fn present(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "yes"
    } else {
        "no"
    }
}
