//! Chat-completion backend for `Summarizer`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{SummarizeError, Summarizer};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 150;

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    /// Upper bound on generated tokens per summary.
    pub max_tokens: u32,
}

impl OpenAiConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone, Debug)]
pub struct OpenAiSummarizer {
    http: Client,
    config: OpenAiConfig,
}

impl OpenAiSummarizer {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn request<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.config.max_tokens,
        }
    }
}

fn first_choice(response: ChatResponse) -> Result<String, SummarizeError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(SummarizeError::Empty)
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&self.request(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        first_choice(response.json::<ChatResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_model_prompt_and_token_cap() {
        let summarizer = OpenAiSummarizer::new(OpenAiConfig::new("sk-test"));
        let body = serde_json::to_value(summarizer.request("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{ "role": "user", "content": "hello" }],
                "max_tokens": 150,
            })
        );
    }

    #[test]
    fn endpoint_joins_base_url() {
        let mut config = OpenAiConfig::new("k");
        config.base_url = "http://localhost:8080/v1/".to_string();
        let summarizer = OpenAiSummarizer::new(config);
        assert_eq!(summarizer.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn first_choice_is_returned() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":" Two errands. "}},{"message":{"content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice(response).unwrap(), " Two errands. ");
    }

    #[test]
    fn no_choices_is_an_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(first_choice(response), Err(SummarizeError::Empty)));
    }

    #[test]
    fn null_content_is_an_error() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(matches!(first_choice(response), Err(SummarizeError::Empty)));
    }

    // --- over HTTP against a local completion endpoint ---

    use axum::{
        http::{header, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };

    /// Serve `router` on a random local port and return its `/v1` base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await });
        format!("http://{addr}/v1")
    }

    fn summarizer(base_url: String) -> OpenAiSummarizer {
        let mut config = OpenAiConfig::new("sk-test");
        config.base_url = base_url;
        config.max_tokens = 42;
        OpenAiSummarizer::new(config)
    }

    /// Answers only well-formed requests; anything else gets a 400 naming the problem.
    async fn completions(headers: HeaderMap, Json(body): Json<serde_json::Value>) -> (StatusCode, String) {
        if !headers.get(header::AUTHORIZATION).is_some_and(|v| v == "Bearer sk-test") {
            return (StatusCode::UNAUTHORIZED, "missing bearer".to_string());
        }
        if body["max_tokens"] != 42 || body["messages"][0]["role"] != "user" {
            return (StatusCode::BAD_REQUEST, body.to_string());
        }
        let content = body["messages"][0]["content"].as_str().unwrap_or_default();
        let reply = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": format!("echo: {content}") } }]
        });
        (StatusCode::OK, reply.to_string())
    }

    #[tokio::test]
    async fn summarize_posts_chat_request() {
        let base = serve(Router::new().route("/v1/chat/completions", post(completions))).await;
        let text = summarizer(base).summarize("1. Buy milk").await.unwrap();
        assert_eq!(text, "echo: 1. Buy milk");
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
        );
        let base = serve(router).await;

        let err = summarizer(base).summarize("1. Buy milk").await.unwrap_err();
        assert!(
            matches!(err, SummarizeError::Rejected { status: 429, ref body } if body == "slow down"),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn null_content_over_http_is_an_error() {
        let router = Router::new().route(
            "/v1/chat/completions",
            post(|| async { r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"# }),
        );
        let base = serve(router).await;

        let err = summarizer(base).summarize("1. Buy milk").await.unwrap_err();
        assert!(matches!(err, SummarizeError::Empty), "{err:?}");
    }
}
