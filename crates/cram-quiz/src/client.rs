//! Chat-completion client for the supported providers.
//!
//! One plain-text round trip per call. The base URL is overridable so tests
//! can point the client at a mock server.

use std::time::Duration;

use cram::Verdict;
use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{Config, Provider};
use crate::error::{Error, Result};

const OPENAI_URL: &str = "https://api.openai.com/v1";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1";

/// Default timeout for model calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// System message framing every request.
const SYSTEM_MESSAGE: &str =
    "You are a helpful assistant generating questions and evaluating responses for a user \
     training with flashcards. Ask good questions, and evaluate each response solely in the \
     context of the question asked. Respond with only what the user asks for.";

/// A client for one configured provider and model.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: Client,
    base_url: String,
    provider: Provider,
    api_key: String,
    model: String,
}

impl ModelClient {
    /// Create a client against the provider's production endpoint.
    pub fn new(config: &Config) -> Self {
        Self::builder(config).build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder(config: &Config) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// Ask the model for a question that tests `content`.
    pub async fn question(&self, deck_name: &str, content: &str) -> Result<String> {
        let prompt = format!(
            "The user is practicing remembering things stored in a deck called {deck_name}. \
             Respond with a question that tests whether the user knows the following \
             information: {content}"
        );
        self.complete(&prompt).await
    }

    /// Ask the model to grade `response` against the question it asked.
    pub async fn evaluate(&self, question: &str, content: &str, response: &str) -> Result<Verdict> {
        let prompt = format!(
            "Evaluate the response to the following question, which was asked to test the \
             user's knowledge. Reply with only a JSON object of the form \
             {{\"remembered\": true or false, \"correction\": \"a correct response, only when \
             remembered is false\"}}.\n\n\
             KNOWLEDGE TO TEST: {content}\n\n\
             QUESTION: {question}\n\n\
             RESPONSE: {response}"
        );
        let reply = self.complete(&prompt).await?;
        parse_verdict(&reply)
    }

    /// One chat round trip in the provider's wire format.
    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!(provider = %self.provider, model = %self.model, "model call");

        let response = match self.provider {
            Provider::OpenAi => {
                let body = json!({
                    "model": self.model,
                    "messages": [
                        {"role": "system", "content": SYSTEM_MESSAGE},
                        {"role": "user", "content": prompt},
                    ],
                });
                self.http
                    .post(format!("{}/chat/completions", self.base_url))
                    .bearer_auth(&self.api_key)
                    .json(&body)
                    .send()
                    .await
            }
            Provider::Anthropic => {
                let body = json!({
                    "model": self.model,
                    "max_tokens": 1024,
                    "system": SYSTEM_MESSAGE,
                    "messages": [{"role": "user", "content": prompt}],
                });
                self.http
                    .post(format!("{}/messages", self.base_url))
                    .header("x-api-key", &self.api_key)
                    .header("anthropic-version", "2023-06-01")
                    .json(&body)
                    .send()
                    .await
            }
        }
        .map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        let text = match self.provider {
            Provider::OpenAi => body["choices"][0]["message"]["content"].as_str(),
            Provider::Anthropic => body["content"][0]["text"].as_str(),
        };
        match text {
            Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            _ => Err(Error::EmptyReply),
        }
    }
}

/// Builder for creating a customized [`ModelClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: Option<String>,
    provider: Provider,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl ClientBuilder {
    fn new(config: &Config) -> Self {
        Self {
            base_url: None,
            provider: config.provider,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the provider's base URL (test seam).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Defaults to 60 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> ModelClient {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");
        let base_url = self.base_url.unwrap_or_else(|| {
            match self.provider {
                Provider::OpenAi => OPENAI_URL,
                Provider::Anthropic => ANTHROPIC_URL,
            }
            .to_string()
        });

        ModelClient {
            http,
            base_url,
            provider: self.provider,
            api_key: self.api_key,
            model: self.model,
        }
    }
}

/// Parse the model's verdict reply, tolerating markdown code fences.
fn parse_verdict(reply: &str) -> Result<Verdict> {
    serde_json::from_str(strip_fences(reply))
        .map_err(|_| Error::MalformedVerdict(reply.to_string()))
}

fn strip_fences(reply: &str) -> &str {
    let reply = reply.trim();
    let reply = reply
        .strip_prefix("```json")
        .or_else(|| reply.strip_prefix("```"))
        .unwrap_or(reply);
    reply.strip_suffix("```").unwrap_or(reply).trim()
}
