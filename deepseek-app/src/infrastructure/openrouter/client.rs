use super::config::ClientConfig;
use super::types::ChatCompletionRequest;
use deepseek_errors::AppError;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Instant;

pub struct OpenRouterClient {
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl OpenRouterClient {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Posts `request` once and returns the JSON body of a 200 response.
    ///
    /// Any other status becomes [`AppError::Status`]; its body is never parsed.
    pub async fn dispatch(&self, request: &ChatCompletionRequest) -> Result<Value, AppError> {
        let started = Instant::now();
        tracing::debug!(
            endpoint = %self.config.api_url,
            model = %request.model,
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(&self.config.api_url)
            .header(AUTHORIZATION, self.config.api_key.bearer())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        tracing::info!(
            status = status.as_u16(),
            elapsed = ?started.elapsed(),
            "OpenRouter responded"
        );

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!("OpenRouter error: {} - {}", status, body);
            return Err(AppError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))
    }
}

fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::warn!("OpenRouter request timed out");
        AppError::Timeout
    } else {
        tracing::warn!("OpenRouter request failed: {}", err);
        AppError::Transport(err.to_string())
    }
}
