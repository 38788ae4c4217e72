mod client;
mod config;
mod types;

pub use client::OpenRouterClient;
pub use config::{
    ApiKey, ClientConfig, API_KEY_VAR, API_URL_VAR, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    MODEL_VAR, OPENROUTER_API_URL, TIMEOUT_VAR,
};
pub use types::ChatCompletionRequest;
