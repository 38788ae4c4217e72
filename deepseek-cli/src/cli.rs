use clap::Parser;
use deepseek_app::infrastructure::openrouter::{ClientConfig, API_URL_VAR, MODEL_VAR, TIMEOUT_VAR};
use deepseek_errors::AppError;

pub const DEFAULT_PROMPT: &str = "What is the meaning of life?";

/// Send one chat-completion request to OpenRouter and print the response.
///
/// The API key is read from OPENROUTER_API_KEY (a `.env` file works too).
#[derive(Debug, Parser)]
#[command(name = "deepseek-ask", version, about)]
pub struct Cli {
    /// Prompt sent as a single user message
    #[arg(default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Model identifier, overrides OPENROUTER_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// Chat completions endpoint, overrides OPENROUTER_API_URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in seconds, overrides OPENROUTER_TIMEOUT_SECS
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print only the text of the first choice instead of the full JSON body
    #[arg(long)]
    pub content_only: bool,
}

impl Cli {
    pub fn client_config(&self) -> Result<ClientConfig, AppError> {
        self.client_config_with(|name| std::env::var(name).ok())
    }

    /// Resolves every setting once: a flag wins, otherwise `env` is consulted.
    /// An environment value shadowed by a flag is never parsed.
    pub fn client_config_with<F>(&self, env: F) -> Result<ClientConfig, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ClientConfig::from_lookup(|name| self.flag_value(name).or_else(|| env(name)))
    }

    fn flag_value(&self, name: &str) -> Option<String> {
        match name {
            API_URL_VAR => self.api_url.clone(),
            MODEL_VAR => self.model.clone(),
            TIMEOUT_VAR => self.timeout_secs.map(|secs| secs.to_string()),
            _ => None,
        }
    }
}
