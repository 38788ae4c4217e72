use crate::application::AskQuestion;
use crate::infrastructure::openrouter::ClientConfig;
use deepseek_errors::AppError;

pub struct AppContext {
    pub ask_question: AskQuestion,
}

impl AppContext {
    pub fn from_config(config: ClientConfig) -> Result<Self, AppError> {
        tracing::info!(model = %config.model, endpoint = %config.api_url, "Using OpenRouter backend");
        Ok(Self {
            ask_question: AskQuestion::new(config)?,
        })
    }
}
