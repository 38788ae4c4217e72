use crate::domain::ChatCompletion;
use crate::infrastructure::openrouter::{ChatCompletionRequest, ClientConfig, OpenRouterClient};
use deepseek_errors::AppError;

pub struct AskQuestion {
    client: OpenRouterClient,
}

impl AskQuestion {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        Ok(Self {
            client: OpenRouterClient::new(config)?,
        })
    }

    pub fn model(&self) -> &str {
        &self.client.config().model
    }

    /// Sends `prompt` as a single user turn and returns the raw completion.
    pub async fn execute(&self, prompt: &str) -> Result<ChatCompletion, AppError> {
        let request = ChatCompletionRequest::single_turn(self.model(), prompt);
        let body = self.client.dispatch(&request).await?;
        Ok(ChatCompletion::new(body))
    }
}
