#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to reach the API: {0}")]
    Transport(String),

    #[error("Request timeout")]
    Timeout,

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl AppError {
    /// Non-success statuses are reported to the user and the run ends normally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Status(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Config(msg) => format!("Configuration error: {}", msg),
            Self::Transport(_) => "Could not connect to the API. Check your network.".to_string(),
            Self::Timeout => "The API took too long to answer.".to_string(),
            Self::Status(code) => {
                format!("Failed to fetch data from API. Status Code: {}", code)
            }
            Self::Decode(_) => "The API answered with a malformed response.".to_string(),
        }
    }
}
