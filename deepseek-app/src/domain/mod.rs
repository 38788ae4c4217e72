mod chat_completion;
mod chat_message;

pub use chat_completion::ChatCompletion;
pub use chat_message::{ChatMessage, Role};
